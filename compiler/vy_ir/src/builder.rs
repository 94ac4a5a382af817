//! Programmatic construction of syntax trees.
//!
//! Used by collaborators that synthesize code and throughout the tests.
//! Every node gets its own span (a one-byte range on a fresh line), so a
//! replacement's provenance can be checked against the node it replaced.

use num_bigint::BigInt;

use crate::error::TreeError;
use crate::kind::NodeKind;
use crate::literal::{Decimal, Literal};
use crate::operators::{BinaryOp, BoolOpKind, CmpOp, UnaryOp};
use crate::{NodeId, Span, SyntaxTree};

/// Builds a [`SyntaxTree`] bottom-up.
///
/// Expression and statement methods return parentless nodes; pass a
/// statement to [`stmt`](Self::stmt) to append it to the module body.
#[derive(Debug, Default)]
pub struct TreeBuilder {
    tree: SyntaxTree,
    next: u32,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_span(&mut self) -> Span {
        let at = self.next;
        self.next += 1;
        Span::new(at, at + 1, at + 1, 0)
    }

    fn node(&mut self, kind: NodeKind) -> NodeId {
        let span = self.next_span();
        self.tree.alloc(kind, span)
    }

    /// Any literal value.
    pub fn literal(&mut self, lit: Literal) -> NodeId {
        self.node(NodeKind::Literal(lit))
    }

    // Literals

    pub fn int(&mut self, value: impl Into<BigInt>) -> NodeId {
        self.literal(Literal::Int(value.into()))
    }

    pub fn decimal(&mut self, value: Decimal) -> NodeId {
        self.literal(Literal::Decimal(value))
    }

    pub fn hex(&mut self, text: &str) -> NodeId {
        self.literal(Literal::Hex(text.to_owned()))
    }

    pub fn boolean(&mut self, value: bool) -> NodeId {
        self.literal(Literal::Bool(value))
    }

    pub fn string(&mut self, value: &str) -> NodeId {
        self.literal(Literal::Str(value.to_owned()))
    }

    pub fn bytes(&mut self, value: &[u8]) -> NodeId {
        self.literal(Literal::Bytes(value.to_vec()))
    }

    // Expressions

    pub fn name(&mut self, id: &str) -> NodeId {
        self.node(NodeKind::Name { id: id.to_owned() })
    }

    pub fn list(&mut self, elements: Vec<NodeId>) -> NodeId {
        self.node(NodeKind::List { elements })
    }

    pub fn dict(&mut self, entries: Vec<(NodeId, NodeId)>) -> NodeId {
        let (keys, values) = entries.into_iter().unzip();
        self.node(NodeKind::Dict { keys, values })
    }

    /// `name(args)` with a plain-name callee.
    pub fn call(&mut self, name: &str, args: Vec<NodeId>) -> NodeId {
        let func = self.name(name);
        self.call_node(func, args)
    }

    /// Call with an arbitrary callee expression.
    pub fn call_node(&mut self, func: NodeId, args: Vec<NodeId>) -> NodeId {
        self.node(NodeKind::Call { func, args })
    }

    pub fn attribute(&mut self, value: NodeId, attr: &str) -> NodeId {
        self.node(NodeKind::Attribute {
            value,
            attr: attr.to_owned(),
        })
    }

    pub fn binop(&mut self, left: NodeId, op: BinaryOp, right: NodeId) -> NodeId {
        self.node(NodeKind::BinOp { left, op, right })
    }

    pub fn unary(&mut self, op: UnaryOp, operand: NodeId) -> NodeId {
        self.node(NodeKind::UnaryOp { op, operand })
    }

    pub fn boolop(&mut self, op: BoolOpKind, values: Vec<NodeId>) -> NodeId {
        self.node(NodeKind::BoolOp { op, values })
    }

    pub fn compare(&mut self, left: NodeId, op: CmpOp, right: NodeId) -> NodeId {
        self.node(NodeKind::Compare { left, op, right })
    }

    /// `value[index]`; the index is wrapped in an `Index` node.
    pub fn subscript(&mut self, value: NodeId, index: NodeId) -> NodeId {
        let slice = self.node(NodeKind::Index { value: index });
        self.node(NodeKind::Subscript { value, slice })
    }

    // Statements

    pub fn ann_assign(
        &mut self,
        target: NodeId,
        annotation: NodeId,
        value: Option<NodeId>,
    ) -> NodeId {
        self.node(NodeKind::AnnAssign {
            target,
            annotation,
            value,
        })
    }

    /// `name: constant(type_ann) = value`. A missing annotation produces
    /// `constant()`.
    pub fn constant(&mut self, name: &str, type_ann: Option<NodeId>, value: NodeId) -> NodeId {
        let target = self.name(name);
        let annotation = self.call("constant", type_ann.into_iter().collect());
        self.ann_assign(target, annotation, Some(value))
    }

    pub fn assign(&mut self, target: NodeId, value: NodeId) -> NodeId {
        self.node(NodeKind::Assign { target, value })
    }

    pub fn aug_assign(&mut self, target: NodeId, op: BinaryOp, value: NodeId) -> NodeId {
        self.node(NodeKind::AugAssign { target, op, value })
    }

    pub fn expr_stmt(&mut self, value: NodeId) -> NodeId {
        self.node(NodeKind::Expr { value })
    }

    pub fn function_def(&mut self, name: &str, body: Vec<NodeId>) -> NodeId {
        self.node(NodeKind::FunctionDef {
            name: name.to_owned(),
            body,
        })
    }

    pub fn ret(&mut self, value: Option<NodeId>) -> NodeId {
        self.node(NodeKind::Return { value })
    }

    /// Append a statement to the module body.
    pub fn stmt(&mut self, stmt: NodeId) -> Result<&mut Self, TreeError> {
        self.tree.push_stmt(stmt)?;
        Ok(self)
    }

    /// The tree built so far.
    pub fn tree(&self) -> &SyntaxTree {
        &self.tree
    }

    pub fn finish(self) -> SyntaxTree {
        self.tree
    }
}
