//! Node variants of the syntax tree.
//!
//! Every child reference is a [`NodeId`] owned by the parent's variant; the
//! tree's parent links are derived from these fields when a node is
//! allocated and kept in sync by the replacement primitive.

use crate::literal::Literal;
use crate::operators::{BinaryOp, BoolOpKind, CmpOp, UnaryOp};
use crate::NodeId;

/// A syntax node's variant and children.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum NodeKind {
    /// Root of the tree; ordered top-level statements.
    Module { body: Vec<NodeId> },
    /// `def name(): body`
    FunctionDef { name: String, body: Vec<NodeId> },
    /// `return value`
    Return { value: Option<NodeId> },
    /// Expression statement.
    Expr { value: NodeId },
    /// `target: annotation = value`
    AnnAssign {
        target: NodeId,
        annotation: NodeId,
        value: Option<NodeId>,
    },
    /// `target = value`
    Assign { target: NodeId, value: NodeId },
    /// `target op= value`
    AugAssign {
        target: NodeId,
        op: BinaryOp,
        value: NodeId,
    },
    /// Bare identifier reference.
    Name { id: String },
    /// `value.attr`
    Attribute { value: NodeId, attr: String },
    /// Scalar literal.
    Literal(Literal),
    /// `[elements]`
    List { elements: Vec<NodeId> },
    /// `{keys[0]: values[0], ...}`; `keys` and `values` have equal length.
    Dict {
        keys: Vec<NodeId>,
        values: Vec<NodeId>,
    },
    /// `func(args)`
    Call { func: NodeId, args: Vec<NodeId> },
    BinOp {
        left: NodeId,
        op: BinaryOp,
        right: NodeId,
    },
    UnaryOp { op: UnaryOp, operand: NodeId },
    BoolOp { op: BoolOpKind, values: Vec<NodeId> },
    Compare {
        left: NodeId,
        op: CmpOp,
        right: NodeId,
    },
    /// `value[slice]`; `slice` is an `Index` node.
    Subscript { value: NodeId, slice: NodeId },
    /// Index expression wrapper inside a `Subscript`.
    Index { value: NodeId },
}

/// Data-free discriminant of [`NodeKind`], used to filter traversals.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum NodeTag {
    Module,
    FunctionDef,
    Return,
    Expr,
    AnnAssign,
    Assign,
    AugAssign,
    Name,
    Attribute,
    Literal,
    List,
    Dict,
    Call,
    BinOp,
    UnaryOp,
    BoolOp,
    Compare,
    Subscript,
    Index,
}

impl NodeKind {
    pub const fn tag(&self) -> NodeTag {
        match self {
            NodeKind::Module { .. } => NodeTag::Module,
            NodeKind::FunctionDef { .. } => NodeTag::FunctionDef,
            NodeKind::Return { .. } => NodeTag::Return,
            NodeKind::Expr { .. } => NodeTag::Expr,
            NodeKind::AnnAssign { .. } => NodeTag::AnnAssign,
            NodeKind::Assign { .. } => NodeTag::Assign,
            NodeKind::AugAssign { .. } => NodeTag::AugAssign,
            NodeKind::Name { .. } => NodeTag::Name,
            NodeKind::Attribute { .. } => NodeTag::Attribute,
            NodeKind::Literal(_) => NodeTag::Literal,
            NodeKind::List { .. } => NodeTag::List,
            NodeKind::Dict { .. } => NodeTag::Dict,
            NodeKind::Call { .. } => NodeTag::Call,
            NodeKind::BinOp { .. } => NodeTag::BinOp,
            NodeKind::UnaryOp { .. } => NodeTag::UnaryOp,
            NodeKind::BoolOp { .. } => NodeTag::BoolOp,
            NodeKind::Compare { .. } => NodeTag::Compare,
            NodeKind::Subscript { .. } => NodeTag::Subscript,
            NodeKind::Index { .. } => NodeTag::Index,
        }
    }

    /// Name of a `Name` node.
    pub fn name_id(&self) -> Option<&str> {
        match self {
            NodeKind::Name { id } => Some(id),
            _ => None,
        }
    }

    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            NodeKind::Literal(lit) => Some(lit),
            _ => None,
        }
    }

    /// Children in document (source) order.
    ///
    /// Dictionary entries interleave as `key, value, key, value`, which is
    /// the order they appear in source.
    pub fn children(&self) -> Vec<NodeId> {
        match self {
            NodeKind::Module { body } | NodeKind::FunctionDef { body, .. } => body.clone(),
            NodeKind::Return { value } => value.iter().copied().collect(),
            NodeKind::Expr { value } | NodeKind::Index { value } => vec![*value],
            NodeKind::Attribute { value, .. } => vec![*value],
            NodeKind::AnnAssign {
                target,
                annotation,
                value,
            } => {
                let mut out = vec![*target, *annotation];
                out.extend(value.iter().copied());
                out
            }
            NodeKind::Assign { target, value } | NodeKind::AugAssign { target, value, .. } => {
                vec![*target, *value]
            }
            NodeKind::Name { .. } | NodeKind::Literal(_) => Vec::new(),
            NodeKind::List { elements } => elements.clone(),
            NodeKind::Dict { keys, values } => keys
                .iter()
                .zip(values)
                .flat_map(|(k, v)| [*k, *v])
                .collect(),
            NodeKind::Call { func, args } => {
                let mut out = Vec::with_capacity(args.len() + 1);
                out.push(*func);
                out.extend_from_slice(args);
                out
            }
            NodeKind::BinOp { left, right, .. } | NodeKind::Compare { left, right, .. } => {
                vec![*left, *right]
            }
            NodeKind::UnaryOp { operand, .. } => vec![*operand],
            NodeKind::BoolOp { values, .. } => values.clone(),
            NodeKind::Subscript { value, slice } => vec![*value, *slice],
        }
    }

    /// Mutable child slots, in no particular order.
    fn child_slots_mut(&mut self) -> Vec<&mut NodeId> {
        match self {
            NodeKind::Module { body } | NodeKind::FunctionDef { body, .. } => {
                body.iter_mut().collect()
            }
            NodeKind::Return { value } => value.iter_mut().collect(),
            NodeKind::Expr { value }
            | NodeKind::Index { value }
            | NodeKind::Attribute { value, .. } => vec![value],
            NodeKind::AnnAssign {
                target,
                annotation,
                value,
            } => {
                let mut out = vec![target, annotation];
                out.extend(value.iter_mut());
                out
            }
            NodeKind::Assign { target, value } | NodeKind::AugAssign { target, value, .. } => {
                vec![target, value]
            }
            NodeKind::Name { .. } | NodeKind::Literal(_) => Vec::new(),
            NodeKind::List { elements } => elements.iter_mut().collect(),
            NodeKind::Dict { keys, values } => keys.iter_mut().chain(values.iter_mut()).collect(),
            NodeKind::Call { func, args } => std::iter::once(func).chain(args.iter_mut()).collect(),
            NodeKind::BinOp { left, right, .. } | NodeKind::Compare { left, right, .. } => {
                vec![left, right]
            }
            NodeKind::UnaryOp { operand, .. } => vec![operand],
            NodeKind::BoolOp { values, .. } => values.iter_mut().collect(),
            NodeKind::Subscript { value, slice } => vec![value, slice],
        }
    }

    /// Point the slot holding `old` at `new`. Returns `false` if `old` is
    /// not a child of this node.
    pub(crate) fn replace_child(&mut self, old: NodeId, new: NodeId) -> bool {
        match self.child_slots_mut().into_iter().find(|slot| **slot == old) {
            Some(slot) => {
                *slot = new;
                true
            }
            None => false,
        }
    }
}
