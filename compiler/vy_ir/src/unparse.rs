//! Source-like rendering of a subtree.
//!
//! The output is for tests and diagnostics; it is not guaranteed to
//! re-parse. Nested operator expressions are always parenthesized, so
//! `(1 + 2) * 3` and `1 + (2 * 3)` render unambiguously.

use std::fmt::Write;

use crate::kind::NodeKind;
use crate::stack::ensure_sufficient_stack;
use crate::{NodeId, SyntaxTree};

const INDENT: &str = "    ";

impl SyntaxTree {
    /// Render the subtree rooted at `id` as source text.
    pub fn unparse(&self, id: NodeId) -> String {
        let mut out = String::new();
        Printer { tree: self }.node(id, &mut out);
        out
    }
}

struct Printer<'t> {
    tree: &'t SyntaxTree,
}

impl Printer<'_> {
    fn node(&self, id: NodeId, out: &mut String) {
        ensure_sufficient_stack(|| self.node_inner(id, out));
    }

    fn node_inner(&self, id: NodeId, out: &mut String) {
        match self.tree.kind(id) {
            NodeKind::Module { body } => self.block(body, "", out),
            NodeKind::FunctionDef { name, body } => {
                let _ = writeln!(out, "def {name}():");
                self.block(body, INDENT, out);
            }
            NodeKind::Return { value } => {
                out.push_str("return");
                if let Some(value) = value {
                    out.push(' ');
                    self.node(*value, out);
                }
            }
            NodeKind::Expr { value } | NodeKind::Index { value } => self.node(*value, out),
            NodeKind::AnnAssign {
                target,
                annotation,
                value,
            } => {
                self.node(*target, out);
                out.push_str(": ");
                self.node(*annotation, out);
                if let Some(value) = value {
                    out.push_str(" = ");
                    self.node(*value, out);
                }
            }
            NodeKind::Assign { target, value } => {
                self.node(*target, out);
                out.push_str(" = ");
                self.node(*value, out);
            }
            NodeKind::AugAssign { target, op, value } => {
                self.node(*target, out);
                let _ = write!(out, " {}= ", op.as_symbol());
                self.node(*value, out);
            }
            NodeKind::Name { id } => out.push_str(id),
            NodeKind::Attribute { value, attr } => {
                self.node(*value, out);
                out.push('.');
                out.push_str(attr);
            }
            NodeKind::Literal(lit) => {
                let _ = write!(out, "{lit}");
            }
            NodeKind::List { elements } => {
                out.push('[');
                self.comma_separated(elements, out);
                out.push(']');
            }
            NodeKind::Dict { keys, values } => {
                out.push('{');
                for (i, (key, value)) in keys.iter().zip(values).enumerate() {
                    if i > 0 {
                        out.push_str(", ");
                    }
                    self.node(*key, out);
                    out.push_str(": ");
                    self.node(*value, out);
                }
                out.push('}');
            }
            NodeKind::Call { func, args } => {
                self.node(*func, out);
                out.push('(');
                self.comma_separated(args, out);
                out.push(')');
            }
            NodeKind::BinOp { left, op, right } => {
                self.operand(*left, out);
                let _ = write!(out, " {} ", op.as_symbol());
                self.operand(*right, out);
            }
            NodeKind::UnaryOp { op, operand } => {
                out.push_str(op.as_symbol());
                self.operand(*operand, out);
            }
            NodeKind::BoolOp { op, values } => {
                for (i, value) in values.iter().enumerate() {
                    if i > 0 {
                        let _ = write!(out, " {} ", op.as_symbol());
                    }
                    self.operand(*value, out);
                }
            }
            NodeKind::Compare { left, op, right } => {
                self.operand(*left, out);
                let _ = write!(out, " {} ", op.as_symbol());
                self.operand(*right, out);
            }
            NodeKind::Subscript { value, slice } => {
                self.operand(*value, out);
                out.push('[');
                self.node(*slice, out);
                out.push(']');
            }
        }
    }

    /// Operand of an operator; wrapped in parentheses if it is itself an
    /// operator expression.
    fn operand(&self, id: NodeId, out: &mut String) {
        let nested = matches!(
            self.tree.kind(id),
            NodeKind::BinOp { .. }
                | NodeKind::UnaryOp { .. }
                | NodeKind::BoolOp { .. }
                | NodeKind::Compare { .. }
        );
        if nested {
            out.push('(');
            self.node(id, out);
            out.push(')');
        } else {
            self.node(id, out);
        }
    }

    fn comma_separated(&self, ids: &[NodeId], out: &mut String) {
        for (i, id) in ids.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            self.node(*id, out);
        }
    }

    /// One statement per line, each line prefixed with `indent`.
    fn block(&self, body: &[NodeId], indent: &str, out: &mut String) {
        for (i, stmt) in body.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            let mut text = String::new();
            self.node(*stmt, &mut text);
            for (j, line) in text.lines().enumerate() {
                if j > 0 {
                    out.push('\n');
                }
                out.push_str(indent);
                out.push_str(line);
            }
        }
    }
}
