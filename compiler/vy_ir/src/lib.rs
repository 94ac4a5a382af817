//! vy IR - Syntax Tree for Constant Folding
//!
//! This crate holds the tree the folder rewrites and the values it writes
//! into it:
//! - `SyntaxTree`, an arena of nodes addressed by `NodeId`
//! - `NodeKind` variants and the `NodeTag` discriminant used in traversals
//! - Literal values (`Literal`, fixed-point `Decimal`, `ConstValue`)
//! - Operator enums
//! - `Type` descriptors carried in each node's metadata slot
//! - The `Unfoldable` signal and `TreeError`
//! - `TreeBuilder` and a source-like printer
//!
//! # Design Philosophy
//!
//! - **Flatten Everything**: no `Box<Node>`; children are `NodeId` indices
//! - **Handles are stable**: replacement detaches, never frees, so a
//!   snapshot of handles survives mutation
//! - **Parents are derived**: parent links are written only by `alloc`
//!   and `replace_in_tree`

mod builder;
mod error;
mod kind;
pub mod literal;
mod node_id;
pub mod operators;
mod span;
mod stack;
mod tree;
mod ty;
mod unparse;

pub use builder::TreeBuilder;
pub use error::{FoldResult, TreeError, Unfoldable};
pub use kind::{NodeKind, NodeTag};
pub use literal::{ConstValue, Decimal, Literal};
pub use node_id::NodeId;
pub use operators::{BinaryOp, BoolOpKind, CmpOp, UnaryOp};
pub use span::Span;
pub use stack::ensure_sufficient_stack;
pub use tree::{Descendants, SyntaxTree};
pub use ty::Type;
