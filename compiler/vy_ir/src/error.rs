//! Error and signal types shared by every folding pass.

use crate::NodeId;

/// A node cannot be statically folded.
///
/// This is an expected outcome, not a failure: the pass that receives it
/// leaves the node untouched and moves on, and the type checker decides
/// later whether the unfolded expression is a program error.
#[derive(Copy, Clone, Eq, PartialEq, Debug, thiserror::Error)]
#[error("cannot fold: {reason}")]
pub struct Unfoldable {
    pub reason: &'static str,
}

impl Unfoldable {
    pub const fn new(reason: &'static str) -> Self {
        Unfoldable { reason }
    }
}

/// Result of attempting to fold one node.
pub type FoldResult<T> = Result<T, Unfoldable>;

/// Structural invariant violated by a tree mutation.
///
/// These indicate a bug in the folder or in the stage that built the tree,
/// never a problem with the program being compiled.
#[derive(Clone, Eq, PartialEq, Debug, thiserror::Error)]
pub enum TreeError {
    #[error("{node:?} is not attached to the tree")]
    Detached { node: NodeId },
    #[error("{node:?} already has a parent")]
    AlreadyAttached { node: NodeId },
    #[error("the root module cannot be replaced")]
    ReplaceRoot,
    #[error("{node:?} is not a child of {parent:?}")]
    NotAChild { parent: NodeId, node: NodeId },
}
