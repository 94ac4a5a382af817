//! Fatal folding errors.
//!
//! Anything that merely cannot be folded is an [`vy_ir::Unfoldable`] and
//! never leaves a pass. The variants here are invariant violations: a bug
//! in the folder or in the stage that produced the tree.

use vy_ir::{Span, TreeError, Type};
use vy_types::TypeResolutionError;

#[derive(Clone, Eq, PartialEq, Debug, thiserror::Error)]
pub enum FoldError {
    #[error("tree invariant violated: {0}")]
    Tree(#[from] TreeError),

    #[error("cannot resolve the declared type of a constant: {0}")]
    TypeResolution(#[from] TypeResolutionError),

    /// A builtin constant appeared where only a name is legal, e.g. as a
    /// call target or an assignment target.
    #[error("builtin constant `{name}` used in a non-value position at {span}")]
    BuiltinConstantMisuse { name: String, span: Span },

    /// A constant's literal value does not have the shape of its declared
    /// type.
    #[error("constant `{name}` at {span} does not match its declared type `{ty}`")]
    ShapeMismatch { name: String, span: Span, ty: Type },

    #[error("folding did not reach a fixed point within {limit} sweeps")]
    SweepLimitExceeded { limit: u32 },
}
