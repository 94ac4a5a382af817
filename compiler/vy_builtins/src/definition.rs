//! Traits implemented by dispatch table entries.

use vy_ir::{ConstValue, FoldResult, NodeId, SyntaxTree};

/// A builtin function known to the compiler.
///
/// Every builtin has an entry in the dispatch table whether or not it can
/// be evaluated at compile time; only entries that return `Some` from
/// [`as_foldable`](Self::as_foldable) are candidates for folding.
pub trait BuiltinFunction: Send + Sync {
    /// The name the function is called by in source.
    fn name(&self) -> &'static str;

    /// The compile-time evaluator, if the function is pure.
    fn as_foldable(&self) -> Option<&dyn Foldable> {
        None
    }
}

/// Compile-time evaluation of a pure builtin.
pub trait Foldable {
    /// Evaluate the `Call` node `call`.
    ///
    /// Returns `Unfoldable` when any argument is not a literal, or the
    /// arguments are outside what the function accepts; the call is then
    /// left for the type checker.
    fn evaluate(&self, tree: &SyntaxTree, call: NodeId) -> FoldResult<ConstValue>;
}
