//! Folding of calls to pure builtins through the dispatch table.

use vy_builtins::dispatch_table;
use vy_ir::{NodeKind, NodeTag, SyntaxTree};

use crate::error::FoldError;

/// Evaluate every call to a builtin that has a compile-time evaluator.
///
/// Only plain-name callees are looked up; method calls and calls to
/// names without an evaluator are skipped.
#[tracing::instrument(level = "debug", skip_all)]
pub(crate) fn replace_builtin_functions(tree: &mut SyntaxTree) -> Result<usize, FoldError> {
    let table = dispatch_table();
    let mut changed = 0;
    for node in tree.get_descendants(tree.root(), &[NodeTag::Call], true) {
        let NodeKind::Call { func, .. } = tree.kind(node) else {
            continue;
        };
        let Some(name) = tree.kind(*func).name_id() else {
            continue;
        };
        let Some(foldable) = table.get(name).and_then(|f| f.as_foldable()) else {
            continue;
        };
        match foldable.evaluate(tree, node) {
            Ok(value) => {
                let folded = tree.alloc_const(node, &value);
                tree.replace_in_tree(node, folded)?;
                changed += 1;
            }
            Err(skip) => tracing::trace!(?node, reason = skip.reason, "call left unfolded"),
        }
    }
    Ok(changed)
}
