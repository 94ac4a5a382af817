//! Folding of `list[index]` where both are literals.

use vy_ir::{FoldResult, Literal, NodeId, NodeKind, NodeTag, SyntaxTree, Unfoldable};

use crate::error::FoldError;

/// Replace each literal subscript with a copy of the selected element.
///
/// The copy keeps the element's type metadata, so an element of a typed
/// constant array stays typed, and takes the subscript's position.
#[tracing::instrument(level = "debug", skip_all)]
pub(crate) fn replace_subscripts(tree: &mut SyntaxTree) -> Result<usize, FoldError> {
    let mut changed = 0;
    for node in tree.get_descendants(tree.root(), &[NodeTag::Subscript], true) {
        match select(tree, node) {
            Ok(element) => {
                let folded = tree.copy_subtree(node, element);
                tree.replace_in_tree(node, folded)?;
                changed += 1;
            }
            Err(skip) => tracing::trace!(?node, reason = skip.reason, "subscript left unfolded"),
        }
    }
    Ok(changed)
}

/// The element a subscript selects.
///
/// Requires a list whose elements are all literals (or literal lists) of a
/// single kind, and an integer literal index within `0..len`.
fn select(tree: &SyntaxTree, node: NodeId) -> FoldResult<NodeId> {
    let NodeKind::Subscript { value, slice } = tree.kind(node) else {
        return Err(Unfoldable::new("not a subscript"));
    };
    let NodeKind::List { elements } = tree.kind(*value) else {
        return Err(Unfoldable::new("base is not a list literal"));
    };
    let index = match tree.kind(*slice) {
        NodeKind::Index { value } => *value,
        _ => *slice,
    };
    let Some(Literal::Int(index)) = tree.kind(index).as_literal() else {
        return Err(Unfoldable::new("index is not an integer literal"));
    };

    let values = elements
        .iter()
        .map(|&element| tree.const_value(element))
        .collect::<Option<Vec<_>>>()
        .ok_or(Unfoldable::new("list element is not a literal"))?;
    if let Some(first) = values.first() {
        if values.iter().any(|v| !v.same_kind(first)) {
            return Err(Unfoldable::new("list elements differ in type"));
        }
    }

    usize::try_from(index)
        .ok()
        .and_then(|i| elements.get(i).copied())
        .ok_or(Unfoldable::new("index out of range"))
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
