//! Name-to-literal substitution shared by the constant passes.
//!
//! A reference is substitutable unless it is a call target, a dictionary
//! key, or part of an assignment target. A name anywhere under an `Index`
//! is always substitutable, so `arr[N] = x` still gets `N` folded while
//! `N = x` does not.

use vy_builtins::is_checksum_address;
use vy_ir::{
    ensure_sufficient_stack, ConstValue, Literal, NodeId, NodeKind, NodeTag, SyntaxTree, Type,
};

use crate::error::FoldError;

const ASSIGNMENTS: &[NodeTag] = &[NodeTag::Assign, NodeTag::AnnAssign, NodeTag::AugAssign];

/// Replace every legal reference to `name` with a copy of `value`.
///
/// Illegal references are left in place, or, with `raise_on_error`, are
/// reported as [`FoldError::BuiltinConstantMisuse`]. When `ty` is given it
/// is written to the type slot of every produced node, with list elements
/// getting the array's element type.
///
/// Returns the number of references replaced.
pub(crate) fn replace_constant(
    tree: &mut SyntaxTree,
    name: &str,
    value: &ConstValue,
    raise_on_error: bool,
    ty: Option<&Type>,
) -> Result<usize, FoldError> {
    let references = tree.get_descendants_where(tree.root(), &[NodeTag::Name], true, |_, kind| {
        kind.name_id() == Some(name)
    });

    let mut changed = 0;
    for node in references {
        if let Some(position) = excluded_position(tree, node) {
            if raise_on_error {
                return Err(FoldError::BuiltinConstantMisuse {
                    name: name.to_owned(),
                    span: tree.span(node),
                });
            }
            tracing::trace!(name, ?node, position, "reference left in place");
            continue;
        }
        let replacement =
            materialize(tree, node, value, ty).map_err(|ty| FoldError::ShapeMismatch {
                name: name.to_owned(),
                span: tree.span(node),
                ty,
            })?;
        tree.replace_in_tree(node, replacement)?;
        changed += 1;
    }
    Ok(changed)
}

/// Why a `Name` must not be replaced, if it must not.
fn excluded_position(tree: &SyntaxTree, node: NodeId) -> Option<&'static str> {
    let parent = tree.parent(node)?;
    match tree.kind(parent) {
        NodeKind::Call { func, .. } if *func == node => return Some("call target"),
        NodeKind::Dict { keys, .. } if keys.contains(&node) => return Some("dictionary key"),
        _ => {}
    }

    if tree.get_ancestor(node, &[NodeTag::Index]).is_some() {
        return None;
    }
    let assign = tree.get_ancestor(node, ASSIGNMENTS)?;
    let target = match tree.kind(assign) {
        NodeKind::Assign { target, .. }
        | NodeKind::AnnAssign { target, .. }
        | NodeKind::AugAssign { target, .. } => *target,
        _ => return None,
    };
    tree.is_within(node, target).then_some("assignment target")
}

/// Allocate `value` as parentless nodes positioned at `template`, typed
/// with `ty`. Fails with the offending type when a list does not match
/// the declared array shape, a scalar is declared as an array, or an
/// `address` value is not a checksummed 20-byte hex literal.
fn materialize(
    tree: &mut SyntaxTree,
    template: NodeId,
    value: &ConstValue,
    ty: Option<&Type>,
) -> Result<NodeId, Type> {
    ensure_sufficient_stack(|| {
        let node = match value {
            ConstValue::Literal(lit) => {
                match ty {
                    Some(array @ Type::Array { .. }) => return Err(array.clone()),
                    Some(Type::Address) if !is_address_literal(lit) => {
                        return Err(Type::Address);
                    }
                    _ => {}
                }
                tree.from_node(template, NodeKind::Literal(lit.clone()))
            }
            ConstValue::List(items) => {
                let element_ty = match ty {
                    None => None,
                    Some(Type::Array { value_type, length })
                        if usize::try_from(*length).is_ok_and(|len| len == items.len()) =>
                    {
                        Some(value_type.as_ref())
                    }
                    Some(other) => return Err(other.clone()),
                };
                let elements = items
                    .iter()
                    .map(|item| materialize(tree, template, item, element_ty))
                    .collect::<Result<Vec<_>, _>>()?;
                tree.from_node(template, NodeKind::List { elements })
            }
        };
        if let Some(ty) = ty {
            tree.set_ty(node, ty.clone());
        }
        Ok(node)
    })
}

fn is_address_literal(lit: &Literal) -> bool {
    matches!(lit, Literal::Hex(text) if is_checksum_address(text))
}
