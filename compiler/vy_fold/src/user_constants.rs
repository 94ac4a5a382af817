//! Substitution of module-level `NAME: constant(T) = value` declarations.

use vy_ir::{NodeId, NodeKind, NodeTag, SyntaxTree, Type};
use vy_types::{resolve_type, DataLocation};

use crate::error::FoldError;
use crate::substitute::replace_constant;

/// A top-level constant declaration.
struct ConstantDecl<'t> {
    name: &'t str,
    value: NodeId,
    ty: Option<Type>,
}

/// Replace references to every user-defined constant whose value is
/// already a literal (or literal list).
///
/// Declarations whose value still needs folding are skipped; a later
/// sweep substitutes them once the other passes have reduced the value.
#[tracing::instrument(level = "debug", skip_all)]
pub(crate) fn replace_user_defined_constants(tree: &mut SyntaxTree) -> Result<usize, FoldError> {
    let mut changed = 0;
    for stmt in tree.get_children(tree.root(), &[NodeTag::AnnAssign]) {
        let Some(decl) = constant_decl(tree, stmt)? else {
            continue;
        };
        let Some(value) = tree.const_value(decl.value) else {
            tracing::trace!(name = decl.name, "constant value not yet literal");
            continue;
        };
        let name = decl.name.to_owned();
        let ty = decl.ty;
        changed += replace_constant(tree, &name, &value, false, ty.as_ref())?;
    }
    Ok(changed)
}

/// Recognize `NAME: constant(T) = value`. `constant()` with no argument
/// declares an untyped constant.
fn constant_decl(tree: &SyntaxTree, stmt: NodeId) -> Result<Option<ConstantDecl<'_>>, FoldError> {
    let NodeKind::AnnAssign {
        target,
        annotation,
        value: Some(value),
    } = tree.kind(stmt)
    else {
        return Ok(None);
    };
    let Some(name) = tree.kind(*target).name_id() else {
        return Ok(None);
    };
    let NodeKind::Call { func, args } = tree.kind(*annotation) else {
        return Ok(None);
    };
    if tree.kind(*func).name_id() != Some("constant") {
        return Ok(None);
    }

    let ty = match args.first() {
        Some(&type_expr) => Some(resolve_type(tree, type_expr, DataLocation::Unset)?.ty),
        None => None,
    };
    Ok(Some(ConstantDecl {
        name,
        value: *value,
        ty,
    }))
}
