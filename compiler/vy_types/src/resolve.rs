//! Annotation-to-type resolution.

use vy_ir::{ensure_sufficient_stack, Literal, NodeId, NodeKind, Span, SyntaxTree, Type};

use crate::{DataLocation, TypeDefinition};

/// An annotation that does not name a type.
#[derive(Clone, Eq, PartialEq, Debug, thiserror::Error)]
pub enum TypeResolutionError {
    #[error("unknown type `{name}` at {span}")]
    UnknownType { name: String, span: Span },
    #[error("invalid length in type annotation at {span}")]
    InvalidLength { span: Span },
    #[error("expression at {span} is not a type annotation")]
    UnsupportedAnnotation { span: Span },
}

/// Resolve the annotation rooted at `annotation`.
///
/// Accepted forms: the scalar names (`intN`/`uintN` for `N` a multiple of
/// 8 up to 256, `decimal`, `bool`, `address`, `bytes32`), `String[N]`,
/// `Bytes[N]`, and fixed arrays `T[N]` of any accepted `T`. Lengths must
/// be positive integer literals.
#[tracing::instrument(level = "trace", skip(tree))]
pub fn resolve_type(
    tree: &SyntaxTree,
    annotation: NodeId,
    location: DataLocation,
) -> Result<TypeDefinition, TypeResolutionError> {
    let ty = resolve(tree, annotation)?;
    tracing::trace!(%ty, "resolved annotation");
    Ok(TypeDefinition { ty, location })
}

fn resolve(tree: &SyntaxTree, annotation: NodeId) -> Result<Type, TypeResolutionError> {
    ensure_sufficient_stack(|| {
        let span = tree.span(annotation);
        match tree.kind(annotation) {
            NodeKind::Name { id } => {
                scalar_type(id).ok_or_else(|| TypeResolutionError::UnknownType {
                    name: id.clone(),
                    span,
                })
            }
            NodeKind::Subscript { value, slice } => {
                let length = length(tree, *slice)?;
                match tree.kind(*value).name_id() {
                    Some("String") => Ok(Type::String { max_len: length }),
                    Some("Bytes") => Ok(Type::Bytes { max_len: length }),
                    _ => Ok(Type::Array {
                        value_type: Box::new(resolve(tree, *value)?),
                        length,
                    }),
                }
            }
            _ => Err(TypeResolutionError::UnsupportedAnnotation { span }),
        }
    })
}

fn scalar_type(name: &str) -> Option<Type> {
    match name {
        "decimal" => return Some(Type::Decimal),
        "bool" => return Some(Type::Bool),
        "address" => return Some(Type::Address),
        "bytes32" => return Some(Type::Bytes32),
        _ => {}
    }
    let (signed, bits) = match name.strip_prefix("uint") {
        Some(bits) => (false, bits),
        None => (true, name.strip_prefix("int")?),
    };
    // Reject forms like `int+8` or `int08` that `parse` would accept.
    if bits.starts_with(['+', '0']) {
        return None;
    }
    let bits: u16 = bits.parse().ok()?;
    (bits % 8 == 0 && (8..=256).contains(&bits)).then_some(Type::Int { bits, signed })
}

/// Length from the `Index` slice of a sized annotation.
fn length(tree: &SyntaxTree, slice: NodeId) -> Result<u32, TypeResolutionError> {
    let index = match tree.kind(slice) {
        NodeKind::Index { value } => *value,
        _ => slice,
    };
    let invalid = || TypeResolutionError::InvalidLength {
        span: tree.span(index),
    };
    match tree.kind(index) {
        NodeKind::Literal(Literal::Int(n)) => match u32::try_from(n) {
            Ok(len) if len > 0 => Ok(len),
            _ => Err(invalid()),
        },
        _ => Err(invalid()),
    }
}
