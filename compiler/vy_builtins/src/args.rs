//! Argument extraction shared by the evaluators.

use num_bigint::BigInt;
use num_traits::Signed;
use vy_ir::literal::{decode_hex, max_uint256};
use vy_ir::{ConstValue, Decimal, FoldResult, Literal, NodeId, NodeKind, SyntaxTree, Unfoldable};

/// The call's arguments, each of which must be a scalar literal.
pub(crate) fn literal_args(
    tree: &SyntaxTree,
    call: NodeId,
    arity: usize,
) -> FoldResult<Vec<&Literal>> {
    let NodeKind::Call { args, .. } = tree.kind(call) else {
        return Err(Unfoldable::new("not a call"));
    };
    if args.len() != arity {
        return Err(Unfoldable::new("wrong number of arguments"));
    }
    args.iter()
        .map(|&arg| {
            tree.kind(arg)
                .as_literal()
                .ok_or(Unfoldable::new("argument is not a literal"))
        })
        .collect()
}

pub(crate) fn int(lit: &Literal) -> FoldResult<&BigInt> {
    match lit {
        Literal::Int(value) => Ok(value),
        _ => Err(Unfoldable::new("expected an integer literal")),
    }
}

/// An integer in `0..=2**256 - 1`.
pub(crate) fn uint256(lit: &Literal) -> FoldResult<&BigInt> {
    let value = int(lit)?;
    if value.is_negative() || *value > max_uint256() {
        return Err(Unfoldable::new("value out of uint256 range"));
    }
    Ok(value)
}

pub(crate) fn decimal(lit: &Literal) -> FoldResult<&Decimal> {
    match lit {
        Literal::Decimal(value) => Ok(value),
        _ => Err(Unfoldable::new("expected a decimal literal")),
    }
}

/// Raw bytes of a string, bytes or hex literal.
pub(crate) fn byte_string(lit: &Literal) -> FoldResult<Vec<u8>> {
    match lit {
        Literal::Str(s) => Ok(s.as_bytes().to_vec()),
        Literal::Bytes(bytes) => Ok(bytes.clone()),
        Literal::Hex(text) => decode_hex(text).ok_or(Unfoldable::new("malformed hex literal")),
        _ => Err(Unfoldable::new("expected a string, bytes or hex literal")),
    }
}

/// Wrap an integer result, rejecting values a uint256 cannot hold.
pub(crate) fn uint256_result(value: BigInt) -> FoldResult<ConstValue> {
    if value.is_negative() || value > max_uint256() {
        return Err(Unfoldable::new("result out of uint256 range"));
    }
    Ok(ConstValue::int(value))
}
