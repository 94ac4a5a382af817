//! Folding of `BinOp`, `UnaryOp`, `BoolOp` and `Compare` nodes whose
//! operands are literals.
//!
//! Results follow the runtime's semantics exactly or the node is left
//! alone: integer division truncates toward zero, `%` takes the sign of
//! the dividend, decimals carry ten fractional digits, and any result
//! outside the representable range is unfoldable rather than wrapped.

use num_bigint::BigInt;
use num_traits::{One, Signed, Zero};
use vy_ir::literal::{int_in_bounds, max_uint256};
use vy_ir::{
    BinaryOp, BoolOpKind, CmpOp, Decimal, FoldResult, Literal, NodeId, NodeKind, NodeTag,
    SyntaxTree, UnaryOp, Unfoldable,
};

use crate::error::FoldError;

/// Largest exponent worth computing: any base of magnitude 2 or more
/// raised past it leaves the integer range.
const MAX_EXPONENT: u32 = 256;

const OPERATIONS: &[NodeTag] = &[
    NodeTag::BoolOp,
    NodeTag::BinOp,
    NodeTag::UnaryOp,
    NodeTag::Compare,
];

/// Evaluate every operation on literal operands, innermost first.
#[tracing::instrument(level = "debug", skip_all)]
pub(crate) fn replace_literal_ops(tree: &mut SyntaxTree) -> Result<usize, FoldError> {
    let mut changed = 0;
    for node in tree.get_descendants(tree.root(), OPERATIONS, true) {
        match evaluate(tree, node) {
            Ok(lit) => {
                let folded = tree.from_node(node, NodeKind::Literal(lit));
                tree.replace_in_tree(node, folded)?;
                changed += 1;
            }
            Err(skip) => tracing::trace!(?node, reason = skip.reason, "operation left unfolded"),
        }
    }
    Ok(changed)
}

/// Evaluate one operation node.
fn evaluate(tree: &SyntaxTree, node: NodeId) -> FoldResult<Literal> {
    match tree.kind(node) {
        NodeKind::BinOp { left, op, right } => {
            fold_binary(*op, operand(tree, *left)?, operand(tree, *right)?)
        }
        NodeKind::UnaryOp { op, operand: inner } => fold_unary(*op, operand(tree, *inner)?),
        NodeKind::BoolOp { op, values } => {
            let values = values
                .iter()
                .map(|&value| operand(tree, value))
                .collect::<FoldResult<Vec<_>>>()?;
            fold_boolop(*op, &values)
        }
        NodeKind::Compare { left, op, right } => fold_compare(tree, *left, *op, *right),
        _ => Err(Unfoldable::new("not an operation")),
    }
}

fn operand(tree: &SyntaxTree, id: NodeId) -> FoldResult<&Literal> {
    tree.kind(id)
        .as_literal()
        .ok_or(Unfoldable::new("operand is not a literal"))
}

// Binary Folding

fn fold_binary(op: BinaryOp, left: &Literal, right: &Literal) -> FoldResult<Literal> {
    match (left, right) {
        (Literal::Int(a), Literal::Int(b)) => {
            let result = fold_int(op, a, b)?;
            if !int_in_bounds(&result) {
                return Err(Unfoldable::new("integer result out of bounds"));
            }
            Ok(Literal::Int(result))
        }
        (Literal::Decimal(a), Literal::Decimal(b)) => {
            let result = fold_decimal(op, a, b)?;
            if !result.in_bounds() {
                return Err(Unfoldable::new("decimal result out of bounds"));
            }
            Ok(Literal::Decimal(result))
        }
        _ => Err(Unfoldable::new("operands must share a numeric type")),
    }
}

fn fold_int(op: BinaryOp, a: &BigInt, b: &BigInt) -> FoldResult<BigInt> {
    match op {
        BinaryOp::Add => Ok(a + b),
        BinaryOp::Sub => Ok(a - b),
        BinaryOp::Mul => Ok(a * b),
        // Division by zero: left for the type checker to report.
        BinaryOp::Div | BinaryOp::Mod if b.is_zero() => Err(Unfoldable::new("division by zero")),
        // BigInt division truncates toward zero and the remainder takes
        // the sign of the dividend.
        BinaryOp::Div => Ok(a / b),
        BinaryOp::Mod => Ok(a % b),
        BinaryOp::Pow => pow(a, b),
        BinaryOp::BitAnd | BinaryOp::BitOr | BinaryOp::BitXor => {
            if a.is_negative() || b.is_negative() {
                return Err(Unfoldable::new("bitwise operands must be unsigned"));
            }
            Ok(match op {
                BinaryOp::BitAnd => a & b,
                BinaryOp::BitOr => a | b,
                _ => a ^ b,
            })
        }
    }
}

fn pow(base: &BigInt, exponent: &BigInt) -> FoldResult<BigInt> {
    if exponent.is_negative() {
        return Err(Unfoldable::new("negative exponent"));
    }
    // Bases 0, 1 and -1 stay small for any exponent.
    if base.abs() <= BigInt::one() {
        if exponent.is_zero() || base.is_one() {
            return Ok(BigInt::one());
        }
        if base.is_zero() {
            return Ok(BigInt::zero());
        }
        let odd = !(exponent % 2u32).is_zero();
        return Ok(if odd { -BigInt::one() } else { BigInt::one() });
    }
    let exponent = u32::try_from(exponent)
        .ok()
        .filter(|e| *e <= MAX_EXPONENT)
        .ok_or(Unfoldable::new("exponent too large"))?;
    Ok(base.pow(exponent))
}

fn fold_decimal(op: BinaryOp, a: &Decimal, b: &Decimal) -> FoldResult<Decimal> {
    match op {
        BinaryOp::Add => Ok(a.add(b)),
        BinaryOp::Sub => Ok(a.sub(b)),
        BinaryOp::Mul => Ok(a.mul(b)),
        BinaryOp::Div => a
            .checked_div(b)
            .ok_or(Unfoldable::new("division by zero")),
        BinaryOp::Mod => a
            .checked_rem(b)
            .ok_or(Unfoldable::new("division by zero")),
        BinaryOp::Pow | BinaryOp::BitAnd | BinaryOp::BitOr | BinaryOp::BitXor => {
            Err(Unfoldable::new("operator not defined for decimals"))
        }
    }
}

// Unary Folding

fn fold_unary(op: UnaryOp, operand: &Literal) -> FoldResult<Literal> {
    match (op, operand) {
        (UnaryOp::USub, Literal::Int(value)) => {
            let negated = -value;
            if !int_in_bounds(&negated) {
                return Err(Unfoldable::new("integer result out of bounds"));
            }
            Ok(Literal::Int(negated))
        }
        (UnaryOp::USub, Literal::Decimal(value)) => {
            let negated = value.neg();
            if !negated.in_bounds() {
                return Err(Unfoldable::new("decimal result out of bounds"));
            }
            Ok(Literal::Decimal(negated))
        }
        (UnaryOp::Not, Literal::Bool(value)) => Ok(Literal::Bool(!value)),
        (UnaryOp::Invert, Literal::Int(value)) if !value.is_negative() && int_in_bounds(value) => {
            Ok(Literal::Int(max_uint256() - value))
        }
        _ => Err(Unfoldable::new("operator not defined for operand")),
    }
}

// Boolean Folding

fn fold_boolop(op: BoolOpKind, values: &[&Literal]) -> FoldResult<Literal> {
    if values.is_empty() {
        return Err(Unfoldable::new("empty boolean operation"));
    }
    let bools = values
        .iter()
        .map(|value| match value {
            Literal::Bool(b) => Ok(*b),
            _ => Err(Unfoldable::new("boolean operands must be bools")),
        })
        .collect::<FoldResult<Vec<_>>>()?;
    Ok(Literal::Bool(match op {
        BoolOpKind::And => bools.iter().all(|b| *b),
        BoolOpKind::Or => bools.iter().any(|b| *b),
    }))
}

// Comparison Folding

fn fold_compare(tree: &SyntaxTree, left: NodeId, op: CmpOp, right: NodeId) -> FoldResult<Literal> {
    let left = operand(tree, left)?;
    if matches!(op, CmpOp::In | CmpOp::NotIn) {
        return fold_membership(tree, left, op, right);
    }
    let right = operand(tree, right)?;

    if !left.same_kind(right) {
        tracing::trace!(
            left = left.kind_name(),
            right = right.kind_name(),
            "comparison of mismatched literals"
        );
        return Err(Unfoldable::new("cannot compare different types"));
    }
    let result = match op {
        CmpOp::Eq => left.value_eq(right),
        CmpOp::NotEq => !left.value_eq(right),
        _ => {
            let ordering = match (left, right) {
                (Literal::Int(a), Literal::Int(b)) => a.cmp(b),
                (Literal::Decimal(a), Literal::Decimal(b)) => a.cmp(b),
                _ => return Err(Unfoldable::new("ordering requires numeric operands")),
            };
            match op {
                CmpOp::Lt => ordering.is_lt(),
                CmpOp::LtE => ordering.is_le(),
                CmpOp::Gt => ordering.is_gt(),
                _ => ordering.is_ge(),
            }
        }
    };
    Ok(Literal::Bool(result))
}

/// `x in [..]` / `x not in [..]` against a list of literals of one kind.
/// An element of a different kind than `x` never matches it, and an empty
/// list contains nothing.
fn fold_membership(
    tree: &SyntaxTree,
    needle: &Literal,
    op: CmpOp,
    haystack: NodeId,
) -> FoldResult<Literal> {
    let NodeKind::List { elements } = tree.kind(haystack) else {
        return Err(Unfoldable::new("membership requires a list literal"));
    };
    let items = elements
        .iter()
        .map(|&element| operand(tree, element))
        .collect::<FoldResult<Vec<_>>>()?;
    if let Some((first, rest)) = items.split_first() {
        if let Some(other) = rest.iter().find(|item| !item.same_kind(first)) {
            tracing::trace!(
                first = first.kind_name(),
                other = other.kind_name(),
                "list of mixed literals"
            );
            return Err(Unfoldable::new("list elements must share one type"));
        }
    }
    let found = items
        .iter()
        .any(|item| item.same_kind(needle) && item.value_eq(needle));
    Ok(Literal::Bool(found == (op == CmpOp::In)))
}
