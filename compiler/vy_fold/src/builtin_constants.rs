//! Reserved constant names and their substitution.

use std::sync::OnceLock;

use vy_ir::literal::{max_int128, max_uint256, min_int128};
use vy_ir::{ConstValue, Decimal, Literal, SyntaxTree};

use crate::error::FoldError;
use crate::substitute::replace_constant;

static BUILTIN_CONSTANTS: OnceLock<Vec<(&'static str, Literal)>> = OnceLock::new();

/// The reserved constant names with their values, in substitution order.
pub fn builtin_constants() -> &'static [(&'static str, Literal)] {
    BUILTIN_CONSTANTS.get_or_init(|| {
        vec![
            ("EMPTY_BYTES32", Literal::Hex(zero_hex(32))),
            ("ZERO_ADDRESS", Literal::Hex(zero_hex(20))),
            ("MAX_INT128", Literal::Int(max_int128())),
            ("MIN_INT128", Literal::Int(min_int128())),
            ("MAX_DECIMAL", Literal::Decimal(Decimal::max_value())),
            ("MIN_DECIMAL", Literal::Decimal(Decimal::min_value())),
            ("MAX_UINT256", Literal::Int(max_uint256())),
        ]
    })
}

fn zero_hex(bytes: usize) -> String {
    format!("0x{}", "00".repeat(bytes))
}

/// Substitute every reference to a reserved constant.
///
/// Reserved names can be neither shadowed nor reassigned, so this runs
/// once before the fixed-point loop. A reference in a non-value position
/// is a fatal error.
#[tracing::instrument(level = "debug", skip_all)]
pub(crate) fn replace_builtin_constants(tree: &mut SyntaxTree) -> Result<usize, FoldError> {
    let mut changed = 0;
    for (name, value) in builtin_constants() {
        changed += replace_constant(tree, name, &ConstValue::Literal(value.clone()), true, None)?;
    }
    Ok(changed)
}

#[cfg(test)]
mod tests;
