//! `as_wei_value` and the ether denomination table.

use num_bigint::BigInt;
use num_traits::Signed;
use vy_ir::literal::DECIMAL_PLACES;
use vy_ir::{ConstValue, FoldResult, Literal, NodeId, SyntaxTree, Unfoldable};

use crate::args::{literal_args, uint256_result};
use crate::definition::{BuiltinFunction, Foldable};

/// Denomination names and their power-of-ten multiplier of one wei.
static DENOMINATIONS: &[(&[&str], u32)] = &[
    (&["wei"], 0),
    (&["kwei", "babbage", "femtoether"], 3),
    (&["mwei", "lovelace", "picoether"], 6),
    (&["gwei", "shannon", "nanoether", "nano"], 9),
    (&["szabo", "microether", "micro"], 12),
    (&["finney", "milliether", "milli"], 15),
    (&["ether"], 18),
    (&["kether", "grand"], 21),
];

/// Power of ten for a denomination name.
pub fn denomination_exponent(unit: &str) -> Option<u32> {
    DENOMINATIONS
        .iter()
        .find(|(names, _)| names.contains(&unit))
        .map(|&(_, exponent)| exponent)
}

/// `as_wei_value(value, unit) -> uint256`
pub struct AsWeiValue;

impl BuiltinFunction for AsWeiValue {
    fn name(&self) -> &'static str {
        "as_wei_value"
    }

    fn as_foldable(&self) -> Option<&dyn Foldable> {
        Some(self)
    }
}

impl Foldable for AsWeiValue {
    fn evaluate(&self, tree: &SyntaxTree, call: NodeId) -> FoldResult<ConstValue> {
        let args = literal_args(tree, call, 2)?;
        let Literal::Str(unit) = args[1] else {
            return Err(Unfoldable::new("denomination must be a string literal"));
        };
        let exponent =
            denomination_exponent(unit).ok_or(Unfoldable::new("unknown denomination"))?;
        let multiplier = BigInt::from(10).pow(exponent);

        let wei = match args[0] {
            Literal::Int(value) => value * multiplier,
            // Any fractional wei part is truncated toward zero.
            Literal::Decimal(value) => {
                value.scaled() * multiplier / BigInt::from(10).pow(DECIMAL_PLACES)
            }
            _ => return Err(Unfoldable::new("value must be numeric")),
        };
        if wei.is_negative() {
            return Err(Unfoldable::new("negative wei value"));
        }
        uint256_result(wei)
    }
}
