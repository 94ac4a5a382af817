//! Bitwise builtins over uint256 values.

use num_bigint::BigInt;
use num_traits::Signed;
use vy_ir::literal::max_uint256;
use vy_ir::{ConstValue, FoldResult, NodeId, SyntaxTree, Unfoldable};

use crate::args::{int, literal_args, uint256, uint256_result};
use crate::definition::{BuiltinFunction, Foldable};

/// Largest shift distance accepted by `shift`.
const MAX_SHIFT: u32 = 256;

/// `bitwise_and`, `bitwise_or` and `bitwise_xor`.
pub struct BitwiseBinary {
    name: &'static str,
    op: fn(&BigInt, &BigInt) -> BigInt,
}

impl BitwiseBinary {
    pub const AND: BitwiseBinary = BitwiseBinary {
        name: "bitwise_and",
        op: |a, b| a & b,
    };
    pub const OR: BitwiseBinary = BitwiseBinary {
        name: "bitwise_or",
        op: |a, b| a | b,
    };
    pub const XOR: BitwiseBinary = BitwiseBinary {
        name: "bitwise_xor",
        op: |a, b| a ^ b,
    };
}

impl BuiltinFunction for BitwiseBinary {
    fn name(&self) -> &'static str {
        self.name
    }

    fn as_foldable(&self) -> Option<&dyn Foldable> {
        Some(self)
    }
}

impl Foldable for BitwiseBinary {
    fn evaluate(&self, tree: &SyntaxTree, call: NodeId) -> FoldResult<ConstValue> {
        let args = literal_args(tree, call, 2)?;
        uint256_result((self.op)(uint256(args[0])?, uint256(args[1])?))
    }
}

/// `bitwise_not(x)`: the 256-bit complement.
pub struct BitwiseNot;

impl BuiltinFunction for BitwiseNot {
    fn name(&self) -> &'static str {
        "bitwise_not"
    }

    fn as_foldable(&self) -> Option<&dyn Foldable> {
        Some(self)
    }
}

impl Foldable for BitwiseNot {
    fn evaluate(&self, tree: &SyntaxTree, call: NodeId) -> FoldResult<ConstValue> {
        let args = literal_args(tree, call, 1)?;
        uint256_result(max_uint256() - uint256(args[0])?)
    }
}

/// `shift(x, n)`: left shift for positive `n`, right shift for negative.
/// Bits shifted past position 255 are discarded.
pub struct Shift;

impl BuiltinFunction for Shift {
    fn name(&self) -> &'static str {
        "shift"
    }

    fn as_foldable(&self) -> Option<&dyn Foldable> {
        Some(self)
    }
}

impl Foldable for Shift {
    fn evaluate(&self, tree: &SyntaxTree, call: NodeId) -> FoldResult<ConstValue> {
        let args = literal_args(tree, call, 2)?;
        let value = uint256(args[0])?;
        let by = int(args[1])?;
        let distance = u32::try_from(by.abs())
            .ok()
            .filter(|d| *d <= MAX_SHIFT)
            .ok_or(Unfoldable::new("shift distance out of range"))?;
        let shifted = if by.is_negative() {
            value >> distance
        } else {
            (value << distance) & max_uint256()
        };
        uint256_result(shifted)
    }
}
