//! Numeric builtins: `floor`, `ceil`, `len`, `min`, `max`,
//! `uint256_addmod` and `uint256_mulmod`.

use std::cmp::Ordering;

use num_bigint::BigInt;
use num_traits::Zero;
use vy_ir::{ConstValue, FoldResult, Literal, NodeId, SyntaxTree, Unfoldable};

use crate::args::{byte_string, decimal, literal_args, uint256, uint256_result};
use crate::definition::{BuiltinFunction, Foldable};

/// `floor(x: decimal) -> int256`
pub struct Floor;

impl BuiltinFunction for Floor {
    fn name(&self) -> &'static str {
        "floor"
    }

    fn as_foldable(&self) -> Option<&dyn Foldable> {
        Some(self)
    }
}

impl Foldable for Floor {
    fn evaluate(&self, tree: &SyntaxTree, call: NodeId) -> FoldResult<ConstValue> {
        let args = literal_args(tree, call, 1)?;
        Ok(ConstValue::int(decimal(args[0])?.floor()))
    }
}

/// `ceil(x: decimal) -> int256`
pub struct Ceil;

impl BuiltinFunction for Ceil {
    fn name(&self) -> &'static str {
        "ceil"
    }

    fn as_foldable(&self) -> Option<&dyn Foldable> {
        Some(self)
    }
}

impl Foldable for Ceil {
    fn evaluate(&self, tree: &SyntaxTree, call: NodeId) -> FoldResult<ConstValue> {
        let args = literal_args(tree, call, 1)?;
        Ok(ConstValue::int(decimal(args[0])?.ceil()))
    }
}

/// `len(b)`: byte length of a string, bytes or hex literal.
pub struct Len;

impl BuiltinFunction for Len {
    fn name(&self) -> &'static str {
        "len"
    }

    fn as_foldable(&self) -> Option<&dyn Foldable> {
        Some(self)
    }
}

impl Foldable for Len {
    fn evaluate(&self, tree: &SyntaxTree, call: NodeId) -> FoldResult<ConstValue> {
        let args = literal_args(tree, call, 1)?;
        Ok(ConstValue::int(byte_string(args[0])?.len()))
    }
}

/// `min(a, b)` and `max(a, b)` over two literals of one numeric kind.
pub struct Extremum {
    name: &'static str,
    keep: Ordering,
}

impl Extremum {
    pub const MIN: Extremum = Extremum {
        name: "min",
        keep: Ordering::Less,
    };
    pub const MAX: Extremum = Extremum {
        name: "max",
        keep: Ordering::Greater,
    };
}

impl BuiltinFunction for Extremum {
    fn name(&self) -> &'static str {
        self.name
    }

    fn as_foldable(&self) -> Option<&dyn Foldable> {
        Some(self)
    }
}

impl Foldable for Extremum {
    fn evaluate(&self, tree: &SyntaxTree, call: NodeId) -> FoldResult<ConstValue> {
        let args = literal_args(tree, call, 2)?;
        let (a, b) = (args[0], args[1]);
        let order = match (a, b) {
            (Literal::Int(x), Literal::Int(y)) => x.cmp(y),
            (Literal::Decimal(x), Literal::Decimal(y)) => x.cmp(y),
            _ => return Err(Unfoldable::new("operands must share a numeric type")),
        };
        let pick = if order == self.keep { a } else { b };
        Ok(ConstValue::Literal(pick.clone()))
    }
}

/// `uint256_addmod(a, b, c)` and `uint256_mulmod(a, b, c)`: `(a op b) % c`
/// computed without intermediate overflow.
pub struct ModArith {
    name: &'static str,
    op: fn(&BigInt, &BigInt) -> BigInt,
}

impl ModArith {
    pub const ADDMOD: ModArith = ModArith {
        name: "uint256_addmod",
        op: |a, b| a + b,
    };
    pub const MULMOD: ModArith = ModArith {
        name: "uint256_mulmod",
        op: |a, b| a * b,
    };
}

impl BuiltinFunction for ModArith {
    fn name(&self) -> &'static str {
        self.name
    }

    fn as_foldable(&self) -> Option<&dyn Foldable> {
        Some(self)
    }
}

impl Foldable for ModArith {
    fn evaluate(&self, tree: &SyntaxTree, call: NodeId) -> FoldResult<ConstValue> {
        let args = literal_args(tree, call, 3)?;
        let (a, b, modulus) = (uint256(args[0])?, uint256(args[1])?, uint256(args[2])?);
        if modulus.is_zero() {
            return Err(Unfoldable::new("modulus is zero"));
        }
        uint256_result((self.op)(a, b) % modulus)
    }
}
