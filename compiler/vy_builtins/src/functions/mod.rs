//! Builtin function entries.
//!
//! | Builtin | Folds |
//! |---------|-------|
//! | `floor`, `ceil` | decimal literal to integer |
//! | `len` | string, bytes or hex literal |
//! | `min`, `max` | two literals of one numeric kind |
//! | `uint256_addmod`, `uint256_mulmod` | three uint256 literals, nonzero modulus |
//! | `bitwise_and`, `bitwise_or`, `bitwise_xor`, `bitwise_not` | uint256 literals |
//! | `shift` | uint256 literal, distance in `-256..=256` |
//! | `sha256`, `keccak256` | string, bytes or hex literal |
//! | `as_wei_value` | numeric literal and a denomination name |
//!
//! Everything in [`RUNTIME_ONLY`] is registered without an evaluator.

mod bitwise;
mod hashing;
mod math;
mod runtime;
mod units;

pub use bitwise::{BitwiseBinary, BitwiseNot, Shift};
pub use hashing::{Keccak256, Sha256};
pub use math::{Ceil, Extremum, Floor, Len, ModArith};
pub use runtime::{RuntimeOnly, RUNTIME_ONLY};
pub use units::{denomination_exponent, AsWeiValue};

#[cfg(test)]
mod tests;
