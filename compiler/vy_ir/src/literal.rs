//! Literal values carried by `Literal` nodes.
//!
//! Integers are arbitrary precision so that every value in the language's
//! widest range (`-(2**127)` through `2**256 - 1`) is representable before
//! a bounds check decides whether a fold is legal. Decimals are fixed point
//! with [`DECIMAL_PLACES`] fractional digits, matching the runtime
//! representation, so folded arithmetic truncates exactly like the EVM does.

use std::fmt;
use std::mem;
use std::str::FromStr;

use num_bigint::{BigInt, Sign};
use num_traits::{One, Signed, Zero};

/// Number of fractional digits in a decimal value.
pub const DECIMAL_PLACES: u32 = 10;

const DECIMAL_SCALE: u64 = 10_u64.pow(DECIMAL_PLACES);

/// Smallest `int128` value, `-(2**127)`. Also the lower bound of every
/// integer a fold may produce.
pub fn min_int128() -> BigInt {
    -(BigInt::one() << 127_u32)
}

/// Largest `int128` value, `2**127 - 1`.
pub fn max_int128() -> BigInt {
    (BigInt::one() << 127_u32) - 1
}

/// Largest `uint256` value, `2**256 - 1`. Also the upper bound of every
/// integer a fold may produce.
pub fn max_uint256() -> BigInt {
    (BigInt::one() << 256_u32) - 1
}

/// Whether an integer lies in the range a literal of any integer type can
/// hold.
pub fn int_in_bounds(value: &BigInt) -> bool {
    *value >= min_int128() && *value <= max_uint256()
}

// Decimal

/// Fixed-point decimal with [`DECIMAL_PLACES`] fractional digits.
///
/// Stored as the value multiplied by `10**DECIMAL_PLACES`. Because every
/// value shares one scale, the derived ordering is numeric ordering.
#[derive(Clone, Eq, PartialEq, Hash, PartialOrd, Ord, Debug)]
pub struct Decimal {
    scaled: BigInt,
}

/// Error parsing decimal source text.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DecimalParseError {
    #[error("empty decimal literal")]
    Empty,
    #[error("invalid digit in decimal literal `{0}`")]
    InvalidDigit(String),
    #[error("decimal literal `{0}` has more than {DECIMAL_PLACES} fractional digits")]
    TooPrecise(String),
}

impl Decimal {
    fn scale() -> BigInt {
        BigInt::from(DECIMAL_SCALE)
    }

    /// Build from the already-scaled representation.
    pub fn from_scaled(scaled: BigInt) -> Self {
        Decimal { scaled }
    }

    /// Build from a whole number.
    pub fn from_integer(value: &BigInt) -> Self {
        Decimal {
            scaled: value * Self::scale(),
        }
    }

    /// The value multiplied by `10**DECIMAL_PLACES`.
    pub fn scaled(&self) -> &BigInt {
        &self.scaled
    }

    /// Smallest decimal value, `-(2**127)`.
    pub fn min_value() -> Self {
        Self::from_integer(&min_int128())
    }

    /// Largest decimal value, `2**127 - 1`.
    pub fn max_value() -> Self {
        Self::from_integer(&max_int128())
    }

    pub fn in_bounds(&self) -> bool {
        *self >= Self::min_value() && *self <= Self::max_value()
    }

    pub fn is_zero(&self) -> bool {
        self.scaled.is_zero()
    }

    pub fn is_negative(&self) -> bool {
        self.scaled.is_negative()
    }

    /// Whether the value has no fractional part.
    pub fn is_integral(&self) -> bool {
        (&self.scaled % Self::scale()).is_zero()
    }

    /// Whole part, rounding toward zero.
    pub fn trunc(&self) -> BigInt {
        &self.scaled / Self::scale()
    }

    /// Whole part, rounding toward negative infinity.
    pub fn floor(&self) -> BigInt {
        let whole = self.trunc();
        if self.scaled.is_negative() && !self.is_integral() {
            whole - 1
        } else {
            whole
        }
    }

    /// Whole part, rounding toward positive infinity.
    pub fn ceil(&self) -> BigInt {
        let whole = self.trunc();
        if self.scaled.is_positive() && !self.is_integral() {
            whole + 1
        } else {
            whole
        }
    }

    #[must_use]
    pub fn add(&self, other: &Decimal) -> Decimal {
        Decimal::from_scaled(&self.scaled + &other.scaled)
    }

    #[must_use]
    pub fn sub(&self, other: &Decimal) -> Decimal {
        Decimal::from_scaled(&self.scaled - &other.scaled)
    }

    /// Product truncated toward zero to [`DECIMAL_PLACES`] digits.
    #[must_use]
    pub fn mul(&self, other: &Decimal) -> Decimal {
        Decimal::from_scaled(&self.scaled * &other.scaled / Self::scale())
    }

    /// Quotient truncated toward zero. `None` on a zero divisor.
    pub fn checked_div(&self, other: &Decimal) -> Option<Decimal> {
        if other.is_zero() {
            return None;
        }
        Some(Decimal::from_scaled(
            &self.scaled * Self::scale() / &other.scaled,
        ))
    }

    /// Remainder carrying the sign of the dividend. `None` on a zero
    /// divisor.
    pub fn checked_rem(&self, other: &Decimal) -> Option<Decimal> {
        if other.is_zero() {
            return None;
        }
        Some(Decimal::from_scaled(&self.scaled % &other.scaled))
    }

    #[must_use]
    pub fn neg(&self) -> Decimal {
        Decimal::from_scaled(-&self.scaled)
    }
}

impl FromStr for Decimal {
    type Err = DecimalParseError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let (negative, digits) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text),
        };
        if digits.is_empty() {
            return Err(DecimalParseError::Empty);
        }
        let (whole, frac) = digits.split_once('.').unwrap_or((digits, ""));
        let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
        if (whole.is_empty() && frac.is_empty()) || !all_digits(whole) || !all_digits(frac) {
            return Err(DecimalParseError::InvalidDigit(text.to_owned()));
        }
        if frac.len() > DECIMAL_PLACES as usize {
            return Err(DecimalParseError::TooPrecise(text.to_owned()));
        }

        let mut padded = String::with_capacity(whole.len() + DECIMAL_PLACES as usize);
        padded.push_str(if whole.is_empty() { "0" } else { whole });
        padded.push_str(frac);
        padded.extend(std::iter::repeat('0').take(DECIMAL_PLACES as usize - frac.len()));

        let magnitude = BigInt::parse_bytes(padded.as_bytes(), 10)
            .ok_or_else(|| DecimalParseError::InvalidDigit(text.to_owned()))?;
        Ok(Decimal::from_scaled(if negative {
            -magnitude
        } else {
            magnitude
        }))
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let scale = Self::scale();
        let magnitude = self.scaled.abs();
        let whole = &magnitude / &scale;
        let frac = &magnitude % &scale;

        let frac = frac.to_string();
        let mut frac_digits = format!("{frac:0>width$}", width = DECIMAL_PLACES as usize);
        while frac_digits.len() > 1 && frac_digits.ends_with('0') {
            frac_digits.pop();
        }
        let sign = if self.scaled.sign() == Sign::Minus {
            "-"
        } else {
            ""
        };
        write!(f, "{sign}{whole}.{frac_digits}")
    }
}

// Literal

/// Value of a scalar literal node.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Literal {
    Int(BigInt),
    Decimal(Decimal),
    /// Hex literal text including the `0x` prefix (addresses, `bytes32`).
    Hex(String),
    Bool(bool),
    Str(String),
    Bytes(Vec<u8>),
}

impl Literal {
    /// Human-readable kind, used in unfoldable reasons and traces.
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Literal::Int(_) => "int",
            Literal::Decimal(_) => "decimal",
            Literal::Hex(_) => "hex",
            Literal::Bool(_) => "bool",
            Literal::Str(_) => "string",
            Literal::Bytes(_) => "bytes",
        }
    }

    /// Whether two literals are of the same kind (ignoring value).
    pub fn same_kind(&self, other: &Literal) -> bool {
        mem::discriminant(self) == mem::discriminant(other)
    }

    /// Value equality as the runtime sees it. Hex digits compare
    /// case-insensitively; everything else compares structurally.
    pub fn value_eq(&self, other: &Literal) -> bool {
        match (self, other) {
            (Literal::Hex(a), Literal::Hex(b)) => a.eq_ignore_ascii_case(b),
            _ => self == other,
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Int(v) => write!(f, "{v}"),
            Literal::Decimal(d) => write!(f, "{d}"),
            Literal::Hex(h) => f.write_str(h),
            Literal::Bool(true) => f.write_str("True"),
            Literal::Bool(false) => f.write_str("False"),
            Literal::Str(s) => write!(f, "{s:?}"),
            Literal::Bytes(bytes) => {
                f.write_str("b\"")?;
                for &b in bytes {
                    if (b.is_ascii_graphic() && b != b'"' && b != b'\\') || b == b' ' {
                        write!(f, "{}", char::from(b))?;
                    } else {
                        write!(f, "\\x{b:02x}")?;
                    }
                }
                f.write_str("\"")
            }
        }
    }
}

/// Decode `0x`-prefixed hex text into bytes. `None` if the text is not an
/// even number of hex digits after the prefix.
pub fn decode_hex(text: &str) -> Option<Vec<u8>> {
    let digits = text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))?;
    if digits.len() % 2 != 0 {
        return None;
    }
    (0..digits.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(digits.get(i..i + 2)?, 16).ok())
        .collect()
}

/// Encode bytes as lowercase `0x`-prefixed hex text.
pub fn encode_hex(bytes: &[u8]) -> String {
    use fmt::Write;

    let mut out = String::with_capacity(2 + bytes.len() * 2);
    out.push_str("0x");
    for b in bytes {
        // Writing to a String cannot fail.
        let _ = write!(out, "{b:02x}");
    }
    out
}

// ConstValue

/// A statically known value: a scalar literal or a (possibly nested)
/// list of them.
///
/// This is what evaluators hand back to the fold engine. It owns no tree
/// handles; the engine materializes it into nodes carrying the span of
/// the node being replaced.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum ConstValue {
    Literal(Literal),
    List(Vec<ConstValue>),
}

impl ConstValue {
    pub fn int(value: impl Into<BigInt>) -> Self {
        ConstValue::Literal(Literal::Int(value.into()))
    }

    pub fn boolean(value: bool) -> Self {
        ConstValue::Literal(Literal::Bool(value))
    }

    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            ConstValue::Literal(lit) => Some(lit),
            ConstValue::List(_) => None,
        }
    }

    /// Same-kind test used for list homogeneity: two lists match, two
    /// literals match when their kinds do.
    pub fn same_kind(&self, other: &ConstValue) -> bool {
        match (self, other) {
            (ConstValue::Literal(a), ConstValue::Literal(b)) => a.same_kind(b),
            (ConstValue::List(_), ConstValue::List(_)) => true,
            _ => false,
        }
    }
}

impl From<Literal> for ConstValue {
    fn from(lit: Literal) -> Self {
        ConstValue::Literal(lit)
    }
}

#[cfg(test)]
mod tests;
