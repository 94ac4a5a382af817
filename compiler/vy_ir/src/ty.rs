//! Type descriptors stored in a node's type slot.
//!
//! The folder does not compute types. It only copies a constant's declared
//! type onto the literals it substitutes, so the downstream type checker
//! sees the same descriptor it would have inferred for the declaration.

use std::fmt;

/// Resolved type of a value.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum Type {
    /// Fixed-width integer, e.g. `int128` or `uint256`.
    Int { bits: u16, signed: bool },
    Decimal,
    Bool,
    Address,
    Bytes32,
    /// Bounded string, `String[max_len]`.
    String { max_len: u32 },
    /// Bounded byte array, `Bytes[max_len]`.
    Bytes { max_len: u32 },
    /// Fixed-size array, `value_type[length]`.
    Array { value_type: Box<Type>, length: u32 },
}

impl Type {
    pub const INT128: Type = Type::Int {
        bits: 128,
        signed: true,
    };
    pub const UINT256: Type = Type::Int {
        bits: 256,
        signed: false,
    };

    /// Element type of an array, `None` for every other type.
    pub fn value_type(&self) -> Option<&Type> {
        match self {
            Type::Array { value_type, .. } => Some(value_type),
            _ => None,
        }
    }

    /// Declared length of an array, `None` for every other type.
    pub fn array_length(&self) -> Option<u32> {
        match self {
            Type::Array { length, .. } => Some(*length),
            _ => None,
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Int { bits, signed: true } => write!(f, "int{bits}"),
            Type::Int {
                bits,
                signed: false,
            } => write!(f, "uint{bits}"),
            Type::Decimal => f.write_str("decimal"),
            Type::Bool => f.write_str("bool"),
            Type::Address => f.write_str("address"),
            Type::Bytes32 => f.write_str("bytes32"),
            Type::String { max_len } => write!(f, "String[{max_len}]"),
            Type::Bytes { max_len } => write!(f, "Bytes[{max_len}]"),
            Type::Array { value_type, length } => write!(f, "{value_type}[{length}]"),
        }
    }
}
