//! vy Types - Annotation Resolution
//!
//! Turns a type annotation subtree (`uint256`, `String[10]`,
//! `int128[3][2]`, ...) into a [`vy_ir::Type`] descriptor. The folder uses
//! this to attach a declared constant's type to every literal it
//! substitutes for the constant.

mod resolve;

pub use resolve::{resolve_type, TypeResolutionError};

use vy_ir::Type;

/// Where a value of a resolved type lives at runtime.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum DataLocation {
    /// Not yet known; constants and annotations resolved out of context.
    #[default]
    Unset,
    Memory,
    Storage,
    Calldata,
}

/// A resolved annotation.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct TypeDefinition {
    pub ty: Type,
    pub location: DataLocation,
}
