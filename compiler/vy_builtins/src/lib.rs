//! vy Builtins - Dispatch Table
//!
//! Every builtin function has an entry here. Pure builtins also carry a
//! compile-time evaluator ([`Foldable`]) that the folder calls with the
//! `Call` node when all of its arguments are literals.
//!
//! Address literals are checked against their EIP-55 checksum here too,
//! since the checksum is a Keccak-256 digest like the `keccak256` builtin.

mod address;
mod args;
mod definition;
pub mod functions;
mod registry;

pub use address::{checksum_encode, is_checksum_address, ADDRESS_LITERAL_LEN};
pub use definition::{BuiltinFunction, Foldable};
pub use registry::{dispatch_table, DispatchTable};
