//! Builtins that only have a runtime meaning.

use crate::definition::BuiltinFunction;

/// A builtin the folder must recognize but never evaluates: it reads
/// chain state, has side effects, or produces a value whose type the
/// folder cannot express as a literal.
pub struct RuntimeOnly(pub &'static str);

impl BuiltinFunction for RuntimeOnly {
    fn name(&self) -> &'static str {
        self.0
    }
}

/// Names registered as [`RuntimeOnly`].
pub static RUNTIME_ONLY: &[&str] = &[
    "convert",
    "concat",
    "slice",
    "empty",
    "raw_call",
    "send",
    "extract32",
    "ecrecover",
    "create_forwarder_to",
    "blockhash",
];
