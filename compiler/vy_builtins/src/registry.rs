//! The builtin dispatch table.
//!
//! Maps each builtin's source name to its entry. The global table is built
//! once on first use and never mutated afterwards, so it can be shared by
//! any number of concurrent compilations.

use std::sync::OnceLock;

use rustc_hash::FxHashMap;

use crate::definition::BuiltinFunction;
use crate::functions::{
    AsWeiValue, BitwiseBinary, BitwiseNot, Ceil, Extremum, Floor, Keccak256, Len, ModArith,
    RuntimeOnly, Sha256, Shift, RUNTIME_ONLY,
};

/// Global dispatch table singleton.
static GLOBAL_TABLE: OnceLock<DispatchTable> = OnceLock::new();

/// Registry of builtin functions by name.
pub struct DispatchTable {
    functions: FxHashMap<&'static str, Box<dyn BuiltinFunction>>,
}

impl DispatchTable {
    /// Create an empty table.
    pub fn new() -> Self {
        DispatchTable {
            functions: FxHashMap::default(),
        }
    }

    /// Register a builtin under its name, replacing any previous entry.
    pub fn register<F: BuiltinFunction + 'static>(&mut self, function: F) {
        self.functions.insert(function.name(), Box::new(function));
    }

    /// Look up a builtin by name.
    pub fn get(&self, name: &str) -> Option<&dyn BuiltinFunction> {
        self.functions.get(name).map(|f| f.as_ref())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    /// Registered names, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.functions.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }
}

impl Default for DispatchTable {
    fn default() -> Self {
        Self::new()
    }
}

/// The global dispatch table with every builtin registered.
pub fn dispatch_table() -> &'static DispatchTable {
    GLOBAL_TABLE.get_or_init(|| {
        let mut table = DispatchTable::new();
        register_builtins(&mut table);
        tracing::debug!(count = table.len(), "builtin dispatch table initialized");
        table
    })
}

fn register_builtins(table: &mut DispatchTable) {
    // Rounding and sizes
    table.register(Floor);
    table.register(Ceil);
    table.register(Len);
    table.register(Extremum::MIN);
    table.register(Extremum::MAX);

    // uint256 arithmetic
    table.register(ModArith::ADDMOD);
    table.register(ModArith::MULMOD);
    table.register(BitwiseBinary::AND);
    table.register(BitwiseBinary::OR);
    table.register(BitwiseBinary::XOR);
    table.register(BitwiseNot);
    table.register(Shift);

    // Hashing and units
    table.register(Sha256);
    table.register(Keccak256);
    table.register(AsWeiValue);

    for &name in RUNTIME_ONLY {
        table.register(RuntimeOnly(name));
    }
}
