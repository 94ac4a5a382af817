//! vy Fold - Constant Folding and Literal Substitution
//!
//! Rewrites every statically known subexpression of a parsed module into
//! a literal, so type checking and code generation never see
//! compile-time-constant expressions:
//! - references to reserved constants (`MAX_UINT256`, `ZERO_ADDRESS`, ...)
//! - references to module-level `NAME: constant(T) = value` declarations,
//!   typed with the declared `T`
//! - arithmetic, boolean and comparison operations on literals
//! - indexing into literal lists
//! - calls to pure builtins (`floor`, `len`, `sha256`, ...)
//!
//! Anything that cannot be folded is left in place silently. Only
//! invariant violations are reported, as [`FoldError`].
//!
//! # Tracing
//!
//! Enable with `RUST_LOG=vy_fold=debug` (one event per sweep) or
//! `RUST_LOG=vy_fold=trace` (every skipped node and its reason), after
//! calling [`init_tracing`].

mod builtin_calls;
mod builtin_constants;
mod config;
mod driver;
mod error;
mod literal_ops;
mod subscripts;
mod substitute;
mod user_constants;

use std::sync::Once;

pub use builtin_constants::builtin_constants;
pub use config::{FoldConfig, DEFAULT_MAX_SWEEPS, MAX_SWEEPS_ENV};
pub use driver::{fold, fold_with_config, FoldStats};
pub use error::FoldError;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times. Does nothing
/// unless `RUST_LOG` is set.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
