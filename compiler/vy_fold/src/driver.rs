//! The fixed-point driver.

use vy_ir::SyntaxTree;

use crate::builtin_calls::replace_builtin_functions;
use crate::builtin_constants::replace_builtin_constants;
use crate::config::FoldConfig;
use crate::error::FoldError;
use crate::literal_ops::replace_literal_ops;
use crate::subscripts::replace_subscripts;
use crate::user_constants::replace_user_defined_constants;

/// What a fold run did.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FoldStats {
    /// Full sweeps run, including the final sweep that changed nothing.
    pub sweeps: u32,
    /// Nodes replaced across all passes, builtin constants included.
    pub replaced: usize,
}

/// Fold `tree` in place until a sweep changes nothing.
///
/// Builtin constants are substituted once up front. Each sweep then runs
/// user-defined constant substitution, literal operations, subscripts and
/// builtin calls, in that order: each pass can expose work for the
/// others, so the group repeats until it makes no replacement.
#[tracing::instrument(level = "debug", skip_all, fields(max_sweeps = ?config.max_sweeps))]
pub fn fold_with_config(tree: &mut SyntaxTree, config: &FoldConfig) -> Result<FoldStats, FoldError> {
    let mut stats = FoldStats {
        sweeps: 0,
        replaced: replace_builtin_constants(tree)?,
    };

    loop {
        if let Some(limit) = config.max_sweeps {
            if stats.sweeps >= limit {
                tracing::error!(limit, "fold did not converge");
                return Err(FoldError::SweepLimitExceeded { limit });
            }
        }
        stats.sweeps += 1;

        let mut changed = replace_user_defined_constants(tree)?;
        changed += replace_literal_ops(tree)?;
        changed += replace_subscripts(tree)?;
        changed += replace_builtin_functions(tree)?;
        tracing::debug!(sweep = stats.sweeps, changed, "sweep complete");

        stats.replaced += changed;
        if changed == 0 {
            return Ok(stats);
        }
    }
}

/// Fold `tree` with the default configuration.
pub fn fold(tree: &mut SyntaxTree) -> Result<FoldStats, FoldError> {
    fold_with_config(tree, &FoldConfig::default())
}
