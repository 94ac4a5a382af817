//! Fold driver configuration.

/// Environment variable overriding the sweep cap. `0` disables the cap.
pub const MAX_SWEEPS_ENV: &str = "VY_FOLD_MAX_SWEEPS";

/// Sweep cap used when none is configured.
pub const DEFAULT_MAX_SWEEPS: u32 = 4096;

/// Configuration for a fold run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FoldConfig {
    /// Upper bound on full sweeps before the driver gives up with
    /// `SweepLimitExceeded`. `None` runs until a fixed point.
    pub max_sweeps: Option<u32>,
}

impl Default for FoldConfig {
    fn default() -> Self {
        FoldConfig {
            max_sweeps: Some(DEFAULT_MAX_SWEEPS),
        }
    }
}

impl FoldConfig {
    /// No sweep cap.
    pub fn unbounded() -> Self {
        FoldConfig { max_sweeps: None }
    }

    /// Defaults, overridden by `VY_FOLD_MAX_SWEEPS` when it holds a number.
    pub fn from_env() -> Self {
        Self::from_env_value(std::env::var(MAX_SWEEPS_ENV).ok().as_deref())
    }

    fn from_env_value(value: Option<&str>) -> Self {
        match value.map(str::trim).and_then(|v| v.parse::<u32>().ok()) {
            Some(0) => Self::unbounded(),
            Some(n) => FoldConfig {
                max_sweeps: Some(n),
            },
            None => Self::default(),
        }
    }
}
