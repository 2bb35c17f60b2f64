//! Configuration for baseline computation.

use crate::error::BaselineError;

/// Default minimum group size below which a group is low-confidence.
pub const DEFAULT_MIN_GROUP_SIZE: usize = 3;

/// What to do with groups smaller than the minimum size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strictness {
    /// Flag the group and log a warning.
    #[default]
    Lenient,
    /// Fail the run.
    Strict,
}

impl std::fmt::Display for Strictness {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lenient => f.write_str("lenient"),
            Self::Strict => f.write_str("strict"),
        }
    }
}

/// Configuration for [`compute_baselines`](crate::compute_baselines).
///
/// # Example
///
/// ```
/// use aridity_baseline::{BaselineConfig, Strictness};
///
/// let config = BaselineConfig::new()
///     .with_min_group_size(5)
///     .with_strictness(Strictness::Strict);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct BaselineConfig {
    min_group_size: usize,
    strictness: Strictness,
}

impl BaselineConfig {
    /// Creates a configuration with `min_group_size = 3` and lenient handling.
    pub fn new() -> Self {
        Self {
            min_group_size: DEFAULT_MIN_GROUP_SIZE,
            strictness: Strictness::Lenient,
        }
    }

    /// Sets the minimum group size.
    pub fn with_min_group_size(mut self, n: usize) -> Self {
        self.min_group_size = n;
        self
    }

    /// Sets the handling of undersized groups.
    pub fn with_strictness(mut self, strictness: Strictness) -> Self {
        self.strictness = strictness;
        self
    }

    /// Returns the minimum group size.
    pub fn min_group_size(&self) -> usize {
        self.min_group_size
    }

    /// Returns the handling of undersized groups.
    pub fn strictness(&self) -> Strictness {
        self.strictness
    }

    /// Validates this configuration.
    ///
    /// # Errors
    ///
    /// Returns [`BaselineError::InvalidConfig`] if `min_group_size` is zero.
    pub fn validate(&self) -> Result<(), BaselineError> {
        if self.min_group_size == 0 {
            return Err(BaselineError::InvalidConfig {
                reason: "min_group_size must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for BaselineConfig {
    fn default() -> Self {
        Self::new()
    }
}
