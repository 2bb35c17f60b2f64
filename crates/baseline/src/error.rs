//! Error types for the aridity-baseline crate.

/// Error type for all fallible operations in the aridity-baseline crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BaselineError {
    /// Returned when a seasonal group resolves to no members.
    ///
    /// Every aggregate belongs to its own group, so this signals a broken
    /// invariant rather than bad input.
    #[error("seasonal group {group} has no members")]
    EmptyGroup {
        /// Identity of the offending group.
        group: String,
    },

    /// Returned under strict mode when a group is below the minimum size.
    #[error("seasonal group {group} has {size} member(s), below the minimum of {min_size}")]
    UndersizedGroup {
        /// Identity of the offending group.
        group: String,
        /// Number of members found.
        size: usize,
        /// Configured minimum.
        min_size: usize,
    },

    /// Returned when aggregates in one group disagree on grid shape.
    #[error("aggregate grid shape {got:?} does not match group shape {expected:?}")]
    ShapeMismatch {
        /// Shape of the first member.
        expected: (usize, usize),
        /// Shape of the offending member.
        got: (usize, usize),
    },

    /// Returned when the configuration is invalid.
    #[error("invalid baseline configuration: {reason}")]
    InvalidConfig {
        /// Human-readable explanation.
        reason: String,
    },

    /// Raster error.
    #[error(transparent)]
    Raster(#[from] aridity_raster::RasterError),
}
