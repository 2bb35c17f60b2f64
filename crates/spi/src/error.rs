//! Error types for the aridity-spi crate.

/// Error type for all fallible operations in the aridity-spi crate.
#[derive(Debug, thiserror::Error)]
pub enum SpiError {
    /// Returned when an aggregate has no group in the baseline set.
    #[error("aggregate {index} has no baseline group")]
    MissingGroup {
        /// Position of the aggregate.
        index: usize,
    },

    /// Returned when a run summary cannot be serialized.
    #[error("serialization error: {reason}")]
    Serialization {
        /// Human-readable explanation.
        reason: String,
    },

    /// Raster error.
    #[error(transparent)]
    Raster(#[from] aridity_raster::RasterError),

    /// Window error.
    #[error(transparent)]
    Window(#[from] aridity_window::WindowError),

    /// Baseline error.
    #[error(transparent)]
    Baseline(#[from] aridity_baseline::BaselineError),
}
