//! JSON run summaries.

use aridity_stats::{Summary, summarize};
use serde::Serialize;

use crate::error::SpiError;
use crate::pipeline::SpiRun;

/// Headline numbers of one model run.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub model: String,
    pub policy: String,
    pub n_windows: usize,
    pub n_results: usize,
    pub dropped_windows: usize,
    pub n_groups: usize,
    pub low_confidence_groups: usize,
    pub undefined_cells: usize,
    /// Distribution of defined index values; absent if none are defined.
    pub spi: Option<Summary>,
    pub first_window_end: Option<String>,
    pub last_window_end: Option<String>,
}

impl RunSummary {
    /// Summarises `run`.
    pub fn from_run(run: &SpiRun) -> Self {
        let results = run.results();
        let spi = summarize(
            results
                .iter()
                .flat_map(|r| r.index().iter().filter_map(|v| *v)),
        );
        Self {
            model: run.model().name().to_string(),
            policy: run.policy().to_string(),
            n_windows: run.n_windows(),
            n_results: results.len(),
            dropped_windows: run.dropped(),
            n_groups: run.n_groups(),
            low_confidence_groups: run.low_confidence_groups(),
            undefined_cells: results.iter().map(|r| r.undefined_count()).sum(),
            spi,
            first_window_end: results.first().map(|r| r.window().end().to_string()),
            last_window_end: results.last().map(|r| r.window().end().to_string()),
        }
    }
}

/// Serializes run summaries to a pretty-printed JSON array.
///
/// # Errors
///
/// Returns [`SpiError::Serialization`] if encoding fails.
pub fn to_json(summaries: &[RunSummary]) -> Result<String, SpiError> {
    serde_json::to_string_pretty(summaries).map_err(|e| SpiError::Serialization {
        reason: e.to_string(),
    })
}
