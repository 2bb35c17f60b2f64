//! SPI results with window provenance.

use aridity_window::Window;
use chrono::NaiveDate;
use ndarray::Array2;

/// Which temporal model produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Model {
    /// Calendar-month windows counted back from the latest observation.
    Monthly,
    /// Fixed-day windows positioned by external anchor dates.
    Anchored,
}

impl Model {
    /// Stable lowercase name used in exports.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Monthly => "monthly",
            Self::Anchored => "anchored",
        }
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Standardized index of one aggregate.
///
/// Cells whose group standard deviation is zero hold `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct SpiResult {
    window: Window,
    index: Array2<Option<f64>>,
    used_count: usize,
    true_start: NaiveDate,
    true_end: NaiveDate,
    group_size: usize,
    low_confidence: bool,
}

impl SpiResult {
    pub(crate) fn new(
        window: Window,
        index: Array2<Option<f64>>,
        used_count: usize,
        true_start: NaiveDate,
        true_end: NaiveDate,
        group_size: usize,
        low_confidence: bool,
    ) -> Self {
        Self {
            window,
            index,
            used_count,
            true_start,
            true_end,
            group_size,
            low_confidence,
        }
    }

    /// Nominal window.
    pub fn window(&self) -> &Window {
        &self.window
    }

    /// Per-cell index values.
    pub fn index(&self) -> &Array2<Option<f64>> {
        &self.index
    }

    /// Index value at `(row, col)`; `None` if undefined or out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        self.index.get((row, col)).copied().flatten()
    }

    /// Observations summed into the aggregate.
    pub fn used_count(&self) -> usize {
        self.used_count
    }

    /// First contributing observation date.
    pub fn true_start(&self) -> NaiveDate {
        self.true_start
    }

    /// Last contributing observation date.
    pub fn true_end(&self) -> NaiveDate {
        self.true_end
    }

    /// Size of the seasonal group the baseline came from.
    pub fn group_size(&self) -> usize {
        self.group_size
    }

    /// `true` if the baseline group was below the minimum size.
    pub fn low_confidence(&self) -> bool {
        self.low_confidence
    }

    /// Number of undefined cells.
    pub fn undefined_count(&self) -> usize {
        self.index.iter().filter(|v| v.is_none()).count()
    }
}
