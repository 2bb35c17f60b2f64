//! Configuration for SPI runs.

use aridity_baseline::{BaselineConfig, DEFAULT_MIN_GROUP_SIZE, Strictness};
use aridity_raster::Extent;
use aridity_window::{DEFAULT_DAY_COUNT, WindowPolicy};

use crate::error::SpiError;

/// Parameters shared by the monthly and anchored models.
///
/// # Example
///
/// ```
/// use aridity_spi::SpiConfig;
///
/// let config = SpiConfig::new()
///     .with_unit_count(6)
///     .with_shift_days(-5);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct SpiConfig {
    unit_count: u32,
    day_count: u32,
    shift_days: i32,
    extent: Option<Extent>,
    strictness: Strictness,
    min_group_size: usize,
}

impl SpiConfig {
    /// Creates a configuration with defaults.
    ///
    /// Defaults: `unit_count = 1`, `day_count = 16`, `shift_days = 0`, no
    /// extent, lenient strictness, `min_group_size = 3`.
    pub fn new() -> Self {
        Self {
            unit_count: 1,
            day_count: DEFAULT_DAY_COUNT,
            shift_days: 0,
            extent: None,
            strictness: Strictness::Lenient,
            min_group_size: DEFAULT_MIN_GROUP_SIZE,
        }
    }

    /// Sets the SPI order in months.
    pub fn with_unit_count(mut self, n: u32) -> Self {
        self.unit_count = n;
        self
    }

    /// Sets the anchored window length in days.
    pub fn with_day_count(mut self, n: u32) -> Self {
        self.day_count = n;
        self
    }

    /// Sets the signed shift applied to anchors.
    pub fn with_shift_days(mut self, days: i32) -> Self {
        self.shift_days = days;
        self
    }

    /// Clips every observation to `extent` before aggregation.
    pub fn with_extent(mut self, extent: Extent) -> Self {
        self.extent = Some(extent);
        self
    }

    /// Sets the handling of undersized groups.
    pub fn with_strictness(mut self, strictness: Strictness) -> Self {
        self.strictness = strictness;
        self
    }

    /// Sets the minimum group size.
    pub fn with_min_group_size(mut self, n: usize) -> Self {
        self.min_group_size = n;
        self
    }

    // --- Accessors ---

    /// Returns the SPI order in months.
    pub fn unit_count(&self) -> u32 {
        self.unit_count
    }

    /// Returns the anchored window length in days.
    pub fn day_count(&self) -> u32 {
        self.day_count
    }

    /// Returns the anchor shift in days.
    pub fn shift_days(&self) -> i32 {
        self.shift_days
    }

    /// Returns the spatial extent, if any.
    pub fn extent(&self) -> Option<&Extent> {
        self.extent.as_ref()
    }

    /// Returns the handling of undersized groups.
    pub fn strictness(&self) -> Strictness {
        self.strictness
    }

    /// Returns the minimum group size.
    pub fn min_group_size(&self) -> usize {
        self.min_group_size
    }

    /// Policy of the calendar-month model.
    pub fn monthly_policy(&self) -> WindowPolicy {
        WindowPolicy::Months {
            unit_count: self.unit_count,
        }
    }

    /// Policy of the anchored model.
    pub fn anchored_policy(&self) -> WindowPolicy {
        WindowPolicy::FixedDays {
            day_count: self.day_count,
            shift_days: self.shift_days,
        }
    }

    /// Baseline settings derived from this configuration.
    pub fn baseline_config(&self) -> BaselineConfig {
        BaselineConfig::new()
            .with_min_group_size(self.min_group_size)
            .with_strictness(self.strictness)
    }

    /// Validates this configuration.
    ///
    /// # Errors
    ///
    /// Returns the window or baseline error describing the first invalid
    /// parameter.
    pub fn validate(&self) -> Result<(), SpiError> {
        self.monthly_policy().validate()?;
        self.anchored_policy().validate()?;
        self.baseline_config().validate()?;
        Ok(())
    }
}

impl Default for SpiConfig {
    fn default() -> Self {
        Self::new()
    }
}
