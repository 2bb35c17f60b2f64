//! End-to-end SPI runs for the two temporal models.

use std::borrow::Cow;

use aridity_baseline::compute_baselines;
use aridity_raster::ObservationSeries;
use aridity_window::{Window, WindowPolicy, aggregate_windows, anchored_windows, monthly_windows};
use chrono::NaiveDate;
use tracing::info;

use crate::config::SpiConfig;
use crate::error::SpiError;
use crate::normalize::normalize;
use crate::result::{Model, SpiResult};

/// Output of one model run.
#[derive(Debug, Clone)]
pub struct SpiRun {
    model: Model,
    policy: WindowPolicy,
    n_windows: usize,
    results: Vec<SpiResult>,
    dropped: usize,
    n_groups: usize,
    low_confidence_groups: usize,
}

impl SpiRun {
    /// Model that produced the run.
    pub fn model(&self) -> Model {
        self.model
    }

    /// Window policy of the run.
    pub fn policy(&self) -> WindowPolicy {
        self.policy
    }

    /// Number of windows generated.
    pub fn n_windows(&self) -> usize {
        self.n_windows
    }

    /// Results in ascending window order.
    pub fn results(&self) -> &[SpiResult] {
        &self.results
    }

    /// Windows dropped for insufficient coverage.
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    /// Number of distinct seasonal groups.
    pub fn n_groups(&self) -> usize {
        self.n_groups
    }

    /// Number of groups below the minimum size.
    pub fn low_confidence_groups(&self) -> usize {
        self.low_confidence_groups
    }
}

/// Computes SPI over calendar-month windows of `config.unit_count()` months.
///
/// # Errors
///
/// Returns an error if the configuration is invalid, the extent does not
/// fit the series, or a baseline group is empty or (in strict mode)
/// undersized.
#[tracing::instrument(skip_all, fields(unit_count = config.unit_count(), n_obs = series.len()))]
pub fn compute_monthly_spi(
    series: &ObservationSeries,
    config: &SpiConfig,
) -> Result<SpiRun, SpiError> {
    config.validate()?;
    let windows = monthly_windows(series.earliest(), series.latest(), config.unit_count())?;
    run_model(Model::Monthly, config.monthly_policy(), &windows, series, config)
}

/// Computes SPI over fixed-day windows positioned by `anchors`.
///
/// # Errors
///
/// As [`compute_monthly_spi`], plus anchor ordering errors.
#[tracing::instrument(skip_all, fields(
    n_anchors = anchors.len(),
    day_count = config.day_count(),
    shift_days = config.shift_days()
))]
pub fn compute_anchored_spi(
    series: &ObservationSeries,
    anchors: &[NaiveDate],
    config: &SpiConfig,
) -> Result<SpiRun, SpiError> {
    config.validate()?;
    let windows = anchored_windows(anchors, config.day_count(), config.shift_days())?;
    run_model(Model::Anchored, config.anchored_policy(), &windows, series, config)
}

fn run_model(
    model: Model,
    policy: WindowPolicy,
    windows: &[Window],
    series: &ObservationSeries,
    config: &SpiConfig,
) -> Result<SpiRun, SpiError> {
    let series = match config.extent() {
        Some(extent) => Cow::Owned(series.clip(extent)?),
        None => Cow::Borrowed(series),
    };

    let aggregation = aggregate_windows(windows, &series)?;
    let dropped = aggregation.dropped();
    let aggregates = aggregation.into_aggregates();

    let baselines = compute_baselines(&aggregates, &policy, &config.baseline_config())?;
    let results = normalize(&aggregates, &baselines)?;

    info!(
        %model,
        %policy,
        n_windows = windows.len(),
        n_results = results.len(),
        dropped,
        n_groups = baselines.groups().len(),
        "SPI run complete"
    );

    Ok(SpiRun {
        model,
        policy,
        n_windows: windows.len(),
        results,
        dropped,
        n_groups: baselines.groups().len(),
        low_confidence_groups: baselines.low_confidence_count(),
    })
}
