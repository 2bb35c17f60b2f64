//! Z-score normalization of aggregates against their group baselines.

use aridity_baseline::BaselineSet;
use aridity_stats::z_score;
use aridity_window::Aggregate;
use ndarray::Zip;
use rayon::prelude::*;

use crate::error::SpiError;
use crate::result::SpiResult;

/// Normalizes one aggregate against the baseline of its group.
///
/// Each cell is `(sum - mean) / stddev`. A cell whose standard deviation is
/// at or below [`aridity_stats::ZERO_SD_EPS`] is `None`. `index` is the
/// aggregate's position in the slice `baselines` was computed from.
///
/// # Errors
///
/// Returns [`SpiError::MissingGroup`] if `index` has no group.
pub fn normalize_aggregate(
    aggregate: &Aggregate,
    baselines: &BaselineSet,
    index: usize,
) -> Result<SpiResult, SpiError> {
    let group = baselines
        .group_of(index)
        .ok_or(SpiError::MissingGroup { index })?;
    let baseline = group.baseline();

    let spi = Zip::from(aggregate.sum_grid().view())
        .and(baseline.mean_grid().view())
        .and(baseline.stddev_grid().view())
        .map_collect(|&sum, &mean, &sd| z_score(sum, mean, sd));

    Ok(SpiResult::new(
        *aggregate.window(),
        spi,
        aggregate.used_count(),
        aggregate.true_start(),
        aggregate.true_end(),
        group.size(),
        group.low_confidence(),
    ))
}

/// Normalizes every aggregate in parallel, keeping input order.
///
/// # Errors
///
/// Returns [`SpiError::MissingGroup`] if `baselines` was computed from a
/// different set of aggregates.
pub fn normalize(
    aggregates: &[Aggregate],
    baselines: &BaselineSet,
) -> Result<Vec<SpiResult>, SpiError> {
    aggregates
        .par_iter()
        .enumerate()
        .map(|(i, agg)| normalize_aggregate(agg, baselines, i))
        .collect()
}
