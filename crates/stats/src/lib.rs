//! Statistical helper functions for the aridity workspace.
//!
//! Baselines follow the population convention (divide by N) used in the
//! standardized precipitation index literature.

use serde::Serialize;

/// Standard deviations at or below this value are treated as zero.
pub const ZERO_SD_EPS: f64 = 1e-10;

/// Arithmetic mean of a slice. Returns 0.0 if empty.
pub fn mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let sum: f64 = data.iter().sum();
    sum / data.len() as f64
}

/// Population variance with N denominator. Returns 0.0 if empty.
pub fn population_variance(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let m = mean(data);
    data.iter().map(|&x| (x - m) * (x - m)).sum::<f64>() / data.len() as f64
}

/// Population standard deviation with N denominator. Returns 0.0 if empty.
pub fn population_sd(data: &[f64]) -> f64 {
    population_variance(data).sqrt()
}

/// Standard score of `value` against `mean` and `sd`.
///
/// Returns `None` when `sd` is not finite or is at or below [`ZERO_SD_EPS`].
pub fn z_score(value: f64, mean: f64, sd: f64) -> Option<f64> {
    if !sd.is_finite() || sd <= ZERO_SD_EPS {
        return None;
    }
    Some((value - mean) / sd)
}

/// Descriptive summary of the finite values in a sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Summary {
    /// Number of finite values.
    pub n: usize,
    /// Smallest finite value.
    pub min: f64,
    /// Largest finite value.
    pub max: f64,
    /// Mean of the finite values.
    pub mean: f64,
}

/// Summarises the finite values yielded by `values`.
///
/// Returns `None` if no finite value is present.
pub fn summarize(values: impl IntoIterator<Item = f64>) -> Option<Summary> {
    let mut n = 0usize;
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    let mut sum = 0.0;
    for v in values.into_iter().filter(|v| v.is_finite()) {
        n += 1;
        min = min.min(v);
        max = max.max(v);
        sum += v;
    }
    (n > 0).then(|| Summary {
        n,
        min,
        max,
        mean: sum / n as f64,
    })
}
