//! Coverage-checked summation of observations inside windows.

use aridity_raster::{Grid, ObservationSeries, sum_grids};
use chrono::NaiveDate;
use rayon::prelude::*;
use tracing::debug;

use crate::error::WindowError;
use crate::window::Window;

/// Summed precipitation of one covered window, with its provenance.
#[derive(Debug, Clone, PartialEq)]
pub struct Aggregate {
    window: Window,
    sum_grid: Grid,
    used_count: usize,
    true_start: NaiveDate,
    true_end: NaiveDate,
}

impl Aggregate {
    /// Nominal window this aggregate was built from.
    pub fn window(&self) -> &Window {
        &self.window
    }

    /// Cell-wise sum over all member observations.
    pub fn sum_grid(&self) -> &Grid {
        &self.sum_grid
    }

    /// Number of observations that contributed.
    pub fn used_count(&self) -> usize {
        self.used_count
    }

    /// Date of the first contributing observation.
    pub fn true_start(&self) -> NaiveDate {
        self.true_start
    }

    /// Date of the last contributing observation.
    pub fn true_end(&self) -> NaiveDate {
        self.true_end
    }

    /// Days between the first and last contributing observation.
    ///
    /// A single-member aggregate has a span of zero.
    pub fn observed_span(&self) -> i64 {
        self.true_end
            .signed_duration_since(self.true_start)
            .num_days()
    }
}

/// Aggregates of a batch of windows plus the number that were dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct Aggregation {
    aggregates: Vec<Aggregate>,
    dropped: usize,
}

impl Aggregation {
    /// Covered aggregates in window order.
    pub fn aggregates(&self) -> &[Aggregate] {
        &self.aggregates
    }

    /// Consumes the batch, returning the aggregates.
    pub fn into_aggregates(self) -> Vec<Aggregate> {
        self.aggregates
    }

    /// Windows that failed the coverage rule.
    pub fn dropped(&self) -> usize {
        self.dropped
    }
}

/// Sums the observations inside `window`.
///
/// Returns `Ok(None)` when the window has no members or fails its policy's
/// coverage rule. Dropped windows are never zero-filled.
///
/// # Errors
///
/// - [`WindowError::MalformedWindow`] if `window.start() >= window.end()`.
/// - [`WindowError::Calendar`] if the month span cannot be computed.
pub fn aggregate_window(
    window: &Window,
    series: &ObservationSeries,
) -> Result<Option<Aggregate>, WindowError> {
    if window.start() >= window.end() {
        return Err(WindowError::MalformedWindow {
            start: window.start(),
            end: window.end(),
        });
    }

    let members = window.members(series);
    let (Some(first), Some(last)) = (members.first(), members.last()) else {
        debug!(%window, "dropped empty window");
        return Ok(None);
    };
    let (true_start, true_end) = (first.date(), last.date());
    let used_count = members.len();

    if !window
        .policy()
        .is_covered(used_count, true_start, true_end)?
    {
        debug!(%window, used_count, %true_start, %true_end, "dropped under-covered window");
        return Ok(None);
    }

    let Some(sum_grid) = sum_grids(members.iter().map(|o| o.grid())) else {
        return Ok(None);
    };

    Ok(Some(Aggregate {
        window: *window,
        sum_grid,
        used_count,
        true_start,
        true_end,
    }))
}

/// Aggregates every window in parallel, keeping window order.
///
/// # Errors
///
/// Returns the first error raised by [`aggregate_window`].
#[tracing::instrument(skip_all, fields(n_windows = windows.len(), n_obs = series.len()))]
pub fn aggregate_windows(
    windows: &[Window],
    series: &ObservationSeries,
) -> Result<Aggregation, WindowError> {
    let results = windows
        .par_iter()
        .map(|w| aggregate_window(w, series))
        .collect::<Result<Vec<_>, _>>()?;

    let aggregates: Vec<Aggregate> = results.into_iter().flatten().collect();
    let dropped = windows.len() - aggregates.len();
    debug!(n_aggregates = aggregates.len(), dropped, "aggregation complete");

    Ok(Aggregation {
        aggregates,
        dropped,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::WindowPolicy;
    use approx::assert_relative_eq;
    use aridity_raster::Observation;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn daily_series(start: NaiveDate, n: usize, value: f64) -> ObservationSeries {
        let obs = start
            .iter_days()
            .take(n)
            .map(|d| Observation::new(d, Grid::filled(2, 2, value).unwrap()))
            .collect();
        ObservationSeries::new(obs).unwrap()
    }

    fn fixed(start: NaiveDate, days: u32) -> Window {
        let end = start + chrono::Days::new(u64::from(days));
        Window::new(start, end, WindowPolicy::fixed_days(days, 0).unwrap()).unwrap()
    }

    #[test]
    fn sums_member_grids() {
        let series = daily_series(date(2021, 1, 1), 40, 2.0);
        let w = fixed(date(2021, 1, 3), 16);
        let agg = aggregate_window(&w, &series).unwrap().unwrap();
        assert_eq!(agg.used_count(), 16);
        assert_eq!(agg.true_start(), date(2021, 1, 3));
        assert_eq!(agg.true_end(), date(2021, 1, 18));
        assert_eq!(agg.observed_span(), 15);
        assert_relative_eq!(agg.sum_grid().get(1, 1).unwrap(), 32.0);
    }

    #[test]
    fn single_member_span_is_zero() {
        let series = daily_series(date(2021, 1, 10), 1, 4.0);
        let w = fixed(date(2021, 1, 10), 1);
        let agg = aggregate_window(&w, &series).unwrap().unwrap();
        assert_eq!(agg.used_count(), 1);
        assert_eq!(agg.true_start(), agg.true_end());
        assert_eq!(agg.observed_span(), 0);
    }

    #[test]
    fn span_matches_member_dates_under_edge_gaps() {
        // Jan 1 and Jan 2 missing.
        let series = daily_series(date(2021, 1, 3), 40, 1.0);
        let w = Window::new(
            date(2021, 1, 1),
            date(2021, 2, 1),
            WindowPolicy::months(1).unwrap(),
        )
        .unwrap();
        let agg = aggregate_window(&w, &series).unwrap().unwrap();
        assert_eq!(
            agg.observed_span(),
            agg.true_end().signed_duration_since(agg.true_start()).num_days()
        );
        assert_eq!(agg.observed_span(), 28);
    }

    #[test]
    fn month_coverage_rounding_edge() {
        let w = Window::new(
            date(2021, 1, 1),
            date(2021, 2, 1),
            WindowPolicy::months(1).unwrap(),
        )
        .unwrap();
        // Jan 15..=31: 16/31 of a month rounds to one.
        let kept = daily_series(date(2021, 1, 15), 17, 1.0);
        let agg = aggregate_window(&w, &kept).unwrap().unwrap();
        assert_eq!(agg.used_count(), 17);
        // Jan 16..=31: 15/31 rounds to zero.
        let dropped = daily_series(date(2021, 1, 16), 16, 1.0);
        assert!(aggregate_window(&w, &dropped).unwrap().is_none());
    }

    #[test]
    fn coverage_boundary() {
        // 16 observations in a 16-day window: covered.
        let full = daily_series(date(2021, 1, 1), 16, 1.0);
        let w = fixed(date(2021, 1, 1), 16);
        assert!(aggregate_window(&w, &full).unwrap().is_some());

        // One fewer: dropped.
        let short = daily_series(date(2021, 1, 1), 15, 1.0);
        assert!(aggregate_window(&w, &short).unwrap().is_none());
    }

    #[test]
    fn empty_window_dropped() {
        let series = daily_series(date(2021, 1, 1), 10, 1.0);
        let w = fixed(date(2022, 1, 1), 16);
        assert!(aggregate_window(&w, &series).unwrap().is_none());
    }

    #[test]
    fn month_window_with_edge_gap_is_kept() {
        // Observations from Jan 5 through Jan 31.
        let series = daily_series(date(2021, 1, 5), 27, 1.0);
        let w = Window::new(
            date(2021, 1, 1),
            date(2021, 2, 1),
            WindowPolicy::months(1).unwrap(),
        )
        .unwrap();
        let agg = aggregate_window(&w, &series).unwrap().unwrap();
        assert_eq!(agg.used_count(), 27);
        assert_relative_eq!(agg.sum_grid().get(0, 0).unwrap(), 27.0);
    }

    #[test]
    fn batch_preserves_order_and_counts_drops() {
        let series = daily_series(date(2021, 1, 1), 40, 1.0);
        let windows = vec![
            fixed(date(2021, 1, 1), 16),
            fixed(date(2021, 1, 17), 16),
            fixed(date(2021, 2, 2), 16),
        ];
        let batch = aggregate_windows(&windows, &series).unwrap();
        assert_eq!(batch.dropped(), 1);
        assert_eq!(batch.aggregates().len(), 2);
        assert_eq!(batch.aggregates()[0].window(), &windows[0]);
        assert_eq!(batch.aggregates()[1].window(), &windows[1]);
    }
}
