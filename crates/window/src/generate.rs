//! Window generation for both temporal models.

use aridity_calendar::{shift_months, whole_months_between};
use chrono::NaiveDate;
use tracing::debug;

use crate::error::WindowError;
use crate::policy::WindowPolicy;
use crate::window::Window;

/// Generates calendar-month windows covering `earliest..=latest`.
///
/// Windows are `unit_count` months wide, counted backward from the day after
/// `latest` so the most recent observation falls in the last window. The
/// number of windows is `floor(whole_months(earliest, latest) / unit_count) + 1`;
/// the oldest may start before `earliest` and be dropped later for coverage.
///
/// Both bounds of window `k` are offsets from the same anchor, so every
/// window starts exactly where the previous one ends. Output is ascending by
/// end date.
///
/// # Errors
///
/// - [`WindowError::InvalidUnitCount`] for an unsupported SPI order.
/// - [`WindowError::InvertedRecord`] if `earliest > latest`.
/// - [`WindowError::Calendar`] if a bound leaves the representable range.
#[tracing::instrument(level = "debug", skip_all, fields(%earliest, %latest, unit_count))]
pub fn monthly_windows(
    earliest: NaiveDate,
    latest: NaiveDate,
    unit_count: u32,
) -> Result<Vec<Window>, WindowError> {
    let policy = WindowPolicy::months(unit_count)?;
    if earliest > latest {
        return Err(WindowError::InvertedRecord { earliest, latest });
    }

    let anchor = aridity_calendar::shift_days(latest, 1)?;
    let step = i64::from(unit_count);
    let n_windows = whole_months_between(earliest, latest)? / step + 1;

    let windows = (0..n_windows)
        .rev()
        .map(|k| {
            let end = shift_months(anchor, -k * step)?;
            let start = shift_months(anchor, -(k + 1) * step)?;
            Window::new(start, end, policy)
        })
        .collect::<Result<Vec<_>, _>>()?;

    debug!(n_windows = windows.len(), "generated monthly windows");
    Ok(windows)
}

/// Generates one fixed-day window per anchor date.
///
/// Each window is `[anchor + shift_days, anchor + shift_days + day_count)`.
/// A negative shift moves both bounds earlier; the length never changes.
///
/// # Errors
///
/// - [`WindowError::InvalidDayCount`] if `day_count` is zero.
/// - [`WindowError::AnchorsNotAscending`] if anchors repeat or go backward.
/// - [`WindowError::Calendar`] if a shifted bound leaves the representable range.
#[tracing::instrument(level = "debug", skip_all, fields(n_anchors = anchors.len(), day_count, shift_days))]
pub fn anchored_windows(
    anchors: &[NaiveDate],
    day_count: u32,
    shift_days: i32,
) -> Result<Vec<Window>, WindowError> {
    let policy = WindowPolicy::fixed_days(day_count, shift_days)?;

    if let Some(pair) = anchors.windows(2).find(|pair| pair[1] <= pair[0]) {
        return Err(WindowError::AnchorsNotAscending {
            previous: pair[0],
            current: pair[1],
        });
    }

    let windows = anchors
        .iter()
        .map(|&anchor| {
            let start = aridity_calendar::shift_days(anchor, i64::from(shift_days))?;
            let end = aridity_calendar::shift_days(start, i64::from(day_count))?;
            Window::new(start, end, policy)
        })
        .collect::<Result<Vec<_>, _>>()?;

    debug!(n_windows = windows.len(), "generated anchored windows");
    Ok(windows)
}
