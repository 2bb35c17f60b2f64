//! Accumulated validation utilities.
//!
//! [`ValidationCollector`] gathers every problem found in an input into a
//! single error instead of failing on the first one. It is shared by the
//! series constructor and the feed readers.

use chrono::NaiveDate;

use crate::error::RasterError;
use crate::grid::Grid;

/// Maximum number of individual messages kept in the error details.
const MAX_DETAILS: usize = 20;

/// Accumulates validation errors and converts them into a single error.
///
/// Push zero or more messages, then call [`finish`](Self::finish) (or
/// [`finish_with`](Self::finish_with) for another crate's error type) to get
/// `Ok(())` when nothing was recorded.
#[derive(Debug, Default)]
pub struct ValidationCollector {
    errors: Vec<String>,
    count: usize,
}

impl ValidationCollector {
    /// Creates an empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one validation error.
    pub fn push(&mut self, msg: impl Into<String>) {
        self.count += 1;
        if self.errors.len() < MAX_DETAILS {
            self.errors.push(msg.into());
        }
    }

    /// Number of recorded errors, including those beyond the detail cap.
    pub fn len(&self) -> usize {
        self.count
    }

    /// `true` if nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// `Ok(())` if nothing was recorded, otherwise
    /// [`RasterError::Validation`].
    pub fn finish(self) -> Result<(), RasterError> {
        self.finish_with(|count, details| RasterError::Validation { count, details })
    }

    /// `Ok(())` if nothing was recorded, otherwise the error built by
    /// `into_err` from the total count and the first messages joined with
    /// `"; "`.
    pub fn finish_with<E>(self, into_err: impl FnOnce(usize, String) -> E) -> Result<(), E> {
        if self.count == 0 {
            Ok(())
        } else {
            Err(into_err(self.count, self.errors.join("; ")))
        }
    }
}

/// Check that every cell of `grid` is finite and non-negative.
pub(crate) fn check_precip_values(c: &mut ValidationCollector, date: NaiveDate, grid: &Grid) {
    for ((row, col), &val) in grid.view().indexed_iter() {
        if !val.is_finite() {
            c.push(format!("non-finite precipitation on {date} at ({row}, {col})"));
        } else if val < 0.0 {
            c.push(format!(
                "negative precipitation on {date} at ({row}, {col}): {val}"
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2020, 6, 1).unwrap()
    }

    #[test]
    fn collector_empty_is_ok() {
        assert!(ValidationCollector::new().finish().is_ok());
    }

    #[test]
    fn collector_counts_beyond_detail_cap() {
        let mut c = ValidationCollector::new();
        for i in 0..25 {
            c.push(format!("problem {i}"));
        }
        assert_eq!(c.len(), 25);
        match c.finish().unwrap_err() {
            RasterError::Validation { count, details } => {
                assert_eq!(count, 25);
                assert_eq!(details.split("; ").count(), MAX_DETAILS);
                assert!(details.contains("problem 19"));
                assert!(!details.contains("problem 20"));
            }
            other => panic!("expected Validation, got {other:?}"),
        }
    }

    #[test]
    fn finish_with_maps_into_caller_error() {
        let mut c = ValidationCollector::new();
        assert!(c.is_empty());
        c.push("a");
        c.push("b");
        let err = c.finish_with(|count, details| format!("{count}: {details}"));
        assert_eq!(err.unwrap_err(), "2: a; b");
    }

    #[test]
    fn precip_values_flag_negative_and_nan() {
        let grid = Grid::from_shape_vec(1, 3, vec![1.0, -0.5, f64::NAN]).unwrap();
        let mut c = ValidationCollector::new();
        check_precip_values(&mut c, day(), &grid);
        assert_eq!(c.len(), 2);
        let details = c.finish().unwrap_err().to_string();
        assert!(details.contains("negative precipitation on 2020-06-01 at (0, 1): -0.5"));
        assert!(details.contains("non-finite precipitation on 2020-06-01 at (0, 2)"));
    }
}
