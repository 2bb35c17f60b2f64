//! Error types for the aridity-raster crate.

use chrono::NaiveDate;

/// Error type for all fallible operations in the aridity-raster crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RasterError {
    /// Returned when an observation series contains no observations.
    #[error("observation series is empty")]
    EmptySeries,

    /// Returned when a grid has zero rows or columns.
    #[error("grid must have at least one row and one column, got {rows}x{cols}")]
    EmptyGrid {
        /// Number of rows.
        rows: usize,
        /// Number of columns.
        cols: usize,
    },

    /// Returned when a flat buffer does not match the requested grid shape.
    #[error("grid buffer of {len} values does not fit shape {rows}x{cols}")]
    BufferShape {
        /// Length of the supplied buffer.
        len: usize,
        /// Requested number of rows.
        rows: usize,
        /// Requested number of columns.
        cols: usize,
    },

    /// Returned when an observation grid differs in shape from the series.
    #[error("grid on {date} has shape {got:?}, expected {expected:?}")]
    ShapeMismatch {
        /// Date of the offending observation.
        date: NaiveDate,
        /// Shape shared by the rest of the series.
        expected: (usize, usize),
        /// Shape of the offending grid.
        got: (usize, usize),
    },

    /// Returned when timestamps are not strictly ascending.
    #[error("observation on {current} does not follow {previous}")]
    NotAscending {
        /// Timestamp of the preceding observation.
        previous: NaiveDate,
        /// Timestamp that failed to advance.
        current: NaiveDate,
    },

    /// Returned when a clipping extent does not fit inside the grid.
    #[error(
        "extent rows {row}..{row_end}, cols {col}..{col_end} exceeds grid shape {shape:?}"
    )]
    ExtentOutOfBounds {
        /// First row of the extent.
        row: usize,
        /// One past the last row of the extent.
        row_end: usize,
        /// First column of the extent.
        col: usize,
        /// One past the last column of the extent.
        col_end: usize,
        /// Shape of the grid being clipped.
        shape: (usize, usize),
    },

    /// Returned when a clipping extent is degenerate.
    #[error("invalid extent: {reason}")]
    InvalidExtent {
        /// Description of the problem.
        reason: String,
    },

    /// Returned when one or more value checks fail.
    #[error("{count} validation error(s): {details}")]
    Validation {
        /// Number of accumulated validation failures.
        count: usize,
        /// Human-readable summary of the failures.
        details: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_shape_mismatch() {
        let err = RasterError::ShapeMismatch {
            date: NaiveDate::from_ymd_opt(2020, 1, 2).unwrap(),
            expected: (2, 3),
            got: (3, 2),
        };
        assert_eq!(
            err.to_string(),
            "grid on 2020-01-02 has shape (3, 2), expected (2, 3)"
        );
    }

    #[test]
    fn display_not_ascending() {
        let err = RasterError::NotAscending {
            previous: NaiveDate::from_ymd_opt(2020, 1, 2).unwrap(),
            current: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
        };
        assert_eq!(
            err.to_string(),
            "observation on 2020-01-01 does not follow 2020-01-02"
        );
    }

    #[test]
    fn display_extent_out_of_bounds() {
        let err = RasterError::ExtentOutOfBounds {
            row: 1,
            row_end: 5,
            col: 0,
            col_end: 2,
            shape: (4, 4),
        };
        assert_eq!(
            err.to_string(),
            "extent rows 1..5, cols 0..2 exceeds grid shape (4, 4)"
        );
    }

    #[test]
    fn display_validation() {
        let err = RasterError::Validation {
            count: 2,
            details: "a; b".to_string(),
        };
        assert_eq!(err.to_string(), "2 validation error(s): a; b");
    }

    #[test]
    fn error_is_send_sync_and_std_error() {
        fn assert_bounds<T: Send + Sync + std::error::Error>() {}
        assert_bounds::<RasterError>();
    }
}
