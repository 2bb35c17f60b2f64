//! Error types for the aridity-window crate.

use chrono::NaiveDate;

/// Error type for all fallible operations in the aridity-window crate.
///
/// Every variant except the wrapped calendar and raster errors is a
/// configuration error: it is raised while windows are being set up, before
/// any aggregation runs.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum WindowError {
    /// Returned when the SPI order is not one of 1..=12, 24 or 48.
    #[error("invalid unit count: {unit_count} (must be 1..=12, 24 or 48)")]
    InvalidUnitCount {
        /// The rejected month count.
        unit_count: u32,
    },

    /// Returned when a fixed-day window length is not positive.
    #[error("invalid day count: {day_count} (must be positive)")]
    InvalidDayCount {
        /// The rejected day count.
        day_count: u32,
    },

    /// Returned when a window does not satisfy `start < end`.
    #[error("malformed window: start {start} is not before end {end}")]
    MalformedWindow {
        /// Nominal start.
        start: NaiveDate,
        /// Nominal end.
        end: NaiveDate,
    },

    /// Returned when the earliest record date is after the latest.
    #[error("record bounds inverted: earliest {earliest} is after latest {latest}")]
    InvertedRecord {
        /// Earliest observation date.
        earliest: NaiveDate,
        /// Latest observation date.
        latest: NaiveDate,
    },

    /// Returned when anchor dates are not strictly ascending.
    #[error("anchor {current} does not follow {previous}")]
    AnchorsNotAscending {
        /// The preceding anchor.
        previous: NaiveDate,
        /// The anchor that failed to advance.
        current: NaiveDate,
    },

    /// Calendar error.
    #[error(transparent)]
    Calendar(#[from] aridity_calendar::CalendarError),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn display_invalid_unit_count() {
        let e = WindowError::InvalidUnitCount { unit_count: 18 };
        assert_eq!(
            e.to_string(),
            "invalid unit count: 18 (must be 1..=12, 24 or 48)"
        );
    }

    #[test]
    fn display_invalid_day_count() {
        let e = WindowError::InvalidDayCount { day_count: 0 };
        assert_eq!(e.to_string(), "invalid day count: 0 (must be positive)");
    }

    #[test]
    fn display_malformed_window() {
        let e = WindowError::MalformedWindow {
            start: date(2020, 2, 1),
            end: date(2020, 1, 1),
        };
        assert_eq!(
            e.to_string(),
            "malformed window: start 2020-02-01 is not before end 2020-01-01"
        );
    }

    #[test]
    fn display_anchors_not_ascending() {
        let e = WindowError::AnchorsNotAscending {
            previous: date(2020, 1, 17),
            current: date(2020, 1, 1),
        };
        assert_eq!(e.to_string(), "anchor 2020-01-01 does not follow 2020-01-17");
    }

    #[test]
    fn from_calendar_error() {
        let ce = aridity_calendar::CalendarError::InvalidDoy { doy: 0 };
        let we: WindowError = ce.into();
        assert!(matches!(we, WindowError::Calendar(_)));
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<WindowError>();
    }
}
