//! Error types for the aridity-calendar crate.

use chrono::NaiveDate;

/// Error type for all fallible operations in the aridity-calendar crate.
///
/// Covers invalid day-of-year values and date arithmetic that leaves the
/// range representable by [`NaiveDate`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a day-of-year value is outside the valid range 1..=366.
    #[error("invalid day of year: {doy} (must be 1..=366)")]
    InvalidDoy {
        /// The invalid day-of-year value that was provided.
        doy: u16,
    },

    /// Returned when shifting a date leaves the representable range.
    #[error("date {date} shifted by {offset} {unit} is out of range")]
    OutOfRange {
        /// The date being shifted.
        date: NaiveDate,
        /// The signed shift that was applied.
        offset: i64,
        /// Unit of the shift (`"months"` or `"days"`).
        unit: &'static str,
    },
}
