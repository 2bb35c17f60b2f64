//! Temporal models: calendar-month windows and fixed-day windows.

use aridity_calendar::{DoyConvention, month_span};
use chrono::NaiveDate;

use crate::error::WindowError;

/// Default fixed-day window length, matching a 16-day composite sensor.
pub const DEFAULT_DAY_COUNT: u32 = 16;

/// Month counts accepted for the calendar-month model.
pub const VALID_UNIT_COUNTS: [u32; 14] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 24, 48];

/// Days in a year, the threshold above which fixed-day windows stop being
/// seasonal.
const DAYS_PER_YEAR: u32 = 365;

/// How windows are sized and how their coverage is judged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WindowPolicy {
    /// Windows of `unit_count` calendar months. A window is covered when the
    /// span between its first and last observation, rounded to whole months,
    /// reaches `unit_count`.
    Months {
        /// SPI order in months.
        unit_count: u32,
    },
    /// Windows of `day_count` days starting `shift_days` after an anchor. A
    /// window is covered when it holds at least `day_count` observations.
    FixedDays {
        /// Window length in days.
        day_count: u32,
        /// Signed offset applied to every anchor.
        shift_days: i32,
    },
}

impl WindowPolicy {
    /// Calendar-month policy.
    ///
    /// # Errors
    ///
    /// Returns [`WindowError::InvalidUnitCount`] unless `unit_count` is one of
    /// [`VALID_UNIT_COUNTS`].
    pub fn months(unit_count: u32) -> Result<Self, WindowError> {
        let policy = Self::Months { unit_count };
        policy.validate()?;
        Ok(policy)
    }

    /// Fixed-day policy.
    ///
    /// # Errors
    ///
    /// Returns [`WindowError::InvalidDayCount`] if `day_count` is zero.
    pub fn fixed_days(day_count: u32, shift_days: i32) -> Result<Self, WindowError> {
        let policy = Self::FixedDays {
            day_count,
            shift_days,
        };
        policy.validate()?;
        Ok(policy)
    }

    /// Validates the policy parameters.
    ///
    /// # Errors
    ///
    /// See [`months`](Self::months) and [`fixed_days`](Self::fixed_days).
    pub fn validate(&self) -> Result<(), WindowError> {
        match *self {
            Self::Months { unit_count } => {
                if !VALID_UNIT_COUNTS.contains(&unit_count) {
                    return Err(WindowError::InvalidUnitCount { unit_count });
                }
            }
            Self::FixedDays { day_count, .. } => {
                if day_count == 0 {
                    return Err(WindowError::InvalidDayCount { day_count });
                }
            }
        }
        Ok(())
    }

    /// `true` when a window spans a full year or more, so seasonal grouping
    /// no longer applies.
    pub fn is_annual_or_longer(&self) -> bool {
        match *self {
            Self::Months { unit_count } => unit_count >= 12,
            Self::FixedDays { day_count, .. } => day_count >= DAYS_PER_YEAR,
        }
    }

    /// Day-of-year convention used to compare seasonal positions.
    ///
    /// Month windows are anchored on a day of the month, so Feb 29 folds
    /// onto Feb 28. Fixed-day windows follow sensor composites that restart
    /// at day 1 every year, so the ordinal day is used.
    pub fn doy_convention(&self) -> DoyConvention {
        match self {
            Self::Months { .. } => DoyConvention::LeapFolded,
            Self::FixedDays { .. } => DoyConvention::Ordinal,
        }
    }

    /// Minimum coverage check for a window with `used_count` members whose
    /// first and last dates are `true_start` and `true_end`.
    ///
    /// # Errors
    ///
    /// Propagates calendar errors from the month span computation.
    pub fn is_covered(
        &self,
        used_count: usize,
        true_start: NaiveDate,
        true_end: NaiveDate,
    ) -> Result<bool, WindowError> {
        if used_count == 0 {
            return Ok(false);
        }
        match *self {
            Self::Months { unit_count } => {
                let span = month_span(true_start, true_end)?.round();
                Ok(span >= f64::from(unit_count))
            }
            Self::FixedDays { day_count, .. } => Ok(used_count >= day_count as usize),
        }
    }
}

impl std::fmt::Display for WindowPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Months { unit_count } => write!(f, "{unit_count}-month"),
            Self::FixedDays {
                day_count,
                shift_days,
            } => write!(f, "{day_count}-day (shift {shift_days:+})"),
        }
    }
}
