//! Nominal half-open time windows.

use aridity_calendar::{Doy, DoyRange};
use aridity_raster::{Observation, ObservationSeries};
use chrono::NaiveDate;

use crate::error::WindowError;
use crate::policy::WindowPolicy;

/// A nominal interval `[start, end)` under a [`WindowPolicy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Window {
    start: NaiveDate,
    end: NaiveDate,
    policy: WindowPolicy,
}

impl Window {
    /// Creates a window.
    ///
    /// # Errors
    ///
    /// Returns [`WindowError::MalformedWindow`] if `start >= end`.
    pub fn new(start: NaiveDate, end: NaiveDate, policy: WindowPolicy) -> Result<Self, WindowError> {
        if start >= end {
            return Err(WindowError::MalformedWindow { start, end });
        }
        Ok(Self { start, end, policy })
    }

    /// Inclusive nominal start.
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// Exclusive nominal end.
    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Policy the window was generated under.
    pub fn policy(&self) -> WindowPolicy {
        self.policy
    }

    /// Nominal length in days.
    pub fn len_days(&self) -> i64 {
        self.end.signed_duration_since(self.start).num_days()
    }

    /// `true` if `date` lies in `[start, end)`.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date < self.end
    }

    /// Observations of `series` that fall inside the window.
    pub fn members<'a>(&self, series: &'a ObservationSeries) -> &'a [Observation] {
        series.range(self.start, self.end)
    }

    /// Seasonal position of the nominal end.
    pub fn end_position(&self) -> Doy {
        Doy::of_date(self.end, self.policy.doy_convention())
    }

    /// Seasonal range covered by the nominal bounds.
    pub fn doy_range(&self) -> DoyRange {
        DoyRange::from_dates(self.start, self.end, self.policy.doy_convention())
    }
}

impl std::fmt::Display for Window {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}) {}", self.start, self.end, self.policy)
    }
}
