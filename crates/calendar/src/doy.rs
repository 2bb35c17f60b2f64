//! Day-of-year newtype under two calendar conventions.

use chrono::{Datelike, NaiveDate};

use crate::error::CalendarError;

/// How a Gregorian date is mapped onto a day-of-year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DoyConvention {
    /// 365-day positions derived from `(month, day)`; Feb 29 folds onto
    /// Feb 28 so the same calendar date has the same position every year.
    #[default]
    LeapFolded,
    /// Chrono ordinal day (1..=366); day 61 is Mar 1 in a leap year and
    /// Mar 2 otherwise.
    Ordinal,
}

/// Day-of-year (1..=366).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Doy(u16);

/// Number of days in each month of a 365-day year (index 0 unused).
pub(crate) const DAYS_PER_MONTH: [u8; 13] = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Day-of-year on which each month starts in a 365-day year (index 0 unused).
pub(crate) const MONTH_START_DOY: [u16; 13] =
    [0, 1, 32, 60, 91, 121, 152, 182, 213, 244, 274, 305, 335];

impl Doy {
    /// Creates a new `Doy` from a day-of-year value.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidDoy`] if `doy` is not in 1..=366.
    pub fn new(doy: u16) -> Result<Self, CalendarError> {
        if !(1..=366).contains(&doy) {
            return Err(CalendarError::InvalidDoy { doy });
        }
        Ok(Self(doy))
    }

    /// Returns the day-of-year of `date` under `convention`.
    ///
    /// Infallible: every Gregorian date maps to a valid position.
    pub fn of_date(date: NaiveDate, convention: DoyConvention) -> Self {
        match convention {
            DoyConvention::Ordinal => Self(date.ordinal() as u16),
            DoyConvention::LeapFolded => {
                let month = date.month() as usize;
                let day = (date.day() as u8).min(DAYS_PER_MONTH[month]);
                Self(MONTH_START_DOY[month] + u16::from(day) - 1)
            }
        }
    }

    /// Returns the inner day-of-year value.
    pub fn get(self) -> u16 {
        self.0
    }
}

impl std::fmt::Display for Doy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "doy {}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn new_bounds() {
        assert_eq!(Doy::new(1).unwrap().get(), 1);
        assert_eq!(Doy::new(366).unwrap().get(), 366);
        assert_eq!(Doy::new(0).unwrap_err(), CalendarError::InvalidDoy { doy: 0 });
        assert_eq!(
            Doy::new(367).unwrap_err(),
            CalendarError::InvalidDoy { doy: 367 }
        );
    }

    #[test]
    fn leap_folded_aligns_across_years() {
        let conv = DoyConvention::LeapFolded;
        assert_eq!(
            Doy::of_date(date(2019, 3, 1), conv),
            Doy::of_date(date(2020, 3, 1), conv)
        );
        assert_eq!(
            Doy::of_date(date(2020, 2, 29), conv),
            Doy::of_date(date(2020, 2, 28), conv)
        );
        assert_eq!(Doy::of_date(date(2020, 12, 31), conv).get(), 365);
    }

    #[test]
    fn ordinal_matches_chrono() {
        let conv = DoyConvention::Ordinal;
        assert_eq!(Doy::of_date(date(2020, 3, 1), conv).get(), 61);
        assert_eq!(Doy::of_date(date(2019, 3, 1), conv).get(), 60);
        assert_eq!(Doy::of_date(date(2020, 12, 31), conv).get(), 366);
    }

    #[test]
    fn leap_folded_matches_ordinal_in_common_years() {
        let mut d = date(2021, 1, 1);
        while d.year() == 2021 {
            assert_eq!(
                Doy::of_date(d, DoyConvention::LeapFolded),
                Doy::of_date(d, DoyConvention::Ordinal),
                "{d}"
            );
            d = d.succ_opt().unwrap();
        }
    }

    #[test]
    fn table_integrity_month_start() {
        for m in 1..12usize {
            assert_eq!(
                MONTH_START_DOY[m] + DAYS_PER_MONTH[m] as u16,
                MONTH_START_DOY[m + 1],
                "MONTH_START_DOY mismatch at month {m}"
            );
        }
    }
}
