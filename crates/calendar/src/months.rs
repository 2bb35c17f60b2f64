//! Calendar-month shifting and fractional month spans.

use chrono::{Datelike, Months, NaiveDate, TimeDelta};

use crate::error::CalendarError;

/// Shifts `date` by a signed number of calendar months.
///
/// The day of month is clamped to the length of the target month, so
/// Mar 31 shifted by -1 month is Feb 28 (or Feb 29 in a leap year).
///
/// # Errors
///
/// Returns [`CalendarError::OutOfRange`] if the result is not representable.
pub fn shift_months(date: NaiveDate, months: i64) -> Result<NaiveDate, CalendarError> {
    let out_of_range = || CalendarError::OutOfRange {
        date,
        offset: months,
        unit: "months",
    };
    let magnitude = u32::try_from(months.unsigned_abs()).map_err(|_| out_of_range())?;
    let shifted = if months >= 0 {
        date.checked_add_months(Months::new(magnitude))
    } else {
        date.checked_sub_months(Months::new(magnitude))
    };
    shifted.ok_or_else(out_of_range)
}

/// Shifts `date` by a signed number of days.
///
/// # Errors
///
/// Returns [`CalendarError::OutOfRange`] if the result is not representable.
pub fn shift_days(date: NaiveDate, days: i64) -> Result<NaiveDate, CalendarError> {
    TimeDelta::try_days(days)
        .and_then(|delta| date.checked_add_signed(delta))
        .ok_or(CalendarError::OutOfRange {
            date,
            offset: days,
            unit: "days",
        })
}

/// Length of the interval `start..end` in fractional calendar months.
///
/// The whole-month part counts how many month steps from `start` stay at or
/// before `end`; the remainder is the leftover days divided by the length of
/// the month that follows. Jan 1 to Jan 31 is 30/31 months, Jan 15 to Mar 15
/// is exactly 2. Negative when `end < start`.
///
/// # Errors
///
/// Returns [`CalendarError::OutOfRange`] if an intermediate month step is not
/// representable.
pub fn month_span(start: NaiveDate, end: NaiveDate) -> Result<f64, CalendarError> {
    if end < start {
        return month_span(end, start).map(|span| -span);
    }

    let mut whole = i64::from(end.year() - start.year()) * 12 + i64::from(end.month())
        - i64::from(start.month());
    let mut anchor = shift_months(start, whole)?;
    if anchor > end {
        whole -= 1;
        anchor = shift_months(start, whole)?;
    }
    let next = shift_months(start, whole + 1)?;

    let remainder = end.signed_duration_since(anchor).num_days() as f64;
    let month_len = next.signed_duration_since(anchor).num_days() as f64;
    Ok(whole as f64 + remainder / month_len)
}

/// Number of complete calendar months between `start` and `end`.
///
/// # Errors
///
/// Propagates [`month_span`] errors.
pub fn whole_months_between(start: NaiveDate, end: NaiveDate) -> Result<i64, CalendarError> {
    Ok(month_span(start, end)?.floor() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn shift_months_forward_and_back() {
        assert_eq!(shift_months(date(2020, 1, 15), 1).unwrap(), date(2020, 2, 15));
        assert_eq!(shift_months(date(2020, 1, 15), -1).unwrap(), date(2019, 12, 15));
        assert_eq!(shift_months(date(2020, 1, 15), 0).unwrap(), date(2020, 1, 15));
        assert_eq!(shift_months(date(2020, 1, 15), -24).unwrap(), date(2018, 1, 15));
    }

    #[test]
    fn shift_months_clamps_day() {
        assert_eq!(shift_months(date(2021, 3, 31), -1).unwrap(), date(2021, 2, 28));
        assert_eq!(shift_months(date(2020, 3, 31), -1).unwrap(), date(2020, 2, 29));
        assert_eq!(shift_months(date(2021, 5, 31), -1).unwrap(), date(2021, 4, 30));
    }

    #[test]
    fn shift_months_out_of_range() {
        let err = shift_months(NaiveDate::MAX, 1).unwrap_err();
        assert!(matches!(
            err,
            CalendarError::OutOfRange {
                offset: 1,
                unit: "months",
                ..
            }
        ));
        assert!(shift_months(date(2000, 1, 1), i64::MAX).is_err());
    }

    #[test]
    fn shift_days_signed() {
        assert_eq!(shift_days(date(2020, 3, 1), -1).unwrap(), date(2020, 2, 29));
        assert_eq!(shift_days(date(2020, 12, 31), 1).unwrap(), date(2021, 1, 1));
        assert!(shift_days(NaiveDate::MIN, -1).is_err());
    }

    #[test]
    fn month_span_exact_months() {
        assert_relative_eq!(
            month_span(date(2020, 1, 15), date(2020, 3, 15)).unwrap(),
            2.0
        );
        assert_relative_eq!(
            month_span(date(2020, 1, 1), date(2022, 1, 1)).unwrap(),
            24.0
        );
    }

    #[test]
    fn month_span_fractional() {
        assert_relative_eq!(
            month_span(date(2021, 1, 1), date(2021, 1, 31)).unwrap(),
            30.0 / 31.0,
            epsilon = 1e-12
        );
        assert_relative_eq!(
            month_span(date(2021, 2, 1), date(2021, 2, 28)).unwrap(),
            27.0 / 28.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn month_span_end_of_month_start() {
        // Jan 31 + 1 month clamps to Feb 28, one further day into March.
        assert_relative_eq!(
            month_span(date(2021, 1, 31), date(2021, 3, 1)).unwrap(),
            1.0 + 1.0 / 31.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn month_span_zero_and_negative() {
        assert_eq!(month_span(date(2020, 5, 5), date(2020, 5, 5)).unwrap(), 0.0);
        assert_relative_eq!(
            month_span(date(2020, 3, 15), date(2020, 1, 15)).unwrap(),
            -2.0
        );
    }

    #[test]
    fn whole_months_floor() {
        assert_eq!(
            whole_months_between(date(2020, 1, 1), date(2021, 12, 31)).unwrap(),
            23
        );
        assert_eq!(
            whole_months_between(date(2020, 1, 1), date(2020, 1, 31)).unwrap(),
            0
        );
        assert_eq!(
            whole_months_between(date(2020, 1, 1), date(2020, 2, 1)).unwrap(),
            1
        );
    }
}
