//! Wrap-aware day-of-year ranges.

use chrono::NaiveDate;

use crate::doy::{Doy, DoyConvention};

/// A day-of-year range `(start, end]`, open on the left and closed on the right.
///
/// Built from the half-open date interval `[start, end)` of a window: a
/// position `p` is inside when it is after the window's start position and
/// at or before its (exclusive) end position. Comparing window *ends* this
/// way puts a window in its own range and excludes the window immediately
/// before it, whose end coincides with this window's start.
///
/// When `start > end` the range wraps across the new year. When
/// `start == end` the range spans the whole year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DoyRange {
    start: Doy,
    end: Doy,
}

impl DoyRange {
    /// Creates a range from explicit start and end positions.
    pub fn new(start: Doy, end: Doy) -> Self {
        Self { start, end }
    }

    /// Creates the range covered by the date interval `[start, end)`.
    pub fn from_dates(start: NaiveDate, end: NaiveDate, convention: DoyConvention) -> Self {
        Self {
            start: Doy::of_date(start, convention),
            end: Doy::of_date(end, convention),
        }
    }

    /// Returns the (exclusive) start position.
    pub fn start(&self) -> Doy {
        self.start
    }

    /// Returns the (inclusive) end position.
    pub fn end(&self) -> Doy {
        self.end
    }

    /// Returns `true` if the range crosses the new year.
    pub fn wraps(&self) -> bool {
        self.start > self.end
    }

    /// Returns `true` if `doy` lies in `(start, end]`.
    pub fn contains(&self, doy: Doy) -> bool {
        use std::cmp::Ordering;
        match self.start.cmp(&self.end) {
            Ordering::Less => self.start < doy && doy <= self.end,
            Ordering::Greater => doy > self.start || doy <= self.end,
            Ordering::Equal => true,
        }
    }
}

impl std::fmt::Display for DoyRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}]", self.start.get(), self.end.get())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doy(d: u16) -> Doy {
        Doy::new(d).unwrap()
    }

    #[test]
    fn plain_range() {
        let r = DoyRange::new(doy(32), doy(60));
        assert!(!r.wraps());
        assert!(!r.contains(doy(32)));
        assert!(r.contains(doy(33)));
        assert!(r.contains(doy(60)));
        assert!(!r.contains(doy(61)));
    }

    #[test]
    fn wrapping_range() {
        // Dec 1 .. Feb 1
        let r = DoyRange::new(doy(335), doy(32));
        assert!(r.wraps());
        assert!(r.contains(doy(365)));
        assert!(r.contains(doy(1)));
        assert!(r.contains(doy(32)));
        assert!(!r.contains(doy(335)));
        assert!(!r.contains(doy(100)));
    }

    #[test]
    fn full_year_range() {
        let r = DoyRange::new(doy(10), doy(10));
        for d in 1..=366 {
            assert!(r.contains(doy(d)));
        }
    }

    #[test]
    fn from_dates_leap_folded() {
        let start = NaiveDate::from_ymd_opt(2020, 2, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2020, 3, 1).unwrap();
        let r = DoyRange::from_dates(start, end, DoyConvention::LeapFolded);
        assert_eq!(r.start().get(), 32);
        assert_eq!(r.end().get(), 60);
        assert_eq!(r.to_string(), "(32, 60]");
    }
}
