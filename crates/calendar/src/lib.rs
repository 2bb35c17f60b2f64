//! # aridity-calendar
//!
//! Pure date arithmetic on the Gregorian calendar for windowed precipitation
//! statistics.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["NaiveDate"] -->|"shift_months()"| A
//!     A -->|"shift_days()"| A
//!     A -->|"month_span()"| B["fractional months"]
//!     A -->|"Doy::of_date()"| C["Doy (1..=366)"]
//!     C -->|"DoyRange::contains()"| D["seasonal membership"]
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use aridity_calendar::{Doy, DoyConvention, DoyRange, month_span, shift_months};
//! use chrono::NaiveDate;
//!
//! let end = NaiveDate::from_ymd_opt(2020, 4, 1).unwrap();
//! let start = shift_months(end, -1).unwrap();
//! assert_eq!(start, NaiveDate::from_ymd_opt(2020, 3, 1).unwrap());
//!
//! let span = month_span(start, end).unwrap();
//! assert!((span - 1.0).abs() < 1e-12);
//!
//! let range = DoyRange::from_dates(start, end, DoyConvention::LeapFolded);
//! let other_end = NaiveDate::from_ymd_opt(2019, 4, 1).unwrap();
//! assert!(range.contains(Doy::of_date(other_end, DoyConvention::LeapFolded)));
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `doy` | Day-of-year newtype under leap-folded or ordinal conventions |
//! | `months` | Calendar-month shifting and fractional month spans |
//! | `range` | Wrap-aware day-of-year ranges |
//! | `error` | Error types |

mod doy;
mod error;
mod months;
mod range;

pub use doy::{Doy, DoyConvention};
pub use error::CalendarError;
pub use months::{month_span, shift_days, shift_months, whole_months_between};
pub use range::DoyRange;
