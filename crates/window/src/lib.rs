//! # aridity-window
//!
//! Windows over an [`ObservationSeries`](aridity_raster::ObservationSeries)
//! and the aggregates they produce.
//!
//! Two temporal models share one [`Window`] type, told apart by their
//! [`WindowPolicy`]:
//!
//! - [`monthly_windows`] counts `unit_count`-month windows backward from the
//!   day after the latest observation.
//! - [`anchored_windows`] places a `day_count`-day window at every external
//!   anchor date, shifted by a signed number of days.
//!
//! [`aggregate_windows`] then sums each window's members in parallel and
//! drops the windows that fail the policy's coverage rule.
//!
//! ```
//! use aridity_window::monthly_windows;
//! use chrono::NaiveDate;
//!
//! let earliest = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
//! let latest = NaiveDate::from_ymd_opt(2020, 12, 31).unwrap();
//! let windows = monthly_windows(earliest, latest, 3).unwrap();
//! assert_eq!(windows.len(), 4);
//! assert_eq!(windows[3].end(), NaiveDate::from_ymd_opt(2021, 1, 1).unwrap());
//! ```

mod aggregate;
mod error;
mod generate;
mod policy;
mod window;

pub use aggregate::{Aggregate, Aggregation, aggregate_window, aggregate_windows};
pub use error::WindowError;
pub use generate::{anchored_windows, monthly_windows};
pub use policy::{DEFAULT_DAY_COUNT, VALID_UNIT_COUNTS, WindowPolicy};
pub use window::Window;
