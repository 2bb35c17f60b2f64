//! # aridity-spi
//!
//! Standardized Precipitation Index over windowed aggregates.
//!
//! Each model run generates windows, aggregates them with coverage checks,
//! builds seasonal baselines and normalizes every aggregate into a z-score
//! grid:
//!
//! ```mermaid
//! graph LR
//!     S["ObservationSeries"] -->|"monthly_windows / anchored_windows"| W["Windows"]
//!     W -->|"aggregate_windows"| A["Aggregates"]
//!     A -->|"compute_baselines"| B["BaselineSet"]
//!     A -->|"normalize"| R["SpiResult"]
//!     B --> R
//! ```
//!
//! The index is a raw z-score: no distribution is fitted to the sums first.
//!
//! ## Quick Start
//!
//! ```
//! use aridity_raster::{Grid, Observation, ObservationSeries};
//! use aridity_spi::{SpiConfig, compute_monthly_spi};
//! use chrono::NaiveDate;
//!
//! let start = NaiveDate::from_ymd_opt(2018, 1, 1).unwrap();
//! let obs = start
//!     .iter_days()
//!     .take(3 * 365)
//!     .enumerate()
//!     .map(|(i, d)| Observation::new(d, Grid::filled(2, 2, (i % 5) as f64).unwrap()))
//!     .collect();
//! let series = ObservationSeries::new(obs).unwrap();
//!
//! let run = compute_monthly_spi(&series, &SpiConfig::new().with_unit_count(3)).unwrap();
//! assert!(!run.results().is_empty());
//! ```

mod config;
mod error;
mod normalize;
mod pipeline;
mod result;
mod summary;

pub use config::SpiConfig;
pub use error::SpiError;
pub use normalize::{normalize, normalize_aggregate};
pub use pipeline::{SpiRun, compute_anchored_spi, compute_monthly_spi};
pub use result::{Model, SpiResult};
pub use summary::{RunSummary, to_json};
