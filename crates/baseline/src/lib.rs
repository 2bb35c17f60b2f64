//! # aridity-baseline
//!
//! Historical baselines for SPI normalization.
//!
//! Aggregates of one temporal model are grouped by seasonal position
//! ([`SeasonalStrategy`]), and each distinct group gets a cell-wise mean and
//! population standard deviation ([`Baseline`]). Groups below the configured
//! minimum size are flagged low-confidence or rejected, depending on
//! [`Strictness`].

mod baseline;
mod config;
mod error;
mod strategy;

pub use baseline::{Baseline, BaselineSet, SeasonalGroup, compute_baselines};
pub use config::{BaselineConfig, DEFAULT_MIN_GROUP_SIZE, Strictness};
pub use error::BaselineError;
pub use strategy::{GroupKey, SeasonalStrategy};
