//! # aridity-raster
//!
//! The raster time series every SPI stage operates on: immutable
//! precipitation [`Grid`]s, dated [`Observation`]s, and the validated,
//! strictly ordered [`ObservationSeries`] with half-open date range queries.
//!
//! Grids are `ndarray::Array2<f64>` under the hood; an [`Extent`] clips every
//! grid of a series to a rectangular block of cells before aggregation.

mod error;
mod extent;
mod grid;
mod series;
mod validate;

pub use error::RasterError;
pub use extent::Extent;
pub use grid::{Grid, sum_grids};
pub use series::{Observation, ObservationSeries};
pub use validate::ValidationCollector;
