//! # aridity-io
//!
//! Parquet surface of the SPI engine: reads the long-format observation feed
//! into an [`ObservationSeries`](aridity_raster::ObservationSeries), reads
//! the anchor feed for the anchored model, and writes SPI results back out in
//! long format with one row per window cell.

mod error;
mod parquet_read;
mod parquet_write;
mod reader;
mod validate;
mod writer;

pub use error::IoError;
pub use reader::{read_anchors, read_observations};
pub use writer::{Compression, WriterConfig, write_anchors, write_observations, write_spi};
