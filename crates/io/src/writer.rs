//! High-level Parquet writer configuration and orchestration.

use std::path::Path;

use aridity_raster::ObservationSeries;
use aridity_spi::SpiRun;
use chrono::NaiveDate;
use parquet::file::properties::WriterProperties;
use tracing::info;

use crate::error::IoError;
use crate::parquet_write;

/// Compression algorithm for Parquet output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Compression {
    /// No compression.
    None,
    /// Snappy compression (fast, moderate ratio).
    #[default]
    Snappy,
    /// Zstd compression (slower, better ratio).
    Zstd,
}

impl Compression {
    /// Converts to the corresponding `parquet::basic::Compression` variant.
    fn to_parquet(self) -> Result<parquet::basic::Compression, IoError> {
        Ok(match self {
            Self::None => parquet::basic::Compression::UNCOMPRESSED,
            Self::Snappy => parquet::basic::Compression::SNAPPY,
            Self::Zstd => {
                let level = parquet::basic::ZstdLevel::try_new(3)?;
                parquet::basic::Compression::ZSTD(level)
            }
        })
    }
}

/// Configuration for Parquet output.
#[derive(Debug, Clone)]
pub struct WriterConfig {
    /// Compression algorithm to use.
    compression: Compression,
    /// Maximum number of rows per row group.
    row_group_size: usize,
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self {
            compression: Compression::default(),
            row_group_size: 1_000_000,
        }
    }
}

impl WriterConfig {
    /// Sets the compression algorithm.
    pub fn with_compression(mut self, comp: Compression) -> Self {
        self.compression = comp;
        self
    }

    /// Sets the maximum number of rows per row group.
    pub fn with_row_group_size(mut self, size: usize) -> Self {
        self.row_group_size = size;
        self
    }

    /// Returns the compression algorithm.
    pub fn compression(&self) -> Compression {
        self.compression
    }

    /// Returns the maximum number of rows per row group.
    pub fn row_group_size(&self) -> usize {
        self.row_group_size
    }

    /// Validates this configuration.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::Validation`] if `row_group_size` is zero.
    pub fn validate(&self) -> Result<(), IoError> {
        if self.row_group_size == 0 {
            return Err(IoError::Validation {
                count: 1,
                details: "row_group_size must be greater than 0".to_string(),
            });
        }
        Ok(())
    }

    fn properties(&self) -> Result<WriterProperties, IoError> {
        self.validate()?;
        Ok(WriterProperties::builder()
            .set_compression(self.compression.to_parquet()?)
            .set_max_row_group_size(self.row_group_size)
            .build())
    }
}

/// Writes SPI results to a long-format Parquet file.
///
/// Each run becomes one record batch; rows follow result order, then cells
/// in row-major order. Undefined cells are written as nulls.
///
/// # Errors
///
/// Returns [`IoError::Validation`] if the configuration is invalid, or
/// [`IoError::Parquet`] if batch conversion or file I/O fails.
#[tracing::instrument(skip_all, fields(path = %path.display(), n_runs = runs.len()))]
pub fn write_spi(path: &Path, runs: &[SpiRun], config: &WriterConfig) -> Result<(), IoError> {
    let props = config.properties()?;
    let schema = parquet_write::spi_schema();

    let batches: Vec<_> = runs
        .iter()
        .map(|run| parquet_write::spi_run_to_record_batch(run, &schema))
        .collect::<Result<Vec<_>, _>>()?;

    parquet_write::write_batches(path, &batches, &schema, props)?;
    info!(
        n_rows = batches.iter().map(|b| b.num_rows()).sum::<usize>(),
        "wrote SPI results"
    );
    Ok(())
}

/// Writes a series in the long-format observation feed layout read by
/// [`read_observations`](crate::read_observations).
///
/// # Errors
///
/// As [`write_spi`].
pub fn write_observations(
    path: &Path,
    series: &ObservationSeries,
    config: &WriterConfig,
) -> Result<(), IoError> {
    let props = config.properties()?;
    let schema = parquet_write::observation_schema();
    let batch = parquet_write::series_to_record_batch(series, &schema)?;
    parquet_write::write_batches(path, &[batch], &schema, props)
}

/// Writes anchor dates in the layout read by
/// [`read_anchors`](crate::read_anchors).
///
/// # Errors
///
/// As [`write_spi`].
pub fn write_anchors(path: &Path, anchors: &[NaiveDate], config: &WriterConfig) -> Result<(), IoError> {
    let props = config.properties()?;
    let schema = parquet_write::anchor_schema();
    let batch = parquet_write::anchors_to_record_batch(anchors, &schema)?;
    parquet_write::write_batches(path, &[batch], &schema, props)
}
