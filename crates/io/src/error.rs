//! Error types for aridity-io.

use std::path::PathBuf;

/// Error type for all fallible operations in the aridity-io crate.
///
/// Covers missing files, Parquet and Arrow failures, schema mismatches,
/// accumulated feed validation problems, and raster assembly errors.
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    /// Returned when a required file does not exist on disk.
    #[error("file not found: {}", path.display())]
    FileNotFound {
        /// Path that could not be found.
        path: PathBuf,
    },

    /// Wraps an error originating from the Parquet or Arrow libraries.
    #[error("parquet error: {reason}")]
    Parquet {
        /// Description of the underlying failure.
        reason: String,
    },

    /// Returned when a required column is absent.
    #[error("column '{name}' not found in {}", path.display())]
    MissingColumn {
        /// Name of the missing column.
        name: String,
        /// Path to the file that was inspected.
        path: PathBuf,
    },

    /// Returned when a column has the wrong Arrow type.
    #[error("column '{name}' has type {got}, expected {expected}")]
    ColumnType {
        /// Column name.
        name: String,
        /// Expected Arrow type.
        expected: String,
        /// Actual Arrow type.
        got: String,
    },

    /// Returned when one or more validation checks fail.
    #[error("{count} validation error(s): {details}")]
    Validation {
        /// Number of accumulated validation failures.
        count: usize,
        /// Human-readable summary of the failures.
        details: String,
    },

    /// Raster assembly error.
    #[error(transparent)]
    Raster(#[from] aridity_raster::RasterError),
}

impl IoError {
    /// Builds [`IoError::Validation`] from a collector's summary.
    pub(crate) fn validation(count: usize, details: String) -> Self {
        IoError::Validation { count, details }
    }
}

impl From<parquet::errors::ParquetError> for IoError {
    fn from(e: parquet::errors::ParquetError) -> Self {
        IoError::Parquet {
            reason: e.to_string(),
        }
    }
}

impl From<arrow::error::ArrowError> for IoError {
    fn from(e: arrow::error::ArrowError) -> Self {
        IoError::Parquet {
            reason: e.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_file_not_found() {
        let err = IoError::FileNotFound {
            path: PathBuf::from("/tmp/missing.parquet"),
        };
        assert_eq!(err.to_string(), "file not found: /tmp/missing.parquet");
    }

    #[test]
    fn display_missing_column() {
        let err = IoError::MissingColumn {
            name: "precip".to_string(),
            path: PathBuf::from("/data/obs.parquet"),
        };
        assert_eq!(
            err.to_string(),
            "column 'precip' not found in /data/obs.parquet"
        );
    }

    #[test]
    fn display_column_type() {
        let err = IoError::ColumnType {
            name: "date".to_string(),
            expected: "Date32".to_string(),
            got: "Utf8".to_string(),
        };
        assert_eq!(err.to_string(), "column 'date' has type Utf8, expected Date32");
    }

    #[test]
    fn display_validation() {
        let err = IoError::Validation {
            count: 2,
            details: "missing cell (0, 1) on 2020-01-01; null precip at row 7".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "2 validation error(s): missing cell (0, 1) on 2020-01-01; null precip at row 7"
        );
    }

    #[test]
    fn from_parquet_error() {
        let pq_err = parquet::errors::ParquetError::General("test pq error".to_string());
        let err: IoError = pq_err.into();
        assert!(matches!(err, IoError::Parquet { .. }));
        assert!(err.to_string().contains("test pq error"));
    }

    #[test]
    fn from_arrow_error() {
        let err: IoError = arrow::error::ArrowError::SchemaError("bad".to_string()).into();
        assert!(matches!(err, IoError::Parquet { .. }));
    }

    #[test]
    fn error_is_send_sync_and_std_error() {
        fn assert_bounds<T: Send + Sync + std::error::Error>() {}
        assert_bounds::<IoError>();
    }
}
