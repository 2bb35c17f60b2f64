//! Low-level Parquet reading and column extraction.

use std::collections::BTreeMap;
use std::path::Path;

use arrow::array::{Array, AsArray, RecordBatch};
use arrow::datatypes::{DataType, Date32Type, Float64Type, UInt32Type};
use aridity_raster::ValidationCollector;
use chrono::NaiveDate;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;

use crate::error::IoError;
use crate::validate::resolve_columns;

/// Long-format observation rows grouped by date: `(row, col, precip)`.
pub(crate) type CellsByDate = BTreeMap<NaiveDate, Vec<(u32, u32, f64)>>;

/// Reads all record batches from a Parquet file.
///
/// # Errors
///
/// Returns [`IoError::FileNotFound`] if the file does not exist, or
/// [`IoError::Parquet`] if the file cannot be opened or read.
pub(crate) fn read_batches(path: &Path) -> Result<Vec<RecordBatch>, IoError> {
    if !path.exists() {
        return Err(IoError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let file = std::fs::File::open(path).map_err(|e| IoError::Parquet {
        reason: e.to_string(),
    })?;

    let builder = ParquetRecordBatchReaderBuilder::try_new(file)?;
    let reader = builder.build()?;

    let batches: Vec<RecordBatch> = reader.collect::<Result<Vec<_>, _>>()?;
    Ok(batches)
}

/// Collects observation rows from `batches`, grouped by date.
///
/// Null values and undecodable dates are reported together.
///
/// # Errors
///
/// Returns [`IoError::MissingColumn`] or [`IoError::ColumnType`] on a schema
/// mismatch, or [`IoError::Validation`] listing every bad row.
pub(crate) fn collect_cells(batches: &[RecordBatch], path: &Path) -> Result<CellsByDate, IoError> {
    let mut cells = CellsByDate::new();
    let mut c = ValidationCollector::new();
    let mut offset = 0usize;

    for batch in batches {
        let [date_idx, row_idx, col_idx, precip_idx] = resolve_columns(
            &batch.schema(),
            [
                ("date", DataType::Date32),
                ("row", DataType::UInt32),
                ("col", DataType::UInt32),
                ("precip", DataType::Float64),
            ],
            path,
        )?;
        let dates = batch.column(date_idx).as_primitive::<Date32Type>();
        let rows = batch.column(row_idx).as_primitive::<UInt32Type>();
        let cols = batch.column(col_idx).as_primitive::<UInt32Type>();
        let precip = batch.column(precip_idx).as_primitive::<Float64Type>();

        for i in 0..batch.num_rows() {
            if dates.is_null(i) || rows.is_null(i) || cols.is_null(i) || precip.is_null(i) {
                c.push(format!("null value at row {}", offset + i));
                continue;
            }
            let Some(date) = dates.value_as_date(i) else {
                c.push(format!("undecodable date at row {}", offset + i));
                continue;
            };
            cells
                .entry(date)
                .or_default()
                .push((rows.value(i), cols.value(i), precip.value(i)));
        }
        offset += batch.num_rows();
    }

    c.finish_with(IoError::validation)?;
    Ok(cells)
}

/// Collects anchor dates from `batches` in file order.
///
/// # Errors
///
/// Returns a schema error, or [`IoError::Validation`] for null or
/// undecodable dates.
pub(crate) fn collect_dates(batches: &[RecordBatch], path: &Path) -> Result<Vec<NaiveDate>, IoError> {
    let mut out = Vec::new();
    let mut c = ValidationCollector::new();
    let mut offset = 0usize;

    for batch in batches {
        let [date_idx] = resolve_columns(&batch.schema(), [("date", DataType::Date32)], path)?;
        let dates = batch.column(date_idx).as_primitive::<Date32Type>();
        for i in 0..batch.num_rows() {
            match (dates.is_null(i), dates.value_as_date(i)) {
                (false, Some(d)) => out.push(d),
                _ => c.push(format!("invalid anchor date at row {}", offset + i)),
            }
        }
        offset += batch.num_rows();
    }

    c.finish_with(IoError::validation)?;
    Ok(out)
}
