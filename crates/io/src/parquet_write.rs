//! Low-level Parquet column building.

use std::path::Path;
use std::sync::Arc;

use arrow::array::{
    ArrayRef, BooleanArray, Date32Array, Float64Array, RecordBatch, StringArray, UInt32Array,
};
use arrow::datatypes::{DataType, Date32Type, Field, Schema};
use aridity_raster::ObservationSeries;
use aridity_spi::SpiRun;
use chrono::NaiveDate;
use parquet::arrow::ArrowWriter;
use parquet::file::properties::WriterProperties;

use crate::error::IoError;

/// Arrow schema of the SPI export.
pub(crate) fn spi_schema() -> Schema {
    Schema::new(vec![
        Field::new("model", DataType::Utf8, false),
        Field::new("window_start", DataType::Date32, false),
        Field::new("window_end", DataType::Date32, false),
        Field::new("true_start", DataType::Date32, false),
        Field::new("true_end", DataType::Date32, false),
        Field::new("used_count", DataType::UInt32, false),
        Field::new("group_size", DataType::UInt32, false),
        Field::new("low_confidence", DataType::Boolean, false),
        Field::new("row", DataType::UInt32, false),
        Field::new("col", DataType::UInt32, false),
        Field::new("spi", DataType::Float64, true),
    ])
}

/// Arrow schema of the long-format observation feed.
pub(crate) fn observation_schema() -> Schema {
    Schema::new(vec![
        Field::new("date", DataType::Date32, false),
        Field::new("row", DataType::UInt32, false),
        Field::new("col", DataType::UInt32, false),
        Field::new("precip", DataType::Float64, false),
    ])
}

/// Arrow schema of the anchor feed.
pub(crate) fn anchor_schema() -> Schema {
    Schema::new(vec![Field::new("date", DataType::Date32, false)])
}

fn to_u32(value: usize, what: &str) -> Result<u32, IoError> {
    u32::try_from(value).map_err(|_| IoError::Parquet {
        reason: format!("{what} {value} does not fit in UInt32"),
    })
}

fn days(date: NaiveDate) -> i32 {
    Date32Type::from_naive_date(date)
}

/// Converts one [`SpiRun`] into a long-format [`RecordBatch`], one row per
/// result cell in result order, cells row-major.
pub(crate) fn spi_run_to_record_batch(run: &SpiRun, schema: &Schema) -> Result<RecordBatch, IoError> {
    let n: usize = run.results().iter().map(|r| r.index().len()).sum();

    let mut window_start = Vec::with_capacity(n);
    let mut window_end = Vec::with_capacity(n);
    let mut true_start = Vec::with_capacity(n);
    let mut true_end = Vec::with_capacity(n);
    let mut used_count = Vec::with_capacity(n);
    let mut group_size = Vec::with_capacity(n);
    let mut low_confidence = Vec::with_capacity(n);
    let mut rows = Vec::with_capacity(n);
    let mut cols = Vec::with_capacity(n);
    let mut spi = Vec::with_capacity(n);

    for result in run.results() {
        let used = to_u32(result.used_count(), "used_count")?;
        let size = to_u32(result.group_size(), "group_size")?;
        for ((r, c), value) in result.index().indexed_iter() {
            window_start.push(days(result.window().start()));
            window_end.push(days(result.window().end()));
            true_start.push(days(result.true_start()));
            true_end.push(days(result.true_end()));
            used_count.push(used);
            group_size.push(size);
            low_confidence.push(result.low_confidence());
            rows.push(to_u32(r, "row")?);
            cols.push(to_u32(c, "col")?);
            spi.push(*value);
        }
    }

    let columns: Vec<ArrayRef> = vec![
        Arc::new(StringArray::from(vec![run.model().name(); n])),
        Arc::new(Date32Array::from(window_start)),
        Arc::new(Date32Array::from(window_end)),
        Arc::new(Date32Array::from(true_start)),
        Arc::new(Date32Array::from(true_end)),
        Arc::new(UInt32Array::from(used_count)),
        Arc::new(UInt32Array::from(group_size)),
        Arc::new(BooleanArray::from(low_confidence)),
        Arc::new(UInt32Array::from(rows)),
        Arc::new(UInt32Array::from(cols)),
        Arc::new(Float64Array::from(spi)),
    ];

    Ok(RecordBatch::try_new(Arc::new(schema.clone()), columns)?)
}

/// Converts a series into the long-format observation feed.
pub(crate) fn series_to_record_batch(
    series: &ObservationSeries,
    schema: &Schema,
) -> Result<RecordBatch, IoError> {
    let (n_rows, n_cols) = series.shape();
    let n = series.len() * n_rows * n_cols;
    let mut dates = Vec::with_capacity(n);
    let mut rows = Vec::with_capacity(n);
    let mut cols = Vec::with_capacity(n);
    let mut precip = Vec::with_capacity(n);

    for obs in series {
        let d = days(obs.date());
        for ((r, c), &value) in obs.grid().view().indexed_iter() {
            dates.push(d);
            rows.push(to_u32(r, "row")?);
            cols.push(to_u32(c, "col")?);
            precip.push(value);
        }
    }

    let columns: Vec<ArrayRef> = vec![
        Arc::new(Date32Array::from(dates)),
        Arc::new(UInt32Array::from(rows)),
        Arc::new(UInt32Array::from(cols)),
        Arc::new(Float64Array::from(precip)),
    ];
    Ok(RecordBatch::try_new(Arc::new(schema.clone()), columns)?)
}

/// Converts anchor dates into a single-column batch.
pub(crate) fn anchors_to_record_batch(
    anchors: &[NaiveDate],
    schema: &Schema,
) -> Result<RecordBatch, IoError> {
    let dates: Vec<i32> = anchors.iter().map(|&d| days(d)).collect();
    let columns: Vec<ArrayRef> = vec![Arc::new(Date32Array::from(dates))];
    Ok(RecordBatch::try_new(Arc::new(schema.clone()), columns)?)
}

/// Writes a sequence of [`RecordBatch`]es to a Parquet file at `path`.
///
/// # Errors
///
/// Returns [`IoError::Parquet`] if file creation, batch writing, or file
/// finalisation fails.
pub(crate) fn write_batches(
    path: &Path,
    batches: &[RecordBatch],
    schema: &Schema,
    props: WriterProperties,
) -> Result<(), IoError> {
    let file = std::fs::File::create(path).map_err(|e| IoError::Parquet {
        reason: e.to_string(),
    })?;
    let mut writer = ArrowWriter::try_new(file, Arc::new(schema.clone()), Some(props))?;

    for batch in batches {
        writer.write(batch)?;
    }

    writer.close()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use aridity_raster::{Grid, Observation};

    #[test]
    fn spi_schema_columns() {
        let schema = spi_schema();
        let names: Vec<_> = schema.fields().iter().map(|f| f.name().as_str()).collect();
        assert_eq!(
            names,
            [
                "model",
                "window_start",
                "window_end",
                "true_start",
                "true_end",
                "used_count",
                "group_size",
                "low_confidence",
                "row",
                "col",
                "spi"
            ]
        );
        assert!(schema.field(10).is_nullable());
        assert!(!schema.field(0).is_nullable());
    }

    #[test]
    fn series_batch_is_long_format() {
        let d0 = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
        let d1 = NaiveDate::from_ymd_opt(2020, 1, 2).unwrap();
        let grid = Grid::from_shape_vec(2, 3, vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
        let series = ObservationSeries::new(vec![
            Observation::new(d0, grid.clone()),
            Observation::new(d1, grid),
        ])
        .unwrap();
        let batch = series_to_record_batch(&series, &observation_schema()).unwrap();
        assert_eq!(batch.num_rows(), 12);
        assert_eq!(batch.num_columns(), 4);
    }

    #[test]
    fn date32_epoch() {
        let epoch = NaiveDate::from_ymd_opt(1970, 1, 1).unwrap();
        assert_eq!(days(epoch), 0);
        assert_eq!(days(epoch.succ_opt().unwrap()), 1);
    }
}
