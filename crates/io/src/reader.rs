//! High-level feed readers.

use std::path::Path;

use aridity_raster::{Grid, Observation, ObservationSeries, ValidationCollector};
use chrono::NaiveDate;
use tracing::{debug, info};

use crate::error::IoError;
use crate::parquet_read::{self, CellsByDate};

/// Reads a long-format observation feed into an [`ObservationSeries`].
///
/// The file needs `date: Date32`, `row: UInt32`, `col: UInt32` and
/// `precip: Float64` columns; other columns are ignored. The grid shape is
/// inferred from the largest row and column index, and every date must
/// supply every cell of that shape exactly once.
///
/// # Errors
///
/// Returns [`IoError`] on missing or mistyped columns, incomplete or
/// duplicated cells, or values the series rejects (negative, non-finite).
#[tracing::instrument(skip_all, fields(path = %path.display()))]
pub fn read_observations(path: &Path) -> Result<ObservationSeries, IoError> {
    let batches = parquet_read::read_batches(path)?;
    let cells = parquet_read::collect_cells(&batches, path)?;
    if cells.is_empty() {
        return Err(IoError::Validation {
            count: 1,
            details: format!("no observations in {}", path.display()),
        });
    }

    let (rows, cols) = infer_shape(&cells)?;
    debug!(n_dates = cells.len(), rows, cols, "grouped observation feed");

    let observations = assemble_grids(cells, rows, cols)?;
    let series = ObservationSeries::new(observations)?;
    info!(
        n_obs = series.len(),
        earliest = %series.earliest(),
        latest = %series.latest(),
        "read observation feed"
    );
    Ok(series)
}

/// Reads the anchor feed: one `date: Date32` column, in file order.
///
/// Ordering is not checked here; window alignment rejects unordered anchors.
///
/// # Errors
///
/// Returns [`IoError`] on a missing file, a schema mismatch, or null dates.
#[tracing::instrument(skip_all, fields(path = %path.display()))]
pub fn read_anchors(path: &Path) -> Result<Vec<NaiveDate>, IoError> {
    let batches = parquet_read::read_batches(path)?;
    let anchors = parquet_read::collect_dates(&batches, path)?;
    info!(n_anchors = anchors.len(), "read anchor feed");
    Ok(anchors)
}

/// Grid shape spanned by the largest row and column index.
///
/// Every date must supply each cell once, so a shape with more cells than the
/// fullest date is rejected before any grid is allocated.
fn infer_shape(cells: &CellsByDate) -> Result<(usize, usize), IoError> {
    let (rows, cols) = cells
        .values()
        .flatten()
        .fold((0, 0), |(rows, cols), &(r, c, _)| {
            (rows.max(r as usize + 1), cols.max(c as usize + 1))
        });
    let fullest = cells.values().map(Vec::len).max().unwrap_or(0);

    let mut c = ValidationCollector::new();
    match rows.checked_mul(cols) {
        None => c.push(format!("grid shape {rows}x{cols} overflows")),
        Some(n) if n > fullest => c.push(format!(
            "grid shape {rows}x{cols} needs {n} cells per date, fullest date has {fullest}"
        )),
        Some(_) => {}
    }
    c.finish_with(IoError::validation)?;
    Ok((rows, cols))
}

fn assemble_grids(cells: CellsByDate, rows: usize, cols: usize) -> Result<Vec<Observation>, IoError> {
    let mut c = ValidationCollector::new();
    let mut observations = Vec::with_capacity(cells.len());

    for (date, entries) in cells {
        let mut buf: Vec<Option<f64>> = vec![None; rows * cols];
        for (r, col, value) in entries {
            let slot = &mut buf[r as usize * cols + col as usize];
            if slot.replace(value).is_some() {
                c.push(format!("duplicate cell ({r}, {col}) on {date}"));
            }
        }
        let missing = buf.iter().filter(|v| v.is_none()).count();
        if missing > 0 {
            c.push(format!("{missing} missing cell(s) on {date}"));
            continue;
        }
        let values = buf.into_iter().flatten().collect();
        observations.push(Observation::new(date, Grid::from_shape_vec(rows, cols, values)?));
    }

    c.finish_with(IoError::validation)?;
    Ok(observations)
}
