//! Rectangular pixel window used to clip grids.

use crate::error::RasterError;

/// A rectangular block of cells: `rows x cols` starting at `(row, col)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Extent {
    row: usize,
    col: usize,
    rows: usize,
    cols: usize,
}

impl Extent {
    /// Creates a new extent.
    ///
    /// # Errors
    ///
    /// Returns [`RasterError::InvalidExtent`] if `rows` or `cols` is zero or
    /// the far edge overflows.
    pub fn new(row: usize, col: usize, rows: usize, cols: usize) -> Result<Self, RasterError> {
        if rows == 0 || cols == 0 {
            return Err(RasterError::InvalidExtent {
                reason: format!("extent must be non-empty, got {rows}x{cols}"),
            });
        }
        if row.checked_add(rows).is_none() || col.checked_add(cols).is_none() {
            return Err(RasterError::InvalidExtent {
                reason: "extent edge overflows".to_string(),
            });
        }
        Ok(Self {
            row,
            col,
            rows,
            cols,
        })
    }

    /// First row.
    pub fn row(&self) -> usize {
        self.row
    }

    /// First column.
    pub fn col(&self) -> usize {
        self.col
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// One past the last row.
    pub fn row_end(&self) -> usize {
        self.row + self.rows
    }

    /// One past the last column.
    pub fn col_end(&self) -> usize {
        self.col + self.cols
    }

    /// Checks that the extent lies inside a grid of `shape`.
    ///
    /// # Errors
    ///
    /// Returns [`RasterError::ExtentOutOfBounds`] otherwise.
    pub fn check_fits(&self, shape: (usize, usize)) -> Result<(), RasterError> {
        if self.row_end() > shape.0 || self.col_end() > shape.1 {
            return Err(RasterError::ExtentOutOfBounds {
                row: self.row,
                row_end: self.row_end(),
                col: self.col,
                col_end: self.col_end(),
                shape,
            });
        }
        Ok(())
    }
}
