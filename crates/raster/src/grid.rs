//! Immutable 2-D precipitation grid.

use ndarray::{Array2, ArrayView2, Zip};

use crate::error::RasterError;
use crate::extent::Extent;

/// A 2-D array of precipitation values over a fixed spatial extent.
///
/// Shape is `(rows, cols)` and both dimensions are non-zero. Values may be
/// any finite number; sign checks belong to the series that owns the grid.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    values: Array2<f64>,
}

impl Grid {
    /// Wraps an existing array.
    ///
    /// # Errors
    ///
    /// Returns [`RasterError::EmptyGrid`] if either dimension is zero.
    pub fn new(values: Array2<f64>) -> Result<Self, RasterError> {
        let (rows, cols) = values.dim();
        if rows == 0 || cols == 0 {
            return Err(RasterError::EmptyGrid { rows, cols });
        }
        Ok(Self { values })
    }

    /// Builds a grid from a row-major buffer.
    ///
    /// # Errors
    ///
    /// Returns [`RasterError::BufferShape`] if `data.len() != rows * cols`,
    /// or [`RasterError::EmptyGrid`] if either dimension is zero.
    pub fn from_shape_vec(rows: usize, cols: usize, data: Vec<f64>) -> Result<Self, RasterError> {
        let len = data.len();
        let values = Array2::from_shape_vec((rows, cols), data)
            .map_err(|_| RasterError::BufferShape { len, rows, cols })?;
        Self::new(values)
    }

    /// Builds a grid with every cell set to `value`.
    ///
    /// # Errors
    ///
    /// Returns [`RasterError::EmptyGrid`] if either dimension is zero.
    pub fn filled(rows: usize, cols: usize, value: f64) -> Result<Self, RasterError> {
        Self::new(Array2::from_elem((rows, cols), value))
    }

    /// Returns `(rows, cols)`.
    pub fn shape(&self) -> (usize, usize) {
        self.values.dim()
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always `false`: grids have at least one cell.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the value at `(row, col)`, if in bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        self.values.get((row, col)).copied()
    }

    /// Read-only view of the underlying array.
    pub fn view(&self) -> ArrayView2<'_, f64> {
        self.values.view()
    }

    /// Cell-wise sum of two grids of the same shape.
    ///
    /// Callers guarantee matching shapes; series construction enforces it.
    pub(crate) fn add_assign_from(&mut self, other: &Grid) {
        Zip::from(&mut self.values)
            .and(&other.values)
            .for_each(|acc, &v| *acc += v);
    }

    /// Returns a new grid restricted to `extent`.
    ///
    /// # Errors
    ///
    /// Returns [`RasterError::ExtentOutOfBounds`] if the extent does not fit.
    pub fn clip(&self, extent: &Extent) -> Result<Grid, RasterError> {
        extent.check_fits(self.shape())?;
        let view = self.values.slice(ndarray::s![
            extent.row()..extent.row_end(),
            extent.col()..extent.col_end()
        ]);
        Ok(Grid {
            values: view.to_owned(),
        })
    }

    /// Returns a copy with every cell multiplied by `factor`.
    pub fn scaled(&self, factor: f64) -> Grid {
        Grid {
            values: &self.values * factor,
        }
    }
}

/// Element-wise sum of a non-empty sequence of equally shaped grids.
///
/// Returns `None` when `grids` yields nothing.
pub fn sum_grids<'a>(grids: impl IntoIterator<Item = &'a Grid>) -> Option<Grid> {
    let mut iter = grids.into_iter();
    let mut acc = iter.next()?.clone();
    for g in iter {
        acc.add_assign_from(g);
    }
    Some(acc)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_shape_vec_row_major() {
        let g = Grid::from_shape_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
        assert_eq!(g.shape(), (2, 3));
        assert_eq!(g.get(0, 2), Some(3.0));
        assert_eq!(g.get(1, 0), Some(4.0));
        assert_eq!(g.get(2, 0), None);
    }

    #[test]
    fn from_shape_vec_bad_length() {
        let err = Grid::from_shape_vec(2, 2, vec![1.0; 3]).unwrap_err();
        assert_eq!(
            err,
            RasterError::BufferShape {
                len: 3,
                rows: 2,
                cols: 2
            }
        );
    }

    #[test]
    fn empty_grid_rejected() {
        assert_eq!(
            Grid::filled(0, 4, 1.0).unwrap_err(),
            RasterError::EmptyGrid { rows: 0, cols: 4 }
        );
    }

    #[test]
    fn sum_of_grids() {
        let a = Grid::filled(2, 2, 1.5).unwrap();
        let b = Grid::filled(2, 2, 2.5).unwrap();
        let s = sum_grids([&a, &b, &a]).unwrap();
        assert_eq!(s, Grid::filled(2, 2, 5.5).unwrap());
        assert!(sum_grids(std::iter::empty()).is_none());
    }

    #[test]
    fn clip_extracts_window() {
        let g = Grid::from_shape_vec(3, 3, (0..9).map(f64::from).collect()).unwrap();
        let extent = Extent::new(1, 1, 2, 2).unwrap();
        let c = g.clip(&extent).unwrap();
        assert_eq!(c.shape(), (2, 2));
        assert_eq!(c.get(0, 0), Some(4.0));
        assert_eq!(c.get(1, 1), Some(8.0));
    }

    #[test]
    fn clip_out_of_bounds() {
        let g = Grid::filled(3, 3, 0.0).unwrap();
        let extent = Extent::new(2, 0, 2, 1).unwrap();
        assert!(matches!(
            g.clip(&extent),
            Err(RasterError::ExtentOutOfBounds { .. })
        ));
    }

    #[test]
    fn scaled_multiplies_each_cell() {
        let g = Grid::from_shape_vec(1, 2, vec![1.0, 3.0]).unwrap();
        assert_eq!(g.scaled(2.0).get(0, 1), Some(6.0));
    }
}
