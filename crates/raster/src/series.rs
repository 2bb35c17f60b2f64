//! Timestamped observations and the ordered series that holds them.

use chrono::NaiveDate;

use crate::error::RasterError;
use crate::extent::Extent;
use crate::grid::Grid;
use crate::validate::{self, ValidationCollector};

/// A single daily precipitation grid.
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    date: NaiveDate,
    grid: Grid,
}

impl Observation {
    /// Creates an observation.
    pub fn new(date: NaiveDate, grid: Grid) -> Self {
        Self { date, grid }
    }

    /// Observation date.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Observation grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }
}

/// Observations ordered by strictly ascending date, all sharing one grid shape.
///
/// The record may have gaps; no fill values are implied.
#[derive(Debug, Clone)]
pub struct ObservationSeries {
    observations: Vec<Observation>,
    shape: (usize, usize),
}

impl ObservationSeries {
    /// Validates and wraps `observations`.
    ///
    /// # Errors
    ///
    /// - [`RasterError::EmptySeries`] if there are no observations.
    /// - [`RasterError::NotAscending`] at the first date that does not advance.
    /// - [`RasterError::ShapeMismatch`] at the first grid whose shape differs
    ///   from the first observation's.
    /// - [`RasterError::Validation`] if any cell is negative or non-finite.
    pub fn new(observations: Vec<Observation>) -> Result<Self, RasterError> {
        let first = observations.first().ok_or(RasterError::EmptySeries)?;
        let shape = first.grid.shape();

        for pair in observations.windows(2) {
            if pair[1].date <= pair[0].date {
                return Err(RasterError::NotAscending {
                    previous: pair[0].date,
                    current: pair[1].date,
                });
            }
        }

        if let Some(bad) = observations.iter().find(|o| o.grid.shape() != shape) {
            return Err(RasterError::ShapeMismatch {
                date: bad.date,
                expected: shape,
                got: bad.grid.shape(),
            });
        }

        let mut c = ValidationCollector::new();
        for obs in &observations {
            validate::check_precip_values(&mut c, obs.date, &obs.grid);
        }
        c.finish()?;

        Ok(Self {
            observations,
            shape,
        })
    }

    /// Grid shape shared by every observation.
    pub fn shape(&self) -> (usize, usize) {
        self.shape
    }

    /// Number of observations.
    pub fn len(&self) -> usize {
        self.observations.len()
    }

    /// Always `false`: construction rejects empty series.
    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    /// Date of the first observation.
    pub fn earliest(&self) -> NaiveDate {
        self.observations[0].date
    }

    /// Date of the last observation.
    pub fn latest(&self) -> NaiveDate {
        self.observations[self.observations.len() - 1].date
    }

    /// All observations in date order.
    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    /// Iterator over observations in date order.
    pub fn iter(&self) -> std::slice::Iter<'_, Observation> {
        self.observations.iter()
    }

    /// Observations with `start <= date < end`.
    ///
    /// Returns an empty slice when `start >= end`.
    pub fn range(&self, start: NaiveDate, end: NaiveDate) -> &[Observation] {
        if start >= end {
            return &[];
        }
        let lo = self.observations.partition_point(|o| o.date < start);
        let hi = self.observations.partition_point(|o| o.date < end);
        &self.observations[lo..hi]
    }

    /// Returns a new series with every grid clipped to `extent`.
    ///
    /// # Errors
    ///
    /// Returns [`RasterError::ExtentOutOfBounds`] if the extent does not fit
    /// the series shape.
    pub fn clip(&self, extent: &Extent) -> Result<ObservationSeries, RasterError> {
        extent.check_fits(self.shape)?;
        let observations = self
            .observations
            .iter()
            .map(|o| Ok(Observation::new(o.date, o.grid.clip(extent)?)))
            .collect::<Result<Vec<_>, RasterError>>()?;
        Ok(Self {
            observations,
            shape: (extent.rows(), extent.cols()),
        })
    }

    /// Returns a new series with every cell multiplied by `factor`.
    ///
    /// # Errors
    ///
    /// Returns [`RasterError::Validation`] if `factor` makes any value
    /// negative or non-finite.
    pub fn scaled(&self, factor: f64) -> Result<ObservationSeries, RasterError> {
        Self::new(
            self.observations
                .iter()
                .map(|o| Observation::new(o.date, o.grid.scaled(factor)))
                .collect(),
        )
    }
}

impl<'a> IntoIterator for &'a ObservationSeries {
    type Item = &'a Observation;
    type IntoIter = std::slice::Iter<'a, Observation>;

    fn into_iter(self) -> Self::IntoIter {
        self.observations.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn obs(d: NaiveDate, v: f64) -> Observation {
        Observation::new(d, Grid::filled(2, 2, v).unwrap())
    }

    #[test]
    fn empty_rejected() {
        assert_eq!(
            ObservationSeries::new(Vec::new()).unwrap_err(),
            RasterError::EmptySeries
        );
    }

    #[test]
    fn duplicate_date_rejected() {
        let d = date(2020, 1, 1);
        let err = ObservationSeries::new(vec![obs(d, 1.0), obs(d, 2.0)]).unwrap_err();
        assert_eq!(
            err,
            RasterError::NotAscending {
                previous: d,
                current: d
            }
        );
    }

    #[test]
    fn shape_mismatch_rejected() {
        let bad = Observation::new(date(2020, 1, 2), Grid::filled(3, 2, 0.0).unwrap());
        let err = ObservationSeries::new(vec![obs(date(2020, 1, 1), 0.0), bad]).unwrap_err();
        assert!(matches!(
            err,
            RasterError::ShapeMismatch {
                expected: (2, 2),
                got: (3, 2),
                ..
            }
        ));
    }

    #[test]
    fn negative_values_rejected() {
        let err = ObservationSeries::new(vec![obs(date(2020, 1, 1), -1.0)]).unwrap_err();
        assert!(matches!(err, RasterError::Validation { count: 4, .. }));
    }

    #[test]
    fn range_is_half_open() {
        let series = ObservationSeries::new(
            (1..=10).map(|d| obs(date(2020, 1, d), 1.0)).collect(),
        )
        .unwrap();
        let r = series.range(date(2020, 1, 3), date(2020, 1, 6));
        let dates: Vec<_> = r.iter().map(Observation::date).collect();
        assert_eq!(dates, vec![date(2020, 1, 3), date(2020, 1, 4), date(2020, 1, 5)]);
        assert!(series.range(date(2020, 1, 6), date(2020, 1, 6)).is_empty());
        assert!(series.range(date(2020, 2, 1), date(2020, 3, 1)).is_empty());
    }

    #[test]
    fn range_across_gap() {
        let series = ObservationSeries::new(vec![
            obs(date(2020, 1, 1), 1.0),
            obs(date(2020, 1, 20), 1.0),
        ])
        .unwrap();
        assert_eq!(series.range(date(2020, 1, 2), date(2020, 1, 21)).len(), 1);
    }

    #[test]
    fn earliest_and_latest() {
        let series = ObservationSeries::new(vec![
            obs(date(2019, 12, 31), 0.0),
            obs(date(2020, 3, 1), 0.0),
        ])
        .unwrap();
        assert_eq!(series.earliest(), date(2019, 12, 31));
        assert_eq!(series.latest(), date(2020, 3, 1));
        assert_eq!(series.len(), 2);
    }

    #[test]
    fn clip_changes_shape() {
        let series = ObservationSeries::new(vec![obs(date(2020, 1, 1), 1.0)]).unwrap();
        let clipped = series.clip(&Extent::new(1, 0, 1, 2).unwrap()).unwrap();
        assert_eq!(clipped.shape(), (1, 2));
        assert_eq!(clipped.observations()[0].grid().shape(), (1, 2));
    }

    #[test]
    fn scaled_rejects_negative_factor() {
        let series = ObservationSeries::new(vec![obs(date(2020, 1, 1), 1.0)]).unwrap();
        assert!(series.scaled(2.0).is_ok());
        assert!(series.scaled(-1.0).is_err());
    }
}
