//! Per-group mean and population standard deviation grids.

use std::collections::HashMap;

use aridity_raster::Grid;
use aridity_stats::{mean, population_sd};
use aridity_window::{Aggregate, WindowPolicy};
use ndarray::Array2;
use rayon::prelude::*;
use tracing::warn;

use crate::config::{BaselineConfig, Strictness};
use crate::error::BaselineError;
use crate::strategy::{GroupKey, SeasonalStrategy, member_sets};

/// Cell-wise mean and population standard deviation of a group's sums.
#[derive(Debug, Clone, PartialEq)]
pub struct Baseline {
    mean_grid: Grid,
    stddev_grid: Grid,
}

impl Baseline {
    /// Computes the baseline of the given sum grids.
    ///
    /// # Errors
    ///
    /// - [`BaselineError::EmptyGroup`] if `grids` is empty.
    /// - [`BaselineError::ShapeMismatch`] if the grids differ in shape.
    pub fn from_grids(group: &GroupKey, grids: &[&Grid]) -> Result<Self, BaselineError> {
        let Some(first) = grids.first() else {
            return Err(BaselineError::EmptyGroup {
                group: group.to_string(),
            });
        };
        let expected = first.shape();
        if let Some(bad) = grids.iter().find(|g| g.shape() != expected) {
            return Err(BaselineError::ShapeMismatch {
                expected,
                got: bad.shape(),
            });
        }

        let views: Vec<_> = grids.iter().map(|g| g.view()).collect();
        let mut cell = Vec::with_capacity(views.len());
        let mut gather = |idx: (usize, usize)| {
            cell.clear();
            cell.extend(views.iter().map(|v| v[idx]));
            (mean(&cell), population_sd(&cell))
        };
        let moments: Array2<(f64, f64)> = Array2::from_shape_fn(expected, &mut gather);

        Ok(Self {
            mean_grid: Grid::new(moments.mapv(|(m, _)| m))?,
            stddev_grid: Grid::new(moments.mapv(|(_, sd)| sd))?,
        })
    }

    /// Cell-wise mean.
    pub fn mean_grid(&self) -> &Grid {
        &self.mean_grid
    }

    /// Cell-wise population standard deviation.
    pub fn stddev_grid(&self) -> &Grid {
        &self.stddev_grid
    }
}

/// A distinct set of aggregates sharing one baseline.
#[derive(Debug, Clone)]
pub struct SeasonalGroup {
    key: GroupKey,
    members: Vec<usize>,
    baseline: Baseline,
    low_confidence: bool,
}

impl SeasonalGroup {
    /// Identity of the group (the range of its first aggregate).
    pub fn key(&self) -> GroupKey {
        self.key
    }

    /// Indices of member aggregates, ascending.
    pub fn members(&self) -> &[usize] {
        &self.members
    }

    /// Number of members.
    pub fn size(&self) -> usize {
        self.members.len()
    }

    /// The group's baseline.
    pub fn baseline(&self) -> &Baseline {
        &self.baseline
    }

    /// `true` if the group is smaller than the configured minimum.
    pub fn low_confidence(&self) -> bool {
        self.low_confidence
    }
}

/// Baselines of one model plus the group assigned to each aggregate.
#[derive(Debug, Clone)]
pub struct BaselineSet {
    strategy: SeasonalStrategy,
    groups: Vec<SeasonalGroup>,
    assignment: Vec<usize>,
}

impl BaselineSet {
    /// Strategy used to form the groups.
    pub fn strategy(&self) -> SeasonalStrategy {
        self.strategy
    }

    /// Distinct groups in order of first appearance.
    pub fn groups(&self) -> &[SeasonalGroup] {
        &self.groups
    }

    /// Group of the aggregate at `index`.
    pub fn group_of(&self, index: usize) -> Option<&SeasonalGroup> {
        self.assignment.get(index).map(|&g| &self.groups[g])
    }

    /// Number of low-confidence groups.
    pub fn low_confidence_count(&self) -> usize {
        self.groups.iter().filter(|g| g.low_confidence).count()
    }
}

/// Groups `aggregates` under `policy` and computes every group's baseline.
///
/// Aggregates whose groups contain exactly the same members share one
/// baseline. Distinct groups are computed in parallel.
///
/// # Errors
///
/// - [`BaselineError::InvalidConfig`] if `config` is invalid.
/// - [`BaselineError::EmptyGroup`] if a group has no members.
/// - [`BaselineError::UndersizedGroup`] under [`Strictness::Strict`] when a
///   group is below `min_group_size`.
#[tracing::instrument(skip_all, fields(n_aggregates = aggregates.len(), %policy))]
pub fn compute_baselines(
    aggregates: &[Aggregate],
    policy: &WindowPolicy,
    config: &BaselineConfig,
) -> Result<BaselineSet, BaselineError> {
    config.validate()?;
    let strategy = SeasonalStrategy::for_policy(policy);

    let mut distinct: Vec<(GroupKey, Vec<usize>)> = Vec::new();
    let mut seen: HashMap<Vec<usize>, usize> = HashMap::new();
    let mut assignment = Vec::with_capacity(aggregates.len());
    for (key, members) in member_sets(strategy, aggregates) {
        let next = distinct.len();
        let idx = *seen.entry(members.clone()).or_insert_with(|| {
            distinct.push((key, members));
            next
        });
        assignment.push(idx);
    }

    let min_size = config.min_group_size();
    for (key, members) in &distinct {
        if members.is_empty() {
            return Err(BaselineError::EmptyGroup {
                group: key.to_string(),
            });
        }
        if members.len() < min_size {
            match config.strictness() {
                Strictness::Strict => {
                    return Err(BaselineError::UndersizedGroup {
                        group: key.to_string(),
                        size: members.len(),
                        min_size,
                    });
                }
                Strictness::Lenient => {
                    warn!(group = %key, size = members.len(), min_size, "low-confidence seasonal group");
                }
            }
        }
    }

    let groups = distinct
        .into_par_iter()
        .map(|(key, members)| {
            let grids: Vec<&Grid> = members.iter().map(|&j| aggregates[j].sum_grid()).collect();
            let baseline = Baseline::from_grids(&key, &grids)?;
            Ok(SeasonalGroup {
                key,
                low_confidence: members.len() < min_size,
                members,
                baseline,
            })
        })
        .collect::<Result<Vec<_>, BaselineError>>()?;

    tracing::debug!(n_groups = groups.len(), ?strategy, "baselines computed");
    Ok(BaselineSet {
        strategy,
        groups,
        assignment,
    })
}
