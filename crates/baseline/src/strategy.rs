//! Seasonal grouping strategies.

use aridity_calendar::{Doy, DoyRange};
use aridity_window::{Aggregate, WindowPolicy};

/// How aggregates are grouped for baseline statistics.
///
/// Chosen once per model from its [`WindowPolicy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeasonalStrategy {
    /// Each aggregate is compared with every aggregate whose nominal end
    /// falls inside its own nominal day-of-year range.
    SeasonalByDayOfYear,
    /// All aggregates form one group.
    SingleGroup,
}

impl SeasonalStrategy {
    /// Picks the strategy for `policy`: one group for windows of a year or
    /// longer, seasonal grouping otherwise.
    pub fn for_policy(policy: &WindowPolicy) -> Self {
        if policy.is_annual_or_longer() {
            Self::SingleGroup
        } else {
            Self::SeasonalByDayOfYear
        }
    }
}

/// Identity of a seasonal group, used in logs and errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroupKey {
    /// Aggregates ending inside this day-of-year range.
    Seasonal(DoyRange),
    /// Every aggregate of the model.
    All,
}

impl std::fmt::Display for GroupKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Seasonal(range) => write!(f, "doy {range}"),
            Self::All => f.write_str("all"),
        }
    }
}

/// Member indices of every aggregate's group, in aggregate order.
pub(crate) fn member_sets(
    strategy: SeasonalStrategy,
    aggregates: &[Aggregate],
) -> Vec<(GroupKey, Vec<usize>)> {
    match strategy {
        SeasonalStrategy::SingleGroup => {
            let all: Vec<usize> = (0..aggregates.len()).collect();
            aggregates
                .iter()
                .map(|_| (GroupKey::All, all.clone()))
                .collect()
        }
        SeasonalStrategy::SeasonalByDayOfYear => {
            let ends: Vec<Doy> = aggregates.iter().map(|a| a.window().end_position()).collect();
            aggregates
                .iter()
                .map(|a| {
                    let range = a.window().doy_range();
                    let members = ends
                        .iter()
                        .enumerate()
                        .filter(|(_, end)| range.contains(**end))
                        .map(|(j, _)| j)
                        .collect();
                    (GroupKey::Seasonal(range), members)
                })
                .collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strategy_for_policy() {
        let sub = WindowPolicy::months(3).unwrap();
        assert_eq!(
            SeasonalStrategy::for_policy(&sub),
            SeasonalStrategy::SeasonalByDayOfYear
        );
        let annual = WindowPolicy::months(12).unwrap();
        assert_eq!(
            SeasonalStrategy::for_policy(&annual),
            SeasonalStrategy::SingleGroup
        );
        let fixed = WindowPolicy::fixed_days(16, -5).unwrap();
        assert_eq!(
            SeasonalStrategy::for_policy(&fixed),
            SeasonalStrategy::SeasonalByDayOfYear
        );
    }

    #[test]
    fn key_display() {
        let range = DoyRange::new(Doy::new(32).unwrap(), Doy::new(60).unwrap());
        assert_eq!(GroupKey::Seasonal(range).to_string(), "doy (32, 60]");
        assert_eq!(GroupKey::All.to_string(), "all");
    }
}
