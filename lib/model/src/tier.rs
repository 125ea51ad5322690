use crate::vocab::cricket;
use oxrdf::NamedNodeRef;
use std::fmt;

/// Minimum number of wickets of an [`PerformanceTier::Excellent`] record.
pub const EXCELLENT_MIN_WICKETS: f64 = 50.0;
/// Economy rate an [`PerformanceTier::Excellent`] record must stay strictly below.
pub const EXCELLENT_MAX_ECONOMY: f64 = 7.5;
/// Minimum number of wickets of a [`PerformanceTier::Good`] record.
pub const GOOD_MIN_WICKETS: f64 = 20.0;
/// Minimum number of wickets of an [`PerformanceTier::Average`] record.
pub const AVERAGE_MIN_WICKETS: f64 = 10.0;

/// The performance classification attached to a bowling statistics record.
///
/// Tiers are ordered from worst to best.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PerformanceTier {
    Poor,
    Average,
    Good,
    Excellent,
}

impl PerformanceTier {
    /// All tiers, best first.
    pub const ALL: [PerformanceTier; 4] = [
        PerformanceTier::Excellent,
        PerformanceTier::Good,
        PerformanceTier::Average,
        PerformanceTier::Poor,
    ];

    /// The ontology class that tags a record of this tier.
    pub fn class(self) -> NamedNodeRef<'static> {
        match self {
            PerformanceTier::Excellent => cricket::EXCELLENT_PERFORMANCE,
            PerformanceTier::Good => cricket::GOOD_PERFORMANCE,
            PerformanceTier::Average => cricket::AVERAGE_PERFORMANCE,
            PerformanceTier::Poor => cricket::POOR_PERFORMANCE,
        }
    }

    /// Maps an ontology class back to its tier.
    pub fn from_class(class: NamedNodeRef<'_>) -> Option<Self> {
        Self::ALL.into_iter().find(|tier| tier.class() == class)
    }
}

impl fmt::Display for PerformanceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PerformanceTier::Excellent => "Excellent",
            PerformanceTier::Good => "Good",
            PerformanceTier::Average => "Average",
            PerformanceTier::Poor => "Poor",
        })
    }
}

/// Classifies a bowling record by its wickets and economy rate.
///
/// Returns [`None`] (the untiered default) if either value is absent. Otherwise the first matching
/// rule wins:
/// - at least 50 wickets with an economy strictly below 7.5 is [`PerformanceTier::Excellent`],
/// - at least 20 wickets is [`PerformanceTier::Good`],
/// - at least 10 wickets is [`PerformanceTier::Average`],
/// - everything else is [`PerformanceTier::Poor`].
pub fn classify(wickets: Option<f64>, economy: Option<f64>) -> Option<PerformanceTier> {
    let (wickets, economy) = (wickets?, economy?);
    Some(
        if wickets >= EXCELLENT_MIN_WICKETS && economy < EXCELLENT_MAX_ECONOMY {
            PerformanceTier::Excellent
        } else if wickets >= GOOD_MIN_WICKETS {
            PerformanceTier::Good
        } else if wickets >= AVERAGE_MIN_WICKETS {
            PerformanceTier::Average
        } else {
            PerformanceTier::Poor
        },
    )
}

/// The class a record is tagged with, falling back to the generic statistics class for untiered
/// records.
pub fn tier_class(tier: Option<PerformanceTier>) -> NamedNodeRef<'static> {
    tier.map_or(cricket::BOWLING_STATISTICS, PerformanceTier::class)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn excellent_requires_fifty_wickets_and_economy_below_seven_and_a_half() {
        assert_eq!(
            classify(Some(50.0), Some(7.49)),
            Some(PerformanceTier::Excellent)
        );
        assert_eq!(
            classify(Some(113.0), Some(7.2)),
            Some(PerformanceTier::Excellent)
        );
    }

    #[test]
    fn economy_boundary_is_exclusive() {
        assert_eq!(classify(Some(50.0), Some(7.5)), Some(PerformanceTier::Good));
    }

    #[test]
    fn wicket_boundaries_are_inclusive() {
        assert_eq!(classify(Some(49.9), Some(6.0)), Some(PerformanceTier::Good));
        assert_eq!(classify(Some(20.0), Some(9.0)), Some(PerformanceTier::Good));
        assert_eq!(
            classify(Some(19.9), Some(6.0)),
            Some(PerformanceTier::Average)
        );
        assert_eq!(
            classify(Some(10.0), Some(6.0)),
            Some(PerformanceTier::Average)
        );
        assert_eq!(classify(Some(9.9), Some(6.0)), Some(PerformanceTier::Poor));
    }

    #[test]
    fn zero_values_are_present_values() {
        assert_eq!(classify(Some(0.0), Some(9.0)), Some(PerformanceTier::Poor));
        assert_eq!(classify(Some(60.0), Some(0.0)), Some(PerformanceTier::Excellent));
    }

    #[test]
    fn absent_values_are_untiered() {
        assert_eq!(classify(Some(120.0), None), None);
        assert_eq!(classify(None, Some(6.0)), None);
        assert_eq!(classify(None, None), None);
        assert_eq!(tier_class(None), cricket::BOWLING_STATISTICS);
    }

    #[test]
    fn tiers_are_ordered() {
        assert!(PerformanceTier::Excellent > PerformanceTier::Good);
        assert!(PerformanceTier::Good > PerformanceTier::Average);
        assert!(PerformanceTier::Average > PerformanceTier::Poor);
    }

    #[test]
    fn classes_round_trip() {
        for tier in PerformanceTier::ALL {
            assert_eq!(PerformanceTier::from_class(tier.class()), Some(tier));
        }
        assert_eq!(
            PerformanceTier::from_class(cricket::BOWLING_STATISTICS),
            None
        );
    }
}
