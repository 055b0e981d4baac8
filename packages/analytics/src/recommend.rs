//! Severity classification of regional averages.

use std::collections::BTreeMap;

use polda_trends_models::{Recommendation, Region, RegionalAggregate, Tier};

/// Maps a regional monthly average to its severity tier.
///
/// Thresholds are fixed: above 150 is high priority, above 100 is medium
/// priority, everything else is stable. Total over all `u64`.
#[must_use]
pub const fn classify(average: u64) -> Tier {
    if average > 150 {
        Tier::HighPriority
    } else if average > 100 {
        Tier::MediumPriority
    } else {
        Tier::Stable
    }
}

/// One recommendation per aggregated region, in map order.
#[must_use]
pub fn recommendations(
    aggregates: &BTreeMap<Region, RegionalAggregate>,
) -> Vec<Recommendation> {
    aggregates
        .values()
        .map(|a| Recommendation {
            region: a.region,
            average: a.average,
            tier: classify(a.average),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use polda_trends_models::Observation;

    use super::*;
    use crate::aggregate;

    #[test]
    fn boundary_values_are_exact() {
        assert_eq!(classify(100), Tier::Stable);
        assert_eq!(classify(101), Tier::MediumPriority);
        assert_eq!(classify(150), Tier::MediumPriority);
        assert_eq!(classify(151), Tier::HighPriority);
    }

    #[test]
    fn extremes() {
        assert_eq!(classify(0), Tier::Stable);
        assert_eq!(classify(u64::MAX), Tier::HighPriority);
    }

    #[test]
    fn recommendations_cover_every_aggregated_region() {
        let observations = vec![
            Observation {
                region: Region::MetroJaya,
                year: 2023,
                month: 1,
                count: 200,
            },
            Observation {
                region: Region::JawaTengah,
                year: 2023,
                month: 1,
                count: 120,
            },
            Observation {
                region: Region::Aceh,
                year: 2023,
                month: 1,
                count: 45,
            },
        ];
        let recs = recommendations(&aggregate(&observations, None));

        assert_eq!(recs.len(), 3);
        let by_region: BTreeMap<Region, Tier> =
            recs.iter().map(|r| (r.region, r.tier)).collect();
        assert_eq!(by_region[&Region::MetroJaya], Tier::HighPriority);
        assert_eq!(by_region[&Region::JawaTengah], Tier::MediumPriority);
        assert_eq!(by_region[&Region::Aceh], Tier::Stable);
    }
}
