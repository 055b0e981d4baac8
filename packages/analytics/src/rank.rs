//! Regional ranking and the fixed-ratio next-year projection.

use std::collections::BTreeMap;

use polda_trends_models::{RankTier, RankedRegion, Region, RegionalAggregate, RegionalProjection};

/// Orders regional averages descending and assigns presentation tiers.
///
/// Ties are broken by the region wire id, lexical ascending, so equal
/// averages always rank in the same order.
#[must_use]
pub fn rank(aggregates: &BTreeMap<Region, RegionalAggregate>) -> Vec<RankedRegion> {
    let mut entries: Vec<(Region, u64)> = aggregates
        .values()
        .map(|a| (a.region, a.average))
        .collect();

    entries.sort_by(|a, b| {
        b.1.cmp(&a.1)
            .then_with(|| a.0.as_ref().cmp(b.0.as_ref()))
    });

    entries
        .into_iter()
        .enumerate()
        .map(|(position, (region, average))| RankedRegion {
            region,
            average,
            tier: RankTier::for_position(position),
        })
        .collect()
}

/// Projects each region's average one year ahead with a fixed 10% uplift.
#[must_use]
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn regional_projections(
    aggregates: &BTreeMap<Region, RegionalAggregate>,
) -> Vec<RegionalProjection> {
    aggregates
        .values()
        .map(|a| RegionalProjection {
            region: a.region,
            current_average: a.average,
            projected_average: ((a.average as f64) * 1.1).round() as u64,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use polda_trends_models::Observation;

    use super::*;
    use crate::aggregate;

    fn observations(entries: &[(Region, u64)]) -> Vec<Observation> {
        entries
            .iter()
            .enumerate()
            .map(|(i, &(region, count))| Observation {
                region,
                year: 2023,
                month: (i % 12) as u32 + 1,
                count,
            })
            .collect()
    }

    #[test]
    fn orders_by_average_descending() {
        let obs = observations(&[
            (Region::Bali, 60),
            (Region::MetroJaya, 200),
            (Region::Aceh, 40),
        ]);
        let ranked = rank(&aggregate(&obs, None));

        assert_eq!(ranked.len(), 3);
        assert!(ranked.windows(2).all(|w| w[0].average >= w[1].average));
        assert_eq!(ranked[0].region, Region::MetroJaya);
        assert_eq!(ranked[2].region, Region::Aceh);
    }

    #[test]
    fn equal_averages_rank_by_region_id() {
        let obs = observations(&[
            (Region::Bali, 50),
            (Region::Aceh, 50),
            (Region::MetroJaya, 50),
        ]);
        let ranked = rank(&aggregate(&obs, None));

        // "polda-aceh" < "polda-bali" < "polda-metro-jaya"
        assert_eq!(ranked[0].region, Region::Aceh);
        assert_eq!(ranked[1].region, Region::Bali);
        assert_eq!(ranked[2].region, Region::MetroJaya);
    }

    #[test]
    fn top_three_positions_get_distinct_tiers() {
        let obs = observations(&[
            (Region::MetroJaya, 200),
            (Region::JawaTimur, 180),
            (Region::JawaBarat, 150),
            (Region::JawaTengah, 120),
            (Region::Bali, 70),
        ]);
        let ranked = rank(&aggregate(&obs, None));

        assert_eq!(ranked[0].tier, RankTier::Top);
        assert_eq!(ranked[1].tier, RankTier::Second);
        assert_eq!(ranked[2].tier, RankTier::Third);
        assert_eq!(ranked[3].tier, RankTier::Neutral);
        assert_eq!(ranked[4].tier, RankTier::Neutral);
    }

    #[test]
    fn length_matches_distinct_regions() {
        let obs = observations(&[
            (Region::Bali, 60),
            (Region::Bali, 70),
            (Region::Aceh, 40),
        ]);
        let ranked = rank(&aggregate(&obs, None));
        assert_eq!(ranked.len(), 2);
    }

    #[test]
    fn empty_aggregates_rank_empty() {
        assert!(rank(&BTreeMap::new()).is_empty());
    }

    #[test]
    fn projections_apply_ten_percent_uplift() {
        let obs = observations(&[(Region::MetroJaya, 200), (Region::Bali, 65)]);
        let projections = regional_projections(&aggregate(&obs, None));

        let metro = projections
            .iter()
            .find(|p| p.region == Region::MetroJaya)
            .unwrap();
        assert_eq!(metro.current_average, 200);
        assert_eq!(metro.projected_average, 220);

        let bali = projections.iter().find(|p| p.region == Region::Bali).unwrap();
        // 65 * 1.1 = 71.5 rounds to 72
        assert_eq!(bali.projected_average, 72);
    }
}
