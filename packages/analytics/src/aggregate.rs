//! Per-region and per-month aggregation over the observation set.

use std::collections::BTreeMap;

use polda_trends_models::{
    MonthlyTotal, Observation, OverviewStats, Region, RegionalAggregate, TrendDirection,
};

/// `total / samples` rounded half away from zero; zero when `samples`
/// is zero.
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub(crate) fn rounded_mean(total: u64, samples: u64) -> u64 {
    if samples == 0 {
        return 0;
    }
    ((total as f64) / (samples as f64)).round() as u64
}

/// Groups observations by region and computes totals, sample counts,
/// and rounded averages.
///
/// With `region_filter` set, only that region's observations contribute.
/// A region with zero observations is absent from the output, never
/// zero-filled.
#[must_use]
pub fn aggregate(
    observations: &[Observation],
    region_filter: Option<Region>,
) -> BTreeMap<Region, RegionalAggregate> {
    let mut sums: BTreeMap<Region, (u64, u64)> = BTreeMap::new();

    for observation in observations {
        if region_filter.is_some_and(|r| r != observation.region) {
            continue;
        }
        let entry = sums.entry(observation.region).or_insert((0, 0));
        entry.0 += observation.count;
        entry.1 += 1;
    }

    sums.into_iter()
        .map(|(region, (total, sample_count))| {
            (
                region,
                RegionalAggregate {
                    region,
                    total,
                    sample_count,
                    average: rounded_mean(total, sample_count),
                },
            )
        })
        .collect()
}

/// Nationwide totals per calendar month, (year, month) ascending.
#[must_use]
pub fn monthly_totals(observations: &[Observation]) -> Vec<MonthlyTotal> {
    let mut sums: BTreeMap<(i32, u32), u64> = BTreeMap::new();

    for observation in observations {
        *sums.entry((observation.year, observation.month)).or_insert(0) += observation.count;
    }

    sums.into_iter()
        .map(|((year, month), total)| MonthlyTotal { year, month, total })
        .collect()
}

/// Headline statistics: totals, distinct regions, overall average, and
/// the direction of the last count movement.
///
/// The trend compares the final two observations in the given order and
/// is [`TrendDirection::Stable`] when fewer than two exist.
#[must_use]
pub fn overview(observations: &[Observation]) -> OverviewStats {
    let total: u64 = observations.iter().map(|o| o.count).sum();
    let distinct_regions = observations
        .iter()
        .map(|o| o.region)
        .collect::<std::collections::BTreeSet<_>>()
        .len() as u64;

    let trend = match observations {
        [.., previous, last] => {
            if last.count > previous.count {
                TrendDirection::Rising
            } else if last.count < previous.count {
                TrendDirection::Falling
            } else {
                TrendDirection::Stable
            }
        }
        _ => TrendDirection::Stable,
    };

    OverviewStats {
        total_observations: observations.len() as u64,
        distinct_regions,
        overall_average: rounded_mean(total, observations.len() as u64),
        trend,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn obs(region: Region, year: i32, month: u32, count: u64) -> Observation {
        Observation {
            region,
            year,
            month,
            count,
        }
    }

    #[test]
    fn totals_are_preserved() {
        let observations = vec![
            obs(Region::MetroJaya, 2023, 1, 200),
            obs(Region::MetroJaya, 2023, 2, 220),
            obs(Region::Bali, 2023, 1, 60),
        ];

        let aggregates = aggregate(&observations, None);

        let aggregate_total: u64 = aggregates.values().map(|a| a.total).sum();
        let observation_total: u64 = observations.iter().map(|o| o.count).sum();
        assert_eq!(aggregate_total, observation_total);
    }

    #[test]
    fn averages_round_half_away_from_zero() {
        let observations = vec![
            obs(Region::Bali, 2023, 1, 2),
            obs(Region::Bali, 2023, 2, 3),
        ];
        let aggregates = aggregate(&observations, None);
        // 5 / 2 = 2.5 rounds to 3
        assert_eq!(aggregates[&Region::Bali].average, 3);

        let observations = vec![
            obs(Region::Bali, 2023, 1, 2),
            obs(Region::Bali, 2023, 2, 2),
            obs(Region::Bali, 2023, 3, 3),
        ];
        let aggregates = aggregate(&observations, None);
        // 7 / 3 = 2.33 rounds to 2
        assert_eq!(aggregates[&Region::Bali].average, 2);
    }

    #[test]
    fn region_filter_restricts_output() {
        let observations = vec![
            obs(Region::MetroJaya, 2023, 1, 200),
            obs(Region::Bali, 2023, 1, 60),
        ];

        let aggregates = aggregate(&observations, Some(Region::Bali));

        assert_eq!(aggregates.len(), 1);
        assert_eq!(aggregates[&Region::Bali].total, 60);
        assert_eq!(aggregates[&Region::Bali].sample_count, 1);
    }

    #[test]
    fn unobserved_regions_are_absent() {
        let observations = vec![obs(Region::Aceh, 2023, 1, 40)];
        let aggregates = aggregate(&observations, None);
        assert_eq!(aggregates.len(), 1);
        assert!(!aggregates.contains_key(&Region::MetroJaya));
    }

    #[test]
    fn aggregate_is_idempotent() {
        let observations = vec![
            obs(Region::MetroJaya, 2023, 1, 200),
            obs(Region::Bali, 2023, 1, 60),
        ];
        assert_eq!(
            aggregate(&observations, None),
            aggregate(&observations, None)
        );
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(aggregate(&[], None).is_empty());
        assert!(monthly_totals(&[]).is_empty());
    }

    #[test]
    fn monthly_totals_sum_across_regions_in_date_order() {
        let observations = vec![
            obs(Region::Bali, 2023, 2, 10),
            obs(Region::MetroJaya, 2023, 1, 200),
            obs(Region::Bali, 2023, 1, 60),
            obs(Region::MetroJaya, 2022, 12, 190),
        ];

        let totals = monthly_totals(&observations);

        assert_eq!(
            totals,
            vec![
                MonthlyTotal {
                    year: 2022,
                    month: 12,
                    total: 190
                },
                MonthlyTotal {
                    year: 2023,
                    month: 1,
                    total: 260
                },
                MonthlyTotal {
                    year: 2023,
                    month: 2,
                    total: 10
                },
            ]
        );
    }

    #[test]
    fn overview_of_empty_set_is_all_zero_and_stable() {
        let stats = overview(&[]);
        assert_eq!(stats.total_observations, 0);
        assert_eq!(stats.distinct_regions, 0);
        assert_eq!(stats.overall_average, 0);
        assert_eq!(stats.trend, TrendDirection::Stable);
    }

    #[test]
    fn overview_trend_follows_last_two_counts() {
        let rising = vec![obs(Region::Bali, 2023, 1, 10), obs(Region::Bali, 2023, 2, 20)];
        assert_eq!(overview(&rising).trend, TrendDirection::Rising);

        let falling = vec![obs(Region::Bali, 2023, 1, 20), obs(Region::Bali, 2023, 2, 10)];
        assert_eq!(overview(&falling).trend, TrendDirection::Falling);

        let flat = vec![obs(Region::Bali, 2023, 1, 10), obs(Region::Bali, 2023, 2, 10)];
        assert_eq!(overview(&flat).trend, TrendDirection::Stable);

        let single = vec![obs(Region::Bali, 2023, 1, 10)];
        assert_eq!(overview(&single).trend, TrendDirection::Stable);
    }

    #[test]
    fn overview_counts_and_average() {
        let observations = vec![
            obs(Region::MetroJaya, 2023, 1, 100),
            obs(Region::Bali, 2023, 1, 50),
            obs(Region::Bali, 2023, 2, 51),
        ];
        let stats = overview(&observations);
        assert_eq!(stats.total_observations, 3);
        assert_eq!(stats.distinct_regions, 2);
        // 201 / 3 = 67
        assert_eq!(stats.overall_average, 67);
    }
}
