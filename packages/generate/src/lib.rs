#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Sample observation sets for demos and manual testing.
//!
//! Three generators mirror the granularities a user can bulk-load: one
//! June tally per region per year, a full monthly grid, and a patterned
//! grid where each region follows its own base level with a seasonal
//! swing. All of them return a fresh, duplicate-free observation list
//! the caller feeds into the store.

use std::ops::RangeInclusive;

use polda_trends_models::{Observation, Region};
use rand::Rng;

/// Year span used when the caller does not pick one.
pub const DEFAULT_YEARS: RangeInclusive<i32> = 2021..=2023;

/// Per-region base level and random spread for [`patterned`].
struct RegionPattern {
    base: f64,
    variation: f64,
}

const fn pattern(region: Region) -> RegionPattern {
    let (base, variation) = match region {
        Region::MetroJaya => (200.0, 50.0),
        Region::JawaTimur => (180.0, 45.0),
        Region::JawaBarat => (150.0, 40.0),
        Region::JawaTengah => (120.0, 35.0),
        Region::SumateraUtara => (90.0, 30.0),
        Region::SulawesiSelatan => (85.0, 25.0),
        Region::SumateraSelatan => (80.0, 25.0),
        Region::Bali => (70.0, 20.0),
        Region::KalimantanBarat => (60.0, 20.0),
        Region::Aceh => (50.0, 15.0),
    };
    RegionPattern { base, variation }
}

/// One June observation per region per year, counts uniform in 50..130.
#[must_use]
pub fn yearly(years: RangeInclusive<i32>) -> Vec<Observation> {
    let mut rng = rand::thread_rng();
    let mut observations = Vec::new();

    for year in years {
        for &region in Region::all() {
            let base = rng.gen_range(50..100u64);
            observations.push(Observation {
                region,
                year,
                month: 6,
                count: base + rng.gen_range(0..30u64),
            });
        }
    }

    log::debug!("generated {} yearly sample observations", observations.len());
    observations
}

/// One observation per region per month, counts uniform in 50..130.
#[must_use]
pub fn monthly(years: RangeInclusive<i32>) -> Vec<Observation> {
    let mut rng = rand::thread_rng();
    let mut observations = Vec::new();

    for year in years {
        for month in 1..=12 {
            for &region in Region::all() {
                let base = rng.gen_range(50..100u64);
                observations.push(Observation {
                    region,
                    year,
                    month,
                    count: base + rng.gen_range(0..30u64),
                });
            }
        }
    }

    log::debug!(
        "generated {} monthly sample observations",
        observations.len()
    );
    observations
}

/// A full monthly grid where each region oscillates around its own base
/// level with a sinusoidal seasonal factor, clamped to at least 10.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn patterned(years: RangeInclusive<i32>) -> Vec<Observation> {
    let mut rng = rand::thread_rng();
    let mut observations = Vec::new();

    for year in years {
        for month in 1..=12u32 {
            for &region in Region::all() {
                let RegionPattern { base, variation } = pattern(region);
                let seasonal = (f64::from(month - 1) * std::f64::consts::PI / 6.0).sin() * 20.0;
                let random = rng.gen_range(-variation / 2.0..variation / 2.0);
                let count = (base + seasonal + random).round().max(10.0) as u64;

                observations.push(Observation {
                    region,
                    year,
                    month,
                    count,
                });
            }
        }
    }

    log::debug!(
        "generated {} patterned sample observations",
        observations.len()
    );
    observations
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;

    fn assert_no_duplicate_triples(observations: &[Observation]) {
        let triples: BTreeSet<(Region, i32, u32)> = observations
            .iter()
            .map(|o| (o.region, o.year, o.month))
            .collect();
        assert_eq!(triples.len(), observations.len());
    }

    #[test]
    fn yearly_covers_every_region_once_per_year() {
        let observations = yearly(DEFAULT_YEARS);
        assert_eq!(observations.len(), 3 * Region::all().len());
        assert_no_duplicate_triples(&observations);
        assert!(observations.iter().all(|o| o.month == 6));
        assert!(observations.iter().all(|o| (50..130).contains(&o.count)));
    }

    #[test]
    fn monthly_covers_the_full_grid() {
        let observations = monthly(2022..=2022);
        assert_eq!(observations.len(), 12 * Region::all().len());
        assert_no_duplicate_triples(&observations);
        assert!(observations.iter().all(|o| (1..=12).contains(&o.month)));
    }

    #[test]
    fn patterned_counts_stay_above_floor() {
        let observations = patterned(DEFAULT_YEARS);
        assert_eq!(observations.len(), 3 * 12 * Region::all().len());
        assert_no_duplicate_triples(&observations);
        assert!(observations.iter().all(|o| o.count >= 10));
    }

    #[test]
    fn patterned_orders_regions_by_base_level() {
        // Metro Jaya's base is four times Aceh's; averaged over a full
        // grid the gap survives the +/-25 random spread.
        let observations = patterned(DEFAULT_YEARS);

        let mean = |region: Region| {
            let counts: Vec<u64> = observations
                .iter()
                .filter(|o| o.region == region)
                .map(|o| o.count)
                .collect();
            counts.iter().sum::<u64>() / counts.len() as u64
        };

        assert!(mean(Region::MetroJaya) > mean(Region::Aceh) + 50);
    }
}
