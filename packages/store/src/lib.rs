#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Owning store for crime observations.
//!
//! The store is the single source of truth for raw observations. Callers
//! hold the only mutable reference; every derived view (aggregates,
//! rankings, forecasts) is recomputed from a borrowed slice, never cached.
//!
//! Persistence is a flat JSON snapshot (see [`snapshot`]) and the export
//! format is the fixed-header CSV produced by [`export`].

pub mod export;
pub mod snapshot;

use std::collections::BTreeSet;

use chrono::NaiveDate;
use polda_trends_models::{Observation, Region};
use thiserror::Error;

/// Errors produced by store mutations.
///
/// Both variants are recoverable, user-facing validation failures; the
/// store is left unchanged when they occur.
#[derive(Debug, Error)]
pub enum StoreError {
    /// An observation for the same (region, year, month) already exists.
    #[error("observation for {region} {year}-{month:02} already recorded")]
    DuplicateObservation {
        /// Jurisdiction of the colliding observation.
        region: Region,
        /// Year of the colliding observation.
        year: i32,
        /// Month of the colliding observation.
        month: u32,
    },

    /// A field is outside its valid range.
    #[error("invalid observation input: {message}")]
    InvalidInput {
        /// Description of what was rejected.
        message: String,
    },
}

/// Ordered, owning collection of observations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObservationStore {
    observations: Vec<Observation>,
}

impl ObservationStore {
    /// Creates an empty store.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            observations: Vec::new(),
        }
    }

    /// Builds a store from a list of observations, applying the same
    /// validation as [`Self::add`] to each entry in order.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] on the first out-of-range field or
    /// duplicate (region, year, month) triple.
    pub fn from_observations(
        observations: impl IntoIterator<Item = Observation>,
    ) -> Result<Self, StoreError> {
        let mut store = Self::new();
        for observation in observations {
            store.add(observation)?;
        }
        Ok(store)
    }

    /// Inserts a new observation.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidInput`] when the month is outside
    /// `1..=12` or the year is below 1, and
    /// [`StoreError::DuplicateObservation`] when an observation already
    /// exists for the same (region, year, month).
    pub fn add(&mut self, observation: Observation) -> Result<(), StoreError> {
        validate(&observation)?;

        if self.contains(observation.region, observation.year, observation.month) {
            return Err(StoreError::DuplicateObservation {
                region: observation.region,
                year: observation.year,
                month: observation.month,
            });
        }

        self.observations.push(observation);
        Ok(())
    }

    /// Removes the observation for the given (region, year, month), if any.
    pub fn remove(&mut self, region: Region, year: i32, month: u32) -> Option<Observation> {
        let index = self
            .observations
            .iter()
            .position(|o| o.region == region && o.year == year && o.month == month)?;
        Some(self.observations.remove(index))
    }

    /// Removes the observation at the given position, if in bounds.
    pub fn remove_at(&mut self, index: usize) -> Option<Observation> {
        if index < self.observations.len() {
            Some(self.observations.remove(index))
        } else {
            None
        }
    }

    /// Replaces the entire contents with a new observation set.
    ///
    /// The existing contents are kept when validation fails.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] under the same conditions as
    /// [`Self::from_observations`].
    pub fn replace_all(
        &mut self,
        observations: impl IntoIterator<Item = Observation>,
    ) -> Result<(), StoreError> {
        let replacement = Self::from_observations(observations)?;
        *self = replacement;
        Ok(())
    }

    /// Removes all observations.
    pub fn clear(&mut self) {
        self.observations.clear();
    }

    /// Borrowed view of the observations in store order.
    #[must_use]
    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    /// Number of observations held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.observations.len()
    }

    /// Whether the store holds no observations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    /// Whether an observation exists for the given (region, year, month).
    #[must_use]
    pub fn contains(&self, region: Region, year: i32, month: u32) -> bool {
        self.observations
            .iter()
            .any(|o| o.region == region && o.year == year && o.month == month)
    }

    /// The set of jurisdictions with at least one observation.
    #[must_use]
    pub fn distinct_regions(&self) -> BTreeSet<Region> {
        self.observations.iter().map(|o| o.region).collect()
    }

    /// Sorts the store by (year, month) ascending, ties broken by the
    /// region wire id.
    pub fn sort_chronologically(&mut self) {
        self.observations.sort_by(|a, b| {
            (a.year, a.month)
                .cmp(&(b.year, b.month))
                .then_with(|| a.region.as_ref().cmp(b.region.as_ref()))
        });
    }

    /// Observations whose month falls inside the inclusive date range.
    #[must_use]
    pub fn between(&self, from: NaiveDate, to: NaiveDate) -> Vec<Observation> {
        self.observations
            .iter()
            .filter(|o| o.date().is_some_and(|d| d >= from && d <= to))
            .copied()
            .collect()
    }
}

fn validate(observation: &Observation) -> Result<(), StoreError> {
    if !(1..=12).contains(&observation.month) {
        return Err(StoreError::InvalidInput {
            message: format!("month {} is outside 1-12", observation.month),
        });
    }
    if observation.year < 1 {
        return Err(StoreError::InvalidInput {
            message: format!("year {} is below 1", observation.year),
        });
    }
    Ok(())
}
