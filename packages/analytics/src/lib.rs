#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Trend-aggregation and linear-forecast engine.
//!
//! Every function in this crate is a pure computation over a borrowed
//! observation slice or an aggregate map derived from one. Nothing here
//! performs I/O or caches state; callers recompute derived views after
//! each store mutation.

pub mod aggregate;
pub mod forecast;
pub mod rank;
pub mod recommend;

pub use aggregate::{aggregate, monthly_totals, overview};
pub use forecast::{DEFAULT_HORIZON_MONTHS, forecast};
pub use rank::{rank, regional_projections};
pub use recommend::{classify, recommendations};

use thiserror::Error;

/// Errors that can occur during forecast computation.
///
/// Both are deterministic validation failures reported at the call
/// boundary; neither is retried.
#[derive(Debug, Error)]
pub enum AnalyticsError {
    /// Fewer than three distinct regions are represented in the data.
    ///
    /// The threshold is on region diversity, not sample size: a single
    /// region with years of history still fails this check.
    #[error("forecasting requires observations from at least 3 regions, found {regions}")]
    InsufficientData {
        /// Number of distinct regions found.
        regions: usize,
    },

    /// All observations share one calendar date, so the regression
    /// denominator is zero and the slope is undefined.
    #[error("all observations share a single date; the regression slope is undefined")]
    DegenerateSeries,
}
