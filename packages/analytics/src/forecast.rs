//! Ordinary-least-squares forecast over the full observation history.
//!
//! All regions' counts are treated as one undifferentiated series ordered
//! by calendar date. The regressor is the number of 30-day periods elapsed
//! since the first observation (a continuous day-count proxy, not a
//! calendar-month index), so uneven month lengths shift the fit slightly.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use polda_trends_models::{ForecastResult, Observation, Region, Scenario};

use crate::AnalyticsError;

/// Number of future 30-day periods projected by default.
pub const DEFAULT_HORIZON_MONTHS: usize = 12;

/// Scenario band ratios applied to the mean projection.
const HIGH_BAND_RATIO: f64 = 1.3;
const LOW_BAND_RATIO: f64 = 0.7;

/// Fits a least-squares line over the dated observation history and
/// projects `horizon_months` future points.
///
/// # Errors
///
/// Returns [`AnalyticsError::InsufficientData`] when fewer than three
/// distinct regions are represented, and
/// [`AnalyticsError::DegenerateSeries`] when every observation shares a
/// single date, which would make the regression denominator zero.
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn forecast(
    observations: &[Observation],
    horizon_months: usize,
) -> Result<ForecastResult, AnalyticsError> {
    // The store range-checks months, so every observation here is datable.
    let mut dated: Vec<(NaiveDate, Region, u64)> = observations
        .iter()
        .filter_map(|o| o.date().map(|d| (d, o.region, o.count)))
        .collect();

    let regions: BTreeSet<Region> = dated.iter().map(|&(_, region, _)| region).collect();
    if regions.len() < 3 {
        return Err(AnalyticsError::InsufficientData {
            regions: regions.len(),
        });
    }

    dated.sort_by_key(|&(date, _, _)| date);

    let first_date = dated[0].0;
    let points: Vec<(f64, f64)> = dated
        .iter()
        .map(|&(date, _, count)| {
            let offset = (date - first_date).num_days() as f64 / 30.0;
            (offset, count as f64)
        })
        .collect();

    let n = points.len() as f64;
    let sum_x: f64 = points.iter().map(|&(x, _)| x).sum();
    let sum_y: f64 = points.iter().map(|&(_, y)| y).sum();
    let sum_xy: f64 = points.iter().map(|&(x, y)| x * y).sum();
    let sum_xx: f64 = points.iter().map(|&(x, _)| x * x).sum();

    let denominator = n.mul_add(sum_xx, -(sum_x * sum_x));
    if denominator.abs() < f64::EPSILON {
        return Err(AnalyticsError::DegenerateSeries);
    }

    let slope = n.mul_add(sum_xy, -(sum_x * sum_y)) / denominator;
    let intercept = (sum_y - slope * sum_x) / n;

    let last_x = points[points.len() - 1].0;
    let projected_series: Vec<u64> = (1..=horizon_months)
        .map(|i| {
            let x = last_x + i as f64;
            let value = slope.mul_add(x, intercept).round();
            if value < 0.0 { 0 } else { value as u64 }
        })
        .collect();

    let mid = mean_rounded(&projected_series);
    let scenario = Scenario {
        low: scale_rounded(mid, LOW_BAND_RATIO),
        mid,
        high: scale_rounded(mid, HIGH_BAND_RATIO),
    };

    log::debug!(
        "fitted slope {slope:.4} intercept {intercept:.4} over {} points",
        points.len()
    );

    Ok(ForecastResult {
        slope,
        intercept,
        projected_series,
        scenario,
    })
}

#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn mean_rounded(values: &[u64]) -> u64 {
    if values.is_empty() {
        return 0;
    }
    let total: u64 = values.iter().sum();
    ((total as f64) / (values.len() as f64)).round() as u64
}

#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn scale_rounded(value: u64, ratio: f64) -> u64 {
    ((value as f64) * ratio).round() as u64
}
