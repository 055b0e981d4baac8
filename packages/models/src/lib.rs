#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Domain types for the POLDA crime trend system.
//!
//! This crate defines the canonical jurisdiction enumeration, the raw
//! observation record, and the derived result types produced by the
//! analytics engine. Derived types are recomputed on demand and never
//! persisted; only [`Observation`] appears in the snapshot format.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Indonesian month names, indexed by `month - 1`.
///
/// Used for the CSV export contract and human-readable listings.
pub const MONTH_NAMES: [&str; 12] = [
    "Januari",
    "Februari",
    "Maret",
    "April",
    "Mei",
    "Juni",
    "Juli",
    "Agustus",
    "September",
    "Oktober",
    "November",
    "Desember",
];

/// Returns the Indonesian name for a 1-based month number.
#[must_use]
pub fn month_name(month: u32) -> Option<&'static str> {
    if (1..=12).contains(&month) {
        Some(MONTH_NAMES[(month - 1) as usize])
    } else {
        None
    }
}

/// A regional police jurisdiction (POLDA).
///
/// The serialized identifiers are the stable kebab-case keys used in the
/// snapshot format and must not change.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
pub enum Region {
    /// Polda Metro Jaya (greater Jakarta)
    #[serde(rename = "polda-metro-jaya")]
    #[strum(serialize = "polda-metro-jaya")]
    MetroJaya,
    /// Polda Jawa Barat
    #[serde(rename = "polda-jawa-barat")]
    #[strum(serialize = "polda-jawa-barat")]
    JawaBarat,
    /// Polda Jawa Tengah
    #[serde(rename = "polda-jawa-tengah")]
    #[strum(serialize = "polda-jawa-tengah")]
    JawaTengah,
    /// Polda Jawa Timur
    #[serde(rename = "polda-jawa-timur")]
    #[strum(serialize = "polda-jawa-timur")]
    JawaTimur,
    /// Polda Sumatera Utara
    #[serde(rename = "polda-sumatera-utara")]
    #[strum(serialize = "polda-sumatera-utara")]
    SumateraUtara,
    /// Polda Sumatera Selatan
    #[serde(rename = "polda-sumatera-selatan")]
    #[strum(serialize = "polda-sumatera-selatan")]
    SumateraSelatan,
    /// Polda Bali
    #[serde(rename = "polda-bali")]
    #[strum(serialize = "polda-bali")]
    Bali,
    /// Polda Kalimantan Barat
    #[serde(rename = "polda-kalimantan-barat")]
    #[strum(serialize = "polda-kalimantan-barat")]
    KalimantanBarat,
    /// Polda Sulawesi Selatan
    #[serde(rename = "polda-sulawesi-selatan")]
    #[strum(serialize = "polda-sulawesi-selatan")]
    SulawesiSelatan,
    /// Polda Aceh
    #[serde(rename = "polda-aceh")]
    #[strum(serialize = "polda-aceh")]
    Aceh,
}

impl Region {
    /// Human-readable jurisdiction name.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::MetroJaya => "Polda Metro Jaya",
            Self::JawaBarat => "Polda Jawa Barat",
            Self::JawaTengah => "Polda Jawa Tengah",
            Self::JawaTimur => "Polda Jawa Timur",
            Self::SumateraUtara => "Polda Sumatera Utara",
            Self::SumateraSelatan => "Polda Sumatera Selatan",
            Self::Bali => "Polda Bali",
            Self::KalimantanBarat => "Polda Kalimantan Barat",
            Self::SulawesiSelatan => "Polda Sulawesi Selatan",
            Self::Aceh => "Polda Aceh",
        }
    }

    /// Returns all variants of this enum.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::MetroJaya,
            Self::JawaBarat,
            Self::JawaTengah,
            Self::JawaTimur,
            Self::SumateraUtara,
            Self::SumateraSelatan,
            Self::Bali,
            Self::KalimantanBarat,
            Self::SulawesiSelatan,
            Self::Aceh,
        ]
    }
}

/// One recorded monthly crime tally for a jurisdiction.
///
/// Observations are immutable after creation. The store enforces that at
/// most one observation exists per (region, year, month) triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Observation {
    /// Jurisdiction the tally belongs to.
    pub region: Region,
    /// Calendar year (>= 1).
    pub year: i32,
    /// Calendar month (1-12).
    pub month: u32,
    /// Number of recorded crimes.
    pub count: u64,
}

impl Observation {
    /// Calendar date of this observation, anchored to the first day of
    /// its month.
    ///
    /// Returns `None` when the month is outside `1..=12` or the year is
    /// outside chrono's representable range.
    #[must_use]
    pub fn date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
    }
}

/// Per-region aggregate over a set of observations.
///
/// Recomputed on demand from the full observation set; never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionalAggregate {
    /// Jurisdiction.
    pub region: Region,
    /// Sum of counts over all observations for this region.
    pub total: u64,
    /// Number of observations contributing to the total.
    pub sample_count: u64,
    /// `total / sample_count`, rounded half away from zero.
    pub average: u64,
}

/// Presentation tier for a rank position.
///
/// The top three ranks get distinct tiers; everything below is neutral.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RankTier {
    /// Rank 1.
    Top,
    /// Rank 2.
    Second,
    /// Rank 3.
    Third,
    /// Rank 4 and below.
    Neutral,
}

impl RankTier {
    /// Maps a 0-based rank position to its tier.
    #[must_use]
    pub const fn for_position(position: usize) -> Self {
        match position {
            0 => Self::Top,
            1 => Self::Second,
            2 => Self::Third,
            _ => Self::Neutral,
        }
    }
}

/// One entry in the regional ranking, ordered by average descending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedRegion {
    /// Jurisdiction.
    pub region: Region,
    /// Rounded monthly average for the region.
    pub average: u64,
    /// Presentation tier for this rank position.
    pub tier: RankTier,
}

/// Severity classification of a regional monthly average.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Tier {
    /// Average above 150 cases/month: immediate intervention.
    HighPriority,
    /// Average above 100 and at most 150: close monitoring.
    MediumPriority,
    /// Average at most 100: under control.
    Stable,
}

impl Tier {
    /// Indonesian label shown in reports.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::HighPriority => "Prioritas Tinggi",
            Self::MediumPriority => "Prioritas Sedang",
            Self::Stable => "Kondisi Stabil",
        }
    }

    /// Recommended actions for a region in this tier.
    #[must_use]
    pub const fn actions(self) -> &'static [&'static str] {
        match self {
            Self::HighPriority => &[
                "Tambahkan pos pengamanan",
                "Tingkatkan patroli malam",
                "Kerjasama dengan masyarakat",
            ],
            Self::MediumPriority => &[
                "Optimalkan patroli rutin",
                "Program pencegahan komunitas",
                "Sistem pengawasan tambahan",
            ],
            Self::Stable => &[
                "Pertahankan strategi saat ini",
                "Fokus pada pencegahan",
                "Monitoring berkelanjutan",
            ],
        }
    }
}

/// A regional average paired with its severity tier and action list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    /// Jurisdiction.
    pub region: Region,
    /// Rounded monthly average for the region.
    pub average: u64,
    /// Severity tier derived from the average.
    pub tier: Tier,
}

/// Intensity level of a crime count, used for map-marker shading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CrimeLevel {
    /// At most 50 cases/month.
    Low,
    /// 51-100 cases/month.
    Moderate,
    /// 101-200 cases/month.
    High,
    /// More than 200 cases/month.
    Severe,
}

impl CrimeLevel {
    /// Classifies a monthly average into an intensity level.
    #[must_use]
    pub const fn from_average(average: u64) -> Self {
        match average {
            0..=50 => Self::Low,
            51..=100 => Self::Moderate,
            101..=200 => Self::High,
            _ => Self::Severe,
        }
    }

    /// Indonesian label for this level.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Rendah",
            Self::Moderate => "Sedang",
            Self::High => "Tinggi",
            Self::Severe => "Sangat Tinggi",
        }
    }
}

/// Direction of the most recent count movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TrendDirection {
    /// Last count above the previous one.
    Rising,
    /// Last count below the previous one.
    Falling,
    /// Equal, or fewer than two observations.
    Stable,
}

impl TrendDirection {
    /// Indonesian label shown in the stats strip.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Rising => "Naik",
            Self::Falling => "Turun",
            Self::Stable => "Stabil",
        }
    }
}

/// Headline statistics over the full observation set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverviewStats {
    /// Number of observations held.
    pub total_observations: u64,
    /// Number of distinct jurisdictions represented.
    pub distinct_regions: u64,
    /// Rounded mean count over all observations.
    pub overall_average: u64,
    /// Direction of the last count movement.
    pub trend: TrendDirection,
}

/// Nationwide count total for one calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyTotal {
    /// Calendar year.
    pub year: i32,
    /// Calendar month (1-12).
    pub month: u32,
    /// Sum of counts across all regions in this month.
    pub total: u64,
}

/// Fixed-ratio next-year projection for one region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionalProjection {
    /// Jurisdiction.
    pub region: Region,
    /// Current rounded monthly average.
    pub current_average: u64,
    /// Projected average, current plus a fixed 10% uplift.
    pub projected_average: u64,
}

/// Fixed-ratio scenario spread around the mean forecast value.
///
/// These are presentation bands, not statistical confidence intervals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scenario {
    /// Mean projection scaled by 0.7.
    pub low: u64,
    /// Rounded mean of the projected series.
    pub mid: u64,
    /// Mean projection scaled by 1.3.
    pub high: u64,
}

/// Result of a least-squares forecast over the observation history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastResult {
    /// Regression slope, in counts per 30-day period.
    pub slope: f64,
    /// Regression intercept.
    pub intercept: f64,
    /// Point estimates for the next `horizon` 30-day periods.
    pub projected_series: Vec<u64>,
    /// Low/mid/high scenario bands.
    pub scenario: Scenario,
}
