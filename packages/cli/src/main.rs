#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Command-line front end for the POLDA crime trend engine.
//!
//! Each subcommand loads the JSON snapshot, runs one engine operation,
//! prints the result, and saves the snapshot back when the store was
//! mutated. Region arguments take the wire id form, e.g.
//! `polda-metro-jaya`.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use polda_trends_analytics as analytics;
use polda_trends_models::{CrimeLevel, Observation, Region, month_name};
use polda_trends_store::{ObservationStore, export, snapshot};

#[derive(Parser)]
#[command(name = "polda-trends", about = "POLDA crime trend and forecast tool")]
struct Cli {
    /// Snapshot file holding the observation store.
    #[arg(long, default_value = "data/observations.json", global = true)]
    data: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Record one monthly crime tally
    Add {
        /// Jurisdiction wire id (e.g. polda-bali)
        region: Region,
        /// Calendar year
        year: i32,
        /// Calendar month (1-12)
        month: u32,
        /// Number of recorded crimes
        count: u64,
    },
    /// Delete a recorded tally
    Remove {
        /// Jurisdiction wire id
        region: Option<Region>,
        /// Calendar year
        year: Option<i32>,
        /// Calendar month (1-12)
        month: Option<u32>,
        /// Delete by store position instead of by key
        #[arg(long, conflicts_with_all = ["region", "year", "month"])]
        at: Option<usize>,
    },
    /// List observations chronologically
    List {
        /// Only show observations on or after this date (YYYY-MM-DD)
        #[arg(long)]
        from: Option<NaiveDate>,
        /// Only show observations on or before this date (YYYY-MM-DD)
        #[arg(long)]
        to: Option<NaiveDate>,
    },
    /// Headline statistics over the full store
    Stats,
    /// Nationwide totals per calendar month
    Timeline,
    /// Per-region totals, averages, and intensity levels
    Aggregate {
        /// Restrict to a single jurisdiction
        #[arg(long)]
        region: Option<Region>,
    },
    /// Rank regions by monthly average, highest first
    Rank,
    /// Least-squares forecast over the full history
    Forecast {
        /// Number of future 30-day periods to project
        #[arg(long, default_value_t = analytics::DEFAULT_HORIZON_MONTHS)]
        horizon: usize,
    },
    /// Per-region severity tiers and recommended actions
    Recommend,
    /// Write the store as CSV
    Export {
        /// Output file; stdout when omitted
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Replace the store with generated sample data
    Sample {
        /// Which sample shape to generate
        kind: SampleKind,
    },
    /// Remove all observations
    Clear,
}

/// Shape of the generated sample data.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum SampleKind {
    /// One June tally per region per year
    Yearly,
    /// A full monthly grid with uniform counts
    Monthly,
    /// A monthly grid with per-region levels and a seasonal swing
    Patterned,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();
    let cli = Cli::parse();

    let mut store = snapshot::load(&cli.data)?;

    match cli.command {
        Commands::Add {
            region,
            year,
            month,
            count,
        } => {
            store.add(Observation {
                region,
                year,
                month,
                count,
            })?;
            snapshot::save(&store, &cli.data)?;
            println!(
                "Recorded {} {year}-{month:02}: {count} cases",
                region.display_name()
            );
        }
        Commands::Remove {
            region,
            year,
            month,
            at,
        } => {
            let removed = remove(&mut store, region, year, month, at)?;
            snapshot::save(&store, &cli.data)?;
            println!(
                "Removed {} {}-{:02} ({} cases)",
                removed.region.display_name(),
                removed.year,
                removed.month,
                removed.count
            );
        }
        Commands::List { from, to } => list(&store, from, to)?,
        Commands::Stats => stats(&store),
        Commands::Timeline => timeline(&store),
        Commands::Aggregate { region } => aggregate(&store, region),
        Commands::Rank => rank(&store),
        Commands::Forecast { horizon } => forecast(&store, horizon)?,
        Commands::Recommend => recommend(&store),
        Commands::Export { output } => {
            match output {
                Some(path) => {
                    let file = std::fs::File::create(&path)?;
                    export::write_csv(&store, file)?;
                    println!("Exported {} observations to {}", store.len(), path.display());
                }
                None => export::write_csv(&store, std::io::stdout())?,
            };
        }
        Commands::Sample { kind } => {
            let years = polda_trends_generate::DEFAULT_YEARS;
            let observations = match kind {
                SampleKind::Yearly => polda_trends_generate::yearly(years),
                SampleKind::Monthly => polda_trends_generate::monthly(years),
                SampleKind::Patterned => polda_trends_generate::patterned(years),
            };
            store.replace_all(observations)?;
            snapshot::save(&store, &cli.data)?;
            log::info!("replaced store with {kind:?} sample data");
            println!("Loaded {} sample observations", store.len());
        }
        Commands::Clear => {
            store.clear();
            snapshot::save(&store, &cli.data)?;
            println!("Store cleared");
        }
    }

    Ok(())
}

fn remove(
    store: &mut ObservationStore,
    region: Option<Region>,
    year: Option<i32>,
    month: Option<u32>,
    at: Option<usize>,
) -> Result<Observation, Box<dyn std::error::Error>> {
    if let Some(index) = at {
        return store
            .remove_at(index)
            .ok_or_else(|| format!("no observation at position {index}").into());
    }

    match (region, year, month) {
        (Some(region), Some(year), Some(month)) => store
            .remove(region, year, month)
            .ok_or_else(|| format!("no observation for {region} {year}-{month:02}").into()),
        _ => Err("pass REGION YEAR MONTH, or --at INDEX".into()),
    }
}

fn list(
    store: &ObservationStore,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut view = if from.is_none() && to.is_none() {
        store.clone()
    } else {
        let filtered = store.between(
            from.unwrap_or(NaiveDate::MIN),
            to.unwrap_or(NaiveDate::MAX),
        );
        ObservationStore::from_observations(filtered)?
    };
    view.sort_chronologically();

    for observation in view.observations() {
        println!(
            "{:<24} {:>4} {:<9} {:>6}",
            observation.region.display_name(),
            observation.year,
            month_name(observation.month).unwrap_or("?"),
            observation.count
        );
    }
    println!(
        "{} observations across {} regions",
        view.len(),
        view.distinct_regions().len()
    );
    Ok(())
}

fn stats(store: &ObservationStore) {
    let stats = analytics::overview(store.observations());
    println!("Observations:    {}", stats.total_observations);
    println!("Regions:         {}", stats.distinct_regions);
    println!("Monthly average: {}", stats.overall_average);
    println!("Trend:           {}", stats.trend.label());
}

fn timeline(store: &ObservationStore) {
    for entry in analytics::monthly_totals(store.observations()) {
        println!(
            "{:>4} {:<9} {:>6}",
            entry.year,
            month_name(entry.month).unwrap_or("?"),
            entry.total
        );
    }
}

fn aggregate(store: &ObservationStore, region: Option<Region>) {
    let aggregates = analytics::aggregate(store.observations(), region);
    for aggregate in aggregates.values() {
        let level = CrimeLevel::from_average(aggregate.average);
        println!(
            "{:<24} total {:>6}  samples {:>4}  average {:>5}  {}",
            aggregate.region.display_name(),
            aggregate.total,
            aggregate.sample_count,
            aggregate.average,
            level.label()
        );
    }
}

fn rank(store: &ObservationStore) {
    let aggregates = analytics::aggregate(store.observations(), None);
    for (position, entry) in analytics::rank(&aggregates).iter().enumerate() {
        println!(
            "{:>2}. {:<24} {:>5} kasus/bulan  [{:?}]",
            position + 1,
            entry.region.display_name(),
            entry.average,
            entry.tier
        );
    }
}

fn forecast(store: &ObservationStore, horizon: usize) -> Result<(), Box<dyn std::error::Error>> {
    let result = analytics::forecast(store.observations(), horizon)?;

    println!(
        "Fitted line: slope {:.2} per 30 days, intercept {:.2}",
        result.slope, result.intercept
    );
    println!();

    let last = store
        .observations()
        .iter()
        .map(|o| (o.year, o.month))
        .max()
        .unwrap_or((0, 1));
    for (i, projection) in result.projected_series.iter().enumerate() {
        let (year, month) = add_months(last.0, last.1, i + 1);
        println!(
            "{:<9} {:>4}  {:>6}",
            month_name(month).unwrap_or("?"),
            year,
            projection
        );
    }

    println!();
    println!("Scenario: low {}  mid {}  high {}",
        result.scenario.low, result.scenario.mid, result.scenario.high);

    println!();
    println!("Regional outlook (fixed 10% uplift):");
    let aggregates = analytics::aggregate(store.observations(), None);
    for projection in analytics::regional_projections(&aggregates) {
        println!(
            "{:<24} {:>5} -> {:>5}",
            projection.region.display_name(),
            projection.current_average,
            projection.projected_average
        );
    }

    Ok(())
}

fn recommend(store: &ObservationStore) {
    let aggregates = analytics::aggregate(store.observations(), None);
    for recommendation in analytics::recommendations(&aggregates) {
        println!(
            "{} - {} ({} kasus/bulan)",
            recommendation.region.display_name(),
            recommendation.tier.label(),
            recommendation.average
        );
        for action in recommendation.tier.actions() {
            println!("  - {action}");
        }
    }
}

/// Advances (year, month) by `offset` calendar months.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss
)]
fn add_months(year: i32, month: u32, offset: usize) -> (i32, u32) {
    let zero_based = i64::from(year) * 12 + i64::from(month) - 1 + offset as i64;
    (
        zero_based.div_euclid(12) as i32,
        (zero_based.rem_euclid(12) + 1) as u32,
    )
}
