//! CSV export of the observation store.
//!
//! The column layout and Indonesian header are a fixed external contract:
//! `POLDA,Tahun,Bulan,Jumlah Kejahatan`, one row per observation, emitted
//! in store order.

use std::io::Write;

use polda_trends_models::month_name;

use crate::ObservationStore;

/// CSV header row.
pub const CSV_HEADER: [&str; 4] = ["POLDA", "Tahun", "Bulan", "Jumlah Kejahatan"];

/// Errors produced while exporting.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// CSV serialization or underlying I/O failed.
    #[error("CSV write failed: {0}")]
    Csv(#[from] csv::Error),

    /// An observation carries a month outside 1-12.
    ///
    /// Unreachable for store-validated data; kept so the export never
    /// emits an unnamed month.
    #[error("observation month {month} has no name")]
    InvalidMonth {
        /// The out-of-range month value.
        month: u32,
    },
}

/// Writes the store as CSV to `out`.
///
/// Rows are emitted in store order; call
/// [`ObservationStore::sort_chronologically`] first for a dated report.
///
/// # Errors
///
/// Returns [`ExportError`] when a row cannot be written.
pub fn write_csv<W: Write>(store: &ObservationStore, out: W) -> Result<(), ExportError> {
    let mut writer = csv::Writer::from_writer(out);

    writer.write_record(CSV_HEADER)?;

    for observation in store.observations() {
        let month = month_name(observation.month).ok_or(ExportError::InvalidMonth {
            month: observation.month,
        })?;
        writer.write_record([
            observation.region.display_name().to_string(),
            observation.year.to_string(),
            month.to_string(),
            observation.count.to_string(),
        ])?;
    }

    writer.flush().map_err(csv::Error::from)?;
    Ok(())
}
