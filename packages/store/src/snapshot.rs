//! Flat JSON snapshot persistence for the observation store.
//!
//! The snapshot is a plain list of observation records with no schema
//! versioning. A missing snapshot file loads as an empty store, so a
//! fresh installation needs no setup step.

use std::path::Path;

use polda_trends_models::Observation;

use crate::{ObservationStore, StoreError};

/// Errors produced while loading or saving a snapshot.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    /// I/O error reading or writing the snapshot file.
    #[error("I/O error at {path}: {source}")]
    Io {
        /// Path that caused the error.
        path: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The snapshot file is not a valid observation list.
    #[error("malformed snapshot at {path}: {source}")]
    Json {
        /// Path that caused the error.
        path: String,
        /// Underlying deserialization error.
        source: serde_json::Error,
    },

    /// The snapshot decoded but violates store invariants.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Serializes the store to its snapshot representation.
///
/// # Errors
///
/// Returns `serde_json::Error` if serialization fails.
pub fn to_json(store: &ObservationStore) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(store.observations())
}

/// Rebuilds a store from its snapshot representation, re-applying all
/// store invariants.
///
/// # Errors
///
/// Returns `serde_json::Error` when the JSON is malformed, or
/// [`StoreError`] (wrapped) when the decoded list violates a store
/// invariant.
pub fn from_json(json: &str) -> Result<ObservationStore, FromJsonError> {
    let observations: Vec<Observation> = serde_json::from_str(json)?;
    Ok(ObservationStore::from_observations(observations)?)
}

/// Errors produced by [`from_json`].
#[derive(Debug, thiserror::Error)]
pub enum FromJsonError {
    /// The input is not a valid observation list.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    /// The decoded list violates a store invariant.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Loads a store from the snapshot file at `path`.
///
/// A missing file yields an empty store.
///
/// # Errors
///
/// Returns [`SnapshotError`] when the file exists but cannot be read or
/// decoded.
pub fn load(path: &Path) -> Result<ObservationStore, SnapshotError> {
    if !path.exists() {
        log::debug!("no snapshot at {}, starting empty", path.display());
        return Ok(ObservationStore::new());
    }

    let json = std::fs::read_to_string(path).map_err(|source| SnapshotError::Io {
        path: path.display().to_string(),
        source,
    })?;

    let store = from_json(&json).map_err(|e| match e {
        FromJsonError::Json(source) => SnapshotError::Json {
            path: path.display().to_string(),
            source,
        },
        FromJsonError::Store(source) => SnapshotError::Store(source),
    })?;

    log::debug!(
        "loaded {} observations from {}",
        store.len(),
        path.display()
    );
    Ok(store)
}

/// Saves the store to the snapshot file at `path`, creating parent
/// directories as needed.
///
/// # Errors
///
/// Returns [`SnapshotError`] when the file or its parent directory
/// cannot be written.
pub fn save(store: &ObservationStore, path: &Path) -> Result<(), SnapshotError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|source| SnapshotError::Io {
            path: parent.display().to_string(),
            source,
        })?;
    }

    let json = to_json(store).map_err(|source| SnapshotError::Json {
        path: path.display().to_string(),
        source,
    })?;
    std::fs::write(path, json).map_err(|source| SnapshotError::Io {
        path: path.display().to_string(),
        source,
    })?;

    log::debug!("saved {} observations to {}", store.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use polda_trends_models::Region;

    use super::*;

    fn sample_store() -> ObservationStore {
        ObservationStore::from_observations([
            Observation {
                region: Region::MetroJaya,
                year: 2023,
                month: 1,
                count: 210,
            },
            Observation {
                region: Region::Bali,
                year: 2023,
                month: 1,
                count: 64,
            },
        ])
        .unwrap()
    }

    #[test]
    fn json_round_trip_preserves_contents() {
        let store = sample_store();
        let json = to_json(&store).unwrap();
        let restored = from_json(&json).unwrap();
        assert_eq!(restored, store);
    }

    #[test]
    fn snapshot_uses_wire_region_ids() {
        let json = to_json(&sample_store()).unwrap();
        assert!(json.contains("polda-metro-jaya"));
        assert!(json.contains("polda-bali"));
    }

    #[test]
    fn malformed_json_is_rejected() {
        assert!(matches!(from_json("not json"), Err(FromJsonError::Json(_))));
    }

    #[test]
    fn snapshot_with_duplicate_triples_is_rejected() {
        let json = r#"[
            {"region": "polda-bali", "year": 2023, "month": 1, "count": 5},
            {"region": "polda-bali", "year": 2023, "month": 1, "count": 6}
        ]"#;
        assert!(matches!(
            from_json(json),
            Err(FromJsonError::Store(StoreError::DuplicateObservation { .. }))
        ));
    }

    #[test]
    fn missing_file_loads_empty() {
        let path = Path::new("/nonexistent/polda-trends-snapshot.json");
        let store = load(path).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn file_round_trip() {
        let mut path = std::env::temp_dir();
        path.push(format!("polda-trends-test-{}.json", std::process::id()));

        let store = sample_store();
        save(&store, &path).unwrap();
        let restored = load(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(restored, store);
    }
}
