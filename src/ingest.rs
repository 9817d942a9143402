//! Work-record ingestion from JSON
//!
//! Input is an array of objects with exactly six integer fields:
//!
//! ```json
//! [
//!   { "id": 333831567, "piece_id": 25395616, "status": 10800,
//!     "user_id": 911, "start_time": 1490989764, "end_time": 1491001113 },
//!   { "id": 331198176, "piece_id": 25221582, "status": 8951,
//!     "user_id": 393, "start_time": 1489499641, "end_time": null }
//! ]
//! ```
//!
//! Every field must be present; any of them may be `null`, which becomes the
//! `ABSENT` sentinel.

use crate::record::{WorkRecord, ABSENT};
use crate::store::RecordStore;
use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// Record as it appears on disk, before sentinel substitution
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawRecord {
    // `Option::deserialize` keeps the key mandatory while allowing null
    #[serde(deserialize_with = "Option::deserialize")]
    id: Option<i64>,
    #[serde(deserialize_with = "Option::deserialize")]
    piece_id: Option<i64>,
    #[serde(deserialize_with = "Option::deserialize")]
    status: Option<i64>,
    #[serde(deserialize_with = "Option::deserialize")]
    user_id: Option<i64>,
    #[serde(deserialize_with = "Option::deserialize")]
    start_time: Option<i64>,
    #[serde(deserialize_with = "Option::deserialize")]
    end_time: Option<i64>,
}

impl From<RawRecord> for WorkRecord {
    fn from(raw: RawRecord) -> Self {
        WorkRecord::new(
            raw.id.unwrap_or(ABSENT),
            raw.piece_id.unwrap_or(ABSENT),
            raw.status.unwrap_or(ABSENT),
            raw.user_id.unwrap_or(ABSENT),
            raw.start_time.unwrap_or(ABSENT),
            raw.end_time.unwrap_or(ABSENT),
        )
    }
}

/// Parse records from JSON text
///
/// # Example
/// ```
/// use pieceflow::ingest::parse_records;
///
/// let json = r#"[{"id": 1, "piece_id": null, "status": 8951,
///                 "user_id": 7, "start_time": 0, "end_time": null}]"#;
/// let records = parse_records(json).unwrap();
/// assert_eq!(records[0].piece_id(), -1);
/// ```
pub fn parse_records(contents: &str) -> Result<Vec<WorkRecord>> {
    let raw: Vec<RawRecord> =
        serde_json::from_str(contents).context("Invalid work record JSON")?;
    Ok(raw.into_iter().map(WorkRecord::from).collect())
}

/// Read and parse records from a JSON file
pub fn load_records_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<WorkRecord>> {
    let path_ref = path.as_ref();

    if !path_ref.exists() {
        bail!("Input file not found: {}", path_ref.display());
    }

    let contents = fs::read_to_string(path_ref)
        .with_context(|| format!("Failed to read input file {}", path_ref.display()))?;

    parse_records(&contents).with_context(|| format!("Failed to parse {}", path_ref.display()))
}

/// Collect records into a store, reporting how many duplicates collapsed
pub fn build_store(records: Vec<WorkRecord>) -> RecordStore {
    let read = records.len();
    let store: RecordStore = records.into_iter().collect();

    let duplicates = read - store.len();
    if duplicates > 0 {
        warn!(duplicates, "dropped identical work records");
    }
    info!(read, stored = store.len(), "record store populated");

    store
}

/// Load a JSON file straight into a record store
pub fn load_store_from_file<P: AsRef<Path>>(path: P) -> Result<RecordStore> {
    load_records_from_file(path).map(build_store)
}
