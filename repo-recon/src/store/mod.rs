//! Persistence for harvested record sets.
//!
//! Each topic owns one JSON file holding its full record set. The file is
//! read once when a harvest starts and overwritten once when it finishes.

mod error;

pub use error::StoreError;

use crate::records::RepoRecord;
use std::fs::File;
use std::io::{BufWriter, ErrorKind};
use std::path::Path;
use tracing::{debug, warn};

/// Loads previously harvested records from a JSON file.
///
/// A missing file and a file that fails to parse both yield an empty set;
/// the harvest then starts over from the earliest window instead of
/// aborting.
///
/// # Errors
///
/// Returns [`StoreError`] only for read failures other than the file not
/// existing.
pub fn load_records(path: &Path) -> Result<Vec<RepoRecord>, StoreError> {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!(path = %path.display(), "No prior record file");
            return Ok(Vec::new());
        }
        Err(e) => {
            return Err(StoreError::IoError {
                path: path.display().to_string(),
                source: e,
            })
        }
    };

    match serde_json::from_str(&contents) {
        Ok(records) => Ok(records),
        Err(e) => {
            warn!(
                path = %path.display(),
                error = %e,
                "Prior record file is not valid JSON, starting from an empty set"
            );
            Ok(Vec::new())
        }
    }
}

/// Writes the record set as indented JSON, overwriting the file in place.
///
/// # Errors
///
/// Returns [`StoreError`] if the file cannot be created or written.
pub fn save_records(path: &Path, records: &[RepoRecord]) -> Result<(), StoreError> {
    let file = File::create(path).map_err(|e| StoreError::IoError {
        path: path.display().to_string(),
        source: e,
    })?;

    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, records).map_err(|e| StoreError::SerializeError {
        path: path.display().to_string(),
        source: e,
    })?;

    debug!(path = %path.display(), count = records.len(), "Wrote record file");
    Ok(())
}
