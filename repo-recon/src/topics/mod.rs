//! Topic file loading.
//!
//! The topics file is an ordered JSON list of topics, each naming a title,
//! a search term, and the base name of its record file.

mod error;
mod topic;

pub use error::TopicError;
pub use topic::Topic;

use std::path::Path;
use tracing::info;

/// Loads the ordered topic list from a JSON topics file.
///
/// # Errors
///
/// Returns [`TopicError`] if the file cannot be read or parsed. Unlike a
/// topic's record file, a broken topics file aborts the run.
pub fn load_topics(path: &Path) -> Result<Vec<Topic>, TopicError> {
    let contents = std::fs::read_to_string(path).map_err(|e| TopicError::IoError {
        path: path.display().to_string(),
        source: e,
    })?;

    let topics: Vec<Topic> = serde_json::from_str(&contents).map_err(|e| TopicError::ParseError {
        path: path.display().to_string(),
        source: e,
    })?;

    info!(count = topics.len(), path = %path.display(), "Loaded topics");
    Ok(topics)
}
