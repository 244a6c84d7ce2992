//! Topic definitions.

use serde::Deserialize;

/// A single harvesting topic from the topics file.
#[derive(Debug, Clone, Deserialize)]
pub struct Topic {
    /// Topic title, used for progress reporting.
    pub title: String,

    /// Free-text search term for selecting repositories.
    pub search_terms: String,

    /// Base name (no extension) of the JSON file the records are kept in.
    #[serde(rename = "JSON_file")]
    pub json_file: String,
}
