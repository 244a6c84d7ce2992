//! Record store error types.

use thiserror::Error;

/// Errors that can occur while accessing a topic's record file.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Failed to read or write the record file.
    #[error("Failed to access record file '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to serialize the record set.
    #[error("Failed to serialize records for '{path}': {source}")]
    SerializeError {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}
