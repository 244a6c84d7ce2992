//! Topic loading error types.

use thiserror::Error;

/// Errors that can occur while loading the topics file.
#[derive(Debug, Error)]
pub enum TopicError {
    /// Failed to read the topics file.
    #[error("Failed to read topics file '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse the topics file.
    #[error("Failed to parse topics file '{path}': {source}")]
    ParseError {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}
