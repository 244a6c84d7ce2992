//! Record handling error types.

use thiserror::Error;

/// Errors raised while interpreting stored records.
#[derive(Debug, Error)]
pub enum RecordError {
    /// A record carries a pushed timestamp that cannot be parsed.
    #[error("Record {id} has unusable pushed timestamp '{value}'")]
    InvalidTimestamp { id: u64, value: String },
}
