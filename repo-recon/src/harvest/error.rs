//! Harvest error types.

use thiserror::Error;

/// Errors that can occur while harvesting a topic.
#[derive(Debug, Error)]
pub enum HarvestError {
    /// Record file access errors.
    #[error(transparent)]
    Store(#[from] crate::store::StoreError),

    /// Repository search errors.
    #[error(transparent)]
    Search(#[from] crate::search::SearchError),

    /// Unusable timestamps on stored records.
    #[error(transparent)]
    Record(#[from] crate::records::RecordError),
}
