//! Runner error types.

/// Errors that can occur while running the harvester.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// Topic file loading errors.
    #[error(transparent)]
    Topics(#[from] crate::topics::TopicError),

    /// Per-topic harvesting errors.
    #[error(transparent)]
    Harvest(#[from] crate::harvest::HarvestError),

    /// GitHub API client initialization errors.
    #[error(transparent)]
    Octocrab(#[from] octocrab::Error),
}
