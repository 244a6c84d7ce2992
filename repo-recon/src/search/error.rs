//! Repository search error types.

use thiserror::Error;

/// Errors that can occur during repository search.
#[derive(Debug, Error)]
pub enum SearchError {
    /// GitHub API error.
    #[error("GitHub API error: {0}")]
    GitHubError(#[from] octocrab::Error),
}
