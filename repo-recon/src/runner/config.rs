//! Runner configuration.

use std::path::{Path, PathBuf};

/// Configuration for a harvesting run.
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// Path to the topics file.
    topics_path: PathBuf,
    /// GitHub token used for API calls, if any.
    token: Option<String>,
    /// Directory the record files are written to.
    output_dir: PathBuf,
}

impl RunnerConfig {
    /// Creates a new configuration for a run.
    ///
    /// Without a token the client falls back to unauthenticated requests,
    /// which are served with much lower rate limits.
    pub fn new(topics_path: PathBuf, token: Option<String>) -> Self {
        Self {
            topics_path,
            token,
            output_dir: PathBuf::from("."),
        }
    }

    /// Sets a custom output directory for record files.
    pub fn with_output_dir(mut self, output_dir: PathBuf) -> Self {
        self.output_dir = output_dir;
        self
    }

    /// Returns the topics file path.
    pub fn topics_path(&self) -> &Path {
        &self.topics_path
    }

    /// Returns the configured GitHub token, if any.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Returns the record output directory.
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }
}
