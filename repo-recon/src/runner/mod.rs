//! Orchestrates harvesting runs across all topics.

mod config;
mod error;

pub use config::RunnerConfig;
pub use error::RunnerError;

use crate::harvest::harvest_topic;
use crate::summary::RunSummary;
use crate::topics::load_topics;
use octocrab::Octocrab;
use tracing::{info, warn};

/// Orchestrates a full harvesting run.
pub struct Runner {
    config: RunnerConfig,
    octocrab: Octocrab,
}

impl Runner {
    /// Builds a runner from the provided configuration.
    ///
    /// The GitHub client is constructed once here and reused for every
    /// query in the run.
    pub fn new(config: RunnerConfig) -> Result<Self, RunnerError> {
        let octocrab = match config.token() {
            Some(token) => Octocrab::builder()
                .personal_token(token.to_string())
                .build()?,
            None => {
                warn!("No GitHub token configured, using unauthenticated rate limits");
                Octocrab::builder().build()?
            }
        };
        Ok(Self { config, octocrab })
    }

    /// Harvests every topic in file order.
    ///
    /// Topics are processed sequentially, one search at a time; the first
    /// failing topic aborts the run.
    pub async fn run(&self) -> Result<RunSummary, RunnerError> {
        let topics = load_topics(self.config.topics_path())?;

        if topics.is_empty() {
            warn!("No topics found");
            return Ok(RunSummary::new());
        }

        let mut summary = RunSummary::new();
        for topic in &topics {
            info!(topic = %topic.title, "Processing topic");
            let report = harvest_topic(&self.octocrab, topic, self.config.output_dir()).await?;
            summary.record_report(&report);
        }

        Ok(summary)
    }
}
