//! Incremental harvesting of one topic.
//!
//! A harvest loads the previously collected records, resumes the search
//! sweep from the most recent record's month, issues one query per
//! (month, date axis) pair, and persists the merged, deduplicated set
//! back to the same file. Nothing already collected is ever lost.

mod error;

pub use error::HarvestError;

use crate::records::{backfill_timestamps, merge_latest};
use crate::search::search_repositories;
use crate::store::{load_records, save_records};
use crate::summary::TopicReport;
use crate::sweep::{plan_sweep, YearMonth};
use crate::topics::Topic;
use octocrab::Octocrab;
use std::path::Path;
use tracing::{info, info_span, Instrument};

/// Harvests one topic: search, merge, deduplicate, persist.
///
/// The record file is `<output_dir>/<json_file>.json`. At most one record
/// per repository id survives the merge, the one with the latest pushed
/// date.
///
/// # Arguments
///
/// * `octocrab` - GitHub client, shared across the whole run
/// * `topic` - Topic to harvest
/// * `output_dir` - Directory holding the per-topic record files
///
/// # Errors
///
/// Returns [`HarvestError`] if a search query, a timestamp parse, or the
/// final write fails. A missing or malformed prior file is not an error;
/// the sweep simply starts over from the earliest window.
pub async fn harvest_topic(
    octocrab: &Octocrab,
    topic: &Topic,
    output_dir: &Path,
) -> Result<TopicReport, HarvestError> {
    let span = info_span!("harvest", topic = %topic.title);

    async {
        let output_path = output_dir.join(format!("{}.json", topic.json_file));

        let mut prior = load_records(&output_path)?;
        backfill_timestamps(&mut prior);

        let plan = plan_sweep(&prior)?;
        let windows = plan.windows(YearMonth::now_utc());
        info!(
            prior = prior.len(),
            resume = %plan.start(),
            windows = windows.len(),
            "Starting sweep"
        );

        let mut fetched = Vec::new();
        let mut queries_issued = 0;
        for window in &windows {
            info!(window = %window, "Gathering repositories");
            for date_type in plan.date_types() {
                let results =
                    search_repositories(octocrab, &topic.search_terms, *date_type, *window)
                        .await?;
                queries_issued += 1;
                fetched.extend(results);
            }
        }

        let prior_records = prior.len();
        let fetched_records = fetched.len();
        let merged = merge_latest(prior, fetched)?;
        save_records(&output_path, &merged)?;

        info!(written = merged.len(), "Harvest complete");

        Ok(TopicReport {
            title: topic.title.clone(),
            output_file: output_path.display().to_string(),
            resumed_from: plan.start(),
            date_types: plan.date_types().to_vec(),
            queries_issued,
            prior_records,
            fetched_records,
            written_records: merged.len(),
        })
    }
    .instrument(span)
    .await
}
