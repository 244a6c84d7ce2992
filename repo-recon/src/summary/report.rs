//! Per-topic harvest reports.

use crate::sweep::{DateType, YearMonth};

/// Outcome of harvesting a single topic.
#[derive(Debug, Clone)]
pub struct TopicReport {
    /// Topic title.
    pub title: String,

    /// Path of the record file that was written.
    pub output_file: String,

    /// Window the sweep resumed from.
    pub resumed_from: YearMonth,

    /// Date axes that were searched.
    pub date_types: Vec<DateType>,

    /// Number of search queries issued.
    pub queries_issued: usize,

    /// Records loaded from the prior file.
    pub prior_records: usize,

    /// Records fetched by this sweep, before deduplication.
    pub fetched_records: usize,

    /// Records written after merge and deduplication.
    pub written_records: usize,
}
