//! Run summary types.

use super::report::TopicReport;

/// Summary of a complete run.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    /// Number of topics processed.
    pub topics_processed: usize,

    /// Total search queries issued.
    pub queries_issued: usize,

    /// Total records fetched across all topics, before deduplication.
    pub records_fetched: usize,

    /// Total records written across all topics.
    pub records_written: usize,
}

impl RunSummary {
    /// Creates a new empty summary.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the summary with a topic report.
    pub fn record_report(&mut self, report: &TopicReport) {
        self.topics_processed += 1;
        self.queries_issued += report.queries_issued;
        self.records_fetched += report.fetched_records;
        self.records_written += report.written_records;
    }
}
