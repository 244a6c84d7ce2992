//! Repository records and the merge/deduplication pass.

mod dedup;
mod error;
mod record;

pub use dedup::{backfill_timestamps, merge_latest};
pub use error::RecordError;
pub use record::RepoRecord;
