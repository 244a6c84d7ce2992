#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

pub mod harvest;
pub mod rate_limit;
pub mod records;
pub mod runner;
pub mod search;
pub mod store;
pub mod summary;
pub mod sweep;
pub mod topics;

pub use harvest::{harvest_topic, HarvestError};
pub use rate_limit::{ensure_search_quota, search_quota, wait_if_low, RateLimitInfo};
pub use records::{backfill_timestamps, merge_latest, RecordError, RepoRecord};
pub use runner::{Runner, RunnerConfig, RunnerError};
pub use search::{search_repositories, SearchError};
pub use store::{load_records, save_records, StoreError};
pub use summary::{RunSummary, TopicReport};
pub use sweep::{plan_sweep, DateType, SweepPlan, YearMonth, EARLIEST};
pub use topics::{load_topics, Topic, TopicError};
