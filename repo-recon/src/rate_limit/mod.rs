//! Search-quota handling for the GitHub API.
//!
//! A sweep can issue hundreds of search queries back to back, and the
//! search resource has a small per-minute quota. These helpers inspect
//! the remaining quota before each query and sleep until the reset when
//! it runs low. Quota API failures are not retried; they propagate to
//! the caller.

mod info;

pub use info::RateLimitInfo;

use octocrab::Octocrab;
use std::time::Duration;
use tracing::{info, warn};

/// Longest the harvester will sleep waiting for a quota reset.
const MAX_WAIT_SECS: u64 = 3600;

/// Remaining-request floor below which the harvester waits for the reset.
const MIN_REMAINING_THRESHOLD: u32 = 5;

/// Fetches the current search-resource quota.
///
/// # Errors
///
/// Returns an error if the rate limit API call fails.
pub async fn search_quota(octocrab: &Octocrab) -> Result<RateLimitInfo, octocrab::Error> {
    let rate_limit = octocrab.ratelimit().get().await?;
    let search = &rate_limit.resources.search;

    Ok(RateLimitInfo {
        remaining: search.remaining as u32,
        reset: search.reset,
        limit: search.limit as u32,
    })
}

/// Sleeps until the quota reset when few requests remain.
///
/// Returns `true` if a wait happened. A reset instant already in the past
/// means the window has rolled over and no wait is needed.
pub async fn wait_if_low(info: &RateLimitInfo) -> bool {
    if info.remaining >= MIN_REMAINING_THRESHOLD {
        return false;
    }

    let now = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    if info.reset <= now {
        return false;
    }

    let wait_secs = info.reset - now;
    if wait_secs > MAX_WAIT_SECS {
        warn!(
            wait_secs,
            max_wait = MAX_WAIT_SECS,
            "Quota reset too far in the future, capping wait time"
        );
    }

    let actual_wait = wait_secs.min(MAX_WAIT_SECS);
    info!(
        remaining = info.remaining,
        wait_secs = actual_wait,
        "Search quota low, waiting for reset"
    );

    tokio::time::sleep(Duration::from_secs(actual_wait)).await;
    true
}

/// Checks the search quota and waits out the reset if it is low.
///
/// Called before every search request a sweep issues.
///
/// # Errors
///
/// Returns an error if the quota check fails.
pub async fn ensure_search_quota(octocrab: &Octocrab) -> Result<(), octocrab::Error> {
    let info = search_quota(octocrab).await?;
    wait_if_low(&info).await;
    Ok(())
}
