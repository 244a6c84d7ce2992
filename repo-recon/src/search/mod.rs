//! Repository search against the GitHub Search API.
//!
//! One call covers one (search term, date axis, month window) triple and
//! walks every result page, so callers never see pagination.

mod error;

pub use error::SearchError;

use crate::rate_limit::ensure_search_quota;
use crate::records::RepoRecord;
use crate::sweep::{DateType, YearMonth};
use chrono::{DateTime, Utc};
use octocrab::models::Repository;
use octocrab::Octocrab;
use tracing::{debug, warn};

/// Maximum results the GitHub Search API will return for one query.
///
/// Anything past this is silently truncated by the service, which is why
/// sweeps query one month at a time.
const MAX_SEARCH_RESULTS: usize = 1000;

/// Results per page for repository search.
const RESULTS_PER_PAGE: u8 = 100;

/// Builds a repository search query for one date window.
///
/// Format: `{term} in:name,description,topics,readme {date_type}:{YYYY-MM}`
fn build_search_query(term: &str, date_type: DateType, window: YearMonth) -> String {
    format!("{term} in:name,description,topics,readme {date_type}:{window}")
}

/// Searches repositories matching `term` within one month window.
///
/// Fetches every page of results with an explicit page loop, stopping at
/// the API's result ceiling. The search quota is checked before each page
/// request.
///
/// # Errors
///
/// Returns [`SearchError`] if any page request or quota check fails.
pub async fn search_repositories(
    octocrab: &Octocrab,
    term: &str,
    date_type: DateType,
    window: YearMonth,
) -> Result<Vec<RepoRecord>, SearchError> {
    let query = build_search_query(term, date_type, window);
    debug!(query = %query, "Executing repository search");

    ensure_search_quota(octocrab).await?;

    let mut page = octocrab
        .search()
        .repositories(&query)
        .per_page(RESULTS_PER_PAGE)
        .send()
        .await?;

    let mut records: Vec<RepoRecord> = page
        .items
        .iter()
        .map(|repo| extract_record(repo, window))
        .collect();

    while let Some(next_page) = octocrab.get_page::<Repository>(&page.next).await? {
        if records.len() >= MAX_SEARCH_RESULTS {
            warn!(
                max = MAX_SEARCH_RESULTS,
                query = %query,
                "Reached maximum search results limit"
            );
            break;
        }

        ensure_search_quota(octocrab).await?;

        records.extend(next_page.items.iter().map(|repo| extract_record(repo, window)));
        page.next = next_page.next;

        if page.next.is_none() {
            break;
        }
    }

    debug!(count = records.len(), "Search complete");
    Ok(records)
}

/// Extracts a flat record from an API repository object.
///
/// Some repositories come back without date fields; those records get all
/// three timestamps replaced by the first day of the searched month.
fn extract_record(repo: &Repository, window: YearMonth) -> RepoRecord {
    let owner = repo
        .owner
        .as_ref()
        .map(|owner| owner.login.clone())
        .unwrap_or_default();
    let url = repo
        .html_url
        .as_ref()
        .map(ToString::to_string)
        .unwrap_or_default();

    let (created, updated, pushed) = match (repo.created_at, repo.updated_at, repo.pushed_at) {
        (Some(created), Some(updated), Some(pushed)) => (
            format_timestamp(created),
            format_timestamp(updated),
            format_timestamp(pushed),
        ),
        _ => {
            let fallback = window.first_instant();
            (fallback.clone(), fallback.clone(), fallback)
        }
    };

    RepoRecord {
        name: repo.name.clone(),
        description: repo.description.clone(),
        owner,
        stars: repo.stargazers_count.unwrap_or(0),
        forks: repo.forks_count.unwrap_or(0),
        size: repo.size.unwrap_or(0),
        created,
        updated,
        pushed,
        url,
        id: repo.id.0,
    }
}

/// Renders an API timestamp as naive ISO-8601, matching the record files.
fn format_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp.format("%Y-%m-%dT%H:%M:%S").to_string()
}
