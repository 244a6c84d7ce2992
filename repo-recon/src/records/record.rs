//! Harvested repository records.

use serde::{Deserialize, Deserializer, Serialize};

/// One repository as stored in a topic's record file.
///
/// Serializes to the same eleven keys the record files have always used;
/// the repository name lands under the `repo` key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepoRecord {
    /// Repository name.
    #[serde(rename = "repo")]
    pub name: String,

    /// Repository description, if any.
    pub description: Option<String>,

    /// Owner login (user or organization).
    pub owner: String,

    /// Stargazer count.
    pub stars: u32,

    /// Fork count.
    pub forks: u32,

    /// Repository size in kilobytes.
    pub size: u32,

    /// Creation timestamp, ISO-8601 without offset.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub created: String,

    /// Last-update timestamp, ISO-8601 without offset.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub updated: String,

    /// Last-push timestamp, the recency signal for resumption and
    /// deduplication. May be empty in old record files until backfilled.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub pushed: String,

    /// GitHub URL of the repository.
    pub url: String,

    /// Numeric repository id, stable across searches.
    pub id: u64,
}

/// Old record files may carry `null` where a timestamp is unknown.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
