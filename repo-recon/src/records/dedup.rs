//! Merge and deduplication of record sets.

use super::error::RecordError;
use super::record::RepoRecord;
use chrono::NaiveDate;
use std::collections::HashMap;

/// Fills empty `pushed` timestamps from `created`, then `updated`.
///
/// The sweep resume point and the merge both key on `pushed`, so it is
/// backfilled before either runs.
pub fn backfill_timestamps(records: &mut [RepoRecord]) {
    for record in records {
        if record.pushed.is_empty() {
            record.pushed = if record.created.is_empty() {
                record.updated.clone()
            } else {
                record.created.clone()
            };
        }
    }
}

/// Merges prior and freshly fetched records, keeping one record per id.
///
/// For every id the survivor is the first occurrence carrying the maximal
/// pushed date (date portion only; time of day is ignored). Prior records
/// precede fetched ones, so on a date tie the stored record wins over a
/// re-fetched copy of itself.
///
/// # Errors
///
/// Returns [`RecordError::InvalidTimestamp`] when any record's pushed
/// timestamp does not start with a `YYYY-MM-DD` date.
pub fn merge_latest(
    prior: Vec<RepoRecord>,
    fetched: Vec<RepoRecord>,
) -> Result<Vec<RepoRecord>, RecordError> {
    let mut all = prior;
    all.extend(fetched);

    // Latest pushed date seen for each id.
    let mut latest_dates: HashMap<u64, NaiveDate> = HashMap::new();
    for record in &all {
        let date = pushed_date(record)?;
        latest_dates
            .entry(record.id)
            .and_modify(|latest| {
                if date > *latest {
                    *latest = date;
                }
            })
            .or_insert(date);
    }

    // Keep the first occurrence matching its id's latest date. Removing
    // the id right away drops later ties, which the pushed and created
    // passes over the same month would otherwise produce.
    let mut merged = Vec::new();
    for record in all {
        let date = pushed_date(&record)?;
        if latest_dates.get(&record.id) == Some(&date) {
            latest_dates.remove(&record.id);
            merged.push(record);
        }
    }

    Ok(merged)
}

/// Parses the date portion of a record's pushed timestamp.
fn pushed_date(record: &RepoRecord) -> Result<NaiveDate, RecordError> {
    let date_part = record.pushed.split('T').next().unwrap_or("");
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").map_err(|_| RecordError::InvalidTimestamp {
        id: record.id,
        value: record.pushed.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: u64, name: &str, pushed: &str) -> RepoRecord {
        RepoRecord {
            name: name.to_string(),
            description: None,
            owner: "octocat".to_string(),
            stars: 0,
            forks: 0,
            size: 0,
            created: pushed.to_string(),
            updated: pushed.to_string(),
            pushed: pushed.to_string(),
            url: format!("https://github.com/octocat/{name}"),
            id,
        }
    }

    #[test]
    fn merge_keeps_latest_record_per_id() {
        let prior = vec![record(1, "old", "2021-03-15T10:00:00")];
        let fetched = vec![record(1, "old", "2023-06-01T08:00:00")];

        let merged = merge_latest(prior, fetched).unwrap();

        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].pushed, "2023-06-01T08:00:00");
    }

    #[test]
    fn merge_ignores_time_of_day_and_keeps_first_tie() {
        // Same id, same date, different times: the earlier occurrence wins.
        let prior = vec![record(1, "stored", "2023-06-01T23:59:59")];
        let fetched = vec![record(1, "refetched", "2023-06-01T00:00:01")];

        let merged = merge_latest(prior, fetched).unwrap();

        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].name, "stored");
    }

    #[test]
    fn merge_keeps_distinct_ids_in_input_order() {
        let prior = vec![record(1, "one", "2021-01-01T00:00:00")];
        let fetched = vec![
            record(2, "two", "2022-01-01T00:00:00"),
            record(3, "three", "2020-01-01T00:00:00"),
        ];

        let merged = merge_latest(prior, fetched).unwrap();

        let ids: Vec<u64> = merged.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn merge_without_new_records_is_identity() {
        let prior = vec![
            record(1, "one", "2021-01-01T00:00:00"),
            record(2, "two", "2022-01-01T00:00:00"),
        ];

        let merged = merge_latest(prior.clone(), Vec::new()).unwrap();

        assert_eq!(merged, prior);
    }

    #[test]
    fn merge_rejects_unparseable_pushed_timestamp() {
        let prior = vec![record(7, "bad", "not-a-date")];

        let result = merge_latest(prior, Vec::new());

        assert!(matches!(
            result,
            Err(RecordError::InvalidTimestamp { id: 7, .. })
        ));
    }

    #[test]
    fn backfill_prefers_created_over_updated() {
        let mut records = vec![record(1, "one", "")];
        records[0].created = "2020-05-01T00:00:00".to_string();
        records[0].updated = "2021-05-01T00:00:00".to_string();

        backfill_timestamps(&mut records);

        assert_eq!(records[0].pushed, "2020-05-01T00:00:00");
    }

    #[test]
    fn backfill_falls_back_to_updated() {
        let mut records = vec![record(1, "one", "")];
        records[0].created = String::new();
        records[0].updated = "2021-05-01T00:00:00".to_string();

        backfill_timestamps(&mut records);

        assert_eq!(records[0].pushed, "2021-05-01T00:00:00");
    }

    #[test]
    fn backfill_leaves_populated_timestamps_alone() {
        let mut records = vec![record(1, "one", "2022-02-02T00:00:00")];
        records[0].created = "2019-01-01T00:00:00".to_string();

        backfill_timestamps(&mut records);

        assert_eq!(records[0].pushed, "2022-02-02T00:00:00");
    }
}
