//! Sweep planning: resume point and month windows.
//!
//! A sweep walks every month from the resume point to the current month,
//! issuing one search per month and date axis. Monthly windows keep each
//! query under the search API's result ceiling.

mod date_type;
mod window;

pub use date_type::DateType;
pub use window::YearMonth;

use crate::records::{RecordError, RepoRecord};

/// Earliest window worth searching; GitHub has no repositories before it.
pub const EARLIEST: YearMonth = YearMonth {
    year: 2008,
    month: 1,
};

/// A planned sweep: where to start and which date axes to query.
#[derive(Debug, Clone)]
pub struct SweepPlan {
    /// First window of the sweep.
    start: YearMonth,
    /// Date axes queried for every window.
    date_types: Vec<DateType>,
}

impl SweepPlan {
    /// Returns the window the sweep starts from.
    #[must_use]
    pub fn start(&self) -> YearMonth {
        self.start
    }

    /// Returns the date axes queried per window.
    #[must_use]
    pub fn date_types(&self) -> &[DateType] {
        &self.date_types
    }

    /// Returns every window from the start through `end`, inclusive.
    ///
    /// Empty when the start lies after `end`, so a record pushed in the
    /// future produces a sweep with no queries at all.
    #[must_use]
    pub fn windows(&self, end: YearMonth) -> Vec<YearMonth> {
        let mut windows = Vec::new();
        let mut current = self.start;
        while current <= end {
            windows.push(current);
            current = current.next();
        }
        windows
    }
}

/// Plans a sweep from the prior record set.
///
/// With no prior records the sweep covers everything since [`EARLIEST`]
/// and only queries by creation date; there is nothing old to catch up
/// on. With prior records the sweep resumes at the most recent pushed
/// month and queries both axes: pushed to catch old repositories newly
/// active, created to catch new repositories that a busy month's result
/// ceiling could hide from the pushed pass.
///
/// Expects `pushed` timestamps to already be backfilled.
///
/// # Errors
///
/// Returns [`RecordError::InvalidTimestamp`] when a prior record's pushed
/// timestamp does not start with a parseable `YYYY-MM`.
pub fn plan_sweep(prior: &[RepoRecord]) -> Result<SweepPlan, RecordError> {
    if prior.is_empty() {
        return Ok(SweepPlan {
            start: EARLIEST,
            date_types: vec![DateType::Created],
        });
    }

    let mut start = EARLIEST;
    for record in prior {
        let window =
            YearMonth::parse_prefix(&record.pushed).ok_or_else(|| RecordError::InvalidTimestamp {
                id: record.id,
                value: record.pushed.clone(),
            })?;
        start = start.max(window);
    }

    Ok(SweepPlan {
        start,
        date_types: vec![DateType::Pushed, DateType::Created],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: u64, pushed: &str) -> RepoRecord {
        RepoRecord {
            name: format!("repo-{id}"),
            description: None,
            owner: "octocat".to_string(),
            stars: 0,
            forks: 0,
            size: 0,
            created: pushed.to_string(),
            updated: pushed.to_string(),
            pushed: pushed.to_string(),
            url: String::new(),
            id,
        }
    }

    #[test]
    fn empty_prior_starts_at_earliest_with_created_only() {
        let plan = plan_sweep(&[]).unwrap();

        assert_eq!(plan.start(), EARLIEST);
        assert_eq!(plan.date_types(), &[DateType::Created]);
    }

    #[test]
    fn resumes_at_most_recent_pushed_month() {
        let prior = vec![
            record(1, "2021-03-15T10:00:00"),
            record(2, "2022-07-01T00:00:00"),
        ];

        let plan = plan_sweep(&prior).unwrap();

        assert_eq!(
            plan.start(),
            YearMonth {
                year: 2022,
                month: 7
            }
        );
        assert_eq!(plan.date_types(), &[DateType::Pushed, DateType::Created]);
    }

    #[test]
    fn rejects_unparseable_prior_timestamp() {
        let prior = vec![record(9, "never")];

        let result = plan_sweep(&prior);

        assert!(matches!(
            result,
            Err(RecordError::InvalidTimestamp { id: 9, .. })
        ));
    }

    #[test]
    fn windows_span_year_boundaries_inclusive() {
        let plan = SweepPlan {
            start: YearMonth {
                year: 2022,
                month: 11,
            },
            date_types: vec![DateType::Created],
        };

        let windows = plan.windows(YearMonth {
            year: 2023,
            month: 2,
        });

        let rendered: Vec<String> = windows.iter().map(ToString::to_string).collect();
        assert_eq!(rendered, vec!["2022-11", "2022-12", "2023-01", "2023-02"]);
    }

    #[test]
    fn windows_are_empty_when_start_is_in_the_future() {
        let plan = SweepPlan {
            start: YearMonth {
                year: 2030,
                month: 1,
            },
            date_types: vec![DateType::Created],
        };

        assert!(plan
            .windows(YearMonth {
                year: 2023,
                month: 6
            })
            .is_empty());
    }
}
