//! Calendar month windows.

use chrono::{Datelike, Utc};
use std::fmt;

/// A calendar year/month pair, the granularity of one search window.
///
/// Ordering is chronological: later months compare greater.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct YearMonth {
    /// Calendar year.
    pub year: i32,

    /// Calendar month, 1 through 12.
    pub month: u32,
}

impl YearMonth {
    /// Current year and month in UTC.
    #[must_use]
    pub fn now_utc() -> Self {
        let now = Utc::now();
        Self {
            year: now.year(),
            month: now.month(),
        }
    }

    /// Parses the `YYYY-MM` prefix of a timestamp string.
    #[must_use]
    pub fn parse_prefix(timestamp: &str) -> Option<Self> {
        let (year, month) = timestamp.get(0..7)?.split_once('-')?;
        let year = year.parse().ok()?;
        let month = month.parse().ok()?;
        (1..=12).contains(&month).then_some(Self { year, month })
    }

    /// First instant of the month as a naive ISO-8601 timestamp.
    ///
    /// This is the substitute timestamp for search results that come back
    /// without date fields.
    #[must_use]
    pub fn first_instant(&self) -> String {
        format!("{:04}-{:02}-01T00:00:00", self.year, self.month)
    }

    /// The month immediately after this one.
    #[must_use]
    pub fn next(self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orders_chronologically() {
        let earlier = YearMonth {
            year: 2021,
            month: 12,
        };
        let later = YearMonth {
            year: 2022,
            month: 1,
        };

        assert!(earlier < later);
    }

    #[test]
    fn parses_timestamp_prefix() {
        assert_eq!(
            YearMonth::parse_prefix("2021-03-15T10:00:00"),
            Some(YearMonth {
                year: 2021,
                month: 3
            })
        );
        assert_eq!(
            YearMonth::parse_prefix("2021-03"),
            Some(YearMonth {
                year: 2021,
                month: 3
            })
        );
    }

    #[test]
    fn rejects_short_or_garbage_prefixes() {
        assert_eq!(YearMonth::parse_prefix(""), None);
        assert_eq!(YearMonth::parse_prefix("2021"), None);
        assert_eq!(YearMonth::parse_prefix("not-a-date"), None);
        assert_eq!(YearMonth::parse_prefix("2021-13-01"), None);
    }

    #[test]
    fn renders_zero_padded() {
        let window = YearMonth {
            year: 2023,
            month: 5,
        };
        assert_eq!(window.to_string(), "2023-05");
        assert_eq!(window.first_instant(), "2023-05-01T00:00:00");
    }

    #[test]
    fn next_rolls_over_december() {
        let december = YearMonth {
            year: 2022,
            month: 12,
        };
        assert_eq!(
            december.next(),
            YearMonth {
                year: 2023,
                month: 1
            }
        );
    }
}
