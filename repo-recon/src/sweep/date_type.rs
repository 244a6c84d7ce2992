//! Search date axes.

use std::fmt;

/// The date axis a search query filters on.
///
/// `updated` is deliberately not an option: the search API matches it
/// against repositories with little regard for the requested window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateType {
    /// Filter on the last push date. Catches old repositories newly active.
    Pushed,

    /// Filter on the creation date. Catches repositories too new to have
    /// surfaced in a pushed-date query truncated at the result ceiling.
    Created,
}

impl DateType {
    /// Returns the search qualifier name.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pushed => "pushed",
            Self::Created => "created",
        }
    }
}

impl fmt::Display for DateType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_type_as_str() {
        assert_eq!(DateType::Pushed.as_str(), "pushed");
        assert_eq!(DateType::Created.as_str(), "created");
    }
}
