//! Raw provider payloads to canonical records.
//!
//! Every function here is total: missing upstream data maps to the documented
//! default instead of an error.

mod imdb;
mod tmdb;

pub use imdb::{imdb_detail, imdb_search};
pub use tmdb::{tmdb_detail, tmdb_search};

/// Expands a year-only date to January 1st of that year.
///
/// Anything that is not exactly four characters long passes through
/// untouched, even when it is not a valid calendar date.
pub fn expand_partial_date(raw: &str) -> String {
    if raw.chars().count() == 4 {
        format!("{raw}-01-01")
    } else {
        raw.to_string()
    }
}

/// Whole minutes from a second count; unknown runtimes are `0`.
pub fn runtime_minutes(seconds: Option<u64>) -> u32 {
    seconds
        .map(|seconds| u32::try_from(seconds / 60).unwrap_or(u32::MAX))
        .unwrap_or(0)
}

/// Leading year of an ISO date, if it has one.
pub(crate) fn year_prefix(date: &str) -> Option<String> {
    let year: String = date.trim().chars().take(4).collect();
    (year.chars().count() == 4).then_some(year)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn year_only_dates_become_first_of_january() {
        assert_eq!(expand_partial_date("1994"), "1994-01-01");
        assert_eq!(expand_partial_date("1994-03-21"), "1994-03-21");
    }

    #[test]
    fn malformed_dates_are_not_corrected() {
        assert_eq!(expand_partial_date("1994-13"), "1994-13");
        assert_eq!(expand_partial_date("abcd"), "abcd-01-01");
        assert_eq!(expand_partial_date(""), "");
    }

    #[test]
    fn runtime_uses_integer_division() {
        assert_eq!(runtime_minutes(Some(7380)), 123);
        assert_eq!(runtime_minutes(Some(59)), 0);
        assert_eq!(runtime_minutes(None), 0);
    }

    #[test]
    fn year_prefix_needs_four_characters() {
        assert_eq!(year_prefix("1999-03-31").as_deref(), Some("1999"));
        assert_eq!(year_prefix("199"), None);
        assert_eq!(year_prefix(""), None);
    }
}
