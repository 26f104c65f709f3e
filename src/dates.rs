//! Nearest-date snapping and interval slicing over composite-date listings.
//!
//! A composite date is the catalog's native date token: `A` + 4-digit year +
//! 3-digit day-of-year (e.g. `A2022023`). Ordering is numeric comparison after
//! stripping the `A` prefix, which for the fixed-width zero-padded payload is
//! equivalent to lexicographic order.

use crate::error::Error;

/// Numeric value of a composite date. The digit payload of a well-formed token
/// always parses; anything malformed collapses to zero and sorts first.
pub(crate) fn date_key(date: &str) -> i64 {
    date.trim_start_matches('A').parse().unwrap_or(0)
}

/// Returns the element of `dates` numerically closest to `pivot`, or `None`
/// for an empty list.
///
/// When two dates are equally close to the pivot the first one encountered in
/// iteration order wins (the upstream catalog leaves the tie-break
/// unspecified; this rule is fixed here and covered by a test).
pub fn nearest<'a, S: AsRef<str>>(dates: &'a [S], pivot: &str) -> Option<&'a str> {
    let pivot = date_key(pivot);
    dates
        .iter()
        .map(|d| d.as_ref())
        .min_by_key(|d| (date_key(d) - pivot).abs())
}

/// Returns the contiguous slice of `dates` between the nearest match of
/// `start` and the nearest match of `end`, both inclusive.
///
/// `dates` must already be ordered ascending. Fails with
/// [`Error::InvalidRange`] when `start` is numerically after `end`; the check
/// runs on the raw inputs, before snapping. An empty listing resolves to an
/// empty interval.
pub fn interval<S: AsRef<str>>(dates: &[S], start: &str, end: &str) -> Result<Vec<String>, Error> {
    if date_key(start) > date_key(end) {
        return Err(Error::InvalidRange {
            start: start.to_string(),
            end: end.to_string(),
        });
    }

    let Some(snapped_start) = nearest(dates, start) else {
        return Ok(Vec::new());
    };
    let snapped_end = nearest(dates, end).unwrap_or(snapped_start);

    let first = dates.iter().position(|d| d.as_ref() == snapped_start);
    let last = dates.iter().position(|d| d.as_ref() == snapped_end);
    match (first, last) {
        (Some(first), Some(last)) if first <= last => Ok(dates[first..=last]
            .iter()
            .map(|d| d.as_ref().to_string())
            .collect()),
        _ => Ok(Vec::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DATES: [&str; 3] = ["A2020330", "A2020337", "A2020345"];

    #[test]
    fn nearest_returns_member_of_input() {
        let hit = nearest(&DATES, "A2020331").unwrap();
        assert!(DATES.contains(&hit));
    }

    #[test]
    fn nearest_is_identity_for_known_date() {
        assert_eq!(nearest(&DATES, "A2020337"), Some("A2020337"));
    }

    #[test]
    fn nearest_ties_resolve_to_first_in_iteration_order() {
        // A2020003 is one day from both neighbours.
        let dates = ["A2020002", "A2020004"];
        assert_eq!(nearest(&dates, "A2020003"), Some("A2020002"));
    }

    #[test]
    fn nearest_of_empty_listing_is_none() {
        let dates: [&str; 0] = [];
        assert_eq!(nearest(&dates, "A2020001"), None);
    }

    #[test]
    fn interval_snaps_both_endpoints() {
        let range = interval(&DATES, "A2020331", "A2020340").unwrap();
        assert_eq!(range, vec!["A2020330", "A2020337"]);
    }

    #[test]
    fn interval_is_inclusive_of_exact_endpoints() {
        let range = interval(&DATES, "A2020330", "A2020345").unwrap();
        assert_eq!(range, DATES.to_vec());
    }

    #[test]
    fn interval_rejects_inverted_range_before_snapping() {
        let err = interval(&DATES, "A2020340", "A2020330").unwrap_err();
        assert!(matches!(err, Error::InvalidRange { .. }));
    }

    #[test]
    fn interval_over_empty_listing_is_empty() {
        let dates: [&str; 0] = [];
        assert!(interval(&dates, "A2020001", "A2020100").unwrap().is_empty());
    }

    #[test]
    fn interval_crossing_a_year_boundary() {
        let dates = ["A2020353", "A2021004", "A2021020"];
        let range = interval(&dates, "A2020360", "A2021010").unwrap();
        assert_eq!(range, vec!["A2020353", "A2021004"]);
    }
}
