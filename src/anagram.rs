//! Anagram year search.
//!
//! Scans a year range and keeps the years whose canonical numeral can be
//! spelled from a letter pool.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::multiset::{LetterMultiset, MatchMode, can_form};
pub use crate::roman::{MAX_YEAR, MIN_YEAR};
use crate::roman::to_roman;

/// A year together with its canonical numeral.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearCandidate {
    pub year: i64,
    pub numeral: String,
}

impl std::fmt::Display for YearCandidate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} = {}", self.year, self.numeral)
    }
}

/// Find up to `max_results` years in `min_year..=max_year` formable from
/// `available`, in ascending order.
///
/// The lower bound is raised to 1. An inverted range scans only `min_year`.
/// The scan never goes past year 9999.
pub fn search(
    available: &LetterMultiset,
    min_year: i64,
    max_year: i64,
    max_results: usize,
    mode: MatchMode,
) -> Vec<YearCandidate> {
    let start = min_year.max(MIN_YEAR);
    let end = max_year.max(min_year).min(MAX_YEAR);
    debug!(
        "anagram scan {start}..={end} ({mode}, limit {max_results}) over {} letters",
        available.len()
    );

    let mut found = Vec::new();
    if max_results == 0 {
        return found;
    }

    for year in start..=end {
        let numeral = to_roman(year);
        if numeral.is_empty() {
            continue;
        }
        if can_form(&numeral, available, mode) {
            found.push(YearCandidate { year, numeral });
            if found.len() >= max_results {
                break;
            }
        }
    }

    found
}
