//! Letter multisets and the subset/exact formability rule.
//!
//! A [`LetterMultiset`] counts occurrences of each canonical symbol. It answers
//! one question: can a target numeral be spelled from the letters on hand?
//! Under [`MatchMode::Subset`] leftovers are allowed; under
//! [`MatchMode::Exact`] every available letter must be consumed.

use std::fmt;
use std::str::FromStr;

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

use crate::error::{ChronogramError, Result};
use crate::roman::Symbol;

/// How a numeral is matched against an available letter pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// The numeral needs no more of any letter than is available.
    #[default]
    Subset,
    /// As `Subset`, and no available letter is left over.
    Exact,
}

impl FromStr for MatchMode {
    type Err = ChronogramError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "subset" => Ok(MatchMode::Subset),
            "exact" => Ok(MatchMode::Exact),
            other => Err(ChronogramError::invalid_mode(format!(
                "unknown match mode '{other}' (expected subset or exact)"
            ))),
        }
    }
}

impl fmt::Display for MatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchMode::Subset => write!(f, "subset"),
            MatchMode::Exact => write!(f, "exact"),
        }
    }
}

/// Occurrence count per canonical symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LetterMultiset {
    counts: [usize; Symbol::COUNT],
}

impl LetterMultiset {
    /// Create an empty multiset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count the canonical symbols in `text`.
    ///
    /// Matching is case-sensitive: lowercase letters are dropped along with
    /// every other non-symbol character. Normalize case before calling if
    /// lowercase letters should count.
    pub fn count(text: &str) -> Self {
        text.chars().filter_map(Symbol::from_char).collect()
    }

    /// Count the letters of a numeral without filtering.
    ///
    /// Returns `None` if the numeral contains anything other than canonical
    /// uppercase symbols; such a numeral can never be formed.
    pub fn from_numeral(numeral: &str) -> Option<Self> {
        let mut multiset = Self::new();
        for ch in numeral.chars() {
            multiset.insert(Symbol::from_char(ch)?);
        }
        Some(multiset)
    }

    /// Add one occurrence of `symbol`.
    pub fn insert(&mut self, symbol: Symbol) {
        self.counts[symbol.index()] += 1;
    }

    /// Occurrences of `symbol` (zero when absent).
    pub fn get(&self, symbol: Symbol) -> usize {
        self.counts[symbol.index()]
    }

    /// Total number of letters.
    pub fn len(&self) -> usize {
        self.counts.iter().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate `(symbol, count)` in ascending symbol order, zeros included.
    pub fn iter(&self) -> impl Iterator<Item = (Symbol, usize)> + '_ {
        Symbol::ALL.iter().map(move |&sym| (sym, self.get(sym)))
    }

    /// True if every count in `self` fits within `other`.
    pub fn is_subset_of(&self, other: &LetterMultiset) -> bool {
        self.counts
            .iter()
            .zip(other.counts.iter())
            .all(|(need, have)| need <= have)
    }

    /// Display line with every symbol, e.g. `I:2  V:1  X:0 ...`.
    pub fn display_counts(&self) -> String {
        self.iter()
            .map(|(sym, n)| format!("{sym}:{n}"))
            .collect::<Vec<_>>()
            .join("  ")
    }
}

impl FromIterator<Symbol> for LetterMultiset {
    fn from_iter<T: IntoIterator<Item = Symbol>>(iter: T) -> Self {
        let mut multiset = Self::new();
        for sym in iter {
            multiset.insert(sym);
        }
        multiset
    }
}

impl<'a> FromIterator<&'a Symbol> for LetterMultiset {
    fn from_iter<T: IntoIterator<Item = &'a Symbol>>(iter: T) -> Self {
        iter.into_iter().copied().collect()
    }
}

impl Serialize for LetterMultiset {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Symbol::COUNT))?;
        for (sym, n) in self.iter() {
            map.serialize_entry(&sym, &n)?;
        }
        map.end()
    }
}

/// Decide whether `target` can be spelled from `available`.
///
/// The target is counted without filtering; a character outside the canonical
/// set makes the target unformable. Pure function.
pub fn can_form(target: &str, available: &LetterMultiset, mode: MatchMode) -> bool {
    let Some(needed) = LetterMultiset::from_numeral(target) else {
        return false;
    };

    match mode {
        MatchMode::Subset => needed.is_subset_of(available),
        MatchMode::Exact => needed == *available,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pool(letters: &str) -> LetterMultiset {
        LetterMultiset::count(letters)
    }

    #[test]
    fn test_count_is_case_sensitive() {
        let counts = LetterMultiset::count("Vixit MX");
        assert_eq!(counts.get(Symbol::V), 1);
        assert_eq!(counts.get(Symbol::I), 0);
        assert_eq!(counts.get(Symbol::X), 1);
        assert_eq!(counts.get(Symbol::M), 1);
        assert_eq!(counts.len(), 3);
    }

    #[test]
    fn test_subset_and_exact() {
        assert!(can_form("IV", &pool("IV"), MatchMode::Subset));
        assert!(can_form("IV", &pool("IV"), MatchMode::Exact));
        assert!(can_form("IV", &pool("IVX"), MatchMode::Subset));
        assert!(!can_form("IV", &pool("IVX"), MatchMode::Exact));
        assert!(!can_form("IIV", &pool("IV"), MatchMode::Subset));
    }

    #[test]
    fn test_missing_letter_fails() {
        assert!(!can_form("XL", &pool("XXX"), MatchMode::Subset));
        assert!(!can_form("I", &LetterMultiset::new(), MatchMode::Subset));
    }

    #[test]
    fn test_empty_target() {
        assert!(can_form("", &pool("MX"), MatchMode::Subset));
        assert!(!can_form("", &pool("MX"), MatchMode::Exact));
        assert!(can_form("", &LetterMultiset::new(), MatchMode::Exact));
    }

    #[test]
    fn test_non_canonical_target_never_forms() {
        assert!(!can_form("iv", &pool("IV"), MatchMode::Subset));
        assert!(!can_form("IVZ", &pool("IVZ"), MatchMode::Subset));
    }

    #[test]
    fn test_exact_implies_subset() {
        let available = pool("MCMXCIV");
        for target in ["MCMXCIV", "MCM", "XCIV", "MMXX", "I"] {
            if can_form(target, &available, MatchMode::Exact) {
                assert!(can_form(target, &available, MatchMode::Subset));
            }
        }
    }

    #[test]
    fn test_display_counts() {
        let counts = pool("MMXXIV");
        assert_eq!(counts.display_counts(), "I:1  V:1  X:2  L:0  C:0  D:0  M:2");
    }

    #[test]
    fn test_match_mode_parsing() {
        assert_eq!("subset".parse::<MatchMode>().unwrap(), MatchMode::Subset);
        assert_eq!("EXACT".parse::<MatchMode>().unwrap(), MatchMode::Exact);
        assert!("partial".parse::<MatchMode>().is_err());
    }

    #[test]
    fn test_serialize_as_map() {
        let json = serde_json::to_string(&pool("IV")).unwrap();
        assert_eq!(json, r#"{"I":1,"V":1,"X":0,"L":0,"C":0,"D":0,"M":0}"#);
    }
}
