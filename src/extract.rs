//! Extraction of Roman numeral letters from free-form text.
//!
//! Three selection policies are supported:
//!
//! - [`ExtractionMode::All`] - every character whose uppercase form is a symbol
//! - [`ExtractionMode::Uppercase`] - only characters that already are uppercase symbols
//! - [`ExtractionMode::Positional`] - the first and last visible character of
//!   every line, plus the boundaries of the whole text
//!
//! Selection is computed once as a list of [`Selection`]s (character index plus
//! symbol, in emission order). [`extract`] reads the symbols off that list and
//! [`crate::highlight`] marks the same indices, so the two can never disagree.
//!
//! # Examples
//!
//! ```
//! use chronogram::extract::{ExtractionMode, extract};
//! use chronogram::roman::Symbol;
//!
//! let letters = extract("Vixit", ExtractionMode::All);
//! assert_eq!(letters, vec![Symbol::V, Symbol::I, Symbol::X, Symbol::I]);
//!
//! let letters = extract("Vixit", ExtractionMode::Uppercase);
//! assert_eq!(letters, vec![Symbol::V]);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ChronogramError, Result};
use crate::multiset::LetterMultiset;
use crate::roman::Symbol;

/// Letter selection policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtractionMode {
    /// Case-fold every character and keep the canonical symbols.
    #[default]
    All,
    /// Keep only characters that are already uppercase canonical symbols.
    Uppercase,
    /// Keep the first and last visible character of each line.
    Positional,
}

impl FromStr for ExtractionMode {
    type Err = ChronogramError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "all" => Ok(ExtractionMode::All),
            "uppercase" => Ok(ExtractionMode::Uppercase),
            "positional" => Ok(ExtractionMode::Positional),
            other => Err(ChronogramError::invalid_mode(format!(
                "unknown extraction mode '{other}' (expected all, uppercase or positional)"
            ))),
        }
    }
}

impl fmt::Display for ExtractionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtractionMode::All => write!(f, "all"),
            ExtractionMode::Uppercase => write!(f, "uppercase"),
            ExtractionMode::Positional => write!(f, "positional"),
        }
    }
}

/// A selected character: its index (in chars) in the source text and the
/// symbol it contributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub index: usize,
    pub symbol: Symbol,
}

impl Selection {
    fn new(index: usize, symbol: Symbol) -> Self {
        Selection { index, symbol }
    }
}

/// Ordered letters pulled out of a text, with their counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Extraction {
    pub mode: ExtractionMode,
    pub letters: Vec<Symbol>,
    pub counts: LetterMultiset,
}

impl Extraction {
    /// Extract letters from `text` under `mode`.
    pub fn from_text(text: &str, mode: ExtractionMode) -> Self {
        let letters = extract(text, mode);
        let counts = letters.iter().collect();
        Extraction {
            mode,
            letters,
            counts,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Letters joined by single spaces, e.g. `V I X I`.
    pub fn display_letters(&self) -> String {
        self.letters
            .iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Extract the ordered symbol sequence from `text` under `mode`.
pub fn extract(text: &str, mode: ExtractionMode) -> Vec<Symbol> {
    select(text, mode).into_iter().map(|s| s.symbol).collect()
}

/// Compute the selected characters of `text` under `mode`, in emission order.
pub fn select(text: &str, mode: ExtractionMode) -> Vec<Selection> {
    match mode {
        ExtractionMode::All => text
            .chars()
            .enumerate()
            .filter_map(|(i, ch)| Symbol::from_folded(ch).map(|sym| Selection::new(i, sym)))
            .collect(),
        ExtractionMode::Uppercase => text
            .chars()
            .enumerate()
            .filter_map(|(i, ch)| Symbol::from_char(ch).map(|sym| Selection::new(i, sym)))
            .collect(),
        ExtractionMode::Positional => select_positional(text),
    }
}

fn select_positional(text: &str) -> Vec<Selection> {
    let chars: Vec<char> = text.chars().collect();
    let mut selections = Vec::new();

    let mut line_start = 0;
    for line in text.split('\n') {
        let line_len = line.chars().count();
        let line_chars = &chars[line_start..line_start + line_len];

        if let Some((first, last)) = visible_bounds(line_chars) {
            if let Some(sym) = Symbol::from_folded(line_chars[first]) {
                selections.push(Selection::new(line_start + first, sym));
            }
            // A one-character line only contributes once.
            if last > first
                && let Some(sym) = Symbol::from_folded(line_chars[last])
            {
                selections.push(Selection::new(line_start + last, sym));
            }
        }

        // Skip the '\n' separator.
        line_start += line_len + 1;
    }

    if let Some((first, last)) = visible_bounds(&chars) {
        if let Some(sym) = Symbol::from_folded(chars[first])
            && selections.first().map(|s| s.symbol) != Some(sym)
        {
            selections.insert(0, Selection::new(first, sym));
        }
        if let Some(sym) = Symbol::from_folded(chars[last])
            && !selections.iter().any(|s| s.symbol == sym)
        {
            selections.push(Selection::new(last, sym));
        }
    }

    selections
}

/// Indices of the first and last non-whitespace characters, if any.
fn visible_bounds(chars: &[char]) -> Option<(usize, usize)> {
    let first = chars.iter().position(|c| !c.is_whitespace())?;
    let last = chars.iter().rposition(|c| !c.is_whitespace())?;
    Some((first, last))
}
