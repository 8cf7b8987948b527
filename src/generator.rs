//! Reverse chronogram generation.
//!
//! Given a target numeral, the generator looks for sentence templates that
//! contain enough of each required letter and marks which characters stand
//! for the numeral. Letters are never added or removed: the marks are placed
//! on letters the template already has, preferring the rightmost occurrences.
//!
//! # Examples
//!
//! ```
//! use chronogram::generator::generate;
//!
//! let examples = generate(2024, "MMXXIV");
//! assert_eq!(examples.len(), 5);
//! assert_eq!(examples[4].marked_symbols().len(), 6);
//! ```

use std::fmt;
use std::str::FromStr;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::anagram::{MAX_YEAR, MIN_YEAR};
use crate::error::{ChronogramError, Result};
use crate::highlight::{Highlighter, push_escaped};
use crate::multiset::LetterMultiset;
use crate::roman::{Symbol, to_roman};

/// Sentence templates, tried in order.
pub const TEMPLATES: &[&str] = &[
    "deo optimo maximo sacrum. vixit in pace, laboravit pro gloria dei.",
    "may the most gracious lord grant victory and prosperity to all nations in this divine age.",
    "in memoriam of those who served with valor, devotion and courage. their glorious legacy lives on.",
    "lord almighty, bless this sacred monument built in commemoration of your divine grace and eternal victory.",
    "this sacred chapel was erected in devotion to the almighty creator, may his divine light guide all nations.",
    "here lies a memorial to all devoted souls who lived with extraordinary courage, valor and conviction.",
    "constructed by royal decree, this magnificent edifice stands as a testament to divine providence and civic duty.",
    "maximilian, king of six provinces, extended this exquisite hall; the excellent council convened here to mark the next century.",
    "lux in excelsis: mark this memorable day, when the people of the valley gathered in concord to remember the dead.",
    "exalted and exiled, the expedition of the old commander mixed victory with exile across the sixteen cold valleys of the duchy.",
];

/// At most this many template examples are produced.
pub const MAX_TEMPLATE_EXAMPLES: usize = 3;

/// Language of the closing explanatory sentence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExplanationLanguage {
    #[default]
    Ja,
    En,
}

impl FromStr for ExplanationLanguage {
    type Err = ChronogramError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "ja" => Ok(ExplanationLanguage::Ja),
            "en" => Ok(ExplanationLanguage::En),
            other => Err(ChronogramError::invalid_mode(format!(
                "unknown explanation language '{other}' (expected ja or en)"
            ))),
        }
    }
}

/// A piece of a generated sentence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Fragment {
    /// Unmarked text.
    Text(String),
    /// A character repurposed to stand for a numeral letter.
    Mark(Symbol),
}

/// Where an example came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ExampleKind {
    /// A sentence from [`TEMPLATES`].
    Template { index: usize },
    /// The sentence naming the year and its numeral.
    YearSentence,
    /// The explanatory sentence with the bare numeral marked.
    Explanation,
}

impl fmt::Display for ExampleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExampleKind::Template { index } => write!(f, "template #{}", index + 1),
            ExampleKind::YearSentence => write!(f, "year sentence"),
            ExampleKind::Explanation => write!(f, "explanation"),
        }
    }
}

/// A generated sentence with its marked letters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChronogramExample {
    pub kind: ExampleKind,
    pub fragments: Vec<Fragment>,
}

impl ChronogramExample {
    fn new(kind: ExampleKind, fragments: Vec<Fragment>) -> Self {
        ChronogramExample { kind, fragments }
    }

    /// Render as HTML, wrapping marked letters with the highlighter's marker.
    pub fn to_html(&self, highlighter: &Highlighter) -> String {
        let mut html = String::new();
        for fragment in &self.fragments {
            match fragment {
                Fragment::Text(text) => text.chars().for_each(|ch| push_escaped(&mut html, ch)),
                Fragment::Mark(sym) => highlighter.push_marked(&mut html, sym.as_char()),
            }
        }
        html
    }

    /// Plain text with marked letters in uppercase.
    pub fn plain_text(&self) -> String {
        let mut text = String::new();
        for fragment in &self.fragments {
            match fragment {
                Fragment::Text(t) => text.push_str(t),
                Fragment::Mark(sym) => text.push(sym.as_char()),
            }
        }
        text
    }

    /// Marked symbols in sentence order.
    pub fn marked_symbols(&self) -> Vec<Symbol> {
        self.fragments
            .iter()
            .filter_map(|f| match f {
                Fragment::Mark(sym) => Some(*sym),
                Fragment::Text(_) => None,
            })
            .collect()
    }
}

/// A year, its numeral and the generated examples.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedChronograms {
    pub year: i64,
    pub numeral: String,
    pub examples: Vec<ChronogramExample>,
}

/// Generate examples for `year` after checking it lies in 1..=9999.
pub fn generate_for_year(year: i64, language: ExplanationLanguage) -> Result<GeneratedChronograms> {
    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return Err(ChronogramError::InvalidYear(year));
    }
    let numeral = to_roman(year);
    let examples = generate_with(year, &numeral, language);
    Ok(GeneratedChronograms {
        year,
        numeral,
        examples,
    })
}

/// Generate examples for `numeral` with the default explanation language.
pub fn generate(year: i64, numeral: &str) -> Vec<ChronogramExample> {
    generate_with(year, numeral, ExplanationLanguage::default())
}

/// Generate up to three template examples, then the year sentence and the
/// explanatory sentence.
pub fn generate_with(
    year: i64,
    numeral: &str,
    language: ExplanationLanguage,
) -> Vec<ChronogramExample> {
    let needed = LetterMultiset::count(numeral);

    let mut examples: Vec<ChronogramExample> = TEMPLATES
        .iter()
        .enumerate()
        .filter(|(_, template)| is_feasible(template, &needed))
        .take(MAX_TEMPLATE_EXAMPLES)
        .map(|(index, template)| {
            ChronogramExample::new(ExampleKind::Template { index }, distribute(template, &needed))
        })
        .collect();
    debug!(
        "{} of {} templates can carry {numeral}",
        examples.len(),
        TEMPLATES.len()
    );

    let year_sentence = format!(
        "this inscription commemorates the year {year} represented as {numeral} in roman numerals"
    );
    examples.push(ChronogramExample::new(
        ExampleKind::YearSentence,
        distribute(&year_sentence, &needed),
    ));

    examples.push(ChronogramExample::new(
        ExampleKind::Explanation,
        explanation(year, numeral, language),
    ));

    examples
}

/// True if the template has at least as many of each needed letter.
fn is_feasible(template: &str, needed: &LetterMultiset) -> bool {
    let available: LetterMultiset = template.chars().filter_map(Symbol::from_folded).collect();
    needed.is_subset_of(&available)
}

/// Lowercase `template` and mark the rightmost occurrences of each needed
/// letter. A letter with too few occurrences is left unmarked entirely.
fn distribute(template: &str, needed: &LetterMultiset) -> Vec<Fragment> {
    let chars: Vec<char> = template.to_lowercase().chars().collect();
    let mut marks: Vec<Option<Symbol>> = vec![None; chars.len()];

    for (sym, count) in needed.iter() {
        if count == 0 {
            continue;
        }
        let target = sym.as_char().to_ascii_lowercase();
        let positions: Vec<usize> = chars
            .iter()
            .enumerate()
            .filter(|(_, c)| **c == target)
            .map(|(i, _)| i)
            .collect();

        if positions.len() >= count {
            for &pos in positions.iter().rev().take(count) {
                marks[pos] = Some(sym);
            }
        }
    }

    let mut fragments = Vec::new();
    let mut text = String::new();
    for (ch, mark) in chars.into_iter().zip(marks) {
        match mark {
            Some(sym) => {
                if !text.is_empty() {
                    fragments.push(Fragment::Text(std::mem::take(&mut text)));
                }
                fragments.push(Fragment::Mark(sym));
            }
            None => text.push(ch),
        }
    }
    if !text.is_empty() {
        fragments.push(Fragment::Text(text));
    }
    fragments
}

/// The bare numeral with every canonical letter individually marked.
fn explanation(year: i64, numeral: &str, language: ExplanationLanguage) -> Vec<Fragment> {
    let (prefix, suffix) = match language {
        ExplanationLanguage::Ja => (
            format!("西暦{year}年を示すクロノグラム：ローマ数字 "),
            " が文中に分散配置されています。".to_string(),
        ),
        ExplanationLanguage::En => (
            format!("A chronogram for the year {year}: the Roman numeral "),
            " is spread across the sentence.".to_string(),
        ),
    };

    let mut fragments = vec![Fragment::Text(prefix)];
    for ch in numeral.chars() {
        match Symbol::from_char(ch) {
            Some(sym) => fragments.push(Fragment::Mark(sym)),
            None => fragments.push(Fragment::Text(ch.to_string())),
        }
    }
    fragments.push(Fragment::Text(suffix));
    fragments
}
