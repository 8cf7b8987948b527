//! # Chronogram
//!
//! Find Roman numeral years hidden in text, and hide them in new text.
//!
//! ## Features
//!
//! - Canonical integer-to-numeral conversion
//! - Letter extraction (all letters, uppercase only, or line boundaries) with
//!   matching HTML highlighting
//! - Additive and subtractive summation with a per-letter trace
//! - Anagram year search under subset or exact matching
//! - Template-based chronogram generation
//!
//! ## Example
//!
//! ```
//! use chronogram::prelude::*;
//!
//! let letters = extract("LorD reMeMber DaVID", ExtractionMode::Uppercase);
//! let total = sum(&letters, SumMode::Addition).total;
//! assert_eq!(total, 50 + 500 + 1000 + 1000 + 500 + 5 + 1 + 500);
//!
//! let counts: LetterMultiset = letters.iter().collect();
//! let years = search(&counts, 1500, 2100, 5, MatchMode::Subset);
//! assert_eq!(years[0].numeral, "MD");
//! ```

pub mod anagram;
pub mod cli;
pub mod config;
pub mod error;
pub mod extract;
pub mod generator;
pub mod highlight;
pub mod multiset;
pub mod roman;
pub mod session;
pub mod sum;

pub mod prelude {
    pub use crate::anagram::{YearCandidate, search};
    pub use crate::config::{ChronogramConfig, YearRange};
    pub use crate::error::{ChronogramError, Result};
    pub use crate::extract::{Extraction, ExtractionMode, extract};
    pub use crate::generator::{ChronogramExample, ExplanationLanguage, generate, generate_for_year};
    pub use crate::highlight::{HighlightConfig, Highlighter, highlight};
    pub use crate::multiset::{LetterMultiset, MatchMode, can_form};
    pub use crate::roman::{Symbol, to_roman};
    pub use crate::session::{AnalysisReport, AnalysisRequest, AnalysisSession};
    pub use crate::sum::{SumMode, Summation, sum};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
