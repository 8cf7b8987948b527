//! Configuration for analysis sessions and the CLI.

use std::fs;
use std::path::Path;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::anagram::{MAX_YEAR, MIN_YEAR};
use crate::error::{ChronogramError, Result};
use crate::generator::ExplanationLanguage;
use crate::highlight::HighlightConfig;

/// Configuration for chronogram analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChronogramConfig {
    /// Maximum number of characters accepted for analysis.
    pub max_input_chars: usize,

    /// Lower year bound used when none (or an invalid one) is supplied.
    pub default_min_year: i64,

    /// Upper year bound used when none (or an invalid one) is supplied.
    pub default_max_year: i64,

    /// Maximum number of anagram candidates reported by an analysis.
    pub max_candidates: usize,

    /// Marker used for highlighted and generated letters.
    pub highlight: HighlightConfig,

    /// Language of the generator's explanatory sentence.
    pub explanation_language: ExplanationLanguage,
}

impl Default for ChronogramConfig {
    fn default() -> Self {
        Self {
            max_input_chars: 10_000,
            default_min_year: 1500,
            default_max_year: 2100,
            max_candidates: 12,
            highlight: HighlightConfig::default(),
            explanation_language: ExplanationLanguage::default(),
        }
    }
}

impl ChronogramConfig {
    /// Create a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a configuration from a JSON file. Missing fields take defaults.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref())?;
        let config: ChronogramConfig = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Check internal consistency.
    pub fn validate(&self) -> Result<()> {
        if self.max_input_chars == 0 {
            return Err(ChronogramError::config("max_input_chars must be positive"));
        }
        for (name, year) in [
            ("default_min_year", self.default_min_year),
            ("default_max_year", self.default_max_year),
        ] {
            if !is_valid_year(year) {
                return Err(ChronogramError::config(format!(
                    "{name} must be between {MIN_YEAR} and {MAX_YEAR}, got {year}"
                )));
            }
        }
        let tag = &self.highlight.tag;
        if tag.is_empty() || !tag.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(ChronogramError::config(format!(
                "highlight tag must be a non-empty alphanumeric name, got '{}'",
                self.highlight.tag
            )));
        }
        Ok(())
    }

    /// Set the input length limit.
    pub fn with_max_input_chars(mut self, max_input_chars: usize) -> Self {
        self.max_input_chars = max_input_chars;
        self
    }

    /// Set the default year range.
    pub fn with_default_years(mut self, min_year: i64, max_year: i64) -> Self {
        self.default_min_year = min_year;
        self.default_max_year = max_year;
        self
    }

    /// Set the candidate limit.
    pub fn with_max_candidates(mut self, max_candidates: usize) -> Self {
        self.max_candidates = max_candidates;
        self
    }

    /// Set the highlight marker.
    pub fn with_highlight(mut self, highlight: HighlightConfig) -> Self {
        self.highlight = highlight;
        self
    }

    /// Set the explanation language.
    pub fn with_explanation_language(mut self, language: ExplanationLanguage) -> Self {
        self.explanation_language = language;
        self
    }
}

fn is_valid_year(year: i64) -> bool {
    (MIN_YEAR..=MAX_YEAR).contains(&year)
}

/// An inclusive, validated year range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearRange {
    pub min: i64,
    pub max: i64,
}

impl YearRange {
    /// Sanitize user-supplied bounds.
    ///
    /// A missing bound, or one outside 1..=9999, is replaced by the
    /// configured default. Inverted bounds are swapped.
    pub fn sanitize(min: Option<i64>, max: Option<i64>, config: &ChronogramConfig) -> Self {
        let min = match min {
            Some(year) if is_valid_year(year) => year,
            Some(year) => {
                warn!("minimum year {year} out of range, using {}", config.default_min_year);
                config.default_min_year
            }
            None => config.default_min_year,
        };
        let max = match max {
            Some(year) if is_valid_year(year) => year,
            Some(year) => {
                warn!("maximum year {year} out of range, using {}", config.default_max_year);
                config.default_max_year
            }
            None => config.default_max_year,
        };

        if min > max {
            warn!("year range {min}-{max} is inverted, swapping");
            YearRange { min: max, max: min }
        } else {
            YearRange { min, max }
        }
    }
}

impl std::fmt::Display for YearRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}
