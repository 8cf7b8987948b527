//! Summation of extracted letters into a year value.
//!
//! The historical chronogram reading simply adds every letter. The subtractive
//! reading applies the `IV = 4` rule pairwise to the extracted sequence; it is
//! a display transform over whatever letters were found, not numeral
//! validation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ChronogramError, Result};
use crate::roman::{Symbol, to_roman};

/// How letter values are combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SumMode {
    /// Every letter adds its value.
    #[default]
    Addition,
    /// A letter followed by a larger one subtracts its value.
    Subtraction,
}

impl FromStr for SumMode {
    type Err = ChronogramError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "addition" => Ok(SumMode::Addition),
            "subtraction" => Ok(SumMode::Subtraction),
            other => Err(ChronogramError::invalid_mode(format!(
                "unknown sum mode '{other}' (expected addition or subtraction)"
            ))),
        }
    }
}

impl fmt::Display for SumMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SumMode::Addition => write!(f, "addition"),
            SumMode::Subtraction => write!(f, "subtraction"),
        }
    }
}

/// Signed contribution of one letter occurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SumStep {
    pub symbol: Symbol,
    pub contribution: i64,
}

impl fmt::Display for SumStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={:+}", self.symbol, self.contribution)
    }
}

/// Total plus the per-letter trace that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Summation {
    pub total: i64,
    pub steps: Vec<SumStep>,
}

impl Summation {
    /// The total as a canonical numeral (empty when the total is outside 1..=9999).
    pub fn numeral(&self) -> String {
        to_roman(self.total)
    }

    /// Steps joined with ` + `, e.g. `M=+1000 + D=+500`.
    pub fn breakdown(&self) -> String {
        self.steps
            .iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>()
            .join(" + ")
    }

    /// Steps rendered individually, e.g. `["I=-1", "V=+5"]`.
    pub fn step_labels(&self) -> Vec<String> {
        self.steps.iter().map(|s| s.to_string()).collect()
    }
}

/// Reduce `letters` to a total under `mode`.
pub fn sum(letters: &[Symbol], mode: SumMode) -> Summation {
    let steps: Vec<SumStep> = letters
        .iter()
        .enumerate()
        .map(|(i, &symbol)| {
            let value = symbol.value();
            let contribution = match mode {
                SumMode::Addition => value,
                SumMode::Subtraction => {
                    let next = letters.get(i + 1).map(|s| s.value()).unwrap_or(0);
                    if value < next { -value } else { value }
                }
            };
            SumStep {
                symbol,
                contribution,
            }
        })
        .collect();

    let total = steps.iter().map(|s| s.contribution).sum();
    Summation { total, steps }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Symbol::*;

    #[test]
    fn test_addition() {
        let result = sum(&[I, V], SumMode::Addition);
        assert_eq!(result.total, 6);
        assert_eq!(result.step_labels(), vec!["I=+1", "V=+5"]);
    }

    #[test]
    fn test_subtraction() {
        let result = sum(&[I, V], SumMode::Subtraction);
        assert_eq!(result.total, 4);
        assert_eq!(result.step_labels(), vec!["I=-1", "V=+5"]);
    }

    #[test]
    fn test_subtraction_reads_canonical_numeral() {
        let result = sum(&[M, C, M, X, C, I, V], SumMode::Subtraction);
        assert_eq!(result.total, 1994);
        assert_eq!(result.numeral(), "MCMXCIV");
    }

    #[test]
    fn test_subtraction_on_unordered_letters() {
        // Not a valid numeral, still a defined result.
        let result = sum(&[I, I, X], SumMode::Subtraction);
        assert_eq!(result.total, 1 - 1 + 10);
        assert_eq!(result.step_labels(), vec!["I=+1", "I=-1", "X=+10"]);
    }

    #[test]
    fn test_empty_sequence() {
        for mode in [SumMode::Addition, SumMode::Subtraction] {
            let result = sum(&[], mode);
            assert_eq!(result.total, 0);
            assert!(result.steps.is_empty());
            assert_eq!(result.numeral(), "");
            assert_eq!(result.breakdown(), "");
        }
    }

    #[test]
    fn test_breakdown() {
        let result = sum(&[M, D, C], SumMode::Addition);
        assert_eq!(result.breakdown(), "M=+1000 + D=+500 + C=+100");
        assert_eq!(result.total, 1600);
        assert_eq!(result.numeral(), "MDC");
    }
}
