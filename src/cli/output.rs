//! Output formatting for CLI commands.

use serde::Serialize;

use crate::anagram::YearCandidate;
use crate::cli::args::{ChronogramArgs, OutputFormat};
use crate::error::Result;
use crate::extract::ExtractionMode;
use crate::multiset::{LetterMultiset, MatchMode};
use crate::roman::Symbol;
use crate::session::AnalysisReport;
use crate::sum::{SumMode, Summation};

/// Placeholder shown when nothing was extracted.
const NONE_FOUND: &str = "(none)";

/// Human-readable rendering of a command result.
pub trait HumanOutput {
    fn render_human(&self) -> String;
}

/// Result structure for year conversion.
#[derive(Debug, Serialize)]
pub struct RomanResult {
    pub year: i64,
    pub numeral: String,
}

/// Result structure for extraction.
#[derive(Debug, Serialize)]
pub struct ExtractResult {
    pub mode: ExtractionMode,
    pub letters: Vec<Symbol>,
    pub counts: LetterMultiset,
}

/// Result structure for highlighting.
#[derive(Debug, Serialize)]
pub struct HighlightResult {
    pub mode: ExtractionMode,
    pub html: String,
}

/// Result structure for summation.
#[derive(Debug, Serialize)]
pub struct SumResult {
    pub mode: SumMode,
    pub total: i64,
    pub steps: Vec<String>,
    pub numeral: String,
}

impl SumResult {
    pub fn new(mode: SumMode, summation: &Summation) -> Self {
        SumResult {
            mode,
            total: summation.total,
            steps: summation.step_labels(),
            numeral: summation.numeral(),
        }
    }
}

/// Result structure for anagram search.
#[derive(Debug, Serialize)]
pub struct SearchResult {
    pub available: LetterMultiset,
    pub match_mode: MatchMode,
    pub min_year: i64,
    pub max_year: i64,
    pub candidates: Vec<YearCandidate>,
}

/// Anagram search re-run from a cached extraction.
#[derive(Debug, Serialize)]
pub struct RematchResult {
    pub match_mode: MatchMode,
    pub candidates: Vec<YearCandidate>,
}

/// Result structure for the full analysis.
#[derive(Debug, Serialize)]
pub struct AnalyzeResult {
    pub report: AnalysisReport,
    pub rematch: Option<RematchResult>,
}

/// One generated sentence, rendered.
#[derive(Debug, Serialize)]
pub struct GeneratedExample {
    pub kind: String,
    pub html: String,
    pub plain: String,
}

/// Result structure for generation.
#[derive(Debug, Serialize)]
pub struct GenerateResult {
    pub year: i64,
    pub numeral: String,
    pub examples: Vec<GeneratedExample>,
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize + HumanOutput>(
    message: &str,
    result: &T,
    args: &ChronogramArgs,
) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            if args.verbosity() > 1 {
                println!("{message}");
                println!();
            }
            println!("{}", result.render_human());
        }
        OutputFormat::Json => {
            let json = if args.pretty {
                serde_json::to_string_pretty(result)?
            } else {
                serde_json::to_string(result)?
            };
            println!("{json}");
        }
    }
    Ok(())
}

fn join_letters(letters: &[Symbol]) -> String {
    if letters.is_empty() {
        NONE_FOUND.to_string()
    } else {
        letters.iter().map(|s| s.to_string()).collect::<Vec<_>>().join(" ")
    }
}

fn render_candidates(out: &mut Vec<String>, candidates: &[YearCandidate]) {
    for candidate in candidates {
        out.push(format!("  {candidate}"));
    }
}

impl HumanOutput for RomanResult {
    fn render_human(&self) -> String {
        if self.numeral.is_empty() {
            format!("{} = (not representable)", self.year)
        } else {
            format!("{} = {}", self.year, self.numeral)
        }
    }
}

impl HumanOutput for ExtractResult {
    fn render_human(&self) -> String {
        format!(
            "Letters: {}\nCounts:  {}",
            join_letters(&self.letters),
            self.counts.display_counts()
        )
    }
}

impl HumanOutput for HighlightResult {
    fn render_human(&self) -> String {
        self.html.clone()
    }
}

impl HumanOutput for SumResult {
    fn render_human(&self) -> String {
        let mut lines = Vec::new();
        if self.steps.is_empty() {
            lines.push(format!("Steps: {NONE_FOUND}"));
        } else {
            lines.push(format!("Steps: {}", self.steps.join(" + ")));
        }
        lines.push(format!("Total = {}", self.total));
        if !self.numeral.is_empty() {
            lines.push(format!("Numeral: {}", self.numeral));
        }
        lines.join("\n")
    }
}

impl HumanOutput for SearchResult {
    fn render_human(&self) -> String {
        let mut lines = vec![format!(
            "Anagram years ({}, {}-{}): {}",
            self.match_mode,
            self.min_year,
            self.max_year,
            self.candidates.len()
        )];
        render_candidates(&mut lines, &self.candidates);
        lines.join("\n")
    }
}

impl HumanOutput for AnalyzeResult {
    fn render_human(&self) -> String {
        let report = &self.report;
        let mut lines = vec![
            "Highlighted:".to_string(),
            report.highlighted.clone(),
            String::new(),
            format!("Letters: {}", join_letters(&report.extraction.letters)),
            format!("Counts:  {}", report.counts),
        ];

        if report.extraction.is_empty() {
            return lines.join("\n");
        }

        lines.push(format!("Sum:     {}", report.sum.breakdown()));
        lines.push(format!("Total = {} ({})", report.sum.total, report.sum_numeral));
        lines.push(format!(
            "Anagram ({}, {}): {}",
            report.match_mode,
            report.years,
            report.candidate_summary()
        ));
        render_candidates(&mut lines, &report.candidates);

        if let Some(rematch) = &self.rematch {
            lines.push(format!(
                "Anagram ({}, {}): {} candidate(s)",
                rematch.match_mode,
                report.years,
                rematch.candidates.len()
            ));
            render_candidates(&mut lines, &rematch.candidates);
        }

        lines.join("\n")
    }
}

impl HumanOutput for GenerateResult {
    fn render_human(&self) -> String {
        let mut lines = vec![format!("Roman: {}", self.numeral)];
        for (i, example) in self.examples.iter().enumerate() {
            lines.push(String::new());
            lines.push(format!("Example {} ({})", i + 1, example.kind));
            lines.push(example.plain.clone());
        }
        lines.join("\n")
    }
}
