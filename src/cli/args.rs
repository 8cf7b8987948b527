//! Command line argument parsing for the chronogram CLI using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::extract::ExtractionMode;
use crate::multiset::MatchMode;
use crate::sum::SumMode;

/// Chronogram - find Roman numeral years hidden in text
#[derive(Parser, Debug, Clone)]
#[command(name = "chronogram")]
#[command(about = "Extract, sum, search and generate Roman numeral chronograms")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct ChronogramArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Configuration file (JSON)
    #[arg(long, value_name = "CONFIG_FILE", env = "CHRONOGRAM_CONFIG")]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl ChronogramArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Convert a year to its Roman numeral
    Roman(RomanArgs),

    /// Extract Roman numeral letters from text
    Extract(ExtractArgs),

    /// Highlight the letters an extraction would pick
    Highlight(ExtractArgs),

    /// Sum the extracted letters
    Sum(SumArgs),

    /// Find years whose numerals can be spelled from a set of letters
    Search(SearchArgs),

    /// Run the full analysis: highlight, extract, sum and anagram search
    Analyze(AnalyzeArgs),

    /// Generate chronogram sentences for a year
    Generate(GenerateArgs),
}

/// Where input text comes from. Falls back to stdin when neither is given.
#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// Text to analyze
    #[arg(value_name = "TEXT")]
    pub text: Option<String>,

    /// Read text from a file
    #[arg(long, value_name = "FILE", conflicts_with = "text")]
    pub file: Option<PathBuf>,
}

/// Arguments for year conversion
#[derive(Parser, Debug, Clone)]
pub struct RomanArgs {
    /// Year to convert
    #[arg(value_name = "YEAR", allow_negative_numbers = true)]
    pub year: i64,
}

/// Arguments for extraction and highlighting
#[derive(Parser, Debug, Clone)]
pub struct ExtractArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Extraction mode
    #[arg(short = 'm', long, default_value = "all")]
    pub mode: ExtractionModeArg,
}

/// Arguments for summation
#[derive(Parser, Debug, Clone)]
pub struct SumArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Extraction mode
    #[arg(short = 'm', long, default_value = "all")]
    pub mode: ExtractionModeArg,

    /// Summation mode
    #[arg(short = 's', long = "sum-mode", default_value = "addition")]
    pub sum_mode: SumModeArg,
}

/// Arguments for anagram search
#[derive(Parser, Debug, Clone)]
pub struct SearchArgs {
    /// Available letters (case-insensitive, non-numeral characters ignored)
    #[arg(value_name = "LETTERS")]
    pub letters: String,

    /// Lowest year to consider
    #[arg(long, allow_negative_numbers = true)]
    pub min_year: Option<i64>,

    /// Highest year to consider
    #[arg(long, allow_negative_numbers = true)]
    pub max_year: Option<i64>,

    /// Maximum number of candidates
    #[arg(short, long, default_value = "10")]
    pub limit: usize,

    /// Matching mode
    #[arg(long, default_value = "subset")]
    pub match_mode: MatchModeArg,
}

/// Arguments for the full analysis
#[derive(Parser, Debug, Clone)]
pub struct AnalyzeArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Extraction mode
    #[arg(short = 'm', long, default_value = "all")]
    pub mode: ExtractionModeArg,

    /// Lowest year to consider
    #[arg(long, allow_negative_numbers = true)]
    pub min_year: Option<i64>,

    /// Highest year to consider
    #[arg(long, allow_negative_numbers = true)]
    pub max_year: Option<i64>,

    /// Matching mode
    #[arg(long, default_value = "subset")]
    pub match_mode: MatchModeArg,

    /// Also re-run the anagram search from the cached extraction in this mode
    #[arg(long)]
    pub rematch: Option<MatchModeArg>,
}

/// Arguments for generation
#[derive(Parser, Debug, Clone)]
pub struct GenerateArgs {
    /// Year to encode (1-9999)
    #[arg(value_name = "YEAR", allow_negative_numbers = true)]
    pub year: i64,

    /// Language of the explanatory sentence (overrides configuration)
    #[arg(long)]
    pub language: Option<LanguageArg>,
}

/// Extraction modes available in CLI
#[derive(ValueEnum, Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtractionModeArg {
    /// Every letter, case-insensitive
    All,
    /// Uppercase letters only
    Uppercase,
    /// First and last character of each line
    Positional,
}

impl From<ExtractionModeArg> for ExtractionMode {
    fn from(mode: ExtractionModeArg) -> Self {
        match mode {
            ExtractionModeArg::All => ExtractionMode::All,
            ExtractionModeArg::Uppercase => ExtractionMode::Uppercase,
            ExtractionModeArg::Positional => ExtractionMode::Positional,
        }
    }
}

/// Summation modes available in CLI
#[derive(ValueEnum, Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SumModeArg {
    /// Add every letter
    Addition,
    /// Apply subtractive pairs
    Subtraction,
}

impl From<SumModeArg> for SumMode {
    fn from(mode: SumModeArg) -> Self {
        match mode {
            SumModeArg::Addition => SumMode::Addition,
            SumModeArg::Subtraction => SumMode::Subtraction,
        }
    }
}

/// Matching modes available in CLI
#[derive(ValueEnum, Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchModeArg {
    /// Leftover letters allowed
    Subset,
    /// Every letter must be used
    Exact,
}

impl From<MatchModeArg> for MatchMode {
    fn from(mode: MatchModeArg) -> Self {
        match mode {
            MatchModeArg::Subset => MatchMode::Subset,
            MatchModeArg::Exact => MatchMode::Exact,
        }
    }
}

/// Explanation languages available in CLI
#[derive(ValueEnum, Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageArg {
    /// Japanese
    Ja,
    /// English
    En,
}

impl From<LanguageArg> for crate::generator::ExplanationLanguage {
    fn from(language: LanguageArg) -> Self {
        match language {
            LanguageArg::Ja => Self::Ja,
            LanguageArg::En => Self::En,
        }
    }
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_analyze_command() {
        let args = ChronogramArgs::try_parse_from([
            "chronogram",
            "analyze",
            "Deo Optimo Maximo",
            "--mode",
            "uppercase",
            "--min-year",
            "1600",
            "--max-year",
            "1800",
            "--match-mode",
            "exact",
            "--rematch",
            "subset",
        ])
        .unwrap();

        if let Command::Analyze(analyze_args) = args.command {
            assert_eq!(analyze_args.input.text.as_deref(), Some("Deo Optimo Maximo"));
            assert!(matches!(analyze_args.mode, ExtractionModeArg::Uppercase));
            assert_eq!(analyze_args.min_year, Some(1600));
            assert_eq!(analyze_args.max_year, Some(1800));
            assert!(matches!(analyze_args.match_mode, MatchModeArg::Exact));
            assert!(matches!(analyze_args.rematch, Some(MatchModeArg::Subset)));
        } else {
            panic!("Expected Analyze command");
        }
    }

    #[test]
    fn test_file_input_conflicts_with_text() {
        let result = ChronogramArgs::try_parse_from([
            "chronogram",
            "extract",
            "some text",
            "--file",
            "input.txt",
        ]);
        assert!(result.is_err());

        let args = ChronogramArgs::try_parse_from(["chronogram", "extract", "--file", "input.txt"])
            .unwrap();
        if let Command::Extract(extract_args) = args.command {
            assert_eq!(extract_args.input.file, Some(PathBuf::from("input.txt")));
            assert!(extract_args.input.text.is_none());
            assert!(matches!(extract_args.mode, ExtractionModeArg::All));
        } else {
            panic!("Expected Extract command");
        }
    }

    #[test]
    fn test_sum_command() {
        let args = ChronogramArgs::try_parse_from([
            "chronogram",
            "sum",
            "IV",
            "-m",
            "positional",
            "-s",
            "subtraction",
        ])
        .unwrap();

        if let Command::Sum(sum_args) = args.command {
            assert!(matches!(sum_args.mode, ExtractionModeArg::Positional));
            assert!(matches!(sum_args.sum_mode, SumModeArg::Subtraction));
        } else {
            panic!("Expected Sum command");
        }
    }

    #[test]
    fn test_negative_year() {
        let args = ChronogramArgs::try_parse_from(["chronogram", "roman", "-5"]).unwrap();
        if let Command::Roman(roman_args) = args.command {
            assert_eq!(roman_args.year, -5);
        } else {
            panic!("Expected Roman command");
        }
    }

    #[test]
    fn test_verbosity_levels() {
        // Default verbosity
        let args = ChronogramArgs::try_parse_from(["chronogram", "roman", "1"]).unwrap();
        assert_eq!(args.verbosity(), 1);

        // Multiple verbose flags
        let args = ChronogramArgs::try_parse_from(["chronogram", "-vv", "roman", "1"]).unwrap();
        assert_eq!(args.verbosity(), 2);

        // Quiet flag
        let args = ChronogramArgs::try_parse_from(["chronogram", "--quiet", "roman", "1"]).unwrap();
        assert_eq!(args.verbosity(), 0);
    }

    #[test]
    fn test_output_format() {
        let args =
            ChronogramArgs::try_parse_from(["chronogram", "--format", "json", "generate", "2024"])
                .unwrap();
        assert!(matches!(args.output_format, OutputFormat::Json));
    }

    #[test]
    fn test_mode_conversion() {
        assert_eq!(ExtractionMode::from(ExtractionModeArg::Positional), ExtractionMode::Positional);
        assert_eq!(MatchMode::from(MatchModeArg::Exact), MatchMode::Exact);
        assert_eq!(SumMode::from(SumModeArg::Subtraction), SumMode::Subtraction);
    }
}
