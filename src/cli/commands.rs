//! Command implementations for the chronogram CLI.

use std::fs;
use std::io::{self, Read};

use anyhow::Context;
use log::{debug, info};

use crate::anagram::{MAX_YEAR, MIN_YEAR, search};
use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::{ChronogramConfig, YearRange};
use crate::error::{ChronogramError, Result};
use crate::extract::{Extraction, ExtractionMode};
use crate::generator::generate_for_year;
use crate::highlight::Highlighter;
use crate::multiset::LetterMultiset;
use crate::roman::{Symbol, to_roman};
use crate::session::{AnalysisRequest, AnalysisSession};
use crate::sum::{SumMode, sum};

/// Execute a CLI command.
pub fn execute_command(args: ChronogramArgs) -> Result<()> {
    let config = load_config(&args)?;

    match &args.command {
        Command::Roman(roman_args) => convert_year(roman_args, &args),
        Command::Extract(extract_args) => extract_letters(extract_args, &config, &args),
        Command::Highlight(extract_args) => highlight_text(extract_args, &config, &args),
        Command::Sum(sum_args) => sum_letters(sum_args, &config, &args),
        Command::Search(search_args) => search_years(search_args, &config, &args),
        Command::Analyze(analyze_args) => analyze_text(analyze_args, config, &args),
        Command::Generate(generate_args) => generate_examples(generate_args, &config, &args),
    }
}

/// Load the configuration file if one was given, defaults otherwise.
pub fn load_config(args: &ChronogramArgs) -> Result<ChronogramConfig> {
    match &args.config {
        Some(path) => {
            info!("Loading configuration from: {}", path.display());
            ChronogramConfig::from_file(path)
        }
        None => Ok(ChronogramConfig::default()),
    }
}

/// Read input text from the argument, a file, or stdin, enforcing the length cap.
pub fn read_input(input: &InputArgs, config: &ChronogramConfig) -> Result<String> {
    let text = if let Some(text) = &input.text {
        text.clone()
    } else if let Some(path) = &input.file {
        debug!("Reading text from: {}", path.display());
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?
    } else {
        debug!("Reading text from stdin");
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("failed to read stdin")?;
        buffer
    };

    let len = text.chars().count();
    if len > config.max_input_chars {
        return Err(ChronogramError::input_too_long(len, config.max_input_chars));
    }
    Ok(text)
}

/// Convert a year to its numeral.
fn convert_year(args: &RomanArgs, cli_args: &ChronogramArgs) -> Result<()> {
    if !(MIN_YEAR..=MAX_YEAR).contains(&args.year) {
        return Err(ChronogramError::InvalidYear(args.year));
    }

    output_result(
        "Roman numeral",
        &RomanResult {
            year: args.year,
            numeral: to_roman(args.year),
        },
        cli_args,
    )
}

/// Extract letters from text.
fn extract_letters(
    args: &ExtractArgs,
    config: &ChronogramConfig,
    cli_args: &ChronogramArgs,
) -> Result<()> {
    let text = read_input(&args.input, config)?;
    let extraction = Extraction::from_text(&text, args.mode.into());

    output_result(
        "Extracted letters",
        &ExtractResult {
            mode: extraction.mode,
            letters: extraction.letters,
            counts: extraction.counts,
        },
        cli_args,
    )
}

/// Highlight extractable letters.
fn highlight_text(
    args: &ExtractArgs,
    config: &ChronogramConfig,
    cli_args: &ChronogramArgs,
) -> Result<()> {
    let text = read_input(&args.input, config)?;
    let mode: ExtractionMode = args.mode.into();
    let html = Highlighter::new(config.highlight.clone()).highlight(&text, mode);

    output_result("Highlighted text", &HighlightResult { mode, html }, cli_args)
}

/// Sum extracted letters.
fn sum_letters(
    args: &SumArgs,
    config: &ChronogramConfig,
    cli_args: &ChronogramArgs,
) -> Result<()> {
    let text = read_input(&args.input, config)?;
    let extraction = Extraction::from_text(&text, args.mode.into());
    let mode: SumMode = args.sum_mode.into();
    let summation = sum(&extraction.letters, mode);

    output_result("Chronogram sum", &SumResult::new(mode, &summation), cli_args)
}

/// Search years spelled by the given letters.
fn search_years(
    args: &SearchArgs,
    config: &ChronogramConfig,
    cli_args: &ChronogramArgs,
) -> Result<()> {
    let available: LetterMultiset = args.letters.chars().filter_map(Symbol::from_folded).collect();
    let years = YearRange::sanitize(args.min_year, args.max_year, config);
    let match_mode = args.match_mode.into();
    info!("Searching {years} for {} letters", available.len());

    let candidates = search(&available, years.min, years.max, args.limit, match_mode);

    output_result(
        "Anagram search",
        &SearchResult {
            available,
            match_mode,
            min_year: years.min,
            max_year: years.max,
            candidates,
        },
        cli_args,
    )
}

/// Run the full analysis pipeline.
fn analyze_text(
    args: &AnalyzeArgs,
    config: ChronogramConfig,
    cli_args: &ChronogramArgs,
) -> Result<()> {
    let text = read_input(&args.input, &config)?;
    let request = AnalysisRequest::new(args.mode.into())
        .with_match_mode(args.match_mode.into())
        .with_years(args.min_year, args.max_year);

    let mut session = AnalysisSession::new(config);
    let report = session.analyze(&text, &request)?;

    let rematch = args.rematch.and_then(|mode| {
        let match_mode = mode.into();
        session.rematch(match_mode).map(|candidates| RematchResult {
            match_mode,
            candidates,
        })
    });

    output_result("Analysis", &AnalyzeResult { report, rematch }, cli_args)
}

/// Generate chronogram examples.
fn generate_examples(
    args: &GenerateArgs,
    config: &ChronogramConfig,
    cli_args: &ChronogramArgs,
) -> Result<()> {
    let language = args
        .language
        .map(Into::into)
        .unwrap_or(config.explanation_language);
    let generated = generate_for_year(args.year, language)?;
    let highlighter = Highlighter::new(config.highlight.clone());

    let examples = generated
        .examples
        .iter()
        .map(|example| GeneratedExample {
            kind: example.kind.to_string(),
            html: example.to_html(&highlighter),
            plain: example.plain_text(),
        })
        .collect();

    output_result(
        "Generated chronograms",
        &GenerateResult {
            year: generated.year,
            numeral: generated.numeral,
            examples,
        },
        cli_args,
    )
}
