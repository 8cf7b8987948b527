//! Integration tests for extraction, matching, summation, search and generation.

use chronogram::error::Result;
use chronogram::highlight::escape_html;
use chronogram::prelude::*;

use Symbol::*;

#[test]
fn test_known_numerals() {
    assert_eq!(to_roman(1994), "MCMXCIV");
    assert_eq!(to_roman(2024), "MMXXIV");
    assert_eq!(to_roman(1), "I");
    assert_eq!(to_roman(0), "");
}

#[test]
fn test_addition_recovers_additive_numerals() {
    // Numerals without subtractive pairs sum back to their year.
    for year in [1, 3, 8, 16, 1666, 2000, 3888] {
        let letters = extract(&to_roman(year), ExtractionMode::Uppercase);
        assert_eq!(sum(&letters, SumMode::Addition).total, year);
    }
}

#[test]
fn test_subtraction_recovers_every_year() {
    for year in 1..=3999 {
        let letters = extract(&to_roman(year), ExtractionMode::Uppercase);
        assert_eq!(sum(&letters, SumMode::Subtraction).total, year);
    }
}

#[test]
fn test_can_form_examples() {
    let iv = LetterMultiset::count("IV");
    let ivx = LetterMultiset::count("IVX");
    assert!(can_form("IV", &iv, MatchMode::Subset));
    assert!(!can_form("IV", &ivx, MatchMode::Exact));
    assert!(can_form("IV", &ivx, MatchMode::Subset));
}

#[test]
fn test_extraction_modes() {
    assert_eq!(extract("Vixit", ExtractionMode::All), vec![V, I, X, I]);
    assert!(extract("Year", ExtractionMode::Uppercase).is_empty());
    assert_eq!(
        extract("Lorem\nXYZ\nMid", ExtractionMode::Positional),
        vec![L, M, X, M, D]
    );
}

#[test]
fn test_extraction_never_invents_letters() {
    let text = "The quick brown fox\njumps over the lazy dog";
    for mode in [
        ExtractionMode::All,
        ExtractionMode::Uppercase,
        ExtractionMode::Positional,
    ] {
        let extracted: LetterMultiset = extract(text, mode).iter().collect();
        let present: LetterMultiset = text.chars().filter_map(Symbol::from_folded).collect();
        assert!(extracted.is_subset_of(&present), "mode {mode}");
    }
}

#[test]
fn test_highlight_escapes_passthrough() {
    let html = highlight("<b>'x'</b>", ExtractionMode::Uppercase);
    assert_eq!(html, escape_html("<b>'x'</b>"));

    let html = highlight("a/X", ExtractionMode::Uppercase);
    assert_eq!(html, "a&#x2F;<span class=\"hl\">X</span>");
}

#[test]
fn test_sum_examples() {
    let add = sum(&[I, V], SumMode::Addition);
    assert_eq!(add.total, 6);
    assert_eq!(add.step_labels(), vec!["I=+1", "V=+5"]);

    let sub = sum(&[I, V], SumMode::Subtraction);
    assert_eq!(sub.total, 4);
    assert_eq!(sub.step_labels(), vec!["I=-1", "V=+5"]);
}

#[test]
fn test_search_orders_by_year() {
    let available = LetterMultiset::count("MMCXXIIIIV");
    let results = search(&available, 1, 2000, 10, MatchMode::Subset);
    assert_eq!(results.len(), 10);
    assert!(results.windows(2).all(|w| w[0].year < w[1].year));

    // With enough M, C, X, I and V, 1994 is found ahead of any later year.
    let available = LetterMultiset::count("MMCCXXIIIIV");
    let results = search(&available, 1990, 2100, 10, MatchMode::Subset);
    let position = results.iter().position(|c| c.year == 1994).unwrap();
    assert!(results[..position].iter().all(|c| c.year < 1994));
    assert!(results[position + 1..].iter().all(|c| c.year > 1994));
}

#[test]
fn test_generate_2024() {
    let examples = generate(2024, "MMXXIV");
    assert_eq!(examples.len(), 5);

    let explanation = examples.last().unwrap();
    let marked: LetterMultiset = explanation.marked_symbols().iter().collect();
    assert_eq!(marked, LetterMultiset::count("MMXXIV"));
}

#[test]
fn test_generated_templates_read_back_as_the_year() -> Result<()> {
    let generated = generate_for_year(1776, ExplanationLanguage::En)?;
    for example in &generated.examples {
        let marked = example.marked_symbols();
        let counts: LetterMultiset = marked.iter().collect();
        assert!(can_form(&generated.numeral, &counts, MatchMode::Exact));
        assert_eq!(sum(&marked, SumMode::Addition).total, 1776);
    }
    Ok(())
}

#[test]
fn test_session_round_trip() -> Result<()> {
    let mut session = AnalysisSession::new(ChronogramConfig::default().with_max_candidates(3));
    let request = AnalysisRequest::new(ExtractionMode::Uppercase)
        .with_match_mode(MatchMode::Exact)
        .with_years(Some(1), Some(9999));

    let report = session.analyze("My Dear Child", &request)?;
    assert_eq!(report.letters, "M D C");
    assert_eq!(report.sum.total, 1600);
    assert_eq!(report.sum_numeral, "MDC");
    assert_eq!(report.candidates.len(), 1);
    assert_eq!(report.candidates[0].year, 1600);

    let subset = session.rematch(MatchMode::Subset).unwrap();
    let years: Vec<i64> = subset.iter().map(|c| c.year).collect();
    assert_eq!(years, vec![100, 500, 600]);
    Ok(())
}
