//! Analysis sessions.
//!
//! An [`AnalysisSession`] runs the full pipeline over one text (highlight,
//! extraction, summation, anagram search) and keeps the most recent
//! extraction so the anagram search can be re-run under another
//! [`MatchMode`] without extracting again. Each successful [`analyze`] call
//! replaces the cached extraction.
//!
//! [`analyze`]: AnalysisSession::analyze

use log::{debug, info};
use serde::Serialize;

use crate::anagram::{YearCandidate, search};
use crate::config::{ChronogramConfig, YearRange};
use crate::error::{ChronogramError, Result};
use crate::extract::{Extraction, ExtractionMode};
use crate::highlight::Highlighter;
use crate::multiset::MatchMode;
use crate::sum::{SumMode, Summation, sum};

/// Parameters of one analysis.
#[derive(Debug, Clone, Default)]
pub struct AnalysisRequest {
    pub extraction_mode: ExtractionMode,
    pub match_mode: MatchMode,
    pub min_year: Option<i64>,
    pub max_year: Option<i64>,
}

impl AnalysisRequest {
    pub fn new(extraction_mode: ExtractionMode) -> Self {
        Self {
            extraction_mode,
            ..Default::default()
        }
    }

    pub fn with_match_mode(mut self, match_mode: MatchMode) -> Self {
        self.match_mode = match_mode;
        self
    }

    pub fn with_years(mut self, min_year: Option<i64>, max_year: Option<i64>) -> Self {
        self.min_year = min_year;
        self.max_year = max_year;
        self
    }
}

/// Everything an analysis produces.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub highlighted: String,
    pub extraction: Extraction,
    pub letters: String,
    pub counts: String,
    pub sum: Summation,
    pub sum_numeral: String,
    pub match_mode: MatchMode,
    pub years: YearRange,
    pub candidates: Vec<YearCandidate>,
    pub candidate_limit: usize,
}

impl AnalysisReport {
    /// One-line description of the anagram result.
    pub fn candidate_summary(&self) -> String {
        candidate_summary(&self.candidates, self.candidate_limit, self.years)
    }
}

/// Human summary for a candidate list.
pub fn candidate_summary(candidates: &[YearCandidate], limit: usize, years: YearRange) -> String {
    if candidates.is_empty() {
        format!("no candidates in {years}")
    } else {
        format!("{} candidate(s) (limit {limit})", candidates.len())
    }
}

/// The extraction kept between calls.
#[derive(Debug, Clone)]
struct CachedExtraction {
    extraction: Extraction,
    years: YearRange,
}

/// Runs analyses and caches the most recent extraction.
#[derive(Debug, Clone)]
pub struct AnalysisSession {
    config: ChronogramConfig,
    highlighter: Highlighter,
    cached: Option<CachedExtraction>,
}

impl AnalysisSession {
    /// Create a new session.
    pub fn new(config: ChronogramConfig) -> Self {
        let highlighter = Highlighter::new(config.highlight.clone());
        info!("analysis session created (input limit {} chars)", config.max_input_chars);
        Self {
            config,
            highlighter,
            cached: None,
        }
    }

    pub fn config(&self) -> &ChronogramConfig {
        &self.config
    }

    /// The cached extraction, if any.
    pub fn last_extraction(&self) -> Option<&Extraction> {
        self.cached.as_ref().map(|c| &c.extraction)
    }

    /// Analyze `text` and replace the cached extraction.
    ///
    /// Fails only if `text` is longer than the configured limit; the cache is
    /// left untouched in that case.
    pub fn analyze(&mut self, text: &str, request: &AnalysisRequest) -> Result<AnalysisReport> {
        let len = text.chars().count();
        if len > self.config.max_input_chars {
            return Err(ChronogramError::input_too_long(len, self.config.max_input_chars));
        }

        let years = YearRange::sanitize(request.min_year, request.max_year, &self.config);
        let highlighted = self.highlighter.highlight(text, request.extraction_mode);
        let extraction = Extraction::from_text(text, request.extraction_mode);
        debug!(
            "extracted {} letters ({}) in {} mode",
            extraction.letters.len(),
            extraction.counts.display_counts(),
            request.extraction_mode
        );

        let summation = sum(&extraction.letters, SumMode::Addition);
        let candidates = self.search_candidates(&extraction, years, request.match_mode);

        let report = AnalysisReport {
            highlighted,
            letters: extraction.display_letters(),
            counts: extraction.counts.display_counts(),
            sum_numeral: summation.numeral(),
            sum: summation,
            match_mode: request.match_mode,
            years,
            candidates,
            candidate_limit: self.config.max_candidates,
            extraction: extraction.clone(),
        };

        self.cached = Some(CachedExtraction { extraction, years });
        Ok(report)
    }

    /// Re-run the anagram search on the cached extraction under `mode`.
    ///
    /// Returns `None` if nothing has been analyzed yet or the last extraction
    /// found no letters.
    pub fn rematch(&self, mode: MatchMode) -> Option<Vec<YearCandidate>> {
        let cached = self.cached.as_ref().filter(|c| !c.extraction.is_empty())?;
        debug!("re-running anagram search in {mode} mode from cache");
        Some(self.search_candidates(&cached.extraction, cached.years, mode))
    }

    /// Drop the cached extraction.
    pub fn clear(&mut self) {
        self.cached = None;
    }

    fn search_candidates(
        &self,
        extraction: &Extraction,
        years: YearRange,
        mode: MatchMode,
    ) -> Vec<YearCandidate> {
        if extraction.is_empty() {
            return Vec::new();
        }
        search(&extraction.counts, years.min, years.max, self.config.max_candidates, mode)
    }
}

impl Default for AnalysisSession {
    fn default() -> Self {
        Self::new(ChronogramConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::highlight::HighlightConfig;

    #[test]
    fn test_analyze_report() {
        let mut session = AnalysisSession::default();
        let request =
            AnalysisRequest::new(ExtractionMode::Uppercase).with_years(Some(1990), Some(1999));
        let report = session.analyze("Mortui Carissimi aMiCi eXcIVs", &request).unwrap();

        assert_eq!(report.letters, "M C M C X I V");
        assert_eq!(report.counts, "I:1  V:1  X:1  L:0  C:2  D:0  M:2");
        assert_eq!(report.sum.total, 1000 + 100 + 1000 + 100 + 10 + 1 + 5);
        assert_eq!(report.sum_numeral, "MMCCXVI");
        let years: Vec<i64> = report.candidates.iter().map(|c| c.year).collect();
        assert_eq!(years, vec![1990, 1991, 1994, 1995, 1996]);
        assert_eq!(report.candidate_summary(), "5 candidate(s) (limit 12)");
    }

    #[test]
    fn test_rematch_uses_cache() {
        let mut session = AnalysisSession::default();
        assert!(session.rematch(MatchMode::Exact).is_none());

        let request = AnalysisRequest::new(ExtractionMode::All).with_years(Some(1900), Some(2000));
        let report = session.analyze("mcmxciv", &request).unwrap();
        assert!(report.candidates.len() > 1);

        let exact = session.rematch(MatchMode::Exact).unwrap();
        assert_eq!(exact.len(), 1);
        assert_eq!(exact[0].year, 1994);

        session.clear();
        assert!(session.rematch(MatchMode::Subset).is_none());
    }

    #[test]
    fn test_empty_extraction() {
        let mut session = AnalysisSession::default();
        let report = session
            .analyze("hello", &AnalysisRequest::new(ExtractionMode::Uppercase))
            .unwrap();
        assert!(report.extraction.is_empty());
        assert!(report.candidates.is_empty());
        assert_eq!(report.sum.total, 0);
        assert_eq!(report.candidate_summary(), "no candidates in 1500-2100");
        assert!(session.rematch(MatchMode::Subset).is_none());
    }

    #[test]
    fn test_input_limit_keeps_previous_cache() {
        let config = ChronogramConfig::default().with_max_input_chars(8);
        let mut session = AnalysisSession::new(config);
        session
            .analyze("MDC", &AnalysisRequest::new(ExtractionMode::All))
            .unwrap();

        let err = session
            .analyze("MDCCLXXVI is long", &AnalysisRequest::new(ExtractionMode::All))
            .unwrap_err();
        assert!(matches!(err, ChronogramError::InputTooLong { len: 17, max: 8 }));
        assert_eq!(session.last_extraction().unwrap().display_letters(), "M D C");
    }

    #[test]
    fn test_configured_marker_and_defaults() {
        let config = ChronogramConfig::default()
            .with_highlight(HighlightConfig::new().tag("mark".to_string()).without_css_class())
            .with_default_years(1600, 1700);
        let mut session = AnalysisSession::new(config);
        let report = session
            .analyze("Dux", &AnalysisRequest::new(ExtractionMode::Uppercase))
            .unwrap();
        assert_eq!(report.highlighted, "<mark>D</mark>ux");
        assert_eq!(report.years, YearRange { min: 1600, max: 1700 });
        assert!(report.candidates.is_empty());
        assert_eq!(report.candidate_summary(), "no candidates in 1600-1700");
    }

    #[test]
    fn test_invalid_years_fall_back_to_defaults() {
        let mut session = AnalysisSession::default();
        let request = AnalysisRequest::new(ExtractionMode::All).with_years(Some(-3), Some(2000));
        let report = session.analyze("MD", &request).unwrap();
        assert_eq!(report.years, YearRange { min: 1500, max: 2000 });
        assert_eq!(report.candidates[0].year, 1500);
    }
}
