//! Inline highlighting of extracted letters.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::extract::{ExtractionMode, select};

/// Configuration for the highlight marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HighlightConfig {
    /// HTML tag wrapping a highlighted character (e.g. "span", "mark").
    pub tag: String,
    /// CSS class to add to highlight tags.
    pub css_class: Option<String>,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        HighlightConfig {
            tag: "span".to_string(),
            css_class: Some("hl".to_string()),
        }
    }
}

impl HighlightConfig {
    /// Create a new highlight configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the HTML tag for highlighting.
    pub fn tag(mut self, tag: String) -> Self {
        self.tag = tag;
        self
    }

    /// Set the CSS class for highlight tags.
    pub fn css_class(mut self, css_class: String) -> Self {
        self.css_class = Some(css_class);
        self
    }

    /// Drop the CSS class.
    pub fn without_css_class(mut self) -> Self {
        self.css_class = None;
        self
    }

    /// Build the opening HTML tag.
    pub fn opening_tag(&self) -> String {
        if let Some(ref css_class) = self.css_class {
            format!("<{} class=\"{}\">", self.tag, escape_html(css_class))
        } else {
            format!("<{}>", self.tag)
        }
    }

    /// Build the closing HTML tag.
    pub fn closing_tag(&self) -> String {
        format!("</{}>", self.tag)
    }
}

/// Wraps selected characters in the configured marker and escapes the rest.
#[derive(Debug, Clone, Default)]
pub struct Highlighter {
    config: HighlightConfig,
}

impl Highlighter {
    /// Create a new highlighter.
    pub fn new(config: HighlightConfig) -> Self {
        Highlighter { config }
    }

    pub fn config(&self) -> &HighlightConfig {
        &self.config
    }

    /// Render `text` with every character `mode` would extract marked.
    ///
    /// The selection is the one [`crate::extract::extract`] uses, so the
    /// marked characters are exactly the extracted ones, in their original
    /// case.
    pub fn highlight(&self, text: &str, mode: ExtractionMode) -> String {
        let selected: HashSet<usize> = select(text, mode).into_iter().map(|s| s.index).collect();

        let mut html = String::with_capacity(text.len() + selected.len() * 24);
        for (i, ch) in text.chars().enumerate() {
            if selected.contains(&i) {
                self.push_marked(&mut html, ch);
            } else {
                push_escaped(&mut html, ch);
            }
        }
        html
    }

    /// Append `ch` wrapped in the marker.
    pub fn push_marked(&self, out: &mut String, ch: char) {
        out.push_str(&self.config.opening_tag());
        push_escaped(out, ch);
        out.push_str(&self.config.closing_tag());
    }

    /// `ch` wrapped in the marker.
    pub fn mark(&self, ch: char) -> String {
        let mut out = String::new();
        self.push_marked(&mut out, ch);
        out
    }
}

/// Highlight with the default `<span class="hl">` marker.
pub fn highlight(text: &str, mode: ExtractionMode) -> String {
    Highlighter::default().highlight(text, mode)
}

/// Escape the HTML-significant characters `& < > " ' /`.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        push_escaped(&mut out, ch);
    }
    out
}

pub(crate) fn push_escaped(out: &mut String, ch: char) {
    match ch {
        '&' => out.push_str("&amp;"),
        '<' => out.push_str("&lt;"),
        '>' => out.push_str("&gt;"),
        '"' => out.push_str("&quot;"),
        '\'' => out.push_str("&#x27;"),
        '/' => out.push_str("&#x2F;"),
        _ => out.push(ch),
    }
}
