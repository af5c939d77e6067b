//! Highlight term parsing.
//!
//! Turns the raw highlight input typed by a user into an ordered list of terms

use crate::constants::TERM_DELIMITERS;

/// The set of terms to highlight
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum HighlightSpec {
    /// Nothing to highlight
    #[default]
    Empty,
    /// Non-empty, distinct, non-empty terms in first-occurrence order
    Terms(Vec<String>),
}

impl HighlightSpec {
    /// Parse a raw highlight input.
    ///
    /// Input with a space or comma is split on those characters and empty tokens are
    /// dropped. Input without any delimiter is used verbatim as a single term.
    pub fn parse(raw: &str) -> Self {
        if raw.trim().is_empty() {
            return HighlightSpec::Empty;
        }

        if !raw.contains(&TERM_DELIMITERS[..]) {
            return HighlightSpec::Terms(vec![raw.to_string()]);
        }

        let mut terms: Vec<String> = Vec::new();
        for token in raw.split(&TERM_DELIMITERS[..]).filter(|t| !t.is_empty()) {
            if !terms.iter().any(|existing| existing == token) {
                terms.push(token.to_string());
            }
        }

        if terms.is_empty() {
            HighlightSpec::Empty
        } else {
            HighlightSpec::Terms(terms)
        }
    }

    /// The terms in priority order (empty slice for `Empty`)
    pub fn terms(&self) -> &[String] {
        match self {
            HighlightSpec::Empty => &[],
            HighlightSpec::Terms(terms) => terms.as_slice(),
        }
    }

    /// Check if there is nothing to highlight
    pub fn is_empty(&self) -> bool {
        matches!(self, HighlightSpec::Empty)
    }
}
