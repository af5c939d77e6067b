//! Highlighted text block state
//!
//! Holds the two inputs of a highlight computation together with the latest
//! result. Every setter recomputes synchronously, so the result never lags
//! behind the inputs.

use super::{highlight, MatchResult};
use crate::output::HighlightStyle;

/// Text block with highlighted search matches
#[derive(Debug, Clone, Default)]
pub struct HighlightBlock {
    /// Main text being displayed
    text: String,
    /// Raw highlight input (space or comma separated terms)
    highlight_text: String,
    /// Colors used for matched runs
    style: HighlightStyle,
    /// Result for the current text and highlight input
    result: MatchResult,
}

impl HighlightBlock {
    /// Create a new block and compute its initial highlighting
    pub fn new(text: impl Into<String>, highlight_text: impl Into<String>) -> Self {
        let mut block = Self {
            text: text.into(),
            highlight_text: highlight_text.into(),
            style: HighlightStyle::default(),
            result: MatchResult::default(),
        };
        block.refresh();
        block
    }

    /// Replace the main text; `None` is treated as empty
    pub fn set_text(&mut self, text: Option<&str>) {
        self.text = text.unwrap_or_default().to_string();
        self.refresh();
    }

    /// Replace the highlight input; `None` is treated as empty
    pub fn set_highlight_text(&mut self, highlight_text: Option<&str>) {
        self.highlight_text = highlight_text.unwrap_or_default().to_string();
        self.refresh();
    }

    /// Change the colors of matched runs
    pub fn set_style(&mut self, style: HighlightStyle) {
        self.style = style;
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn highlight_text(&self) -> &str {
        &self.highlight_text
    }

    pub fn style(&self) -> &HighlightStyle {
        &self.style
    }

    /// Result for the current inputs
    pub fn result(&self) -> &MatchResult {
        &self.result
    }

    /// Number of matches in the current result
    pub fn match_count(&self) -> usize {
        self.result.match_count
    }

    /// Render the current result for a terminal
    pub fn render(&self, colorize: bool) -> String {
        crate::output::render_ansi(&self.result, &self.style, colorize)
    }

    fn refresh(&mut self) {
        self.result = highlight(&self.text, &self.highlight_text);
    }
}
