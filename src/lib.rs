//! Match Highlight - case-insensitive multi-term highlighting of text blocks
//!
//! Splits a block of text into matched and plain runs for one or more search
//! terms and counts the matches, with a small terminal front end on top

pub mod cli;
pub mod constants;
pub mod error;
pub mod highlight;
pub mod input;
pub mod logging;
pub mod output;
pub mod validation;

// Re-export `Cli` for use from `main`
pub use cli::Cli;
pub use error::{HighlightError, Result};
pub use highlight::{highlight, HighlightBlock, HighlightSpec, MatchResult, Segment};
pub use output::{render_ansi, HighlightStyle};
