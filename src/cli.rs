//! Command Line Interface module
//!
//! Handles command-line argument parsing using clap
//!

use crate::input::InputSource;
use crate::output::HighlightStyle;
use crate::{HighlightError, Result};
use clap::Parser;
use std::path::PathBuf;

/// Match Highlight - highlight search terms in a block of text
#[derive(Parser, Debug)]
#[command(
    name = "match-highlight",
    about = "Match Highlight - highlight search terms in a block of text",
    long_about = "Match Highlight - case-insensitive highlighting of one or more search terms

    Terms are separated by spaces or commas. When several terms could match,
    the one starting first wins; on a tie the term listed first wins.

    EXAMPLES:
        match-highlight \"dog, cat\" \"cat and dog\"
        match-highlight hello -f notes.txt
        cat notes.txt | match-highlight \"todo fixme\"
        match-highlight -c error -f app.log # Print only the match count
        match-highlight --fg black --bg \"#ffff00\" warn -f app.log
    "
)]
#[command(version)]
pub struct Cli {
    /// Terms to highlight
    #[arg(help = "Terms to highlight, separated by spaces or commas")]
    pub terms: String,

    /// Text to highlight
    #[arg(help = "Text to highlight (default: read from --file or stdin)")]
    pub text: Option<String>,

    /// Read the text from a file
    #[arg(short, long, help = "Read the text to highlight from a file")]
    pub file: Option<PathBuf>,

    /// Highlight foreground color
    #[arg(long = "fg", help = "Foreground color of matches (default: white)")]
    pub foreground: Option<String>,

    /// Highlight background color
    #[arg(long = "bg", help = "Background color of matches (default: blue)")]
    pub background: Option<String>,

    /// Only print the match count
    #[arg(short, long, help = "Print only the number of matches")]
    pub count: bool,

    /// Disable colors
    #[arg(long, help = "Print the text without colors")]
    pub no_color: bool,

    /// debug mode
    #[arg(
        short,
        long,
        help = "Debug mode (logging to a temp file with timestamps)"
    )]
    pub debug: bool,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate command line arguments
    pub fn validate(&self) -> Result<()> {
        if self.text.is_some() && self.file.is_some() {
            return Err(HighlightError::InvalidArguments(
                "Give the text either inline or with --file, not both".to_string(),
            ));
        }
        Ok(())
    }

    /// Get the source of the main text
    pub fn input_source(&self) -> InputSource {
        match (&self.text, &self.file) {
            (Some(text), _) => InputSource::Inline(text.clone()),
            (None, Some(path)) => InputSource::File(path.clone()),
            (None, None) => InputSource::Stdin,
        }
    }

    /// Get the highlight colors
    pub fn style(&self) -> Result<HighlightStyle> {
        HighlightStyle::from_options(self.foreground.as_deref(), self.background.as_deref())
    }
}
