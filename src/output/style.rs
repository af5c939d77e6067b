//! Highlight colors.
//!
//! Parses user supplied color names and hex codes into `colored` colors

use crate::constants::*;
use crate::{HighlightError, Result};
use colored::Color;
use regex::Regex;
use std::sync::OnceLock;

// Compile once, shared by every parse
static HEX_COLOR: OnceLock<Regex> = OnceLock::new();

/// Foreground and background used for matched runs
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HighlightStyle {
    pub foreground: Color,
    pub background: Color,
}

impl HighlightStyle {
    pub fn new(foreground: Color, background: Color) -> Self {
        Self {
            foreground,
            background,
        }
    }

    /// Build a style from optional color strings, falling back to the defaults
    pub fn from_options(foreground: Option<&str>, background: Option<&str>) -> Result<Self> {
        let foreground = parse_color(foreground.unwrap_or(DEFAULT_HIGHLIGHT_FOREGROUND))?;
        let background = parse_color(background.unwrap_or(DEFAULT_HIGHLIGHT_BACKGROUND))?;
        Ok(Self::new(foreground, background))
    }
}

impl Default for HighlightStyle {
    /// White on blue
    fn default() -> Self {
        Self::new(Color::White, Color::Blue)
    }
}

/// Parse a color name (`"red"`, `"bright blue"`) or a hex code (`"#1e90ff"`)
pub fn parse_color(value: &str) -> Result<Color> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(HighlightError::invalid_color(value, "Color cannot be empty"));
    }

    let hex = HEX_COLOR.get_or_init(|| {
        Regex::new(r"^#?([0-9a-fA-F]{2})([0-9a-fA-F]{2})([0-9a-fA-F]{2})$")
            .expect("hex color regex is valid")
    });

    if let Some(caps) = hex.captures(trimmed) {
        // Two hex digits per group
        let channel = |idx: usize| u8::from_str_radix(&caps[idx], 16).unwrap_or(0);
        return Ok(Color::TrueColor {
            r: channel(1),
            g: channel(2),
            b: channel(3),
        });
    }

    trimmed.parse::<Color>().map_err(|_| {
        HighlightError::invalid_color(
            value,
            "Expected a color name like 'blue' or a hex code like '#1e90ff'",
        )
    })
}
