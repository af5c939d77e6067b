//! Terminal rendering of highlight results

use super::HighlightStyle;
use crate::highlight::MatchResult;
use colored::Colorize;

/// Render segments as a single string for a terminal.
///
/// Matched segments get the style's foreground and background, plain segments
/// are left in the terminal's own color. Without `colorize` the original text
/// comes back unchanged.
pub fn render_ansi(result: &MatchResult, style: &HighlightStyle, colorize: bool) -> String {
    if !colorize {
        return result.plain_text();
    }

    result
        .segments
        .iter()
        .map(|segment| {
            if segment.is_match {
                segment
                    .text
                    .color(style.foreground)
                    .on_color(style.background)
                    .to_string()
            } else {
                segment.text.clone()
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::highlight::highlight;

    #[test]
    fn test_render_plain() {
        let result = highlight("cat and dog", "dog cat");
        let rendered = render_ansi(&result, &HighlightStyle::default(), false);
        assert_eq!(rendered, "cat and dog");
    }

    #[test]
    fn test_render_empty_result() {
        let result = highlight("", "dog");
        assert_eq!(render_ansi(&result, &HighlightStyle::default(), true), "");
    }

    #[test]
    fn test_render_colored() {
        // Force colors on regardless of whether the test runner has a tty
        colored::control::set_override(true);
        let result = highlight("cat and dog", "dog");
        let rendered = render_ansi(&result, &HighlightStyle::default(), true);

        assert!(rendered.starts_with("cat and "));
        assert!(rendered.contains("\x1b["));
        assert!(rendered.contains("dog"));
        assert_ne!(rendered, "cat and dog");
    }
}
