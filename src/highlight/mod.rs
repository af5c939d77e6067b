//! Match highlighting module
//!
//! Partitions a block of text into matched and plain segments for a set of
//! highlight terms using case-insensitive, leftmost-earliest matching

pub mod block;
pub mod fold;
pub mod terms;

pub use block::HighlightBlock;
pub use terms::HighlightSpec;

use std::ops::Range;

/// A contiguous run of the main text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub is_match: bool,
}

impl Segment {
    fn plain(text: &str) -> Self {
        Self {
            text: text.to_string(),
            is_match: false,
        }
    }

    fn matched(text: &str) -> Self {
        Self {
            text: text.to_string(),
            is_match: true,
        }
    }
}

/// Result of one highlight computation
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MatchResult {
    /// Segments in text order; concatenated they give back the main text
    pub segments: Vec<Segment>,
    /// Number of matched segments
    pub match_count: usize,
}

impl MatchResult {
    /// Check if there are no segments at all
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Iterate over the text of matched segments
    pub fn matched_texts(&self) -> impl Iterator<Item = &str> {
        self.segments
            .iter()
            .filter(|segment| segment.is_match)
            .map(|segment| segment.text.as_str())
    }

    /// Concatenate all segments back into the original text
    pub fn plain_text(&self) -> String {
        self.segments
            .iter()
            .map(|segment| segment.text.as_str())
            .collect()
    }
}

/// Highlight every occurrence of the terms in `raw_highlight_input` within `main_text`.
///
/// Empty or whitespace-only text yields no segments. Empty or whitespace-only
/// highlight input yields the whole text as one plain segment.
pub fn highlight(main_text: &str, raw_highlight_input: &str) -> MatchResult {
    if main_text.trim().is_empty() {
        return MatchResult::default();
    }

    let spec = HighlightSpec::parse(raw_highlight_input);
    if spec.is_empty() {
        return MatchResult {
            segments: vec![Segment::plain(main_text)],
            match_count: 0,
        };
    }

    crate::logging::trace_log(&format!(
        "Highlighting {} bytes with terms {:?}",
        main_text.len(),
        spec.terms()
    ));

    let result = scan(main_text, spec.terms());

    crate::logging::debug_log(&format!(
        "Highlight produced {} segments, {} matches",
        result.segments.len(),
        result.match_count
    ));

    result
}

/// Walk the text left to right, always taking the earliest match of any term.
fn scan(text: &str, terms: &[String]) -> MatchResult {
    let mut segments = Vec::new();
    let mut match_count = 0;
    let mut cursor = 0;

    // Next known match per term; `None` once a term has no match left
    let mut next_matches: Vec<Option<Range<usize>>> = terms
        .iter()
        .map(|term| fold::find_from(text, 0, term))
        .collect();

    loop {
        // Matches that start before the cursor are stale, search again from it
        for (term, next) in terms.iter().zip(next_matches.iter_mut()) {
            if matches!(next, Some(range) if range.start < cursor) {
                *next = fold::find_from(text, cursor, term);
            }
        }

        let winner = earliest_match(&next_matches);
        let range = match winner {
            Some(range) => range,
            None => {
                if cursor < text.len() {
                    segments.push(Segment::plain(&text[cursor..]));
                }
                break;
            }
        };

        if range.start > cursor {
            segments.push(Segment::plain(&text[cursor..range.start]));
        }
        segments.push(Segment::matched(&text[range.clone()]));
        match_count += 1;
        cursor = range.end;
    }

    MatchResult {
        segments,
        match_count,
    }
}

/// Smallest start wins; ties go to the term listed first.
fn earliest_match(next_matches: &[Option<Range<usize>>]) -> Option<Range<usize>> {
    let mut best: Option<&Range<usize>> = None;
    for range in next_matches.iter().flatten() {
        match best {
            Some(current) if current.start <= range.start => {}
            _ => best = Some(range),
        }
    }
    best.cloned()
}
