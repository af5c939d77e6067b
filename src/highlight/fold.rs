//! Locale-invariant case folding and substring search.
//!
//! Characters are compared one by one, so a match always covers exactly as many
//! chars of the searched text as the term has and never splits a code point.

use std::ops::Range;

/// Compare two chars ignoring case, independent of any locale
pub fn chars_eq_ignore_case(a: char, b: char) -> bool {
    if a == b {
        return true;
    }
    if a.is_ascii() && b.is_ascii() {
        return a.eq_ignore_ascii_case(&b);
    }
    a.to_lowercase().eq(b.to_lowercase())
}

/// Find the leftmost case-insensitive occurrence of `term` in `text` starting at
/// byte offset `from`. The returned byte range points into `text` itself.
///
/// `from` must lie on a char boundary. An empty term never matches.
pub fn find_from(text: &str, from: usize, term: &str) -> Option<Range<usize>> {
    if term.is_empty() || from > text.len() {
        return None;
    }

    let haystack = &text[from..];
    for (offset, _) in haystack.char_indices() {
        if let Some(len) = match_len_at(&haystack[offset..], term) {
            let start = from + offset;
            return Some(start..start + len);
        }
    }
    None
}

/// Byte length of the prefix of `candidate` that equals `term` ignoring case
fn match_len_at(candidate: &str, term: &str) -> Option<usize> {
    let mut candidate_chars = candidate.char_indices();
    for term_char in term.chars() {
        let (_, text_char) = candidate_chars.next()?;
        if !chars_eq_ignore_case(text_char, term_char) {
            return None;
        }
    }
    // Position of the first char after the match, or the end of the candidate
    Some(
        candidate_chars
            .next()
            .map(|(idx, _)| idx)
            .unwrap_or(candidate.len()),
    )
}
