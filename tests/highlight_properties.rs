use match_highlight::highlight::fold::chars_eq_ignore_case;
use match_highlight::{highlight, HighlightSpec, MatchResult};
use proptest::prelude::*;

/// Small alphabet so terms actually hit the text
fn text_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop::sample::select(vec!['a', 'A', 'b', 'B', 'c', 'é', 'É', ' ', ',', '\n']),
        0..60,
    )
    .prop_map(|chars| chars.into_iter().collect())
}

fn raw_terms_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop::sample::select(vec!['a', 'B', 'c', 'É', ' ', ',']),
        0..12,
    )
    .prop_map(|chars| chars.into_iter().collect())
}

/// Does `term` match `text` at byte offset `at`, ignoring case
fn matches_at(text: &str, at: usize, term: &str) -> Option<usize> {
    let mut text_chars = text[at..].char_indices();
    for term_char in term.chars() {
        let (_, c) = text_chars.next()?;
        if !chars_eq_ignore_case(c, term_char) {
            return None;
        }
    }
    Some(text_chars.next().map(|(i, _)| i).unwrap_or(text.len() - at))
}

/// Straightforward leftmost-earliest scan used as an oracle
fn oracle(text: &str, raw: &str) -> Vec<(String, bool)> {
    if text.trim().is_empty() {
        return Vec::new();
    }
    let spec = HighlightSpec::parse(raw);
    if spec.is_empty() {
        return vec![(text.to_string(), false)];
    }

    let mut out = Vec::new();
    let mut plain_start = 0;
    let mut cursor = 0;
    while cursor < text.len() {
        let hit = spec
            .terms()
            .iter()
            .find_map(|term| matches_at(text, cursor, term));
        match hit {
            Some(len) => {
                if plain_start < cursor {
                    out.push((text[plain_start..cursor].to_string(), false));
                }
                out.push((text[cursor..cursor + len].to_string(), true));
                cursor += len;
                plain_start = cursor;
            }
            None => {
                cursor += text[cursor..].chars().next().map_or(1, char::len_utf8);
            }
        }
    }
    if plain_start < text.len() {
        out.push((text[plain_start..].to_string(), false));
    }
    out
}

fn as_pairs(result: &MatchResult) -> Vec<(String, bool)> {
    result
        .segments
        .iter()
        .map(|s| (s.text.clone(), s.is_match))
        .collect()
}

proptest! {
    // Concatenated segments give back the text exactly
    #[test]
    fn prop_reconstructs_text(text in text_strategy(), raw in raw_terms_strategy()) {
        let result = highlight(&text, &raw);
        if text.trim().is_empty() {
            prop_assert!(result.is_empty());
        } else {
            prop_assert_eq!(result.plain_text(), text);
        }
    }

    // No empty segments and no two plain segments in a row
    #[test]
    fn prop_segments_are_a_clean_partition(text in text_strategy(), raw in raw_terms_strategy()) {
        let result = highlight(&text, &raw);
        prop_assert!(result.segments.iter().all(|s| !s.text.is_empty()));
        for pair in result.segments.windows(2) {
            prop_assert!(pair[0].is_match || pair[1].is_match);
        }
    }

    #[test]
    fn prop_count_matches_segments(text in text_strategy(), raw in raw_terms_strategy()) {
        let result = highlight(&text, &raw);
        let matched = result.segments.iter().filter(|s| s.is_match).count();
        prop_assert_eq!(result.match_count, matched);
    }

    #[test]
    fn prop_idempotent(text in text_strategy(), raw in raw_terms_strategy()) {
        prop_assert_eq!(highlight(&text, &raw), highlight(&text, &raw));
    }

    // Cached scanning agrees with a naive position-by-position scan
    #[test]
    fn prop_agrees_with_naive_scan(text in text_strategy(), raw in raw_terms_strategy()) {
        let result = highlight(&text, &raw);
        prop_assert_eq!(as_pairs(&result), oracle(&text, &raw));
    }
}

#[test]
fn documented_examples() {
    let result = highlight("hello world", "");
    assert_eq!(as_pairs(&result), vec![("hello world".to_string(), false)]);

    let result = highlight("Hello World", "hello");
    assert_eq!(
        as_pairs(&result),
        vec![("Hello".to_string(), true), (" World".to_string(), false)]
    );

    let result = highlight("cat and dog", "dog, cat");
    assert_eq!(result.match_count, 2);
    assert_eq!(
        as_pairs(&result),
        vec![
            ("cat".to_string(), true),
            (" and ".to_string(), false),
            ("dog".to_string(), true)
        ]
    );

    let result = highlight("aabb", "a,b");
    assert_eq!(result.match_count, 4);
    assert_eq!(result.segments.len(), 4);

    let result = highlight("xyz", "q");
    assert_eq!(as_pairs(&result), vec![("xyz".to_string(), false)]);
    assert_eq!(result.match_count, 0);
}
