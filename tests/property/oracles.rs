//! Differential tests: the bounded windowed DP against plain `strsim::levenshtein`.

use proptest::prelude::*;
use wikisift::scoring::{match_score, passes_threshold};
use wikisift::{substring_distance_within, FuzzyMatcher};

/// Minimum distance from `pattern` to any substring of `text` (the empty one included).
fn oracle_substring_distance(pattern: &str, text: &str) -> usize {
    let chars: Vec<char> = text.chars().collect();
    let mut best = pattern.chars().count();
    for start in 0..chars.len() {
        for end in start + 1..=chars.len() {
            let window: String = chars[start..end].iter().collect();
            best = best.min(strsim::levenshtein(pattern, &window));
        }
    }
    best
}

fn small_word() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-e]{1,6}").unwrap()
}

fn small_text() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-e ]{1,14}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(400))]

    #[test]
    fn prop_substring_distance_matches_oracle(
        pattern in small_word(),
        text in small_text(),
        max in 0usize..7,
    ) {
        let p: Vec<char> = pattern.chars().collect();
        let t: Vec<char> = text.chars().collect();
        let expected = oracle_substring_distance(&pattern, &text);
        let got = substring_distance_within(&p, &t, max);
        if expected <= max {
            prop_assert_eq!(got, Some(expected));
        } else {
            prop_assert_eq!(got, None);
        }
    }

    #[test]
    fn prop_matcher_accepts_iff_within_threshold(
        word in small_word(),
        field in small_text(),
        threshold in 0.0f64..=1.0,
    ) {
        let len = word.chars().count();
        let expected = oracle_substring_distance(&word, &field);
        let accepted = passes_threshold(match_score(expected, len), threshold);

        let found = FuzzyMatcher::new(threshold).find_str(&word, &field);
        prop_assert_eq!(found.is_some(), accepted);
        if let Some(m) = found {
            prop_assert_eq!(m.errors, expected);
            prop_assert!(m.similarity() >= 0.0 && m.similarity() <= 1.0);
        }
    }

    #[test]
    fn prop_exact_occurrence_scores_zero(
        prefix in small_text(),
        word in small_word(),
        suffix in small_text(),
    ) {
        let field = format!("{}{}{}", prefix, word, suffix);
        let m = FuzzyMatcher::new(0.0).find_str(&word, &field);
        prop_assert_eq!(m.map(|m| m.score), Some(0.0));
    }
}
