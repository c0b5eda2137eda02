// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the windowed edit distance and the matcher built on it.
//!
//! Checks the distance against a naive full DP, and that the matcher's
//! accept/reject decision agrees with the threshold.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use wikisift::scoring::{match_score, passes_threshold};
use wikisift::{substring_distance_within, FuzzyMatcher};

#[derive(Debug, Arbitrary)]
struct MatchInput {
    word: String,
    field: String,
    /// Threshold numerator out of 255.
    threshold: u8,
}

/// Unbounded semi-global distance, no early exits.
fn naive(pattern: &[char], text: &[char]) -> usize {
    let mut prev: Vec<usize> = (0..=pattern.len()).collect();
    let mut best = pattern.len();
    for &tc in text {
        let mut cur = vec![0; pattern.len() + 1];
        for i in 1..=pattern.len() {
            let cost = usize::from(pattern[i - 1] != tc);
            cur[i] = (prev[i] + 1).min(cur[i - 1] + 1).min(prev[i - 1] + cost);
        }
        best = best.min(cur[pattern.len()]);
        prev = cur;
    }
    best
}

fuzz_target!(|input: MatchInput| {
    // Cap lengths to avoid timeouts
    let word: Vec<char> = input.word.chars().take(24).collect();
    let field: Vec<char> = input.field.chars().take(200).collect();
    if word.is_empty() || field.is_empty() {
        return;
    }

    let expected = naive(&word, &field);
    for max in [0, 1, 2, word.len()] {
        let got = substring_distance_within(&word, &field, max);
        assert_eq!(got, (expected <= max).then_some(expected), "max = {}", max);
    }

    let threshold = f64::from(input.threshold) / 255.0;
    let found = FuzzyMatcher::new(threshold).find(&word, &field);
    let accepted = passes_threshold(match_score(expected, word.len()), threshold);
    assert_eq!(found.is_some(), accepted);
    if let Some(m) = found {
        assert!((0.0..=1.0).contains(&m.similarity()));
    }
});
