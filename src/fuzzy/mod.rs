// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy matching: typo tolerance via windowed edit distance.
//!
//! The matcher looks for the closest occurrence of a query word anywhere in a
//! field. Where it lands does not matter: a hit at the end of a long page body
//! scores the same as one at the start. The number of tolerated edits grows
//! with the word length, bounded by the threshold.

mod levenshtein;

pub use levenshtein::*;

use crate::scoring::{error_budget, match_score, passes_threshold, similarity};

/// A successful (word, field) comparison.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldMatch {
    /// Edits needed to turn the word into its closest occurrence.
    pub errors: usize,
    /// `errors / word_len`; 0.0 is exact.
    pub score: f64,
}

impl FieldMatch {
    /// Similarity in `[0, 1]`, 1.0 being exact.
    pub fn similarity(&self) -> f64 {
        similarity(self.score)
    }
}

/// Bounded approximate matcher for one normalized word against one normalized field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FuzzyMatcher {
    threshold: f64,
}

impl FuzzyMatcher {
    /// `threshold` is on the score scale (0 = exact only, 1 = accept anything)
    /// and is expected to be validated already.
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Compare `word` to `field`. `None` means rejected.
    ///
    /// Both sides must already be normalized. An empty field never matches;
    /// an empty word is never a valid query and is rejected as well.
    pub fn find(&self, word: &[char], field: &[char]) -> Option<FieldMatch> {
        if word.is_empty() || field.is_empty() {
            return None;
        }
        let budget = error_budget(self.threshold, word.len());
        let errors = substring_distance_within(word, field, budget)?;
        let score = match_score(errors, word.len());
        passes_threshold(score, self.threshold).then_some(FieldMatch { errors, score })
    }

    /// Convenience wrapper over `find` for string slices.
    pub fn find_str(&self, word: &str, field: &str) -> Option<FieldMatch> {
        let word: Vec<char> = word.chars().collect();
        let field: Vec<char> = field.chars().collect();
        self.find(&word, &field)
    }
}
