// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind search ranking.
//!
//! Two scales are in play and it is easy to mix them up:
//!
//! | Scale      | Exact | Rejected | Used for                      |
//! |------------|-------|----------|-------------------------------|
//! | score      | 0.0   | 1.0      | threshold test                |
//! | similarity | 1.0   | 0.0      | weighted aggregate per doc    |
//!
//! `score = errors / word_len`, `similarity = 1 - score`. A field matches when
//! `score <= threshold`; the boundary is inclusive.
//!
//! # Key Invariant: Weight Dominance For Exact Hits
//!
//! With the default weights an exact title hit (3.0) beats an exact tag hit
//! (2.0), which beats an exact content hit (1.0). Fuzzy hits shrink
//! proportionally, so a sloppy title hit can lose to a clean tag hit.

/// Default threshold on the score scale. Fairly tolerant: one typo per four
/// characters.
pub const DEFAULT_THRESHOLD: f64 = 0.25;

/// Weight of the title field.
pub const TITLE_WEIGHT: f64 = 3.0;

/// Weight of the joined tag names.
pub const TAGS_WEIGHT: f64 = 2.0;

/// Weight of the page body.
pub const CONTENT_WEIGHT: f64 = 1.0;

/// Score of a match with `errors` edits for a word of `word_len` characters.
#[inline]
pub fn match_score(errors: usize, word_len: usize) -> f64 {
    if word_len == 0 {
        return 1.0;
    }
    (errors as f64 / word_len as f64).min(1.0)
}

/// Does this score survive? Inclusive: `score == threshold` passes.
#[inline]
pub fn passes_threshold(score: f64, threshold: f64) -> bool {
    score <= threshold
}

/// Convert a score to a similarity in `[0, 1]`.
#[inline]
pub fn similarity(score: f64) -> f64 {
    1.0 - score
}

/// Upper bound on edits worth computing for a word under `threshold`.
///
/// Deliberately rounds up: the exact decision is made by `passes_threshold`
/// on the resulting score, so the DP only needs a bound that never rejects an
/// acceptable match.
#[inline]
pub fn error_budget(threshold: f64, word_len: usize) -> usize {
    ((threshold * word_len as f64).ceil() as usize).min(word_len)
}
