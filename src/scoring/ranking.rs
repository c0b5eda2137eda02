// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: how per-word candidate sets get sorted.
//!
//! Sort order:
//! 1. **Aggregate score** - descending
//! 2. **Corpus position** - ascending, so equal scores keep provider order
//!
//! The position tiebreak makes the sort total, which is what keeps repeated
//! searches byte-for-byte identical.

use crate::search::combiner::MatchCandidate;
use std::cmp::Ordering;

/// Compare two candidates for ranking. `Less` means `a` ranks first.
pub fn compare_candidates(a: &MatchCandidate, b: &MatchCandidate) -> Ordering {
    match b.score.total_cmp(&a.score) {
        Ordering::Equal => a.position.cmp(&b.position),
        ord => ord,
    }
}

/// Sort candidates best-first.
pub fn rank_candidates(candidates: &mut [MatchCandidate]) {
    candidates.sort_by(compare_candidates);
}
