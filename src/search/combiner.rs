// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result combining: one word → one ranked candidate set; many words → AND.
//!
//! Per word, every indexed document is scored as
//! `Σ similarity(field) × weight(field)` over the fields that matched. Fields
//! that miss contribute nothing (never a penalty). A document with aggregate 0
//! is not a candidate.
//!
//! For several words the candidate sets are intersected by document, and the
//! surviving documents keep the ranking of the *first* word. Later words gate
//! membership only. Re-scoring across all words would be a different (and
//! observable) behavior.

use std::collections::HashSet;

use crate::fuzzy::FuzzyMatcher;
use crate::index::{CorpusIndex, IndexedDoc};
use crate::scoring::ranking::rank_candidates;
use crate::search::query::QueryWord;
use crate::types::DocId;

/// A document that matched one word (or, after intersection, all words).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchCandidate {
    /// Position in the corpus snapshot.
    pub position: usize,
    pub id: DocId,
    /// Weighted aggregate similarity.
    pub score: f64,
}

/// Weighted aggregate of one word over one document's fields.
pub fn aggregate_score(matcher: &FuzzyMatcher, word: &QueryWord, doc: &IndexedDoc) -> f64 {
    doc.fields
        .iter()
        .filter_map(|field| {
            matcher
                .find(&word.chars, &field.chars)
                .map(|m| m.similarity() * field.weight)
        })
        .sum()
}

/// Ranked candidate set for one word.
pub fn candidates_for_word(
    index: &CorpusIndex,
    matcher: &FuzzyMatcher,
    word: &QueryWord,
) -> Vec<MatchCandidate> {
    let docs = index.corpus().docs();
    let mut candidates: Vec<MatchCandidate> = index
        .entries()
        .iter()
        .enumerate()
        .filter_map(|(position, entry)| {
            let score = aggregate_score(matcher, word, entry);
            (score > 0.0).then(|| MatchCandidate {
                position,
                id: docs[position].id,
                score,
            })
        })
        .collect();
    rank_candidates(&mut candidates);
    candidates
}

/// Intersect per-word candidate sets, keeping the first set's order and scores.
pub fn intersect_candidates(mut sets: Vec<Vec<MatchCandidate>>) -> Vec<MatchCandidate> {
    if sets.is_empty() {
        return Vec::new();
    }
    let mut first = sets.remove(0);
    for set in &sets {
        if first.is_empty() {
            break;
        }
        let members: HashSet<usize> = set.iter().map(|c| c.position).collect();
        first.retain(|c| members.contains(&c.position));
    }
    first
}

/// Evaluate every word and combine. Empty `words` yields no candidates.
pub fn combine(index: &CorpusIndex, matcher: &FuzzyMatcher, words: &[QueryWord]) -> Vec<MatchCandidate> {
    match words {
        [] => Vec::new(),
        [word] => candidates_for_word(index, matcher, word),
        _ => {
            let mut sets = Vec::with_capacity(words.len());
            for word in words {
                let set = candidates_for_word(index, matcher, word);
                // AND: one empty set empties the intersection
                let exhausted = set.is_empty();
                sets.push(set);
                if exhausted {
                    return Vec::new();
                }
            }
            intersect_candidates(sets)
        }
    }
}
