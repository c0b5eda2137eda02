// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query planning: raw input → normalized words → evaluation strategy.
//!
//! Normalization here must match the index exactly (same lowercasing, same
//! diacritic folding), otherwise an exact title hit stops scoring 0.

use crate::util::normalize::normalize;

/// One normalized query word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryWord {
    pub text: String,
    pub chars: Vec<char>,
}

impl QueryWord {
    fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            chars: text.chars().collect(),
        }
    }
}

/// How a query is evaluated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryPlan {
    /// Blank query: no fuzzy constraint, every document matches vacuously.
    All,
    /// One word, ranked by its own aggregate score.
    Single(QueryWord),
    /// Several words, AND semantics. The first word decides the order, the
    /// others only decide membership.
    Multi(Vec<QueryWord>),
}

impl QueryPlan {
    /// Words in query order. Empty for `All`.
    pub fn words(&self) -> &[QueryWord] {
        match self {
            QueryPlan::All => &[],
            QueryPlan::Single(word) => std::slice::from_ref(word),
            QueryPlan::Multi(words) => words,
        }
    }

    pub fn is_blank(&self) -> bool {
        matches!(self, QueryPlan::All)
    }
}

/// Parse a query string into normalized, whitespace-separated words.
///
/// # Example
///
/// ```
/// use wikisift::parse_query;
///
/// assert_eq!(parse_query("  Hello   World ", false), vec!["hello", "world"]);
/// ```
pub fn parse_query(raw: &str, fold_diacritics: bool) -> Vec<String> {
    normalize(raw, fold_diacritics)
        .split(' ')
        .filter(|p| !p.is_empty())
        .map(|s| s.to_string())
        .collect()
}

/// Pick the evaluation strategy for a raw query.
pub fn plan_query(raw: &str, fold_diacritics: bool) -> QueryPlan {
    let mut words: Vec<QueryWord> = parse_query(raw, fold_diacritics)
        .iter()
        .map(|w| QueryWord::new(w))
        .collect();
    match words.len() {
        0 => QueryPlan::All,
        1 => QueryPlan::Single(words.remove(0)),
        _ => QueryPlan::Multi(words),
    }
}
