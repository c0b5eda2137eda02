// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for search query handling.
//!
//! Arbitrary queries and facet filters against a fixed wiki: search must never
//! panic, results must be ranked, unique, and valid members of the corpus.

#![no_main]

use std::collections::HashSet;

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use wikisift::testing::{engine_with, sample_pages};
use wikisift::{FacetFilter, SearchEngine, TagMode};

#[derive(Debug, Arbitrary)]
struct QueryInput {
    query: String,
    type_id: Option<u8>,
    tags: Vec<String>,
    any: bool,
}

fuzz_target!(|input: QueryInput| {
    static ENGINE: std::sync::OnceLock<SearchEngine> = std::sync::OnceLock::new();
    let engine = ENGINE.get_or_init(|| engine_with(sample_pages(), TagMode::All));

    let query: String = input.query.chars().take(200).collect();
    let mut filter = FacetFilter::new().with_tags(input.tags.into_iter().take(4));
    if let Some(t) = input.type_id {
        filter = filter.with_type(u64::from(t % 5));
    }
    if input.any {
        filter = filter.with_tag_mode(TagMode::Any);
    }

    let results = engine.search(&query, &filter);

    let corpus_ids: HashSet<_> = engine.index().corpus().iter().map(|d| d.id).collect();
    let mut seen = HashSet::new();
    for hit in results.hits() {
        assert!(corpus_ids.contains(&hit.document.id));
        assert!(seen.insert(hit.document.id), "duplicate result {}", hit.document.id);
        assert!(filter.matches(hit.document, engine.config().tag_mode));
    }

    let scores: Vec<f64> = results.hits().iter().filter_map(|h| h.score).collect();
    for pair in scores.windows(2) {
        assert!(pair[0] >= pair[1], "results not ranked: {:?}", scores);
    }
});
