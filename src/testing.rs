//! Test utilities shared across unit tests, integration tests and benches.
//!
//! This module is always compiled but hidden from documentation.

#![doc(hidden)]

use crate::config::SearchConfig;
use crate::engine::SearchEngine;
use crate::search::facet::TagMode;
use crate::types::{Corpus, Document};

/// Type ids used by [`sample_pages`].
pub const DEFINITION: u64 = 1;
pub const WORKFLOW: u64 = 2;
pub const SCHEMA: u64 = 3;

/// A small wiki with a bit of everything: typed and untyped pages, shared
/// tags, a near-miss spelling and an accented title.
pub fn sample_pages() -> Vec<Document> {
    vec![
        Document::page(
            1,
            "Rust ownership",
            &["rust", "memory"],
            "Every value has a single owner; borrowing lends access.",
        )
        .with_type(DEFINITION, "Definition"),
        Document::page(
            2,
            "Release workflow",
            &["ops", "rust"],
            "Tag, build, publish the crate, then announce.",
        )
        .with_type(WORKFLOW, "Workflow"),
        Document::page(
            3,
            "Database schema",
            &["sql"],
            "Tables for pages, tags and the join between them.",
        )
        .with_type(SCHEMA, "Schema"),
        Document::page(4, "Café opening hours", &["personal"], "Closed on mondays."),
        Document::page(
            5,
            "Trust boundaries",
            &["security"],
            "Never trust input from the network.",
        )
        .with_type(DEFINITION, "Definition"),
    ]
}

/// Wrap documents in a corpus, panicking on duplicate ids.
pub fn corpus(docs: Vec<Document>) -> Corpus {
    Corpus::new(docs).expect("fixture ids are unique")
}

/// Engine with default config (`tag_mode` as given) loaded with `docs`.
pub fn engine_with(docs: Vec<Document>, tag_mode: TagMode) -> SearchEngine {
    let mut engine =
        SearchEngine::new(SearchConfig::new(tag_mode)).expect("default config is valid");
    engine.replace_corpus(corpus(docs));
    engine
}

/// `n` synthetic pages for benchmarks: cycling titles, tags and filler text.
pub fn synthetic_pages(n: usize) -> Vec<Document> {
    const WORDS: &[&str] = &[
        "rust", "ownership", "workflow", "deploy", "schema", "database", "borrow", "lifetime",
        "trait", "generic", "async", "runtime", "cache", "index", "search", "query",
    ];
    const TAGS: &[&str] = &["rust", "ops", "sql", "notes", "security", "personal"];

    (0..n)
        .map(|i| {
            let title = format!("{} {}", WORDS[i % WORDS.len()], WORDS[(i * 7 + 3) % WORDS.len()]);
            let tags = [TAGS[i % TAGS.len()], TAGS[(i / 3) % TAGS.len()]];
            let content: Vec<&str> = (0..40).map(|j| WORDS[(i + j * 5) % WORDS.len()]).collect();
            Document::page(i as u64, &title, &tags, &content.join(" "))
                .with_type((i % 4) as u64, "Synthetic")
        })
        .collect()
}
