//! Search invariants over random wikis.

use std::collections::HashSet;

use proptest::prelude::*;
use wikisift::testing::engine_with;
use wikisift::{Document, FacetFilter, TagMode};

use crate::common::{assert_ranked, ids};

const TAGS: &[&str] = &["rust", "ops", "sql", "notes"];

fn word() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-f]{2,6}").unwrap()
}

fn text() -> impl Strategy<Value = String> {
    prop::collection::vec(word(), 0..6).prop_map(|w| w.join(" "))
}

fn page() -> impl Strategy<Value = (String, Vec<usize>, String, Option<u64>)> {
    (
        text(),
        prop::collection::vec(0..TAGS.len(), 0..3),
        text(),
        prop::option::of(0u64..3),
    )
}

fn wiki() -> impl Strategy<Value = Vec<Document>> {
    prop::collection::vec(page(), 0..12).prop_map(|pages| {
        pages
            .into_iter()
            .enumerate()
            .map(|(i, (title, tag_idx, content, type_id))| {
                let mut tags: Vec<&str> = tag_idx.iter().map(|&t| TAGS[t]).collect();
                tags.dedup();
                let doc = Document::page(i as u64, &title, &tags, &content);
                match type_id {
                    Some(t) => doc.with_type(t, "T"),
                    None => doc,
                }
            })
            .collect()
    })
}

fn filter() -> impl Strategy<Value = FacetFilter> {
    (
        prop::option::of(0u64..3),
        prop::collection::vec(0..TAGS.len(), 0..3),
    )
        .prop_map(|(type_id, tags)| {
            let f = FacetFilter::new().with_tags(tags.iter().map(|&t| TAGS[t]));
            match type_id {
                Some(t) => f.with_type(t),
                None => f,
            }
        })
}

fn tag_mode() -> impl Strategy<Value = TagMode> {
    prop_oneof![Just(TagMode::All), Just(TagMode::Any)]
}

/// Is `sub` an order-preserving subsequence of `full`?
fn is_subsequence(sub: &[u64], full: &[u64]) -> bool {
    let mut it = full.iter();
    sub.iter().all(|x| it.any(|y| y == x))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(150))]

    #[test]
    fn prop_results_ranked_and_unique(docs in wiki(), query in text(), mode in tag_mode()) {
        let engine = engine_with(docs, mode);
        let results = engine.search(&query, &FacetFilter::new());
        assert_ranked(&results);
        let found = ids(&results);
        let unique: HashSet<u64> = found.iter().copied().collect();
        prop_assert_eq!(unique.len(), found.len());
    }

    #[test]
    fn prop_blank_query_is_filtered_corpus(docs in wiki(), f in filter(), mode in tag_mode()) {
        let expected: Vec<u64> = docs
            .iter()
            .filter(|d| f.matches(d, mode))
            .map(|d| d.id.get())
            .collect();
        let engine = engine_with(docs, mode);
        prop_assert_eq!(ids(&engine.search("", &f)), expected);
    }

    #[test]
    fn prop_facets_never_reorder(docs in wiki(), query in word(), f in filter(), mode in tag_mode()) {
        let engine = engine_with(docs, mode);
        let unfiltered = ids(&engine.search(&query, &FacetFilter::new()));
        let filtered = ids(&engine.search(&query, &f));
        prop_assert!(is_subsequence(&filtered, &unfiltered));
    }

    #[test]
    fn prop_all_mode_is_subset_of_any(docs in wiki(), f in filter()) {
        let all = ids(&engine_with(docs.clone(), TagMode::All).search("", &f));
        let any: HashSet<u64> = ids(&engine_with(docs, TagMode::Any).search("", &f))
            .into_iter()
            .collect();
        prop_assert!(all.iter().all(|id| any.contains(id)));
    }

    #[test]
    fn prop_multi_word_follows_first_word(docs in wiki(), first in word(), second in word()) {
        let engine = engine_with(docs, TagMode::All);
        let query = format!("{} {}", first, second);
        let combined = ids(&engine.search(&query, &FacetFilter::new()));
        let by_first = ids(&engine.search(&first, &FacetFilter::new()));
        let by_second: HashSet<u64> = ids(&engine.search(&second, &FacetFilter::new()))
            .into_iter()
            .collect();

        let expected: Vec<u64> = by_first
            .into_iter()
            .filter(|id| by_second.contains(id))
            .collect();
        prop_assert_eq!(combined, expected);
    }

    #[test]
    fn prop_exact_title_word_is_found(docs in wiki()) {
        let engine = engine_with(docs.clone(), TagMode::All);
        for doc in &docs {
            if let Some(w) = doc.title().split_whitespace().next() {
                let found = ids(&engine.search(w, &FacetFilter::new()));
                prop_assert!(found.contains(&doc.id.get()));
            }
        }
    }
}
