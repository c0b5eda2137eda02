//! Type and tag facets, alone and combined with fuzzy matching.

use crate::common::{engine, ids, sample_pages, search_ids, DEFINITION, WORKFLOW};
use wikisift::testing::engine_with;
use wikisift::{Document, FacetFilter, TagMode};

fn xy_docs() -> Vec<Document> {
    vec![
        Document::page(1, "one", &["x", "y"], ""),
        Document::page(2, "two", &["x"], ""),
    ]
}

#[test]
fn tag_mode_all_requires_every_tag() {
    let engine = engine_with(xy_docs(), TagMode::All);
    let filter = FacetFilter::new().with_tags(["x", "y"]);
    assert_eq!(ids(&engine.search("", &filter)), vec![1]);
}

#[test]
fn tag_mode_any_requires_one_tag() {
    let engine = engine_with(xy_docs(), TagMode::Any);
    let filter = FacetFilter::new().with_tags(["x", "y"]);
    assert_eq!(ids(&engine.search("", &filter)), vec![1, 2]);
}

#[test]
fn filter_tag_mode_overrides_engine() {
    let engine = engine_with(xy_docs(), TagMode::All);
    let filter = FacetFilter::new()
        .with_tags(["x", "y"])
        .with_tag_mode(TagMode::Any);
    assert_eq!(ids(&engine.search("", &filter)), vec![1, 2]);
}

#[test]
fn type_facet_on_blank_query() {
    let filter = FacetFilter::new().with_type(DEFINITION);
    assert_eq!(search_ids(sample_pages(), "", &filter), vec![1, 5]);
}

#[test]
fn untyped_pages_fail_type_facet() {
    let engine = engine(sample_pages());
    for type_id in [DEFINITION, WORKFLOW, 3] {
        let results = engine.search("", &FacetFilter::new().with_type(type_id));
        assert!(!ids(&results).contains(&4));
    }
}

#[test]
fn facets_preserve_fuzzy_order() {
    // unfiltered "rust" ranks 1, 5, 2
    let filter = FacetFilter::new().with_tags(["rust"]);
    assert_eq!(search_ids(sample_pages(), "rust", &filter), vec![1, 2]);
}

#[test]
fn type_and_tags_combine() {
    let filter = FacetFilter::new().with_type(WORKFLOW).with_tags(["rust"]);
    assert_eq!(search_ids(sample_pages(), "", &filter), vec![2]);
    let filter = FacetFilter::new().with_type(DEFINITION).with_tags(["ops"]);
    assert!(search_ids(sample_pages(), "", &filter).is_empty());
}

#[test]
fn unknown_tag_or_type_is_empty_not_error() {
    assert!(search_ids(sample_pages(), "", &FacetFilter::new().with_tags(["nope"])).is_empty());
    assert!(search_ids(sample_pages(), "rust", &FacetFilter::new().with_type(999)).is_empty());
}

#[test]
fn tag_names_are_exact() {
    assert!(search_ids(sample_pages(), "", &FacetFilter::new().with_tags(["Rust"])).is_empty());
    assert!(search_ids(sample_pages(), "", &FacetFilter::new().with_tags(["rus"])).is_empty());
}

#[test]
fn clearing_filter_restores_everything() {
    let engine = engine(sample_pages());
    let mut filter = FacetFilter::new().with_type(DEFINITION);
    filter.toggle_tag("memory");
    assert_eq!(ids(&engine.search("", &filter)), vec![1]);

    filter.clear();
    assert_eq!(ids(&engine.search("", &filter)), vec![1, 2, 3, 4, 5]);
}

#[test]
fn tag_picker_lists_and_narrows() {
    let engine = engine(sample_pages());
    let tags = engine.index().corpus().tag_names();
    assert_eq!(
        tags,
        vec!["rust", "memory", "ops", "sql", "personal", "security"]
    );
    assert_eq!(wikisift::visible_tags(&tags, "S"), vec!["rust", "ops", "sql", "personal", "security"]);
    assert_eq!(wikisift::visible_tags(&tags, "mem"), vec!["memory"]);
}
