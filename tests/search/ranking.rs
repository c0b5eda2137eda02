//! Ranking by weighted aggregate similarity.

use crate::common::{assert_ranked, engine, ids, sample_pages, search_ids, titled};
use wikisift::{Document, FacetFilter};

#[test]
fn exact_title_match_ranks_first() {
    let docs = titled(&["ownershp", "owner ship", "ownership"]);
    let results_engine = engine(docs);
    let results = results_engine.search("ownership", &FacetFilter::new());
    assert_eq!(ids(&results), vec![3, 1, 2]);
    assert_eq!(results.hits()[0].score, Some(3.0));
    assert_ranked(&results);
}

#[test]
fn title_outranks_content() {
    let docs = vec![
        Document::page(1, "notes", &[], "a few words on deployment"),
        Document::page(2, "deployment", &[], "notes"),
    ];
    assert_eq!(search_ids(docs, "deployment", &FacetFilter::new()), vec![2, 1]);
}

#[test]
fn tags_outrank_content() {
    let docs = vec![
        Document::page(1, "a", &[], "kubernetes"),
        Document::page(2, "b", &["kubernetes"], ""),
    ];
    assert_eq!(search_ids(docs, "kubernetes", &FacetFilter::new()), vec![2, 1]);
}

#[test]
fn field_scores_add_up() {
    let engine = engine(vec![Document::page(1, "rust", &["rust"], "rust")]);
    let results = engine.search("rust", &FacetFilter::new());
    assert_eq!(results.hits()[0].score, Some(6.0));
}

#[test]
fn ties_keep_corpus_order() {
    let docs = titled(&["beta", "alpha", "alpha", "alpha"]);
    assert_eq!(search_ids(docs, "alpha", &FacetFilter::new()), vec![2, 3, 4]);
}

#[test]
fn position_in_field_does_not_matter() {
    let docs = vec![
        Document::page(1, "x", &[], &format!("{} borrow", "filler ".repeat(200))),
        Document::page(2, "y", &[], "borrow"),
    ];
    let engine = engine(docs);
    let results = engine.search("borrow", &FacetFilter::new());
    assert_eq!(results.hits()[0].score, results.hits()[1].score);
    assert_eq!(ids(&results), vec![1, 2]);
}

#[test]
fn sample_results_are_ranked() {
    let engine = engine(sample_pages());
    for query in ["rust", "tags", "schema", "trust", "the"] {
        assert_ranked(&engine.search(query, &FacetFilter::new()));
    }
}
