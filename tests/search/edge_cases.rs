//! Blank queries, empty corpora, degenerate fields.

use crate::common::{engine, ids, sample_pages, search_ids, titled};
use wikisift::{Document, Error, FacetFilter, SearchConfig, SearchEngine, TagMode};

#[test]
fn blank_query_returns_corpus_in_order() {
    let engine = engine(sample_pages());
    for blank in ["", "   ", "\t\n"] {
        let results = engine.search(blank, &FacetFilter::new());
        assert_eq!(ids(&results), vec![1, 2, 3, 4, 5]);
        assert!(results.hits().iter().all(|h| h.score.is_none()));
    }
}

#[test]
fn empty_corpus_returns_nothing() {
    let engine = engine(Vec::new());
    assert!(engine.search("rust", &FacetFilter::new()).is_empty());
    assert!(engine.search("", &FacetFilter::new()).is_empty());
}

#[test]
fn empty_fields_never_match() {
    let docs = vec![Document::page(1, "", &[], ""), Document::page(2, "a", &[], "")];
    assert_eq!(search_ids(docs, "a", &FacetFilter::new()), vec![2]);
}

#[test]
fn single_character_query() {
    let docs = titled(&["x marks", "y"]);
    assert_eq!(search_ids(docs, "x", &FacetFilter::new()), vec![1]);
}

#[test]
fn query_longer_than_every_field() {
    let docs = titled(&["ab"]);
    assert!(search_ids(docs, "abcdefgh", &FacetFilter::new()).is_empty());
}

#[test]
fn zero_weight_field_contributes_nothing() {
    let config = SearchConfig::new(TagMode::All).with_field_weight("content", 0.0);
    let mut engine = SearchEngine::new(config).unwrap();
    engine
        .load(&vec![Document::page(1, "title", &[], "needle")])
        .unwrap();
    assert!(engine.search("needle", &FacetFilter::new()).is_empty());
}

#[test]
fn invalid_config_fails_fast() {
    for bad in [
        SearchConfig::new(TagMode::All).with_threshold(-0.1),
        SearchConfig::new(TagMode::All).with_threshold(f64::NAN),
        SearchConfig::new(TagMode::Any).with_field_weight("title", f64::INFINITY),
        SearchConfig::new(TagMode::Any).with_field_weight("tags", -2.0),
    ] {
        assert!(matches!(SearchEngine::new(bad), Err(Error::Config(_))));
    }
}

#[test]
fn duplicate_ids_rejected() {
    let mut engine = engine(Vec::new());
    let docs = vec![Document::page(1, "a", &[], ""), Document::page(1, "b", &[], "")];
    assert!(matches!(engine.load(&docs), Err(Error::DuplicateDocId(_))));
}

#[test]
fn unicode_text_does_not_panic() {
    let docs = titled(&["తెలుగు పదం", "naïve café", "日本語"]);
    let engine = engine(docs);
    assert_eq!(ids(&engine.search("తెలుగు", &FacetFilter::new())), vec![1]);
    assert_eq!(ids(&engine.search("日本", &FacetFilter::new())), vec![3]);
}
