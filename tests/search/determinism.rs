//! Same inputs, same ordered output.

use crate::common::{engine, ids, sample_pages};
use wikisift::testing::synthetic_pages;
use wikisift::{FacetFilter, TagMode};

#[test]
fn repeated_search_is_identical() {
    let engine = engine(synthetic_pages(300));
    let filter = FacetFilter::new().with_tags(["rust"]).with_tag_mode(TagMode::Any);
    for query in ["rust", "ownrship", "deploy cache", "", "z"] {
        let first = engine.search(query, &filter);
        let second = engine.search(query, &filter);
        assert_eq!(first, second, "query {:?} not deterministic", query);
    }
}

#[test]
fn independent_engines_agree() {
    let a = engine(sample_pages());
    let b = engine(sample_pages());
    for query in ["rust", "tags", "trust input", "schma"] {
        assert_eq!(
            ids(&a.search(query, &FacetFilter::new())),
            ids(&b.search(query, &FacetFilter::new())),
        );
    }
}
