// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search: where the rubber meets the road.
//!
//! One recompute is one call to [`search`]: plan the query, score and combine
//! per word, apply facets, materialize. Nothing is cached between calls except
//! the index itself, so calling it on every keystroke is always correct.
//!
//! ```text
//! query ──▶ plan ──▶ combine (matcher × index) ──▶ facets ──▶ results
//!             │                                      ▲
//!             └── blank ──▶ whole corpus ────────────┘
//! ```

pub mod combiner;
pub mod facet;
pub mod query;

use crate::config::SearchConfig;
use crate::error::Result;
use crate::fuzzy::FuzzyMatcher;
use crate::index::{CorpusIndex, IndexVersion};
use crate::types::{DocId, Document};

use combiner::combine;
use facet::FacetFilter;
use query::{plan_query, QueryPlan};

/// One result row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchHit<'a> {
    pub document: &'a Document,
    /// Aggregate score of the first query word; `None` for a blank query.
    pub score: Option<f64>,
}

/// Ordered results of one recompute, tagged with the index they came from.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResults<'a> {
    version: IndexVersion,
    hits: Vec<SearchHit<'a>>,
}

impl<'a> SearchResults<'a> {
    pub fn version(&self) -> IndexVersion {
        self.version
    }

    pub fn hits(&self) -> &[SearchHit<'a>] {
        &self.hits
    }

    pub fn documents(&self) -> impl Iterator<Item = &'a Document> + '_ {
        self.hits.iter().map(|h| h.document)
    }

    pub fn ids(&self) -> Vec<DocId> {
        self.hits.iter().map(|h| h.document.id).collect()
    }

    pub fn len(&self) -> usize {
        self.hits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }

    pub fn into_hits(self) -> Vec<SearchHit<'a>> {
        self.hits
    }
}

/// Run one full search cycle against `index`.
///
/// Pure: the same index, config, query and filter always give the same
/// ordered output. An invalid `config` is rejected before anything is scored.
pub fn search<'a>(
    index: &'a CorpusIndex,
    config: &SearchConfig,
    query: &str,
    filter: &FacetFilter,
) -> Result<SearchResults<'a>> {
    config.validate()?;
    Ok(run_search(index, config, query, filter))
}

/// `search` for callers that validated `config` up front.
pub(crate) fn run_search<'a>(
    index: &'a CorpusIndex,
    config: &SearchConfig,
    query: &str,
    filter: &FacetFilter,
) -> SearchResults<'a> {
    let corpus = index.corpus();
    let plan = plan_query(query, index.fold_diacritics());

    let hits: Vec<SearchHit<'a>> = match &plan {
        QueryPlan::All => corpus
            .iter()
            .map(|document| SearchHit {
                document,
                score: None,
            })
            .collect(),
        QueryPlan::Single(_) | QueryPlan::Multi(_) => {
            let matcher = FuzzyMatcher::new(config.threshold);
            combine(index, &matcher, plan.words())
                .into_iter()
                .filter_map(|c| {
                    corpus.get(c.position).map(|document| SearchHit {
                        document,
                        score: Some(c.score),
                    })
                })
                .collect()
        }
    };

    let matched = hits.len();
    let hits = filter.apply(hits, config.tag_mode, |h| h.document);

    tracing::trace!(
        version = %index.version(),
        words = plan.words().len(),
        matched,
        returned = hits.len(),
        "search complete"
    );

    SearchResults {
        version: index.version(),
        hits,
    }
}
