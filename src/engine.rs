// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search engine: validated config plus the current index.
//!
//! The engine is the only place with retained state, and that state is one
//! index. Loading a new corpus builds a complete replacement and swaps it in;
//! the old index is dropped, never patched. Every swap bumps the
//! `IndexVersion`, and `search_at` refuses versions that are no longer
//! current, so results keyed to a superseded snapshot can't leak out.
//!
//! Swapping needs `&mut self`, so a rebuild can't interleave with a search on
//! the same engine.

use crate::config::SearchConfig;
use crate::error::{Error, Result};
use crate::index::{CorpusIndex, IndexVersion};
use crate::search::facet::FacetFilter;
use crate::search::{run_search, SearchResults};
use crate::types::{Corpus, Document};

/// Pull-based source of corpus snapshots.
pub trait CorpusProvider {
    /// Fetch the current snapshot, in corpus order.
    fn provide_corpus(&self) -> Result<Vec<Document>>;
}

impl CorpusProvider for Vec<Document> {
    fn provide_corpus(&self) -> Result<Vec<Document>> {
        Ok(self.clone())
    }
}

impl CorpusProvider for [Document] {
    fn provide_corpus(&self) -> Result<Vec<Document>> {
        Ok(self.to_vec())
    }
}

pub struct SearchEngine {
    config: SearchConfig,
    index: CorpusIndex,
}

impl SearchEngine {
    /// Validate `config` and start with an empty corpus.
    pub fn new(config: SearchConfig) -> Result<Self> {
        config.validate()?;
        let index = CorpusIndex::empty(&config);
        Ok(Self { config, index })
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn index(&self) -> &CorpusIndex {
        &self.index
    }

    pub fn version(&self) -> IndexVersion {
        self.index.version()
    }

    /// Pull a snapshot from `provider` and make it current.
    ///
    /// On error the previous index stays in place.
    pub fn load<P: CorpusProvider + ?Sized>(&mut self, provider: &P) -> Result<IndexVersion> {
        let docs = provider.provide_corpus()?;
        let corpus = Corpus::new(docs)?;
        Ok(self.replace_corpus(corpus))
    }

    /// Build an index for `corpus` and swap it in wholesale.
    pub fn replace_corpus(&mut self, corpus: Corpus) -> IndexVersion {
        let version = self.index.version().next();
        let docs = corpus.len();
        self.index = CorpusIndex::build_validated(corpus, &self.config, version);
        tracing::info!(%version, docs, "corpus snapshot swapped in");
        version
    }

    /// Search the current index.
    pub fn search(&self, query: &str, filter: &FacetFilter) -> SearchResults<'_> {
        run_search(&self.index, &self.config, query, filter)
    }

    /// Search, but only if `version` is still the current index.
    pub fn search_at(
        &self,
        version: IndexVersion,
        query: &str,
        filter: &FacetFilter,
    ) -> Result<SearchResults<'_>> {
        self.ensure_current(version)?;
        Ok(self.search(query, filter))
    }

    /// Err if results computed against `version` would be stale.
    pub fn ensure_current(&self, version: IndexVersion) -> Result<()> {
        let current = self.index.version();
        if version != current {
            tracing::debug!(requested = %version, %current, "discarding stale search");
            return Err(Error::StaleIndex {
                requested: version,
                current,
            });
        }
        Ok(())
    }
}
