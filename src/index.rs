// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Corpus index: what the matcher actually looks at.
//!
//! For every document, every weighted field is normalized once (lowercase,
//! collapsed whitespace, optional diacritic folding) and decoded into chars,
//! so a keystroke never re-normalizes the corpus. There is no tokenization:
//! the matcher slides over the whole field value.
//!
//! An index is immutable. A new corpus snapshot means a new index with a new
//! `IndexVersion`; nothing is patched in place.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Instant;

use crate::config::SearchConfig;
use crate::error::Result;
use crate::types::{Corpus, Document};
use crate::util::normalize::normalize;

/// Monotonic identity of an index build.
///
/// Results carry the version they were computed against so a caller can
/// discard anything keyed to a superseded snapshot.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct IndexVersion(pub u64);

impl IndexVersion {
    pub fn next(self) -> Self {
        IndexVersion(self.0 + 1)
    }
}

impl fmt::Display for IndexVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

/// One normalized, weighted field.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexedField {
    pub name: String,
    pub weight: f64,
    /// Normalized text.
    pub text: String,
    /// `text` decoded once for the DP.
    pub chars: Vec<char>,
}

/// All weighted fields of the document at the same corpus position.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct IndexedDoc {
    pub fields: Vec<IndexedField>,
}

/// A corpus snapshot plus its precomputed field representation.
#[derive(Debug, Clone)]
pub struct CorpusIndex {
    version: IndexVersion,
    corpus: Corpus,
    entries: Vec<IndexedDoc>,
    fold_diacritics: bool,
}

impl CorpusIndex {
    /// Validate `config`, then build the index for `corpus`. O(total text length).
    ///
    /// Fields without a configured weight, and fields that normalize to the
    /// empty string, are skipped: they could never contribute a score.
    pub fn build(corpus: Corpus, config: &SearchConfig, version: IndexVersion) -> Result<Self> {
        config.validate()?;
        Ok(Self::build_validated(corpus, config, version))
    }

    /// `build` without the config check, for callers holding a validated config.
    pub(crate) fn build_validated(
        corpus: Corpus,
        config: &SearchConfig,
        version: IndexVersion,
    ) -> Self {
        let started = Instant::now();
        let entries: Vec<IndexedDoc> = corpus
            .iter()
            .map(|doc| index_document(doc, config))
            .collect();

        let field_count: usize = entries.iter().map(|e| e.fields.len()).sum();
        tracing::debug!(
            %version,
            docs = corpus.len(),
            fields = field_count,
            elapsed_us = started.elapsed().as_micros() as u64,
            "built corpus index"
        );

        Self {
            version,
            corpus,
            entries,
            fold_diacritics: config.fold_diacritics,
        }
    }

    /// An index over nothing, the state before any corpus is loaded.
    pub(crate) fn empty(config: &SearchConfig) -> Self {
        Self::build_validated(Corpus::empty(), config, IndexVersion::default())
    }

    pub fn version(&self) -> IndexVersion {
        self.version
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    pub fn entries(&self) -> &[IndexedDoc] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether field texts were folded; queries must be normalized the same way.
    pub fn fold_diacritics(&self) -> bool {
        self.fold_diacritics
    }
}

fn index_document(doc: &Document, config: &SearchConfig) -> IndexedDoc {
    let fields = doc
        .fields
        .iter()
        .filter_map(|field| {
            let weight = config.weight(&field.name)?;
            let text = normalize(&field.text, config.fold_diacritics);
            if text.is_empty() {
                return None;
            }
            let chars = text.chars().collect();
            Some(IndexedField {
                name: field.name.clone(),
                weight,
                text,
                chars,
            })
        })
        .collect();
    IndexedDoc { fields }
}
