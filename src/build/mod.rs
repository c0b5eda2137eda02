// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Loading corpora from wiki exports.
//!
//! The wiki exports its pages as one JSON array. `JsonPageProvider` re-reads
//! that file on every `provide_corpus` call, so pointing an engine at a file
//! and calling `load` again picks up edits as a new snapshot.

pub mod page;

use std::fs;
use std::path::{Path, PathBuf};

use crate::engine::CorpusProvider;
use crate::error::{Error, Result};
use crate::types::Document;

pub use page::*;

/// Corpus provider backed by a JSON page export on disk.
#[derive(Debug, Clone)]
pub struct JsonPageProvider {
    path: PathBuf,
}

impl JsonPageProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CorpusProvider for JsonPageProvider {
    fn provide_corpus(&self) -> Result<Vec<Document>> {
        let raw = fs::read_to_string(&self.path).map_err(|source| Error::Io {
            path: self.path.clone(),
            source,
        })?;
        let docs = parse_pages(&raw)?;
        tracing::debug!(path = %self.path.display(), pages = docs.len(), "read page export");
        Ok(docs)
    }
}
