// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of a searchable wiki corpus.
//!
//! Documents are owned by whoever provides the corpus; the engine only reads
//! them. A `Corpus` is the snapshot one search cycle runs against, and it is
//! replaced wholesale, never patched.
//!
//! # Invariants
//!
//! - **Corpus**: document ids are unique within a snapshot. `Corpus::new`
//!   rejects duplicates rather than trusting the provider.
//! - **Document**: field order is meaningful only for display; scoring sums
//!   over every weighted field regardless of order.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use crate::error::{Error, Result};

/// Field name of the page title.
pub const TITLE_FIELD: &str = "title";

/// Field name of the joined tag names.
pub const TAGS_FIELD: &str = "tags";

/// Field name of the page body.
pub const CONTENT_FIELD: &str = "content";

// =============================================================================
// NEWTYPES
// =============================================================================

/// Type-safe document identifier.
///
/// Prevents accidentally passing a corpus position where an id is expected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocId(pub u64);

impl DocId {
    #[inline]
    pub fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for DocId {
    fn from(id: u64) -> Self {
        DocId(id)
    }
}

impl fmt::Display for DocId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a page type (the type facet matches on this, never on the name).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeId(pub u64);

impl From<u64> for TypeId {
    fn from(id: u64) -> Self {
        TypeId(id)
    }
}

impl fmt::Display for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// DOCUMENTS
// =============================================================================

/// A page type: "Definition", "Workflow", ...
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocType {
    pub id: TypeId,
    pub name: String,
}

/// One named text attribute of a document.
///
/// The weight is not stored here: it comes from `SearchConfig::field_weights`
/// when the index is built, so one corpus can be indexed under different
/// weightings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    pub text: String,
}

impl Field {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }
}

/// A searchable document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: DocId,
    /// Ordered (name, text) pairs evaluated by the fuzzy matcher.
    pub fields: Vec<Field>,
    /// Page type, used by the type facet.
    #[serde(default)]
    pub doc_type: Option<DocType>,
    /// Exact tag names, used by the tag facet.
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Document {
    /// Build a wiki page with the three standard fields: title, tags, content.
    ///
    /// The tags field is the tag names joined by a single space, so a query word
    /// can fuzzily hit any tag.
    pub fn page(id: u64, title: &str, tags: &[&str], content: &str) -> Self {
        let tags: Vec<String> = tags.iter().map(|t| t.to_string()).collect();
        Self {
            id: DocId(id),
            fields: vec![
                Field::new(TITLE_FIELD, title),
                Field::new(TAGS_FIELD, tags.join(" ")),
                Field::new(CONTENT_FIELD, content),
            ],
            doc_type: None,
            tags,
            created_at: None,
            updated_at: None,
        }
    }

    pub fn with_type(mut self, id: u64, name: &str) -> Self {
        self.doc_type = Some(DocType {
            id: TypeId(id),
            name: name.to_string(),
        });
        self
    }

    pub fn with_timestamps(
        mut self,
        created_at: Option<DateTime<Utc>>,
        updated_at: Option<DateTime<Utc>>,
    ) -> Self {
        self.created_at = created_at;
        self.updated_at = updated_at;
        self
    }

    /// Text of the first field with this name.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.name == name)
            .map(|f| f.text.as_str())
    }

    /// Title, or an empty string for documents without one.
    pub fn title(&self) -> &str {
        self.field(TITLE_FIELD).unwrap_or("")
    }

    pub fn type_id(&self) -> Option<TypeId> {
        self.doc_type.as_ref().map(|t| t.id)
    }

    pub fn has_tag(&self, name: &str) -> bool {
        self.tags.iter().any(|t| t == name)
    }

    /// Last update, falling back to creation time.
    pub fn last_touched(&self) -> Option<DateTime<Utc>> {
        self.updated_at.or(self.created_at)
    }
}

// =============================================================================
// CORPUS
// =============================================================================

/// Insertion-ordered snapshot of documents.
///
/// **Invariant**: ids are unique. Position in `docs` is the corpus order used
/// for tie-breaking and for blank-query results.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Corpus {
    docs: Vec<Document>,
}

impl Corpus {
    /// Take ownership of a snapshot, rejecting duplicate ids.
    pub fn new(docs: Vec<Document>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(docs.len());
        for doc in &docs {
            if !seen.insert(doc.id) {
                return Err(Error::DuplicateDocId(doc.id));
            }
        }
        Ok(Self { docs })
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn docs(&self) -> &[Document] {
        &self.docs
    }

    pub fn get(&self, position: usize) -> Option<&Document> {
        self.docs.get(position)
    }

    pub fn len(&self) -> usize {
        self.docs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Document> {
        self.docs.iter()
    }

    /// Distinct tag names in first-seen order (the tag picker list).
    pub fn tag_names(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.docs
            .iter()
            .flat_map(|d| d.tags.iter())
            .filter(|t| seen.insert(t.as_str()))
            .map(String::as_str)
            .collect()
    }
}

impl<'a> IntoIterator for &'a Corpus {
    type Item = &'a Document;
    type IntoIter = std::slice::Iter<'a, Document>;

    fn into_iter(self) -> Self::IntoIter {
        self.docs.iter()
    }
}
