// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Facet filtering: exact type and tag constraints applied after fuzzy matching.
//!
//! Filtering never re-sorts. Whatever order the candidates arrive in (fuzzy
//! rank, or corpus order for a blank query) is the order they leave in.
//!
//! Tag names are compared exactly, case included. Unknown types or tags are
//! not errors; they simply match nothing.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::types::{Document, TypeId};

/// How requested tags relate to a document's tags.
///
/// There is intentionally no `Default`: both semantics have shipped for the
/// same feature, so the caller picks one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagMode {
    /// Every requested tag must be present.
    All,
    /// At least one requested tag must be present.
    Any,
}

impl fmt::Display for TagMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TagMode::All => write!(f, "all"),
            TagMode::Any => write!(f, "any"),
        }
    }
}

impl FromStr for TagMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "all" | "and" => Ok(TagMode::All),
            "any" | "or" => Ok(TagMode::Any),
            other => Err(format!("unknown tag mode '{}' (expected all or any)", other)),
        }
    }
}

/// Exact-match constraints. The default value constrains nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetFilter {
    /// Keep only documents of this type.
    #[serde(default)]
    pub type_id: Option<TypeId>,
    /// Requested tag names; empty means no tag constraint.
    #[serde(default)]
    pub tag_names: BTreeSet<String>,
    /// Overrides the engine's configured tag mode for this filter.
    #[serde(default)]
    pub tag_mode: Option<TagMode>,
}

impl FacetFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_type(mut self, type_id: u64) -> Self {
        self.type_id = Some(TypeId(type_id));
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tag_names.extend(tags.into_iter().map(Into::into));
        self
    }

    pub fn with_tag_mode(mut self, mode: TagMode) -> Self {
        self.tag_mode = Some(mode);
        self
    }

    /// Select the tag if absent, deselect it if present. Returns whether it
    /// is selected afterwards.
    pub fn toggle_tag(&mut self, name: &str) -> bool {
        if self.tag_names.remove(name) {
            false
        } else {
            self.tag_names.insert(name.to_string());
            true
        }
    }

    /// Drop every constraint (type, tags, mode override).
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_unconstrained(&self) -> bool {
        self.type_id.is_none() && self.tag_names.is_empty()
    }

    /// Does `doc` satisfy every constraint? `default_mode` applies when the
    /// filter has no mode of its own.
    pub fn matches(&self, doc: &Document, default_mode: TagMode) -> bool {
        if let Some(type_id) = self.type_id {
            if doc.type_id() != Some(type_id) {
                return false;
            }
        }
        if self.tag_names.is_empty() {
            return true;
        }
        match self.tag_mode.unwrap_or(default_mode) {
            TagMode::All => self.tag_names.iter().all(|t| doc.has_tag(t)),
            TagMode::Any => self.tag_names.iter().any(|t| doc.has_tag(t)),
        }
    }

    /// Keep the items whose document passes, preserving order.
    pub fn apply<T, F>(&self, items: Vec<T>, default_mode: TagMode, doc_of: F) -> Vec<T>
    where
        F: Fn(&T) -> &Document,
    {
        if self.is_unconstrained() {
            return items;
        }
        items
            .into_iter()
            .filter(|item| self.matches(doc_of(item), default_mode))
            .collect()
    }
}

/// Tag picker filter: case-insensitive substring match over tag names.
///
/// A blank needle returns every tag. Order is preserved.
pub fn visible_tags<'a>(tags: &[&'a str], needle: &str) -> Vec<&'a str> {
    let needle = needle.trim();
    if needle.is_empty() {
        return tags.to_vec();
    }
    let needle = needle.to_lowercase();
    tags.iter()
        .copied()
        .filter(|tag| tag.to_lowercase().contains(&needle))
        .collect()
}
