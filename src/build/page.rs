// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Wiki page records as exported by the wiki, and their conversion to documents.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::Document;

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PageTypeRecord {
    pub id: u64,
    pub name: String,
    /// Badge colour in the wiki UI. Carried, never searched.
    #[serde(default)]
    pub color: Option<String>,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TagRecord {
    #[serde(default)]
    pub id: Option<u64>,
    pub name: String,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    /// Unsaved pages have no id and can't be indexed.
    #[serde(default)]
    pub id: Option<u64>,
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(rename = "type", default)]
    pub page_type: Option<PageTypeRecord>,
    #[serde(default)]
    pub tags: Vec<TagRecord>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl Page {
    pub fn into_document(self) -> Result<Document> {
        let id = self.id.ok_or_else(|| Error::MissingPageId {
            title: self.title.clone(),
        })?;
        let tags: Vec<&str> = self.tags.iter().map(|t| t.name.as_str()).collect();
        let mut doc = Document::page(id, &self.title, &tags, &self.content).with_timestamps(
            parse_timestamp(self.created_at.as_deref()),
            parse_timestamp(self.updated_at.as_deref()),
        );
        if let Some(page_type) = self.page_type {
            doc = doc.with_type(page_type.id, &page_type.name);
        }
        Ok(doc)
    }
}

/// Parse RFC 3339, or a zone-less ISO timestamp taken as UTC.
///
/// Unparsable values are logged and dropped; a bad timestamp never loses the page.
pub fn parse_timestamp(raw: Option<&str>) -> Option<DateTime<Utc>> {
    let raw = raw?.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }
    match NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        Ok(naive) => Some(naive.and_utc()),
        Err(e) => {
            tracing::warn!(value = raw, error = %e, "ignoring unparsable timestamp");
            None
        }
    }
}

/// Parse a JSON array of pages into documents, in file order.
pub fn parse_pages(raw: &str) -> Result<Vec<Document>> {
    let pages: Vec<Page> = serde_json::from_str(raw)?;
    pages.into_iter().map(Page::into_document).collect()
}
