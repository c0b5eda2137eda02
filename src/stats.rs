// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Corpus overview: the numbers the wiki dashboard shows.

use std::collections::{BTreeMap, HashMap};

use serde::Serialize;

use crate::types::{Corpus, DocId};

/// Bucket name for pages without a type.
pub const UNTYPED_LABEL: &str = "No type";

pub const TOP_TAGS: usize = 10;
pub const RECENT_PAGES: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagCount {
    pub tag: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CorpusStats {
    pub total: usize,
    /// Page count per type name.
    pub by_type: BTreeMap<String, usize>,
    /// Distinct tag names in use.
    pub total_tags: usize,
    /// Most used tags, descending count; ties keep first-seen order.
    pub top_tags: Vec<TagCount>,
    /// Most recently touched pages (update time, else creation time), newest first.
    /// Pages with neither timestamp come last, in corpus order.
    pub recent: Vec<DocId>,
}

impl CorpusStats {
    pub fn compute(corpus: &Corpus) -> Self {
        let mut by_type = BTreeMap::new();
        for doc in corpus {
            let name = doc
                .doc_type
                .as_ref()
                .map_or(UNTYPED_LABEL, |t| t.name.as_str());
            *by_type.entry(name.to_string()).or_insert(0) += 1;
        }

        let mut counts: HashMap<&str, usize> = HashMap::new();
        for tag in corpus.iter().flat_map(|d| d.tags.iter()) {
            *counts.entry(tag.as_str()).or_insert(0) += 1;
        }
        // tag_names() is first-seen order; the stable sort keeps it for ties
        let mut top_tags: Vec<TagCount> = corpus
            .tag_names()
            .into_iter()
            .map(|tag| TagCount {
                tag: tag.to_string(),
                count: counts.get(tag).copied().unwrap_or(0),
            })
            .collect();
        let total_tags = top_tags.len();
        top_tags.sort_by(|a, b| b.count.cmp(&a.count));
        top_tags.truncate(TOP_TAGS);

        let mut touched: Vec<_> = corpus.iter().map(|d| (d.last_touched(), d.id)).collect();
        // None sorts below Some, so reversing puts undated pages last
        touched.sort_by(|a, b| b.0.cmp(&a.0));
        let recent = touched
            .into_iter()
            .take(RECENT_PAGES)
            .map(|(_, id)| id)
            .collect();

        Self {
            total: corpus.len(),
            by_type,
            total_tags,
            top_tags,
            recent,
        }
    }
}
