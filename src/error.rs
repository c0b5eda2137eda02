// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types.
//!
//! The search path itself cannot fail: blank queries, unknown facets and empty
//! fields all produce (possibly empty) results. Errors come from configuration
//! validation, corpus construction, stale index versions, and the file-backed
//! page provider.

use std::path::PathBuf;

use crate::index::IndexVersion;
use crate::types::DocId;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("duplicate document id {0} in corpus snapshot")]
    DuplicateDocId(DocId),

    /// A search was keyed to an index that has since been replaced.
    #[error("index version {requested} was superseded by version {current}")]
    StaleIndex {
        requested: IndexVersion,
        current: IndexVersion,
    },

    #[error("page {title:?} has no id")]
    MissingPageId { title: String },

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Rejected configuration values. Never clamped.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("threshold {0} is outside [0, 1]")]
    ThresholdOutOfRange(f64),

    #[error("weight {weight} for field {field:?} must be finite and non-negative")]
    InvalidWeight { field: String, weight: f64 },

    #[error("diacritic folding requires the `unicode-normalization` feature")]
    DiacriticFoldingUnavailable,

    #[error("tag mode must be chosen explicitly (all or any)")]
    MissingTagMode,
}
