// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search configuration.
//!
//! Recognized options: `threshold`, `field_weights`, `tag_mode`,
//! `fold_diacritics`. Everything except `tag_mode` has a default. The tag mode
//! does not: the ALL and ANY semantics both exist in the wild for the same
//! feature, so the caller has to say which one it wants.
//!
//! Validation is fail-fast and never clamps.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::error::{ConfigError, Error, Result};
use crate::scoring::{CONTENT_WEIGHT, DEFAULT_THRESHOLD, TAGS_WEIGHT, TITLE_WEIGHT};
use crate::search::facet::TagMode;
use crate::types::{CONTENT_FIELD, TAGS_FIELD, TITLE_FIELD};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Match threshold on the score scale: 0 = exact only, 1 = accept anything.
    #[serde(default = "default_threshold")]
    pub threshold: f64,

    /// Weight per field name. Fields without an entry are not searched.
    #[serde(default = "default_field_weights")]
    pub field_weights: BTreeMap<String, f64>,

    /// Tag facet semantics used when a filter does not override it.
    pub tag_mode: TagMode,

    /// Fold diacritics during normalization ("café" matches "cafe").
    #[serde(default)]
    pub fold_diacritics: bool,
}

fn default_threshold() -> f64 {
    DEFAULT_THRESHOLD
}

/// title=3, tags=2, content=1.
pub fn default_field_weights() -> BTreeMap<String, f64> {
    BTreeMap::from([
        (TITLE_FIELD.to_string(), TITLE_WEIGHT),
        (TAGS_FIELD.to_string(), TAGS_WEIGHT),
        (CONTENT_FIELD.to_string(), CONTENT_WEIGHT),
    ])
}

impl SearchConfig {
    /// Defaults for everything but the tag mode.
    pub fn new(tag_mode: TagMode) -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            field_weights: default_field_weights(),
            tag_mode,
            fold_diacritics: false,
        }
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_field_weight(mut self, field: &str, weight: f64) -> Self {
        self.field_weights.insert(field.to_string(), weight);
        self
    }

    pub fn with_fold_diacritics(mut self, fold: bool) -> Self {
        self.fold_diacritics = fold;
        self
    }

    /// Weight for a field name, if the field is searched at all.
    pub fn weight(&self, field: &str) -> Option<f64> {
        self.field_weights.get(field).copied()
    }

    /// Reject out-of-range values. Called by `SearchEngine::new`.
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.threshold) {
            return Err(ConfigError::ThresholdOutOfRange(self.threshold));
        }
        for (field, &weight) in &self.field_weights {
            if !weight.is_finite() || weight < 0.0 {
                return Err(ConfigError::InvalidWeight {
                    field: field.clone(),
                    weight,
                });
            }
        }
        if self.fold_diacritics && !cfg!(feature = "unicode-normalization") {
            return Err(ConfigError::DiacriticFoldingUnavailable);
        }
        Ok(())
    }

    /// Parse and validate a JSON config. `tag_mode` is required.
    pub fn from_json(raw: &str) -> Result<Self> {
        ConfigFile::from_json(raw)?.resolve(None)
    }

    pub fn from_json_file(path: &Path) -> Result<Self> {
        ConfigFile::from_path(path)?.resolve(None)
    }
}

/// A config file as written on disk: every key optional, unknown keys rejected.
///
/// `resolve` fills the gaps with defaults. The tag mode has no default, so it
/// must come from the file or from the caller's override.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub threshold: Option<f64>,
    pub field_weights: Option<BTreeMap<String, f64>>,
    pub tag_mode: Option<TagMode>,
    pub fold_diacritics: Option<bool>,
}

impl ConfigFile {
    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&raw)
    }

    /// Merge with defaults and validate. `tag_mode` overrides the file's value.
    pub fn resolve(self, tag_mode: Option<TagMode>) -> Result<SearchConfig> {
        let tag_mode = tag_mode
            .or(self.tag_mode)
            .ok_or(ConfigError::MissingTagMode)?;
        let config = SearchConfig {
            threshold: self.threshold.unwrap_or(DEFAULT_THRESHOLD),
            field_weights: self.field_weights.unwrap_or_else(default_field_weights),
            tag_mode,
            fold_diacritics: self.fold_diacritics.unwrap_or(false),
        };
        config.validate()?;
        Ok(config)
    }
}
