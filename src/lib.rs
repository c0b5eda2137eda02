//! Fuzzy search and faceted filtering over a personal wiki.
//!
//! Every keystroke re-runs the whole pipeline against an in-memory index of
//! the current corpus snapshot. There is no tokenization and no inverted
//! index: each query word is matched against each field text with a bounded,
//! windowed edit distance, so "ownrship" still finds "Rust ownership".
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌───────────────────────────┐
//! │  types.rs    │────▶│  index.rs    │────▶│  search/                  │
//! │ (Document,   │     │ (CorpusIndex,│     │  query → combiner → facet │
//! │  Corpus)     │     │ IndexVersion)│     │        (fuzzy, scoring)   │
//! └──────────────┘     └──────────────┘     └───────────────────────────┘
//!        ▲                    ▲                          │
//!        │                    │                          ▼
//! ┌──────────────┐     ┌──────────────┐            SearchResults
//! │  build/      │────▶│  engine.rs   │  (ordered hits + index version)
//! │ (JSON pages) │     │ (swap, stale │
//! └──────────────┘     │  detection)  │
//!                      └──────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use wikisift::{DocId, Document, FacetFilter, SearchConfig, SearchEngine, TagMode};
//!
//! let mut engine = SearchEngine::new(SearchConfig::new(TagMode::All)).unwrap();
//! engine
//!     .load(&vec![
//!         Document::page(1, "Rust ownership", &["rust"], "borrowing rules"),
//!         Document::page(2, "Grocery list", &[], "eggs"),
//!     ])
//!     .unwrap();
//!
//! let results = engine.search("ownrship", &FacetFilter::new());
//! assert_eq!(results.ids(), vec![DocId(1)]);
//! ```

pub mod build;
pub mod config;
pub mod engine;
pub mod error;
pub mod fuzzy;
pub mod index;
pub mod scoring;
pub mod search;
pub mod stats;
pub mod types;
pub mod util;

#[doc(hidden)]
pub mod testing;

// Re-exports for public API
pub use build::{JsonPageProvider, Page};
pub use config::{ConfigFile, SearchConfig};
pub use engine::{CorpusProvider, SearchEngine};
pub use error::{ConfigError, Error, Result};
pub use fuzzy::{substring_distance_within, FieldMatch, FuzzyMatcher};
pub use index::{CorpusIndex, IndexVersion};
pub use search::facet::{visible_tags, FacetFilter, TagMode};
pub use search::query::{parse_query, plan_query, QueryPlan};
pub use search::{search, SearchHit, SearchResults};
pub use stats::CorpusStats;
pub use types::{Corpus, DocId, DocType, Document, Field, TypeId};
