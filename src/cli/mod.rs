// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the wikisift command-line interface.
//!
//! Three subcommands over a JSON page export: `search` runs the full
//! fuzzy-then-facet pipeline, `tags` lists the tag picker (optionally
//! narrowed), and `stats` prints the dashboard numbers.

pub mod display;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use wikisift::TagMode;

#[derive(Parser)]
#[command(
    name = "wikisift",
    about = "Fuzzy search and faceted filtering for a personal wiki",
    version
)]
pub struct Cli {
    /// Log more (repeat for trace output)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args)]
pub struct PagesArg {
    /// JSON file holding an array of pages
    #[arg(short, long)]
    pub pages: PathBuf,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search pages and print ranked results
    Search {
        #[command(flatten)]
        pages: PagesArg,

        /// Search config (JSON): threshold, field_weights, tag_mode, fold_diacritics
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// How selected tags combine; required unless the config file sets it
        #[arg(long)]
        tag_mode: Option<TagMode>,

        /// Match threshold in [0, 1]; 0 accepts exact occurrences only
        #[arg(long)]
        threshold: Option<f64>,

        /// Keep only pages of this type id
        #[arg(long = "type")]
        type_id: Option<u64>,

        /// Keep only pages carrying this tag (repeatable)
        #[arg(long = "tag")]
        tags: Vec<String>,

        /// Maximum number of results to print
        #[arg(short, long, default_value = "20")]
        limit: usize,

        /// Query words; none lists every page that passes the facets
        query: Vec<String>,
    },

    /// List tag names, optionally narrowed by a case-insensitive substring
    Tags {
        #[command(flatten)]
        pages: PagesArg,

        filter: Option<String>,
    },

    /// Show corpus statistics
    Stats {
        #[command(flatten)]
        pages: PagesArg,
    },
}
