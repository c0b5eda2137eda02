// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use wikisift::{
    visible_tags, ConfigFile, Corpus, CorpusStats, FacetFilter, JsonPageProvider, SearchEngine,
    TagMode,
};

mod cli;
use cli::{display, Cli, Commands};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

/// Log to stderr so stdout stays clean for results. `RUST_LOG` wins over `-v`.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("wikisift={}", level)));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Search {
            pages,
            config,
            tag_mode,
            threshold,
            type_id,
            tags,
            limit,
            query,
        } => run_search(SearchArgs {
            pages: &pages.pages,
            config: config.as_deref(),
            tag_mode,
            threshold,
            type_id,
            tags,
            limit,
            query: query.join(" "),
        }),
        Commands::Tags { pages, filter } => {
            let corpus = load_corpus(&pages.pages)?;
            let all = corpus.tag_names();
            display::print_tags(&visible_tags(&all, filter.as_deref().unwrap_or("")));
            Ok(())
        }
        Commands::Stats { pages } => {
            let corpus = load_corpus(&pages.pages)?;
            let stats = CorpusStats::compute(&corpus);
            display::print_stats(&stats, |id| {
                corpus
                    .iter()
                    .find(|d| d.id == id)
                    .map(|d| d.title().to_string())
                    .unwrap_or_default()
            });
            Ok(())
        }
    }
}

struct SearchArgs<'a> {
    pages: &'a Path,
    config: Option<&'a Path>,
    tag_mode: Option<TagMode>,
    threshold: Option<f64>,
    type_id: Option<u64>,
    tags: Vec<String>,
    limit: usize,
    query: String,
}

fn run_search(args: SearchArgs<'_>) -> Result<()> {
    let mut file = match args.config {
        Some(path) => ConfigFile::from_path(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => ConfigFile::default(),
    };
    if args.threshold.is_some() {
        file.threshold = args.threshold;
    }
    let config = file
        .resolve(args.tag_mode)
        .context("invalid search configuration (pass --tag-mode all|any or set tag_mode)")?;

    let mut engine = SearchEngine::new(config)?;
    let version = engine
        .load(&JsonPageProvider::new(args.pages))
        .with_context(|| format!("loading pages from {}", args.pages.display()))?;

    let mut filter = FacetFilter::new().with_tags(args.tags);
    if let Some(type_id) = args.type_id {
        filter = filter.with_type(type_id);
    }

    let results = engine.search_at(version, &args.query, &filter)?;
    let shown: Vec<_> = results.hits().iter().take(args.limit).copied().collect();
    display::print_results(&args.query, &shown, results.len());
    Ok(())
}

fn load_corpus(path: &Path) -> Result<Corpus> {
    use wikisift::CorpusProvider;

    let docs = JsonPageProvider::new(path)
        .provide_corpus()
        .with_context(|| format!("loading pages from {}", path.display()))?;
    Ok(Corpus::new(docs)?)
}
