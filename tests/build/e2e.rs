//! Config file + page export + engine, the way the CLI wires them.

use std::fs;

use wikisift::{
    ConfigError, ConfigFile, CorpusStats, Error, FacetFilter, JsonPageProvider, SearchEngine,
    TagMode,
};

const PAGES: &str = r#"[
    {"id": 1, "title": "Rust ownership", "content": "borrowing",
     "type": {"id": 1, "name": "DEFINITION"}, "tags": [{"name": "rust"}, {"name": "memory"}],
     "updatedAt": "2025-03-01T00:00:00Z"},
    {"id": 2, "title": "Release workflow", "content": "publish the crate",
     "type": {"id": 3, "name": "WORKFLOW"}, "tags": [{"name": "rust"}, {"name": "ops"}],
     "updatedAt": "2025-04-01T00:00:00Z"},
    {"id": 3, "title": "Grocery list", "content": "eggs", "tags": []}
]"#;

#[test]
fn search_from_files() {
    let dir = tempfile::tempdir().unwrap();
    let pages = dir.path().join("pages.json");
    let config = dir.path().join("config.json");
    fs::write(&pages, PAGES).unwrap();
    fs::write(&config, r#"{"threshold": 0.3, "tag_mode": "any"}"#).unwrap();

    let config = ConfigFile::from_path(&config).unwrap().resolve(None).unwrap();
    assert_eq!(config.tag_mode, TagMode::Any);

    let mut engine = SearchEngine::new(config).unwrap();
    let version = engine.load(&JsonPageProvider::new(&pages)).unwrap();

    let filter = FacetFilter::new().with_tags(["memory", "ops"]);
    let results = engine.search_at(version, "rust", &filter).unwrap();
    let ids: Vec<u64> = results.ids().iter().map(|id| id.get()).collect();
    assert_eq!(ids, vec![1, 2]);
}

#[test]
fn reload_picks_up_edits() {
    let dir = tempfile::tempdir().unwrap();
    let pages = dir.path().join("pages.json");
    fs::write(&pages, PAGES).unwrap();

    let provider = JsonPageProvider::new(&pages);
    let mut engine =
        SearchEngine::new(ConfigFile::default().resolve(Some(TagMode::All)).unwrap()).unwrap();
    let before = engine.load(&provider).unwrap();
    assert!(engine.search("tomatoes", &FacetFilter::new()).is_empty());

    fs::write(&pages, r#"[{"id": 7, "title": "Tomatoes"}]"#).unwrap();
    let after = engine.load(&provider).unwrap();
    assert!(after > before);
    assert_eq!(engine.search("tomatoes", &FacetFilter::new()).len(), 1);
    assert!(matches!(
        engine.search_at(before, "tomatoes", &FacetFilter::new()),
        Err(Error::StaleIndex { .. })
    ));
}

#[test]
fn config_without_tag_mode_needs_override() {
    let file = ConfigFile::from_json(r#"{"threshold": 0.25}"#).unwrap();
    assert!(matches!(
        file.clone().resolve(None),
        Err(Error::Config(ConfigError::MissingTagMode))
    ));
    assert!(file.resolve(Some(TagMode::All)).is_ok());
}

#[test]
fn stats_from_export() {
    let dir = tempfile::tempdir().unwrap();
    let pages = dir.path().join("pages.json");
    fs::write(&pages, PAGES).unwrap();

    let mut engine =
        SearchEngine::new(ConfigFile::default().resolve(Some(TagMode::All)).unwrap()).unwrap();
    engine.load(&JsonPageProvider::new(&pages)).unwrap();

    let stats = CorpusStats::compute(engine.index().corpus());
    assert_eq!(stats.total, 3);
    assert_eq!(stats.total_tags, 3);
    assert_eq!(stats.by_type.get("WORKFLOW"), Some(&1));
    assert_eq!(stats.by_type.get("No type"), Some(&1));
    assert_eq!(stats.top_tags[0].tag, "rust");
    let recent: Vec<u64> = stats.recent.iter().map(|id| id.get()).collect();
    assert_eq!(recent, vec![2, 1, 3]);
}
