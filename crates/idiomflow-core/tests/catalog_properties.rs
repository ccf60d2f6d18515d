//! Behaviour of a catalog loaded from the shipped data file

use std::collections::HashSet;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use idiomflow_core::{Catalog, CatalogLoader, FileSource, JsonSource, LoadError, SearchOptions};
use idiomflow_types::LoadStatus;
use pretty_assertions::assert_eq;

fn shipped_data() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../data/idioms.json")
}

fn shipped_catalog() -> Catalog {
    CatalogLoader::try_load(&FileSource::new(shipped_data())).expect("shipped catalog loads")
}

#[test]
fn loaded_records_are_valid_and_uniquely_identified() {
    let catalog = shipped_catalog();
    let records = catalog.fetch_all();

    assert!(records.len() >= 76);
    assert!(!catalog.is_degraded());
    assert!(
        records
            .iter()
            .all(|r| !r.idiom.is_empty() && !r.meaning.is_empty())
    );

    let ids: HashSet<_> = records.iter().map(|r| r.id).collect();
    assert_eq!(ids.len(), records.len());
}

#[test]
fn default_search_returns_first_fifty_records() {
    let catalog = shipped_catalog();
    let results = catalog.search(&SearchOptions::default());

    assert_eq!(results.len(), catalog.len().min(50));
    for (found, expected) in results.iter().zip(catalog.fetch_all()) {
        assert_eq!(found.id, expected.id);
    }
}

#[test]
fn finds_break_the_ice() {
    let catalog = shipped_catalog();
    let results = catalog.search(&SearchOptions::default().query("break the ice"));

    assert!(results.iter().any(|r| r.idiom == "Break the ice"));
}

#[test]
fn category_filter_ignores_case() {
    let catalog = shipped_catalog();

    let upper = catalog.search(&SearchOptions::default().category("Popular").limit(usize::MAX));
    let lower = catalog.search(&SearchOptions::default().category("popular").limit(usize::MAX));

    assert!(!upper.is_empty());
    assert!(upper.iter().all(|r| r.category.eq_ignore_ascii_case("popular")));

    let upper_ids: Vec<_> = upper.iter().map(|r| r.id).collect();
    let lower_ids: Vec<_> = lower.iter().map(|r| r.id).collect();
    assert_eq!(upper_ids, lower_ids);
}

#[test]
fn unknown_query_matches_nothing() {
    let catalog = shipped_catalog();
    assert!(
        catalog
            .search(&SearchOptions::default().query("zzz_no_such_idiom_zzz"))
            .is_empty()
    );
}

#[test]
fn duplicate_categories_collapse() {
    let json = r#"[
        {"idiom": "Break the ice", "meaning": "Start talking", "category": "Popular"},
        {"idiom": "Hit the books", "meaning": "Study hard", "category": "Education"},
        {"idiom": "Spill the beans", "meaning": "Reveal a secret", "category": "Popular"}
    ]"#;
    let catalog = CatalogLoader::try_load(&JsonSource::new(json)).unwrap();

    let categories: Vec<_> = catalog.distinct_categories().into_iter().collect();
    assert_eq!(categories, vec!["Education", "Popular"]);
}

#[test]
fn stats_agree_with_other_operations() {
    let catalog = shipped_catalog();
    let stats = catalog.stats();

    assert_eq!(stats.total, catalog.fetch_all().len());
    assert_eq!(stats.categories, catalog.distinct_categories().len());
    assert_eq!(stats.difficulty_levels, catalog.distinct_difficulties().len());
}

#[test]
fn missing_file_falls_back_to_sample() {
    let dir = tempfile::tempdir().unwrap();
    let source = FileSource::new(dir.path().join("idioms.json"));

    let err = CatalogLoader::try_load(&source).unwrap_err();
    assert!(matches!(err, LoadError::FileNotFound(_)));

    let catalog = CatalogLoader::load(&source);
    assert!(catalog.is_degraded());
    assert!(matches!(catalog.status(), LoadStatus::Fallback { .. }));
    assert_eq!(catalog.fetch_all().len(), 1);
    assert_eq!(catalog.fetch_all()[0].idiom, "Break the ice");
}

#[test]
fn corrupt_file_falls_back_to_empty() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"{ this is not json").unwrap();

    let catalog = CatalogLoader::load(&FileSource::new(file.path()));
    assert!(catalog.is_empty());
    assert!(matches!(catalog.status(), LoadStatus::Empty { .. }));
    assert!(catalog.fetch_all().is_empty());
    assert_eq!(catalog.stats().total, 0);
}

#[tokio::test]
async fn concurrent_readers_see_the_same_catalog() {
    let catalog = Arc::new(shipped_catalog());
    let expected = catalog.stats();

    let mut handles = Vec::new();
    for i in 0..16 {
        let catalog = Arc::clone(&catalog);
        handles.push(tokio::spawn(async move {
            let options = if i % 2 == 0 {
                SearchOptions::default().category("education")
            } else {
                SearchOptions::default().query("the")
            };
            (catalog.stats(), catalog.search(&options).len())
        }));
    }

    let mut sizes = HashSet::new();
    for (i, handle) in handles.into_iter().enumerate() {
        let (stats, found) = handle.await.unwrap();
        assert_eq!(stats, expected);
        sizes.insert((i % 2, found));
    }
    assert_eq!(sizes.len(), 2);
}
