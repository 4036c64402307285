use std::fs;

use bestiary::{
    CatalogStore, EntryId, FileSource, LoadError, StaticSource,
    domain::{StarRating, labels},
};
use pretty_assertions::assert_eq;
use tempfile::tempdir;

const DEMO: &str = include_str!("../demos/monsters.json");

#[tokio::test]
async fn demo_catalog_loads_in_id_order() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("monsters.json");
    fs::write(&path, DEMO).unwrap();

    let store = CatalogStore::load(&FileSource::new(&path)).await.unwrap();
    assert_eq!(store.len(), 4);
    assert_eq!(
        store.ids().collect::<Vec<_>>(),
        vec![EntryId(1), EntryId(2), EntryId(3), EntryId(4)]
    );

    let golem = store.find_by_id(EntryId(3)).unwrap();
    assert_eq!(golem.star, StarRating::Text("4+".into()));
    assert_eq!(golem.location_label(), labels::UNKNOWN);
    let rows = golem.basic_rows();
    assert_eq!(rows[labels::ATTR_CATALOG_NUMBER], "3");
    assert_eq!(rows[labels::ATTR_RARITY], labels::NOT_AVAILABLE);

    let bat = store.find_by_id(EntryId(4)).unwrap();
    assert!(bat.detail.guide_lines.is_empty());
    assert_eq!(bat.species_label(), labels::UNKNOWN);
    assert!(store.find_by_id(EntryId(99)).is_none());
}

#[tokio::test]
async fn wrapped_document_is_accepted() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("wrapped.json");
    fs::write(&path, r#"{"monsters": [{"id": 7, "name": "wisp"}]}"#).unwrap();
    let store = CatalogStore::load(&FileSource::new(&path)).await.unwrap();
    assert_eq!(store.find_by_id(EntryId(7)).map(|e| e.name.as_str()), Some("wisp"));
}

#[tokio::test]
async fn missing_file_reports_the_path() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("absent.json");
    let err = CatalogStore::load(&FileSource::new(&path)).await.unwrap_err();
    assert!(matches!(err, LoadError::Io { .. }));
    assert!(err.message().contains("absent.json"));
}

#[tokio::test]
async fn malformed_document_is_rejected_whole() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, r#"[{"id": 1, "name": "ok"}, {"name": "no id"}]"#).unwrap();
    let err = CatalogStore::load(&FileSource::new(&path)).await.unwrap_err();
    assert!(matches!(err, LoadError::Malformed(_)));
}

#[tokio::test]
async fn duplicate_ids_are_rejected() {
    let entries =
        serde_json::from_str(r#"[{"id": 1, "name": "a"}, {"id": 1, "name": "b"}]"#).unwrap();
    let err = CatalogStore::load(&StaticSource::new(entries)).await.unwrap_err();
    assert!(matches!(err, LoadError::DuplicateId(EntryId(1))));
}
