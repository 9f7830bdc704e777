use shot_sorter_catalog::{
    Catalog, CatalogEntry, CatalogError, append_entry, load_catalog, load_catalog_or_default,
    save_catalog,
};
use shot_sorter_core::GameId;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write_json(dir: &Path, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn load_catalog_from_json() {
    let tmp = TempDir::new().unwrap();
    let path = write_json(
        tmp.path(),
        "game-ids.json",
        r#"{"games":[{"id":612880,"name":"Test Game","year":2020},{"id":7,"name":"Unknown","year":0}]}"#,
    );

    let catalog = load_catalog(&path).unwrap();
    assert_eq!(catalog.len(), 2);
    let entry = catalog.find_by_id(GameId(612880)).unwrap();
    assert_eq!(entry.name, "Test Game");
    assert_eq!(entry.folder().dir_name(), "Test Game (2020)");
    assert_eq!(
        catalog.find_by_id(GameId(7)).unwrap().folder().dir_name(),
        "Unknown"
    );
    assert!(catalog.find_by_id(GameId(8)).is_none());
}

#[test]
fn missing_year_defaults_to_zero() {
    let tmp = TempDir::new().unwrap();
    let path = write_json(
        tmp.path(),
        "game-ids.json",
        r#"{"games":[{"id":1,"name":"No Year"}]}"#,
    );
    let catalog = load_catalog(&path).unwrap();
    assert_eq!(catalog.games[0].year, 0);
}

#[test]
fn missing_required_catalog_is_not_found() {
    let tmp = TempDir::new().unwrap();
    let err = load_catalog(&tmp.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, CatalogError::NotFound { .. }));
}

#[test]
fn missing_optional_catalog_is_empty() {
    let tmp = TempDir::new().unwrap();
    let catalog = load_catalog_or_default(&tmp.path().join("absent.json")).unwrap();
    assert!(catalog.is_empty());
}

#[test]
fn duplicate_ids_in_file_are_rejected() {
    let tmp = TempDir::new().unwrap();
    let path = write_json(
        tmp.path(),
        "game-ids.json",
        r#"{"games":[{"id":1,"name":"A","year":0},{"id":1,"name":"B","year":0}]}"#,
    );
    let err = load_catalog(&path).unwrap_err();
    assert!(matches!(err, CatalogError::DuplicateEntry { id } if id == GameId(1)));
}

#[test]
fn invalid_json_reports_path() {
    let tmp = TempDir::new().unwrap();
    let path = write_json(tmp.path(), "game-ids.json", "{not json");
    let err = load_catalog(&path).unwrap_err();
    assert!(matches!(err, CatalogError::Json { .. }));
    assert!(err.to_string().contains("game-ids.json"));
}

#[test]
fn append_creates_file_when_absent() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("nested").join("game-ids.json");

    let catalog = append_entry(&path, CatalogEntry::new(GameId(10), "First", 2001)).unwrap();
    assert_eq!(catalog.len(), 1);

    let raw: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(
        raw,
        serde_json::json!({"games": [{"id": 10, "name": "First", "year": 2001}]})
    );
}

#[test]
fn append_preserves_order() {
    let tmp = TempDir::new().unwrap();
    let path = write_json(
        tmp.path(),
        "game-ids.json",
        r#"{"games":[{"id":2,"name":"B","year":0},{"id":1,"name":"A","year":0}]}"#,
    );

    append_entry(&path, CatalogEntry::new(GameId(3), "C", 1999)).unwrap();

    let ids: Vec<u64> = load_catalog(&path)
        .unwrap()
        .games
        .iter()
        .map(|g| g.id.get())
        .collect();
    assert_eq!(ids, vec![2, 1, 3]);
}

#[test]
fn append_duplicate_leaves_file_untouched() {
    let tmp = TempDir::new().unwrap();
    let original = r#"{"games":[{"id":612880,"name":"Test Game","year":2020}]}"#;
    let path = write_json(tmp.path(), "game-ids.json", original);

    let err = append_entry(&path, CatalogEntry::new(GameId(612880), "Other", 1990)).unwrap_err();
    assert!(matches!(err, CatalogError::DuplicateEntry { .. }));
    assert_eq!(fs::read_to_string(&path).unwrap(), original);
}

#[test]
fn save_uses_four_space_indent_and_no_temp_leftover() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("game-ids.json");
    let mut catalog = Catalog::new();
    assert!(catalog.push(CatalogEntry::new(GameId(1), "A", 0)));
    assert!(!catalog.push(CatalogEntry::new(GameId(1), "Again", 0)));

    save_catalog(&path, &catalog).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    assert!(text.starts_with("{\n    \"games\": ["));
    assert!(text.ends_with('\n'));
    assert!(!tmp.path().join("game-ids.json.tmp").exists());
}
