use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use cheatgen_core::{Catalogs, CoreErrorCode};

fn temp_test_dir(prefix: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system time before unix epoch")
        .as_nanos();
    std::env::temp_dir().join(format!(
        "cheatgen_{}_{}_{}",
        prefix,
        std::process::id(),
        nanos
    ))
}

#[test]
fn load_from_dir_reads_all_cache_files() {
    let root = temp_test_dir("catalog_full");
    fs::create_dir_all(&root).expect("failed to create temp root");

    fs::write(
        root.join("items_cache.json"),
        r#"[{"name": "Stone", "id": "Stone"}, {"name": "Flint", "id": "Flint"}]"#,
    )
    .expect("failed to write items fixture");
    fs::write(
        root.join("creatures_cache.json"),
        r#"[{"name": "Rex", "class": "Rex_Character_BP_C"}]"#,
    )
    .expect("failed to write creatures fixture");
    fs::write(
        root.join("locations_cache.json"),
        r#"[{"name": "Red Obelisk", "code": "260000 238000 -10800"}]"#,
    )
    .expect("failed to write locations fixture");
    fs::write(
        root.join("colors_cache.json"),
        r##"[{"name": "Red", "id": 1, "hex": "#FF0000"}]"##,
    )
    .expect("failed to write colors fixture");
    fs::write(
        root.join("commands_cache.json"),
        r#"[{"name": "Fly", "description": "Enables fly mode", "syntax": "cheat fly"}]"#,
    )
    .expect("failed to write commands fixture");
    fs::write(
        root.join("taming_cache.json"),
        r#"[{"name": "Rex", "tame_type": "Knockout", "feed": "Raw Meat", "notes": ""}]"#,
    )
    .expect("failed to write taming fixture");

    let catalogs = Catalogs::load_from_dir(&root).expect("catalogs should load");
    assert_eq!(catalogs.items().len(), 2);
    assert_eq!(catalogs.creatures().len(), 1);
    assert_eq!(catalogs.locations().len(), 1);
    assert_eq!(catalogs.colors().len(), 1);
    assert_eq!(catalogs.commands().len(), 1);
    assert_eq!(catalogs.taming().len(), 1);

    // Items sort case-insensitively by name.
    assert_eq!(catalogs.items()[0].name, "Flint");
    assert_eq!(catalogs.items()[1].name, "Stone");

    let taming = catalogs
        .taming_for("rex")
        .expect("taming lookup should be case-insensitive");
    assert_eq!(taming.tame_type, "Knockout");

    let _ = fs::remove_dir_all(&root);
}

#[test]
fn missing_cache_files_load_as_empty_catalogs() {
    let root = temp_test_dir("catalog_missing");
    fs::create_dir_all(&root).expect("failed to create temp root");

    let catalogs = Catalogs::load_from_dir(&root).expect("empty dir should still load");
    assert!(catalogs.items().is_empty());
    assert!(catalogs.creatures().is_empty());
    assert!(catalogs.commands().is_empty());

    let _ = fs::remove_dir_all(&root);
}

#[test]
fn corrupt_cache_file_loads_as_empty_catalog() {
    let root = temp_test_dir("catalog_corrupt");
    fs::create_dir_all(&root).expect("failed to create temp root");

    fs::write(root.join("items_cache.json"), b"not json at all {{{")
        .expect("failed to write corrupt fixture");
    fs::write(
        root.join("creatures_cache.json"),
        r#"[{"name": "Dodo", "class": "Dodo_Character_BP_C"}]"#,
    )
    .expect("failed to write creatures fixture");

    let catalogs = Catalogs::load_from_dir(&root).expect("catalogs should load");
    assert!(catalogs.items().is_empty());
    assert_eq!(catalogs.creatures().len(), 1);

    let _ = fs::remove_dir_all(&root);
}

#[test]
fn load_from_dir_rejects_non_directory() {
    let root = temp_test_dir("catalog_not_dir");

    let err = Catalogs::load_from_dir(&root).expect_err("missing dir must be an error");
    assert_eq!(err.code, CoreErrorCode::Io);
}

#[test]
fn taming_entries_tolerate_missing_optional_fields() {
    let root = temp_test_dir("catalog_taming_partial");
    fs::create_dir_all(&root).expect("failed to create temp root");

    fs::write(root.join("taming_cache.json"), r#"[{"name": "Achatina"}]"#)
        .expect("failed to write taming fixture");

    let catalogs = Catalogs::load_from_dir(&root).expect("catalogs should load");
    let entry = catalogs
        .taming_for("Achatina")
        .expect("entry should be present");
    assert!(entry.tame_type.is_empty());
    assert!(entry.feed.is_empty());
    assert!(entry.notes.is_empty());

    let _ = fs::remove_dir_all(&root);
}
