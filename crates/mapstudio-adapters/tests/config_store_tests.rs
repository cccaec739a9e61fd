//! Layered configuration resolution through the in-memory filesystem adapter.

use std::path::{Path, PathBuf};

use mapstudio_adapters::MemoryFilesystem;
use mapstudio_core::application::{ConfigStore, Filesystem};
use mapstudio_core::codec::ConfigFormat;

fn store_over(fs: &MemoryFilesystem) -> ConfigStore {
    ConfigStore::with_defaults(Box::new(fs.clone()))
}

#[test]
fn defaults_survive_an_empty_directory() {
    let fs = MemoryFilesystem::new();
    let mut store = store_over(&fs);
    store.resolve(Path::new("/cfg"));

    assert!(store.applied_sources().is_empty());
    assert_eq!(store.get_str("editor", "default_editor", ""), "world_editor");
    assert_eq!(store.get_str("project", "default_project_type", ""), "rpg");
    assert!(store.get_bool("editor", "backup_enabled", false));
}

#[test]
fn ini_overrides_json_overrides_yaml() {
    let fs = MemoryFilesystem::new();
    fs.seed_file("/cfg/config.yaml", "development:\n  log_level: debug\n  test_mode: true\n");
    fs.seed_file("/cfg/config.json", "{\"development\": {\"log_level\": \"warn\"}}");
    fs.seed_file("/cfg/config.ini", "[development]\nlog_level = error\n");

    let mut store = store_over(&fs);
    store.resolve(Path::new("/cfg"));

    assert_eq!(store.applied_sources().len(), 3);
    assert_eq!(store.get_str("development", "log_level", ""), "error");
    // Keys only the lowest layer sets are still merged in.
    assert!(store.get_bool("development", "test_mode", false));
}

#[test]
fn malformed_layer_is_skipped_but_recorded() {
    let fs = MemoryFilesystem::new();
    fs.seed_file("/cfg/config.yaml", "development: [broken");
    fs.seed_file("/cfg/config.ini", "[development]\ndebug_mode = true\n");

    let mut store = store_over(&fs);
    store.resolve(Path::new("/cfg"));

    assert_eq!(store.applied_sources(), [PathBuf::from("/cfg/config.ini")]);
    assert_eq!(store.skipped_sources().len(), 1);
    assert!(store.skipped_sources()[0].path.ends_with("config.yaml"));
    assert!(store.get_bool("development", "debug_mode", false));
}

#[test]
fn set_save_resolve_round_trip() {
    let fs = MemoryFilesystem::new();
    fs.create_dir_all(Path::new("/cfg")).unwrap();

    let mut store = store_over(&fs);
    store.set("connection", "installation_path", "/games/war3");
    let written = store.save(ConfigFormat::Json, Path::new("/cfg")).unwrap();
    assert_eq!(written, PathBuf::from("/cfg/config.json"));

    let mut reread = store_over(&fs);
    reread.resolve(Path::new("/cfg"));
    assert_eq!(
        reread.get_str("connection", "installation_path", ""),
        "/games/war3"
    );
}

#[test]
fn derived_lookups_track_files_on_the_adapter() {
    let fs = MemoryFilesystem::new();
    fs.seed_file(
        "/cfg/config.yaml",
        "connection:\n  installation_path: /games/war3\n",
    );
    fs.seed_file("/games/war3/World Editor.exe", "");
    fs.create_dir_all(Path::new("/games/war3/Maps")).unwrap();

    let mut store = store_over(&fs);
    store.resolve(Path::new("/cfg"));

    assert_eq!(
        store.resolved_install_path(),
        Some(PathBuf::from("/games/war3"))
    );
    assert_eq!(
        store.resolved_tool_path("world_editor"),
        Some(PathBuf::from("/games/war3/World Editor.exe"))
    );
    // No JNGP executable was seeded.
    assert_eq!(store.resolved_tool_path("jass_tool"), None);
    assert_eq!(
        store.resolved_assets_dir(),
        Some(PathBuf::from("/games/war3/Maps"))
    );
}
