//! Scaffold generation driven through the in-memory filesystem adapter.
//!
//! These tests exercise the full generator path (validation, skeleton,
//! config synthesis, document rendering) against `MemoryFilesystem`, the
//! same adapter the CLI's `--dry-run` uses.

use std::path::{Path, PathBuf};

use mapstudio_adapters::MemoryFilesystem;
use mapstudio_core::application::{Filesystem, GenerateRequest, ScaffoldGenerator};
use mapstudio_core::domain::{DomainError, ProjectKind};
use mapstudio_core::error::StudioError;

fn request(name: &str, kind_id: &str) -> GenerateRequest {
    GenerateRequest {
        name: name.to_string(),
        kind_id: kind_id.to_string(),
        author: "Alice".to_string(),
        description: String::new(),
        output_dir: PathBuf::from("/maps"),
    }
}

fn generator_with(fs: &MemoryFilesystem) -> ScaffoldGenerator {
    ScaffoldGenerator::new(Box::new(fs.clone()))
}

#[test]
fn generates_the_full_skeleton() {
    let fs = MemoryFilesystem::new();
    let scaffold = generator_with(&fs).generate(&request("DemoMap", "rpg")).unwrap();

    assert_eq!(scaffold.name, "DemoMap");
    assert_eq!(scaffold.kind, ProjectKind::Rpg);
    assert_eq!(scaffold.root, PathBuf::from("/maps/DemoMap"));
    assert_eq!(scaffold.directory_count(), 15);
    assert_eq!(scaffold.file_count(), 6);

    for dir in [
        "docs/design",
        "docs/api",
        "maps",
        "triggers",
        "units",
        "items",
        "resources/models",
        "resources/textures",
        "resources/sounds",
        "resources/music",
        "scripts",
        "backups",
        "logs",
        "tests",
        "exports",
    ] {
        assert!(
            fs.exists(&scaffold.root.join(dir)),
            "missing directory {dir}"
        );
    }
    for file in [
        "project_config.yaml",
        "README.md",
        "docs/design/design_document.md",
        "maps/README.md",
        "triggers/base_triggers.j",
        "units/unit_design.md",
    ] {
        assert!(
            fs.read_file(&scaffold.root.join(file)).is_some(),
            "missing file {file}"
        );
    }
}

#[test]
fn config_records_type_author_and_fallback_description() {
    let fs = MemoryFilesystem::new();
    generator_with(&fs).generate(&request("DemoMap", "td")).unwrap();

    let config = fs
        .read_file(Path::new("/maps/DemoMap/project_config.yaml"))
        .unwrap();
    assert!(config.contains("type: td"));
    assert!(config.contains("author: Alice"));
    assert!(config.contains("map_size: 128x128"));
    // Empty request description falls back to the template's.
    assert!(config.contains("Wave-based defense map"));
}

#[test]
fn trigger_stub_is_template_specific() {
    let fs = MemoryFilesystem::new();
    generator_with(&fs).generate(&request("Arena", "moba")).unwrap();

    let stub = fs
        .read_file(Path::new("/maps/Arena/triggers/base_triggers.j"))
        .unwrap();
    assert!(stub.contains("function InitCustomTriggers"));
    assert!(stub.contains("InitLaneCreeps"));
    assert!(stub.contains("InitHeroSelection"));
}

#[test]
fn unknown_template_fails_before_any_write() {
    let fs = MemoryFilesystem::new();
    let err = generator_with(&fs)
        .generate(&request("DemoMap", "racing"))
        .unwrap_err();

    assert!(matches!(
        err,
        StudioError::Domain(DomainError::UnknownTemplate { .. })
    ));
    assert!(fs.list_files().is_empty());
    assert!(!fs.exists(Path::new("/maps/DemoMap")));
}

#[test]
fn invalid_name_fails_before_any_write() {
    let fs = MemoryFilesystem::new();
    for bad in ["", "   ", "a/b", "a\\b", ".", ".."] {
        let err = generator_with(&fs).generate(&request(bad, "rpg")).unwrap_err();
        assert!(
            matches!(
                err,
                StudioError::Domain(DomainError::InvalidProjectName { .. })
            ),
            "expected InvalidProjectName for {bad:?}"
        );
    }
    assert!(fs.list_files().is_empty());
}

#[test]
fn existing_target_is_rejected() {
    let fs = MemoryFilesystem::new();
    let generator = generator_with(&fs);
    generator.generate(&request("DemoMap", "rpg")).unwrap();

    let err = generator.generate(&request("DemoMap", "survival")).unwrap_err();
    assert!(err.to_string().contains("already exists"));
}

#[test]
fn same_name_under_different_parents_is_fine() {
    let fs = MemoryFilesystem::new();
    let generator = generator_with(&fs);
    generator.generate(&request("DemoMap", "rpg")).unwrap();

    let mut second = request("DemoMap", "rpg");
    second.output_dir = PathBuf::from("/other");
    generator.generate(&second).unwrap();
    assert!(fs.exists(Path::new("/other/DemoMap/project_config.yaml")));
}
