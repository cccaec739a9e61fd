//! Cross-module tests through the public prelude.

use mapstudio_core::prelude::*;

#[test]
fn catalog_parse_feeds_definition_lookup() {
    for definition in TemplateCatalog::all() {
        let kind = TemplateCatalog::parse(definition.kind.id()).unwrap();
        assert_eq!(TemplateCatalog::definition(kind).display_name, definition.display_name);
    }
}

#[test]
fn unknown_template_error_names_the_id() {
    let err = TemplateCatalog::parse("tower-wars").unwrap_err();
    assert_eq!(err.to_string(), "unknown template 'tower-wars'");
    let studio: StudioError = err.into();
    assert_eq!(studio.category(), ErrorCategory::NotFound);
}

#[test]
fn every_format_decodes_into_the_same_mapping() {
    let yaml = "editor:\n  default_editor: world_editor\n  backup_enabled: true\n";
    let json = "{\"editor\": {\"default_editor\": \"world_editor\", \"backup_enabled\": true}}";
    let ini = "[editor]\ndefault_editor = world_editor\nbackup_enabled = true\n";

    let from_yaml = mapstudio_core::codec::decode(ConfigFormat::Yaml, yaml).unwrap();
    let from_json = mapstudio_core::codec::decode(ConfigFormat::Json, json).unwrap();
    let from_ini = mapstudio_core::codec::decode(ConfigFormat::Ini, ini).unwrap();

    assert_eq!(from_yaml, from_json);
    assert_eq!(from_json, from_ini);
}

#[test]
fn defaults_merged_with_an_overlay_keep_untouched_sections() {
    let mut merged = ConfigMapping::workstation_defaults();
    let overlay = mapstudio_core::codec::decode(
        ConfigFormat::Yaml,
        "development:\n  log_level: debug\n",
    )
    .unwrap();
    merged.deep_merge(overlay);

    assert_eq!(
        merged.get_nested("development", "log_level"),
        Some(&ConfigValue::from("debug"))
    );
    // Sections the overlay never mentioned are intact.
    assert_eq!(
        merged.get_nested("editor", "default_editor"),
        Some(&ConfigValue::from("world_editor"))
    );
    assert_eq!(
        merged.get_nested("project", "default_project_type"),
        Some(&ConfigValue::from("rpg"))
    );
}

#[test]
fn codec_errors_surface_as_configuration_category() {
    let err = mapstudio_core::codec::decode(ConfigFormat::Yaml, "broken: [").unwrap_err();
    let studio: StudioError = err.into();
    assert_eq!(studio.category(), ErrorCategory::Configuration);
    assert!(!studio.suggestions().is_empty());
}
