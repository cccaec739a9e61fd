//! `mapstudio config` - inspect and edit the workstation configuration.
//!
//! All subcommands resolve the layered configuration first, so `get`,
//! `list`, and `check` always describe the same merged view the rest of
//! the tool sees.

use std::path::{Path, PathBuf};

use mapstudio_adapters::LocalFilesystem;
use mapstudio_core::application::{ConfigStore, Filesystem};
use mapstudio_core::codec::{self, ConfigFormat};

use crate::{
    cli::{ConfigCommands, OutputFormat, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
pub fn execute(cmd: ConfigCommands, global: GlobalArgs, output: OutputManager) -> CliResult<()> {
    let base_dir = global
        .config_dir
        .clone()
        .unwrap_or_else(AppConfig::workstation_dir);
    let mut store = ConfigStore::with_defaults(Box::new(LocalFilesystem::new()));
    store.resolve(&base_dir);

    match cmd {
        ConfigCommands::Get { key } => {
            let (section, field) = split_key(&key)?;
            match store.get(section, field) {
                Some(value) => output.value(&value.to_string())?,
                None => {
                    return Err(CliError::ConfigError {
                        message: format!("unknown config key: '{key}'"),
                        source: None,
                    });
                }
            }
        }

        ConfigCommands::Set { key, value, format } => {
            let (section, field) = split_key(&key)?;
            let typed = codec::coerce_scalar(&value);
            store.set(section, field, typed);
            // First write into a fresh workstation dir must not fail on the
            // missing directory itself.
            LocalFilesystem::new().create_dir_all(&base_dir)?;
            let path = store.save(format.to_core(), &base_dir)?;
            output.success(&format!("{key} = {value}"))?;
            output.print(&format!("  saved to {}", path.display()))?;
        }

        ConfigCommands::List => {
            let format = if output.format() == OutputFormat::Json {
                ConfigFormat::Json
            } else {
                ConfigFormat::Yaml
            };
            let rendered = codec::encode(format, store.mapping())
                .map_err(mapstudio_core::error::StudioError::from)?;
            output.value(rendered.trim_end())?;
        }

        ConfigCommands::Path => {
            output.value(&base_dir.display().to_string())?;
        }

        ConfigCommands::Check => {
            report_sources(&store, &base_dir, &output)?;
        }
    }

    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

fn split_key(key: &str) -> CliResult<(&str, &str)> {
    match key.split_once('.') {
        Some((section, field)) if !section.is_empty() && !field.is_empty() => {
            Ok((section, field))
        }
        _ => Err(CliError::InvalidInput {
            message: format!(
                "expected a dotted key like 'connection.installation_path', got '{key}'"
            ),
            source: None,
        }),
    }
}

fn report_sources(store: &ConfigStore, base_dir: &Path, output: &OutputManager) -> CliResult<()> {
    output.header(&format!("Configuration in {}:", base_dir.display()))?;

    for path in store.applied_sources() {
        output.success(&format!("applied {}", path.display()))?;
    }
    for skipped in store.skipped_sources() {
        output.warning(&format!("skipped {}: {}", skipped.path.display(), skipped.reason))?;
    }
    if store.applied_sources().is_empty() && store.skipped_sources().is_empty() {
        output.info("no config files found; using built-in defaults")?;
    }

    output.print("")?;
    output.print("Resolved tool locations:")?;
    report_lookup(output, "editor install", store.resolved_install_path())?;
    report_lookup(output, "world editor", store.resolved_tool_path("world_editor"))?;
    report_lookup(output, "jass tool", store.resolved_tool_path("jass_tool"))?;
    report_lookup(output, "assets dir", store.resolved_assets_dir())?;

    Ok(())
}

fn report_lookup(output: &OutputManager, label: &str, path: Option<PathBuf>) -> CliResult<()> {
    match path {
        Some(path) => output.print(&format!("  {label:<14} {}", path.display()))?,
        None => output.print(&format!("  {label:<14} (not configured)"))?,
    }
    Ok(())
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_key_accepts_dotted_pairs() {
        assert_eq!(
            split_key("connection.installation_path").unwrap(),
            ("connection", "installation_path")
        );
    }

    #[test]
    fn split_key_rejects_bare_names() {
        assert!(matches!(
            split_key("install_path"),
            Err(CliError::InvalidInput { .. })
        ));
    }

    #[test]
    fn split_key_rejects_empty_parts() {
        assert!(split_key(".key").is_err());
        assert!(split_key("section.").is_err());
    }

    #[test]
    fn split_key_keeps_extra_dots_in_field() {
        // Only the first dot separates section from field.
        assert_eq!(split_key("tools.editor.exe").unwrap(), ("tools", "editor.exe"));
    }
}
