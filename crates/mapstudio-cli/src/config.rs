//! CLI settings.
//!
//! [`AppConfig`] is the CLI's *own* settings file (TOML), distinct from the
//! workstation configuration managed by `mapstudio config`.  It is loaded
//! once at startup and passed down by value; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Settings file (`--config` or the default location)
//! 3. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{CliError, CliResult};

/// CLI settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Default values for new projects.
    pub defaults: Defaults,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    /// Template ID used when `--type` is omitted.
    pub project_type: Option<String>,
    /// Author recorded when `--author` is omitted.
    pub author: Option<String>,
    /// Parent directory used when `--output` is omitted.
    pub output_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl AppConfig {
    /// Load settings from `config_file` (the `--config` flag) or the default
    /// location.
    ///
    /// An explicitly passed file must exist and parse; the default file is
    /// optional and silently falls back to built-in defaults when absent.
    pub fn load(config_file: Option<&PathBuf>) -> CliResult<Self> {
        match config_file {
            Some(path) => Self::read_toml(path),
            None => {
                let path = Self::settings_path();
                if path.is_file() {
                    Self::read_toml(&path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    fn read_toml(path: &Path) -> CliResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| CliError::ConfigError {
            message: format!("cannot read settings file {}: {e}", path.display()),
            source: Some(Box::new(e)),
        })?;
        toml::from_str(&text).map_err(|e| CliError::ConfigError {
            message: format!("invalid settings file {}: {e}", path.display()),
            source: Some(Box::new(e)),
        })
    }

    /// Path to the default settings file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.mapstudio.toml` in the current directory.
    pub fn settings_path() -> PathBuf {
        directories::ProjectDirs::from("com", "mapstudio", "mapstudio")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".mapstudio.toml"))
    }

    /// Directory searched for workstation config files when `--config-dir`
    /// is not given.  Shares the platform config directory with
    /// [`Self::settings_path`].
    pub fn workstation_dir() -> PathBuf {
        directories::ProjectDirs::from("com", "mapstudio", "mapstudio")
            .map(|d| d.config_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from("."))
    }
}
