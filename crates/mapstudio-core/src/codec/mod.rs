//! Config codecs: decode and encode [`ConfigMapping`]s in the three
//! on-disk formats.
//!
//! YAML and JSON go through serde; INI is a small hand-written two-level
//! parser because the format has no nesting beyond `[section]` headers.

use std::path::Path;

use thiserror::Error;

use crate::domain::value::ConfigMapping;
use crate::domain::ErrorCategory;

mod ini;
mod json;
mod yaml;

/// One of the three supported configuration file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigFormat {
    Yaml,
    Json,
    Ini,
}

impl ConfigFormat {
    /// Resolution order: later formats override earlier ones.
    pub const PRECEDENCE: [ConfigFormat; 3] = [Self::Yaml, Self::Json, Self::Ini];

    pub fn extension(&self) -> &'static str {
        match self {
            Self::Yaml => "yaml",
            Self::Json => "json",
            Self::Ini => "ini",
        }
    }

    /// The well-known file name this format is loaded from.
    pub fn file_name(&self) -> &'static str {
        match self {
            Self::Yaml => "config.yaml",
            Self::Json => "config.json",
            Self::Ini => "config.ini",
        }
    }

    pub fn from_extension(path: &Path) -> Option<ConfigFormat> {
        match path.extension()?.to_str()? {
            "yaml" | "yml" => Some(Self::Yaml),
            "json" => Some(Self::Json),
            "ini" => Some(Self::Ini),
            _ => None,
        }
    }
}

impl std::fmt::Display for ConfigFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.extension())
    }
}

/// Decode or encode failures, tagged with the format they occurred in.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CodecError {
    #[error("failed to parse {format} configuration: {reason}")]
    Parse { format: ConfigFormat, reason: String },

    #[error("failed to encode {format} configuration: {reason}")]
    Encode { format: ConfigFormat, reason: String },

    /// The document parsed but contains a value outside the config model
    /// (floats, sequences, nulls, non-string keys).
    #[error("unsupported value in {format} configuration: {detail}")]
    UnsupportedValue { format: ConfigFormat, detail: String },

    /// INI can only represent two levels: sections of scalar keys.
    #[error("cannot flatten '{key}' into section/key form")]
    Flatten { key: String },
}

impl CodecError {
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Parse { format, .. } => vec![format!(
                "Check the syntax of your {} file",
                format.file_name()
            )],
            Self::UnsupportedValue { .. } => vec![
                "Config values must be strings, booleans, integers, or nested sections"
                    .to_string(),
            ],
            Self::Encode { .. } => Vec::new(),
            Self::Flatten { .. } => vec![
                "INI output supports only [section] headers with scalar keys".to_string(),
                "Save as yaml or json to keep deeper nesting".to_string(),
            ],
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Parse { .. } | Self::UnsupportedValue { .. } => ErrorCategory::Configuration,
            Self::Encode { .. } | Self::Flatten { .. } => ErrorCategory::Validation,
        }
    }
}

/// Decode `text` as `format` into a mapping.
pub fn decode(format: ConfigFormat, text: &str) -> Result<ConfigMapping, CodecError> {
    match format {
        ConfigFormat::Yaml => yaml::decode(text),
        ConfigFormat::Json => json::decode(text),
        ConfigFormat::Ini => ini::decode(text),
    }
}

/// Encode `mapping` as `format`.
pub fn encode(format: ConfigFormat, mapping: &ConfigMapping) -> Result<String, CodecError> {
    match format {
        ConfigFormat::Yaml => yaml::encode(mapping),
        ConfigFormat::Json => json::encode(mapping),
        ConfigFormat::Ini => ini::encode(mapping),
    }
}

/// Parse a scalar string the way the INI decoder does: booleans first, then
/// integers, then plain text. Shared with the CLI so `config set` coerces
/// values identically across formats.
pub fn coerce_scalar(raw: &str) -> crate::domain::value::ConfigValue {
    ini::coerce_scalar(raw)
}

// ── tests ─────────────────────────────────────────────────────────────────────
