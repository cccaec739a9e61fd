//! Configuration value model.
//!
//! [`ConfigValue`] is the tagged value type every codec decodes into and every
//! consumer reads from: a leaf is a string, boolean, or integer; everything
//! else is a nested [`ConfigMapping`]. The merge algorithm lives here so that
//! YAML, JSON, and INI sources all merge identically.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A single configuration value: scalar leaf or nested mapping.
///
/// Serialized untagged so that on-disk files look like plain YAML/JSON data,
/// not like a Rust enum. Variant order matters for deserialization: booleans
/// and integers must be tried before strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConfigValue {
    Bool(bool),
    Int(i64),
    String(String),
    Mapping(ConfigMapping),
}

impl ConfigValue {
    /// Borrow the string payload, if this is a string leaf.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_mapping(&self) -> Option<&ConfigMapping> {
        match self {
            Self::Mapping(m) => Some(m),
            _ => None,
        }
    }

    /// `true` for scalar leaves, `false` for mappings.
    pub fn is_scalar(&self) -> bool {
        !matches!(self, Self::Mapping(_))
    }
}

impl fmt::Display for ConfigValue {
    /// Scalars render as their bare value; mappings render as a key list.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::String(s) => write!(f, "{s}"),
            Self::Mapping(m) => {
                let keys: Vec<&str> = m.keys().collect();
                write!(f, "{{{}}}", keys.join(", "))
            }
        }
    }
}

impl From<&str> for ConfigValue {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for ConfigValue {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<bool> for ConfigValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for ConfigValue {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

/// A tree of string keys to [`ConfigValue`]s.
///
/// Backed by a `BTreeMap` so iteration (and therefore encoding) is
/// deterministic regardless of source order. Key order carries no meaning.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConfigMapping(BTreeMap<String, ConfigValue>);

impl ConfigMapping {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, key: &str) -> Option<&ConfigValue> {
        self.0.get(key)
    }

    /// Borrow a nested mapping by key, if present and actually a mapping.
    pub fn section(&self, key: &str) -> Option<&ConfigMapping> {
        self.get(key).and_then(ConfigValue::as_mapping)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ConfigValue>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn remove(&mut self, key: &str) -> Option<ConfigValue> {
        self.0.remove(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &ConfigValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Look up `section.key` in one step. Returns `None` if either level is
    /// absent or `section` is not a mapping.
    pub fn get_nested(&self, section: &str, key: &str) -> Option<&ConfigValue> {
        self.section(section)?.get(key)
    }

    /// Set `section.key`, creating the section if absent. If `section`
    /// currently holds a scalar it is replaced by a mapping.
    pub fn set_nested(&mut self, section: &str, key: impl Into<String>, value: impl Into<ConfigValue>) {
        let entry = self
            .0
            .entry(section.to_string())
            .or_insert_with(|| ConfigValue::Mapping(ConfigMapping::new()));
        if !matches!(entry, ConfigValue::Mapping(_)) {
            *entry = ConfigValue::Mapping(ConfigMapping::new());
        }
        if let ConfigValue::Mapping(m) = entry {
            m.insert(key, value);
        }
    }

    /// Recursively merge `overlay` into `self`.
    ///
    /// For each key: when both sides hold mappings, recurse; in every other
    /// case the overlay value replaces the existing one. Keys only present on
    /// one side are kept as-is.
    pub fn deep_merge(&mut self, overlay: ConfigMapping) {
        for (key, incoming) in overlay.0 {
            match (self.0.get_mut(&key), incoming) {
                (Some(ConfigValue::Mapping(base)), ConfigValue::Mapping(over)) => {
                    base.deep_merge(over);
                }
                (_, incoming) => {
                    self.0.insert(key, incoming);
                }
            }
        }
    }

    /// Built-in workstation defaults: the four sections every resolved
    /// configuration is guaranteed to contain.
    pub fn workstation_defaults() -> Self {
        let mut connection = ConfigMapping::new();
        connection.insert("installation_path", "");
        connection.insert("editor_path", "");
        connection.insert("tool_path", "");
        connection.insert("assets_directory", "");

        let mut editor = ConfigMapping::new();
        editor.insert("default_editor", "world_editor");
        editor.insert("auto_save_interval", 300i64);
        editor.insert("backup_enabled", true);
        editor.insert("backup_interval", 600i64);

        let mut project = ConfigMapping::new();
        project.insert("default_project_type", "rpg");
        project.insert("auto_backup", true);
        project.insert("version_control", true);

        let mut development = ConfigMapping::new();
        development.insert("log_level", "info");
        development.insert("debug_mode", false);
        development.insert("test_mode", false);

        let mut root = ConfigMapping::new();
        root.insert("connection", ConfigValue::Mapping(connection));
        root.insert("editor", ConfigValue::Mapping(editor));
        root.insert("project", ConfigValue::Mapping(project));
        root.insert("development", ConfigValue::Mapping(development));
        root
    }
}

impl FromIterator<(String, ConfigValue)> for ConfigMapping {
    fn from_iter<T: IntoIterator<Item = (String, ConfigValue)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
