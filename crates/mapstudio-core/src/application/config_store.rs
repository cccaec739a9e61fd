//! Layered workstation configuration.
//!
//! [`ConfigStore`] resolves the effective configuration by merging, in
//! precedence order, every config file found in a base directory on top of
//! built-in defaults. Resolution is total: a missing or unreadable source is
//! skipped with a warning and the remaining layers still apply.

use std::path::{Path, PathBuf};

use tracing::{debug, instrument, warn};

use crate::application::ports::Filesystem;
use crate::codec::{self, ConfigFormat};
use crate::domain::value::{ConfigMapping, ConfigValue};
use crate::error::StudioResult;

/// A config source that failed to load and was excluded from the merge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedSource {
    pub path: PathBuf,
    pub reason: String,
}

/// Where a tool's executable is looked up: an explicit config key first, then
/// a well-known location under the installation directory.
struct ToolLookup {
    tool: &'static str,
    key: &'static str,
    install_suffix: &'static str,
}

static TOOL_LOOKUPS: &[ToolLookup] = &[
    ToolLookup {
        tool: "world_editor",
        key: "editor_path",
        install_suffix: "World Editor.exe",
    },
    ToolLookup {
        tool: "jass_tool",
        key: "tool_path",
        install_suffix: "JNGP/JNGP.exe",
    },
];

/// The resolved workstation configuration, plus the provenance of each layer.
pub struct ConfigStore {
    values: ConfigMapping,
    filesystem: Box<dyn Filesystem>,
    applied: Vec<PathBuf>,
    skipped: Vec<SkippedSource>,
}

impl ConfigStore {
    /// A store holding only `defaults`. Call [`resolve`](Self::resolve) to
    /// layer on-disk sources on top.
    pub fn new(defaults: ConfigMapping, filesystem: Box<dyn Filesystem>) -> Self {
        Self {
            values: defaults,
            filesystem,
            applied: Vec::new(),
            skipped: Vec::new(),
        }
    }

    /// A store seeded with the built-in workstation defaults.
    pub fn with_defaults(filesystem: Box<dyn Filesystem>) -> Self {
        Self::new(ConfigMapping::workstation_defaults(), filesystem)
    }

    /// Merge every config file in `base_dir` into the store, in precedence
    /// order (yaml, then json, then ini; later layers win).
    ///
    /// Never fails. Missing files are skipped silently; files that exist but
    /// cannot be read or parsed are skipped with a warning and recorded in
    /// [`skipped_sources`](Self::skipped_sources).
    #[instrument(skip_all, fields(base_dir = %base_dir.display()))]
    pub fn resolve(&mut self, base_dir: &Path) {
        for format in ConfigFormat::PRECEDENCE {
            let path = base_dir.join(format.file_name());
            if !self.filesystem.exists(&path) {
                continue;
            }
            let text = match self.filesystem.read_to_string(&path) {
                Ok(text) => text,
                Err(err) => {
                    warn!(path = %path.display(), %err, "skipping unreadable config source");
                    self.skipped.push(SkippedSource {
                        path,
                        reason: err.to_string(),
                    });
                    continue;
                }
            };
            match codec::decode(format, &text) {
                Ok(overlay) => {
                    debug!(path = %path.display(), "applying config source");
                    self.values.deep_merge(overlay);
                    self.applied.push(path);
                }
                Err(err) => {
                    warn!(path = %path.display(), %err, "skipping malformed config source");
                    self.skipped.push(SkippedSource {
                        path,
                        reason: err.to_string(),
                    });
                }
            }
        }
    }

    // ── typed access ──────────────────────────────────────────────────────────

    pub fn get(&self, section: &str, key: &str) -> Option<&ConfigValue> {
        self.values.get_nested(section, key)
    }

    pub fn get_str<'a>(&'a self, section: &str, key: &str, default: &'a str) -> &'a str {
        self.get(section, key)
            .and_then(ConfigValue::as_str)
            .unwrap_or(default)
    }

    pub fn get_bool(&self, section: &str, key: &str, default: bool) -> bool {
        self.get(section, key)
            .and_then(ConfigValue::as_bool)
            .unwrap_or(default)
    }

    pub fn get_int(&self, section: &str, key: &str, default: i64) -> i64 {
        self.get(section, key)
            .and_then(ConfigValue::as_int)
            .unwrap_or(default)
    }

    pub fn set(&mut self, section: &str, key: impl Into<String>, value: impl Into<ConfigValue>) {
        self.values.set_nested(section, key, value);
    }

    /// The full merged mapping.
    pub fn mapping(&self) -> &ConfigMapping {
        &self.values
    }

    /// Sources merged by the last [`resolve`](Self::resolve), in apply order.
    pub fn applied_sources(&self) -> &[PathBuf] {
        &self.applied
    }

    /// Sources that existed but could not be loaded.
    pub fn skipped_sources(&self) -> &[SkippedSource] {
        &self.skipped
    }

    /// Encode the merged mapping as `format` and write it to the well-known
    /// file name in `base_dir`. Returns the written path.
    pub fn save(&self, format: ConfigFormat, base_dir: &Path) -> StudioResult<PathBuf> {
        let text = codec::encode(format, &self.values)?;
        let path = base_dir.join(format.file_name());
        self.filesystem.write_file(&path, &text)?;
        debug!(path = %path.display(), "saved configuration");
        Ok(path)
    }

    // ── derived lookups ───────────────────────────────────────────────────────
    //
    // Re-evaluated on every call so they track both config edits and files
    // appearing or disappearing on disk.

    /// The game installation directory, if configured and present on disk.
    pub fn resolved_install_path(&self) -> Option<PathBuf> {
        let raw = self.get_str("connection", "installation_path", "");
        if raw.is_empty() {
            return None;
        }
        let path = PathBuf::from(raw);
        self.filesystem.exists(&path).then_some(path)
    }

    /// The executable for a named tool.
    ///
    /// An explicit config key wins when it points at an existing file;
    /// otherwise the tool's well-known location under the installation
    /// directory is tried. Unknown tool names resolve to nothing.
    pub fn resolved_tool_path(&self, tool: &str) -> Option<PathBuf> {
        let lookup = TOOL_LOOKUPS.iter().find(|l| l.tool == tool)?;

        let explicit = self.get_str("connection", lookup.key, "");
        if !explicit.is_empty() {
            let path = PathBuf::from(explicit);
            if self.filesystem.exists(&path) {
                return Some(path);
            }
        }

        let fallback = self.resolved_install_path()?.join(lookup.install_suffix);
        self.filesystem.exists(&fallback).then_some(fallback)
    }

    /// The map assets directory: explicit `assets_directory` first, then
    /// `Maps` under the installation directory.
    pub fn resolved_assets_dir(&self) -> Option<PathBuf> {
        let explicit = self.get_str("connection", "assets_directory", "");
        if !explicit.is_empty() {
            let path = PathBuf::from(explicit);
            if self.filesystem.exists(&path) {
                return Some(path);
            }
        }

        let fallback = self.resolved_install_path()?.join("Maps");
        self.filesystem.exists(&fallback).then_some(fallback)
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
