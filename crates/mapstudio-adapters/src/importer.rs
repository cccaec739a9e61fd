//! Project importer: copy an external project tree into the managed layout.
//!
//! Unlike the scaffold services this adapter works on the real filesystem
//! directly (`std::fs` + `walkdir`), since importing is inherently about an
//! existing on-disk tree. Provenance is recorded in `project_info.json`.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info, instrument, warn};
use walkdir::WalkDir;

use mapstudio_core::domain::{ErrorCategory, ProjectInfoRecord};

/// Directory names never copied from the source tree.
const SKIP_DIRS: &[&str] = &[".git", ".svn", "__pycache__", "node_modules"];

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("source does not exist: {path}")]
    SourceMissing { path: PathBuf },

    #[error("source is not a directory: {path}")]
    SourceNotADirectory { path: PathBuf },

    #[error("import target already exists: {path}")]
    TargetExists { path: PathBuf },

    #[error("import name must not be empty")]
    EmptyName,

    #[error("io error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write project record: {reason}")]
    Record { reason: String },
}

impl ImportError {
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::SourceMissing { path } | Self::SourceNotADirectory { path } => vec![format!(
                "Check that {} is an existing project directory",
                path.display()
            )],
            Self::TargetExists { path } => vec![
                format!("A directory already exists at {}", path.display()),
                "Pass --name to import under a different name".to_string(),
            ],
            Self::EmptyName => vec!["Pass --name with a non-empty project name".to_string()],
            Self::Io { .. } | Self::Record { .. } => Vec::new(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::SourceMissing { .. } | Self::SourceNotADirectory { .. } => {
                ErrorCategory::NotFound
            }
            Self::TargetExists { .. } | Self::EmptyName => ErrorCategory::Validation,
            Self::Io { .. } | Self::Record { .. } => ErrorCategory::Internal,
        }
    }
}

/// What to import and where to put it.
#[derive(Debug, Clone)]
pub struct ImportRequest {
    pub source: PathBuf,
    pub name: String,
    pub target_parent: PathBuf,
    pub description: String,
}

/// Outcome of a completed import.
#[derive(Debug, Clone)]
pub struct ImportReport {
    pub root: PathBuf,
    pub files_copied: usize,
    pub directories_created: usize,
    pub record: ProjectInfoRecord,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ProjectImporter;

impl ProjectImporter {
    pub fn new() -> Self {
        Self
    }

    /// Copy `request.source` into `target_parent/name` and write the
    /// provenance record. The target must not exist.
    #[instrument(skip_all, fields(source = %request.source.display(), name = %request.name))]
    pub fn import(&self, request: &ImportRequest) -> Result<ImportReport, ImportError> {
        if request.name.trim().is_empty() {
            return Err(ImportError::EmptyName);
        }
        if !request.source.exists() {
            return Err(ImportError::SourceMissing {
                path: request.source.clone(),
            });
        }
        if !request.source.is_dir() {
            return Err(ImportError::SourceNotADirectory {
                path: request.source.clone(),
            });
        }

        let root = request.target_parent.join(&request.name);
        if root.exists() {
            return Err(ImportError::TargetExists { path: root });
        }
        std::fs::create_dir_all(&root).map_err(|e| io_error(&root, e))?;

        let mut files_copied = 0;
        let mut directories_created = 0;
        let walker = WalkDir::new(&request.source)
            .min_depth(1)
            .into_iter()
            .filter_entry(|entry| !is_skipped(entry.file_name().to_str()));
        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    // Unreadable entries are reported but do not abort the copy.
                    warn!(%err, "skipping unreadable entry");
                    continue;
                }
            };
            let relative = entry
                .path()
                .strip_prefix(&request.source)
                .map_err(|_| ImportError::Record {
                    reason: format!("entry escapes source tree: {}", entry.path().display()),
                })?;
            let target = root.join(relative);
            if entry.file_type().is_dir() {
                std::fs::create_dir_all(&target).map_err(|e| io_error(&target, e))?;
                directories_created += 1;
            } else if entry.file_type().is_file() {
                if let Some(parent) = target.parent() {
                    std::fs::create_dir_all(parent).map_err(|e| io_error(parent, e))?;
                }
                std::fs::copy(entry.path(), &target).map_err(|e| io_error(&target, e))?;
                files_copied += 1;
            }
            // Symlinks are deliberately not followed or copied.
        }
        debug!(files_copied, directories_created, "copy finished");

        let original_name = request
            .source
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| request.name.clone());
        let record = ProjectInfoRecord {
            name: request.name.clone(),
            original_name,
            import_time: chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            source_path: request.source.display().to_string(),
            description: request.description.clone(),
        };
        let record_path = root.join("project_info.json");
        let json = serde_json::to_string_pretty(&record).map_err(|e| ImportError::Record {
            reason: e.to_string(),
        })?;
        std::fs::write(&record_path, json).map_err(|e| io_error(&record_path, e))?;

        info!(root = %root.display(), files_copied, "project imported");
        Ok(ImportReport {
            root,
            files_copied,
            directories_created,
            record,
        })
    }
}

fn is_skipped(file_name: Option<&str>) -> bool {
    file_name.is_some_and(|name| SKIP_DIRS.contains(&name))
}

fn io_error(path: &Path, source: io::Error) -> ImportError {
    ImportError::Io {
        path: path.to_path_buf(),
        source,
    }
}
