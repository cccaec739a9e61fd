//! Local filesystem adapter using std::fs.

use std::io;
use std::path::{Path, PathBuf};

use mapstudio_core::{application::ports::Filesystem, error::StudioResult};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> StudioResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    /// Write via a sibling temp file, then rename over the target. Rename is
    /// atomic on the platforms we support, so an existing file is never left
    /// half-written.
    fn write_file(&self, path: &Path, contents: &str) -> StudioResult<()> {
        let mut tmp_name = path.as_os_str().to_os_string();
        tmp_name.push(".tmp");
        let tmp = PathBuf::from(tmp_name);

        std::fs::write(&tmp, contents).map_err(|e| map_io_error(&tmp, e, "write temp file"))?;
        std::fs::rename(&tmp, path).map_err(|e| {
            let _ = std::fs::remove_file(&tmp);
            map_io_error(path, e, "replace file")
        })
    }

    fn read_to_string(&self, path: &Path) -> StudioResult<String> {
        std::fs::read_to_string(path).map_err(|e| map_io_error(path, e, "read file"))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> mapstudio_core::error::StudioError {
    use mapstudio_core::application::ApplicationError;

    ApplicationError::Filesystem {
        path: path.to_path_buf(),
        reason: format!("failed to {operation}: {e}"),
    }
    .into()
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_then_read_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();
        let path = dir.path().join("config.yaml");

        fs.write_file(&path, "a: 1\n").unwrap();
        assert_eq!(fs.read_to_string(&path).unwrap(), "a: 1\n");
        assert!(fs.exists(&path));
    }

    #[test]
    fn write_replaces_existing_contents() {
        let dir = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();
        let path = dir.path().join("config.yaml");

        fs.write_file(&path, "old").unwrap();
        fs.write_file(&path, "new").unwrap();
        assert_eq!(fs.read_to_string(&path).unwrap(), "new");
        // No temp file left behind.
        assert!(!dir.path().join("config.yaml.tmp").exists());
    }

    #[test]
    fn write_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();
        let path = dir.path().join("missing").join("config.yaml");
        assert!(fs.write_file(&path, "x").is_err());
    }

    #[test]
    fn create_dir_all_makes_nested_directories() {
        let dir = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();
        let nested = dir.path().join("resources").join("models");
        fs.create_dir_all(&nested).unwrap();
        assert!(nested.is_dir());
    }

    #[test]
    fn read_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();
        assert!(fs.read_to_string(&dir.path().join("absent")).is_err());
    }
}
