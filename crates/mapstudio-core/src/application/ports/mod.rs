//! Application ports: the interfaces the core needs from the outside world.
//!
//! Adapters in `mapstudio-adapters` implement these. Services hold them as
//! `Box<dyn ...>` so tests can swap in in-memory fakes.

use std::path::Path;

use crate::error::StudioResult;

/// File operations the config store and scaffold generator depend on.
pub trait Filesystem: Send + Sync {
    /// Create a directory and any missing parents.
    fn create_dir_all(&self, path: &Path) -> StudioResult<()>;

    /// Write `contents` to `path`, replacing any existing file atomically:
    /// readers observe either the old contents or the new, never a partial
    /// write.
    fn write_file(&self, path: &Path, contents: &str) -> StudioResult<()>;

    /// Read the entire file as UTF-8.
    fn read_to_string(&self, path: &Path) -> StudioResult<String>;

    /// Whether a file or directory exists at `path`.
    fn exists(&self, path: &Path) -> bool;
}
