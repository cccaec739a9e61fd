//! Application layer errors: orchestration and I/O failures.
//!
//! Business-rule violations are `DomainError` from `crate::domain`; codec
//! failures are `CodecError` from `crate::codec`.

use std::path::PathBuf;

use thiserror::Error;

use crate::domain::ErrorCategory;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApplicationError {
    /// The scaffold target directory already exists.
    #[error("target already exists: {path}")]
    TargetExists { path: PathBuf },

    /// A filesystem operation failed.
    #[error("filesystem error at {path}: {reason}")]
    Filesystem { path: PathBuf, reason: String },

    /// An in-memory adapter lock was poisoned by a panicking holder.
    #[error("internal lock poisoned")]
    LockPoisoned,
}

impl ApplicationError {
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::TargetExists { path } => vec![
                format!("A directory already exists at {}", path.display()),
                "Pick a different project name or remove the existing directory".to_string(),
            ],
            Self::Filesystem { path, .. } => vec![
                format!("Failed to access {}", path.display()),
                "Check that the path exists and you have write permission".to_string(),
            ],
            Self::LockPoisoned => Vec::new(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::TargetExists { .. } => ErrorCategory::Validation,
            Self::Filesystem { .. } | Self::LockPoisoned => ErrorCategory::Internal,
        }
    }
}
