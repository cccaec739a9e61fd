//! Unified error handling for the core crate.
//!
//! [`StudioError`] wraps the layer-specific errors behind one type so callers
//! can match, categorize, and render suggestions without knowing which layer
//! failed.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::codec::CodecError;
use crate::domain::DomainError;

pub use crate::domain::ErrorCategory;

/// Root error type for core operations.
#[derive(Debug, Error, Clone)]
pub enum StudioError {
    /// Business-rule violations (unknown template, bad project name).
    #[error("{0}")]
    Domain(#[from] DomainError),

    /// Orchestration and I/O failures.
    #[error("{0}")]
    Application(#[from] ApplicationError),

    /// Config decode or encode failures.
    #[error("{0}")]
    Codec(#[from] CodecError),

    /// Unexpected internal errors (bugs).
    #[error("internal error: {message}")]
    Internal { message: String },
}

impl StudioError {
    /// User-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Codec(e) => e.suggestions(),
            Self::Internal { .. } => {
                vec!["This looks like a bug in mapstudio, please report it".to_string()]
            }
        }
    }

    /// Error category for exit-code and styling decisions.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => e.category(),
            Self::Application(e) => e.category(),
            Self::Codec(e) => e.category(),
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }
}

/// Convenient result alias.
pub type StudioResult<T> = Result<T, StudioError>;

// ── tests ─────────────────────────────────────────────────────────────────────
