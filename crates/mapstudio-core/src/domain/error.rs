//! Domain-level errors: violations of catalog and naming rules.

use thiserror::Error;

use crate::domain::template::ProjectKind;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The requested template identifier is not in the catalog.
    #[error("unknown template '{id}'")]
    UnknownTemplate { id: String },

    /// The project name cannot be used as a directory name.
    #[error("invalid project name '{name}': {reason}")]
    InvalidProjectName { name: String, reason: String },
}

impl DomainError {
    /// Actionable hints for the user, rendered by the CLI error reporter.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::UnknownTemplate { .. } => {
                let ids: Vec<&str> = ProjectKind::all().iter().map(|k| k.id()).collect();
                vec![
                    format!("Valid templates: {}", ids.join(", ")),
                    "Run 'mapstudio list' to see template details".to_string(),
                ]
            }
            Self::InvalidProjectName { .. } => vec![
                "Project names must be non-empty and contain no path separators".to_string(),
            ],
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UnknownTemplate { .. } => ErrorCategory::NotFound,
            Self::InvalidProjectName { .. } => ErrorCategory::Validation,
        }
    }
}

/// Coarse classification used to pick process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Configuration,
    Internal,
}

// ── tests ─────────────────────────────────────────────────────────────────────
