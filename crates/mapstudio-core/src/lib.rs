//! mapstudio core: domain and application layers.
//!
//! This crate holds the pure logic of the mapstudio tool, split the
//! hexagonal way:
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          mapstudio-cli (CLI)            │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Application Services             │
//! │   (ConfigStore, ScaffoldGenerator)      │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     Filesystem Port (trait)             │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │   mapstudio-adapters (Infrastructure)   │
//! │   (LocalFilesystem, MemoryFilesystem)   │
//! └─────────────────────────────────────────┘
//! ```
//!
//! The domain layer (`domain`) is pure values and rules; the codec layer
//! (`codec`) translates between text and the value model without doing I/O;
//! the application layer (`application`) orchestrates both through the
//! filesystem port.

pub mod application;
pub mod codec;
pub mod domain;
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ConfigStore, Filesystem, GenerateRequest, ScaffoldGenerator, SkippedSource,
    };
    pub use crate::codec::{CodecError, ConfigFormat};
    pub use crate::domain::{
        ConfigMapping, ConfigValue, DomainError, ProjectInfoRecord, ProjectKind, ProjectScaffold,
        TemplateCatalog, TemplateDefinition,
    };
    pub use crate::error::{ErrorCategory, StudioError, StudioResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
