//! Domain layer: pure types with no I/O.

pub mod error;
pub mod project;
pub mod template;
pub mod value;

pub use error::{DomainError, ErrorCategory};
pub use project::{ProjectInfoRecord, ProjectScaffold};
pub use template::{ProjectKind, TemplateCatalog, TemplateDefinition};
pub use value::{ConfigMapping, ConfigValue};
