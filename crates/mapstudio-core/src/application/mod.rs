//! Application layer: use-case orchestration over the domain.
//!
//! Services own their [`Filesystem`] port as a boxed trait object so the CLI
//! wires in the local-disk adapter and tests wire in an in-memory one. No
//! business rules live here, those belong to `crate::domain`.

pub mod config_store;
pub mod documents;
pub mod error;
pub mod ports;
pub mod scaffold;

pub use config_store::{ConfigStore, SkippedSource};
pub use error::ApplicationError;
pub use ports::Filesystem;
pub use scaffold::{GenerateRequest, ScaffoldGenerator};
