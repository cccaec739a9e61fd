//! Subcommand implementations.
//!
//! Each module exposes a single `execute` function; `main.rs` dispatches to
//! them after logging, settings, and output have been set up.

pub mod completions;
pub mod config;
pub mod generate;
pub mod import;
pub mod list;
