//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "mapstudio",
    bin_name = "mapstudio",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{1f5fa} Map project workstation",
    long_about = "Mapstudio scaffolds game-map editor projects from built-in \
                  templates and manages the workstation configuration that \
                  locates the editor toolchain.",
    after_help = "EXAMPLES:\n\
        \x20 mapstudio generate DemoMap --type rpg --author Alice\n\
        \x20 mapstudio list\n\
        \x20 mapstudio config set connection.editor_path 'C:/WorldEdit/worldedit.exe'\n\
        \x20 mapstudio import ../OldProject --name LegacyMap\n\
        \x20 mapstudio completions bash > /usr/share/bash-completion/completions/mapstudio",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a new map project from a template.
    #[command(
        visible_alias = "g",
        about = "Generate a new map project",
        after_help = "EXAMPLES:\n\
            \x20 mapstudio generate DemoMap --type rpg\n\
            \x20 mapstudio generate TowerRush --type td --author Alice -o ~/maps\n\
            \x20 mapstudio generate Arena --type moba --dry-run"
    )]
    Generate(GenerateArgs),

    /// List available project templates.
    #[command(
        visible_alias = "ls",
        about = "List available templates",
        after_help = "EXAMPLES:\n\
            \x20 mapstudio list\n\
            \x20 mapstudio list --format json"
    )]
    List(ListArgs),

    /// Inspect and edit the workstation configuration.
    #[command(
        about = "Workstation configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 mapstudio config get connection.installation_path\n\
            \x20 mapstudio config set connection.editor_path WorldEditor.exe\n\
            \x20 mapstudio config set development.debug_mode true --format ini\n\
            \x20 mapstudio config check"
    )]
    Config(ConfigCommands),

    /// Import an existing project tree into the managed layout.
    #[command(
        about = "Import an existing project",
        after_help = "EXAMPLES:\n\
            \x20 mapstudio import ../OldProject\n\
            \x20 mapstudio import /work/maps/legacy --name LegacyMap -o ~/maps"
    )]
    Import(ImportArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 mapstudio completions bash > ~/.local/share/bash-completion/completions/mapstudio\n\
            \x20 mapstudio completions zsh  > ~/.zfunc/_mapstudio\n\
            \x20 mapstudio completions fish > ~/.config/fish/completions/mapstudio.fish"
    )]
    Completions(CompletionsArgs),
}

// ── generate ──────────────────────────────────────────────────────────────────

/// Arguments for `mapstudio generate`.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Project name.  Becomes the directory name under the output directory.
    #[arg(value_name = "NAME", help = "Project name")]
    pub name: String,

    /// Template ID.  Left as a free string so that unknown IDs reach the
    /// template catalog and produce its suggestion-bearing error instead of
    /// a bare clap rejection.
    #[arg(
        short = 't',
        long = "type",
        value_name = "TYPE",
        help = "Template ID (rpg, td, moba, survival, melee)"
    )]
    pub kind: Option<String>,

    /// Project author recorded in the generated config.
    #[arg(
        short = 'a',
        long = "author",
        value_name = "AUTHOR",
        help = "Author name"
    )]
    pub author: Option<String>,

    /// Project description.  Falls back to the template's description.
    #[arg(
        short = 'd',
        long = "description",
        value_name = "TEXT",
        help = "Project description"
    )]
    pub description: Option<String>,

    /// Parent directory for the new project.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "DIR",
        help = "Output directory (default: current directory)"
    )]
    pub output: Option<PathBuf>,

    /// Preview what would be created without writing any files.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `mapstudio list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `list` command.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One template ID per line.
    List,
    /// JSON array.
    Json,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `mapstudio config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `connection.installation_path`.
        key: String,
    },
    /// Set a configuration key and persist the change.
    Set {
        /// Dotted key path.
        key: String,
        /// New value.  `true`/`false` and integers are stored typed.
        value: String,
        /// File format to persist the merged configuration in.
        #[arg(long = "format", value_enum, default_value = "yaml")]
        format: ConfigFileFormat,
    },
    /// Print the fully resolved configuration.
    List,
    /// Print the directory searched for configuration files.
    Path,
    /// Report which config files were applied and which were skipped.
    Check,
}

/// Persistable configuration file formats.
#[derive(Debug, Clone, Copy, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum ConfigFileFormat {
    Yaml,
    Json,
    Ini,
}

impl ConfigFileFormat {
    pub fn to_core(self) -> mapstudio_core::codec::ConfigFormat {
        match self {
            Self::Yaml => mapstudio_core::codec::ConfigFormat::Yaml,
            Self::Json => mapstudio_core::codec::ConfigFormat::Json,
            Self::Ini => mapstudio_core::codec::ConfigFormat::Ini,
        }
    }
}

// ── import ────────────────────────────────────────────────────────────────────

/// Arguments for `mapstudio import`.
#[derive(Debug, Args)]
pub struct ImportArgs {
    /// Source project directory.
    #[arg(value_name = "SOURCE", help = "Existing project directory to import")]
    pub source: PathBuf,

    /// Name for the imported project.  Defaults to the source directory name.
    #[arg(short = 'n', long = "name", value_name = "NAME", help = "Project name")]
    pub name: Option<String>,

    /// Description recorded in the provenance file.
    #[arg(
        short = 'd',
        long = "description",
        value_name = "TEXT",
        help = "Project description"
    )]
    pub description: Option<String>,

    /// Parent directory for the imported project.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "DIR",
        help = "Output directory (default: current directory)"
    )]
    pub output: Option<PathBuf>,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `mapstudio completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── tests ─────────────────────────────────────────────────────────────────────
