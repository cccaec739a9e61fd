//! `mapstudio generate` - create a new map project from a template.

use std::path::PathBuf;

use mapstudio_adapters::{LocalFilesystem, MemoryFilesystem};
use mapstudio_core::application::{Filesystem, GenerateRequest, ScaffoldGenerator};
use mapstudio_core::domain::{ProjectScaffold, TemplateCatalog};

use crate::{
    cli::{GenerateArgs, OutputFormat, global::GlobalArgs},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

pub fn execute(
    args: GenerateArgs,
    _global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let kind_id = args
        .kind
        .or_else(|| config.defaults.project_type.clone())
        .unwrap_or_else(|| "rpg".to_string());
    let author = args
        .author
        .or_else(|| config.defaults.author.clone())
        .unwrap_or_else(|| "Unknown".to_string());
    let output_dir = args
        .output
        .or_else(|| config.defaults.output_dir.clone())
        .unwrap_or_else(|| PathBuf::from("."));

    let request = GenerateRequest {
        name: args.name,
        kind_id,
        author,
        description: args.description.unwrap_or_default(),
        output_dir,
    };

    // A dry run drives the real generator against an in-memory filesystem,
    // so validation and the planned tree are exactly what a wet run would do.
    let filesystem: Box<dyn Filesystem> = if args.dry_run {
        Box::new(MemoryFilesystem::new())
    } else {
        Box::new(LocalFilesystem::new())
    };
    let scaffold = ScaffoldGenerator::new(filesystem).generate(&request)?;

    if output.format() == OutputFormat::Json {
        output.value(&render_json(&scaffold, args.dry_run))?;
        return Ok(());
    }

    if args.dry_run {
        output.header(&format!("Would create {}:", scaffold.root.display()))?;
        for dir in &scaffold.directories {
            output.print(&format!("  {}/", dir.display()))?;
        }
        for file in &scaffold.files {
            output.print(&format!("  {}", file.display()))?;
        }
        output.info("Dry run: nothing was written.")?;
        return Ok(());
    }

    let definition = TemplateCatalog::definition(scaffold.kind);
    output.success(&format!(
        "Created {} ({}) at {}",
        scaffold.name,
        definition.display_name,
        scaffold.root.display()
    ))?;
    output.print(&format!(
        "  {} directories, {} files",
        scaffold.directory_count(),
        scaffold.file_count()
    ))?;
    output.print("")?;
    output.print("Next steps:")?;
    output.print(&format!("  cd {}", scaffold.root.display()))?;
    output.print("  $EDITOR project_config.yaml")?;

    Ok(())
}

fn render_json(scaffold: &ProjectScaffold, dry_run: bool) -> String {
    let value = serde_json::json!({
        "name": scaffold.name,
        "type": scaffold.kind.id(),
        "root": scaffold.root.display().to_string(),
        "directories": scaffold
            .directories
            .iter()
            .map(|d| d.display().to_string())
            .collect::<Vec<_>>(),
        "files": scaffold
            .files
            .iter()
            .map(|f| f.display().to_string())
            .collect::<Vec<_>>(),
        "dry_run": dry_run,
    });
    serde_json::to_string_pretty(&value).unwrap_or_else(|_| "{}".into())
}

// ── tests ─────────────────────────────────────────────────────────────────────
