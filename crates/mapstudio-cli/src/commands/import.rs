//! `mapstudio import` - bring an existing project tree under management.

use std::path::PathBuf;

use mapstudio_adapters::{ImportRequest, ProjectImporter};

use crate::{
    cli::{ImportArgs, OutputFormat, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

pub fn execute(
    args: ImportArgs,
    _global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let name = match args.name {
        Some(name) => name,
        None => args
            .source
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .ok_or_else(|| CliError::InvalidInput {
                message: format!(
                    "cannot derive a project name from '{}'; pass --name",
                    args.source.display()
                ),
                source: None,
            })?,
    };
    let target_parent = args
        .output
        .or_else(|| config.defaults.output_dir.clone())
        .unwrap_or_else(|| PathBuf::from("."));

    let request = ImportRequest {
        source: args.source,
        name,
        target_parent,
        description: args.description.unwrap_or_default(),
    };
    let report = ProjectImporter::new().import(&request)?;

    if output.format() == OutputFormat::Json {
        let value = serde_json::json!({
            "name": report.record.name,
            "root": report.root.display().to_string(),
            "files_copied": report.files_copied,
            "directories_created": report.directories_created,
            "original_name": report.record.original_name,
            "source_path": report.record.source_path,
        });
        output.value(&serde_json::to_string_pretty(&value).unwrap_or_else(|_| "{}".into()))?;
        return Ok(());
    }

    output.success(&format!(
        "Imported {} into {}",
        report.record.original_name,
        report.root.display()
    ))?;
    output.print(&format!(
        "  {} files, {} directories",
        report.files_copied, report.directories_created
    ))?;
    output.print("  provenance recorded in project_info.json")?;

    Ok(())
}
