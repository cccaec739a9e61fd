//! `mapstudio list` - show the built-in template catalog.

use mapstudio_core::domain::TemplateCatalog;

use crate::{
    cli::{ListArgs, ListFormat, global::GlobalArgs},
    error::CliResult,
    output::OutputManager,
};

pub fn execute(args: ListArgs, _global: GlobalArgs, output: OutputManager) -> CliResult<()> {
    let templates = TemplateCatalog::all();

    match args.format {
        ListFormat::Table => {
            output.header("Available Templates:")?;
            for template in templates {
                output.print(&format!(
                    "  {:<10} {:<18} {}",
                    template.kind.id(),
                    template.display_name,
                    template.description
                ))?;
                output.print(&format!("  {:<10} features: {}", "", template.features.join(", ")))?;
            }
        }

        ListFormat::List => {
            for template in templates {
                output.value(template.kind.id())?;
            }
        }

        ListFormat::Json => {
            // Serialised straight to stdout so the output stays parseable
            // even when piped.
            let entries: Vec<serde_json::Value> = templates
                .iter()
                .map(|t| {
                    serde_json::json!({
                        "id": t.kind.id(),
                        "name": t.display_name,
                        "description": t.description,
                        "features": t.features,
                    })
                })
                .collect();
            let json = serde_json::to_string_pretty(&entries).unwrap_or_else(|_| "[]".into());
            output.value(&json)?;
        }
    }

    Ok(())
}
