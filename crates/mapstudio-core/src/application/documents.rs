//! Generated project documents.
//!
//! Every renderer is a pure function of the template definition and the
//! request parameters, so the same inputs always produce byte-identical
//! output. The scaffold generator decides where each document lands.

use crate::domain::template::{ProjectKind, TemplateDefinition};

/// Parameters shared by the document renderers.
pub struct DocumentParams<'a> {
    pub name: &'a str,
    pub author: &'a str,
    pub description: &'a str,
    pub created: &'a str,
}

pub fn render_readme(definition: &TemplateDefinition, params: &DocumentParams<'_>) -> String {
    let mut out = String::new();
    out.push_str(&format!("# {}\n\n", params.name));
    out.push_str(&format!("{}\n\n", params.description));
    out.push_str(&format!(
        "- **Type**: {} ({})\n- **Author**: {}\n- **Created**: {}\n\n",
        definition.display_name,
        definition.kind.id(),
        params.author,
        params.created,
    ));
    out.push_str("## Features\n\n");
    for feature in &definition.features {
        out.push_str(&format!("- {feature}\n"));
    }
    out.push_str(
        "\n## Project Layout\n\n\
         | Directory | Purpose |\n\
         |-----------|--------|\n\
         | `maps/` | Map files (.w3x, .w3m) |\n\
         | `triggers/` | Trigger scripts and JASS sources |\n\
         | `units/` | Unit and ability data design |\n\
         | `items/` | Item data design |\n\
         | `resources/` | Models, textures, sounds, music |\n\
         | `scripts/` | Utility scripts |\n\
         | `docs/` | Design and API documentation |\n\
         | `backups/` | Automatic backups |\n\
         | `exports/` | Packaged releases |\n\n\
         Project settings live in `project_config.yaml`.\n",
    );
    out
}

pub fn render_design_document(
    definition: &TemplateDefinition,
    params: &DocumentParams<'_>,
) -> String {
    let mut out = String::new();
    out.push_str(&format!("# {} Design Document\n\n", params.name));
    out.push_str(&format!(
        "**Type**: {}\n**Author**: {}\n**Created**: {}\n\n",
        definition.display_name, params.author, params.created,
    ));
    out.push_str("## Concept\n\n");
    out.push_str(&format!("{}\n\n", params.description));
    out.push_str("## Core Systems\n\n");
    for feature in &definition.features {
        out.push_str(&format!("### {feature}\n\nTBD.\n\n"));
    }
    out.push_str(
        "## Balance Notes\n\nTBD.\n\n## Open Design Questions\n\n- [ ] None yet.\n",
    );
    out
}

pub fn render_maps_readme(params: &DocumentParams<'_>) -> String {
    format!(
        "# Maps\n\n\
         Working map files for {name}.\n\n\
         - Keep one `.w3x` per major revision; older revisions belong in `../backups/`.\n\
         - Name files `{name}_vNN.w3x` so the editor's recent list stays readable.\n\
         - Exports for playtesting go to `../exports/`, not here.\n",
        name = params.name,
    )
}

/// Per-kind initialization body for the trigger stub.
fn trigger_init_calls(kind: ProjectKind) -> &'static [&'static str] {
    match kind {
        ProjectKind::Rpg => &["call InitQuestSystem()", "call InitHeroProgression()"],
        ProjectKind::Td => &["call InitWaveSpawner()", "call InitTowerShop()"],
        ProjectKind::Moba => &["call InitLaneCreeps()", "call InitHeroSelection()"],
        ProjectKind::Survival => &["call InitSurvivalWaves()", "call InitDifficultyScaling()"],
        ProjectKind::Melee => &["call InitStandardForces()", "call InitVictoryConditions()"],
    }
}

pub fn render_trigger_stub(definition: &TemplateDefinition, params: &DocumentParams<'_>) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "//===========================================================================\n\
         // base_triggers.j: trigger scaffolding for {}\n\
         // Kind: {}\n\
         //===========================================================================\n\n",
        params.name,
        definition.kind.id(),
    ));
    out.push_str("function InitCustomTriggers takes nothing returns nothing\n");
    for call in trigger_init_calls(definition.kind) {
        out.push_str(&format!("    {call}\n"));
    }
    out.push_str("endfunction\n");
    out
}

pub fn render_unit_design(definition: &TemplateDefinition, params: &DocumentParams<'_>) -> String {
    let mut out = String::new();
    out.push_str(&format!("# {} Unit Design\n\n", params.name));
    out.push_str("Checklist for custom unit and ability data.\n\n");
    for feature in &definition.features {
        out.push_str(&format!("- [ ] Units supporting: {feature}\n"));
    }
    out.push_str(
        "\n## Conventions\n\n\
         - Custom unit IDs start at `h000` for heroes, `u000` for units.\n\
         - Keep tooltips under 200 characters.\n\
         - Document every custom ability's mana cost and cooldown here.\n",
    );
    out
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::template::TemplateCatalog;

    fn params() -> DocumentParams<'static> {
        DocumentParams {
            name: "DemoMap",
            author: "Unknown",
            description: "A demo",
            created: "2025-01-04 10:30:00",
        }
    }

    #[test]
    fn readme_expands_every_feature() {
        let def = TemplateCatalog::definition(ProjectKind::Td);
        let text = render_readme(def, &params());
        assert!(text.starts_with("# DemoMap\n"));
        for feature in &def.features {
            assert!(text.contains(feature), "missing feature {feature}");
        }
    }

    #[test]
    fn rendering_is_deterministic() {
        let def = TemplateCatalog::definition(ProjectKind::Rpg);
        assert_eq!(render_readme(def, &params()), render_readme(def, &params()));
        assert_eq!(
            render_trigger_stub(def, &params()),
            render_trigger_stub(def, &params())
        );
    }

    #[test]
    fn trigger_stub_differs_per_kind() {
        let rpg = render_trigger_stub(TemplateCatalog::definition(ProjectKind::Rpg), &params());
        let td = render_trigger_stub(TemplateCatalog::definition(ProjectKind::Td), &params());
        assert!(rpg.contains("InitQuestSystem"));
        assert!(td.contains("InitWaveSpawner"));
        assert_ne!(rpg, td);
    }

    #[test]
    fn trigger_stub_is_wrapped_in_one_function() {
        let text = render_trigger_stub(TemplateCatalog::definition(ProjectKind::Melee), &params());
        assert!(text.contains("function InitCustomTriggers takes nothing returns nothing"));
        assert!(text.trim_end().ends_with("endfunction"));
    }

    #[test]
    fn design_document_has_a_section_per_feature() {
        let def = TemplateCatalog::definition(ProjectKind::Survival);
        let text = render_design_document(def, &params());
        for feature in &def.features {
            assert!(text.contains(&format!("### {feature}")));
        }
    }
}
