//! Project scaffold generation.
//!
//! [`ScaffoldGenerator`] materializes the fixed project tree for a template:
//! directory skeleton, synthesized `project_config.yaml`, and the generated
//! documents. Validation happens before any I/O; after the first write there
//! is no rollback, a failed run may leave a partial tree behind.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use crate::application::documents::{
    render_design_document, render_maps_readme, render_readme, render_trigger_stub,
    render_unit_design, DocumentParams,
};
use crate::application::error::ApplicationError;
use crate::application::ports::Filesystem;
use crate::codec::{self, ConfigFormat};
use crate::domain::error::DomainError;
use crate::domain::project::ProjectScaffold;
use crate::domain::template::{TemplateCatalog, TemplateDefinition};
use crate::domain::value::{ConfigMapping, ConfigValue};
use crate::error::StudioResult;

/// Directory skeleton, relative to the project root. `create_dir_all`
/// materializes parents, so only the leaves are listed.
const PROJECT_DIRS: &[&str] = &[
    "docs/design",
    "docs/api",
    "maps",
    "triggers",
    "units",
    "items",
    "resources/models",
    "resources/textures",
    "resources/sounds",
    "resources/music",
    "scripts",
    "backups",
    "logs",
    "tests",
    "exports",
];

/// Everything `generate` needs to materialize one project.
#[derive(Debug, Clone)]
pub struct GenerateRequest {
    pub name: String,
    pub kind_id: String,
    pub author: String,
    pub description: String,
    pub output_dir: PathBuf,
}

pub struct ScaffoldGenerator {
    filesystem: Box<dyn Filesystem>,
}

impl ScaffoldGenerator {
    pub fn new(filesystem: Box<dyn Filesystem>) -> Self {
        Self { filesystem }
    }

    /// Materialize the project described by `request`.
    ///
    /// Fails with `UnknownTemplate` or `InvalidProjectName` before touching
    /// the filesystem, and with `TargetExists` before creating anything.
    #[instrument(skip_all, fields(project = %request.name, kind = %request.kind_id))]
    pub fn generate(&self, request: &GenerateRequest) -> StudioResult<ProjectScaffold> {
        let kind = TemplateCatalog::parse(&request.kind_id)?;
        let definition = TemplateCatalog::definition(kind);
        validate_name(&request.name)?;

        let root = request.output_dir.join(&request.name);
        if self.filesystem.exists(&root) {
            return Err(ApplicationError::TargetExists { path: root }.into());
        }

        debug!(root = %root.display(), "creating directory skeleton");
        let mut directories = Vec::with_capacity(PROJECT_DIRS.len());
        self.filesystem.create_dir_all(&root)?;
        for dir in PROJECT_DIRS {
            let relative = PathBuf::from(dir);
            self.filesystem.create_dir_all(&root.join(&relative))?;
            directories.push(relative);
        }

        let author = non_empty_or(&request.author, "Unknown");
        let description = non_empty_or(&request.description, definition.description);
        let created = chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
        let params = DocumentParams {
            name: &request.name,
            author,
            description,
            created: &created,
        };

        let mut files = Vec::new();
        let config = project_config(definition, &params);
        let config_text = codec::encode(ConfigFormat::Yaml, &config)?;
        files.push(self.write(&root, "project_config.yaml", &config_text)?);

        files.push(self.write(&root, "README.md", &render_readme(definition, &params))?);
        files.push(self.write(
            &root,
            "docs/design/design_document.md",
            &render_design_document(definition, &params),
        )?);
        files.push(self.write(&root, "maps/README.md", &render_maps_readme(&params))?);
        files.push(self.write(
            &root,
            "triggers/base_triggers.j",
            &render_trigger_stub(definition, &params),
        )?);
        files.push(self.write(
            &root,
            "units/unit_design.md",
            &render_unit_design(definition, &params),
        )?);

        info!(
            root = %root.display(),
            directories = directories.len(),
            files = files.len(),
            "project scaffold complete"
        );
        Ok(ProjectScaffold {
            name: request.name.clone(),
            kind,
            root,
            directories,
            files,
        })
    }

    fn write(&self, root: &Path, relative: &str, contents: &str) -> StudioResult<PathBuf> {
        let relative = PathBuf::from(relative);
        self.filesystem.write_file(&root.join(&relative), contents)?;
        Ok(relative)
    }
}

fn validate_name(name: &str) -> Result<(), DomainError> {
    if name.trim().is_empty() {
        return Err(DomainError::InvalidProjectName {
            name: name.to_string(),
            reason: "must not be empty".to_string(),
        });
    }
    if name.contains('/') || name.contains('\\') {
        return Err(DomainError::InvalidProjectName {
            name: name.to_string(),
            reason: "contains a path separator".to_string(),
        });
    }
    if name == "." || name == ".." {
        return Err(DomainError::InvalidProjectName {
            name: name.to_string(),
            reason: "reserved directory name".to_string(),
        });
    }
    Ok(())
}

fn non_empty_or<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.trim().is_empty() {
        fallback
    } else {
        value
    }
}

/// The synthesized `project_config.yaml` contents.
fn project_config(definition: &TemplateDefinition, params: &DocumentParams<'_>) -> ConfigMapping {
    let mut project_info = ConfigMapping::new();
    project_info.insert("name", params.name);
    project_info.insert("type", definition.kind.id());
    project_info.insert("author", params.author);
    project_info.insert("description", params.description);
    project_info.insert("version", "1.0.0");
    project_info.insert("created_date", params.created);
    project_info.insert("last_modified", params.created);

    let mut map_settings = ConfigMapping::new();
    map_settings.insert("map_size", "128x128");
    map_settings.insert("tileset", "Lordaeron Summer");
    map_settings.insert("players", 4i64);
    map_settings.insert("max_players", 8i64);
    map_settings.insert("map_name", params.name);
    map_settings.insert("map_description", params.description);

    let mut development = ConfigMapping::new();
    development.insert("auto_save", true);
    development.insert("backup_enabled", true);
    development.insert("version_control", true);
    development.insert("log_level", "info");

    let mut editor_settings = ConfigMapping::new();
    editor_settings.insert("default_editor", "world_editor");
    editor_settings.insert("jass_mode", true);
    editor_settings.insert("auto_backup_interval", 300i64);

    let mut root = ConfigMapping::new();
    root.insert("project_info", ConfigValue::Mapping(project_info));
    root.insert("map_settings", ConfigValue::Mapping(map_settings));
    root.insert("development", ConfigValue::Mapping(development));
    root.insert("editor_settings", ConfigValue::Mapping(editor_settings));
    root
}

// ── tests ─────────────────────────────────────────────────────────────────────
