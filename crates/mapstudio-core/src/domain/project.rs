//! Project records: what a scaffold run produced, and what an import carries.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::template::ProjectKind;

/// Summary of a completed scaffold run.
///
/// Paths in `directories` and `files` are relative to `root`, in the order
/// they were created.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectScaffold {
    pub name: String,
    pub kind: ProjectKind,
    pub root: PathBuf,
    pub directories: Vec<PathBuf>,
    pub files: Vec<PathBuf>,
}

impl ProjectScaffold {
    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    pub fn directory_count(&self) -> usize {
        self.directories.len()
    }
}

/// Metadata written alongside an imported project as `project_info.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectInfoRecord {
    pub name: String,
    pub original_name: String,
    pub import_time: String,
    pub source_path: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn info_record_round_trips() {
        let record = ProjectInfoRecord {
            name: "OldMap".to_string(),
            original_name: "old_map_v2".to_string(),
            import_time: "2025-01-04 10:30:00".to_string(),
            source_path: "/maps/old_map_v2".to_string(),
            description: "Legacy arena map".to_string(),
        };
        let json = serde_json::to_string(&record).unwrap();
        let back: ProjectInfoRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn empty_description_is_omitted() {
        let record = ProjectInfoRecord {
            name: "OldMap".to_string(),
            original_name: "OldMap".to_string(),
            import_time: "2025-01-04 10:30:00".to_string(),
            source_path: "/maps/OldMap".to_string(),
            description: String::new(),
        };
        let json = serde_json::to_string(&record).unwrap();
        assert!(!json.contains("description"));
    }
}
