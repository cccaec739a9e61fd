//! Template catalog: the closed set of map-project kinds.
//!
//! The catalog is a static table, not user-extensible. Every kind carries a
//! display name, a one-line description, and the feature list that shows up
//! in generated documents.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

/// One of the five supported map-project kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectKind {
    Rpg,
    Td,
    Moba,
    Survival,
    Melee,
}

impl ProjectKind {
    /// The canonical lowercase identifier, as accepted on the command line
    /// and stored in project configuration files.
    pub fn id(&self) -> &'static str {
        match self {
            Self::Rpg => "rpg",
            Self::Td => "td",
            Self::Moba => "moba",
            Self::Survival => "survival",
            Self::Melee => "melee",
        }
    }

    /// All kinds, in catalog order.
    pub fn all() -> &'static [ProjectKind] {
        &[
            Self::Rpg,
            Self::Td,
            Self::Moba,
            Self::Survival,
            Self::Melee,
        ]
    }
}

impl fmt::Display for ProjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for ProjectKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rpg" => Ok(Self::Rpg),
            "td" => Ok(Self::Td),
            "moba" => Ok(Self::Moba),
            "survival" => Ok(Self::Survival),
            "melee" => Ok(Self::Melee),
            other => Err(DomainError::UnknownTemplate {
                id: other.to_string(),
            }),
        }
    }
}

/// Static metadata for one project kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateDefinition {
    pub kind: ProjectKind,
    pub display_name: &'static str,
    pub description: &'static str,
    pub features: [&'static str; 4],
}

static CATALOG: &[TemplateDefinition] = &[
    TemplateDefinition {
        kind: ProjectKind::Rpg,
        display_name: "RPG Map",
        description: "Story-driven map with quests, heroes, and progression",
        features: [
            "Quest system",
            "Leveling system",
            "Equipment system",
            "Ability system",
        ],
    },
    TemplateDefinition {
        kind: ProjectKind::Td,
        display_name: "Tower Defense Map",
        description: "Wave-based defense map with buildable towers",
        features: [
            "Wave spawning",
            "Tower building",
            "Upgrade paths",
            "Bounty economy",
        ],
    },
    TemplateDefinition {
        kind: ProjectKind::Moba,
        display_name: "MOBA Map",
        description: "Team-versus-team map with lanes and hero combat",
        features: [
            "Three-lane layout",
            "Hero selection",
            "Creep waves",
            "Team economy",
        ],
    },
    TemplateDefinition {
        kind: ProjectKind::Survival,
        display_name: "Survival Map",
        description: "Hold-out map against escalating enemy pressure",
        features: [
            "Enemy waves",
            "Base building",
            "Resource gathering",
            "Difficulty scaling",
        ],
    },
    TemplateDefinition {
        kind: ProjectKind::Melee,
        display_name: "Melee Map",
        description: "Standard skirmish map with classic victory rules",
        features: [
            "Standard forces",
            "Balanced start locations",
            "Neutral creeps",
            "Standard victory",
        ],
    },
];

/// Lookup facade over the static catalog.
pub struct TemplateCatalog;

impl TemplateCatalog {
    /// Parse a user-supplied identifier into a [`ProjectKind`].
    ///
    /// Identifiers are matched exactly; there is no prefix or fuzzy matching.
    pub fn parse(id: &str) -> Result<ProjectKind, DomainError> {
        id.parse()
    }

    /// Metadata for a kind. Total over [`ProjectKind`].
    pub fn definition(kind: ProjectKind) -> &'static TemplateDefinition {
        let index = match kind {
            ProjectKind::Rpg => 0,
            ProjectKind::Td => 1,
            ProjectKind::Moba => 2,
            ProjectKind::Survival => 3,
            ProjectKind::Melee => 4,
        };
        &CATALOG[index]
    }

    /// All definitions, in catalog order.
    pub fn all() -> &'static [TemplateDefinition] {
        CATALOG
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
