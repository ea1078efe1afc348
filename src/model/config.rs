use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::table::selection::SelectionMode;

/// Configuration from taskgrid.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub table: TableConfig,
    #[serde(default)]
    pub seed: SeedLists,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableConfig {
    /// Number of rows to seed
    #[serde(default = "default_rows")]
    pub rows: usize,
    /// Row selection behavior: "single" or "multiple"
    #[serde(default = "default_selection")]
    pub selection: SelectionMode,
}

impl Default for TableConfig {
    fn default() -> Self {
        TableConfig {
            rows: default_rows(),
            selection: default_selection(),
        }
    }
}

fn default_rows() -> usize {
    10
}

fn default_selection() -> SelectionMode {
    SelectionMode::Multiple
}

/// Sample data the seed generator cycles through
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedLists {
    #[serde(default = "default_projects")]
    pub projects: Vec<String>,
    #[serde(default = "default_tasks")]
    pub tasks: Vec<String>,
    #[serde(default = "default_assignees")]
    pub assignees: Vec<String>,
    #[serde(default = "default_descriptions")]
    pub descriptions: Vec<String>,
    /// Month rows are created in, as [year, month]
    #[serde(default = "default_created_month")]
    pub created_month: (i32, u32),
    /// Month rows are due in, as [year, month]
    #[serde(default = "default_due_month")]
    pub due_month: (i32, u32),
}

impl Default for SeedLists {
    fn default() -> Self {
        SeedLists {
            projects: default_projects(),
            tasks: default_tasks(),
            assignees: default_assignees(),
            descriptions: default_descriptions(),
            created_month: default_created_month(),
            due_month: default_due_month(),
        }
    }
}

fn default_projects() -> Vec<String> {
    ["Apollo", "Beacon", "Cedar", "Dynamo"]
        .map(String::from)
        .to_vec()
}

fn default_tasks() -> Vec<String> {
    [
        "Draft launch checklist",
        "Review design notes",
        "Update onboarding doc",
        "Fix billing export",
        "Audit access logs",
        "Prepare sprint summary",
    ]
    .map(String::from)
    .to_vec()
}

fn default_assignees() -> Vec<String> {
    ["Ana Reyes", "Tom Okafor", "Mei Tanaka", "Lars Berg", "Priya Nair"]
        .map(String::from)
        .to_vec()
}

fn default_descriptions() -> Vec<String> {
    [
        "Needs a first pass before the team review on Friday.",
        "Blocked on upstream feedback; revisit once notes land.",
        "Carry over the open comments from the previous round.",
        "Small scope, but double-check the edge cases in staging.",
    ]
    .map(String::from)
    .to_vec()
}

fn default_created_month() -> (i32, u32) {
    (2025, 1)
}

fn default_due_month() -> (i32, u32) {
    (2025, 2)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Show the key hint line in the status row
    #[serde(default = "default_true")]
    pub show_key_hints: bool,
    #[serde(default)]
    pub colors: HashMap<String, String>,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            show_key_hints: true,
            colors: HashMap::new(),
        }
    }
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_match_seed_contract() {
        let config = AppConfig::default();
        assert_eq!(config.table.rows, 10);
        assert_eq!(config.table.selection, SelectionMode::Multiple);
        assert_eq!(config.seed.created_month, (2025, 1));
        assert_eq!(config.seed.due_month, (2025, 2));
        assert!(!config.seed.projects.is_empty());
        assert!(!config.seed.tasks.is_empty());
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [table]
            rows = 4
            selection = "single"
            "#,
        )
        .unwrap();
        assert_eq!(config.table.rows, 4);
        assert_eq!(config.table.selection, SelectionMode::Single);
        assert_eq!(config.seed.projects, AppConfig::default().seed.projects);
        assert!(config.ui.show_key_hints);
    }
}
