use crate::model::row::{Field, Row};
use crate::table::selection::Selection;

/// Inert per-row actions. They surface an acknowledgment and never touch
/// the row list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    Add,
    Delete,
}

impl RowAction {
    pub fn label(self) -> &'static str {
        match self {
            RowAction::Add => "Add",
            RowAction::Delete => "Delete",
        }
    }
}

/// Owns the ordered row list and the pending bulk-apply project choice,
/// and mediates every mutation on them.
///
/// Operations never fail: an out-of-range index is silently ignored, since
/// indices originate from the currently rendered row list.
#[derive(Debug, Clone)]
pub struct TableController {
    rows: Vec<Row>,
    selected_project: Option<String>,
}

impl TableController {
    pub fn new(rows: Vec<Row>) -> Self {
        TableController {
            rows,
            selected_project: None,
        }
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Option<&Row> {
        self.rows.get(index)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Replace one field on the row at `index`. No validation is performed
    /// on `value`; empty strings are accepted.
    pub fn update_field(&mut self, index: usize, field: Field, value: &str) {
        let Some(row) = self.rows.get_mut(index) else {
            return;
        };
        row.set_field(field, value);
    }

    /// Flip the description display mode on the row at `index`. Pure
    /// presentation toggle; stored description content is untouched.
    pub fn toggle_description_expanded(&mut self, index: usize) {
        let Some(row) = self.rows.get_mut(index) else {
            return;
        };
        row.description_expanded = !row.description_expanded;
    }

    /// Record the bulk-apply menu choice. Last write wins; no row is
    /// touched until `apply_project_to_all`.
    pub fn set_selected_project(&mut self, project: &str) {
        self.selected_project = Some(project.to_string());
    }

    pub fn selected_project(&self) -> Option<&str> {
        self.selected_project.as_deref()
    }

    /// Set every row's project to the recorded bulk choice, then clear the
    /// selection. If no choice was ever recorded the rows keep their
    /// current projects, but the selection is still cleared so the user
    /// sees the bulk operation complete.
    pub fn apply_project_to_all(&mut self, selection: &mut Selection) {
        if let Some(project) = self.selected_project.clone() {
            for row in &mut self.rows {
                row.project.clone_from(&project);
            }
        }
        selection.clear();
    }

    /// Trigger an inert row action, returning the acknowledgment text the
    /// UI should surface. None for an out-of-range index.
    pub fn row_action(&self, index: usize, action: RowAction) -> Option<String> {
        let row = self.rows.get(index)?;
        Some(format!("{} clicked for {}", action.label(), row.task))
    }
}
