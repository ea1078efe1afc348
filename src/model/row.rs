/// Columns of a row that accept edits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Project,
    Task,
    Description,
}

impl Field {
    /// Column header / prompt label for this field
    pub fn label(self) -> &'static str {
        match self {
            Field::Project => "project",
            Field::Task => "task",
            Field::Description => "description",
        }
    }
}

/// One task record in the table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// Stable unique identifier, assigned at seed time, never edited
    pub key: String,
    pub project: String,
    pub task: String,
    /// Assignee name (display-only)
    pub assigned: String,
    /// Preformatted `M/D/YYYY` date strings, fixed after seeding
    pub date_created: String,
    pub date_due: String,
    /// Display-only status label
    pub status: String,
    pub description: String,
    /// Presentation hint: show the full description under the row
    pub description_expanded: bool,
}

impl Row {
    /// Read an editable field by name
    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Project => &self.project,
            Field::Task => &self.task,
            Field::Description => &self.description,
        }
    }

    /// Replace an editable field. Any string is accepted, including empty.
    pub fn set_field(&mut self, field: Field, value: &str) {
        match field {
            Field::Project => value.clone_into(&mut self.project),
            Field::Task => value.clone_into(&mut self.task),
            Field::Description => value.clone_into(&mut self.description),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample_row() -> Row {
        Row {
            key: "item-0".into(),
            project: "Apollo".into(),
            task: "Draft launch checklist".into(),
            assigned: "Ana Reyes".into(),
            date_created: "1/5/2025".into(),
            date_due: "2/12/2025".into(),
            status: "In Progress".into(),
            description: "First pass over the checklist.".into(),
            description_expanded: false,
        }
    }

    #[test]
    fn set_field_replaces_only_that_field() {
        let mut row = sample_row();
        let before = row.clone();
        row.set_field(Field::Task, "Write spec");
        assert_eq!(row.task, "Write spec");
        assert_eq!(row.project, before.project);
        assert_eq!(row.description, before.description);
        assert_eq!(row.key, before.key);
    }

    #[test]
    fn set_field_accepts_empty() {
        let mut row = sample_row();
        row.set_field(Field::Description, "");
        assert_eq!(row.field(Field::Description), "");
    }
}
