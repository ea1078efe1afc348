use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::model::row::Field;
use crate::table::controller::RowAction;

use crate::tui::app::{App, EditState, MenuState, MenuTarget, Mode};

pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    // Clear any transient status message on keypress
    app.status_message = None;

    match (key.modifiers, key.code) {
        // Quit
        (KeyModifiers::NONE, KeyCode::Char('q')) => {
            app.should_quit = true;
        }
        (m, KeyCode::Char('q')) if m.contains(KeyModifiers::CONTROL) => {
            app.should_quit = true;
        }

        // Cursor movement
        (KeyModifiers::NONE, KeyCode::Up | KeyCode::Char('k')) => {
            app.move_cursor(-1);
        }
        (KeyModifiers::NONE, KeyCode::Down | KeyCode::Char('j')) => {
            app.move_cursor(1);
        }
        (KeyModifiers::NONE, KeyCode::Char('g')) | (_, KeyCode::Home) => {
            app.cursor = 0;
        }
        (KeyModifiers::SHIFT, KeyCode::Char('G')) | (_, KeyCode::End) => {
            app.cursor = app.table.len().saturating_sub(1);
        }

        // Selection
        (KeyModifiers::NONE, KeyCode::Char(' ') | KeyCode::Char('v')) => {
            if !app.table.is_empty() {
                app.selection.toggle(app.cursor);
            }
        }
        (KeyModifiers::SHIFT, KeyCode::Char('A')) => {
            app.selection.select_all(app.table.len());
        }
        (KeyModifiers::SHIFT, KeyCode::Char('N')) | (_, KeyCode::Esc) => {
            app.selection.clear();
        }

        // Description expand/collapse
        (KeyModifiers::NONE, KeyCode::Char('x') | KeyCode::Enter) => {
            app.table.toggle_description_expanded(app.cursor);
        }

        // Inline edits
        (KeyModifiers::NONE, KeyCode::Char('t')) => {
            begin_edit(app, Field::Task);
        }
        (KeyModifiers::NONE, KeyCode::Char('e')) => {
            begin_edit(app, Field::Description);
        }
        (KeyModifiers::NONE, KeyCode::Char('p')) => {
            open_project_menu(app, MenuTarget::RowProject(app.cursor));
        }

        // Bulk project choice and apply
        (KeyModifiers::NONE, KeyCode::Char('b')) => {
            open_project_menu(app, MenuTarget::BulkProject);
        }
        (KeyModifiers::SHIFT, KeyCode::Char('B')) => {
            apply_bulk_project(app);
        }

        // Inert row actions
        (KeyModifiers::NONE, KeyCode::Char('a')) => {
            app.notice = app.table.row_action(app.cursor, RowAction::Add);
        }
        (KeyModifiers::NONE, KeyCode::Char('d')) => {
            app.notice = app.table.row_action(app.cursor, RowAction::Delete);
        }

        // Help overlay
        (_, KeyCode::Char('?')) => {
            app.show_help = true;
        }

        _ => {}
    }
}

/// Open the single-line editor on the cursor row's `field`
fn begin_edit(app: &mut App, field: Field) {
    let Some(row) = app.table.row(app.cursor) else {
        return;
    };
    let buffer = row.field(field).to_string();
    let cursor = buffer.len();
    app.edit = Some(EditState {
        index: app.cursor,
        field,
        buffer,
        cursor,
    });
    app.mode = Mode::Edit;
}

/// Open the project menu popup, cursor on the current value when present
fn open_project_menu(app: &mut App, target: MenuTarget) {
    if app.project_options.is_empty() {
        app.status_message = Some("no project options configured".to_string());
        return;
    }
    let current = match target {
        MenuTarget::BulkProject => app.table.selected_project().map(str::to_string),
        MenuTarget::RowProject(index) => {
            let Some(row) = app.table.row(index) else {
                return;
            };
            Some(row.project.clone())
        }
    };
    let cursor = current
        .and_then(|c| app.project_options.iter().position(|p| *p == c))
        .unwrap_or(0);
    app.menu = Some(MenuState { target, cursor });
    app.mode = Mode::Menu;
}

/// Apply the recorded bulk project to every row, then clear the selection
fn apply_bulk_project(app: &mut App) {
    let message = match app.table.selected_project() {
        Some(project) => format!("applied {} to all rows", project),
        None => "no project chosen (b to choose)".to_string(),
    };
    app.table.apply_project_to_all(&mut app.selection);
    app.status_message = Some(message);
}
