use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::model::row::Field;

use crate::tui::app::{App, MenuTarget, Mode};

pub(super) fn handle_menu(app: &mut App, key: KeyEvent) {
    let Some(menu) = &mut app.menu else {
        app.mode = Mode::Navigate;
        return;
    };
    let last = app.project_options.len().saturating_sub(1);

    match (key.modifiers, key.code) {
        (_, KeyCode::Esc) => {
            app.menu = None;
            app.mode = Mode::Navigate;
        }

        (KeyModifiers::NONE, KeyCode::Up | KeyCode::Char('k')) => {
            menu.cursor = menu.cursor.saturating_sub(1);
        }
        (KeyModifiers::NONE, KeyCode::Down | KeyCode::Char('j')) => {
            menu.cursor = (menu.cursor + 1).min(last);
        }
        (KeyModifiers::NONE, KeyCode::Char('g')) | (_, KeyCode::Home) => {
            menu.cursor = 0;
        }
        (KeyModifiers::SHIFT, KeyCode::Char('G')) | (_, KeyCode::End) => {
            menu.cursor = last;
        }

        (_, KeyCode::Enter) => {
            // Guard against a confirm with nothing actually chosen
            let Some(option) = app.project_options.get(menu.cursor).cloned() else {
                app.menu = None;
                app.mode = Mode::Navigate;
                return;
            };
            let target = menu.target;
            app.menu = None;
            app.mode = Mode::Navigate;
            match target {
                MenuTarget::BulkProject => {
                    app.table.set_selected_project(&option);
                    app.status_message = Some(format!("bulk project: {} (B to apply)", option));
                }
                MenuTarget::RowProject(index) => {
                    app.table.update_field(index, Field::Project, &option);
                }
            }
        }

        _ => {}
    }
}
