use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::util::unicode;

use crate::tui::app::{App, Mode};

pub(super) fn handle_edit(app: &mut App, key: KeyEvent) {
    let Some(edit) = &mut app.edit else {
        app.mode = Mode::Navigate;
        return;
    };

    match (key.modifiers, key.code) {
        // Commit the buffer (the original commits the description on blur;
        // closing the editor is the terminal equivalent)
        (_, KeyCode::Enter) => {
            let (index, field, value) = (edit.index, edit.field, edit.buffer.clone());
            app.table.update_field(index, field, &value);
            app.edit = None;
            app.mode = Mode::Navigate;
        }

        // Discard
        (_, KeyCode::Esc) => {
            app.edit = None;
            app.mode = Mode::Navigate;
        }

        (m, KeyCode::Char(c)) if !m.contains(KeyModifiers::CONTROL) => {
            edit.buffer.insert(edit.cursor, c);
            edit.cursor += c.len_utf8();
        }

        (_, KeyCode::Backspace) => {
            if let Some(prev) = unicode::prev_grapheme_boundary(&edit.buffer, edit.cursor) {
                edit.buffer.replace_range(prev..edit.cursor, "");
                edit.cursor = prev;
            }
        }
        (_, KeyCode::Delete) => {
            if let Some(next) = unicode::next_grapheme_boundary(&edit.buffer, edit.cursor) {
                edit.buffer.replace_range(edit.cursor..next, "");
            }
        }

        (_, KeyCode::Left) => {
            if let Some(prev) = unicode::prev_grapheme_boundary(&edit.buffer, edit.cursor) {
                edit.cursor = prev;
            }
        }
        (_, KeyCode::Right) => {
            if let Some(next) = unicode::next_grapheme_boundary(&edit.buffer, edit.cursor) {
                edit.cursor = next;
            }
        }
        (_, KeyCode::Home) => {
            edit.cursor = 0;
        }
        (_, KeyCode::End) => {
            edit.cursor = edit.buffer.len();
        }

        _ => {}
    }
}
