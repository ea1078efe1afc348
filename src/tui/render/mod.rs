pub mod help_overlay;
pub mod notice_popup;
pub mod project_menu;
pub mod status_row;
pub mod table_view;
pub mod toolbar;

#[cfg(test)]
pub mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::widgets::Block;

use super::app::App;

/// Main render function — dispatches to sub-renderers
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    // Layout: toolbar (2 rows) | table | status row (1 row)
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // toolbar + separator
            Constraint::Min(1),    // table area
            Constraint::Length(1), // status row
        ])
        .split(area);

    toolbar::render_toolbar(frame, app, chunks[0]);
    table_view::render_table_view(frame, app, chunks[1]);
    status_row::render_status_row(frame, app, chunks[2]);

    // Overlays, topmost last
    if app.menu.is_some() {
        project_menu::render_project_menu(frame, app, frame.area());
    }
    if app.show_help {
        help_overlay::render_help_overlay(frame, app, frame.area());
    }
    if app.notice.is_some() {
        notice_popup::render_notice_popup(frame, app, frame.area());
    }
}

/// A fixed-size rect centered in `area`
pub(super) fn centered_rect_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    let x = area.x + area.width.saturating_sub(w) / 2;
    let y = area.y + area.height.saturating_sub(h) / 2;
    Rect::new(x, y, w, h)
}

/// Word-wrap `text` into lines of at most `max_width` characters.
/// Every line (including the first) is prefixed with `indent`.
pub(super) fn wrap_text(indent: &str, text: &str, max_width: usize) -> Vec<String> {
    let indent_len = indent.len();
    let mut lines = Vec::new();
    let mut current = indent.to_string();

    for word in text.split_whitespace() {
        let space = if current.len() == indent_len { 0 } else { 1 };
        if current.len() + space + word.len() > max_width && current.len() > indent_len {
            lines.push(current);
            current = indent.to_string();
        }
        if current.len() > indent_len {
            current.push(' ');
        }
        current.push_str(word);
    }
    if current.len() > indent_len || lines.is_empty() {
        lines.push(current);
    }
    lines
}
