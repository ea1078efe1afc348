use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::App;
use crate::util::unicode;

use super::wrap_text;

// Fixed column widths in terminal cells, each including a trailing gap.
// The description column takes whatever is left.
const PREFIX_W: usize = 5; // cursor bar + selection checkbox
const PROJECT_W: usize = 10;
const TASK_W: usize = 16;
const ASSIGNED_W: usize = 10;
const CREATED_W: usize = 10;
const DUE_W: usize = 10;
const STATUS_W: usize = 12;
const FIXED_W: usize =
    PREFIX_W + PROJECT_W + TASK_W + ASSIGNED_W + CREATED_W + DUE_W + STATUS_W;

/// Render the task table: header row plus one line per row, with wrapped
/// description lines under expanded rows.
pub fn render_table_view(frame: &mut Frame, app: &mut App, area: Rect) {
    if app.table.is_empty() {
        let empty = Paragraph::new(" No rows")
            .style(Style::default().fg(app.theme.dim).bg(app.theme.background));
        frame.render_widget(empty, area);
        return;
    }

    // Clamp cursor
    app.cursor = app.cursor.min(app.table.len() - 1);

    let width = area.width as usize;
    let desc_w = width.saturating_sub(FIXED_W);
    let visible_height = (area.height as usize).saturating_sub(1); // minus header

    let mut lines: Vec<Line> = Vec::new();
    lines.push(header_line(app, desc_w));

    let mut cursor_line = 0;
    for (i, row) in app.table.rows().iter().enumerate() {
        let is_cursor = i == app.cursor;
        let is_selected = app.selection.is_selected(i);
        if is_cursor {
            cursor_line = lines.len() - 1; // header excluded from scrolling
        }

        let bg = if is_selected {
            app.theme.selection_bg
        } else if i % 2 == 0 {
            app.theme.row_alt
        } else {
            app.theme.background
        };

        let mut spans: Vec<Span> = Vec::new();

        // Cursor bar
        if is_cursor {
            spans.push(Span::styled(
                "\u{258E}",
                Style::default().fg(app.theme.selection_border).bg(bg),
            ));
        } else {
            spans.push(Span::styled(" ", Style::default().bg(bg)));
        }

        // Selection checkbox
        let (check, check_color) = if is_selected {
            ("[x] ", app.theme.highlight)
        } else {
            ("[ ] ", app.theme.dim)
        };
        spans.push(Span::styled(check, Style::default().fg(check_color).bg(bg)));

        let mut task_style = Style::default().fg(app.theme.text_bright).bg(bg);
        if is_cursor {
            task_style = task_style.add_modifier(Modifier::BOLD);
        }

        spans.push(cell(&row.project, PROJECT_W, app.theme.text, bg));
        spans.push(Span::styled(
            unicode::pad_to_width(&row.task, TASK_W),
            task_style,
        ));
        spans.push(cell(&row.assigned, ASSIGNED_W, app.theme.text, bg));
        spans.push(cell(&row.date_created, CREATED_W, app.theme.dim, bg));
        spans.push(cell(&row.date_due, DUE_W, app.theme.dim, bg));
        spans.push(cell(
            &row.status,
            STATUS_W,
            app.theme.status_color(&row.status),
            bg,
        ));

        // Description cell: expand indicator + truncated content
        if desc_w >= 2 && !row.description.is_empty() {
            let indicator = if row.description_expanded {
                "\u{25BC} "
            } else {
                "\u{25B6} "
            };
            spans.push(Span::styled(
                indicator,
                Style::default().fg(app.theme.dim).bg(bg),
            ));
            spans.push(cell(
                &row.description,
                desc_w.saturating_sub(2),
                app.theme.dim,
                bg,
            ));
        } else if desc_w > 0 {
            spans.push(Span::styled(
                " ".repeat(desc_w),
                Style::default().bg(bg),
            ));
        }

        lines.push(Line::from(spans));

        // Full description under the row when expanded
        if row.description_expanded && !row.description.is_empty() {
            let indent = " ".repeat(PREFIX_W + 2);
            for text in wrap_text(&indent, &row.description, width.saturating_sub(1)) {
                let used = unicode::display_width(&text);
                let mut desc_spans = vec![Span::styled(
                    text,
                    Style::default().fg(app.theme.dim).bg(bg),
                )];
                if used < width {
                    desc_spans.push(Span::styled(
                        " ".repeat(width - used),
                        Style::default().bg(bg),
                    ));
                }
                lines.push(Line::from(desc_spans));
            }
        }
    }

    // Auto-adjust scroll to keep the cursor row visible
    let mut scroll = app.scroll_offset;
    if cursor_line < scroll {
        scroll = cursor_line;
    } else if visible_height > 0 && cursor_line >= scroll + visible_height {
        scroll = cursor_line - visible_height + 1;
    }
    app.scroll_offset = scroll;

    // Header stays pinned; body lines scroll beneath it
    let mut visible: Vec<Line> = Vec::with_capacity(visible_height + 1);
    let mut body = lines.split_off(1);
    visible.append(&mut lines);
    visible.extend(body.drain(..).skip(scroll).take(visible_height));

    let paragraph = Paragraph::new(visible).style(Style::default().bg(app.theme.background));
    frame.render_widget(paragraph, area);
}

fn header_line<'a>(app: &App, desc_w: usize) -> Line<'a> {
    let style = Style::default()
        .fg(app.theme.dim)
        .bg(app.theme.background)
        .add_modifier(Modifier::BOLD);
    let mut text = String::with_capacity(FIXED_W + desc_w);
    text.push_str(&" ".repeat(PREFIX_W));
    text.push_str(&unicode::pad_to_width("Project", PROJECT_W));
    text.push_str(&unicode::pad_to_width("Task", TASK_W));
    text.push_str(&unicode::pad_to_width("Assigned", ASSIGNED_W));
    text.push_str(&unicode::pad_to_width("Created", CREATED_W));
    text.push_str(&unicode::pad_to_width("Due", DUE_W));
    text.push_str(&unicode::pad_to_width("Status", STATUS_W));
    if desc_w > 0 {
        text.push_str(&unicode::pad_to_width("Description", desc_w));
    }
    Line::from(Span::styled(text, style))
}

fn cell<'a>(text: &str, w: usize, fg: ratatui::style::Color, bg: ratatui::style::Color) -> Span<'a> {
    Span::styled(unicode::pad_to_width(text, w), Style::default().fg(fg).bg(bg))
}
