use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::{App, MenuTarget};
use crate::util::unicode;

use super::centered_rect_fixed;

/// Render the project menu popup overlay
pub fn render_project_menu(frame: &mut Frame, app: &App, area: Rect) {
    let Some(menu) = &app.menu else {
        return;
    };

    let bg = app.theme.background;
    let bg_style = Style::default().bg(bg);

    // Sizing: widest option + indicator, min 24, capped to the screen
    let widest = app
        .project_options
        .iter()
        .map(|p| unicode::display_width(p))
        .max()
        .unwrap_or(0);
    let popup_w = ((widest + 6).max(24) as u16 + 2).min(area.width.saturating_sub(2));
    let inner_w = popup_w.saturating_sub(2) as usize;

    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(Span::styled(" ".repeat(inner_w), bg_style)));

    // The row target highlights that row's current project, the bulk target
    // highlights the recorded bulk choice
    let current = match menu.target {
        MenuTarget::BulkProject => app.table.selected_project().map(str::to_string),
        MenuTarget::RowProject(index) => app.table.row(index).map(|r| r.project.clone()),
    };

    for (i, option) in app.project_options.iter().enumerate() {
        let is_cursor = i == menu.cursor;
        let is_current = current.as_deref() == Some(option.as_str());

        let row_bg = if is_cursor { app.theme.selection_bg } else { bg };
        let row_pad = Style::default().bg(row_bg);

        let mut spans: Vec<Span> = Vec::new();
        let indicator = if is_cursor { " \u{25B6} " } else { "   " };
        spans.push(Span::styled(indicator, row_pad));

        let color = if is_current {
            app.theme.highlight
        } else if is_cursor {
            app.theme.text_bright
        } else {
            app.theme.text
        };
        let mut style = Style::default().fg(color).bg(row_bg);
        if is_cursor {
            style = style.add_modifier(Modifier::BOLD);
        }
        spans.push(Span::styled(
            unicode::truncate_to_width(option, inner_w.saturating_sub(4)),
            style,
        ));

        let used: usize = spans.iter().map(|s| unicode::display_width(&s.content)).sum();
        if used < inner_w {
            spans.push(Span::styled(" ".repeat(inner_w - used), row_pad));
        }
        lines.push(Line::from(spans));
    }

    lines.push(Line::from(Span::styled(" ".repeat(inner_w), bg_style)));

    // Key hints
    let hint = " \u{2191}\u{2193}/jk navigate  Enter select  Esc close";
    let hint_width = unicode::display_width(hint);
    let mut hint_spans = vec![Span::styled(
        unicode::truncate_to_width(hint, inner_w),
        Style::default().fg(app.theme.dim).bg(bg),
    )];
    if hint_width < inner_w {
        hint_spans.push(Span::styled(" ".repeat(inner_w - hint_width), bg_style));
    }
    lines.push(Line::from(hint_spans));

    let popup_h = ((lines.len() as u16) + 2).min(area.height.saturating_sub(2));
    let popup_area = centered_rect_fixed(popup_w, popup_h, area);

    frame.render_widget(Clear, popup_area);

    let title = match menu.target {
        MenuTarget::BulkProject => " Bulk Project ",
        MenuTarget::RowProject(_) => " Project ",
    };
    let title_style = Style::default()
        .fg(app.theme.text)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let block = Block::default()
        .title(Span::styled(title, title_style))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.text).bg(bg))
        .style(Style::default().bg(bg));

    let paragraph = Paragraph::new(lines).block(block).style(Style::default().bg(bg));
    frame.render_widget(paragraph, popup_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::app::MenuState;
    use crate::tui::render::test_helpers::*;

    #[test]
    fn menu_lists_options_with_cursor() {
        let mut app = demo_app(3);
        app.menu = Some(MenuState {
            target: MenuTarget::BulkProject,
            cursor: 1,
        });
        let output = render_to_string(TERM_W, TERM_H, |frame, area| {
            render_project_menu(frame, &mut app, area);
        });
        assert!(output.contains(" Bulk Project "));
        assert!(output.contains("\u{25B6} Beacon"));
        assert!(output.contains("Apollo"));
        assert!(output.contains("Enter select"));
    }

    #[test]
    fn row_target_uses_plain_title() {
        let mut app = demo_app(3);
        app.menu = Some(MenuState {
            target: MenuTarget::RowProject(0),
            cursor: 0,
        });
        let output = render_to_string(TERM_W, TERM_H, |frame, area| {
            render_project_menu(frame, &mut app, area);
        });
        assert!(output.contains(" Project "));
    }
}
