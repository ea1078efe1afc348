use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::App;
use crate::util::unicode;

use super::centered_rect_fixed;

const KEYS: &[(&str, &str)] = &[
    ("j/k \u{2191}/\u{2193}", "move cursor"),
    ("g/G", "jump to top/bottom"),
    ("Space/v", "toggle row selection"),
    ("A / N", "select all / none"),
    ("x / Enter", "expand or collapse description"),
    ("t", "edit task title"),
    ("e", "edit description"),
    ("p", "change row project"),
    ("b", "choose bulk project"),
    ("B", "apply bulk project to all rows"),
    ("a / d", "row add/delete actions"),
    ("?", "toggle this help"),
    ("q", "quit"),
];

/// Render the help overlay listing every key binding
pub fn render_help_overlay(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let popup_w: u16 = 46.min(area.width.saturating_sub(2));
    let inner_w = popup_w.saturating_sub(2) as usize;

    let key_style = Style::default()
        .fg(app.theme.highlight)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let text_style = Style::default().fg(app.theme.text).bg(bg);
    let bg_style = Style::default().bg(bg);

    let key_col = KEYS
        .iter()
        .map(|(k, _)| unicode::display_width(k))
        .max()
        .unwrap_or(0)
        + 2;

    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(Span::styled(" ".repeat(inner_w), bg_style)));
    for (key, action) in KEYS {
        let mut spans = vec![
            Span::styled(" ", bg_style),
            Span::styled(unicode::pad_to_width(key, key_col), key_style),
            Span::styled(
                unicode::truncate_to_width(action, inner_w.saturating_sub(key_col + 1)),
                text_style,
            ),
        ];
        let used: usize = spans.iter().map(|s| unicode::display_width(&s.content)).sum();
        if used < inner_w {
            spans.push(Span::styled(" ".repeat(inner_w - used), bg_style));
        }
        lines.push(Line::from(spans));
    }
    lines.push(Line::from(Span::styled(" ".repeat(inner_w), bg_style)));

    let popup_h = ((lines.len() as u16) + 2).min(area.height.saturating_sub(2));
    let popup_area = centered_rect_fixed(popup_w, popup_h, area);

    frame.render_widget(Clear, popup_area);

    let title_style = Style::default()
        .fg(app.theme.text)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let block = Block::default()
        .title(Span::styled(" Help ", title_style))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.text).bg(bg))
        .style(Style::default().bg(bg));

    let paragraph = Paragraph::new(lines).block(block).style(Style::default().bg(bg));
    frame.render_widget(paragraph, popup_area);
}
