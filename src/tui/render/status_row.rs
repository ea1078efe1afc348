use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};

/// Render the status row (bottom of screen)
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let line = match app.mode {
        Mode::Edit => {
            let (label, buffer) = match &app.edit {
                Some(edit) => (edit.field.label(), edit.buffer.as_str()),
                None => ("", ""),
            };
            let mut spans = vec![
                Span::styled(
                    format!(" {}: {}", label, buffer),
                    Style::default().fg(app.theme.text_bright).bg(bg),
                ),
                Span::styled("\u{258C}", Style::default().fg(app.theme.highlight).bg(bg)),
            ];
            with_hint(&mut spans, "Enter save  Esc cancel", app, width);
            Line::from(spans)
        }
        Mode::Menu => {
            let mut spans = vec![Span::styled(
                " choose a project",
                Style::default().fg(app.theme.dim).bg(bg),
            )];
            with_hint(&mut spans, "\u{2191}\u{2193} navigate  Enter select  Esc close", app, width);
            Line::from(spans)
        }
        Mode::Navigate => {
            if let Some(ref message) = app.status_message {
                Line::from(Span::styled(
                    format!(" {}", message),
                    Style::default().fg(app.theme.text).bg(bg),
                ))
            } else if app.show_key_hints {
                Line::from(Span::styled(
                    " Space select  b/B bulk project  t/e/p edit  x expand  a/d actions  ? help",
                    Style::default().fg(app.theme.dim).bg(bg),
                ))
            } else {
                Line::from(Span::styled(" ".repeat(width), Style::default().bg(bg)))
            }
        }
    };

    let paragraph = Paragraph::new(line).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

/// Right-align a dim key hint after the given spans
fn with_hint(spans: &mut Vec<Span<'_>>, hint: &'static str, app: &App, width: usize) {
    let content_width: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let hint_width = hint.chars().count();
    if content_width + hint_width < width {
        let padding = width - content_width - hint_width;
        spans.push(Span::styled(
            " ".repeat(padding),
            Style::default().bg(app.theme.background),
        ));
        spans.push(Span::styled(
            hint,
            Style::default().fg(app.theme.dim).bg(app.theme.background),
        ));
    }
}
