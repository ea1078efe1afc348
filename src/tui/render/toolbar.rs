use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::table::selection::SelectionMode;
use crate::tui::app::App;

/// Render the toolbar: title, bulk-apply project choice, selection count,
/// with a separator line below
pub fn render_toolbar(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // toolbar
            Constraint::Length(1), // separator
        ])
        .split(area);

    render_bar(frame, app, chunks[0]);
    render_separator(frame, app, chunks[1]);
}

fn render_bar(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let bg_style = Style::default().bg(bg);
    let width = area.width as usize;

    let mut spans: Vec<Span> = Vec::new();
    spans.push(Span::styled(" ", bg_style));
    spans.push(Span::styled(
        "\u{25A6}",
        Style::default().fg(app.theme.highlight).bg(bg),
    ));
    spans.push(Span::styled(
        " Tasks ",
        Style::default()
            .fg(app.theme.text_bright)
            .bg(bg)
            .add_modifier(Modifier::BOLD),
    ));

    spans.push(Span::styled(
        " bulk: ",
        Style::default().fg(app.theme.dim).bg(bg),
    ));
    let bulk = app.table.selected_project().unwrap_or("\u{2014}");
    spans.push(Span::styled(
        bulk.to_string(),
        Style::default().fg(app.theme.text).bg(bg),
    ));

    // Selection summary, right-aligned
    let summary = if app.selection.mode() == SelectionMode::Single {
        format!("{} selected \u{00B7} single", app.selection.count())
    } else {
        format!("{} selected", app.selection.count())
    };
    let used: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let summary_width = summary.chars().count();
    if used + summary_width + 1 < width {
        spans.push(Span::styled(
            " ".repeat(width - used - summary_width - 1),
            bg_style,
        ));
        let color = if app.selection.is_empty() {
            app.theme.dim
        } else {
            app.theme.highlight
        };
        spans.push(Span::styled(summary, Style::default().fg(color).bg(bg)));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(bg_style);
    frame.render_widget(paragraph, area);
}

fn render_separator(frame: &mut Frame, app: &App, area: Rect) {
    let line = "\u{2500}".repeat(area.width as usize);
    let paragraph = Paragraph::new(Line::from(Span::styled(
        line,
        Style::default().fg(app.theme.dim).bg(app.theme.background),
    )));
    frame.render_widget(paragraph, area);
}
