use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::App;

use super::{centered_rect_fixed, wrap_text};

/// Render the acknowledgment popup raised by the inert row actions
pub fn render_notice_popup(frame: &mut Frame, app: &App, area: Rect) {
    let notice = app.notice.as_deref().unwrap_or("");

    let popup_w: u16 = 44.min(area.width.saturating_sub(2));
    let inner_w = popup_w.saturating_sub(2) as usize;

    let bg = app.theme.background;
    let header_style = Style::default()
        .fg(app.theme.highlight)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let text_style = Style::default().fg(app.theme.text).bg(bg);
    let bright_style = Style::default().fg(app.theme.text_bright).bg(bg);

    let mut styled_lines: Vec<(String, Style)> = Vec::new();
    styled_lines.push((" Row Action".into(), header_style));
    styled_lines.push(("".into(), text_style));
    for s in wrap_text(" ", notice, inner_w) {
        styled_lines.push((s, bright_style));
    }
    styled_lines.push(("".into(), text_style));
    for s in wrap_text(" ", "Press any key to dismiss.", inner_w) {
        styled_lines.push((s, text_style));
    }

    let popup_h = ((styled_lines.len() as u16) + 2).min(area.height.saturating_sub(2));
    let overlay_area = centered_rect_fixed(popup_w, popup_h, area);
    frame.render_widget(Clear, overlay_area);

    let lines: Vec<Line> = styled_lines
        .into_iter()
        .map(|(text, style)| Line::from(Span::styled(text, style)))
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.highlight).bg(bg))
        .style(Style::default().bg(bg));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(Style::default().bg(bg));

    frame.render_widget(paragraph, overlay_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::*;

    #[test]
    fn notice_text_is_rendered() {
        let mut app = demo_app(3);
        app.notice = Some("Add clicked for Task 0".into());
        let output = render_to_string(TERM_W, TERM_H, |frame, area| {
            render_notice_popup(frame, &mut app, area);
        });
        assert!(output.contains("Row Action"));
        assert!(output.contains("Add clicked for Task 0"));
        assert!(output.contains("Press any key to dismiss."));
    }
}
