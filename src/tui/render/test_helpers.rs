use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;

use crate::model::AppConfig;
use crate::model::row::Row;
use crate::tui::app::App;

pub const TERM_W: u16 = 80;
pub const TERM_H: u16 = 24;

/// Render into an in-memory buffer and return plain text (no styles).
pub fn render_to_string<F>(w: u16, h: u16, f: F) -> String
where
    F: FnOnce(&mut ratatui::Frame, Rect),
{
    let backend = TestBackend::new(w, h);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|frame| {
            let area = frame.area();
            f(frame, area);
        })
        .unwrap();

    let buf = terminal.backend().buffer().clone();
    let w = buf.area.width as usize;
    let lines: Vec<String> = buf
        .content
        .chunks(w)
        .map(|row| {
            let s: String = row.iter().map(|cell| cell.symbol()).collect();
            s.trim_end().to_string()
        })
        .collect();

    // Trim trailing blank lines
    let end = lines
        .iter()
        .rposition(|l| !l.is_empty())
        .map_or(0, |i| i + 1);
    lines[..end].join("\n")
}

/// Deterministic rows for render tests (fixed dates, no RNG).
pub fn sample_rows(count: usize) -> Vec<Row> {
    let projects = ["Apollo", "Beacon"];
    let assignees = ["Ana Reyes", "Tom Okafor"];
    (0..count)
        .map(|i| Row {
            key: format!("item-{}", i),
            project: projects[i % projects.len()].to_string(),
            task: format!("Task {}", i),
            assigned: assignees[i % assignees.len()].to_string(),
            date_created: "1/5/2025".into(),
            date_due: "2/12/2025".into(),
            status: if i % 2 == 0 {
                "In Progress".into()
            } else {
                "Completed".into()
            },
            description: format!("First pass over the checklist for row {}.", i),
            description_expanded: false,
        })
        .collect()
}

/// Build an App over `count` sample rows with the default config.
pub fn demo_app(count: usize) -> App {
    App::new(&AppConfig::default(), sample_rows(count))
}
