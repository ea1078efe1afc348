use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::cli::commands::Cli;
use crate::io::config_io::load_config;
use crate::model::AppConfig;
use crate::model::row::{Field, Row};
use crate::table::controller::TableController;
use crate::table::seed::seed_rows;
use crate::table::selection::Selection;

use super::input;
use super::render;
use super::theme::Theme;

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Navigate,
    Edit,
    Menu,
}

/// What a confirmed project-menu choice is applied to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuTarget {
    /// Record the bulk-apply project choice
    BulkProject,
    /// Edit the project field of one row
    RowProject(usize),
}

/// State of the project menu popup
#[derive(Debug, Clone)]
pub struct MenuState {
    pub target: MenuTarget,
    pub cursor: usize,
}

/// State of the single-line cell editor
#[derive(Debug, Clone)]
pub struct EditState {
    pub index: usize,
    pub field: Field,
    pub buffer: String,
    /// Byte offset into `buffer`, always on a grapheme boundary
    pub cursor: usize,
}

/// Main application state
pub struct App {
    pub table: TableController,
    pub selection: Selection,
    pub theme: Theme,
    pub mode: Mode,
    pub should_quit: bool,
    /// Row cursor (index into the table's row list)
    pub cursor: usize,
    /// Scroll offset of the table view (first visible line)
    pub scroll_offset: usize,
    /// Help overlay visible
    pub show_help: bool,
    pub show_key_hints: bool,
    /// Transient one-line message in the status row
    pub status_message: Option<String>,
    /// Modal acknowledgment for the inert row actions
    pub notice: Option<String>,
    /// Options offered by the project menu
    pub project_options: Vec<String>,
    pub menu: Option<MenuState>,
    pub edit: Option<EditState>,
}

impl App {
    pub fn new(config: &AppConfig, rows: Vec<Row>) -> Self {
        App {
            table: TableController::new(rows),
            selection: Selection::new(config.table.selection),
            theme: Theme::from_config(&config.ui),
            mode: Mode::Navigate,
            should_quit: false,
            cursor: 0,
            scroll_offset: 0,
            show_help: false,
            show_key_hints: config.ui.show_key_hints,
            status_message: None,
            notice: None,
            project_options: config.seed.projects.clone(),
            menu: None,
            edit: None,
        }
    }

    /// Move the row cursor by `delta`, clamped to the row list
    pub fn move_cursor(&mut self, delta: i32) {
        let len = self.table.len();
        if len == 0 {
            return;
        }
        let max = (len - 1) as i32;
        self.cursor = (self.cursor as i32 + delta).clamp(0, max) as usize;
    }
}

/// Run the TUI application
pub fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = load_config(cli.config.as_deref())?;
    if let Some(rows) = cli.rows {
        config.table.rows = rows;
    }
    if let Some(selection) = cli.selection {
        config.table.selection = selection.into();
    }

    let mut rng = match cli.seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    };
    let rows = seed_rows(&config.seed, config.table.rows, &mut rng);
    let mut app = App::new(&config, rows);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            input::handle_key(app, key);
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn new_app_starts_in_navigate_mode() {
        let config = AppConfig::default();
        let mut rng = StdRng::seed_from_u64(1);
        let rows = seed_rows(&config.seed, config.table.rows, &mut rng);
        let app = App::new(&config, rows);
        assert_eq!(app.mode, Mode::Navigate);
        assert_eq!(app.cursor, 0);
        assert!(app.selection.is_empty());
        assert_eq!(app.project_options, config.seed.projects);
    }

    #[test]
    fn move_cursor_clamps() {
        let config = AppConfig::default();
        let mut rng = StdRng::seed_from_u64(1);
        let rows = seed_rows(&config.seed, 3, &mut rng);
        let mut app = App::new(&config, rows);
        app.move_cursor(-1);
        assert_eq!(app.cursor, 0);
        app.move_cursor(10);
        assert_eq!(app.cursor, 2);
    }

    #[test]
    fn move_cursor_on_empty_table() {
        let config = AppConfig::default();
        let mut app = App::new(&config, Vec::new());
        app.move_cursor(1);
        assert_eq!(app.cursor, 0);
    }
}
