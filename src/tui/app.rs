use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use regex::Regex;
use tracing::info;

use crate::io::source::{FetchEvent, FetchHandle, TaskSource, spawn_fetch};
use crate::list::ListState;
use crate::model::AppConfig;
use crate::model::task::TaskId;

use super::input;
use super::render;
use super::theme::Theme;

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Navigate,
    Search,
    Edit,
}

/// Which field of the edit dialog has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditFocus {
    Content,
    Done,
}

/// Main application state
pub struct App {
    pub list: ListState,
    pub mode: Mode,
    pub theme: Theme,
    pub should_quit: bool,
    /// Help overlay visible
    pub show_help: bool,
    /// Selected row within the visible window
    pub selected: usize,
    /// First visible row of the table viewport
    pub scroll_offset: usize,
    /// Focused field of the edit dialog
    pub edit_focus: EditFocus,
    /// Byte offset of the cursor in the draft content
    pub edit_cursor: usize,
    /// Visible fraction of the end-of-list marker, measured by the last draw
    pub sentinel_fraction: f64,
    /// In-flight initial fetch
    pub fetch: Option<FetchHandle>,
    /// Page size to come back to from "all"
    pub base_page_size: usize,
}

impl App {
    pub fn new(config: &AppConfig) -> Self {
        App {
            list: ListState::new(&config.list),
            mode: Mode::Navigate,
            theme: Theme::from_config(&config.ui),
            should_quit: false,
            show_help: false,
            selected: 0,
            scroll_offset: 0,
            edit_focus: EditFocus::Content,
            edit_cursor: 0,
            sentinel_fraction: 0.0,
            fetch: None,
            base_page_size: config.list.page_size.max(1),
        }
    }

    /// Id of the task under the selection, if any rows are visible
    pub fn selected_task_id(&self) -> Option<TaskId> {
        self.list.displayed().get(self.selected).map(|t| t.id)
    }

    /// Keep the selection inside the visible window
    pub fn clamp_selection(&mut self) {
        let len = self.list.displayed().len();
        if len == 0 {
            self.selected = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
    }

    /// Reset selection and scroll to the top of the window
    pub fn reset_selection(&mut self) {
        self.selected = 0;
        self.scroll_offset = 0;
    }

    /// Put the UI into edit mode for the currently open draft session
    pub fn enter_edit_mode(&mut self) {
        self.mode = Mode::Edit;
        self.edit_focus = EditFocus::Content;
        self.edit_cursor = self
            .list
            .session()
            .draft()
            .map_or(0, |d| d.content.len());
    }

    /// Regex that highlights the current search term in rendered rows
    pub fn search_highlight_re(&self) -> Option<Regex> {
        let term = self.list.search_term();
        if term.is_empty() {
            return None;
        }
        Regex::new(&format!("(?i){}", regex::escape(term))).ok()
    }
}

/// Run the TUI application
pub fn run(source: Box<dyn TaskSource>, config: AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::new(&config);
    app.fetch = Some(spawn_fetch(source));
    info!("starting interactive session");

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

    // Run event loop
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

        // Deliver the fetch outcome reported by the background thread
        if let Some(event) = app.fetch.as_mut().and_then(|h| h.poll()) {
            match event {
                FetchEvent::Done(tasks) => app.list.resolve_fetch(Ok(tasks)),
                FetchEvent::Failed(message) => app.list.resolve_fetch(Err(message)),
            }
            app.fetch = None;
            app.clamp_selection();
        }

        // Feed the marker visibility measured during the draw above
        app.list.observe_sentinel(app.sentinel_fraction);

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
