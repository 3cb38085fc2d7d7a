use chrono::{NaiveDate, NaiveDateTime};
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;

use crate::model::{AppConfig, Task};
use crate::tui::app::App;

pub const TERM_W: u16 = 80;
pub const TERM_H: u16 = 24;

/// Render into an in-memory buffer and return plain text (no styles).
pub fn render_to_string<F>(w: u16, h: u16, f: F) -> String
where
    F: FnOnce(&mut ratatui::Frame, Rect),
{
    let mut terminal = Terminal::new(TestBackend::new(w, h)).unwrap();
    terminal
        .draw(|frame| {
            let area = frame.area();
            f(frame, area);
        })
        .unwrap();

    let buf = terminal.backend().buffer();
    let width = buf.area.width as usize;
    let mut lines: Vec<String> = buf
        .content
        .chunks(width)
        .map(|row| {
            row.iter()
                .map(|cell| cell.symbol())
                .collect::<String>()
                .trim_end()
                .to_string()
        })
        .collect();
    while lines.last().is_some_and(|l| l.is_empty()) {
        lines.pop();
    }
    lines.join("\n")
}

/// Fixed completion timestamp for deterministic output.
pub fn stamp(minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, 9)
        .and_then(|d| d.and_hms_opt(10, minute, 0))
        .unwrap()
}

/// Tasks "task 1".."task n"; every third one is done.
pub fn sample_tasks(n: usize) -> Vec<Task> {
    (1..=n as u64)
        .map(|id| {
            let mut task = Task::new(id, format!("task {id}"));
            if id % 3 == 0 {
                task.set_done(true, stamp((id % 60) as u32));
            }
            task
        })
        .collect()
}

/// Build an App over an already-resolved list in infinite mode.
pub fn infinite_app(page_size: usize, tasks: Vec<Task>) -> App {
    let mut config = AppConfig::default();
    config.list.infinite = true;
    config.list.page_size = page_size;
    let mut app = App::new(&config);
    app.list.resolve_fetch(Ok(tasks));
    app
}

/// Build an App over an already-resolved list in paged mode.
pub fn paged_app(page_size: usize, tasks: Vec<Task>) -> App {
    let mut config = AppConfig::default();
    config.list.infinite = false;
    config.list.page_size = page_size;
    let mut app = App::new(&config);
    app.list.resolve_fetch(Ok(tasks));
    app
}

/// Build an App still waiting on its first fetch.
pub fn loading_app() -> App {
    App::new(&AppConfig::default())
}

/// Build an App whose fetch already failed.
pub fn failed_app(message: &str) -> App {
    let mut app = App::new(&AppConfig::default());
    app.list.resolve_fetch(Err(message.to_string()));
    app
}
