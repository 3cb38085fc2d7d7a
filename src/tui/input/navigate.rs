use crossterm::event::{KeyCode, KeyEvent};

use crate::ops::sort::SortKey;
use crate::tui::app::{App, Mode};

use super::*;

pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char('?') => app.show_help = true,

        // Selection
        KeyCode::Char('j') | KeyCode::Down => move_selection(app, 1),
        KeyCode::Char('k') | KeyCode::Up => move_selection(app, -1),
        KeyCode::Char('g') => app.selected = 0,
        KeyCode::Char('G') => {
            app.selected = app.list.displayed().len().saturating_sub(1);
        }

        // Task mutation
        KeyCode::Char(' ') | KeyCode::Char('x') => {
            if let Some(id) = app.selected_task_id() {
                app.list.toggle_done(id);
            }
        }
        KeyCode::Char('d') => {
            if let Some(id) = app.selected_task_id() {
                app.list.delete(id);
                app.clamp_selection();
            }
        }

        // Edit dialog
        KeyCode::Char('a') => {
            app.list.open_create();
            app.enter_edit_mode();
        }
        KeyCode::Char('e') | KeyCode::Enter => {
            if let Some(id) = app.selected_task_id()
                && app.list.open_edit(id)
            {
                app.enter_edit_mode();
            }
        }

        // Search
        KeyCode::Char('/') => app.mode = Mode::Search,
        KeyCode::Esc => {
            if !app.list.search_term().is_empty() {
                app.list.clear_search();
                app.reset_selection();
            }
        }

        // Sorting
        KeyCode::Char('1') => sort_and_clamp(app, SortKey::Done),
        KeyCode::Char('2') => sort_and_clamp(app, SortKey::Content),
        KeyCode::Char('3') => sort_and_clamp(app, SortKey::DoneTime),
        KeyCode::Char('4') => sort_and_clamp(app, SortKey::Id),

        // Windowing
        KeyCode::Char('i') => {
            app.list.toggle_mode();
            app.reset_selection();
        }
        KeyCode::Char(']') => {
            if app.list.can_page_forward() {
                app.list.page_forward();
                app.reset_selection();
            }
        }
        KeyCode::Char('[') => {
            if app.list.can_page_backward() {
                app.list.page_backward();
                app.reset_selection();
            }
        }
        KeyCode::Char('p') => {
            cycle_page_size(app);
            app.reset_selection();
        }

        _ => {}
    }
}

fn move_selection(app: &mut App, delta: isize) {
    let len = app.list.displayed().len();
    if len == 0 {
        return;
    }
    if delta > 0 {
        app.selected = (app.selected + 1).min(len - 1);
    } else {
        app.selected = app.selected.saturating_sub(1);
    }
}

fn sort_and_clamp(app: &mut App, key: SortKey) {
    app.list.sort_by(key);
    app.clamp_selection();
}

/// Flip the page size between the configured default and everything at once.
fn cycle_page_size(app: &mut App) {
    if app.list.page().page_size == app.base_page_size {
        app.list.set_page_size(app.list.total_len().max(1));
    } else {
        app.list.set_page_size(app.base_page_size);
    }
}
