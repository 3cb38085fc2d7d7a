use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::{App, Mode};

use super::*;

/// Search mode edits the filter term live: every keystroke narrows the list
/// immediately. Enter and Esc both leave the term in place; clearing it is a
/// navigate-mode Esc.
pub(super) fn handle_search(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        (_, KeyCode::Enter) | (_, KeyCode::Esc) => {
            app.mode = Mode::Navigate;
        }

        (_, KeyCode::Backspace) => {
            let mut term = app.list.search_term().to_string();
            term.pop();
            apply_term(app, &term);
        }

        (m, KeyCode::Char('u')) if m.contains(KeyModifiers::CONTROL) => {
            apply_term(app, "");
        }

        (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char(c)) => {
            let mut term = app.list.search_term().to_string();
            term.push(c);
            apply_term(app, &term);
        }

        _ => {}
    }
}

fn apply_term(app: &mut App, term: &str) {
    if app.list.search_term() != term {
        app.list.set_search(term);
        app.reset_selection();
    }
}
