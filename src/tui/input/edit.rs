use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::{App, EditFocus, Mode};
use crate::util::text;

use super::*;

pub(super) fn handle_edit(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        (_, KeyCode::Esc) => {
            app.list.cancel_session();
            app.mode = Mode::Navigate;
        }
        (_, KeyCode::Enter) => {
            app.list.save_session();
            app.mode = Mode::Navigate;
            app.clamp_selection();
        }
        (KeyModifiers::NONE, KeyCode::Tab)
        | (KeyModifiers::NONE, KeyCode::Up)
        | (KeyModifiers::NONE, KeyCode::Down) => {
            app.edit_focus = match app.edit_focus {
                EditFocus::Content => EditFocus::Done,
                EditFocus::Done => EditFocus::Content,
            };
        }
        _ => match app.edit_focus {
            EditFocus::Content => handle_content_key(app, key),
            EditFocus::Done => handle_done_key(app, key),
        },
    }
}

/// Single-line text editing on the draft content, grapheme-aware.
fn handle_content_key(app: &mut App, key: KeyEvent) {
    let Some(draft) = app.list.draft_mut() else {
        return;
    };

    match (key.modifiers, key.code) {
        (_, KeyCode::Left) => {
            if let Some(pos) = text::prev_grapheme_boundary(&draft.content, app.edit_cursor) {
                app.edit_cursor = pos;
            }
        }
        (_, KeyCode::Right) => {
            if let Some(pos) = text::next_grapheme_boundary(&draft.content, app.edit_cursor) {
                app.edit_cursor = pos;
            }
        }
        (_, KeyCode::Home) => app.edit_cursor = 0,
        (_, KeyCode::End) => app.edit_cursor = draft.content.len(),
        (m, KeyCode::Char('a')) if m.contains(KeyModifiers::CONTROL) => {
            app.edit_cursor = 0;
        }
        (m, KeyCode::Char('e')) if m.contains(KeyModifiers::CONTROL) => {
            app.edit_cursor = draft.content.len();
        }
        (m, KeyCode::Char('u')) if m.contains(KeyModifiers::CONTROL) => {
            draft.content.drain(..app.edit_cursor);
            app.edit_cursor = 0;
        }
        (KeyModifiers::NONE, KeyCode::Backspace) => {
            if let Some(start) = text::prev_grapheme_boundary(&draft.content, app.edit_cursor) {
                draft.content.drain(start..app.edit_cursor);
                app.edit_cursor = start;
            }
        }
        (_, KeyCode::Delete) => {
            if let Some(end) = text::next_grapheme_boundary(&draft.content, app.edit_cursor) {
                draft.content.drain(app.edit_cursor..end);
            }
        }
        (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char(c)) => {
            draft.content.insert(app.edit_cursor, c);
            app.edit_cursor += c.len_utf8();
        }
        _ => {}
    }
}

fn handle_done_key(app: &mut App, key: KeyEvent) {
    if let (KeyModifiers::NONE, KeyCode::Char(' ')) = (key.modifiers, key.code)
        && let Some(draft) = app.list.draft_mut()
    {
        draft.done = !draft.done;
    }
}
