pub mod help_overlay;
pub mod modal;
pub mod pager;
pub mod status_row;
pub mod table;
pub mod toolbar;

#[cfg(test)]
pub mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::text::Span;
use ratatui::widgets::Block;
use regex::Regex;

use crate::ops::paginate::PageMode;

use super::app::App;

/// Main render function — dispatches to sub-renderers
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    // Layout: toolbar (2 rows) | table | [pager] | status row
    let paged = app.list.page().mode == PageMode::Paged;
    let mut constraints = vec![
        Constraint::Length(2), // toolbar + separator
        Constraint::Min(1),    // table
    ];
    if paged {
        constraints.push(Constraint::Length(1)); // pager
    }
    constraints.push(Constraint::Length(1)); // status row

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    toolbar::render_toolbar(frame, app, chunks[0]);
    table::render_table(frame, app, chunks[1]);
    if paged {
        pager::render_pager(frame, app, chunks[2]);
    }
    status_row::render_status_row(frame, app, chunks[chunks.len() - 1]);

    // Edit dialog (rendered on top of the table)
    if app.list.session().is_open() {
        modal::render_modal(frame, app, frame.area());
    }

    // Help overlay (rendered on top of everything)
    if app.show_help {
        help_overlay::render_help_overlay(frame, app, frame.area());
    }
}

/// Append `text` as styled spans, giving regex matches `highlight_style`
/// and the stretches between them `base_style`.
pub(super) fn push_highlighted_spans<'a>(
    spans: &mut Vec<Span<'a>>,
    text: &str,
    base_style: Style,
    highlight_style: Style,
    search_re: Option<&Regex>,
) {
    let Some(re) = search_re else {
        spans.push(Span::styled(text.to_string(), base_style));
        return;
    };

    let mut last_end = 0;
    for m in re.find_iter(text) {
        if m.start() > last_end {
            spans.push(Span::styled(
                text[last_end..m.start()].to_string(),
                base_style,
            ));
        }
        spans.push(Span::styled(m.as_str().to_string(), highlight_style));
        last_end = m.end();
    }
    if last_end < text.len() {
        spans.push(Span::styled(text[last_end..].to_string(), base_style));
    }
}
