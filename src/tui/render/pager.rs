use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::App;

/// Render the page controls shown under the table in paged mode. The
/// brackets double as the key hints.
pub fn render_pager(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let enabled = Style::default().fg(app.theme.text).bg(bg);
    let disabled = Style::default().fg(app.theme.dim).bg(bg);

    let back = if app.list.can_page_backward() {
        enabled
    } else {
        disabled
    };
    let forward = if app.list.can_page_forward() {
        enabled
    } else {
        disabled
    };

    let count = app.list.page_count().max(1);
    let current = app.list.page().cursor + 1;
    let label = format!("  page {} of {}  ", current, count);

    let total_width = "[ prev".chars().count() + label.chars().count() + "next ]".chars().count();
    let pad = (area.width as usize).saturating_sub(total_width) / 2;

    let line = Line::from(vec![
        Span::styled(" ".repeat(pad), Style::default().bg(bg)),
        Span::styled("[ prev", back),
        Span::styled(label, Style::default().fg(app.theme.text_bright).bg(bg)),
        Span::styled("next ]", forward),
    ]);
    frame.render_widget(Paragraph::new(line).style(Style::default().bg(bg)), area);
}
