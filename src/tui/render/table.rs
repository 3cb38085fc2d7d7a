use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use regex::Regex;

use crate::list::LoadState;
use crate::model::Task;
use crate::ops::sort::{SortConfig, SortKey};
use crate::tui::app::App;
use crate::tui::theme::Theme;
use crate::util::text;

use super::push_highlighted_spans;

// Column widths in terminal cells, trailing gap included. Content takes
// the rest of the line.
const STATUS_W: usize = 10;
const COMPLETED_W: usize = 21;
const ACTIONS_W: usize = 10;

/// Render the task table: a header row, the visible slice of task rows,
/// and (in infinite mode) the end-of-window marker row whose visibility
/// drives loading the next batch.
pub fn render_table(frame: &mut Frame, app: &mut App, area: Rect) {
    let theme = app.theme.clone();
    let base = Style::default().bg(theme.background);
    let content_w = (area.width as usize).saturating_sub(1 + STATUS_W + COMPLETED_W + ACTIONS_W);

    let mut lines: Vec<Line> = vec![header_line(app.list.sort(), content_w, &theme)];

    match app.list.load() {
        LoadState::Loading => {
            app.sentinel_fraction = 0.0;
            lines.push(Line::default());
            lines.push(centered(area.width, "Loading tasks…", base.fg(theme.dim)));
            frame.render_widget(Paragraph::new(lines).style(base), area);
            return;
        }
        LoadState::Failed(message) => {
            let message = message.clone();
            app.sentinel_fraction = 0.0;
            lines.push(Line::default());
            lines.push(centered(area.width, &message, base.fg(theme.red)));
            frame.render_widget(Paragraph::new(lines).style(base), area);
            return;
        }
        LoadState::Ready => {}
    }

    let body_height = area.height.saturating_sub(1) as usize;
    let row_count = app.list.displayed().len();

    if row_count == 0 {
        app.sentinel_fraction = 0.0;
        let message = if app.list.total_len() == 0 {
            "No tasks yet. Press a to add one.".to_string()
        } else if app.list.filtered_len() == 0 {
            format!("No tasks match \"{}\"", app.list.search_term())
        } else {
            "Nothing on this page".to_string()
        };
        lines.push(Line::default());
        lines.push(centered(area.width, &message, base.fg(theme.dim)));
        frame.render_widget(Paragraph::new(lines).style(base), area);
        return;
    }

    let has_marker = app.list.has_more();
    let total_rows = row_count + has_marker as usize;

    // Keep the selection on a real row and inside the viewport.
    app.clamp_selection();
    if body_height > 0 {
        if app.selected < app.scroll_offset {
            app.scroll_offset = app.selected;
        } else if app.selected >= app.scroll_offset + body_height {
            app.scroll_offset = app.selected + 1 - body_height;
        }
        app.scroll_offset = app.scroll_offset.min(total_rows.saturating_sub(body_height));
    }

    let visible_end = total_rows.min(app.scroll_offset + body_height);
    let marker_on_screen = has_marker && (app.scroll_offset..visible_end).contains(&row_count);
    app.sentinel_fraction = if marker_on_screen { 1.0 } else { 0.0 };

    let search_re = app.search_highlight_re();
    let selected = app.selected;
    let tasks = app.list.displayed();
    for idx in app.scroll_offset..visible_end {
        if idx < row_count {
            lines.push(task_row(
                &tasks[idx],
                idx == selected,
                content_w,
                &theme,
                search_re.as_ref(),
            ));
        } else {
            lines.push(centered(area.width, "· · ·", base.fg(theme.dim)));
        }
    }

    frame.render_widget(Paragraph::new(lines).style(base), area);
}

fn header_line(sort: SortConfig, content_w: usize, theme: &Theme) -> Line<'static> {
    let style = Style::default()
        .fg(theme.text_bright)
        .bg(theme.background)
        .add_modifier(Modifier::BOLD);
    let mut row = String::from(" ");
    row.push_str(&text::fit_to_width(
        &column_label("Status", SortKey::Done, sort),
        STATUS_W,
    ));
    row.push_str(&text::fit_to_width(
        &column_label("Content", SortKey::Content, sort),
        content_w,
    ));
    row.push_str(&text::fit_to_width(
        &column_label("Completed", SortKey::DoneTime, sort),
        COMPLETED_W,
    ));
    row.push_str(&text::fit_to_width("Actions", ACTIONS_W));
    Line::from(Span::styled(row, style))
}

/// Column header with an arrow when this column is the active sort key.
fn column_label(label: &str, key: SortKey, sort: SortConfig) -> String {
    match sort.key {
        Some(active) if active == key => {
            format!("{} {}", label, if sort.ascending { "▲" } else { "▼" })
        }
        _ => label.to_string(),
    }
}

fn task_row(
    task: &Task,
    is_selected: bool,
    content_w: usize,
    theme: &Theme,
    search_re: Option<&Regex>,
) -> Line<'static> {
    let bg = if is_selected {
        theme.selection_bg
    } else {
        theme.background
    };
    let base = Style::default().bg(bg);

    let mut spans = vec![Span::styled(" ".to_string(), base)];

    let status = if task.done { "Done" } else { "Pending" };
    spans.push(Span::styled(
        text::fit_to_width(status, STATUS_W),
        base.fg(theme.status_color(task.done)),
    ));

    let shown = text::truncate_to_width(&task.content, content_w);
    let pad = content_w.saturating_sub(text::display_width(&shown));
    let fg = if is_selected {
        theme.text_bright
    } else {
        theme.text
    };
    push_highlighted_spans(
        &mut spans,
        &shown,
        base.fg(fg),
        Style::default()
            .bg(theme.search_match_bg)
            .fg(theme.search_match_fg),
        search_re,
    );
    if pad > 0 {
        spans.push(Span::styled(" ".repeat(pad), base));
    }

    spans.push(Span::styled(
        text::fit_to_width(&task.done_time_text(), COMPLETED_W),
        base.fg(theme.dim),
    ));
    spans.push(Span::styled(
        text::fit_to_width("edit del", ACTIONS_W),
        base.fg(theme.dim),
    ));

    Line::from(spans)
}

fn centered(width: u16, message: &str, style: Style) -> Line<'static> {
    let pad = (width as usize).saturating_sub(text::display_width(message)) / 2;
    Line::from(Span::styled(format!("{}{}", " ".repeat(pad), message), style))
}
