use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::ops::paginate::PageMode;
use crate::tui::app::App;

/// Render the toolbar: title and window settings, with separator line below
pub fn render_toolbar(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // title row
            Constraint::Length(1), // separator
        ])
        .split(area);

    render_title_row(frame, app, chunks[0]);
    render_separator(frame, app, chunks[1]);
}

fn render_title_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let bg_style = Style::default().bg(bg);
    let width = area.width as usize;

    let mut spans = vec![
        Span::styled(" ", bg_style),
        Span::styled("\u{25B6}", Style::default().fg(app.theme.highlight).bg(bg)),
        Span::styled(
            " docket",
            Style::default()
                .fg(app.theme.text_bright)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ),
    ];

    let mode = match app.list.page().mode {
        PageMode::Paged => "paged",
        PageMode::Incremental => "infinite",
    };
    let size = app.list.page().page_size;
    let total = app.list.total_len();
    let size_text = if total > 0 && size >= total {
        "all".to_string()
    } else {
        format!("{}/page", size)
    };
    let info = format!("{}  {} ", mode, size_text);

    let content_width: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let info_width = info.chars().count();
    if content_width + info_width < width {
        let padding = width - content_width - info_width;
        spans.push(Span::styled(" ".repeat(padding), bg_style));
        spans.push(Span::styled(
            info,
            Style::default().fg(app.theme.dim).bg(bg),
        ));
    }

    let line = Line::from(spans);
    frame.render_widget(Paragraph::new(line).style(bg_style), area);
}

/// Separator line; shows the active sort on the right edge.
fn render_separator(frame: &mut Frame, app: &App, area: Rect) {
    let width = area.width as usize;
    let bg = app.theme.background;
    let dim = app.theme.dim;

    let sort = app.list.sort();
    if let Some(key) = sort.key {
        let arrow = if sort.ascending { "\u{25B2}" } else { "\u{25BC}" };
        let indicator = format!("sort: {} {}", key.label(), arrow);
        let indicator_width = indicator.chars().count();
        // +2: one space before indicator, one space after (right edge buffer)
        let separator_end = width.saturating_sub(indicator_width + 2);

        let spans = vec![
            Span::styled(
                "\u{2500}".repeat(separator_end),
                Style::default().fg(dim).bg(bg),
            ),
            Span::styled(" ".to_string(), Style::default().bg(bg)),
            Span::styled(indicator, Style::default().fg(app.theme.highlight).bg(bg)),
            Span::styled(" ".to_string(), Style::default().bg(bg)),
        ];
        let line = Line::from(spans);
        frame.render_widget(Paragraph::new(line).style(Style::default().bg(bg)), area);
    } else {
        let line = "\u{2500}".repeat(width);
        frame.render_widget(
            Paragraph::new(line).style(Style::default().fg(dim).bg(bg)),
            area,
        );
    }
}
