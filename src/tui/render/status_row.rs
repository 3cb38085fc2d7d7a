use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::list::LoadState;
use crate::tui::app::{App, Mode};

/// Render the status row (bottom of screen)
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let line = match app.mode {
        Mode::Navigate => {
            let mut spans = left_spans(app);
            let hint = "a add  e edit  d delete  x done  / search  ? help";
            push_right_hint(&mut spans, hint, app, width);
            Line::from(spans)
        }
        Mode::Search => {
            // Search prompt: /term▌
            let mut spans = vec![
                Span::styled(
                    format!("/{}", app.list.search_term()),
                    Style::default().fg(app.theme.text_bright).bg(bg),
                ),
                Span::styled("\u{258C}", Style::default().fg(app.theme.highlight).bg(bg)), // ▌ cursor
            ];
            let hint = "Enter done  C-u clear";
            push_right_hint(&mut spans, hint, app, width);
            Line::from(spans)
        }
        Mode::Edit => {
            let mut spans = left_spans(app);
            let hint = "Tab field  Enter save  Esc cancel";
            push_right_hint(&mut spans, hint, app, width);
            Line::from(spans)
        }
    };

    let paragraph = Paragraph::new(line).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

/// Counts for the ready list, or a short note while loading / after a
/// failed fetch. The table body carries the full failure message.
fn left_spans(app: &App) -> Vec<Span<'static>> {
    let bg = app.theme.background;
    match app.list.load() {
        LoadState::Loading => vec![Span::styled(
            "fetching tasks…".to_string(),
            Style::default().fg(app.theme.dim).bg(bg),
        )],
        LoadState::Failed(_) => vec![Span::styled(
            "fetch failed".to_string(),
            Style::default().fg(app.theme.red).bg(bg),
        )],
        LoadState::Ready => {
            let mut spans = Vec::new();
            let term = app.list.search_term();
            if !term.is_empty() {
                spans.push(Span::styled(
                    format!("/{}  ", term),
                    Style::default().fg(app.theme.dim).bg(bg),
                ));
            }
            let mut counts = format!(
                "{} of {}",
                app.list.displayed().len(),
                app.list.filtered_len()
            );
            if !term.is_empty() {
                counts.push_str(&format!("  (filtered from {})", app.list.total_len()));
            }
            spans.push(Span::styled(
                counts,
                Style::default().fg(app.theme.text).bg(bg),
            ));
            spans
        }
    }
}

fn push_right_hint(spans: &mut Vec<Span<'static>>, hint: &str, app: &App, width: usize) {
    let bg = app.theme.background;
    let content_width: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let hint_width = hint.chars().count();
    if content_width + hint_width < width {
        let padding = width - content_width - hint_width;
        spans.push(Span::styled(" ".repeat(padding), Style::default().bg(bg)));
        spans.push(Span::styled(
            hint.to_string(),
            Style::default().fg(app.theme.dim).bg(bg),
        ));
    }
}
