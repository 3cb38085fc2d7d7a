use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::model::Task;
use crate::tui::app::{App, EditFocus};
use crate::util::text;

/// Render the create/edit dialog over the list.
pub fn render_modal(frame: &mut Frame, app: &App, area: Rect) {
    let Some(draft) = app.list.session().draft() else {
        return;
    };

    let bg = app.theme.background;
    let dim = app.theme.dim;

    // Sizing: 60% width, min 40, max 70
    let target_w = (area.width as f32 * 0.6) as u16;
    let inner_w = target_w.clamp(40, 70).min(area.width.saturating_sub(2)) as usize;
    let popup_w = (inner_w as u16) + 2;

    let mut lines: Vec<Line> = vec![blank(inner_w, bg)];
    lines.push(content_line(app, draft, inner_w));
    lines.push(blank(inner_w, bg));
    lines.push(done_line(app, draft));
    lines.push(blank(inner_w, bg));
    lines.push(Line::from(Span::styled(
        "  Tab field  Enter save  Esc cancel",
        Style::default().fg(dim).bg(bg),
    )));

    let content_h = lines.len() as u16;
    let popup_h = (content_h + 2).min(area.height.saturating_sub(2));
    let x = area.x + area.width.saturating_sub(popup_w) / 2;
    let y = area.y + area.height.saturating_sub(popup_h) / 2;
    let popup_area = Rect::new(x, y, popup_w.min(area.width), popup_h);

    frame.render_widget(Clear, popup_area);

    let title = if app.list.session().is_edit() {
        " Edit task "
    } else {
        " New task "
    };
    let title_style = Style::default()
        .fg(app.theme.highlight)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let block = Block::default()
        .title(Span::styled(title, title_style))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(dim).bg(bg))
        .style(Style::default().bg(bg));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(Style::default().bg(bg));
    frame.render_widget(paragraph, popup_area);
}

fn blank(width: usize, bg: Color) -> Line<'static> {
    Line::from(Span::styled(" ".repeat(width), Style::default().bg(bg)))
}

fn content_line(app: &App, draft: &Task, inner_w: usize) -> Line<'static> {
    let bg = app.theme.background;
    let focused = app.edit_focus == EditFocus::Content;
    let label_style = if focused {
        Style::default()
            .fg(app.theme.highlight)
            .bg(bg)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(app.theme.text).bg(bg)
    };
    let value_style = Style::default().fg(app.theme.text_bright).bg(bg);

    let label = "  Content  ";
    let avail = inner_w.saturating_sub(label.chars().count() + 1);
    let mut spans = vec![Span::styled(label, label_style)];

    if focused {
        let cursor = app.edit_cursor.min(draft.content.len());
        let before = &draft.content[..cursor];
        let after = &draft.content[cursor..];
        // Keep the cursor visible when the draft is wider than the field
        let shown_before = text::tail_to_width(before, avail.saturating_sub(1));
        let used = text::display_width(shown_before);
        let shown_after = text::truncate_to_width(after, avail.saturating_sub(used + 1));
        spans.push(Span::styled(shown_before.to_string(), value_style));
        spans.push(Span::styled(
            "\u{258C}",
            Style::default().fg(app.theme.highlight).bg(bg),
        ));
        spans.push(Span::styled(shown_after, value_style));
    } else {
        spans.push(Span::styled(
            text::truncate_to_width(&draft.content, avail),
            value_style,
        ));
    }
    Line::from(spans)
}

fn done_line(app: &App, draft: &Task) -> Line<'static> {
    let bg = app.theme.background;
    let focused = app.edit_focus == EditFocus::Done;
    let label_style = if focused {
        Style::default()
            .fg(app.theme.highlight)
            .bg(bg)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(app.theme.text).bg(bg)
    };
    let switch = if draft.done { "[x] done" } else { "[ ] open" };
    let switch_style = if focused {
        Style::default().fg(app.theme.text_bright).bg(bg)
    } else {
        Style::default().fg(app.theme.text).bg(bg)
    };

    let mut spans = vec![
        Span::styled("  Done     ", label_style),
        Span::styled(switch, switch_style),
    ];
    if focused {
        spans.push(Span::styled(
            "  Space toggle",
            Style::default().fg(app.theme.dim).bg(bg),
        ));
    }
    Line::from(spans)
}
