use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::App;

/// Render the help overlay (toggled with ?)
pub fn render_help_overlay(frame: &mut Frame, app: &App, area: Rect) {
    let overlay_area = centered_rect(55, 80, area);
    frame.render_widget(Clear, overlay_area);

    let theme = &app.theme;
    let key_style = Style::default()
        .fg(theme.highlight)
        .bg(theme.background)
        .add_modifier(Modifier::BOLD);
    let desc_style = Style::default().fg(theme.text).bg(theme.background);
    let header_style = Style::default()
        .fg(theme.text_bright)
        .bg(theme.background)
        .add_modifier(Modifier::BOLD);

    let mut lines: Vec<Line> = Vec::new();

    lines.push(Line::from(Span::styled(" Help", header_style)));
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(" Navigation", header_style)));
    add_binding(
        &mut lines,
        " \u{2191}\u{2193}/jk",
        "Move cursor up/down",
        key_style,
        desc_style,
    );
    add_binding(
        &mut lines,
        " g/G",
        "Jump to top/bottom",
        key_style,
        desc_style,
    );
    add_binding(&mut lines, " /", "Search tasks", key_style, desc_style);
    add_binding(&mut lines, " Esc", "Clear search", key_style, desc_style);
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(" Tasks", header_style)));
    add_binding(&mut lines, " a", "Add a task", key_style, desc_style);
    add_binding(&mut lines, " e/Enter", "Edit selected task", key_style, desc_style);
    add_binding(&mut lines, " d", "Delete selected task", key_style, desc_style);
    add_binding(
        &mut lines,
        " x/Space",
        "Toggle done",
        key_style,
        desc_style,
    );
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(" Sorting", header_style)));
    add_binding(&mut lines, " 1", "Sort by status", key_style, desc_style);
    add_binding(&mut lines, " 2", "Sort by content", key_style, desc_style);
    add_binding(
        &mut lines,
        " 3",
        "Sort by completion time",
        key_style,
        desc_style,
    );
    add_binding(&mut lines, " 4", "Sort by id", key_style, desc_style);
    add_binding(
        &mut lines,
        "",
        "(same key again flips direction)",
        key_style,
        desc_style,
    );
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(" Windowing", header_style)));
    add_binding(
        &mut lines,
        " i",
        "Toggle paged / infinite",
        key_style,
        desc_style,
    );
    add_binding(
        &mut lines,
        " [ ]",
        "Previous / next page",
        key_style,
        desc_style,
    );
    add_binding(&mut lines, " p", "Cycle page size", key_style, desc_style);
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(" Global", header_style)));
    add_binding(&mut lines, " ?", "Toggle this help", key_style, desc_style);
    add_binding(&mut lines, " q", "Quit", key_style, desc_style);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.dim).bg(theme.background))
        .style(Style::default().bg(theme.background));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(Style::default().bg(theme.background));

    frame.render_widget(paragraph, overlay_area);
}

fn add_binding<'a>(
    lines: &mut Vec<Line<'a>>,
    key: &'a str,
    desc: &'a str,
    key_style: Style,
    desc_style: Style,
) {
    lines.push(Line::from(vec![
        Span::styled(format!("{key:<16}"), key_style),
        Span::styled(desc, desc_style),
    ]));
}

/// Create a centered rectangle of the given percentage of the parent
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
