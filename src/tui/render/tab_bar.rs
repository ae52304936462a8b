use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::ops::view::FilterMode;
use crate::tui::app::App;

/// Render the filter tab bar with the sort indicator, and a separator
/// line below.
pub fn render_tab_bar(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // tabs
            Constraint::Length(1), // separator
        ])
        .split(area);

    render_tabs(frame, app, chunks[0]);
    render_separator(frame, app, chunks[1]);
}

fn render_tabs(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;
    let sep = Span::styled("\u{2502}", Style::default().fg(app.theme.dim).bg(bg));

    let mut spans: Vec<Span> = Vec::new();
    spans.push(Span::styled(" ", Style::default().bg(bg)));

    for (i, filter) in FilterMode::ALL.iter().enumerate() {
        if i > 0 {
            spans.push(sep.clone());
        }
        let count = app
            .list
            .tasks()
            .iter()
            .filter(|t| filter.matches(t))
            .count();
        let is_current = *filter == app.filter;
        let style = if is_current {
            Style::default()
                .fg(app.theme.text_bright)
                .bg(app.theme.selection_bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(app.theme.text).bg(bg)
        };
        spans.push(Span::styled(
            format!(" {} {} ", filter.label(), count),
            style,
        ));
    }

    // Right-aligned sort indicator
    let sort_label = format!("sort: {} ", app.sort.label());
    let content_width: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let sort_width = sort_label.chars().count();
    if content_width + sort_width < width {
        let padding = width - content_width - sort_width;
        spans.push(Span::styled(" ".repeat(padding), Style::default().bg(bg)));
        spans.push(Span::styled(
            sort_label,
            Style::default().fg(app.theme.cyan).bg(bg),
        ));
    }

    frame.render_widget(
        Paragraph::new(Line::from(spans)).style(Style::default().bg(bg)),
        area,
    );
}

fn render_separator(frame: &mut Frame, app: &App, area: Rect) {
    let line = "\u{2500}".repeat(area.width as usize);
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            line,
            Style::default().fg(app.theme.dim).bg(app.theme.background),
        ))),
        area,
    );
}
