use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::ops::view;
use crate::tui::app::App;

/// Render the header: title row plus the completion progress bar.
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // title
            Constraint::Length(1), // progress
        ])
        .split(area);

    render_title(frame, app, chunks[0]);
    render_progress(frame, app, chunks[1]);
}

fn render_title(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let mut spans = vec![
        Span::styled(" [/] ", Style::default().fg(app.theme.purple).bg(bg)),
        Span::styled(
            "ticklist",
            Style::default()
                .fg(app.theme.text_bright)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "  organize your day",
            Style::default().fg(app.theme.dim).bg(bg),
        ),
    ];

    // Right-aligned done count
    let done = app.list.tasks().iter().filter(|t| t.completed).count();
    let counts = format!("{}/{} done ", done, app.list.len());
    let content_width: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let counts_width = counts.chars().count();
    if content_width + counts_width < width {
        let padding = width - content_width - counts_width;
        spans.push(Span::styled(" ".repeat(padding), Style::default().bg(bg)));
        spans.push(Span::styled(
            counts,
            Style::default().fg(app.theme.text).bg(bg),
        ));
    }

    frame.render_widget(
        Paragraph::new(Line::from(spans)).style(Style::default().bg(bg)),
        area,
    );
}

/// Completion ratio as a filled bar with a percentage label.
fn render_progress(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let ratio = view::completion_ratio(app.list.tasks());
    let percent = (ratio * 100.0).round() as usize;
    let label = format!(" {:>3}%", percent);

    // " " + bar + label
    let bar_width = width.saturating_sub(label.chars().count() + 2);
    let filled = (ratio * bar_width as f64).round() as usize;
    let filled = filled.min(bar_width);

    let spans = vec![
        Span::styled(" ", Style::default().bg(bg)),
        Span::styled(
            "\u{2588}".repeat(filled),
            Style::default().fg(app.theme.green).bg(bg),
        ),
        Span::styled(
            "\u{2591}".repeat(bar_width - filled),
            Style::default().fg(app.theme.dim).bg(bg),
        ),
        Span::styled(label, Style::default().fg(app.theme.text).bg(bg)),
    ];

    frame.render_widget(
        Paragraph::new(Line::from(spans)).style(Style::default().bg(bg)),
        area,
    );
}
