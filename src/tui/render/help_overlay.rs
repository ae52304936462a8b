use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::App;
use crate::tui::render::centered_rect;

const KEYS: &[(&str, &str)] = &[
    ("j / k, arrows", "move the cursor"),
    ("g / G", "jump to top / bottom"),
    ("a", "add a task"),
    ("e, Enter", "edit the selected task"),
    ("x, Space", "toggle completed"),
    ("f, *", "toggle favourite star"),
    ("d, Del", "delete (asks first)"),
    ("Tab / Shift-Tab", "cycle filter"),
    ("1 2 3 4", "All / Favourite / Active / Completed"),
    ("s", "toggle sort (date / alpha)"),
    ("Esc", "dismiss notice"),
    ("?", "this help"),
    ("q", "quit"),
];

/// Render the help overlay, scrollable with j/k.
pub fn render_help_overlay(frame: &mut Frame, app: &App, area: Rect) {
    let height = (KEYS.len() as u16 + 4).min(area.height);
    let popup = centered_rect(52, height, area);
    frame.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(
            Style::default()
                .fg(app.theme.purple)
                .bg(app.theme.background),
        )
        .title(Span::styled(
            " keys ",
            Style::default()
                .fg(app.theme.purple)
                .add_modifier(Modifier::BOLD),
        ))
        .style(Style::default().bg(app.theme.background));
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let scroll = app.help_scroll.min(KEYS.len().saturating_sub(1));
    let lines: Vec<Line> = KEYS
        .iter()
        .skip(scroll)
        .take(inner.height as usize)
        .map(|(key, what)| {
            Line::from(vec![
                Span::styled(
                    format!(" {:<16}", key),
                    Style::default()
                        .fg(app.theme.cyan)
                        .bg(app.theme.background),
                ),
                Span::styled(
                    what.to_string(),
                    Style::default().fg(app.theme.text).bg(app.theme.background),
                ),
            ])
        })
        .collect();

    frame.render_widget(
        Paragraph::new(lines).style(Style::default().bg(app.theme.background)),
        inner,
    );
}
