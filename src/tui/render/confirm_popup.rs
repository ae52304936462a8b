use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::App;
use crate::tui::render::centered_rect;
use crate::util::unicode;

/// Render the delete confirmation popup. The pending delete only
/// proceeds on an explicit `y`.
pub fn render_confirm_popup(frame: &mut Frame, app: &App, area: Rect) {
    let Some(confirm) = &app.confirm else {
        return;
    };

    let popup = centered_rect(46, 5, area);
    frame.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.red).bg(app.theme.background))
        .title(Span::styled(
            " delete task? ",
            Style::default()
                .fg(app.theme.red)
                .add_modifier(Modifier::BOLD),
        ))
        .style(Style::default().bg(app.theme.background));
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let text_width = inner.width.saturating_sub(2) as usize;
    let lines = vec![
        Line::from(Span::styled(
            unicode::truncate_to_width(&confirm.text, text_width),
            Style::default()
                .fg(app.theme.text_bright)
                .bg(app.theme.background),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "y delete  n cancel",
            Style::default().fg(app.theme.dim).bg(app.theme.background),
        )),
    ];

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .style(Style::default().bg(app.theme.background)),
        inner,
    );
}
