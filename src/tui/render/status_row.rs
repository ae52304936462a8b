use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode, NoticeKind};

const NAVIGATE_HINTS: &str =
    "a add  e edit  x done  f star  d delete  Tab filter  s sort  ? help  q quit";

/// Render the status row (bottom of screen): the Insert prompt, outcome
/// notices, or key hints.
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let line = match app.mode {
        Mode::Insert => {
            // New-task prompt: + text▌
            let mut spans = vec![
                Span::styled("+ ", Style::default().fg(app.theme.highlight).bg(bg)),
                Span::styled(
                    app.edit_buffer.clone(),
                    Style::default().fg(app.theme.text_bright).bg(bg),
                ),
                Span::styled(
                    "\u{258C}",
                    Style::default().fg(app.theme.highlight).bg(bg),
                ),
            ];
            with_hint(app, &mut spans, "Enter add  Esc done", width);
            Line::from(spans)
        }
        Mode::Edit => {
            let mut spans = vec![notice_or_blank(app, bg)];
            with_hint(app, &mut spans, "Enter save  Esc cancel", width);
            Line::from(spans)
        }
        Mode::Navigate | Mode::Confirm => {
            let mut spans = vec![notice_or_blank(app, bg)];
            if app.show_key_hints && app.mode == Mode::Navigate {
                with_hint(app, &mut spans, NAVIGATE_HINTS, width);
            }
            Line::from(spans)
        }
    };

    frame.render_widget(
        Paragraph::new(line).style(Style::default().bg(bg)),
        area,
    );
}

fn notice_or_blank<'a>(app: &App, bg: ratatui::style::Color) -> Span<'a> {
    match &app.notice {
        Some(notice) => {
            let fg = match notice.kind {
                NoticeKind::Success => app.theme.green,
                NoticeKind::Error => app.theme.red,
                NoticeKind::Info => app.theme.cyan,
            };
            Span::styled(format!(" {}", notice.text), Style::default().fg(fg).bg(bg))
        }
        None => Span::styled(" ", Style::default().bg(bg)),
    }
}

/// Append a dim, right-aligned hint if it fits.
fn with_hint<'a>(app: &App, spans: &mut Vec<Span<'a>>, hint: &str, width: usize) {
    let bg = app.theme.background;
    let content_width: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let hint_width = hint.chars().count() + 1;
    if content_width + hint_width < width {
        let padding = width - content_width - hint_width;
        spans.push(Span::styled(" ".repeat(padding), Style::default().bg(bg)));
        spans.push(Span::styled(
            format!("{} ", hint),
            Style::default().fg(app.theme.dim).bg(bg),
        ));
    }
}
