use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::TaskId;
use crate::ops::view;
use crate::tui::app::{App, Mode};
use crate::util::unicode;

/// Owned copy of one visible row, so the projection borrow ends before
/// we adjust scroll state.
struct Row {
    id: TaskId,
    text: String,
    completed: bool,
    starred: bool,
    created: String,
}

/// Render the task list: the projected view, one row per task, with the
/// tracked task (if any) shown as an inline edit field.
pub fn render_list_view(frame: &mut Frame, app: &mut App, area: Rect) {
    if area.height == 0 {
        return;
    }

    let rows: Vec<Row> = view::project(app.list.tasks(), app.filter, app.sort)
        .into_iter()
        .map(|t| Row {
            id: t.id,
            text: t.text.clone(),
            completed: t.completed,
            starred: t.starred,
            created: t.created_label(),
        })
        .collect();

    if rows.is_empty() {
        render_empty(frame, app, area);
        return;
    }

    // Keep the cursor on screen
    let height = area.height as usize;
    let cursor = app.cursor.min(rows.len() - 1);
    if cursor < app.scroll_offset {
        app.scroll_offset = cursor;
    }
    if cursor >= app.scroll_offset + height {
        app.scroll_offset = cursor + 1 - height;
    }
    if app.scroll_offset + height > rows.len() {
        app.scroll_offset = rows.len().saturating_sub(height);
    }

    let width = area.width as usize;
    let lines: Vec<Line> = rows
        .iter()
        .enumerate()
        .skip(app.scroll_offset)
        .take(height)
        .map(|(idx, row)| task_line(app, row, idx == cursor, width))
        .collect();

    frame.render_widget(
        Paragraph::new(lines).style(Style::default().bg(app.theme.background)),
        area,
    );
}

fn render_empty(frame: &mut Frame, app: &App, area: Rect) {
    let message = if app.list.is_empty() {
        "no tasks yet  -  press 'a' to add one"
    } else {
        "no tasks match this filter"
    };
    let y = area.y + area.height / 3;
    let line_area = Rect {
        x: area.x,
        y,
        width: area.width,
        height: 1,
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            message,
            Style::default().fg(app.theme.dim).bg(app.theme.background),
        )))
        .alignment(Alignment::Center),
        line_area,
    );
}

fn task_line<'a>(app: &App, row: &Row, selected: bool, width: usize) -> Line<'a> {
    let editing = app.mode == Mode::Edit && app.session.is_editing(row.id);
    let bg = if selected {
        app.theme.selection_bg
    } else {
        app.theme.background
    };

    let mut spans: Vec<Span> = Vec::new();

    // Selection marker
    spans.push(Span::styled(
        if selected { "\u{258C}" } else { " " },
        Style::default().fg(app.theme.highlight).bg(bg),
    ));

    // Checkbox
    let checkbox_style = if row.completed {
        Style::default().fg(app.theme.green).bg(bg)
    } else {
        Style::default().fg(app.theme.text).bg(bg)
    };
    spans.push(Span::styled(
        if row.completed { "[x] " } else { "[ ] " },
        checkbox_style,
    ));

    // Star column
    spans.push(Span::styled(
        if row.starred { "\u{2605} " } else { "  " },
        Style::default().fg(app.theme.yellow).bg(bg),
    ));

    let used: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let date_width = row.created.chars().count() + 1;
    let text_budget = width.saturating_sub(used + date_width + 1);

    if editing {
        push_edit_spans(&mut spans, app, bg);
    } else {
        let mut text_style = Style::default().bg(bg);
        text_style = if row.completed {
            text_style
                .fg(app.theme.dim)
                .add_modifier(Modifier::CROSSED_OUT)
        } else if selected {
            text_style.fg(app.theme.text_bright)
        } else {
            text_style.fg(app.theme.text)
        };
        spans.push(Span::styled(
            unicode::truncate_to_width(&row.text, text_budget),
            text_style,
        ));
    }

    // Right-aligned creation date
    let content_width: usize = spans
        .iter()
        .map(|s| unicode::display_width(&s.content))
        .sum();
    if content_width + date_width < width {
        let padding = width - content_width - date_width;
        spans.push(Span::styled(" ".repeat(padding), Style::default().bg(bg)));
        spans.push(Span::styled(
            format!("{} ", row.created),
            Style::default().fg(app.theme.dim).bg(bg),
        ));
    }

    Line::from(spans)
}

/// The edit buffer with the grapheme under the cursor reversed (or a
/// reversed trailing cell when the cursor sits at the end).
fn push_edit_spans<'a>(spans: &mut Vec<Span<'a>>, app: &App, bg: Color) {
    let buffer = &app.edit_buffer;
    let at = app.edit_cursor.min(buffer.len());
    let bright = Style::default().fg(app.theme.text_bright).bg(bg);

    let before = &buffer[..at];
    if !before.is_empty() {
        spans.push(Span::styled(before.to_string(), bright));
    }
    match unicode::next_grapheme_boundary(buffer, at) {
        Some(next) => {
            spans.push(Span::styled(
                buffer[at..next].to_string(),
                bright.add_modifier(Modifier::REVERSED),
            ));
            if next < buffer.len() {
                spans.push(Span::styled(buffer[next..].to_string(), bright));
            }
        }
        None => {
            spans.push(Span::styled(" ", bright.add_modifier(Modifier::REVERSED)));
        }
    }
}
