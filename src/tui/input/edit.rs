use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::ops::task_ops;
use crate::util::unicode;

use crate::tui::app::{App, Mode, NoticeKind};

/// Insert mode: the new-task prompt in the status row.
pub(super) fn handle_insert(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.edit_buffer.clear();
            app.edit_cursor = 0;
            app.mode = Mode::Navigate;
        }
        KeyCode::Enter => match task_ops::add_task(&mut app.list, &app.edit_buffer) {
            Ok(_) => {
                app.edit_buffer.clear();
                app.edit_cursor = 0;
                app.cursor = 0;
                app.scroll_offset = 0;
                app.notify(NoticeKind::Success, "task added");
                // Stay in Insert mode for rapid entry
            }
            Err(e) => {
                app.notify(NoticeKind::Error, e.to_string());
            }
        },
        _ => {
            buffer_key(app, key);
        }
    }
}

/// Edit mode: inline edit of the tracked task's text.
pub(super) fn handle_edit(app: &mut App, key: KeyEvent) {
    let Some(id) = app.session.editing() else {
        // Session was cleared out from under us; nothing to edit
        app.mode = Mode::Navigate;
        return;
    };

    match key.code {
        KeyCode::Esc => {
            app.session.cancel();
            app.edit_buffer.clear();
            app.edit_cursor = 0;
            app.mode = Mode::Navigate;
        }
        KeyCode::Enter => {
            let text = app.edit_buffer.clone();
            match app.session.commit(&mut app.list, id, &text) {
                Ok(()) => {
                    app.edit_buffer.clear();
                    app.edit_cursor = 0;
                    app.mode = Mode::Navigate;
                    app.clamp_cursor();
                    app.notify(NoticeKind::Success, "task updated");
                }
                // Keep the edit form open so the user can fix the text
                Err(e) => {
                    app.notify(NoticeKind::Error, e.to_string());
                }
            }
        }
        _ => {
            buffer_key(app, key);
        }
    }
}

/// Apply a key to the shared text buffer. Cursor movement is
/// grapheme-aware so combining sequences never split.
fn buffer_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char(c)
            if !key.modifiers.contains(KeyModifiers::CONTROL)
                && !key.modifiers.contains(KeyModifiers::ALT) =>
        {
            app.edit_buffer.insert(app.edit_cursor, c);
            app.edit_cursor += c.len_utf8();
        }
        KeyCode::Backspace => {
            if let Some(prev) = unicode::prev_grapheme_boundary(&app.edit_buffer, app.edit_cursor) {
                app.edit_buffer.replace_range(prev..app.edit_cursor, "");
                app.edit_cursor = prev;
            }
        }
        KeyCode::Delete => {
            if let Some(next) = unicode::next_grapheme_boundary(&app.edit_buffer, app.edit_cursor) {
                app.edit_buffer.replace_range(app.edit_cursor..next, "");
            }
        }
        KeyCode::Left => {
            if let Some(prev) = unicode::prev_grapheme_boundary(&app.edit_buffer, app.edit_cursor) {
                app.edit_cursor = prev;
            }
        }
        KeyCode::Right => {
            if app.edit_cursor < app.edit_buffer.len() {
                app.edit_cursor = unicode::next_grapheme_boundary(&app.edit_buffer, app.edit_cursor)
                    .unwrap_or(app.edit_buffer.len());
            }
        }
        KeyCode::Home => {
            app.edit_cursor = 0;
        }
        KeyCode::End => {
            app.edit_cursor = app.edit_buffer.len();
        }
        _ => {}
    }
}
