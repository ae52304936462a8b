use crossterm::event::{KeyCode, KeyEvent};

use crate::ops::task_ops;
use crate::ops::view::FilterMode;

use crate::tui::app::{App, ConfirmState, Mode, NoticeKind};

pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    // Help overlay intercepts ? and Esc, plus scroll keys
    if app.show_help {
        match key.code {
            KeyCode::Char('?') | KeyCode::Esc | KeyCode::Char('q') => {
                app.show_help = false;
            }
            KeyCode::Char('j') | KeyCode::Down => {
                app.help_scroll = app.help_scroll.saturating_add(1);
            }
            KeyCode::Char('k') | KeyCode::Up => {
                app.help_scroll = app.help_scroll.saturating_sub(1);
            }
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Char('q') => {
            app.should_quit = true;
        }
        KeyCode::Char('?') => {
            app.show_help = true;
            app.help_scroll = 0;
        }

        // --- cursor movement ---
        KeyCode::Char('j') | KeyCode::Down => {
            let len = app.visible_len();
            if len > 0 && app.cursor + 1 < len {
                app.cursor += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.cursor = app.cursor.saturating_sub(1);
        }
        KeyCode::Char('g') | KeyCode::Home => {
            app.cursor = 0;
        }
        KeyCode::Char('G') | KeyCode::End => {
            let len = app.visible_len();
            app.cursor = len.saturating_sub(1);
        }

        // --- store operations ---
        KeyCode::Char('a') => {
            app.edit_buffer.clear();
            app.edit_cursor = 0;
            app.mode = Mode::Insert;
        }
        KeyCode::Char('e') | KeyCode::Enter => start_edit(app),
        KeyCode::Char('x') | KeyCode::Char(' ') => {
            if let Some(id) = app.cursor_task_id() {
                task_ops::toggle_completed(&mut app.list, id);
                app.clamp_cursor();
                app.notify(NoticeKind::Info, "task status updated");
            }
        }
        KeyCode::Char('f') | KeyCode::Char('*') => {
            if let Some(id) = app.cursor_task_id() {
                task_ops::toggle_starred(&mut app.list, id);
                app.clamp_cursor();
                app.notify(NoticeKind::Success, "task priority updated");
            }
        }
        KeyCode::Char('d') | KeyCode::Delete => {
            if let Some(id) = app.cursor_task_id()
                && let Some(task) = app.list.get(id)
            {
                app.confirm = Some(ConfirmState {
                    task_id: id,
                    text: task.text.clone(),
                });
                app.mode = Mode::Confirm;
            }
        }

        // --- view modes ---
        KeyCode::Tab => app.set_filter(app.filter.next()),
        KeyCode::BackTab => app.set_filter(app.filter.prev()),
        KeyCode::Char('1') => app.set_filter(FilterMode::All),
        KeyCode::Char('2') => app.set_filter(FilterMode::Favourite),
        KeyCode::Char('3') => app.set_filter(FilterMode::Active),
        KeyCode::Char('4') => app.set_filter(FilterMode::Completed),
        KeyCode::Char('s') => {
            app.sort = app.sort.toggle();
            app.cursor = 0;
            app.scroll_offset = 0;
        }

        KeyCode::Esc => {
            app.notice = None;
        }
        _ => {}
    }
}

/// Begin editing the task under the cursor: track it in the session and
/// seed the shared buffer with its current text.
fn start_edit(app: &mut App) {
    let Some(id) = app.cursor_task_id() else {
        return;
    };
    let Some(task) = app.list.get(id) else {
        return;
    };
    let text = task.text.clone();
    app.session.start(task);
    app.edit_cursor = text.len();
    app.edit_buffer = text;
    app.mode = Mode::Edit;
}
