use crossterm::event::{KeyCode, KeyEvent};

use crate::ops::task_ops;

use crate::tui::app::{App, Mode, NoticeKind};

/// Confirm mode: a delete is pending and nothing else runs until the
/// user answers. Removal only ever happens from the `y` arm here.
pub(super) fn handle_confirm(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') => {
            app.mode = Mode::Navigate;
            if let Some(state) = app.confirm.take() {
                let removed =
                    task_ops::remove_task(&mut app.list, &mut app.session, state.task_id);
                app.clamp_cursor();
                if removed {
                    app.notify(NoticeKind::Info, "task removed");
                }
            }
        }
        KeyCode::Char('n') | KeyCode::Esc => {
            app.confirm = None;
            app.mode = Mode::Navigate;
        }
        _ => {}
    }
}
