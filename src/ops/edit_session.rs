use crate::model::list::TaskList;
use crate::model::task::{Task, TaskId};
use crate::ops::task_ops::{self, TaskError};

/// Tracks the one task (if any) currently in edit mode.
///
/// Invariant: a tracked id always names a task present in the list —
/// `task_ops::remove_task` calls `task_removed` to keep that true.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditSession {
    editing: Option<TaskId>,
}

impl EditSession {
    pub fn new() -> Self {
        EditSession::default()
    }

    /// The id of the task being edited, if any.
    pub fn editing(&self) -> Option<TaskId> {
        self.editing
    }

    pub fn is_editing(&self, id: TaskId) -> bool {
        self.editing == Some(id)
    }

    /// Begin editing a task. Any previous edit is implicitly abandoned;
    /// only committed text ever reaches the list.
    pub fn start(&mut self, task: &Task) {
        self.editing = Some(task.id);
    }

    /// Abandon the current edit, discarding uncommitted text.
    pub fn cancel(&mut self) {
        self.editing = None;
    }

    /// Commit the edit through `task_ops::edit_text`. On success the
    /// session is cleared; on `EmptyText` it stays tracked so the caller
    /// can keep the edit form open and surface the error.
    pub fn commit(
        &mut self,
        list: &mut TaskList,
        id: TaskId,
        new_text: &str,
    ) -> Result<(), TaskError> {
        task_ops::edit_text(list, id, new_text)?;
        self.editing = None;
        Ok(())
    }

    /// Called by the delete operation: clear the session if the removed
    /// task was the one being edited.
    pub(crate) fn task_removed(&mut self, id: TaskId) {
        if self.editing == Some(id) {
            self.editing = None;
        }
    }
}
