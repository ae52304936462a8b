use chrono::{DateTime, Local};

/// Identifier for a task. Assigned by the list from a monotonic counter,
/// never reused within a session.
pub type TaskId = u64;

/// A single to-do item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    /// Unique within the owning list; immutable after creation
    pub id: TaskId,
    /// Non-empty after trimming (enforced by the ops layer)
    pub text: String,
    pub completed: bool,
    pub starred: bool,
    /// Set once at creation; immutable
    pub created_at: DateTime<Local>,
}

impl Task {
    /// Create a new task with the given id and text, stamped with the
    /// current time. Only `ops::task_ops::add_task` should fabricate
    /// tasks that enter a list.
    pub fn new(id: TaskId, text: String) -> Self {
        Task {
            id,
            text,
            completed: false,
            starred: false,
            created_at: Local::now(),
        }
    }

    /// The creation timestamp as shown in the list view, e.g. `May 14 09:30`.
    pub fn created_label(&self) -> String {
        self.created_at.format("%b %d %H:%M").to_string()
    }
}
