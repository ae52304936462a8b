use crate::model::task::{Task, TaskId};

/// The authoritative list of tasks for this session.
///
/// Owns the records and the id counter. Everything outside the ops layer
/// sees read-only snapshots; mutation goes through `ops::task_ops`.
#[derive(Debug, Clone)]
pub struct TaskList {
    pub(crate) tasks: Vec<Task>,
    pub(crate) next_id: TaskId,
}

impl Default for TaskList {
    fn default() -> Self {
        TaskList::new()
    }
}

impl TaskList {
    pub fn new() -> Self {
        TaskList {
            tasks: Vec::new(),
            next_id: 1,
        }
    }

    /// Read-only snapshot of the records in list order (newest first,
    /// since adds prepend).
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Claim the next id from the counter.
    pub(crate) fn take_id(&mut self) -> TaskId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}
