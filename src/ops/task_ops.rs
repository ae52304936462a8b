use crate::model::list::TaskList;
use crate::model::task::{Task, TaskId};
use crate::ops::edit_session::EditSession;

/// Error type for task operations.
///
/// Unknown ids are deliberately not errors: a single user racing their own
/// prior action (double-pressed delete, stale edit form) is benign, so
/// `remove_task` and the toggles are silent no-ops when the id is gone.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TaskError {
    #[error("task text cannot be empty")]
    EmptyText,
}

/// Trim input and reject whitespace-only text.
fn normalize_text(text: &str) -> Result<String, TaskError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(TaskError::EmptyText);
    }
    Ok(trimmed.to_string())
}

/// Add a task to the front of the list (newest first by construction).
/// Returns the assigned id. Empty or whitespace-only text fails with
/// `EmptyText` and leaves the list untouched.
pub fn add_task(list: &mut TaskList, text: &str) -> Result<TaskId, TaskError> {
    let text = normalize_text(text)?;
    let id = list.take_id();
    list.tasks.insert(0, Task::new(id, text));
    Ok(id)
}

/// Remove the task with the given id. Idempotent: returns false if no
/// such task exists. Clears the edit session if it was tracking the
/// removed task, so the session never points at a task that is gone.
pub fn remove_task(list: &mut TaskList, session: &mut EditSession, id: TaskId) -> bool {
    let Some(idx) = list.tasks.iter().position(|t| t.id == id) else {
        return false;
    };
    list.tasks.remove(idx);
    session.task_removed(id);
    true
}

/// Flip the completed flag. Returns false if the id is absent.
pub fn toggle_completed(list: &mut TaskList, id: TaskId) -> bool {
    match list.tasks.iter_mut().find(|t| t.id == id) {
        Some(task) => {
            task.completed = !task.completed;
            true
        }
        None => false,
    }
}

/// Flip the starred flag. Returns false if the id is absent.
pub fn toggle_starred(list: &mut TaskList, id: TaskId) -> bool {
    match list.tasks.iter_mut().find(|t| t.id == id) {
        Some(task) => {
            task.starred = !task.starred;
            true
        }
        None => false,
    }
}

/// Replace a task's text with the trimmed input. Empty input fails with
/// `EmptyText` and leaves the record unchanged. An absent id is a no-op
/// (the edit session is cleared on delete, so this only happens with a
/// stale caller).
pub fn edit_text(list: &mut TaskList, id: TaskId, new_text: &str) -> Result<(), TaskError> {
    let text = normalize_text(new_text)?;
    if let Some(task) = list.tasks.iter_mut().find(|t| t.id == id) {
        task.text = text;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn add_rejects_empty_text() {
        let mut list = TaskList::new();
        assert_eq!(add_task(&mut list, ""), Err(TaskError::EmptyText));
        assert_eq!(add_task(&mut list, "   "), Err(TaskError::EmptyText));
        assert_eq!(add_task(&mut list, "\t \n"), Err(TaskError::EmptyText));
        assert_eq!(list.len(), 0);
    }

    #[test]
    fn add_prepends_with_defaults() {
        let mut list = TaskList::new();
        let first = add_task(&mut list, "Buy milk").unwrap();
        let second = add_task(&mut list, "Walk the dog").unwrap();

        assert_eq!(list.len(), 2);
        assert_ne!(first, second);
        // Newest first
        assert_eq!(list.tasks()[0].text, "Walk the dog");
        assert_eq!(list.tasks()[1].text, "Buy milk");

        let task = list.get(first).unwrap();
        assert!(!task.completed);
        assert!(!task.starred);
    }

    #[test]
    fn add_trims_whitespace() {
        let mut list = TaskList::new();
        let id = add_task(&mut list, "  Buy milk  ").unwrap();
        assert_eq!(list.get(id).unwrap().text, "Buy milk");
    }

    #[test]
    fn ids_are_never_reused() {
        let mut list = TaskList::new();
        let mut session = EditSession::new();
        let a = add_task(&mut list, "a").unwrap();
        remove_task(&mut list, &mut session, a);
        let b = add_task(&mut list, "b").unwrap();
        assert!(b > a);
    }

    #[test]
    fn remove_is_idempotent() {
        let mut list = TaskList::new();
        let mut session = EditSession::new();
        let id = add_task(&mut list, "Buy milk").unwrap();

        assert!(remove_task(&mut list, &mut session, id));
        assert!(!remove_task(&mut list, &mut session, id));
        assert!(list.is_empty());
    }

    #[test]
    fn remove_leaves_other_tasks_alone() {
        let mut list = TaskList::new();
        let mut session = EditSession::new();
        let a = add_task(&mut list, "a").unwrap();
        let b = add_task(&mut list, "b").unwrap();
        let before_b = list.get(b).unwrap().clone();

        remove_task(&mut list, &mut session, a);
        assert_eq!(list.tasks().to_vec(), vec![before_b]);
    }

    #[test]
    fn toggle_completed_is_an_involution() {
        let mut list = TaskList::new();
        let id = add_task(&mut list, "Buy milk").unwrap();

        assert!(toggle_completed(&mut list, id));
        assert!(list.get(id).unwrap().completed);
        assert!(toggle_completed(&mut list, id));
        assert!(!list.get(id).unwrap().completed);
    }

    #[test]
    fn toggle_starred_is_an_involution() {
        let mut list = TaskList::new();
        let id = add_task(&mut list, "Buy milk").unwrap();

        assert!(toggle_starred(&mut list, id));
        assert!(list.get(id).unwrap().starred);
        assert!(toggle_starred(&mut list, id));
        assert!(!list.get(id).unwrap().starred);
    }

    #[test]
    fn toggles_on_absent_id_are_no_ops() {
        let mut list = TaskList::new();
        add_task(&mut list, "Buy milk").unwrap();
        let before = list.tasks().to_vec();

        assert!(!toggle_completed(&mut list, 999));
        assert!(!toggle_starred(&mut list, 999));
        assert_eq!(list.tasks(), &before[..]);
    }

    #[test]
    fn edit_text_trims_and_replaces() {
        let mut list = TaskList::new();
        let id = add_task(&mut list, "Buy milk").unwrap();

        edit_text(&mut list, id, "  New  ").unwrap();
        assert_eq!(list.get(id).unwrap().text, "New");
    }

    #[test]
    fn edit_text_rejects_empty_and_keeps_record() {
        let mut list = TaskList::new();
        let id = add_task(&mut list, "Buy milk").unwrap();

        assert_eq!(edit_text(&mut list, id, "   "), Err(TaskError::EmptyText));
        assert_eq!(list.get(id).unwrap().text, "Buy milk");
    }

    #[test]
    fn edit_text_on_absent_id_is_a_no_op() {
        let mut list = TaskList::new();
        add_task(&mut list, "Buy milk").unwrap();
        let before = list.tasks().to_vec();

        edit_text(&mut list, 999, "New").unwrap();
        assert_eq!(list.tasks(), &before[..]);
    }

    #[test]
    fn edit_preserves_id_and_created_at() {
        let mut list = TaskList::new();
        let id = add_task(&mut list, "Buy milk").unwrap();
        let created = list.get(id).unwrap().created_at;

        edit_text(&mut list, id, "Buy oat milk").unwrap();
        let task = list.get(id).unwrap();
        assert_eq!(task.id, id);
        assert_eq!(task.created_at, created);
    }
}
