//! Task List Operations
//!
//! Ordered task list (newest first) and the add/toggle/delete operations on it.
//! Every operation is total: blank input and unknown ids are silently ignored.

use chrono::{DateTime, Utc};

use crate::models::{Task, TaskId};

/// Ordered list of tasks plus id allocation state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskList {
    tasks: Vec<Task>,
    /// Highest id handed out so far
    last_id: TaskId,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tasks in display order (newest first)
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Trim `text` and prepend a new pending task.
    ///
    /// Returns the new task's id, or `None` when the trimmed text is empty.
    pub fn add(&mut self, text: &str, now: DateTime<Utc>) -> Option<TaskId> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        let id = self.allocate_id(now);
        self.tasks.insert(0, Task::new(id, text.to_string(), now));
        Some(id)
    }

    /// Flip `completed` on the matching task.
    ///
    /// Returns the new completion state, or `None` if no task has `id`.
    pub fn toggle(&mut self, id: TaskId) -> Option<bool> {
        let task = self.tasks.iter_mut().find(|task| task.id == id)?;
        task.completed = !task.completed;
        Some(task.completed)
    }

    /// Remove the matching task. Returns whether anything was removed.
    pub fn delete(&mut self, id: TaskId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != id);
        self.tasks.len() != before
    }

    // Ids are strictly increasing even when the clock has not advanced
    fn allocate_id(&mut self, now: DateTime<Utc>) -> TaskId {
        let millis = TaskId::try_from(now.timestamp_millis()).unwrap_or(0);
        let id = millis.max(self.last_id + 1);
        self.last_id = id;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(millis: i64) -> DateTime<Utc> {
        Utc.timestamp_millis_opt(millis).unwrap()
    }

    fn find(list: &TaskList, id: TaskId) -> Option<&Task> {
        list.tasks().iter().find(|task| task.id == id)
    }

    fn list_with(texts: &[&str]) -> TaskList {
        let mut list = TaskList::new();
        for (i, text) in texts.iter().enumerate() {
            list.add(text, at(1_000 + i as i64)).unwrap();
        }
        list
    }

    #[test]
    fn test_add_blank_is_noop() {
        let mut list = list_with(&["Existing"]);
        assert_eq!(list.add(" ", at(5_000)), None);
        assert_eq!(list.add("", at(5_001)), None);
        assert_eq!(list.add("\t\n  ", at(5_002)), None);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_add_prepends_pending_task() {
        let mut list = list_with(&["First"]);
        let id = list.add("Buy milk", at(9_000)).unwrap();

        assert_eq!(list.len(), 2);
        let front = &list.tasks()[0];
        assert_eq!(front.id, id);
        assert_eq!(front.text, "Buy milk");
        assert!(!front.completed);
        assert_eq!(front.created_at, at(9_000));
        assert_eq!(list.tasks()[1].text, "First");
    }

    #[test]
    fn test_add_trims_text() {
        let mut list = TaskList::new();
        list.add("   Walk the dog  ", at(1)).unwrap();
        assert_eq!(list.tasks()[0].text, "Walk the dog");
    }

    #[test]
    fn test_ids_unique_within_same_millisecond() {
        let mut list = TaskList::new();
        let a = list.add("a", at(42)).unwrap();
        let b = list.add("b", at(42)).unwrap();
        let c = list.add("c", at(10)).unwrap();
        assert_eq!(a, 42);
        assert_eq!(b, 43);
        assert_eq!(c, 44);
    }

    #[test]
    fn test_toggle_twice_restores_state() {
        let mut list = list_with(&["One", "Two"]);
        let id = list.tasks()[1].id;

        assert_eq!(list.toggle(id), Some(true));
        assert!(find(&list, id).unwrap().completed);
        assert_eq!(list.toggle(id), Some(false));
        assert!(!find(&list, id).unwrap().completed);
        assert!(!list.tasks()[0].completed);
    }

    #[test]
    fn test_toggle_unknown_id_is_noop() {
        let mut list = list_with(&["One"]);
        let before = list.clone();
        assert_eq!(list.toggle(999_999), None);
        assert_eq!(list, before);
    }

    #[test]
    fn test_delete_removes_only_target() {
        let mut list = list_with(&["One", "Two", "Three"]);
        let target = list.tasks()[1].id;

        assert!(list.delete(target));
        assert_eq!(list.len(), 2);
        assert!(find(&list, target).is_none());
        let texts: Vec<_> = list.tasks().iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["Three", "One"]);
    }

    #[test]
    fn test_delete_unknown_id_is_noop() {
        let mut list = list_with(&["One", "Two"]);
        let before = list.clone();
        assert!(!list.delete(12345));
        assert_eq!(list, before);
    }
}
