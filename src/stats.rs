//! Task Statistics
//!
//! Counts derived from the task list on every render.

use crate::models::Task;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskStats {
    pub total: usize,
    pub completed: usize,
}

impl TaskStats {
    pub fn from_tasks(tasks: &[Task]) -> Self {
        Self {
            total: tasks.len(),
            completed: tasks.iter().filter(|task| task.completed).count(),
        }
    }

    pub fn has_tasks(&self) -> bool {
        self.total != 0
    }

    pub fn incomplete(&self) -> usize {
        self.total - self.completed
    }

    /// Percentage of completed tasks, rounded half up; 0 for an empty list
    pub fn completion_rate(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        let rate = (self.completed * 100 + self.total / 2) / self.total;
        rate as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn tasks(completed: &[bool]) -> Vec<Task> {
        completed
            .iter()
            .enumerate()
            .map(|(i, done)| Task {
                id: i as u64 + 1,
                text: format!("Task {}", i),
                completed: *done,
                created_at: Utc::now(),
            })
            .collect()
    }

    #[test]
    fn test_three_of_four_is_75() {
        let stats = TaskStats::from_tasks(&tasks(&[true, true, false, true]));
        assert_eq!(stats.total, 4);
        assert_eq!(stats.completed, 3);
        assert_eq!(stats.incomplete(), 1);
        assert_eq!(stats.completion_rate(), 75);
        assert!(stats.has_tasks());
    }

    #[test]
    fn test_empty_list_is_zero() {
        let stats = TaskStats::from_tasks(&[]);
        assert_eq!(stats, TaskStats::default());
        assert!(!stats.has_tasks());
        assert_eq!(stats.incomplete(), 0);
        assert_eq!(stats.completion_rate(), 0);
    }

    #[test]
    fn test_rate_rounds_to_nearest() {
        assert_eq!(TaskStats { total: 3, completed: 1 }.completion_rate(), 33);
        assert_eq!(TaskStats { total: 3, completed: 2 }.completion_rate(), 67);
        assert_eq!(TaskStats { total: 8, completed: 1 }.completion_rate(), 13);
        assert_eq!(TaskStats { total: 2, completed: 2 }.completion_rate(), 100);
    }
}
