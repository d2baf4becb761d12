//! Frontend Models
//!
//! Data structures for the in-memory task list.

use chrono::{DateTime, Utc};

/// Task identifier, derived from the creation time in milliseconds
pub type TaskId = u64;

/// A single to-do entry
#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    pub id: TaskId,
    /// Trimmed, never empty
    pub text: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

impl Task {
    pub fn new(id: TaskId, text: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            text,
            completed: false,
            created_at,
        }
    }
}
