use chrono::{Local, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

/// Identifier for a task. Stable for the lifetime of the collection.
pub type TaskId = u64;

/// A single task in the collection.
///
/// `done` and `done_time` move together: a completed task always carries
/// the timestamp of its completion, an open task never does.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique id, assigned on creation
    pub id: TaskId,
    /// Free-form task text
    pub content: String,
    /// Completion flag
    pub done: bool,
    /// Completion timestamp, present iff `done`
    pub done_time: Option<NaiveDateTime>,
}

impl Task {
    /// Create a new open task with the given id and content
    pub fn new(id: TaskId, content: impl Into<String>) -> Self {
        Task {
            id,
            content: content.into(),
            done: false,
            done_time: None,
        }
    }

    /// Placeholder task used as an editing draft before it gets a real id
    pub fn draft() -> Self {
        Task::new(0, "")
    }

    /// Set the completion flag, keeping `done_time` in step
    pub fn set_done(&mut self, done: bool, now: NaiveDateTime) {
        self.done = done;
        self.done_time = done.then_some(now);
    }

    /// True when `done` and `done_time` agree
    pub fn invariant_holds(&self) -> bool {
        self.done == self.done_time.is_some()
    }

    /// Completion time formatted for display, empty when the task is open
    pub fn done_time_text(&self) -> String {
        match self.done_time {
            Some(t) => t.format("%Y-%m-%d %H:%M:%S").to_string(),
            None => String::new(),
        }
    }
}

/// Current local time at second precision, the resolution stored on tasks
pub fn now_stamp() -> NaiveDateTime {
    let now = Local::now().naive_local();
    now.with_nanosecond(0).unwrap_or(now)
}
