use chrono::NaiveDateTime;

use crate::model::task::{Task, TaskId};

// ---------------------------------------------------------------------------
// Completion
// ---------------------------------------------------------------------------

/// Flip the completion flag of the task with `id`, stamping or clearing its
/// completion time. Returns false when no task has that id.
pub fn toggle_done(tasks: &mut [Task], id: TaskId, now: NaiveDateTime) -> bool {
    match tasks.iter_mut().find(|t| t.id == id) {
        Some(task) => {
            let done = !task.done;
            task.set_done(done, now);
            true
        }
        None => false,
    }
}

// ---------------------------------------------------------------------------
// Create / edit / delete
// ---------------------------------------------------------------------------

/// Next free id: one past the highest id in use, starting at 1.
///
/// Ids of deleted tasks are never reused while a higher id exists.
pub fn next_task_id(tasks: &[Task]) -> TaskId {
    tasks.iter().map(|t| t.id).max().map_or(1, |max| max + 1)
}

/// Append a new task built from `draft`, assigning it a fresh id.
/// New tasks always start open regardless of the draft's flags.
pub fn commit_create(tasks: &mut Vec<Task>, draft: &Task) -> TaskId {
    let id = next_task_id(tasks);
    tasks.push(Task::new(id, draft.content.clone()));
    id
}

/// Replace the task matching the draft's id with the draft, recomputing the
/// completion time from the draft's `done` flag. Returns false when no task
/// has that id.
pub fn commit_edit(tasks: &mut [Task], draft: &Task, now: NaiveDateTime) -> bool {
    match tasks.iter_mut().find(|t| t.id == draft.id) {
        Some(slot) => {
            let mut task = draft.clone();
            task.set_done(draft.done, now);
            *slot = task;
            true
        }
        None => false,
    }
}

/// Remove the task with `id`. Returns false when no task has that id.
pub fn delete_task(tasks: &mut Vec<Task>, id: TaskId) -> bool {
    let before = tasks.len();
    tasks.retain(|t| t.id != id);
    tasks.len() < before
}
