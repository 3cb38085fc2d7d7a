use std::cmp::Ordering;

use crate::model::task::Task;
use crate::util::natural::natural_cmp;

/// Sortable task columns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Id,
    Content,
    Done,
    DoneTime,
}

impl SortKey {
    pub fn label(self) -> &'static str {
        match self {
            SortKey::Id => "id",
            SortKey::Content => "content",
            SortKey::Done => "status",
            SortKey::DoneTime => "completed",
        }
    }
}

/// Current sort selection. Starts unsorted; tasks stay in insertion order
/// until a key is chosen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortConfig {
    pub key: Option<SortKey>,
    pub ascending: bool,
}

impl SortConfig {
    /// Select a sort key. Picking the active key again flips the direction,
    /// any other key starts ascending.
    pub fn toggle(&mut self, key: SortKey) {
        if self.key == Some(key) {
            self.ascending = !self.ascending;
        } else {
            self.key = Some(key);
            self.ascending = true;
        }
    }
}

/// Ascending comparison of two tasks under the given key.
///
/// Open sorts before done, and a missing completion time sorts before any
/// timestamp. Text fields use natural ordering.
pub fn compare(a: &Task, b: &Task, key: SortKey) -> Ordering {
    match key {
        SortKey::Id => a.id.cmp(&b.id),
        SortKey::Content => natural_cmp(&a.content, &b.content),
        SortKey::Done => a.done.cmp(&b.done),
        SortKey::DoneTime => natural_cmp(&a.done_time_text(), &b.done_time_text()),
    }
}

/// Sort tasks in place according to `config`. No key selected is a no-op.
///
/// The sort is stable, and descending is the exact reversal of the ascending
/// comparator, so ties keep their current relative order either way.
pub fn sort_tasks(tasks: &mut [Task], config: &SortConfig) {
    let Some(key) = config.key else {
        return;
    };
    tasks.sort_by(|a, b| {
        let ord = compare(a, b, key);
        if config.ascending { ord } else { ord.reverse() }
    });
}
