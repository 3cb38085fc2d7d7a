use tracing::{debug, info, warn};

use crate::list::editor::EditSession;
use crate::list::trigger::LoadTrigger;
use crate::model::config::ListConfig;
use crate::model::task::{Task, TaskId, now_stamp};
use crate::ops::filter::filter_tasks;
use crate::ops::paginate::{self, PageMode, PageState};
use crate::ops::sort::{SortConfig, SortKey, sort_tasks};
use crate::ops::task_ops;

/// Lifecycle of the initial fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Failed(String),
    Ready,
}

/// Presentation state over the task collection.
///
/// Owns the tasks plus the search, sort, windowing, and editing state layered
/// on top of them, and keeps a materialized view of the visible rows. All
/// mutation goes through intent methods; reads come from the accessors.
///
/// The view pipeline is filter, then window. Sorting is destructive: it
/// reorders the collection itself when a sort is requested and is not
/// reapplied by other intents.
#[derive(Debug)]
pub struct ListState {
    tasks: Vec<Task>,
    search_term: String,
    sort: SortConfig,
    page: PageState,
    session: EditSession,
    trigger: Option<LoadTrigger>,
    load: LoadState,
    load_threshold: f64,

    // Materialized view, rebuilt by refresh()
    displayed: Vec<Task>,
    filtered_len: usize,
}

impl ListState {
    pub fn new(config: &ListConfig) -> Self {
        let mode = if config.infinite {
            PageMode::Incremental
        } else {
            PageMode::Paged
        };
        let mut state = ListState {
            tasks: Vec::new(),
            search_term: String::new(),
            sort: SortConfig::default(),
            page: PageState::new(mode, config.page_size),
            session: EditSession::default(),
            trigger: (mode == PageMode::Incremental)
                .then(|| LoadTrigger::new(config.load_threshold)),
            load: LoadState::Loading,
            load_threshold: config.load_threshold,
            displayed: Vec::new(),
            filtered_len: 0,
        };
        state.refresh();
        state
    }

    /// Rebuild the visible rows from the current collection and view state.
    fn refresh(&mut self) {
        let filtered = filter_tasks(&self.tasks, &self.search_term);
        self.filtered_len = filtered.len();
        self.displayed = paginate::window(&filtered, &self.page)
            .iter()
            .map(|t| (*t).clone())
            .collect();
    }

    // -----------------------------------------------------------------------
    // Fetch lifecycle
    // -----------------------------------------------------------------------

    /// Accept the outcome of the initial fetch. Only the first resolution
    /// counts; later calls are ignored.
    ///
    /// A sort chosen while loading is not applied to the arriving tasks. The
    /// collection keeps its source order until the next sort intent.
    pub fn resolve_fetch(&mut self, result: Result<Vec<Task>, String>) {
        if self.load != LoadState::Loading {
            return;
        }
        match result {
            Ok(tasks) => {
                info!(count = tasks.len(), "task fetch complete");
                self.tasks = tasks;
                self.load = LoadState::Ready;
                self.refresh();
            }
            Err(message) => {
                warn!(%message, "task fetch failed");
                self.load = LoadState::Failed(message);
            }
        }
    }

    // -----------------------------------------------------------------------
    // Search
    // -----------------------------------------------------------------------

    /// Change the search term. A changed term rewinds to the first page so
    /// the window stays inside the new result set.
    pub fn set_search(&mut self, term: &str) {
        if self.search_term == term {
            return;
        }
        self.search_term = term.to_string();
        self.page.rewind();
        self.refresh();
    }

    pub fn clear_search(&mut self) {
        self.set_search("");
    }

    // -----------------------------------------------------------------------
    // Sort
    // -----------------------------------------------------------------------

    /// Apply a sort intent for `key`: repeat selections flip direction,
    /// fresh selections start ascending. Reorders the collection in place.
    /// The page cursor is left alone.
    pub fn sort_by(&mut self, key: SortKey) {
        self.sort.toggle(key);
        sort_tasks(&mut self.tasks, &self.sort);
        self.refresh();
    }

    // -----------------------------------------------------------------------
    // Windowing
    // -----------------------------------------------------------------------

    /// Change the page size. Rewinds to the first page on an actual change.
    pub fn set_page_size(&mut self, page_size: usize) {
        if self.page.page_size == page_size.max(1) {
            return;
        }
        self.page.set_size(page_size);
        self.refresh();
    }

    /// Switch between paged and incremental windowing. Rewinds, and installs
    /// a fresh load trigger when entering incremental mode.
    pub fn toggle_mode(&mut self) {
        let mode = match self.page.mode {
            PageMode::Paged => PageMode::Incremental,
            PageMode::Incremental => PageMode::Paged,
        };
        self.page.set_mode(mode);
        self.trigger = (mode == PageMode::Incremental)
            .then(|| LoadTrigger::new(self.load_threshold));
        self.refresh();
    }

    /// Advance one page. Paged mode only; callers gate on `can_page_forward`
    /// to keep the control disabled on the last page.
    pub fn page_forward(&mut self) {
        if self.page.mode != PageMode::Paged {
            return;
        }
        self.page.forward();
        self.refresh();
    }

    /// Go back one page. Paged mode only.
    pub fn page_backward(&mut self) {
        if self.page.mode != PageMode::Paged {
            return;
        }
        self.page.backward();
        self.refresh();
    }

    /// Feed the sentinel's visible fraction for this frame. On the
    /// hidden-to-visible edge the window grows by one page. Active only in
    /// incremental mode once the fetch has resolved.
    pub fn observe_sentinel(&mut self, visible_fraction: f64) {
        if self.page.mode != PageMode::Incremental || self.load != LoadState::Ready {
            return;
        }
        let Some(trigger) = &mut self.trigger else {
            return;
        };
        if trigger.observe(visible_fraction) {
            debug!(cursor = self.page.cursor + 1, "sentinel visible, extending window");
            self.page.forward();
            self.refresh();
        }
    }

    // -----------------------------------------------------------------------
    // Task mutation
    // -----------------------------------------------------------------------

    /// Flip completion of the task with `id`. Unknown ids are ignored.
    pub fn toggle_done(&mut self, id: TaskId) -> bool {
        let changed = task_ops::toggle_done(&mut self.tasks, id, now_stamp());
        if changed {
            self.refresh();
        }
        changed
    }

    /// Delete the task with `id`. Unknown ids are ignored.
    pub fn delete(&mut self, id: TaskId) -> bool {
        let changed = task_ops::delete_task(&mut self.tasks, id);
        if changed {
            self.refresh();
        }
        changed
    }

    // -----------------------------------------------------------------------
    // Edit workflow
    // -----------------------------------------------------------------------

    /// Open the dialog with a blank draft for a new task.
    pub fn open_create(&mut self) {
        self.session.open_create();
    }

    /// Open the dialog seeded from the task with `id`.
    /// Returns false (dialog stays closed) when the id is unknown.
    pub fn open_edit(&mut self, id: TaskId) -> bool {
        match self.tasks.iter().find(|t| t.id == id) {
            Some(task) => {
                self.session.open_edit(task);
                true
            }
            None => false,
        }
    }

    /// Close the dialog, dropping the draft.
    pub fn cancel_session(&mut self) {
        self.session.close();
    }

    /// Commit the open dialog. A draft with empty content is dropped
    /// silently. Edits replace the original task and recompute its
    /// completion time; creates append a fresh open task.
    pub fn save_session(&mut self) {
        let was_edit = self.session.is_edit();
        let Some(draft) = self.session.close() else {
            return;
        };
        if draft.content.is_empty() {
            debug!("discarding draft with empty content");
            return;
        }
        if was_edit {
            task_ops::commit_edit(&mut self.tasks, &draft, now_stamp());
        } else {
            task_ops::commit_create(&mut self.tasks, &draft);
        }
        self.refresh();
    }

    pub fn draft_mut(&mut self) -> Option<&mut Task> {
        self.session.draft_mut()
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    /// The visible rows, in display order.
    pub fn displayed(&self) -> &[Task] {
        &self.displayed
    }

    /// Number of tasks matching the current search.
    pub fn filtered_len(&self) -> usize {
        self.filtered_len
    }

    /// Number of tasks in the collection.
    pub fn total_len(&self) -> usize {
        self.tasks.len()
    }

    /// Pages needed for the current result set at the current page size.
    pub fn page_count(&self) -> usize {
        paginate::page_count(self.filtered_len, self.page.page_size)
    }

    pub fn can_page_forward(&self) -> bool {
        self.page.mode == PageMode::Paged && self.page.cursor + 1 < self.page_count()
    }

    pub fn can_page_backward(&self) -> bool {
        self.page.mode == PageMode::Paged && self.page.cursor > 0
    }

    /// True while incremental mode has rows beyond the current window.
    pub fn has_more(&self) -> bool {
        self.page.mode == PageMode::Incremental && self.displayed.len() < self.filtered_len
    }

    pub fn load(&self) -> &LoadState {
        &self.load
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn sort(&self) -> SortConfig {
        self.sort
    }

    pub fn page(&self) -> &PageState {
        &self.page
    }

    pub fn session(&self) -> &EditSession {
        &self.session
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn config(infinite: bool, page_size: usize) -> ListConfig {
        ListConfig {
            page_size,
            infinite,
            load_threshold: 0.9,
        }
    }

    fn tasks(n: usize) -> Vec<Task> {
        (1..=n as u64).map(|i| Task::new(i, format!("task {i}"))).collect()
    }

    fn ready_state(infinite: bool, page_size: usize, n: usize) -> ListState {
        let mut state = ListState::new(&config(infinite, page_size));
        state.resolve_fetch(Ok(tasks(n)));
        state
    }

    fn displayed_ids(state: &ListState) -> Vec<u64> {
        state.displayed().iter().map(|t| t.id).collect()
    }

    // --- Fetch lifecycle ---

    #[test]
    fn test_starts_loading_and_empty() {
        let state = ListState::new(&config(false, 10));
        assert_eq!(*state.load(), LoadState::Loading);
        assert!(state.displayed().is_empty());
    }

    #[test]
    fn test_first_resolution_wins() {
        let mut state = ListState::new(&config(false, 10));
        state.resolve_fetch(Err("connection refused".to_string()));
        assert_eq!(
            *state.load(),
            LoadState::Failed("connection refused".to_string())
        );

        // A late success no longer changes anything
        state.resolve_fetch(Ok(tasks(3)));
        assert_eq!(
            *state.load(),
            LoadState::Failed("connection refused".to_string())
        );
        assert!(state.displayed().is_empty());
    }

    #[test]
    fn test_ready_shows_first_window() {
        let state = ready_state(false, 10, 25);
        assert_eq!(*state.load(), LoadState::Ready);
        assert_eq!(displayed_ids(&state), (1..=10).collect::<Vec<_>>());
        assert_eq!(state.filtered_len(), 25);
        assert_eq!(state.total_len(), 25);
    }

    // --- Search ---

    #[test]
    fn test_search_narrows_and_rewinds() {
        let mut state = ready_state(false, 10, 25);
        state.page_forward();
        assert_eq!(state.page().cursor, 1);

        state.set_search("task 1");
        // "task 1" matches 1, 10..19: 11 tasks
        assert_eq!(state.filtered_len(), 11);
        assert_eq!(state.page().cursor, 0);
        assert_eq!(displayed_ids(&state), vec![1, 10, 11, 12, 13, 14, 15, 16, 17, 18]);
    }

    #[test]
    fn test_same_term_keeps_cursor() {
        let mut state = ready_state(false, 10, 25);
        state.set_search("task");
        state.page_forward();
        state.set_search("task");
        assert_eq!(state.page().cursor, 1);
    }

    #[test]
    fn test_clear_search_restores_all() {
        let mut state = ready_state(false, 10, 25);
        state.set_search("task 2");
        state.clear_search();
        assert_eq!(state.filtered_len(), 25);
        assert_eq!(state.search_term(), "");
    }

    // --- Sort ---

    #[test]
    fn test_sort_reorders_collection() {
        let mut state = ListState::new(&config(false, 10));
        state.resolve_fetch(Ok(vec![
            Task::new(2, "banana"),
            Task::new(1, "apple"),
            Task::new(3, "cherry"),
        ]));

        state.sort_by(SortKey::Content);
        assert_eq!(displayed_ids(&state), vec![1, 2, 3]);
        assert!(state.sort().ascending);

        state.sort_by(SortKey::Content);
        assert_eq!(displayed_ids(&state), vec![3, 2, 1]);
        assert!(!state.sort().ascending);
    }

    #[test]
    fn test_sort_keeps_cursor() {
        let mut state = ready_state(false, 10, 25);
        state.page_forward();
        state.sort_by(SortKey::Id);
        assert_eq!(state.page().cursor, 1);
    }

    // --- Windowing ---

    #[test]
    fn test_paged_navigation_and_gates() {
        let mut state = ready_state(false, 10, 25);
        assert_eq!(state.page_count(), 3);
        assert!(state.can_page_forward());
        assert!(!state.can_page_backward());

        state.page_forward();
        state.page_forward();
        assert_eq!(displayed_ids(&state), vec![21, 22, 23, 24, 25]);
        assert!(!state.can_page_forward());
        assert!(state.can_page_backward());
    }

    #[test]
    fn test_page_size_change_rewinds() {
        let mut state = ready_state(false, 10, 25);
        state.page_forward();
        state.set_page_size(25);
        assert_eq!(state.page().cursor, 0);
        assert_eq!(state.displayed().len(), 25);

        // Same size again is a no-op
        state.page_forward();
        state.set_page_size(25);
        assert_eq!(state.page().cursor, 1);
    }

    #[test]
    fn test_mode_toggle_rewinds_and_installs_trigger() {
        let mut state = ready_state(false, 10, 25);
        state.page_forward();

        state.toggle_mode();
        assert_eq!(state.page().mode, PageMode::Incremental);
        assert_eq!(state.page().cursor, 0);
        assert_eq!(displayed_ids(&state), (1..=10).collect::<Vec<_>>());

        state.observe_sentinel(1.0);
        assert_eq!(state.displayed().len(), 20);
    }

    #[test]
    fn test_paging_inert_in_incremental_mode() {
        let mut state = ready_state(true, 10, 25);
        state.page_forward();
        assert_eq!(state.page().cursor, 0);
        assert!(!state.can_page_forward());
        assert!(!state.can_page_backward());
    }

    // --- Lazy load ---

    #[test]
    fn test_sentinel_edge_triggers_once() {
        let mut state = ready_state(true, 10, 30);
        assert_eq!(state.displayed().len(), 10);
        assert!(state.has_more());

        state.observe_sentinel(1.0);
        assert_eq!(state.displayed().len(), 20);

        // Still visible: no further growth
        state.observe_sentinel(1.0);
        state.observe_sentinel(0.95);
        assert_eq!(state.displayed().len(), 20);

        // Out of view and back in: grows again
        state.observe_sentinel(0.0);
        state.observe_sentinel(1.0);
        assert_eq!(state.displayed().len(), 30);
        assert!(!state.has_more());
    }

    #[test]
    fn test_sentinel_inert_while_loading_or_paged() {
        let mut state = ListState::new(&config(true, 10));
        state.observe_sentinel(1.0);
        assert_eq!(state.page().cursor, 0);

        let mut state = ready_state(false, 10, 30);
        state.observe_sentinel(1.0);
        assert_eq!(state.page().cursor, 0);
    }

    // --- Mutation ---

    #[test]
    fn test_toggle_done_updates_view() {
        let mut state = ready_state(false, 10, 5);
        assert!(state.toggle_done(3));
        let row = state.displayed().iter().find(|t| t.id == 3).unwrap();
        assert!(row.done);
        assert!(row.done_time.is_some());

        assert!(!state.toggle_done(99));
    }

    #[test]
    fn test_delete_shrinks_view() {
        let mut state = ready_state(false, 10, 5);
        assert!(state.delete(2));
        assert_eq!(displayed_ids(&state), vec![1, 3, 4, 5]);
        assert!(!state.delete(2));
    }

    // --- Edit workflow ---

    #[test]
    fn test_create_flow_appends() {
        let mut state = ready_state(false, 10, 3);
        state.open_create();
        state.draft_mut().unwrap().content = "brand new".to_string();
        state.save_session();

        assert!(!state.session().is_open());
        assert_eq!(state.total_len(), 4);
        let created = state.displayed().last().unwrap();
        assert_eq!(created.id, 4);
        assert_eq!(created.content, "brand new");
        assert!(!created.done);
    }

    #[test]
    fn test_blank_draft_discarded_silently() {
        let mut state = ready_state(false, 10, 3);
        state.open_create();
        state.save_session();
        assert_eq!(state.total_len(), 3);
        assert!(!state.session().is_open());
    }

    #[test]
    fn test_edit_flow_replaces() {
        let mut state = ready_state(false, 10, 3);
        assert!(state.open_edit(2));
        {
            let draft = state.draft_mut().unwrap();
            draft.content = "task 2, revised".to_string();
            draft.done = true;
        }
        state.save_session();

        let row = state.displayed().iter().find(|t| t.id == 2).unwrap();
        assert_eq!(row.content, "task 2, revised");
        assert!(row.done);
        assert!(row.done_time.is_some());
    }

    #[test]
    fn test_cancel_discards_draft() {
        let mut state = ready_state(false, 10, 3);
        assert!(state.open_edit(1));
        state.draft_mut().unwrap().content = "changed".to_string();
        state.cancel_session();

        assert!(!state.session().is_open());
        let row = state.displayed().iter().find(|t| t.id == 1).unwrap();
        assert_eq!(row.content, "task 1");
    }

    #[test]
    fn test_open_edit_unknown_id() {
        let mut state = ready_state(false, 10, 3);
        assert!(!state.open_edit(42));
        assert!(!state.session().is_open());
    }
}
