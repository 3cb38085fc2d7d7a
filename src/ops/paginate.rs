/// How the visible window relates to the page cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageMode {
    /// Window shows only the page at the cursor
    Paged,
    /// Window grows from the start through the page at the cursor
    Incremental,
}

/// Windowing state: mode, page size, and the zero-based page cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    pub mode: PageMode,
    pub page_size: usize,
    pub cursor: usize,
}

impl PageState {
    pub fn new(mode: PageMode, page_size: usize) -> Self {
        PageState {
            mode,
            page_size: page_size.max(1),
            cursor: 0,
        }
    }

    /// Move one page back, stopping at the first page.
    pub fn backward(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Move one page forward. Not clamped; a cursor past the end yields an
    /// empty (paged) or full (incremental) window.
    pub fn forward(&mut self) {
        self.cursor = self.cursor.saturating_add(1);
    }

    /// Jump back to the first page.
    pub fn rewind(&mut self) {
        self.cursor = 0;
    }

    /// Change the page size (minimum 1). Rewinds, since the old cursor
    /// addresses different rows under the new size.
    pub fn set_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
        self.cursor = 0;
    }

    /// Switch windowing mode. Rewinds on an actual change, no-op otherwise.
    pub fn set_mode(&mut self, mode: PageMode) {
        if self.mode != mode {
            self.mode = mode;
            self.cursor = 0;
        }
    }
}

/// The visible slice of `items` under the given state.
pub fn window<'a, T>(items: &'a [T], state: &PageState) -> &'a [T] {
    let end = items
        .len()
        .min(state.cursor.saturating_add(1).saturating_mul(state.page_size));
    let start = match state.mode {
        PageMode::Paged => items.len().min(state.cursor.saturating_mul(state.page_size)),
        PageMode::Incremental => 0,
    };
    &items[start..end]
}

/// Number of pages needed to show `total` items.
pub fn page_count(total: usize, page_size: usize) -> usize {
    total.div_ceil(page_size.max(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(n: usize) -> Vec<usize> {
        (0..n).collect()
    }

    // --- Paged windows ---

    #[test]
    fn test_paged_first_page() {
        let data = items(25);
        let state = PageState::new(PageMode::Paged, 10);
        assert_eq!(window(&data, &state), &data[0..10]);
    }

    #[test]
    fn test_paged_middle_and_last_page() {
        let data = items(25);
        let mut state = PageState::new(PageMode::Paged, 10);
        state.forward();
        assert_eq!(window(&data, &state), &data[10..20]);
        state.forward();
        assert_eq!(window(&data, &state), &data[20..25]);
    }

    #[test]
    fn test_paged_overshoot_is_empty() {
        let data = items(25);
        let mut state = PageState::new(PageMode::Paged, 10);
        state.cursor = 5;
        assert_eq!(window(&data, &state), &[] as &[usize]);
    }

    // --- Incremental windows ---

    #[test]
    fn test_incremental_grows_from_start() {
        let data = items(25);
        let mut state = PageState::new(PageMode::Incremental, 10);
        assert_eq!(window(&data, &state), &data[0..10]);
        state.forward();
        assert_eq!(window(&data, &state), &data[0..20]);
        state.forward();
        assert_eq!(window(&data, &state), &data[0..25]);
    }

    #[test]
    fn test_incremental_overshoot_is_full_list() {
        let data = items(8);
        let mut state = PageState::new(PageMode::Incremental, 10);
        state.cursor = 99;
        assert_eq!(window(&data, &state), &data[..]);
    }

    // --- Cursor movement ---

    #[test]
    fn test_backward_stops_at_zero() {
        let mut state = PageState::new(PageMode::Paged, 10);
        state.backward();
        assert_eq!(state.cursor, 0);
        state.forward();
        state.forward();
        state.backward();
        assert_eq!(state.cursor, 1);
    }

    #[test]
    fn test_set_size_clamps_and_rewinds() {
        let mut state = PageState::new(PageMode::Paged, 10);
        state.forward();
        state.set_size(0);
        assert_eq!(state.page_size, 1);
        assert_eq!(state.cursor, 0);
    }

    #[test]
    fn test_set_mode_rewinds_only_on_change() {
        let mut state = PageState::new(PageMode::Paged, 10);
        state.forward();
        state.set_mode(PageMode::Paged);
        assert_eq!(state.cursor, 1);
        state.set_mode(PageMode::Incremental);
        assert_eq!(state.cursor, 0);
    }

    // --- Page count ---

    #[test]
    fn test_page_count_rounds_up() {
        assert_eq!(page_count(25, 10), 3);
        assert_eq!(page_count(30, 10), 3);
        assert_eq!(page_count(1, 10), 1);
        assert_eq!(page_count(0, 10), 0);
    }

    #[test]
    fn test_page_count_zero_size() {
        assert_eq!(page_count(5, 0), 5);
    }

    #[test]
    fn test_window_empty_items() {
        let data: Vec<usize> = vec![];
        let state = PageState::new(PageMode::Paged, 10);
        assert_eq!(window(&data, &state), &[] as &[usize]);
    }
}
