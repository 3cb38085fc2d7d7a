/// Fraction of the sentinel row that must be visible before a load fires.
pub const DEFAULT_LOAD_THRESHOLD: f64 = 0.9;

/// Edge-triggered detector for the end-of-list sentinel.
///
/// `observe` is fed the sentinel's visible fraction every frame and fires
/// exactly once per crossing from hidden to visible. A sentinel that stays
/// in view does not fire again until it first drops out of view.
#[derive(Debug, Clone)]
pub struct LoadTrigger {
    threshold: f64,
    was_visible: bool,
}

impl LoadTrigger {
    pub fn new(threshold: f64) -> Self {
        LoadTrigger {
            threshold,
            was_visible: false,
        }
    }

    /// Record the sentinel's visible fraction for this frame.
    /// Returns true on the hidden-to-visible edge.
    pub fn observe(&mut self, visible_fraction: f64) -> bool {
        let visible = visible_fraction >= self.threshold;
        let fired = visible && !self.was_visible;
        self.was_visible = visible;
        fired
    }
}

impl Default for LoadTrigger {
    fn default() -> Self {
        LoadTrigger::new(DEFAULT_LOAD_THRESHOLD)
    }
}
