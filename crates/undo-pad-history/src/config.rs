/// Configuration for the history system.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HistoryConfig {
    /// Max logical entries kept on the history stack. A replacement pair
    /// counts as one entry. `None` or `Some(0)` keeps everything.
    pub max_history_depth: Option<usize>,
    /// Whether a change whose old and new text are equal is recorded as an
    /// empty `Add`. When false such changes are ignored entirely.
    pub record_unchanged: bool,
}

impl HistoryConfig {
    /// Returns a copy with the given depth cap.
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_history_depth = Some(depth);
        self
    }
}
