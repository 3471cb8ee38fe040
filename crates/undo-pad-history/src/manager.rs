/// Snapshot-driven undo/redo manager.
///
/// The host reports whole-buffer snapshots. Each change is classified into
/// an append, a trim, or a full replacement, and stored as one record (or a
/// `ReplaceOld`/`ReplaceNew` pair) that undo and redo replay in reverse or
/// forward.
use crate::config::HistoryConfig;
use crate::operation::{Change, Edit, EditKind};

/// Owns the current buffer text together with its history and redo stacks.
///
/// All mutation goes through [`EditHistory::on_change`],
/// [`EditHistory::record_change`], [`EditHistory::undo`] and
/// [`EditHistory::redo`]. None of them fail: undo and redo on an empty
/// stack return the buffer unchanged.
#[derive(Clone, Default)]
pub struct EditHistory {
    /// Applied edits, oldest first.
    history: Vec<Edit>,
    /// Undone edits, most-recently-undone last.
    redo_stack: Vec<Edit>,
    /// Present buffer content.
    current: String,
    config: HistoryConfig,
}

impl std::fmt::Debug for EditHistory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EditHistory")
            .field("history_len", &self.history.len())
            .field("redo_len", &self.redo_stack.len())
            .field("current_len", &self.current.len())
            .field("config", &self.config)
            .finish()
    }
}

impl EditHistory {
    /// Creates an empty history with default config.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: HistoryConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &HistoryConfig {
        &self.config
    }

    /// The present buffer content.
    pub fn current_text(&self) -> &str {
        &self.current
    }

    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Records on the history stack, oldest first.
    pub fn history(&self) -> &[Edit] {
        &self.history
    }

    /// Records on the redo stack, next-to-redo last.
    pub fn redo_stack(&self) -> &[Edit] {
        &self.redo_stack
    }

    /// Number of undo steps available. A replacement pair is one step.
    pub fn undo_depth(&self) -> usize {
        logical_len(&self.history)
    }

    /// Number of redo steps available.
    pub fn redo_depth(&self) -> usize {
        logical_len(&self.redo_stack)
    }

    /// Handles "the buffer changed to `new`" from the host.
    pub fn on_change(&mut self, new: &str) {
        let change = Change::infer(&self.current, new);
        self.push_change(change, new);
    }

    /// Records a transition from `old` to `new`.
    ///
    /// `old` must be the last value reported by [`EditHistory::current_text`].
    /// Always clears the redo stack, including when `old == new` and nothing
    /// is recorded.
    pub fn record_change(&mut self, old: &str, new: &str) {
        if old != self.current {
            tracing::warn!(
                "Change recorded from a stale buffer ({} bytes, expected {})",
                old.len(),
                self.current.len()
            );
        }
        let change = Change::infer(old, new);
        self.push_change(change, new);
    }

    /// Undoes the most recent edit and returns the resulting buffer.
    ///
    /// A replacement pair is undone as a single step.
    pub fn undo(&mut self) -> &str {
        let entry = pop_entry(&mut self.history, EditKind::ReplaceNew, EditKind::ReplaceOld);
        let Some(top) = entry.first() else {
            return &self.current;
        };
        tracing::debug!("Undo {:?} ({} records)", top.kind, entry.len());

        match (top.kind, entry.get(1)) {
            (EditKind::Add, _) => remove_suffix(&mut self.current, &top.payload),
            (EditKind::Delete, _) => self.current.push_str(&top.payload),
            (EditKind::ReplaceNew, Some(old)) => self.current.clone_from(&old.payload),
            (EditKind::ReplaceOld, _) => self.current.clone_from(&top.payload),
            (EditKind::ReplaceNew, None) => {}
        }

        self.redo_stack.extend(entry);
        &self.current
    }

    /// Reapplies the most recently undone edit and returns the resulting buffer.
    pub fn redo(&mut self) -> &str {
        let entry = pop_entry(&mut self.redo_stack, EditKind::ReplaceOld, EditKind::ReplaceNew);
        let Some(top) = entry.first() else {
            return &self.current;
        };
        tracing::debug!("Redo {:?} ({} records)", top.kind, entry.len());

        match (top.kind, entry.get(1)) {
            (EditKind::Add, _) => self.current.push_str(&top.payload),
            (EditKind::Delete, _) => remove_suffix(&mut self.current, &top.payload),
            (EditKind::ReplaceOld, Some(new)) => self.current.clone_from(&new.payload),
            (EditKind::ReplaceNew, _) => self.current.clone_from(&top.payload),
            (EditKind::ReplaceOld, None) => {}
        }

        self.history.extend(entry);
        &self.current
    }

    /// Drops both stacks and empties the buffer.
    pub fn clear(&mut self) {
        self.history.clear();
        self.redo_stack.clear();
        self.current.clear();
    }

    fn push_change(&mut self, change: Change, new: &str) {
        if self.current != new {
            self.current = new.to_string();
        }

        // Any reported change discards the redo branch, even one that records nothing
        self.redo_stack.clear();

        let edits = match change {
            Change::Unchanged if !self.config.record_unchanged => {
                tracing::trace!("Skipping unchanged edit");
                return;
            }
            Change::Unchanged => vec![Edit::add("")],
            other => other.into_edits(),
        };

        if let Some(last) = edits.last() {
            tracing::debug!("Recorded {:?} ({} bytes)", last.kind, last.payload.len());
        }
        self.history.extend(edits);
        self.enforce_depth();
    }

    /// Evicts the oldest entries beyond `max_history_depth`, pairs whole.
    /// A cap of 0 is treated as no cap.
    fn enforce_depth(&mut self) {
        let Some(max) = self.config.max_history_depth.filter(|&max| max > 0) else {
            return;
        };
        let mut depth = self.undo_depth();
        let mut evicted = 0;
        while depth > max && !self.history.is_empty() {
            let paired = self.history.len() > 1
                && self.history[0].kind == EditKind::ReplaceOld
                && self.history[1].kind == EditKind::ReplaceNew;
            let records = if paired { 2 } else { 1 };
            self.history.drain(..records);
            depth -= 1;
            evicted += 1;
        }
        if evicted > 0 {
            tracing::debug!("Evicted {evicted} oldest history entries");
        }
    }
}

/// Counts logical entries: every record except the `ReplaceOld` half of a pair.
fn logical_len(stack: &[Edit]) -> usize {
    stack
        .iter()
        .filter(|e| e.kind != EditKind::ReplaceOld)
        .count()
}

/// Pops one logical entry off `stack`, in pop order.
///
/// If the top record is `pair_top`, its `pair_bottom` counterpart is popped
/// with it. Returns an empty vec when the stack is empty.
fn pop_entry(stack: &mut Vec<Edit>, pair_top: EditKind, pair_bottom: EditKind) -> Vec<Edit> {
    let Some(top) = stack.pop() else {
        return Vec::new();
    };
    if top.kind != pair_top {
        if top.is_replace() {
            tracing::warn!("Found {:?} without its counterpart", top.kind);
        }
        return vec![top];
    }
    if stack.last().is_some_and(|e| e.kind == pair_bottom) {
        if let Some(bottom) = stack.pop() {
            return vec![top, bottom];
        }
    }
    tracing::warn!("Found {:?} without its counterpart", top.kind);
    vec![top]
}

/// Removes `suffix` from the end of `buffer`.
///
/// If the buffer does not end with it, removes as many chars as the suffix
/// holds instead.
fn remove_suffix(buffer: &mut String, suffix: &str) {
    if buffer.ends_with(suffix) {
        let len = buffer.len() - suffix.len();
        buffer.truncate(len);
        return;
    }

    tracing::warn!("Buffer does not end with the recorded suffix");
    let count = suffix.chars().count();
    if count == 0 {
        return;
    }
    match buffer.char_indices().rev().nth(count - 1) {
        Some((idx, _)) => buffer.truncate(idx),
        None => buffer.clear(),
    }
}
