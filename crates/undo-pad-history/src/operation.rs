/// Edit records and the snapshot-diff inference that produces them.

/// What kind of change an [`Edit`] describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditKind {
    /// Text appended to the end of the buffer.
    Add,
    /// Text removed from the end of the buffer.
    Delete,
    /// Full buffer content before a replacement. Always sits directly
    /// beneath its matching [`EditKind::ReplaceNew`] in the history stack.
    ReplaceOld,
    /// Full buffer content after a replacement.
    ReplaceNew,
}

/// A single record on the history or redo stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edit {
    pub kind: EditKind,
    /// Appended suffix (`Add`), removed suffix (`Delete`), or the full
    /// buffer text (`ReplaceOld` / `ReplaceNew`).
    pub payload: String,
}

impl Edit {
    pub fn new(kind: EditKind, payload: impl Into<String>) -> Self {
        Self {
            kind,
            payload: payload.into(),
        }
    }

    pub fn add(payload: impl Into<String>) -> Self {
        Self::new(EditKind::Add, payload)
    }

    pub fn delete(payload: impl Into<String>) -> Self {
        Self::new(EditKind::Delete, payload)
    }

    pub fn replace_old(payload: impl Into<String>) -> Self {
        Self::new(EditKind::ReplaceOld, payload)
    }

    pub fn replace_new(payload: impl Into<String>) -> Self {
        Self::new(EditKind::ReplaceNew, payload)
    }

    /// Whether this record is one half of a replacement pair.
    pub fn is_replace(&self) -> bool {
        matches!(self.kind, EditKind::ReplaceOld | EditKind::ReplaceNew)
    }
}

/// A change inferred from two buffer snapshots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Change {
    /// Both snapshots are identical.
    Unchanged,
    /// `new` is `old` followed by this suffix.
    Add(String),
    /// `old` is `new` followed by this suffix.
    Delete(String),
    /// Neither snapshot is a prefix of the other.
    Replace { old: String, new: String },
}

impl Change {
    /// Classifies the transition from `old` to `new`.
    ///
    /// Only anchored prefix matches produce `Add` or `Delete`. A snapshot
    /// that merely contains the other somewhere past position 0 is a
    /// `Replace`.
    pub fn infer(old: &str, new: &str) -> Self {
        if old == new {
            return Change::Unchanged;
        }
        if let Some(appended) = new.strip_prefix(old) {
            return Change::Add(appended.to_string());
        }
        if let Some(removed) = old.strip_prefix(new) {
            return Change::Delete(removed.to_string());
        }
        Change::Replace {
            old: old.to_string(),
            new: new.to_string(),
        }
    }

    /// Converts the change into stack records, in push order.
    ///
    /// `Unchanged` yields nothing. A replacement yields `ReplaceOld`
    /// followed by `ReplaceNew`.
    pub fn into_edits(self) -> Vec<Edit> {
        match self {
            Change::Unchanged => Vec::new(),
            Change::Add(text) => vec![Edit::add(text)],
            Change::Delete(text) => vec![Edit::delete(text)],
            Change::Replace { old, new } => vec![Edit::replace_old(old), Edit::replace_new(new)],
        }
    }
}
