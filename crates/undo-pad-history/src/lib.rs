/// Undo/redo history inferred from whole-buffer snapshots.
///
/// The host reports "the buffer changed from A to B". `EditHistory` turns
/// each report into an append, trim, or replacement record and keeps a
/// history stack and a redo stack that reconstruct earlier buffer states
/// exactly.
pub mod config;
pub mod manager;
pub mod operation;

pub use config::HistoryConfig;
pub use manager::EditHistory;
pub use operation::{Change, Edit, EditKind};
