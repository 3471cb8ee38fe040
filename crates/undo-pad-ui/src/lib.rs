//! egui desktop shell for undo-pad.
//!
//! Hosts a single `EditHistory`: the text area reports every user edit as a
//! whole-buffer snapshot, and undo/redo write the reconstructed buffer back
//! into the text area.

mod app;

pub use app::{App, StartupArgs};
