//! Keyboard shortcuts for undo and redo.
//!
//! Ctrl/Cmd+Z undoes; Ctrl/Cmd+Y and Ctrl/Cmd+Shift+Z redo.

use eframe::egui;

use super::App;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HistoryAction {
    Undo,
    Redo,
}

impl App {
    /// Consumes undo/redo key presses from this frame's input and applies them.
    pub(crate) fn handle_history_shortcuts(&mut self, ctx: &egui::Context) {
        let actions = ctx.input_mut(|i| {
            let mut actions = Vec::new();
            i.events.retain(|event| {
                let action = match event {
                    egui::Event::Key {
                        key,
                        pressed: true,
                        modifiers,
                        ..
                    } if modifiers.ctrl || modifiers.command => history_action(*key, modifiers.shift),
                    _ => None,
                };
                match action {
                    Some(action) => {
                        actions.push(action);
                        false
                    }
                    None => true,
                }
            });
            actions
        });

        for action in actions {
            match action {
                HistoryAction::Undo => self.undo(),
                HistoryAction::Redo => self.redo(),
            }
        }
    }
}

fn history_action(key: egui::Key, shift: bool) -> Option<HistoryAction> {
    match key {
        egui::Key::Z if shift => Some(HistoryAction::Redo),
        egui::Key::Z => Some(HistoryAction::Undo),
        egui::Key::Y => Some(HistoryAction::Redo),
        _ => None,
    }
}
