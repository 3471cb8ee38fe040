//! Status bar showing buffer size and available undo/redo steps.

use eframe::egui;

use super::App;

impl App {
    pub(crate) fn show_status_bar(&mut self, ui: &mut egui::Ui) {
        let char_count = self.history.current_text().chars().count();
        let undo_depth = self.history.undo_depth();
        let redo_depth = self.history.redo_depth();

        ui.horizontal(|ui| {
            ui.add(egui::Label::new(format!("{char_count} chars")).selectable(false));
            ui.separator();
            ui.add(egui::Label::new(format!("Undo: {undo_depth}")).selectable(false));
            ui.separator();
            ui.add(egui::Label::new(format!("Redo: {redo_depth}")).selectable(false));
        });
    }
}
