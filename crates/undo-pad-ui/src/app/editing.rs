//! The text area and the Undo/Redo buttons.

use eframe::egui;

use super::App;

impl App {
    /// Shows the multiline text area and forwards user edits to the history.
    pub(crate) fn show_editor(&mut self, ui: &mut egui::Ui) {
        let response = ui.add(
            egui::TextEdit::multiline(&mut self.display_text)
                .id_salt("text-editor")
                .font(egui::FontId::monospace(self.config.font_size))
                .desired_rows(self.config.editor_rows)
                .desired_width(f32::INFINITY),
        );

        if response.changed() {
            let new_text = self.display_text.clone();
            self.handle_text_change(&new_text);
        }
    }

    pub(crate) fn show_history_buttons(&mut self, ui: &mut egui::Ui) {
        let can_undo = self.history.can_undo();
        let can_redo = self.history.can_redo();

        ui.horizontal(|ui| {
            if ui
                .add_enabled(can_undo, egui::Button::new("< Undo"))
                .clicked()
            {
                self.undo();
            }
            if ui
                .add_enabled(can_redo, egui::Button::new("Redo >"))
                .clicked()
            {
                self.redo();
            }
        });
    }
}
