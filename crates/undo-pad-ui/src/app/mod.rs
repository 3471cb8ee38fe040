//! Top-level application tying together the editor, history buttons, and status bar.

mod editing;
mod shortcuts;
mod status_bar;

use std::path::PathBuf;

use eframe::egui;

use undo_pad_config::AppConfig;
use undo_pad_history::EditHistory;

/// Arguments passed from the command line to the application.
#[derive(Debug, Clone, Default)]
pub struct StartupArgs {
    /// If set, the editor starts with this text recorded as its first edit.
    pub initial_text: Option<String>,
    /// Config file to use instead of [`AppConfig::config_path`].
    pub config_path: Option<PathBuf>,
}

/// The editor application.
///
/// `history` owns the buffer. `display_text` is the copy bound to the text
/// area and is overwritten from `history` after every operation.
pub struct App {
    pub history: EditHistory,
    pub display_text: String,
    pub config: AppConfig,
}

impl App {
    /// Creates the app, loading config from disk.
    pub fn new(_cc: &eframe::CreationContext<'_>, args: StartupArgs) -> Self {
        let config_path = args
            .config_path
            .clone()
            .unwrap_or_else(AppConfig::config_path);
        tracing::debug!("Loading config from {}", config_path.display());
        let config = AppConfig::load_or_create(&config_path);
        Self::from_config(config, args)
    }

    /// Creates the app from an already-loaded config.
    pub fn from_config(config: AppConfig, args: StartupArgs) -> Self {
        let mut history = EditHistory::with_config(config.history_config());
        if let Some(text) = args.initial_text.as_deref() {
            history.on_change(text);
        }
        let display_text = history.current_text().to_string();
        Self {
            history,
            display_text,
            config,
        }
    }

    /// Handles a user edit reported by the text area.
    pub fn handle_text_change(&mut self, new_text: &str) {
        self.history.on_change(new_text);
        self.sync_display();
    }

    pub fn undo(&mut self) {
        if self.history.can_undo() {
            self.history.undo();
            self.sync_display();
        }
    }

    pub fn redo(&mut self) {
        if self.history.can_redo() {
            self.history.redo();
            self.sync_display();
        }
    }

    /// Copies the buffer into the display copy. Never reports a change back.
    fn sync_display(&mut self) {
        self.display_text.clear();
        self.display_text.push_str(self.history.current_text());
    }
}

impl eframe::App for App {
    fn ui(&mut self, ui: &mut egui::Ui, _frame: &mut eframe::Frame) {
        // Must run before the text area so its built-in undoer never sees the keys
        let ctx = ui.ctx().clone();
        self.handle_history_shortcuts(&ctx);

        egui::TopBottomPanel::bottom("status_bar")
            .max_height(24.0)
            .show_inside(ui, |ui| {
                self.show_status_bar(ui);
            });

        egui::CentralPanel::default().show_inside(ui, |ui| {
            ui.heading("Text editor");
            ui.label("Simple text editor that can undo/redo");
            ui.add_space(8.0);
            self.show_editor(ui);
            ui.add_space(8.0);
            self.show_history_buttons(ui);
        });
    }
}
