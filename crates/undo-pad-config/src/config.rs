/// Application configuration: load, save, and sanitize.
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use undo_pad_history::HistoryConfig;

/// Environment variable that overrides the config file location.
pub const CONFIG_PATH_ENV: &str = "UNDO_PAD_CONFIG";

/// Top-level application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub font_size: f32,
    /// Visible height of the text area, in rows.
    pub editor_rows: usize,
    /// Max undo steps kept. `None` (or 0 in the file) keeps everything.
    pub max_history_depth: Option<usize>,
    /// Record edits that leave the text unchanged as empty undo steps.
    pub record_unchanged_edits: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            font_size: 16.0,
            editor_rows: 10,
            max_history_depth: None,
            record_unchanged_edits: false,
        }
    }
}

impl AppConfig {
    /// Returns the config file path.
    ///
    /// Resolution order:
    /// 1. `UNDO_PAD_CONFIG` environment variable
    /// 2. `undo-pad.json` next to the executable
    pub fn config_path() -> PathBuf {
        if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
            return PathBuf::from(path);
        }
        std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|d| d.join("undo-pad.json")))
            .unwrap_or_else(|| PathBuf::from("undo-pad.json"))
    }

    /// Reads the config at `path`, or writes a default one there if none exists.
    ///
    /// Never fails: an unreadable or unparsable file yields defaults and is
    /// left untouched so the user can repair it.
    pub fn load_or_create(path: &Path) -> Self {
        if !path.exists() {
            let config = Self::default();
            if let Err(e) = config.save(path) {
                tracing::warn!("Could not write default config to {}: {e}", path.display());
            }
            return config;
        }

        let parsed = std::fs::read_to_string(path)
            .map_err(|e| e.to_string())
            .and_then(|contents| {
                serde_json::from_str::<AppConfig>(&contents).map_err(|e| e.to_string())
            });
        match parsed {
            Ok(mut config) => {
                config.sanitize();
                config
            }
            Err(e) => {
                tracing::warn!("Ignoring config at {}: {e}", path.display());
                Self::default()
            }
        }
    }

    /// Saves config to `path` as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> Result<(), std::io::Error> {
        let json = serde_json::to_string_pretty(self).map_err(std::io::Error::other)?;
        std::fs::write(path, json)
    }

    /// Clamps values to valid ranges.
    pub fn sanitize(&mut self) {
        self.font_size = self.font_size.clamp(6.0, 72.0);
        self.editor_rows = self.editor_rows.clamp(1, 200);
        if self.max_history_depth == Some(0) {
            self.max_history_depth = None;
        }
    }

    /// History settings derived from this config.
    pub fn history_config(&self) -> HistoryConfig {
        HistoryConfig {
            max_history_depth: self.max_history_depth,
            record_unchanged: self.record_unchanged_edits,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert!((config.font_size - 16.0).abs() < f32::EPSILON);
        assert_eq!(config.editor_rows, 10);
        assert_eq!(config.max_history_depth, None);
        assert!(!config.record_unchanged_edits);
    }

    #[test]
    fn test_sanitize_clamps_font_size() {
        let mut config = AppConfig::default();
        config.font_size = 2.0;
        config.sanitize();
        assert!((config.font_size - 6.0).abs() < f32::EPSILON);

        config.font_size = 100.0;
        config.sanitize();
        assert!((config.font_size - 72.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_sanitize_clamps_editor_rows() {
        let mut config = AppConfig::default();
        config.editor_rows = 0;
        config.sanitize();
        assert_eq!(config.editor_rows, 1);

        config.editor_rows = 10_000;
        config.sanitize();
        assert_eq!(config.editor_rows, 200);
    }

    #[test]
    fn test_sanitize_zero_depth_means_unbounded() {
        let mut config = AppConfig::default();
        config.max_history_depth = Some(0);
        config.sanitize();
        assert_eq!(config.max_history_depth, None);

        config.max_history_depth = Some(50);
        config.sanitize();
        assert_eq!(config.max_history_depth, Some(50));
    }

    #[test]
    fn test_history_config_mapping() {
        let config = AppConfig {
            max_history_depth: Some(25),
            record_unchanged_edits: true,
            ..AppConfig::default()
        };
        let history = config.history_config();
        assert_eq!(history.max_history_depth, Some(25));
        assert!(history.record_unchanged);
    }

    #[test]
    fn test_serde_round_trip() {
        let mut config = AppConfig::default();
        config.max_history_depth = Some(7);
        let json = serde_json::to_string_pretty(&config).unwrap();
        let parsed: AppConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.max_history_depth, Some(7));
        assert_eq!(parsed.editor_rows, config.editor_rows);
    }

    #[test]
    fn test_missing_fields_get_defaults() {
        let json = r#"{"font_size": 20.0}"#;
        let parsed: AppConfig = serde_json::from_str(json).unwrap();
        assert!((parsed.font_size - 20.0).abs() < f32::EPSILON);
        assert_eq!(parsed.editor_rows, 10);
        assert_eq!(parsed.max_history_depth, None);
    }
}
