#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

/// A minimal text editor with snapshot-based undo/redo.
#[derive(Parser, Debug)]
#[command(name = "undo-pad", version, about)]
struct Cli {
    /// Start with this text already entered (undoable back to empty).
    #[arg(long)]
    text: Option<String>,

    /// Config file to use instead of the default location.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    tracing::info!("Starting undo-pad");

    let startup_args = undo_pad_ui::StartupArgs {
        initial_text: cli.text,
        config_path: cli.config,
    };

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 600.0])
            .with_min_inner_size([400.0, 300.0]),
        ..Default::default()
    };

    eframe::run_native(
        "undo-pad",
        native_options,
        Box::new(move |cc| Ok(Box::new(undo_pad_ui::App::new(cc, startup_args)))),
    )
    .map_err(|e| anyhow::anyhow!("eframe error: {e}"))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_text_and_config() {
        let cli = Cli::parse_from(["undo-pad", "--text", "hello", "--config", "/tmp/pad.json"]);
        assert_eq!(cli.text.as_deref(), Some("hello"));
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/pad.json")));
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["undo-pad"]);
        assert!(cli.text.is_none());
        assert!(cli.config.is_none());
    }
}
