use egui_kittest::Harness;
use undo_pad_config::AppConfig;
use undo_pad_ui::{App, StartupArgs};

/// Creates a standard test harness with a default-config app at 800x600.
pub fn create_harness() -> Harness<'static, App> {
    create_harness_with(AppConfig::default(), StartupArgs::default())
}

/// Creates a harness without touching the on-disk config.
pub fn create_harness_with(config: AppConfig, args: StartupArgs) -> Harness<'static, App> {
    Harness::builder()
        .with_size(egui::Vec2::new(800.0, 600.0))
        .build_eframe(move |_cc| App::from_config(config.clone(), args.clone()))
}
