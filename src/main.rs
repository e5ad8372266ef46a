#![warn(clippy::all, rust_2018_idioms)]

use doodle_canvas::{CanvasConfig, DoodleApp};

fn main() -> eframe::Result {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    let config = match std::env::args().nth(1) {
        Some(path) => CanvasConfig::load(&path).unwrap_or_else(|e| {
            log::warn!("Using default config, could not load {path}: {e}");
            CanvasConfig::default()
        }),
        None => CanvasConfig::default(),
    };

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Doodle")
            .with_inner_size([config.width as f32 + 240.0, config.height as f32 + 32.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Doodle",
        native_options,
        Box::new(|cc| create_app(cc, config)),
    )
}

fn create_app(
    cc: &eframe::CreationContext<'_>,
    config: CanvasConfig,
) -> Result<Box<dyn eframe::App>, Box<dyn std::error::Error + Send + Sync>> {
    Ok(Box::new(DoodleApp::new(cc, config)?))
}
