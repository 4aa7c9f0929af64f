mod app;
mod chart;
mod color;
mod data;
mod state;
mod ui;
mod view;

use std::path::PathBuf;

use app::CavyDashApp;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    // Data directory: first CLI argument, defaulting to the working dir.
    let data_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Cavy Dash – Guinea Pig Dashboard",
        options,
        Box::new(move |cc| {
            // Install image loaders so egui can render the background.
            egui_extras::install_image_loaders(&cc.egui_ctx);
            Ok(Box::new(CavyDashApp::new(data_dir)))
        }),
    )
}
