mod app;
mod state;
mod ui;

use std::path::Path;

use app::TlCompareApp;
use eframe::egui;
use tl_compare::config::{Settings, SETTINGS_FILE};

fn main() -> eframe::Result {
    env_logger::init();

    let (settings, settings_error) = match Settings::load(Path::new(SETTINGS_FILE)) {
        Ok(settings) => (settings, None),
        Err(e) => {
            log::error!("{e}; falling back to defaults");
            (Settings::default(), Some(format!("Error: {e}")))
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 900.0])
            .with_min_inner_size([700.0, 500.0]),
        ..Default::default()
    };

    eframe::run_native(
        "TL Compare – Acoustic Panel Comparison",
        options,
        Box::new(|cc| {
            // Install image loaders so egui can render the panel photos.
            egui_extras::install_image_loaders(&cc.egui_ctx);
            let mut app = TlCompareApp::new(settings);
            if settings_error.is_some() {
                app.state.status_message = settings_error;
            }
            Ok(Box::new(app))
        }),
    )
}
