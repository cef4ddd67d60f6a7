// src/bin/hype_simulator.rs

use eframe::egui;
use hype_simulator::{HypeApp, config, logging};

fn main() -> Result<(), eframe::Error> {
    logging::setup_logging(config::DEFAULT_LOG_FILTER);

    let app_state = HypeApp::with_sample_data();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config::WINDOW_SIZE)
            .with_title(config::WINDOW_TITLE),
        ..Default::default()
    };

    eframe::run_native(
        config::WINDOW_TITLE,
        native_options,
        Box::new(|_cc| Box::new(app_state)),
    )
}
