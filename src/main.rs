// src/main.rs
use anyhow::Result;
use eframe::egui;

mod app;
mod chart;
mod file;
mod model;
mod state;
mod ui;

use app::PlotdeckApp;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_title("Plotdeck"),
        ..Default::default()
    };

    eframe::run_native(
        "Plotdeck",
        options,
        Box::new(|_cc| Box::new(PlotdeckApp::new())),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run application: {}", e))
}
