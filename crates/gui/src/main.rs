//! Bench Map Desktop GUI
//!
//! Interactive map of scored park benches with a synchronized sidebar list.

mod app;
mod dock;
mod io;
mod menu;
mod panels;
mod render;
mod state;

use app::BenchMapApp;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Bench Map — Scored Benches")
            .with_inner_size([1280.0, 820.0])
            .with_min_inner_size([800.0, 600.0]),
        renderer: eframe::Renderer::Wgpu,
        ..Default::default()
    };

    eframe::run_native(
        "Bench Map",
        native_options,
        Box::new(|cc| Ok(Box::new(BenchMapApp::new(cc)))),
    )
}
