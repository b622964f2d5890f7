mod api;
mod app;
mod config;
mod error;
mod extract;
mod utils;

use app::BulkMailer;
use config::BackendConfig;
use eframe::CreationContext;

fn main() {
    env_logger::init();

    let config = BackendConfig::load();
    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([720.0, 720.0])
            .with_min_inner_size([480.0, 560.0]),
        ..Default::default()
    };

    if let Err(e) = eframe::run_native(
        "Email Checker & Bulk Sender",
        options,
        Box::new(move |cc: &CreationContext| Box::new(BulkMailer::new(cc, config))),
    ) {
        log::error!("Failed to start UI: {}", e);
    }
}
