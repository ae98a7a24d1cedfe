#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]
use eframe::egui;

mod app;
mod config;
mod error;
mod format;
mod request;

use app::ConsoleApp;
use config::ConsoleConfig;

fn main() -> eframe::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = ConsoleConfig::default();
    let title = config.title.clone();
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(title.as_str())
            .with_inner_size(config.inner_size),
        ..eframe::NativeOptions::default()
    };

    eframe::run_native(
        &title,
        native_options,
        Box::new(|_cc| Ok(Box::new(ConsoleApp::new(config)))),
    )
}
