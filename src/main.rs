#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use std::path::PathBuf;

// Application shell and handlers
mod app;

// Application constants
mod constants;

// Data access (catalog, per-movie corpus)
mod data;

// Error handling
mod error;

// Placeholder predictor and rolling history
mod predict;

// Application state modules
mod state;

// Word statistics and word-cloud layout
mod text;

// Panels and dialogs
mod ui;

use data::Catalog;

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let catalog_path = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(constants::files::CATALOG_FILE));
    let comments_dir = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(constants::files::COMMENTS_DIR));

    // Boot is fail-fast: no catalog, no dashboard
    let catalog = match Catalog::load(&catalog_path) {
        Ok(catalog) => catalog,
        Err(e) => {
            log::error!(
                "failed to load catalog {}: {}",
                catalog_path.display(),
                e.user_message()
            );
            std::process::exit(1);
        }
    };
    log::info!(
        "loaded catalog {} ({} rows, {} columns)",
        catalog_path.display(),
        catalog.height(),
        catalog.width()
    );

    let app = match app::Marquee::new(catalog, comments_dir) {
        Ok(app) => app,
        Err(e) => {
            log::error!("failed to start: {}", e.user_message());
            std::process::exit(1);
        }
    };

    let options = eframe::NativeOptions::default();
    eframe::run_native(
        "Marquee - Box Office Dashboard",
        options,
        Box::new(|_| Ok(Box::new(app))),
    )
    .unwrap();
}
