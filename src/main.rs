mod app;
mod errors;
mod gallery;
mod gesture;
mod logging;
mod menu;
mod navigation;
mod preload;
mod settings;
mod ui;
mod viewer;

#[cfg(test)]
mod tests;

use anyhow::Context as _;
use app::GalleryApp;
use eframe::egui;
use gallery::ImageSet;
use settings::Settings;
use std::path::PathBuf;

fn main() -> anyhow::Result<()> {
    let mut debug = false;
    let mut target: Option<PathBuf> = None;
    for arg in std::env::args().skip(1) {
        if arg == "--debug" {
            debug = true;
        } else {
            target = Some(PathBuf::from(arg));
        }
    }

    let loaded = Settings::load();
    let debug = debug || loaded.as_ref().is_ok_and(|s| s.debug_logging);
    logging::init_tracing(debug);

    let settings = loaded.unwrap_or_else(|e| {
        tracing::warn!(code = e.error_code(), "failed to read settings, using defaults: {}", e);
        Settings::default()
    });

    let images = match target {
        // A site root keeps the fixed `image/1 (k).jpg` layout
        Some(path) if path.join("image").is_dir() => ImageSet::portfolio(&path),
        Some(path) => ImageSet::scan(&path)
            .with_context(|| format!("cannot open gallery at {}", path.display()))?,
        None => ImageSet::portfolio(&settings.image_root),
    };
    tracing::info!(count = images.len(), policy = ?settings.preload_policy, "starting gallery");

    let (width, height) = settings.window_size;
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(format!("{} | Visual Artist", settings.profile.name))
            .with_inner_size([width, height])
            .with_min_inner_size([320.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "folio",
        native_options,
        Box::new(move |cc| Ok(Box::new(GalleryApp::new(cc, settings, images)))),
    )
    .map_err(|e| anyhow::anyhow!("failed to run window: {}", e))
}
