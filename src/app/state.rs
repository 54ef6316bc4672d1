use crate::gallery::ImageSet;
use crate::gesture::SwipeTracker;
use crate::preload::{FileFetcher, Fetcher, PreloadMessage, Preloader};
use crate::settings::Settings;
use crate::viewer::{ViewerEvent, ViewerState};

use eframe::egui;
use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::mpsc::Receiver;
use std::sync::Arc;

pub struct GalleryApp {
    pub settings: Settings,
    pub images: ImageSet,
    pub viewer: ViewerState,

    // Preloading
    pub preloader: Preloader,
    pub preload_rx: Receiver<PreloadMessage>,
    /// Images whose fetch failed; they are never requested again
    pub failed: HashSet<PathBuf>,
    /// Set while a gating preload policy is still fetching its startup batch
    pub loading_gate: bool,
    /// Startup fetches whose result has not been applied yet
    pub gate_pending: HashSet<PathBuf>,

    // Events collected while rendering, applied at the end of the frame
    pub pending_events: Vec<ViewerEvent>,
    pub last_viewport_width: Option<f32>,

    pub ctx: egui::Context,
}

impl GalleryApp {
    pub fn new(cc: &eframe::CreationContext<'_>, settings: Settings, images: ImageSet) -> Self {
        egui_extras::install_image_loaders(&cc.egui_ctx);
        crate::ui::main::theme::apply_theme(&cc.egui_ctx);
        Self::with_fetcher(cc.egui_ctx.clone(), settings, images, Arc::new(FileFetcher))
    }

    pub fn with_fetcher(
        ctx: egui::Context,
        settings: Settings,
        images: ImageSet,
        fetcher: Arc<dyn Fetcher>,
    ) -> Self {
        let (preloader, preload_rx) = Preloader::new(fetcher, Some(ctx.clone()));
        let swipe = SwipeTracker::new(settings.swipe_threshold, settings.swipe_trigger);
        let viewer = ViewerState::new(images.len(), settings.mobile_breakpoint, swipe);

        let mut app = Self {
            settings,
            images,
            viewer,
            preloader,
            preload_rx,
            failed: HashSet::new(),
            loading_gate: false,
            gate_pending: HashSet::new(),
            pending_events: Vec::new(),
            last_viewport_width: None,
            ctx,
        };

        app.start_preloading();
        app
    }

    pub fn current_path(&self) -> Option<PathBuf> {
        self.images
            .get(self.viewer.current_index())
            .map(|p| p.to_path_buf())
    }

    pub fn current_uri(&self) -> Option<String> {
        self.images.uri(self.viewer.current_index())
    }
}
