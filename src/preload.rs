use crate::errors::{GalleryError, Result};
use crate::navigation::wrap_offset;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::{Arc, Mutex, MutexGuard};
use std::thread;

/// Which images are fetched ahead of being displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PreloadPolicy {
    /// The first `count` images, once at startup.
    Leading { count: usize },
    /// Offsets `-radius..=radius` except the current image, on every index change.
    Ring { radius: usize },
    /// Every image at startup; the view shows a loading screen until all resolve.
    All,
    /// Offsets `-radius..=radius` including the current image, on every index change.
    Window { radius: usize },
}

impl Default for PreloadPolicy {
    fn default() -> Self {
        PreloadPolicy::Window { radius: 1 }
    }
}

impl PreloadPolicy {
    pub fn on_startup(&self, total: usize) -> Vec<usize> {
        match *self {
            PreloadPolicy::Leading { count } => (0..count.min(total)).collect(),
            PreloadPolicy::All => (0..total).collect(),
            PreloadPolicy::Ring { .. } | PreloadPolicy::Window { .. } => Vec::new(),
        }
    }

    pub fn on_index_change(&self, current: usize, total: usize) -> Vec<usize> {
        match *self {
            PreloadPolicy::Ring { radius } => ring(current, radius, total, false),
            PreloadPolicy::Window { radius } => ring(current, radius, total, true),
            PreloadPolicy::Leading { .. } | PreloadPolicy::All => Vec::new(),
        }
    }

    pub fn gates_display(&self) -> bool {
        matches!(self, PreloadPolicy::All)
    }
}

fn ring(current: usize, radius: usize, total: usize, include_current: bool) -> Vec<usize> {
    if total == 0 {
        return Vec::new();
    }
    // Past `total` every offset repeats an index already covered
    let radius = radius.min(total) as isize;
    let mut seen = HashSet::new();
    (-radius..=radius)
        .filter(|&offset| include_current || offset != 0)
        .map(|offset| wrap_offset(current, offset, total))
        // Small sets wrap onto themselves
        .filter(|&index| (include_current || index != current) && seen.insert(index))
        .collect()
}

/// Source of image bytes for the preloader.
pub trait Fetcher: Send + Sync + 'static {
    fn fetch(&self, path: &Path) -> Result<Vec<u8>>;
}

/// Reads images from the local filesystem.
pub struct FileFetcher;

impl Fetcher for FileFetcher {
    fn fetch(&self, path: &Path) -> Result<Vec<u8>> {
        let bytes = std::fs::read(path).map_err(|e| GalleryError::from_io(path.to_path_buf(), e))?;
        if image::guess_format(&bytes).is_err() {
            return Err(GalleryError::UnsupportedFormat {
                path: path.to_path_buf(),
            });
        }
        Ok(bytes)
    }
}

pub enum PreloadMessage {
    Loaded { path: PathBuf, bytes: Vec<u8> },
    Failed { path: PathBuf, error: GalleryError },
}

impl PreloadMessage {
    pub fn path(&self) -> &Path {
        match self {
            PreloadMessage::Loaded { path, .. } | PreloadMessage::Failed { path, .. } => path,
        }
    }
}

/// Fire-and-forget background fetches.
///
/// Every fetch runs on its own thread and reports exactly one
/// [`PreloadMessage`]. The only shared state is the set of locators
/// currently being fetched, used to skip duplicate requests. An entry
/// leaves the set before its message is sent, so an empty set does not
/// mean every result has been received; count messages for that.
pub struct Preloader {
    fetcher: Arc<dyn Fetcher>,
    in_flight: Arc<Mutex<HashSet<PathBuf>>>,
    tx: Sender<PreloadMessage>,
    repaint: Option<egui::Context>,
}

impl Preloader {
    pub fn new(
        fetcher: Arc<dyn Fetcher>,
        repaint: Option<egui::Context>,
    ) -> (Self, Receiver<PreloadMessage>) {
        let (tx, rx) = channel();
        let preloader = Self {
            fetcher,
            in_flight: Arc::new(Mutex::new(HashSet::new())),
            tx,
            repaint,
        };
        (preloader, rx)
    }

    /// Starts a fetch for every path not already in flight. Returns how many
    /// fetches were started.
    pub fn request<I>(&self, paths: I) -> usize
    where
        I: IntoIterator<Item = PathBuf>,
    {
        let mut started = 0;
        for path in paths {
            if !lock(&self.in_flight).insert(path.clone()) {
                tracing::trace!(path = %path.display(), "already in flight, skipping preload");
                continue;
            }
            self.spawn_fetch(path);
            started += 1;
        }
        if started > 0 {
            tracing::debug!(count = started, "starting preload of images");
        }
        started
    }

    pub fn in_flight_count(&self) -> usize {
        lock(&self.in_flight).len()
    }

    fn spawn_fetch(&self, path: PathBuf) {
        let fetcher = Arc::clone(&self.fetcher);
        let in_flight = Arc::clone(&self.in_flight);
        let tx = self.tx.clone();
        let repaint = self.repaint.clone();

        thread::spawn(move || {
            let msg = match fetcher.fetch(&path) {
                Ok(bytes) => PreloadMessage::Loaded { path, bytes },
                Err(error) => PreloadMessage::Failed { path, error },
            };
            lock(&in_flight).remove(msg.path());
            // The receiver is gone once the window closes; late results are dropped.
            let _ = tx.send(msg);
            if let Some(ctx) = repaint {
                ctx.request_repaint();
            }
        });
    }
}

fn lock(set: &Mutex<HashSet<PathBuf>>) -> MutexGuard<'_, HashSet<PathBuf>> {
    set.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
