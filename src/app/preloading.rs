use super::GalleryApp;
use crate::gallery::image_uri;
use egui::load::BytesPoll;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

impl GalleryApp {
    /// Issues the policy's startup batch plus the first image.
    pub fn start_preloading(&mut self) {
        let total = self.images.len();
        let mut indices = vec![self.viewer.current_index()];
        indices.extend(self.settings.preload_policy.on_startup(total));
        indices.extend(
            self.settings
                .preload_policy
                .on_index_change(self.viewer.current_index(), total),
        );
        let requested = self.request_indices(&indices);

        if self.settings.preload_policy.gates_display() {
            self.gate_pending = requested.into_iter().collect();
            self.loading_gate = !self.gate_pending.is_empty();
        }
    }

    pub fn preload_around_current(&mut self) {
        let current = self.viewer.current_index();
        let mut indices = vec![current];
        indices.extend(
            self.settings
                .preload_policy
                .on_index_change(current, self.images.len()),
        );
        self.request_indices(&indices);
    }

    /// Bytes for `path` are already held by egui's loader cache.
    pub fn is_resident(&self, path: &Path) -> bool {
        matches!(
            self.ctx.try_load_bytes(&image_uri(path)),
            Ok(BytesPoll::Ready { .. })
        )
    }

    /// Requests every listed image that is neither resident nor known broken.
    /// Each returned path gets exactly one result message.
    fn request_indices(&mut self, indices: &[usize]) -> Vec<PathBuf> {
        let mut seen = HashSet::new();
        let paths: Vec<PathBuf> = indices
            .iter()
            .filter(|&&i| seen.insert(i))
            .filter_map(|&i| self.images.get(i))
            .filter(|path| !self.failed.contains(*path) && !self.is_resident(path))
            .map(Path::to_path_buf)
            .collect();
        self.preloader.request(paths.iter().cloned());
        paths
    }
}
