use crate::app::GalleryApp;
use crate::gallery::image_uri;
use crate::preload::PreloadMessage;

impl GalleryApp {
    pub fn process_preload_messages(&mut self) {
        // Limit the number of messages processed per frame to prevent UI blocking
        let max_messages_per_frame = 10;
        let mut messages_processed = 0;

        while messages_processed < max_messages_per_frame {
            match self.preload_rx.try_recv() {
                Ok(msg) => {
                    self.handle_preload_message(msg);
                    messages_processed += 1;
                }
                Err(_) => break,
            }
        }

        if messages_processed == max_messages_per_frame {
            self.ctx.request_repaint();
        }

        // The gate follows applied results; the in-flight set empties before
        // the last messages are delivered.
        if self.loading_gate && self.gate_pending.is_empty() {
            tracing::debug!("startup preload finished");
            self.loading_gate = false;
        }
    }

    fn handle_preload_message(&mut self, msg: PreloadMessage) {
        self.gate_pending.remove(msg.path());
        match msg {
            PreloadMessage::Loaded { path, bytes } => {
                tracing::debug!(path = %path.display(), size = bytes.len(), "preloaded image");
                self.ctx.include_bytes(image_uri(&path), bytes);
            }
            PreloadMessage::Failed { path, error } => {
                tracing::warn!(path = %path.display(), code = error.error_code(), "preload failed: {}", error);
                self.failed.insert(path);
            }
        }
    }
}
