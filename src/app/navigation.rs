use super::GalleryApp;
use crate::viewer::{Outcome, ViewerEvent};

impl GalleryApp {
    /// Queues an event; queued events are applied once the frame is drawn.
    pub fn push_event(&mut self, event: ViewerEvent) {
        self.pending_events.push(event);
    }

    pub fn apply_pending_events(&mut self) {
        for event in std::mem::take(&mut self.pending_events) {
            self.dispatch(event);
        }
    }

    pub fn dispatch(&mut self, event: ViewerEvent) -> Outcome {
        let outcome = self.viewer.handle(event);
        if outcome.index_changed {
            self.preload_around_current();
        }
        if outcome.menu_changed {
            tracing::debug!(menu = ?self.viewer.menu(), "menu toggled");
        }
        if outcome.layout_changed {
            tracing::debug!(is_mobile = self.viewer.is_mobile(), "layout changed");
        }
        outcome
    }

    /// Feeds the viewport width in; only actual changes reach the viewer.
    pub fn observe_viewport_width(&mut self, width: f32) {
        if self.last_viewport_width == Some(width) {
            return;
        }
        self.last_viewport_width = Some(width);
        self.dispatch(ViewerEvent::Resize { width });
    }
}
