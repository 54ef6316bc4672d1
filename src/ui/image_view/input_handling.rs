use crate::app::GalleryApp;
use crate::navigation::Direction;
use crate::viewer::ViewerEvent;
use egui::{self, Rect, TouchPhase};

impl GalleryApp {
    /// Left and right halves of the screen step the carousel on desktop.
    pub(crate) fn handle_click_zones(&mut self, ui: &mut egui::Ui, screen: Rect) {
        if !self.viewer.click_zones_enabled() {
            return;
        }

        let response = ui.interact(screen, ui.id().with("click_zones"), egui::Sense::click());

        if let Some(pos) = response.hover_pos() {
            let icon = if pos.x < screen.center().x {
                egui::CursorIcon::ResizeWest
            } else {
                egui::CursorIcon::ResizeEast
            };
            ui.ctx().set_cursor_icon(icon);
        }

        if response.clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                let direction = if pos.x < screen.center().x {
                    Direction::Left
                } else {
                    Direction::Right
                };
                self.push_event(ViewerEvent::ClickZone(direction));
            }
        }
    }

    /// Forwards raw touch events to the swipe tracker while the menu is closed.
    pub(crate) fn handle_touch_events(&mut self, ctx: &egui::Context) {
        if self.viewer.menu().is_open() {
            return;
        }

        let events = ctx.input(|i| i.events.clone());
        for event in events {
            if let egui::Event::Touch { phase, pos, .. } = event {
                let viewer_event = match phase {
                    TouchPhase::Start => ViewerEvent::TouchStart { x: pos.x },
                    TouchPhase::Move => ViewerEvent::TouchMove { x: pos.x },
                    TouchPhase::End => ViewerEvent::TouchEnd { x: pos.x },
                    TouchPhase::Cancel => ViewerEvent::TouchCancel,
                };
                self.push_event(viewer_event);
            }
        }
    }
}
