use crate::app::GalleryApp;
use crate::navigation::Direction;
use crate::viewer::ViewerEvent;

impl GalleryApp {
    pub fn handle_keyboard(&mut self, ctx: &egui::Context) {
        let (left, right, escape) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::ArrowLeft),
                i.key_pressed(egui::Key::ArrowRight),
                i.key_pressed(egui::Key::Escape),
            )
        });

        if escape {
            self.push_event(ViewerEvent::CloseMenu);
        }
        if left {
            self.push_event(ViewerEvent::Key(Direction::Left));
        }
        if right {
            self.push_event(ViewerEvent::Key(Direction::Right));
        }
    }
}
