use crate::app::GalleryApp;
use egui::{self, Color32, CornerRadius, Rect, Stroke, StrokeKind, Vec2};

/// Padding around the image on mobile layouts.
const MOBILE_PADDING: f32 = 16.0;

/// Where the current image is drawn inside `screen`.
///
/// Mobile layouts use the whole screen minus padding; desktop layouts a
/// centered box scaled by `desktop_scale`.
pub fn carousel_rect(screen: Rect, is_mobile: bool, desktop_scale: f32) -> Rect {
    if is_mobile {
        screen.shrink(MOBILE_PADDING)
    } else {
        Rect::from_center_size(screen.center(), screen.size() * desktop_scale)
    }
}

impl GalleryApp {
    pub fn render_main_view(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(Color32::WHITE))
            .show(ctx, |ui| {
                let screen = ui.max_rect();

                if self.loading_gate {
                    self.render_loading_screen(ui, screen);
                    return;
                }

                self.handle_click_zones(ui, screen);

                let rect = carousel_rect(screen, self.viewer.is_mobile(), self.settings.desktop_scale);
                self.render_current_image(ui, rect);
            });
    }

    fn render_current_image(&mut self, ui: &mut egui::Ui, rect: Rect) {
        let (Some(path), Some(uri)) = (self.current_path(), self.current_uri()) else {
            return;
        };

        if self.is_resident(&path) {
            ui.put(
                rect,
                egui::Image::new(uri)
                    .maintain_aspect_ratio(true)
                    .fit_to_exact_size(rect.size()),
            );
        } else if self.failed.contains(&path) {
            draw_broken_image(ui, rect);
        } else {
            ui.put(rect, egui::Spinner::new().size(24.0).color(Color32::GRAY));
        }
    }

    fn render_loading_screen(&self, ui: &mut egui::Ui, screen: Rect) {
        let total = self.images.len();
        let done = total.saturating_sub(self.preloader.in_flight_count());
        ui.put(
            Rect::from_center_size(screen.center(), Vec2::splat(32.0)),
            egui::Spinner::new().size(32.0).color(Color32::BLACK),
        );
        ui.painter().text(
            screen.center() + Vec2::new(0.0, 40.0),
            egui::Align2::CENTER_CENTER,
            format!("{} / {}", done, total),
            egui::FontId::proportional(14.0),
            Color32::DARK_GRAY,
        );
    }
}

fn draw_broken_image(ui: &egui::Ui, rect: Rect) {
    let placeholder = Rect::from_center_size(rect.center(), Vec2::new(96.0, 72.0));
    let painter = ui.painter();
    painter.rect_stroke(
        placeholder,
        CornerRadius::same(4),
        Stroke::new(1.0, Color32::LIGHT_GRAY),
        StrokeKind::Inside,
    );
    painter.text(
        placeholder.center(),
        egui::Align2::CENTER_CENTER,
        "⚠",
        egui::FontId::proportional(24.0),
        Color32::GRAY,
    );
}
