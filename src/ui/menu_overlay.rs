use crate::app::GalleryApp;
use crate::menu::OverlayTarget;
use crate::viewer::ViewerEvent;
use egui::{self, Color32, CornerRadius, Rect, RichText, Vec2};

const CARD_SIZE: Vec2 = Vec2::new(360.0, 300.0);

impl GalleryApp {
    /// Small round toggle at the bottom centre of the window.
    pub(crate) fn render_menu_button(&mut self, ctx: &egui::Context) {
        let diameter = if self.viewer.is_mobile() { 12.0 } else { 10.0 };

        egui::Area::new(egui::Id::new("menu_button"))
            .order(egui::Order::Foreground)
            .anchor(egui::Align2::CENTER_BOTTOM, Vec2::new(0.0, -32.0))
            .show(ctx, |ui| {
                // Larger hit target than the drawn dot on touch screens
                let hit = if self.viewer.is_mobile() { 32.0 } else { 20.0 };
                let (rect, response) = ui.allocate_exact_size(Vec2::splat(hit), egui::Sense::click());
                ui.painter()
                    .circle_filled(rect.center(), diameter / 2.0, Color32::BLACK);

                if response.hovered() {
                    ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
                }
                if response.clicked() {
                    self.push_event(ViewerEvent::ToggleMenu);
                }
            });
    }

    pub(crate) fn render_menu_overlay(&mut self, ctx: &egui::Context) {
        if !self.viewer.menu().is_open() {
            return;
        }

        let screen = ctx.screen_rect();
        egui::Area::new(egui::Id::new("menu_overlay"))
            .order(egui::Order::Middle)
            .fixed_pos(screen.min)
            .show(ctx, |ui| {
                ui.painter()
                    .rect_filled(screen, CornerRadius::ZERO, Color32::from_white_alpha(230));

                // Registered first so the card and its links sit on top of it
                let background = ui.allocate_rect(screen, egui::Sense::click());

                let width = if self.viewer.is_mobile() {
                    (screen.width() - 32.0).min(CARD_SIZE.x)
                } else {
                    CARD_SIZE.x
                };
                let card = Rect::from_center_size(screen.center(), Vec2::new(width, CARD_SIZE.y));
                let card_response = ui.interact(card, ui.id().with("card"), egui::Sense::click());

                ui.put(card, |ui: &mut egui::Ui| {
                    ui.vertical_centered(|ui| self.render_contact_card(ui)).response
                });

                if card_response.clicked() {
                    self.push_event(ViewerEvent::OverlayClick(OverlayTarget::Content));
                } else if background.clicked() {
                    self.push_event(ViewerEvent::OverlayClick(OverlayTarget::Background));
                }
            });
    }

    fn render_contact_card(&self, ui: &mut egui::Ui) {
        let profile = &self.settings.profile;
        ui.visuals_mut().override_text_color = Some(Color32::BLACK);

        ui.add_space(16.0);
        ui.label(RichText::new(&profile.title).size(24.0));
        ui.label(RichText::new(&profile.name).size(20.0));
        ui.label(RichText::new(profile.location.to_uppercase()).size(12.0));

        ui.add_space(28.0);
        ui.label(RichText::new("SAY HELLO").size(12.0));
        if ui.link(RichText::new(&profile.email).size(13.0)).clicked() {
            open_link(&profile.mailto());
        }

        ui.add_space(28.0);
        ui.label(RichText::new("SOCIAL MEDIA").size(12.0));
        ui.horizontal(|ui| {
            // Centre the row of links under the heading
            let row_width: f32 = profile.links.len() as f32 * 110.0;
            ui.add_space(((ui.available_width() - row_width) / 2.0).max(0.0));
            for link in &profile.links {
                let [r, g, b] = link.color;
                let text = RichText::new(&link.label)
                    .size(13.0)
                    .color(Color32::from_rgb(r, g, b));
                if ui.link(text).clicked() {
                    open_link(&link.url);
                }
                ui.add_space(24.0);
            }
        });
    }
}

fn open_link(target: &str) {
    if let Err(e) = open::that(target) {
        tracing::warn!(target, error = %e, "failed to open link");
    }
}
