use crate::app::GalleryApp;

impl eframe::App for GalleryApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Process preload results
        self.process_preload_messages();

        self.observe_viewport_width(ctx.screen_rect().width());

        // Handle keyboard and touch input
        self.handle_keyboard(ctx);
        self.handle_touch_events(ctx);

        self.render_main_view(ctx);
        if !self.loading_gate {
            self.render_menu_overlay(ctx);
            self.render_menu_button(ctx);
        }

        // Apply events deferred while rendering
        self.apply_pending_events();
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.settings.save();
    }
}
