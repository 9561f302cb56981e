use crate::PaintApp;

pub fn canvas_panel(app: &mut PaintApp, ctx: &egui::Context) {
    egui::CentralPanel::default()
        .frame(egui::Frame::none())
        .show(ctx, |ui| {
            // Create a painting area that fills the remaining space
            let available_size = ui.available_size();
            let (response, painter) = ui.allocate_painter(available_size, egui::Sense::drag());
            let canvas_rect = response.rect;

            app.handle_input(ctx, canvas_rect);

            if app.state().is_drawing() {
                ctx.set_cursor_icon(egui::CursorIcon::Crosshair);
            }

            app.renderer().render(&painter, canvas_rect, app.scene());
        });
}
