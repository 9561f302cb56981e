use egui::Color32;

use crate::PaintApp;
use crate::brush::BrushType;
use crate::components::BrushButton;

/// Fill color of each brush button: every button at its base color, then
/// the active one overridden with its highlight
pub fn button_colors(active: BrushType) -> [(BrushType, Color32); 3] {
    let mut colors = BrushType::ALL.map(|brush| (brush, brush.button_color()));
    for (brush, color) in &mut colors {
        if *brush == active {
            *color = brush.highlight_color();
        }
    }
    colors
}

pub fn toolbar_panel(app: &mut PaintApp, ctx: &egui::Context) {
    egui::SidePanel::left("toolbar_panel")
        .resizable(false)
        .default_width(160.0)
        .show(ctx, |ui| {
            ui.heading("Brushes");
            ui.add_space(4.0);

            let active = app.state().brush();
            for (brush, fill) in button_colors(active) {
                if BrushButton::new(brush, fill, brush == active).show(ui).clicked() {
                    app.select_brush(brush);
                }
                ui.add_space(4.0);
            }

            ui.separator();

            ui.label("Brush size");
            let range = app.config().brush_size_range();
            ui.add(egui::Slider::new(app.state_mut().brush_size_mut(), range));

            ui.separator();

            if ui.button("Clear").clicked() {
                app.clear_canvas();
            }

            ui.separator();
            ui.label(format!("Shapes: {}", app.scene().len()));
            if let Some(max) = app.scene().max_shapes() {
                ui.label(format!("Limit: {}", max));
            }
        });
}
