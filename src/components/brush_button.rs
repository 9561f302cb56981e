use eframe::egui;

use crate::brush::BrushType;

/// A toolbar button filled with its brush's color
pub struct BrushButton {
    pub brush: BrushType,
    pub fill: egui::Color32,
    pub selected: bool,
}

impl BrushButton {
    pub fn new(brush: BrushType, fill: egui::Color32, selected: bool) -> Self {
        Self {
            brush,
            fill,
            selected,
        }
    }

    pub fn show(&self, ui: &mut egui::Ui) -> egui::Response {
        let button_size = egui::vec2(ui.available_width(), 36.0);
        let (rect, response) = ui.allocate_exact_size(button_size, egui::Sense::click());

        if ui.is_rect_visible(rect) {
            let fill = if response.hovered() && !self.selected {
                self.fill.gamma_multiply(0.85)
            } else {
                self.fill
            };
            ui.painter().rect_filled(rect, 4.0, fill);

            ui.painter().text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                self.brush.label(),
                egui::FontId::proportional(16.0),
                egui::Color32::WHITE,
            );

            if self.selected {
                ui.painter().rect_stroke(
                    rect,
                    4.0,
                    egui::Stroke::new(2.0, egui::Color32::WHITE),
                );
            }
        }

        response
    }
}
