// src/gui/components/legend.rs
use eframe::egui::{self, Color32, RichText, Sense, vec2};
use crate::tooltip::{StatusColor, legend};

pub fn status_color32(color: StatusColor) -> Color32 {
    let (r, g, b) = color.rgb();
    Color32::from_rgb(r, g, b)
}

/// One swatch + label per legend entry, laid out inline.
pub fn draw(ui: &mut egui::Ui) {
    for (status, color) in legend() {
        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 4.0;
            let (rect, _) = ui.allocate_exact_size(vec2(12.0, 12.0), Sense::hover());
            ui.painter().rect_filled(rect, 2.0, status_color32(color));
            ui.label(RichText::new(status.label()).small());
        });
    }
}
