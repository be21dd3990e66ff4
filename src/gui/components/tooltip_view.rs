// src/gui/components/tooltip_view.rs
//
// Renders a formatted Tooltip line by line. Colour and emphasis come from the
// spans; layout is ours.

use eframe::egui::{self, RichText};
use crate::tooltip::Tooltip;
use super::legend::status_color32;

pub fn draw(ui: &mut egui::Ui, tip: &Tooltip) {
    ui.set_max_width(320.0);
    for line in &tip.lines {
        ui.horizontal_wrapped(|ui| {
            ui.spacing_mut().item_spacing.x = 0.0;
            for span in &line.spans {
                let mut text = RichText::new(&span.text);
                if span.strong {
                    text = text.strong();
                }
                if let Some(color) = span.color {
                    text = text.color(status_color32(color));
                }
                ui.label(text);
            }
        });
    }
}
