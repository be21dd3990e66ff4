// src/gui/components/style_picker.rs
use eframe::egui;
use crate::{gui::app::App, tooltip::TooltipStyle};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let before = app.state.gui.tooltip_style;
    ui.label("Tooltip:");
    egui::ComboBox::from_id_salt("tooltip_style")
        .selected_text(before.label())
        .show_ui(ui, |ui| {
            for style in TooltipStyle::ALL {
                ui.selectable_value(&mut app.state.gui.tooltip_style, style, style.label());
            }
        });
    if app.state.gui.tooltip_style != before {
        logd!("UI: tooltip style {} → {}", before, app.state.gui.tooltip_style);
    }
}
