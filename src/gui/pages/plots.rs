// src/gui/pages/plots.rs
use eframe::egui;

use crate::{
    gui::{app::{App, LoadPhase}, components::data_table},
    model::Section,
};

use super::{Page, PageKind};

pub struct PlotsPage;
pub static PAGE: PlotsPage = PlotsPage;

const ALL_SECTIONS: &str = "All sections";

impl Page for PlotsPage {
    fn title(&self) -> &'static str { "Plots" }
    fn kind(&self) -> PageKind { PageKind::Plots }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App) {
        match app.phase {
            LoadPhase::Loading(_) => {
                ui.spinner();
                return;
            }
            LoadPhase::Failed => {
                ui.label("No data loaded.");
                return;
            }
            LoadPhase::Ready(_) => {}
        }

        let filter = &mut app.state.gui.section_filter;
        ui.horizontal(|ui| {
            ui.label("Section:");
            egui::ComboBox::from_id_salt("section_filter")
                .selected_text(filter.as_deref().unwrap_or(ALL_SECTIONS))
                .show_ui(ui, |ui| {
                    ui.selectable_value(&mut *filter, None, ALL_SECTIONS);
                    for section in Section::FIXED {
                        let name = section.name();
                        ui.selectable_value(&mut *filter, Some(s!(name)), name);
                    }
                });
        });

        let rows: Vec<_> = app
            .plot_rows
            .iter()
            .filter(|r| match &app.state.gui.section_filter {
                Some(want) => r.section.eq_ignore_ascii_case(want),
                None => true,
            })
            .collect();
        ui.label(format!("{} plot(s)", rows.len()));
        ui.separator();

        data_table::draw(ui, &rows);
    }
}
