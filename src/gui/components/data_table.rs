// src/gui/components/data_table.rs
//
// Draws the plot table: one row per plot, status cell in its map colour.
// Purely a view over the rows it is given.

use eframe::egui::{self, Align, Layout, RichText, TextWrapMode};
use egui_extras::{Column, TableBuilder};

use crate::{gui::app::PlotRow, tooltip::StatusColor};

use super::legend::status_color32;

pub const HEADERS: [&str; 6] = ["Plot", "Section", "Status", "Lots", "Available", "Occupants"];
const WIDTHS: [f32; 6] = [110.0, 120.0, 150.0, 60.0, 80.0, 90.0];

/// Columns from this index on are counts and get centred.
const FIRST_NUMERIC: usize = 3;

pub fn draw(ui: &mut egui::Ui, rows: &[&PlotRow]) {
    {
        let s = &mut ui.style_mut().spacing.scroll;
        s.floating = false;
        s.bar_width = 10.0;
    }

    let mut table = TableBuilder::new(ui)
        .striped(true)
        .min_scrolled_height(0.0)
        .id_salt("plot_table");
    for w in WIDTHS {
        table = table.column(Column::initial(w).resizable(true).clip(true).at_least(20.0));
    }

    table
        .header(24.0, |mut header| {
            for (ci, h) in HEADERS.iter().enumerate() {
                header.col(|ui| {
                    ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                    let text = RichText::new(*h).strong();
                    if ci >= FIRST_NUMERIC {
                        ui.centered_and_justified(|ui| { ui.label(text); });
                    } else {
                        ui.with_layout(Layout::left_to_right(Align::Center), |ui| { ui.label(text); });
                    }
                });
            }
        })
        .body(|body| {
            body.rows(20.0, rows.len(), |mut row| {
                let r = rows[row.index()];
                let st = &r.status;
                row.col(|ui| { ui.label(r.plot_id.as_str()); });
                row.col(|ui| { ui.label(r.section.as_str()); });
                row.col(|ui| {
                    let color = status_color32(StatusColor::for_status(st.status));
                    ui.label(RichText::new(st.status.label()).color(color));
                });
                for n in [st.total_lots, st.available_lots, st.occupant_count] {
                    row.col(|ui| {
                        ui.centered_and_justified(|ui| { ui.label(n.to_string()); });
                    });
                }
            });
        });
}
