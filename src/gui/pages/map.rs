// src/gui/pages/map.rs
//
// The image map. Regions are painted in their plot's status colour and show
// a tooltip on hover once the tables are loaded. Before that (or after a
// failed load) the map is drawn but inert.

use eframe::egui::{self, Color32, Pos2, Rect, Sense, Shape, Stroke, StrokeKind, Vec2, pos2, vec2};

use crate::{
    gui::{
        app::App,
        components::{legend, style_picker, tooltip_view},
    },
    regions::{Region, Shape as RegionShape},
    status::compute_status,
    tooltip::{StatusColor, tooltip_for},
};

use super::{Page, PageKind};

pub struct MapPage;
pub static PAGE: MapPage = MapPage;

/// Canvas size when there is neither a backdrop nor any region.
const FALLBACK_CANVAS: (f32, f32) = (800.0, 600.0);
const CANVAS_MARGIN: f32 = 10.0;

const FILL_ALPHA: u8 = 120;
const INERT_FILL: Color32 = Color32::from_rgba_premultiplied(60, 60, 60, 60);

fn canvas_size(app: &App) -> (f32, f32) {
    if let Some(tex) = &app.map_texture {
        let [w, h] = tex.size();
        return (w as f32, h as f32);
    }
    app.regions
        .extent()
        .map(|(w, h)| (w + CANVAS_MARGIN, h + CANVAS_MARGIN))
        .unwrap_or(FALLBACK_CANVAS)
}

fn paint_region(painter: &egui::Painter, region: &Region, origin: Pos2, scale: f32, fill: Color32, stroke: Stroke) {
    let at = |(x, y): (f32, f32)| origin + vec2(x * scale, y * scale);
    match &region.shape {
        RegionShape::Rect { min, max } => {
            painter.rect(Rect::from_min_max(at(*min), at(*max)), 0.0, fill, stroke, StrokeKind::Inside);
        }
        RegionShape::Circle { center, radius } => {
            painter.circle(at(*center), radius * scale, fill, stroke);
        }
        RegionShape::Poly(pts) => {
            let points: Vec<Pos2> = pts.iter().copied().map(at).collect();
            painter.add(Shape::convex_polygon(points, fill, stroke));
        }
    }
}

impl Page for MapPage {
    fn title(&self) -> &'static str { "Map" }
    fn kind(&self) -> PageKind { PageKind::Map }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App) {
        ui.horizontal_wrapped(|ui| {
            style_picker::draw(ui, app);
            ui.separator();
            legend::draw(ui);
        });
        ui.separator();

        let (w, h) = canvas_size(app);
        let avail = ui.available_size();
        let scale = (avail.x / w).min(avail.y / h).max(0.05);
        let (rect, response) = ui.allocate_exact_size(Vec2::new(w * scale, h * scale), Sense::hover());
        let painter = ui.painter_at(rect);

        match &app.map_texture {
            Some(tex) => {
                let uv = Rect::from_min_max(pos2(0.0, 0.0), pos2(1.0, 1.0));
                painter.image(tex.id(), rect, uv, Color32::WHITE);
            }
            None => {
                painter.rect_filled(rect, 4.0, ui.visuals().extreme_bg_color);
            }
        }

        let tables = app.tables();

        // Topmost region under the pointer, only if it is enhanced.
        let hovered = match (tables, response.hover_pos()) {
            (Some(_), Some(pos)) => {
                let local = (pos - rect.min) / scale;
                app.regions
                    .hit(local.x, local.y)
                    .filter(|(ix, _)| app.enhanced.get(*ix).copied().unwrap_or(false))
                    .map(|(ix, _)| ix)
            }
            _ => None,
        };

        for (ix, region) in app.regions.regions.iter().enumerate() {
            let enhanced = tables.is_some() && app.enhanced.get(ix).copied().unwrap_or(false);
            let fill = match tables {
                Some(t) if enhanced => {
                    let (r, g, b) = StatusColor::for_status(compute_status(t, &region.plot_id).status).rgb();
                    Color32::from_rgba_unmultiplied(r, g, b, FILL_ALPHA)
                }
                _ => INERT_FILL,
            };
            let stroke = if hovered == Some(ix) {
                Stroke::new(2.5, Color32::WHITE)
            } else {
                Stroke::new(1.0, Color32::from_gray(30))
            };
            paint_region(&painter, region, rect.min, scale, fill, stroke);
        }

        let tip = match (tables, hovered) {
            (Some(t), Some(ix)) => {
                tooltip_for(t, &app.regions.regions[ix].plot_id, app.state.gui.tooltip_style)
            }
            _ => None,
        };
        if let Some(tip) = tip {
            response.on_hover_ui_at_pointer(|ui| tooltip_view::draw(ui, &tip));
        }
    }
}
