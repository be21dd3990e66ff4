// src/regions.rs
//
// Clickable map regions, one per plot, in image pixel coordinates.
// File shape (`regions.csv`):
//
//   plot_id,shape,coords
//   CYA1,rect,"10,20,60,80"
//   CYA2,circle,"120,40,15"
//   OYK1,poly,"200,10,260,10,250,60,205,55"

use std::{fs, path::Path};

use crate::config::consts::CSV_SEP;
use crate::csv::{Table, cell};
use crate::error::LoadError;
use crate::store::Tables;

#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    Rect { min: (f32, f32), max: (f32, f32) },
    Circle { center: (f32, f32), radius: f32 },
    Poly(Vec<(f32, f32)>),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Region {
    pub plot_id: String,
    pub shape: Shape,
}

impl Region {
    pub fn contains(&self, x: f32, y: f32) -> bool {
        match &self.shape {
            Shape::Rect { min, max } => x >= min.0 && x <= max.0 && y >= min.1 && y <= max.1,
            Shape::Circle { center, radius } => {
                let (dx, dy) = (x - center.0, y - center.1);
                dx * dx + dy * dy <= radius * radius
            }
            Shape::Poly(pts) => point_in_polygon(pts, x, y),
        }
    }

    /// (min, max) corners of the bounding box.
    pub fn bounds(&self) -> ((f32, f32), (f32, f32)) {
        match &self.shape {
            Shape::Rect { min, max } => (*min, *max),
            Shape::Circle { center, radius } => (
                (center.0 - radius, center.1 - radius),
                (center.0 + radius, center.1 + radius),
            ),
            Shape::Poly(pts) => pts.iter().fold(
                ((f32::INFINITY, f32::INFINITY), (f32::NEG_INFINITY, f32::NEG_INFINITY)),
                |((x0, y0), (x1, y1)), &(x, y)| ((x0.min(x), y0.min(y)), (x1.max(x), y1.max(y))),
            ),
        }
    }
}

// Even-odd ray cast.
fn point_in_polygon(pts: &[(f32, f32)], x: f32, y: f32) -> bool {
    let mut inside = false;
    let mut j = pts.len().wrapping_sub(1);
    for i in 0..pts.len() {
        let (xi, yi) = pts[i];
        let (xj, yj) = pts[j];
        if (yi > y) != (yj > y) && x < (xj - xi) * (y - yi) / (yj - yi) + xi {
            inside = !inside;
        }
        j = i;
    }
    inside
}

fn parse_coords(s: &str) -> Result<Vec<f32>, String> {
    s.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|p| !p.is_empty())
        .map(|p| p.parse::<f32>().map_err(|_| format!("bad coordinate '{p}'")))
        .collect()
}

fn parse_shape(kind: &str, coords: &[f32]) -> Result<Shape, String> {
    match kind.to_ascii_lowercase().as_str() {
        "rect" | "rectangle" => match coords {
            [x1, y1, x2, y2] => Ok(Shape::Rect {
                min: (x1.min(*x2), y1.min(*y2)),
                max: (x1.max(*x2), y1.max(*y2)),
            }),
            _ => Err(format!("rect needs 4 coordinates, got {}", coords.len())),
        },
        "circle" | "circ" => match coords {
            [cx, cy, r] if *r >= 0.0 => Ok(Shape::Circle { center: (*cx, *cy), radius: *r }),
            [_, _, _] => Err(s!("circle radius must be non-negative")),
            _ => Err(format!("circle needs 3 coordinates, got {}", coords.len())),
        },
        "poly" | "polygon" => {
            if coords.len() < 6 || coords.len() % 2 != 0 {
                return Err(format!("poly needs an even number (>= 6) of coordinates, got {}", coords.len()));
            }
            Ok(Shape::Poly(coords.chunks_exact(2).map(|c| (c[0], c[1])).collect()))
        }
        other => Err(format!("unknown shape '{other}'")),
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct RegionMap {
    /// Draw order; later regions sit on top.
    pub regions: Vec<Region>,
}

impl RegionMap {
    pub fn parse(text: &str, path: &Path) -> Result<Self, LoadError> {
        let table = Table::parse(text, CSV_SEP)
            .ok_or_else(|| LoadError::Empty { path: path.to_path_buf() })?;
        let cols = table.require(path, &["plot_id", "shape", "coords"])?;

        let mut regions = Vec::with_capacity(table.rows.len());
        for rec in &table.rows {
            let plot_id = cell(rec, Some(cols[0]));
            let bad = |reason: String| LoadError::BadRow {
                path: path.to_path_buf(),
                line: rec.line,
                reason,
            };
            if plot_id.is_empty() {
                return Err(bad(s!("missing plot_id")));
            }
            let coords = parse_coords(cell(rec, Some(cols[2]))).map_err(bad)?;
            let shape = parse_shape(cell(rec, Some(cols[1])), &coords).map_err(bad)?;
            regions.push(Region { plot_id: s!(plot_id), shape });
        }
        Ok(Self { regions })
    }

    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let text = fs::read_to_string(path)
            .map_err(|source| LoadError::Io { path: path.to_path_buf(), source })?;
        let map = Self::parse(&text, path)?;
        logf!("Regions: {} loaded from {}", map.regions.len(), path.display());
        Ok(map)
    }

    /// Topmost region under the point, with its index.
    pub fn hit(&self, x: f32, y: f32) -> Option<(usize, &Region)> {
        self.regions.iter().enumerate().rev().find(|(_, r)| r.contains(x, y))
    }

    /// Furthest extent of all regions (canvas size when there is no backdrop).
    pub fn extent(&self) -> Option<(f32, f32)> {
        self.regions
            .iter()
            .map(|r| r.bounds().1)
            .reduce(|a, b| (a.0.max(b.0), a.1.max(b.1)))
    }

    /// Which regions point at a plot we know. Misses are left unenhanced.
    pub fn enhance(&self, tables: &Tables) -> Vec<bool> {
        let mask: Vec<bool> = self.regions.iter().map(|r| tables.plot(&r.plot_id).is_some()).collect();
        for (r, _) in self.regions.iter().zip(&mask).filter(|(_, ok)| !**ok) {
            logd!("Regions: no plot {:?}, region left unenhanced", r.plot_id);
        }
        mask
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn region(shape: Shape) -> Region {
        Region { plot_id: s!("X"), shape }
    }

    #[test]
    fn rect_corners_normalised() {
        let shape = parse_shape("rect", &[60.0, 80.0, 10.0, 20.0]).unwrap();
        assert_eq!(shape, Shape::Rect { min: (10.0, 20.0), max: (60.0, 80.0) });
    }

    #[test]
    fn concave_polygon_hit_test() {
        // U shape: the notch (15, 5) is outside.
        let r = region(Shape::Poly(vec![
            (0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (20.0, 10.0),
            (20.0, 0.0), (30.0, 0.0), (30.0, 20.0), (0.0, 20.0),
        ]));
        assert!(r.contains(5.0, 5.0));
        assert!(r.contains(25.0, 5.0));
        assert!(!r.contains(15.0, 5.0));
        assert!(r.contains(15.0, 15.0));
    }

    #[test]
    fn circle_edge_counts_as_inside() {
        let r = region(Shape::Circle { center: (0.0, 0.0), radius: 5.0 });
        assert!(r.contains(3.0, 4.0));
        assert!(!r.contains(4.0, 4.0));
    }

    #[test]
    fn bad_shapes_rejected() {
        assert!(parse_shape("rect", &[1.0, 2.0, 3.0]).is_err());
        assert!(parse_shape("poly", &[1.0, 2.0, 3.0, 4.0]).is_err());
        assert!(parse_shape("hexagon", &[1.0; 6]).is_err());
        assert!(parse_coords("1,two,3").is_err());
    }
}
