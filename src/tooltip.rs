// src/tooltip.rs
//
// Hover text for one plot in one of four detail levels. Output is a small
// styled-text tree so the GUI can colour the status and the CLI can print
// plain lines from the same value.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::consts::{CALL_TO_ACTION, FULL_OCCUPANT_LIMIT, UNKNOWN_PURCHASER, VETERAN_MARKER};
use crate::model::{Occupant, Plot};
use crate::status::{OverallStatus, PlotStatus, plot_status};
use crate::store::Tables;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TooltipStyle {
    Basic,
    #[default]
    Detailed,
    Occupants,
    Full,
}

impl TooltipStyle {
    pub const ALL: [TooltipStyle; 4] = [
        TooltipStyle::Basic,
        TooltipStyle::Detailed,
        TooltipStyle::Occupants,
        TooltipStyle::Full,
    ];

    pub fn label(self) -> &'static str {
        match self {
            TooltipStyle::Basic => "Basic",
            TooltipStyle::Detailed => "Detailed",
            TooltipStyle::Occupants => "Occupants",
            TooltipStyle::Full => "Full",
        }
    }
}

impl fmt::Display for TooltipStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown tooltip style '{0}' (expected basic, detailed, occupants or full)")]
pub struct UnknownStyle(pub String);

impl FromStr for TooltipStyle {
    type Err = UnknownStyle;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|st| st.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownStyle(s!(s)))
    }
}

/* ---------------- Colours ---------------- */

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum StatusColor {
    Teal,
    Yellow,
    Gray,
    Red,
    White,
}

impl StatusColor {
    pub fn for_status(status: OverallStatus) -> Self {
        match status {
            OverallStatus::Available => StatusColor::Teal,
            OverallStatus::PartiallyOccupied => StatusColor::Yellow,
            OverallStatus::FullyOccupied => StatusColor::Gray,
            OverallStatus::NotAvailable => StatusColor::Red,
            OverallStatus::Unknown => StatusColor::White,
        }
    }

    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            StatusColor::Teal => (0x2E, 0xC4, 0xB6),
            StatusColor::Yellow => (0xFF, 0xD1, 0x66),
            StatusColor::Gray => (0x9E, 0x9E, 0x9E),
            StatusColor::Red => (0xEF, 0x47, 0x6F),
            StatusColor::White => (0xFF, 0xFF, 0xFF),
        }
    }

    pub fn hex(self) -> String {
        let (r, g, b) = self.rgb();
        format!("#{r:02X}{g:02X}{b:02X}")
    }
}

/// Legend rows, in display order.
pub const LEGEND: [OverallStatus; 4] = [
    OverallStatus::Available,
    OverallStatus::PartiallyOccupied,
    OverallStatus::FullyOccupied,
    OverallStatus::NotAvailable,
];

pub fn legend() -> impl Iterator<Item = (OverallStatus, StatusColor)> {
    LEGEND.into_iter().map(|s| (s, StatusColor::for_status(s)))
}

/* ---------------- Styled text ---------------- */

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Span {
    pub text: String,
    pub color: Option<StatusColor>,
    pub strong: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Line {
    pub spans: Vec<Span>,
}

impl Line {
    fn plain(text: impl Into<String>) -> Self {
        Self { spans: vec![Span { text: text.into(), color: None, strong: false }] }
    }

    fn heading(text: impl Into<String>) -> Self {
        Self { spans: vec![Span { text: text.into(), color: None, strong: true }] }
    }

    fn status(status: OverallStatus) -> Self {
        Self {
            spans: vec![
                Span { text: s!("Status: "), color: None, strong: false },
                Span {
                    text: s!(status.label()),
                    color: Some(StatusColor::for_status(status)),
                    strong: true,
                },
            ],
        }
    }

    pub fn text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Tooltip {
    pub lines: Vec<Line>,
}

impl Tooltip {
    pub fn to_plain_text(&self) -> String {
        self.lines.iter().map(Line::text).collect::<Vec<_>>().join("\n")
    }

    fn push(&mut self, line: Line) { self.lines.push(line); }
}

/* ---------------- Formatting ---------------- */

fn known_purchaser(plot: &Plot) -> Option<&str> {
    plot.purchaser
        .as_deref()
        .map(str::trim)
        .filter(|p| !p.is_empty() && *p != UNKNOWN_PURCHASER)
}

fn occupant_name(o: &Occupant) -> String {
    if o.veteran { join!(&o.name, VETERAN_MARKER) } else { o.name.clone() }
}

/// Build the tooltip for one plot. Pure: same inputs, same output.
/// `occupants` are the plot's occupant records in table order.
pub fn format_tooltip(
    plot: &Plot,
    status: &PlotStatus,
    occupants: &[&Occupant],
    style: TooltipStyle,
) -> Tooltip {
    let mut t = Tooltip::default();
    t.push(Line::heading(join!("Plot ", &plot.id)));
    t.push(Line::plain(join!("Section: ", plot.section.name())));

    match style {
        TooltipStyle::Basic => {
            t.push(Line::status(status.status));
        }
        TooltipStyle::Detailed => {
            t.push(Line::status(status.status));
            t.push(Line::plain(format!("Total lots: {}", status.total_lots)));
            if status.occupant_count > 0 {
                t.push(Line::plain(format!("Occupants: {}", status.occupant_count)));
            }
            if status.available_lots > 0 {
                t.push(Line::plain(format!("Available: {}", status.available_lots)));
            }
            if let Some(p) = known_purchaser(plot) {
                t.push(Line::plain(join!("Purchaser: ", p)));
            }
        }
        TooltipStyle::Occupants => {
            if occupants.is_empty() {
                t.push(Line::plain(format!("No occupants - {} available", status.available_lots)));
            } else {
                t.push(Line::heading("Occupants:"));
                for o in occupants {
                    t.push(Line::plain(occupant_name(o)));
                }
            }
        }
        TooltipStyle::Full => {
            t.push(Line::status(status.status));
            if let Some(p) = known_purchaser(plot) {
                t.push(Line::plain(join!("Purchaser: ", p)));
            }
            if !occupants.is_empty() {
                t.push(Line::heading("Occupants:"));
                for o in occupants.iter().take(FULL_OCCUPANT_LIMIT) {
                    let mut line = occupant_name(o);
                    if let Some(d) = &o.death_date {
                        line.push_str(&format!(" (d. {d})"));
                    }
                    t.push(Line::plain(line));
                }
                if occupants.len() > FULL_OCCUPANT_LIMIT {
                    t.push(Line::plain(format!("+{} more", occupants.len() - FULL_OCCUPANT_LIMIT)));
                }
            }
            t.push(Line::plain(format!("Available: {}", status.available_lots)));
            t.push(Line::plain(format!("Monument photos: {}", plot.monument_images.len())));
            t.push(Line::plain(CALL_TO_ACTION));
        }
    }
    t
}

/// Lookup + status + format. `None` when the plot id is not in the table.
pub fn tooltip_for(tables: &Tables, plot_id: &str, style: TooltipStyle) -> Option<Tooltip> {
    let plot = tables.plot(plot_id)?;
    let status = plot_status(tables, plot_id)?;
    let occupants: Vec<&Occupant> = tables.occupants_for(plot_id).collect();
    Some(format_tooltip(plot, &status, &occupants, style))
}
