// src/status.rs
//
// Per-plot occupancy, derived on demand from the loaded tables. Nothing here
// is cached: every hover recomputes from `Tables`.

use std::fmt;

use serde::Serialize;

use crate::store::Tables;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum OverallStatus {
    Available,
    #[serde(rename = "Partially Occupied")]
    PartiallyOccupied,
    #[serde(rename = "Fully Occupied")]
    FullyOccupied,
    #[serde(rename = "Not Available")]
    NotAvailable,
    Unknown,
}

impl OverallStatus {
    pub fn label(self) -> &'static str {
        match self {
            OverallStatus::Available => "Available",
            OverallStatus::PartiallyOccupied => "Partially Occupied",
            OverallStatus::FullyOccupied => "Fully Occupied",
            OverallStatus::NotAvailable => "Not Available",
            OverallStatus::Unknown => "Unknown",
        }
    }

    /// Rule table over lot counts. Callers guarantee
    /// `occupied + available <= total`.
    pub fn from_counts(occupied: usize, available: usize, total: usize) -> Self {
        if total == 0 {
            OverallStatus::Unknown
        } else if available == total {
            OverallStatus::Available
        } else if occupied == total {
            OverallStatus::FullyOccupied
        } else if available > 0 {
            OverallStatus::PartiallyOccupied
        } else {
            OverallStatus::NotAvailable
        }
    }
}

impl fmt::Display for OverallStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PlotStatus {
    pub status: OverallStatus,
    /// Occupant records on this plot's lots
    pub occupant_count: usize,
    pub occupied_lots: usize,
    pub available_lots: usize,
    pub total_lots: usize,
}

impl PlotStatus {
    pub const EMPTY: PlotStatus = PlotStatus {
        status: OverallStatus::Unknown,
        occupant_count: 0,
        occupied_lots: 0,
        available_lots: 0,
        total_lots: 0,
    };

    /// The occupant table and the lot table disagree: some lot is occupied by
    /// status alone, or occupants point at a plot with no lots.
    pub fn occupancy_mismatch(&self) -> bool {
        self.occupant_count < self.occupied_lots
            || (self.total_lots == 0 && self.occupant_count > 0)
    }
}

/// Status of a plot that exists in the plot table. `None` on a lookup miss.
pub fn plot_status(tables: &Tables, plot_id: &str) -> Option<PlotStatus> {
    tables.plot(plot_id)?;
    Some(compute_status(tables, plot_id))
}

/// Never fails; unknown ids or plots without lots come back as `Unknown`
/// with zero lot counts.
pub fn compute_status(tables: &Tables, plot_id: &str) -> PlotStatus {
    let mut occupied = 0;
    let mut available = 0;
    let mut total = 0;

    for lot in tables.lots_for(plot_id) {
        total += 1;
        let has_occupant = tables.occupants_for_lot(&lot.id).next().is_some();
        if lot.status.marks_occupied() || has_occupant {
            occupied += 1;
        } else if lot.status == crate::model::LotStatus::Available {
            available += 1;
        }
    }

    PlotStatus {
        status: OverallStatus::from_counts(occupied, available, total),
        occupant_count: tables.occupants_for(plot_id).count(),
        occupied_lots: occupied,
        available_lots: available,
        total_lots: total,
    }
}
