// src/validate.rs
//
// Read-only consistency report across plots, lots and occupants. Nothing is
// repaired here; the report says what disagrees and where.

use std::collections::HashMap;
use std::fmt;

use serde::Serialize;

use crate::model::{LotStatus, OccupantStatus, plot_of_lot};
use crate::status::compute_status;
use crate::store::Tables;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Finding {
    /// Lot says Available but someone is buried there.
    AvailableWithOccupants { lot_id: String, occupants: usize },
    /// Lot says (partially/fully) occupied but has no burial records.
    OccupiedWithoutOccupants { lot_id: String, status: String },
    /// Occupant points at a lot id that is not in the lot table.
    OrphanedOccupant { lot_id: String, name: String },
    /// Lot id whose plot part matches no plot.
    OrphanedLot { lot_id: String },
    /// More than one record on one lot (cremains, family). Informational.
    SharedLot { lot_id: String, names: Vec<String> },
    /// Occupant count and occupied-lot count disagree for a plot.
    OccupancyMismatch {
        plot_id: String,
        occupant_count: usize,
        occupied_lots: usize,
        total_lots: usize,
    },
}

impl Finding {
    pub fn is_informational(&self) -> bool {
        matches!(self, Finding::SharedLot { .. })
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Finding::AvailableWithOccupants { lot_id, occupants } => {
                write!(f, "{lot_id}: marked 'Available' but has {occupants} occupant(s)")
            }
            Finding::OccupiedWithoutOccupants { lot_id, status } => {
                write!(f, "{lot_id}: marked '{status}' but has no occupants")
            }
            Finding::OrphanedOccupant { lot_id, name } => {
                write!(f, "{lot_id}: occupant {name} references a lot that does not exist")
            }
            Finding::OrphanedLot { lot_id } => write!(f, "{lot_id}: no matching plot"),
            Finding::SharedLot { lot_id, names } => {
                write!(f, "{lot_id}: {} occupants - {}", names.len(), names.join(", "))
            }
            Finding::OccupancyMismatch { plot_id, occupant_count, occupied_lots, total_lots } => write!(
                f,
                "{plot_id}: {occupied_lots} of {total_lots} lots occupied but {occupant_count} occupant record(s)"
            ),
        }
    }
}

#[derive(Clone, Debug, Default, Serialize)]
pub struct Report {
    pub plots: usize,
    pub lots: usize,
    pub occupants: usize,
    pub findings: Vec<Finding>,
}

impl Report {
    /// No findings other than informational ones.
    pub fn is_clean(&self) -> bool {
        self.findings.iter().all(Finding::is_informational)
    }

    pub fn problems(&self) -> impl Iterator<Item = &Finding> {
        self.findings.iter().filter(|f| !f.is_informational())
    }
}

pub fn validate(tables: &Tables) -> Report {
    let mut findings = Vec::new();

    // Occupants grouped by lot, file order kept inside each group.
    let mut by_lot: HashMap<&str, Vec<&crate::model::Occupant>> = HashMap::new();
    let mut lot_order: Vec<&str> = Vec::new();
    for o in tables.occupants() {
        let group = by_lot.entry(o.lot_id.as_str()).or_default();
        if group.is_empty() {
            lot_order.push(o.lot_id.as_str());
        }
        group.push(o);
    }

    for lot in tables.lots() {
        let actual = by_lot
            .get(lot.id.as_str())
            .map(|os| os.iter().filter(|o| o.status != OccupantStatus::Reserved).count())
            .unwrap_or(0);

        match &lot.status {
            LotStatus::Available if actual > 0 => findings.push(Finding::AvailableWithOccupants {
                lot_id: lot.id.clone(),
                occupants: actual,
            }),
            LotStatus::Occupied | LotStatus::FullyOccupied | LotStatus::PartiallyOccupied if actual == 0 => {
                findings.push(Finding::OccupiedWithoutOccupants {
                    lot_id: lot.id.clone(),
                    status: s!(lot.status.name()),
                })
            }
            _ => {}
        }

        let owned = plot_of_lot(&lot.id).is_some_and(|p| tables.plot(p).is_some());
        if !owned {
            findings.push(Finding::OrphanedLot { lot_id: lot.id.clone() });
        }
    }

    for o in tables.occupants() {
        if tables.lot(&o.lot_id).is_none() {
            findings.push(Finding::OrphanedOccupant { lot_id: o.lot_id.clone(), name: o.name.clone() });
        }
    }

    // Shared lots, in first-seen occupant order. Lots missing from the lot
    // table are included.
    for lot_id in &lot_order {
        if let Some(os) = by_lot.get(lot_id).filter(|os| os.len() > 1) {
            findings.push(Finding::SharedLot {
                lot_id: s!(*lot_id),
                names: os.iter().map(|o| o.name.clone()).collect(),
            });
        }
    }

    for plot in tables.plots() {
        let st = compute_status(tables, &plot.id);
        if st.occupancy_mismatch() {
            findings.push(Finding::OccupancyMismatch {
                plot_id: plot.id.clone(),
                occupant_count: st.occupant_count,
                occupied_lots: st.occupied_lots,
                total_lots: st.total_lots,
            });
        }
    }

    let report = Report {
        plots: tables.plot_count(),
        lots: tables.lot_count(),
        occupants: tables.occupants().len(),
        findings,
    };
    logf!(
        "Validate: {} finding(s), {} problem(s)",
        report.findings.len(),
        report.problems().count()
    );
    report
}
