// tests/validate.rs
mod common;

use plotmap::model::OccupantStatus;
use plotmap::progress::NullProgress;
use plotmap::store::{self, DataPaths, Tables};
use plotmap::validate::{Finding, validate};

use common::*;

#[test]
fn sample_data_is_clean() {
    let dir = tempfile::tempdir().unwrap();
    write_sample(dir.path());
    let t = store::load_all(&DataPaths::in_dir(dir.path()), &mut NullProgress).unwrap();

    let report = validate(&t);
    assert!(report.is_clean(), "{:?}", report.findings);
    assert_eq!((report.plots, report.lots, report.occupants), (3, 10, 5));
}

#[test]
fn inconsistencies_are_reported() {
    let mut reserved = occupant("P1-L3", "Held For Ann");
    reserved.status = OccupantStatus::Reserved;
    let t = Tables::new(
        vec![plot("P1", "Old Yard")],
        vec![
            lot("P1-L1", "Available"),
            lot("P1-L2", "Occupied"),
            lot("P1-L3", "Available"),
            lot("GONE-L1", "Available"),
        ],
        vec![
            occupant("P1-L1", "Ada Moss"),
            occupant("P9-L1", "Nobody Knows"),
            reserved,
        ],
    );

    let report = validate(&t);
    let f = &report.findings;

    assert!(f.contains(&Finding::AvailableWithOccupants { lot_id: "P1-L1".into(), occupants: 1 }));
    assert!(f.contains(&Finding::OccupiedWithoutOccupants {
        lot_id: "P1-L2".into(),
        status: "Occupied".into(),
    }));
    assert!(f.contains(&Finding::OrphanedOccupant { lot_id: "P9-L1".into(), name: "Nobody Knows".into() }));
    assert!(f.contains(&Finding::OrphanedLot { lot_id: "GONE-L1".into() }));
    // Reserved occupants are not burials
    assert!(!f.iter().any(|x| matches!(x, Finding::AvailableWithOccupants { lot_id, .. } if lot_id == "P1-L3")));
    assert!(!report.is_clean());
}

#[test]
fn shared_lot_is_informational() {
    let t = Tables::new(
        vec![plot("P1", "Old Yard")],
        vec![lot("P1-L1", "Occupied")],
        vec![occupant("P1-L1", "Ruth Lane"), occupant("P1-L1", "Amos Lane")],
    );
    let report = validate(&t);
    assert_eq!(
        report.findings,
        [Finding::SharedLot { lot_id: "P1-L1".into(), names: vec!["Ruth Lane".into(), "Amos Lane".into()] }]
    );
    assert!(report.is_clean());
    assert_eq!(report.problems().count(), 0);
}

#[test]
fn occupancy_mismatch_per_plot() {
    let t = Tables::new(
        vec![plot("P1", "Old Yard")],
        vec![lot("P1-L1", "Occupied"), lot("P1-L2", "Fully Occupied")],
        vec![occupant("P1-L1", "Ida Grey")],
    );
    let report = validate(&t);
    assert!(report.findings.contains(&Finding::OccupancyMismatch {
        plot_id: "P1".into(),
        occupant_count: 1,
        occupied_lots: 2,
        total_lots: 2,
    }));
}

#[test]
fn findings_serialize_with_kind_tag() {
    let json = serde_json::to_value(Finding::OrphanedLot { lot_id: "X-L1".into() }).unwrap();
    assert_eq!(json["kind"], "orphaned_lot");
    assert_eq!(json["lot_id"], "X-L1");
}

#[test]
fn shared_lot_missing_from_lot_table_is_still_reported() {
    let t = Tables::new(
        vec![plot("P1", "Old Yard")],
        vec![lot("P1-L1", "Occupied")],
        vec![occupant("P1-L1", "Ada Moss"), occupant("P9-L1", "Bo Reed"), occupant("P9-L1", "Cy Reed")],
    );
    let report = validate(&t);
    assert!(report.findings.contains(&Finding::SharedLot {
        lot_id: "P9-L1".into(),
        names: vec!["Bo Reed".into(), "Cy Reed".into()],
    }));
    let orphans = report.findings.iter().filter(|f| matches!(f, Finding::OrphanedOccupant { .. })).count();
    assert_eq!(orphans, 2);
}
