// tests/plot_status.rs
mod common;

use plotmap::status::{OverallStatus, PlotStatus, compute_status, plot_status};
use plotmap::store::{self, DataPaths, Tables};
use plotmap::progress::NullProgress;

use common::*;

fn sample() -> Tables {
    let dir = tempfile::tempdir().unwrap();
    write_sample(dir.path());
    store::load_all(&DataPaths::in_dir(dir.path()), &mut NullProgress).unwrap()
}

#[test]
fn cya1_all_lots_occupied_is_fully_occupied() {
    let t = sample();
    let st = compute_status(&t, "CYA1");
    assert_eq!(st.status, OverallStatus::FullyOccupied);
    assert_eq!(st.total_lots, 4);
    assert_eq!(st.occupied_lots, 4);
    assert_eq!(st.available_lots, 0);
    assert_eq!(st.occupant_count, 4);
}

#[test]
fn nya5_all_lots_available() {
    let t = sample();
    let st = compute_status(&t, "NYA5");
    assert_eq!(st.status, OverallStatus::Available);
    assert_eq!((st.total_lots, st.available_lots, st.occupant_count), (4, 4, 0));
}

#[test]
fn lot_ownership_is_not_plain_prefix() {
    let t = sample();
    // CYA10-L* must not be counted under CYA1
    assert_eq!(compute_status(&t, "CYA1").total_lots, 4);
    let st = compute_status(&t, "CYA10");
    assert_eq!(st.total_lots, 2);
    assert_eq!(st.occupant_count, 1);
    assert_eq!(st.status, OverallStatus::PartiallyOccupied);
}

#[test]
fn unknown_and_lotless_plots() {
    let t = Tables::new(vec![plot("P9", "Upper Terrace")], Vec::new(), Vec::new());
    assert_eq!(compute_status(&t, "P9"), PlotStatus::EMPTY);
    assert_eq!(compute_status(&t, "nope").status, OverallStatus::Unknown);
    assert!(plot_status(&t, "nope").is_none());
    assert_eq!(plot_status(&t, "P9").map(|s| s.status), Some(OverallStatus::Unknown));
}

#[test]
fn rule_table() {
    let cases: &[(&[&str], &[usize], OverallStatus)] = &[
        (&["Available", "Available"], &[], OverallStatus::Available),
        (&["Occupied", "Occupied"], &[1, 2], OverallStatus::FullyOccupied),
        (&["Occupied", "Available"], &[1], OverallStatus::PartiallyOccupied),
        (&["Not Available", "Available"], &[], OverallStatus::PartiallyOccupied),
        (&["Not Available", "Occupied"], &[2], OverallStatus::NotAvailable),
        (&["Reserved", "Not Available"], &[], OverallStatus::NotAvailable),
    ];
    for (statuses, occupied, want) in cases {
        let t = single_plot(statuses, occupied);
        assert_eq!(compute_status(&t, "P1").status, *want, "lots {:?}", statuses);
    }
}

#[test]
fn occupant_on_available_lot_counts_as_occupied() {
    let t = single_plot(&["Available", "Available"], &[1]);
    let st = compute_status(&t, "P1");
    assert_eq!(st.occupied_lots, 1);
    assert_eq!(st.available_lots, 1);
    assert_eq!(st.status, OverallStatus::PartiallyOccupied);
}

#[test]
fn counts_stay_within_total() {
    let lists: &[&[&str]] = &[
        &["Available", "Occupied", "Fully Occupied"],
        &["Partially Occupied", "Unoccupied"],
        &["Available"],
        &["whatever", "Available", "Not Available"],
    ];
    for statuses in lists {
        for occupied in [&[][..], &[1][..], &[1, 1][..]] {
            let st = compute_status(&single_plot(statuses, occupied), "P1");
            assert!(st.occupied_lots + st.available_lots <= st.total_lots);
            assert_eq!(st.total_lots, statuses.len());
        }
    }
}

#[test]
fn occupancy_mismatch_flags_status_only_occupation() {
    // Lot 2 says occupied, but nobody is recorded there.
    let st = compute_status(&single_plot(&["Occupied", "Occupied"], &[1]), "P1");
    assert!(st.occupancy_mismatch());

    // Two records on one lot is fine.
    let st = compute_status(&single_plot(&["Occupied"], &[1, 1]), "P1");
    assert_eq!(st.occupant_count, 2);
    assert!(!st.occupancy_mismatch());
}

#[test]
fn status_serializes_with_display_labels() {
    let json = serde_json::to_string(&OverallStatus::PartiallyOccupied).unwrap();
    assert_eq!(json, "\"Partially Occupied\"");
    assert_eq!(OverallStatus::NotAvailable.to_string(), "Not Available");
}
