// tests/common/mod.rs
#![allow(dead_code)]

use std::fs;
use std::path::Path;

use plotmap::model::{Lot, LotStatus, Occupant, OccupantStatus, Plot, Section};
use plotmap::store::Tables;

pub const PLOTS_CSV: &str = "\
plot_id,section_name,purchaser,monument_images
CYA1,Church Yard,Eliza Thurston,cya1_front.jpg;cya1_back.jpg
NYA5,New Yard,,
CYA10,Church Yard,Unknown,
";

pub const LOTS_CSV: &str = "\
lot_id,status,purchased_rights,remaining_rights
CYA1-L1,Occupied,1,0
CYA1-L2,Occupied,1,0
CYA1-L3,Occupied,1,0
CYA1-L4,Occupied,1,0
NYA5-L1,Available,0,1
NYA5-L2,Available,0,1
NYA5-L3,Available,0,1
NYA5-L4,Available,0,1
CYA10-L1,Available,0,1
CYA10-L2,Occupied,1,0
";

pub const OCCUPANTS_CSV: &str = "\
lot_id,name,status,veteran,death_date,notes
CYA1-L1,Watson H. Thurston,Occupant,Yes,1918,
CYA1-L2,Eliza Thurston,Occupant,,1931,
CYA1-L3,Mary Thurston,Occupant,,1902,
CYA1-L4,John Thurston,Occupant,yes,,\"moved, 1950\"
CYA10-L2,Abner Cole,Occupant,,1877,
";

/// Write the three sample tables into `dir`.
pub fn write_sample(dir: &Path) {
    fs::write(dir.join("plots.csv"), PLOTS_CSV).unwrap();
    fs::write(dir.join("lots.csv"), LOTS_CSV).unwrap();
    fs::write(dir.join("occupants.csv"), OCCUPANTS_CSV).unwrap();
}

pub fn plot(id: &str, section: &str) -> Plot {
    Plot {
        id: id.into(),
        section: Section::parse(section),
        purchaser: None,
        monument_images: Vec::new(),
    }
}

pub fn lot(id: &str, status: &str) -> Lot {
    Lot {
        id: id.into(),
        status: LotStatus::parse(status),
        purchased_rights: None,
        remaining_rights: None,
    }
}

pub fn occupant(lot_id: &str, name: &str) -> Occupant {
    Occupant {
        lot_id: lot_id.into(),
        name: name.into(),
        veteran: false,
        death_date: None,
        status: OccupantStatus::Occupant,
        notes: None,
    }
}

pub fn veteran(lot_id: &str, name: &str) -> Occupant {
    Occupant { veteran: true, ..occupant(lot_id, name) }
}

/// One plot `P1` with the given lot statuses (`P1-L1`, `P1-L2`, ...) and
/// occupants keyed by lot number.
pub fn single_plot(statuses: &[&str], occupied: &[usize]) -> Tables {
    let lots = statuses
        .iter()
        .enumerate()
        .map(|(i, st)| lot(&format!("P1-L{}", i + 1), st))
        .collect();
    let occupants = occupied
        .iter()
        .map(|n| occupant(&format!("P1-L{n}"), &format!("Person {n}")))
        .collect();
    Tables::new(vec![plot("P1", "Old Yard")], lots, occupants)
}
