// src/model.rs
//
// Row types for the three cemetery tables. Parsing from cells is lenient:
// unknown section/status text is preserved in an `Other` variant instead of
// failing the load.

use std::fmt;

use serde::Serialize;

use crate::config::consts::{LOT_SEPARATOR, MONUMENT_IMAGE_SEP, VETERAN_FLAG};

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub enum Section {
    ChurchYard,
    OldYard,
    NewYard,
    UpperTerrace,
    IntervaleTerrace,
    Other(String),
}

impl Section {
    pub const FIXED: [Section; 5] = [
        Section::ChurchYard,
        Section::OldYard,
        Section::NewYard,
        Section::UpperTerrace,
        Section::IntervaleTerrace,
    ];

    pub fn parse(s: &str) -> Self {
        let s = s.trim();
        Self::FIXED
            .iter()
            .find(|sec| sec.name().eq_ignore_ascii_case(s))
            .cloned()
            .unwrap_or_else(|| Section::Other(s!(s)))
    }

    pub fn name(&self) -> &str {
        match self {
            Section::ChurchYard => "Church Yard",
            Section::OldYard => "Old Yard",
            Section::NewYard => "New Yard",
            Section::UpperTerrace => "Upper Terrace",
            Section::IntervaleTerrace => "Intervale Terrace",
            Section::Other(s) => s,
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<Section> for String {
    fn from(s: Section) -> String { s.name().to_string() }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Plot {
    pub id: String,
    pub section: Section,
    pub purchaser: Option<String>,
    /// Filenames in on-disk order
    pub monument_images: Vec<String>,
}

impl Plot {
    /// Split a `;`-joined image list, dropping blanks.
    pub fn split_images(field: &str) -> Vec<String> {
        field
            .split(MONUMENT_IMAGE_SEP)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(into = "String")]
pub enum LotStatus {
    Available,
    Occupied,
    FullyOccupied,
    PartiallyOccupied,
    Unoccupied,
    NotAvailable,
    Other(String),
}

impl LotStatus {
    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "available" => LotStatus::Available,
            "occupied" => LotStatus::Occupied,
            "fully occupied" => LotStatus::FullyOccupied,
            "partially occupied" => LotStatus::PartiallyOccupied,
            "unoccupied" => LotStatus::Unoccupied,
            "not available" => LotStatus::NotAvailable,
            _ => LotStatus::Other(s!(s.trim())),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            LotStatus::Available => "Available",
            LotStatus::Occupied => "Occupied",
            LotStatus::FullyOccupied => "Fully Occupied",
            LotStatus::PartiallyOccupied => "Partially Occupied",
            LotStatus::Unoccupied => "Unoccupied",
            LotStatus::NotAvailable => "Not Available",
            LotStatus::Other(s) => s,
        }
    }

    /// Status alone says someone is buried here.
    pub fn marks_occupied(&self) -> bool {
        matches!(self, LotStatus::Occupied | LotStatus::FullyOccupied)
    }
}

impl fmt::Display for LotStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<LotStatus> for String {
    fn from(s: LotStatus) -> String { s.name().to_string() }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Lot {
    /// `<plot_id>-L<n>`
    pub id: String,
    pub status: LotStatus,
    pub purchased_rights: Option<u32>,
    pub remaining_rights: Option<u32>,
}

/// A lot is owned by a plot when its id is `<plot_id>-L...`.
/// Plain prefix matching would put `CYA10-L1` under `CYA1`.
pub fn lot_belongs_to(lot_id: &str, plot_id: &str) -> bool {
    lot_id
        .strip_prefix(plot_id)
        .is_some_and(|rest| rest.starts_with(LOT_SEPARATOR))
}

/// Plot part of a lot id, if it has one.
pub fn plot_of_lot(lot_id: &str) -> Option<&str> {
    lot_id.rfind(LOT_SEPARATOR).map(|ix| &lot_id[..ix]).filter(|p| !p.is_empty())
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(into = "String")]
pub enum OccupantStatus {
    Occupant,
    Reserved,
    Memorial,
    Other(String),
}

impl OccupantStatus {
    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "occupant" => OccupantStatus::Occupant,
            "reserved" => OccupantStatus::Reserved,
            "memorial" => OccupantStatus::Memorial,
            _ => OccupantStatus::Other(s!(s.trim())),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            OccupantStatus::Occupant => "Occupant",
            OccupantStatus::Reserved => "Reserved",
            OccupantStatus::Memorial => "Memorial",
            OccupantStatus::Other(s) => s,
        }
    }
}

impl From<OccupantStatus> for String {
    fn from(s: OccupantStatus) -> String { s.name().to_string() }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Occupant {
    pub lot_id: String,
    pub name: String,
    pub veteran: bool,
    /// Year-only or full date, as written
    pub death_date: Option<String>,
    pub status: OccupantStatus,
    pub notes: Option<String>,
}

/// Only the exact marker counts after trimming surrounding whitespace;
/// "yes", "Y" or blank do not.
pub fn is_veteran_flag(cell: &str) -> bool {
    cell.trim() == VETERAN_FLAG
}
