// src/store.rs
//
// In-memory tables, loaded once and read-only afterwards.
//
// - Plots and lots are keyed by id, first record wins on duplicates, file
//   order is kept for iteration.
// - Occupants stay a plain list in file order (tooltips enumerate them that way).

use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
    thread,
};

use crate::config::consts::{CSV_SEP, LOTS_FILE, OCCUPANTS_FILE, PLOTS_FILE};
use crate::csv::{self, Table, cell, opt_cell};
use crate::error::LoadError;
use crate::model::{
    Lot, LotStatus, Occupant, OccupantStatus, Plot, Section, is_veteran_flag, lot_belongs_to,
};
use crate::progress::Progress;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DataPaths {
    pub plots: PathBuf,
    pub lots: PathBuf,
    pub occupants: PathBuf,
}

impl DataPaths {
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            plots: dir.join(PLOTS_FILE),
            lots: dir.join(LOTS_FILE),
            occupants: dir.join(OCCUPANTS_FILE),
        }
    }
}

/// Insertion-ordered map keyed by record id.
#[derive(Clone, Debug)]
struct Keyed<T> {
    items: Vec<T>,
    index: HashMap<String, usize>,
}

impl<T> Default for Keyed<T> {
    fn default() -> Self {
        Self { items: Vec::new(), index: HashMap::new() }
    }
}

impl<T> Keyed<T> {
    fn from_vec(items: Vec<T>, key: impl Fn(&T) -> &str, what: &str) -> Self {
        let mut out = Self {
            items: Vec::with_capacity(items.len()),
            index: HashMap::with_capacity(items.len()),
        };
        for item in items {
            let k = s!(key(&item));
            if out.index.contains_key(&k) {
                logw!("Load: duplicate {} id {:?}, keeping the first", what, k);
                continue;
            }
            out.index.insert(k, out.items.len());
            out.items.push(item);
        }
        out
    }

    fn get(&self, key: &str) -> Option<&T> {
        self.index.get(key).map(|&ix| &self.items[ix])
    }
}

#[derive(Clone, Debug, Default)]
pub struct Tables {
    plots: Keyed<Plot>,
    lots: Keyed<Lot>,
    occupants: Vec<Occupant>,
}

impl Tables {
    pub fn new(plots: Vec<Plot>, lots: Vec<Lot>, occupants: Vec<Occupant>) -> Self {
        Self {
            plots: Keyed::from_vec(plots, |p| p.id.as_str(), "plot"),
            lots: Keyed::from_vec(lots, |l| l.id.as_str(), "lot"),
            occupants,
        }
    }

    pub fn plot(&self, id: &str) -> Option<&Plot> { self.plots.get(id) }
    pub fn lot(&self, id: &str) -> Option<&Lot> { self.lots.get(id) }

    pub fn plots(&self) -> impl Iterator<Item = &Plot> { self.plots.items.iter() }
    pub fn lots(&self) -> impl Iterator<Item = &Lot> { self.lots.items.iter() }
    pub fn occupants(&self) -> &[Occupant] { &self.occupants }

    pub fn plot_count(&self) -> usize { self.plots.items.len() }
    pub fn lot_count(&self) -> usize { self.lots.items.len() }

    /// Lots owned by `plot_id` (`<plot_id>-L...`), in file order.
    pub fn lots_for<'a>(&'a self, plot_id: &'a str) -> impl Iterator<Item = &'a Lot> + 'a {
        self.lots.items.iter().filter(move |l| lot_belongs_to(&l.id, plot_id))
    }

    /// Occupant records whose lot belongs to `plot_id`, in file order.
    pub fn occupants_for<'a>(&'a self, plot_id: &'a str) -> impl Iterator<Item = &'a Occupant> + 'a {
        self.occupants.iter().filter(move |o| lot_belongs_to(&o.lot_id, plot_id))
    }

    pub fn occupants_for_lot<'a>(&'a self, lot_id: &'a str) -> impl Iterator<Item = &'a Occupant> + 'a {
        self.occupants.iter().filter(move |o| o.lot_id == lot_id)
    }
}

/* ---------------- Loading ---------------- */

fn read_table(path: &Path) -> Result<Table, LoadError> {
    let text = fs::read_to_string(path)
        .map_err(|source| LoadError::Io { path: path.to_path_buf(), source })?;
    Table::parse(&text, CSV_SEP).ok_or_else(|| LoadError::Empty { path: path.to_path_buf() })
}

pub fn load_plots(path: &Path) -> Result<Vec<Plot>, LoadError> {
    let table = read_table(path)?;
    let id_col = table.require(path, &["plot_id"])?[0];
    let section = table.column("section_name");
    let purchaser = table.column("purchaser");
    let images = table.column("monument_images");

    let mut out = Vec::with_capacity(table.rows.len());
    for rec in &table.rows {
        let id = cell(rec, Some(id_col));
        if id.is_empty() {
            logd!("Load: {}:{} has no plot_id, skipped", path.display(), rec.line);
            continue;
        }
        out.push(Plot {
            id: s!(id),
            section: Section::parse(cell(rec, section)),
            purchaser: opt_cell(rec, purchaser),
            monument_images: Plot::split_images(cell(rec, images)),
        });
    }
    logd!("Load: {} plots from {}", out.len(), path.display());
    Ok(out)
}

pub fn load_lots(path: &Path) -> Result<Vec<Lot>, LoadError> {
    let table = read_table(path)?;
    let cols = table.require(path, &["lot_id", "status"])?;
    let (id_col, status_col) = (cols[0], cols[1]);
    let purchased = table.column("purchased_rights");
    let remaining = table.column("remaining_rights");

    let mut out = Vec::with_capacity(table.rows.len());
    for rec in &table.rows {
        let id = cell(rec, Some(id_col));
        if id.is_empty() {
            logd!("Load: {}:{} has no lot_id, skipped", path.display(), rec.line);
            continue;
        }
        out.push(Lot {
            id: s!(id),
            status: LotStatus::parse(cell(rec, Some(status_col))),
            purchased_rights: cell(rec, purchased).parse().ok(),
            remaining_rights: cell(rec, remaining).parse().ok(),
        });
    }
    logd!("Load: {} lots from {}", out.len(), path.display());
    Ok(out)
}

pub fn load_occupants(path: &Path) -> Result<Vec<Occupant>, LoadError> {
    let table = read_table(path)?;
    let cols = table.require(path, &["lot_id", "name"])?;
    let (lot_col, name_col) = (cols[0], cols[1]);
    let status = table.column("status");
    let veteran = table.column("veteran");
    let death = table.column("death_date");
    let notes = table.column("notes");

    let mut out = Vec::with_capacity(table.rows.len());
    for rec in &table.rows {
        let lot_id = cell(rec, Some(lot_col));
        if lot_id.is_empty() {
            logd!("Load: {}:{} has no lot_id, skipped", path.display(), rec.line);
            continue;
        }
        out.push(Occupant {
            lot_id: s!(lot_id),
            name: s!(cell(rec, Some(name_col))),
            veteran: is_veteran_flag(cell(rec, veteran)),
            death_date: opt_cell(rec, death),
            status: OccupantStatus::parse(cell(rec, status)),
            notes: opt_cell(rec, notes),
        });
    }
    logd!("Load: {} occupants from {}", out.len(), path.display());
    Ok(out)
}

fn joined<T>(
    handle: thread::ScopedJoinHandle<'_, Result<T, LoadError>>,
    what: &'static str,
) -> Result<T, LoadError> {
    handle.join().unwrap_or_else(|_| Err(LoadError::Worker { what }))
}

fn assemble(
    plots: Result<Vec<Plot>, LoadError>,
    lots: Result<Vec<Lot>, LoadError>,
    occupants: Result<Vec<Occupant>, LoadError>,
    progress: &mut dyn Progress,
) -> Result<Tables, LoadError> {
    let plots = plots?;
    progress.item_done("plots");
    let lots = lots?;
    progress.item_done("lots");
    let occupants = occupants?;
    progress.item_done("occupants");
    Ok(Tables::new(plots, lots, occupants))
}

/// Load all three tables concurrently and build `Tables` once all of them
/// are in. The first failure (plots, lots, occupants order) is returned and
/// nothing is built.
pub fn load_all(paths: &DataPaths, progress: &mut dyn Progress) -> Result<Tables, LoadError> {
    progress.begin(3);
    progress.log("Loading plots, lots and occupants");

    let (plots, lots, occupants) = thread::scope(|s| {
        let p = s.spawn(|| load_plots(&paths.plots));
        let l = s.spawn(|| load_lots(&paths.lots));
        let o = s.spawn(|| load_occupants(&paths.occupants));
        (joined(p, "plots"), joined(l, "lots"), joined(o, "occupants"))
    });

    let result = assemble(plots, lots, occupants, progress);

    match &result {
        Ok(t) => logf!(
            "Load: ready (plots={}, lots={}, occupants={})",
            t.plot_count(), t.lot_count(), t.occupants().len()
        ),
        Err(e) => loge!("Load: failed: {}", e),
    }
    progress.finish();
    result
}

/// Write rows as CSV to `w` (header first).
pub fn write_csv<W: std::io::Write>(
    mut w: W,
    headers: &[&str],
    rows: &[Vec<String>],
) -> std::io::Result<()> {
    csv::write_row(&mut w, headers, CSV_SEP)?;
    for r in rows {
        csv::write_row(&mut w, r.as_slice(), CSV_SEP)?;
    }
    Ok(())
}
