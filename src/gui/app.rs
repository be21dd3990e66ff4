// src/gui/app.rs
use std::{
    error::Error,
    path::Path,
    sync::{
        Arc, Mutex,
        mpsc::{self, Receiver, TryRecvError},
    },
    thread,
};

use eframe::egui;

use crate::{
    config::state::AppState,
    error::LoadError,
    regions::RegionMap,
    status::{PlotStatus, compute_status},
    store::{self, Tables},
};

use super::{pages::Page, progress::GuiProgress, router};

pub fn run(options: eframe::NativeOptions, state: AppState) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Cemetery Plot Map",
        options,
        Box::new(|cc| Ok(Box::new(App::new(cc, state)))),
    )?;
    Ok(())
}

/// One row of the Plots page, derived once after load.
#[derive(Clone, Debug)]
pub struct PlotRow {
    pub plot_id: String,
    pub section: String,
    pub status: PlotStatus,
}

pub enum LoadPhase {
    Loading(Receiver<Result<Tables, LoadError>>),
    Ready(Arc<Tables>),
    Failed,
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    pub phase: LoadPhase,

    pub regions: RegionMap,
    /// Parallel to `regions.regions`: does the region's plot exist?
    pub enhanced: Vec<bool>,
    pub map_texture: Option<egui::TextureHandle>,

    pub plot_rows: Vec<PlotRow>,

    // status line (loader thread writes here)
    pub status: Arc<Mutex<String>>,
}

fn load_map_texture(ctx: &egui::Context, path: &Path) -> Option<egui::TextureHandle> {
    let img = match image::open(path) {
        Ok(img) => img.to_rgba8(),
        Err(e) => {
            loge!("Map: cannot open {}: {}", path.display(), e);
            return None;
        }
    };
    let size = [img.width() as usize, img.height() as usize];
    let pixels = egui::ColorImage::from_rgba_unmultiplied(size, img.as_raw());
    logf!("Map: backdrop {}x{} from {}", size[0], size[1], path.display());
    Some(ctx.load_texture("map-backdrop", pixels, egui::TextureOptions::LINEAR))
}

impl App {
    pub fn new(cc: &eframe::CreationContext<'_>, state: AppState) -> Self {
        let status = Arc::new(Mutex::new(s!("Loading…")));

        let regions = match RegionMap::load(&state.options.map.regions) {
            Ok(r) => r,
            Err(e) => {
                loge!("Regions: {}", e);
                RegionMap::default()
            }
        };

        let map_texture = state
            .options
            .map
            .image
            .as_deref()
            .and_then(|p| load_map_texture(&cc.egui_ctx, p));

        // Three CSV loads in the background; the map turns interactive once
        // all of them are in.
        let (tx, rx) = mpsc::channel();
        let paths = state.options.data_paths();
        let ctx = cc.egui_ctx.clone();
        let worker_status = Arc::clone(&status);
        thread::spawn(move || {
            let mut progress = GuiProgress::new(worker_status);
            let result = store::load_all(&paths, &mut progress);
            let _ = tx.send(result);
            ctx.request_repaint();
        });

        logf!(
            "Init: regions={}, backdrop={}, tooltip style={}",
            regions.regions.len(),
            map_texture.is_some(),
            state.gui.tooltip_style
        );

        Self {
            state,
            phase: LoadPhase::Loading(rx),
            enhanced: Vec::new(),
            regions,
            map_texture,
            plot_rows: Vec::new(),
            status,
        }
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn current_index(&self) -> usize { self.state.gui.current_page_index }

    #[inline]
    pub fn set_current_index(&mut self, idx: usize) { self.state.gui.current_page_index = idx; }

    #[inline]
    pub fn current_page(&self) -> &'static dyn Page {
        let pages = router::all_pages();
        pages[self.current_index().min(pages.len() - 1)]
    }

    #[inline]
    pub fn tables(&self) -> Option<&Tables> {
        match &self.phase {
            LoadPhase::Ready(t) => Some(t),
            _ => None,
        }
    }

    pub fn set_status<T: Into<String>>(&self, msg: T) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }

    pub fn status_text(&self) -> String {
        self.status.lock().map(|s| s.clone()).unwrap_or_default()
    }

    /// Dependent init step: runs once, right after all three tables arrive.
    fn on_loaded(&mut self, tables: Tables) {
        self.enhanced = self.regions.enhance(&tables);
        let misses = self.enhanced.iter().filter(|ok| !**ok).count();

        self.plot_rows = tables
            .plots()
            .map(|p| PlotRow {
                plot_id: p.id.clone(),
                section: s!(p.section.name()),
                status: compute_status(&tables, &p.id),
            })
            .collect();

        self.set_status(format!(
            "Ready: {} plots, {} lots, {} occupants ({} map region(s) without a plot)",
            tables.plot_count(),
            tables.lot_count(),
            tables.occupants().len(),
            misses
        ));
        self.phase = LoadPhase::Ready(Arc::new(tables));
    }

    fn poll_load(&mut self) {
        let LoadPhase::Loading(rx) = &self.phase else { return };
        match rx.try_recv() {
            Ok(Ok(tables)) => self.on_loaded(tables),
            Ok(Err(e)) => {
                // Terminal for this session; map stays non-interactive.
                loge!("Init: {}", e);
                self.set_status(format!("Load failed: {e}"));
                self.phase = LoadPhase::Failed;
            }
            Err(TryRecvError::Empty) => {}
            Err(TryRecvError::Disconnected) => {
                loge!("Init: loader thread went away");
                self.set_status("Load failed: loader stopped");
                self.phase = LoadPhase::Failed;
            }
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_load();

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.label(self.status_text());
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            crate::gui::components::tabs::draw(ui, self);

            ui.separator();

            let page = self.current_page();
            page.draw(ui, self);
        });
    }
}
