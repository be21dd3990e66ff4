// src/gui/pages/mod.rs
use eframe::egui;

use crate::gui::app::App;

pub mod map;
pub mod plots;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PageKind {
    Map,
    Plots,
}

pub trait Page: Send + Sync + 'static {
    fn title(&self) -> &'static str;
    fn kind(&self) -> PageKind;

    /// Draw the whole page body below the tabs.
    fn draw(&self, ui: &mut egui::Ui, app: &mut App);
}
