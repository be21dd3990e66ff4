// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use eframe::egui::ViewportBuilder;
use plotmap::{
    config::{options::AppOptions, state::AppState},
    gui,
    log::{self, Sink},
};

fn main() {
    log::init(Sink::File);

    let options = match AppOptions::load_default() {
        Ok(o) => o,
        Err(e) => {
            plotmap::loge!("Config: {}", e);
            eprintln!("Config error: {e}");
            std::process::exit(1);
        }
    };
    let state = AppState::new(options);

    let native = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_inner_size([state.gui.window_w, state.gui.window_h])
            .with_title("Cemetery Plot Map"),
        ..Default::default()
    };

    if let Err(e) = gui::run(native, state) {
        plotmap::loge!("GUI failed: {}", e);
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
