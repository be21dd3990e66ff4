// src/gui/components/mod.rs
pub mod data_table;
pub mod legend;
pub mod style_picker;
pub mod tabs;
pub mod tooltip_view;
