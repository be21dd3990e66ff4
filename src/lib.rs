// src/lib.rs

#[macro_use]
pub mod macros;

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod csv;
pub mod error;
pub mod gui;
pub mod log;
pub mod model;
pub mod progress;
pub mod regions;
pub mod status;
pub mod store;
pub mod tooltip;
pub mod validate;
