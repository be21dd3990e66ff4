// src/bin/cli.rs
use std::process::ExitCode;

use plotmap::{cli, log::{self, Sink}};

fn main() -> ExitCode {
    log::init(Sink::Stderr);
    if let Err(e) = color_eyre::install() {
        eprintln!("Error: {e}");
        return ExitCode::FAILURE;
    }
    match cli::run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:?}");
            ExitCode::FAILURE
        }
    }
}
