// src/log.rs
//
// Subscriber setup. Events themselves go through `tracing` (see the
// logf!/logd!/logw!/loge! shorthands in macros.rs).

use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::{EnvFilter, fmt::time::Uptime};

use crate::config::consts::{DEBUG_LOG_FILE, STORE_DIR};

/// Where log lines go.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sink {
    /// `.store/debug.log`, appended (GUI has no console on Windows)
    File,
    Stderr,
}

// RUST_LOG wins; otherwise info for the log file, warn on the console.
fn filter(sink: Sink) -> EnvFilter {
    let default = match sink {
        Sink::File => "info",
        Sink::Stderr => "warn",
    };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Install the global subscriber. Safe to call more than once; later calls
/// are ignored.
pub fn init(sink: Sink) {
    match sink {
        Sink::Stderr => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter(sink))
                .with_timer(Uptime::default())
                .with_writer(std::io::stderr)
                .try_init();
        }
        Sink::File => {
            let path = Path::new(STORE_DIR).join(DEBUG_LOG_FILE);
            let _ = fs::create_dir_all(STORE_DIR);
            match OpenOptions::new().create(true).append(true).open(&path) {
                Ok(file) => {
                    let _ = tracing_subscriber::fmt()
                        .with_env_filter(filter(sink))
                        .with_timer(Uptime::default())
                        .with_ansi(false)
                        .with_writer(Mutex::new(file))
                        .try_init();
                }
                // Log file unavailable: use stderr.
                Err(_) => init(Sink::Stderr),
            }
        }
    }
}
