// src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Loading one of the CSV inputs failed. Terminal for the session: nothing
/// retries, the caller logs it and stays non-interactive.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{}: file is empty (header row required on line 1)", path.display())]
    Empty { path: PathBuf },

    #[error("{}: missing column '{column}' in header row", path.display())]
    MissingColumn { path: PathBuf, column: String },

    /// The header exists but is not on line 1 (e.g. the file was re-sorted).
    #[error("{}: header row found on line {line}, expected line 1", path.display())]
    DisplacedHeader { path: PathBuf, line: usize },

    #[error("{}:{line}: {reason}", path.display())]
    BadRow {
        path: PathBuf,
        line: usize,
        reason: String,
    },

    #[error("loader thread for {what} panicked")]
    Worker { what: &'static str },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
