// src/config/options.rs
//
// On-disk configuration (`cemetery.toml`). Every section is optional; a
// missing file means all defaults.

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;

use super::consts::*;
use crate::error::ConfigError;
use crate::store::DataPaths;
use crate::tooltip::TooltipStyle;

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppOptions {
    pub data: DataOptions,
    pub map: MapOptions,
    pub tooltip: TooltipOptions,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DataOptions {
    /// Directory holding plots.csv / lots.csv / occupants.csv
    pub dir: PathBuf,
}

impl Default for DataOptions {
    fn default() -> Self {
        Self { dir: PathBuf::from(DEFAULT_DATA_DIR) }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MapOptions {
    /// Optional PNG backdrop; regions are drawn on a plain canvas without it.
    pub image: Option<PathBuf>,
    pub regions: PathBuf,
}

impl Default for MapOptions {
    fn default() -> Self {
        Self {
            image: None,
            regions: PathBuf::from(DEFAULT_DATA_DIR).join(REGIONS_FILE),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TooltipOptions {
    pub style: TooltipStyle,
}

impl AppOptions {
    /// Load from `path`. A missing file yields defaults; anything else that
    /// goes wrong is an error.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            logd!("Config: {} not found, using defaults", path.display());
            return Ok(Self::default().with_env());
        }
        let text = fs::read_to_string(path)
            .map_err(|source| ConfigError::Read { path: path.to_path_buf(), source })?;
        let opts = Self::parse(&text)
            .map_err(|source| ConfigError::Parse { path: path.to_path_buf(), source })?;
        logf!("Config: loaded {}", path.display());
        Ok(opts.with_env())
    }

    /// Load `cemetery.toml` from the working directory.
    pub fn load_default() -> Result<Self, ConfigError> {
        Self::load(Path::new(CONFIG_FILE))
    }

    pub fn parse(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// `CEMETERY_DATA_DIR` wins over the file.
    fn with_env(self) -> Self {
        self.with_data_dir_override(std::env::var_os(DATA_DIR_ENV).map(PathBuf::from))
    }

    pub fn with_data_dir_override(mut self, dir: Option<PathBuf>) -> Self {
        if let Some(dir) = dir.filter(|d| !d.as_os_str().is_empty()) {
            self.data.dir = dir;
        }
        self
    }

    pub fn data_paths(&self) -> DataPaths {
        DataPaths::in_dir(&self.data.dir)
    }
}
