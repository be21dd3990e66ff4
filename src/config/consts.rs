// src/config/consts.rs

// Data files (header row must be line 1)
pub const DEFAULT_DATA_DIR: &str = "data";
pub const PLOTS_FILE: &str = "plots.csv";
pub const LOTS_FILE: &str = "lots.csv";
pub const OCCUPANTS_FILE: &str = "occupants.csv";
pub const REGIONS_FILE: &str = "regions.csv";
pub const CSV_SEP: char = ',';

// Config
pub const CONFIG_FILE: &str = "cemetery.toml";
pub const DATA_DIR_ENV: &str = "CEMETERY_DATA_DIR";

// Local scratch (logs)
pub const STORE_DIR: &str = ".store";
pub const DEBUG_LOG_FILE: &str = "debug.log";

// Identifiers
pub const LOT_SEPARATOR: &str = "-L";
pub const MONUMENT_IMAGE_SEP: char = ';';

// Tooltip text
pub const VETERAN_FLAG: &str = "Yes";
pub const VETERAN_MARKER: &str = " ⭐";
pub const UNKNOWN_PURCHASER: &str = "Unknown";
pub const FULL_OCCUPANT_LIMIT: usize = 5;
pub const CALL_TO_ACTION: &str = "Click for full plot details";
