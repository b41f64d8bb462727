//! Configuration for neocat
//!
//! Centralized configuration with sensible defaults.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{NeoError, Result};
use crate::router::RangeEntry;

/// Main configuration for a neocat instance
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Storage Configuration
    // -------------------------------------------------------------------------
    /// Directory holding the per-range CSV files; range-map file names
    /// are resolved relative to this directory.
    pub data_dir: PathBuf,

    // -------------------------------------------------------------------------
    // Range Map Configuration
    // -------------------------------------------------------------------------
    /// Ordered range map: which CSV file owns which date window.
    /// Fixed for the lifetime of the run.
    pub ranges: Vec<RangeEntry>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            ranges: vec![
                RangeEntry::new(20251201, 20251208, "dez01.csv"),
                RangeEntry::new(20251209, 20251216, "dez02.csv"),
                RangeEntry::new(20251217, 20251224, "dez03.csv"),
                RangeEntry::new(20260101, 20260105, "jan01.csv"),
            ],
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Load a range map from a JSON file, replacing the built-in table.
    ///
    /// Expected shape:
    /// ```json
    /// [{ "start": 20251201, "end": 20251208, "file": "dez01.csv" }]
    /// ```
    pub fn load_ranges(&mut self, path: &Path) -> Result<()> {
        let text = fs::read_to_string(path)?;
        let ranges: Vec<RangeEntry> = serde_json::from_str(&text)
            .map_err(|e| NeoError::Config(format!("invalid range map '{}': {}", path.display(), e)))?;

        if ranges.is_empty() {
            return Err(NeoError::Config(format!(
                "range map '{}' contains no entries",
                path.display()
            )));
        }

        self.ranges = ranges;
        Ok(())
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the data directory (root for all CSV files)
    pub fn data_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.data_dir = path.into();
        self
    }

    /// Replace the whole range map
    pub fn ranges(mut self, ranges: Vec<RangeEntry>) -> Self {
        self.config.ranges = ranges;
        self
    }

    /// Append one range-map entry
    pub fn range(mut self, start: i32, end: i32, file: impl Into<PathBuf>) -> Self {
        self.config.ranges.push(RangeEntry::new(start, end, file));
        self
    }

    /// Drop the built-in range table (useful before adding custom entries)
    pub fn clear_ranges(mut self) -> Self {
        self.config.ranges.clear();
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
