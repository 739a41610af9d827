//! Configuration for prefixtrail
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;

/// Main configuration for a prefixtrail store and scanner
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Storage Configuration
    // -------------------------------------------------------------------------
    /// Directory holding the per-year filter files
    /// Layout:
    ///   {base_dir}/
    ///     ├── {tag}_2014.bloom
    ///     ├── {tag}_2015.bloom
    ///     └── ...
    pub base_dir: PathBuf,

    /// Dataset tag prepended to every filter file name
    pub tag: String,

    // -------------------------------------------------------------------------
    // Filter Configuration
    // -------------------------------------------------------------------------
    /// Expected insertions per year filter (sizing parameter for new filters)
    pub filter_capacity: usize,

    // -------------------------------------------------------------------------
    // Scan Configuration
    // -------------------------------------------------------------------------
    /// Ceiling on days examined per scan, independent of the result limit.
    /// `None` means the scan is bounded only by the result limit and by
    /// running out of year files.
    pub max_scan_days: Option<u32>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_dir: PathBuf::from("."),
            tag: "rrc00".to_string(),
            filter_capacity: 1_000_000,
            max_scan_days: None,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the directory holding the filter files
    pub fn base_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.base_dir = path.into();
        self
    }

    /// Set the dataset tag used in filter file names
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.config.tag = tag.into();
        self
    }

    /// Set the expected insertions per year filter
    pub fn filter_capacity(mut self, capacity: usize) -> Self {
        self.config.filter_capacity = capacity;
        self
    }

    /// Set the ceiling on days examined per scan
    pub fn max_scan_days(mut self, days: u32) -> Self {
        self.config.max_scan_days = Some(days);
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
