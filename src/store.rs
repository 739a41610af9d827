//! Year-Partitioned Store
//!
//! Maps a (dataset tag, year) pair to one serialized filter file under a
//! base directory and performs load/save against that path.
//!
//! ## Responsibilities
//! - Resolve the `{tag}_{year}.bloom` naming convention
//! - Persist filters produced by an ingestion pipeline
//! - Load filters read-only for scans, treating missing or unreadable
//!   files as "no data for that year"

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::Result;
use crate::filter::BloomFilter;
use crate::scan::IndexSource;

/// Persistence layer for per-year filter files
///
/// At most one file exists per (tag, year). A missing file is the expected
/// state for a year with no data, not corruption. Files are written once by
/// an ingestion pipeline and treated as immutable inputs during scans.
#[derive(Debug, Clone)]
pub struct YearStore {
    /// Directory holding the filter files
    base_dir: PathBuf,

    /// Dataset tag prepended to every file name
    tag: String,
}

impl YearStore {
    /// Create a store over the given base directory and dataset tag
    pub fn new(base_dir: impl Into<PathBuf>, tag: impl Into<String>) -> Self {
        Self {
            base_dir: base_dir.into(),
            tag: tag.into(),
        }
    }

    /// Create a store from a config
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.base_dir.clone(), config.tag.clone())
    }

    /// Conventional path for a (tag, year) filter file
    pub fn path_for(&self, year: i32) -> PathBuf {
        self.base_dir.join(format!("{}_{}.bloom", self.tag, year))
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Get the dataset tag
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Write a filter to its conventional path
    ///
    /// Creates the base directory if absent. Overwrites any existing file
    /// for the same (tag, year): last write wins, no versioning. Unlike
    /// `load`, I/O failure here propagates to the caller.
    pub fn save(&self, filter: &BloomFilter, year: i32) -> Result<()> {
        fs::create_dir_all(&self.base_dir)?;

        let path = self.path_for(year);
        fs::write(&path, filter.to_bytes())?;

        tracing::debug!("saved filter for {} to {}", year, path.display());
        Ok(())
    }

    /// Read the filter for a year, if one is available
    ///
    /// Returns `None` when the file does not exist. Files that exist but
    /// cannot be read or decoded also yield `None`; the two cases stay
    /// distinguishable in the logs.
    pub fn load(&self, year: i32) -> Option<BloomFilter> {
        let path = self.path_for(year);

        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!("no filter file for {} at {}", year, path.display());
                return None;
            }
            Err(e) => {
                tracing::warn!("failed to read filter file {}: {}", path.display(), e);
                return None;
            }
        };

        match BloomFilter::from_bytes(&bytes) {
            Ok(filter) => Some(filter),
            Err(e) => {
                tracing::warn!("discarding undecodable filter file {}: {}", path.display(), e);
                None
            }
        }
    }
}

impl IndexSource for YearStore {
    fn load_year(&self, year: i32) -> Option<BloomFilter> {
        self.load(year)
    }
}
