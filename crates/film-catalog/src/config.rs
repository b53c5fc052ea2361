//! Where the catalog's dataset lives.
//!
//! A dataset is identified by a resource directory plus a file name, so the
//! same configuration can switch between the small fixture and a full export
//! by changing `datafile` only.
//!
//! ```toml
//! resource_dir = "crates/film-catalog/static"
//! datafile = "filmsmall.json"
//! ```

use crate::error::{LoadError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_RESOURCE_DIR: &str = "static";
pub const DEFAULT_DATAFILE: &str = "filmsmall.json";

/// Dataset location
///
/// Both keys are optional in TOML; missing keys take the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub resource_dir: PathBuf,
    pub datafile: String,
}

impl CatalogConfig {
    /// Read a TOML configuration file
    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            LoadError::Config(format!("cannot read {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| LoadError::Config(e.to_string()))
    }

    pub fn with_resource_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.resource_dir = dir.into();
        self
    }

    pub fn with_datafile(mut self, datafile: impl Into<String>) -> Self {
        self.datafile = datafile.into();
        self
    }

    /// Full path of the dataset file
    pub fn resolve_path(&self) -> PathBuf {
        self.resource_dir.join(&self.datafile)
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            resource_dir: PathBuf::from(DEFAULT_RESOURCE_DIR),
            datafile: DEFAULT_DATAFILE.to_string(),
        }
    }
}
