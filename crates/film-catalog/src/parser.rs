//! Parser for the JSON film dataset.
//!
//! The dataset is a single JSON array of film objects:
//!
//! ```text
//! [
//!   {"id": 1, "country": "China", "year": 1985, "genres": ["drama"],
//!    "revenue": 120, "cost": 80, "rating": 7.1},
//!   ...
//! ]
//! ```
//!
//! Parsing only maps fields; invariants that span records (unique ids) are
//! checked by the loader.

use crate::error::{LoadError, Result};
use crate::types::Film;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Read the whole resource into memory
///
/// A missing file is reported as `FileNotFound` rather than a bare I/O error.
pub fn read_resource(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => LoadError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => LoadError::Io(e),
    })
}

/// Parse a JSON document into films, preserving array order
///
/// `file` is only used to label errors.
pub fn parse_films(content: &str, file: &str) -> Result<Vec<Film>> {
    serde_json::from_str::<Vec<Film>>(content).map_err(|e| LoadError::Parse {
        file: file.to_string(),
        line: e.line(),
        reason: e.to_string(),
    })
}

/// Read and parse a dataset file
pub fn parse_file(path: &Path) -> Result<Vec<Film>> {
    let content = read_resource(path)?;
    let file = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    parse_films(&content, &file)
}
