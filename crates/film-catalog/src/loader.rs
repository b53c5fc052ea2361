//! Catalog construction.
//!
//! Loading is a one-shot pipeline:
//! 1. Resolve the dataset path (from a [`CatalogConfig`] or given directly)
//! 2. Parse the JSON array into films
//! 3. Build the id index, validating the catalog invariants on the way
//!
//! Any failure aborts construction; there is no partially loaded catalog.

use crate::config::CatalogConfig;
use crate::error::{LoadError, Result};
use crate::parser;
use crate::types::*;
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, info, instrument};

impl FilmCatalog {
    /// Load the dataset named by `config`
    pub fn load(config: &CatalogConfig) -> Result<Self> {
        Self::load_from_file(&config.resolve_path())
    }

    /// Load the dataset from a JSON file
    #[instrument(skip_all, fields(path = %path.display()))]
    pub fn load_from_file(path: &Path) -> Result<Self> {
        info!("Loading film catalog");

        let films = parser::parse_file(path)?;
        let catalog = Self::from_films(films)?;

        info!("Loaded {} films", catalog.len());
        Ok(catalog)
    }

    /// Build a catalog from an in-memory JSON document
    pub fn from_json_str(content: &str) -> Result<Self> {
        let films = parser::parse_films(content, "<memory>")?;
        Self::from_films(films)
    }

    /// Build a catalog from already-parsed films, keeping their order
    ///
    /// Fails on duplicate ids, non-finite ratings, and revenue/cost pairs
    /// whose margin does not fit in an `i64`.
    pub fn from_films(films: Vec<Film>) -> Result<Self> {
        let mut id_index = HashMap::with_capacity(films.len());

        for (pos, film) in films.iter().enumerate() {
            if !film.rating.is_finite() {
                return Err(LoadError::InvalidValue {
                    field: format!("rating of film {}", film.id),
                    value: film.rating.to_string(),
                });
            }
            if film.revenue.checked_sub(film.cost).is_none() {
                return Err(LoadError::InvalidValue {
                    field: format!("margin of film {}", film.id),
                    value: format!("{} - {}", film.revenue, film.cost),
                });
            }
            if id_index.insert(film.id, pos).is_some() {
                return Err(LoadError::DuplicateId { id: film.id });
            }
        }

        debug!("Indexed {} film ids", id_index.len());
        Ok(Self { films, id_index })
    }
}
