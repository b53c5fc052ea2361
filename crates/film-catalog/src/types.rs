//! Core domain types for the film catalog.
//!
//! This module defines the film record and the catalog that owns them.
//! Key Rust concepts demonstrated here:
//! - Type aliases for domain clarity (FilmId, Year)
//! - serde derive with field aliases for tolerant JSON mapping
//! - Borrowing: the catalog hands out `&Film`, never copies

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

// =============================================================================
// Type Aliases
// =============================================================================

/// Unique identifier for a film within a catalog
pub type FilmId = u32;

/// Release year
pub type Year = u16;

// =============================================================================
// Film
// =============================================================================

/// A single film record as stored in the JSON dataset.
///
/// Unknown keys in the source document (a title, for instance) are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Film {
    pub id: FilmId,
    pub country: String,
    pub year: Year,
    /// Genre labels in source order
    ///
    /// Older exports spell this key `generes`, so both are accepted
    #[serde(alias = "generes")]
    pub genres: Vec<String>,
    pub revenue: i64,
    pub cost: i64,
    pub rating: f32,
}

impl Film {
    /// `revenue - cost`; negative for films that lost money
    ///
    /// Catalog loading rejects records where this would overflow.
    pub fn margin(&self) -> i64 {
        self.revenue - self.cost
    }

    /// Whether `genre` is one of this film's labels (exact match)
    pub fn has_genre(&self, genre: &str) -> bool {
        self.genres.iter().any(|g| g == genre)
    }

    /// Whether the release year lies in `from..=to`
    pub fn released_between(&self, from: Year, to: Year) -> bool {
        from <= self.year && self.year <= to
    }
}

impl fmt::Display for Film {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} {} ({}) [{}] rating {:.1}, margin {}",
            self.id,
            self.country,
            self.year,
            self.genres.join(", "),
            self.rating,
            self.margin()
        )
    }
}

// =============================================================================
// Summary
// =============================================================================

/// Headline numbers for a loaded catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CatalogSummary {
    pub films: usize,
    pub countries: usize,
    pub genres: usize,
    /// Earliest and latest release year, `None` for an empty catalog
    pub year_span: Option<(Year, Year)>,
}

// =============================================================================
// FilmCatalog - The In-Memory Dataset
// =============================================================================

/// The loaded, immutable sequence of films.
///
/// Films are kept in source order; every query that returns a subsequence
/// preserves that order. An id index gives O(1) lookups.
///
/// Rust concepts demonstrated:
/// - Ownership: the catalog owns its `Vec<Film>`
/// - No interior mutability: `FilmCatalog` is `Send + Sync` and can be shared
///   behind an `Arc` without locking
#[derive(Debug, Clone, PartialEq)]
pub struct FilmCatalog {
    pub(crate) films: Vec<Film>,
    /// Position of each film in `films`
    pub(crate) id_index: HashMap<FilmId, usize>,
}

impl FilmCatalog {
    /// Creates a new, empty catalog
    pub fn new() -> Self {
        Self {
            films: Vec::new(),
            id_index: HashMap::new(),
        }
    }

    /// All films in source order
    pub fn films(&self) -> &[Film] {
        &self.films
    }

    /// Get a film by ID
    pub fn get(&self, id: FilmId) -> Option<&Film> {
        self.id_index.get(&id).map(|&pos| &self.films[pos])
    }

    pub fn len(&self) -> usize {
        self.films.len()
    }

    pub fn is_empty(&self) -> bool {
        self.films.is_empty()
    }
}

impl Default for FilmCatalog {
    fn default() -> Self {
        Self::new()
    }
}
