//! # Film Catalog Crate
//!
//! This crate loads a static JSON dataset of films into memory and answers
//! analytical queries over it.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (Film, FilmCatalog, CatalogSummary)
//! - **parser**: Map the JSON document onto `Film` records
//! - **loader**: Build and validate a `FilmCatalog`
//! - **queries**: Grouping, ranking and ratio queries
//! - **config**: Where the dataset lives
//! - **error**: Error types for loading and querying
//!
//! ## Example Usage
//!
//! ```ignore
//! use film_catalog::{CatalogConfig, FilmCatalog};
//!
//! let config = CatalogConfig::default().with_resource_dir("crates/film-catalog/static");
//! let catalog = FilmCatalog::load(&config)?;
//!
//! let (country, count) = catalog.country_with_most_films()?;
//! println!("{} made {} films", country, count);
//!
//! for film in catalog.top5_by_margin()? {
//!     println!("{}", film);
//! }
//! ```

// Public modules
pub mod config;
pub mod error;
pub mod loader;
pub mod parser;
pub mod queries;
pub mod types;

// Re-export commonly used types for convenience
pub use config::CatalogConfig;
pub use error::{LoadError, QueryError, QueryResult, Result};
pub use queries::TOP_N;
pub use types::{CatalogSummary, Film, FilmCatalog, FilmId, Year};
