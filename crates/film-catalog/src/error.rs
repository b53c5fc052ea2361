//! Error types for the film-catalog crate.
//!
//! Two separate enums keep the two failure domains apart:
//! - [`LoadError`] covers everything that can go wrong while building a catalog
//! - [`QueryError`] covers queries that have no meaningful answer
//!
//! Rust concept: a catalog that failed to load never exists, so query code
//! never has to handle load failures.

use thiserror::Error;

/// Errors that can occur while loading and validating a catalog
#[derive(Error, Debug)]
pub enum LoadError {
    /// Resource file does not exist
    #[error("Failed to open file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading the resource
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The document is not a JSON array of film records
    ///
    /// `line` is 1-based, as reported by serde_json
    #[error("Parse error at line {line} in {file}: {reason}")]
    Parse {
        file: String,
        line: usize,
        reason: String,
    },

    /// Two records share the same id
    #[error("Duplicate film id: {id}")]
    DuplicateId { id: u32 },

    /// A field mapped successfully but holds an unusable value
    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },

    /// Configuration file could not be read or decoded
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Errors returned by query operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// Denominator genre never occurs in the catalog
    #[error("Cannot compute ratio: genre '{genre}' has no occurrences")]
    DivideByZero { genre: String },

    /// Query needs at least one film but the catalog is empty
    #[error("No data available for {query}: catalog is empty")]
    NoData { query: &'static str },
}

/// Convenience type alias for loading results
///
/// Rust concept: Type aliases make code more readable.
/// Instead of writing `Result<T, LoadError>` everywhere,
/// we can write `Result<T>`
pub type Result<T> = std::result::Result<T, LoadError>;

/// Convenience type alias for query results
pub type QueryResult<T> = std::result::Result<T, QueryError>;
