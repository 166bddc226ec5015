//! Error types.
//!
//! Searching and narrating never fail. Errors only come from the edges:
//! loading the dataset, looking a hero up, and validating a compare
//! request.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading the hero dataset.
///
/// # Examples
///
/// ```rust
/// use herodex::DatasetError;
///
/// let err = DatasetError::NotAnArray("object".into());
/// assert!(err.to_string().contains("array"));
/// ```
#[derive(Debug, Error)]
pub enum DatasetError {
    /// The dataset file could not be read.
    #[error("Failed to read superheroes data from {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document is not valid JSON, or a record is missing a field.
    #[error("Failed to parse superheroes data: {0}")]
    Parse(#[from] serde_json::Error),

    /// The top-level JSON value is not an array of heroes.
    ///
    /// Contains the kind of value found instead.
    #[error("Superheroes data must be a JSON array, found {0}")]
    NotAnArray(String),
}

/// A hero lookup that matched nothing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// No hero for the given id.
    #[error("Superhero not found")]
    NotFound,

    /// No hero for the given name or id.
    #[error("Superhero {0} not found")]
    NotFoundByName(String),
}

/// Errors from a compare request.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CompareError {
    /// One side of the request lacks a hero, a name or a stat block.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// The request body is not a valid compare document.
    #[error("Invalid request: malformed body ({0})")]
    Malformed(String),
}

impl From<serde_json::Error> for CompareError {
    fn from(err: serde_json::Error) -> Self {
        CompareError::Malformed(err.to_string())
    }
}
