//! Error types for all-changes

use crate::types::BuildRef;
use thiserror::Error;

/// Errors surfaced by the library
#[derive(Error, Debug)]
pub enum Error {
    /// A resolver needs at least one relation provider
    #[error("no changes aggregators configured")]
    NoAggregators,

    /// No job with this name exists in the build history
    #[error("job not found: {0}")]
    JobNotFound(String),

    /// The job exists but the requested build does not
    #[error("build not found: {0}")]
    BuildNotFound(BuildRef),

    /// The external build store failed to answer a query
    #[error("build history error: {0}")]
    History(String),

    /// Reading a snapshot file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A snapshot or report could not be (de)serialized
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result alias using the crate error
pub type Result<T> = std::result::Result<T, Error>;
