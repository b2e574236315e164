//! Store errors
//!
//! Only snapshot loading can fail; in-memory operations are infallible.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug, Error)]
pub enum StoreError {
    /// Snapshot file could not be read
    #[error("Failed to read snapshot {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Snapshot file is not JSON
    #[error("Snapshot is not valid JSON: {0}")]
    InvalidJson(#[source] serde_json::Error),

    /// Snapshot root is not an object keyed by collection
    #[error("Snapshot root must be a JSON object")]
    NotAnObject,

    /// A collection's records do not match its record type
    #[error("Invalid {collection} records in snapshot: {source}")]
    InvalidCollection {
        collection: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// Two records of one collection share an id
    #[error("Duplicate id '{id}' in {collection}")]
    DuplicateId { collection: &'static str, id: String },
}
