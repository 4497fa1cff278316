//! Lead store error types

use crate::storage::StorageError;
use thiserror::Error;

/// Errors returned by [`LeadStore`](crate::store::LeadStore) operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// The storage backend failed to read or write the snapshot
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// The persisted snapshot is not a valid array of leads
    #[error("Corrupt snapshot under key {key:?}: {source}")]
    CorruptSnapshot {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// The in-memory collection could not be serialized
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for store operations
pub type StoreResult<T> = Result<T, StoreError>;
