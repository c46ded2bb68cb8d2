//! Error types for the cache
//!
//! Provides unified error handling using thiserror. Stores report failures as
//! [`StoreError`]; the cache façade classifies them into [`CacheError`] so that
//! callers see one stable error surface whatever the storage medium.

use std::fmt;

use thiserror::Error;

use crate::cache::CacheId;

/// Boxed error used for causes coming from generators and storage media.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

// == Operation ==
/// Public cache operation during which a failure occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Get,
    Set,
    Delete,
    Clear,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::Get => "get",
            Operation::Set => "set",
            Operation::Delete => "delete",
            Operation::Clear => "clear",
        };
        f.write_str(name)
    }
}

// == Store Error Enum ==
/// Errors raised by a [`Store`](crate::cache::Store) implementation.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Key absent or expired
    #[error("Key not found: {0}")]
    NotFound(String),

    /// Argument rejected by the store
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The storage medium itself failed
    #[error("Storage failure: {0}")]
    Storage(#[source] BoxError),
}

impl StoreError {
    /// Wraps a native backend failure.
    pub fn storage(cause: impl Into<BoxError>) -> Self {
        StoreError::Storage(cause.into())
    }
}

// == Cache Error Enum ==
/// Unified error type for the cache façade.
#[derive(Error, Debug)]
pub enum CacheError {
    /// A key or TTL failed normalization
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Key absent or expired at read time
    #[error("Key not found: {0}")]
    NotFound(String),

    /// The caller-supplied generator failed on a miss
    #[error("Could not generate value for key '{key}': {source}")]
    Generation {
        key: String,
        #[source]
        source: BoxError,
    },

    /// Any other failure of the storage medium
    #[error("Could not {operation} data in cache {cache}: {source}")]
    Storage {
        operation: Operation,
        cache: CacheId,
        #[source]
        source: BoxError,
    },
}

impl CacheError {
    // == Classify ==
    /// Maps a store failure onto the public taxonomy.
    ///
    /// Failures that already belong to the taxonomy (not found, invalid
    /// argument) pass through unchanged. Everything else is wrapped as
    /// [`CacheError::Storage`], naming the operation and the cache instance.
    pub fn classify(operation: Operation, cache: CacheId, error: StoreError) -> Self {
        match error {
            StoreError::NotFound(key) => CacheError::NotFound(key),
            StoreError::InvalidArgument(msg) => CacheError::InvalidArgument(msg),
            StoreError::Storage(source) => CacheError::Storage {
                operation,
                cache,
                source,
            },
        }
    }
}

// == Result Type Alias ==
/// Convenience Result type for the cache.
pub type Result<T> = std::result::Result<T, CacheError>;
