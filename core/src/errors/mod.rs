//! Domain-specific error types and error handling.
//!
//! Absence is deliberately not an error here: reads return `Option`, and
//! mutations on a missing guid report `Ok(false)` instead of failing.

use thiserror::Error;

/// Core domain errors
#[derive(Error, Debug)]
pub enum DomainError {
    /// Issuance conflict: the guid or the token value is already present.
    /// Surfaced to the caller, never retried internally.
    #[error("Duplicate key: {field}")]
    DuplicateKey { field: String },

    /// The backing store could not be opened, queried, or committed.
    /// Propagated as-is; the caller decides the retry policy.
    #[error("Storage unavailable: {message}")]
    StorageUnavailable { message: String },

    /// Stored data could not be decoded (e.g. a corrupt activation date).
    #[error("Internal error: {message}")]
    Internal { message: String },
}

pub type DomainResult<T> = Result<T, DomainError>;
