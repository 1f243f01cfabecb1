//! Shared error type for the storage ports

use std::path::PathBuf;

pub type RepoResult<T> = Result<T, RepositoryError>;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("Failed to access site data: {message}")]
    AccessError { message: String },

    #[error("Failed to serialize site data: {message}")]
    SerializationError { message: String },

    #[error(
        "data file corrupted: {path}\n  → Fix: restore the file from a backup or remove it\n  → Details: {message}"
    )]
    Corrupted { path: PathBuf, message: String },
}

/// In-place change to a whole collection, applied under the store's write
/// lock. Returns whether the collection changed and must be written back.
pub type Edit<'a, T> = Box<dyn FnOnce(&mut T) -> bool + 'a>;
