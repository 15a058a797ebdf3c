//! Storage error types.

use thiserror::Error;

/// Errors that can occur when using a key-value store.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Failed to open the backing store.
    #[error("Failed to open store: {0}")]
    OpenError(String),

    /// Failed to read a key.
    #[error("Read failed for {key}: {reason}")]
    ReadError { key: String, reason: String },

    /// Failed to write a key.
    #[error("Write failed for {key}: {reason}")]
    WriteError { key: String, reason: String },

    /// Failed to delete a key.
    #[error("Delete failed for {key}: {reason}")]
    DeleteError { key: String, reason: String },
}
