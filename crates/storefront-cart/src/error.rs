//! Cart error types.
//!
//! Callers of the mutation operations never see these: every failure
//! is recovered inside the store (a cart glitch must not take the page
//! down with it). They exist for the persistence path, which logs them
//! before moving on.

use thiserror::Error;

/// Errors that can occur while persisting or rehydrating the cart.
#[derive(Error, Debug)]
pub enum CartError {
    /// The backing store failed.
    #[error("Storage error: {0}")]
    Storage(#[from] storefront_kv::StorageError),

    /// Serializing the cart for persistence failed.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
