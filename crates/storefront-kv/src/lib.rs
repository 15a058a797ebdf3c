//! Durable key-value storage capability for the storefront cart.
//!
//! The cart core persists itself through the [`KeyValueStore`] trait
//! and never touches a concrete backend directly. This crate ships two
//! backends:
//!
//! - [`MemoryStore`]: hash-map backed, for tests and session-scoped carts
//! - [`FileStore`]: one file per key, for carts that survive restarts
//!
//! # Example
//!
//! ```
//! use storefront_kv::{KeyValueStore, MemoryStore};
//!
//! let store = MemoryStore::new();
//! store.set("cart:state.v1", b"{\"items\":[]}").unwrap();
//! let bytes = store.get("cart:state.v1").unwrap();
//! assert!(bytes.is_some());
//! ```

mod error;
mod store;

pub use error::StorageError;
pub use store::{FileStore, KeyValueStore, MemoryStore};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{FileStore, KeyValueStore, MemoryStore, StorageError};
}
