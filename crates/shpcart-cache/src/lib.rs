//! Durable key-value storage for the shpcart storefront.
//!
//! The cart is the only piece of durable state in the storefront. It lives
//! under a single named key in whatever [`KeyValueStore`] the caller hands
//! to the cart store. Two stores ship with this crate:
//!
//! - [`MemoryStore`]: process-local, shared between clones. Used in tests.
//! - [`FileStore`]: one JSON file per key under a data directory.
//!
//! # Example
//!
//! ```rust
//! use shpcart_cache::{JsonCache, MemoryStore};
//!
//! let cache = JsonCache::new(MemoryStore::new());
//!
//! // Store a value
//! cache.set("shpcart_cart", &vec![1, 2, 3]).unwrap();
//!
//! // Retrieve a value
//! let ids: Option<Vec<u32>> = cache.get("shpcart_cart").unwrap();
//! assert_eq!(ids, Some(vec![1, 2, 3]));
//! ```

mod error;
mod file;
mod json;
mod memory;
mod store;

pub use error::StoreError;
pub use file::FileStore;
pub use json::JsonCache;
pub use memory::MemoryStore;
pub use store::{validate_key, KeyValueStore};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{FileStore, JsonCache, KeyValueStore, MemoryStore, StoreError};
}
