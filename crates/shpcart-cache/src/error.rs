//! Storage error types.

use thiserror::Error;

/// Errors that can occur when reading or writing the durable store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Underlying filesystem failure.
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to encode or decode a stored value.
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Key cannot be used as a storage name.
    #[error("Invalid storage key: {0:?}")]
    InvalidKey(String),
}
