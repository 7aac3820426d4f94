//! Commerce error types.

use shpcart_cache::StoreError;
use thiserror::Error;

use crate::ids::ProductId;
use crate::money::Currency;

/// Errors that can occur in storefront operations.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Requested quantity is not a positive integer.
    #[error("Quantity must be a positive integer (got {0}).")]
    InvalidQuantity(i64),

    /// Product id does not resolve in the catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    /// Product id has no line in the cart.
    #[error("Item not found in cart: {0}")]
    LineNotFound(ProductId),

    /// Arithmetic overflow.
    #[error("Arithmetic overflow in cart calculation")]
    Overflow,

    /// Operation needs at least one cart line.
    #[error("Cart is empty")]
    EmptyCart,

    /// Currency mismatch.
    #[error("Currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch { expected: Currency, got: Currency },

    /// Catalog data violates an invariant.
    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    /// Amount is not acceptable where it was configured.
    #[error("Invalid money amount: {0:?}")]
    InvalidMoney(String),

    /// Durable store failed.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl CommerceError {
    /// Check if this is an expected rejection of user input.
    ///
    /// Rejections leave the cart unchanged and are meant to be shown to the
    /// shopper as-is. Everything else points at broken data or storage.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            CommerceError::InvalidQuantity(_)
                | CommerceError::ProductNotFound(_)
                | CommerceError::LineNotFound(_)
                | CommerceError::EmptyCart
        )
    }
}

impl From<StoreError> for CommerceError {
    fn from(e: StoreError) -> Self {
        CommerceError::Storage(e.to_string())
    }
}

impl From<serde_json::Error> for CommerceError {
    fn from(e: serde_json::Error) -> Self {
        CommerceError::Serialization(e.to_string())
    }
}
