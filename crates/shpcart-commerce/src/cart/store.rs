//! The persisted cart.

use std::num::NonZeroU32;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use shpcart_cache::{JsonCache, KeyValueStore};

use crate::cart::{positive_quantity, Cart};
use crate::catalog::{Catalog, Product};
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::Money;

/// Key the cart is stored under unless the caller picks another one.
pub const DEFAULT_CART_KEY: &str = "shpcart_cart";

/// Result of a successful cart mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartOutcome {
    /// Product the mutation touched.
    pub product_id: ProductId,
    /// The line's quantity afterwards, `None` once the line is gone.
    pub quantity: Option<NonZeroU32>,
    /// Confirmation to show the shopper.
    pub message: String,
}

/// A cart line joined with its product.
///
/// Built on every read and never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedCartItem {
    /// The product as the catalog currently describes it.
    pub product: Product,
    /// Quantity in the cart.
    pub quantity: NonZeroU32,
    /// `price * quantity`.
    pub line_total: Money,
}

/// Owns the durable cart.
///
/// Every operation reads the whole cart from the store, works on it in
/// memory, and writes the whole cart back. Stored data that cannot be read
/// or decoded counts as an empty cart.
#[derive(Debug, Clone)]
pub struct CartStore<S> {
    catalog: Arc<Catalog>,
    cache: JsonCache<S>,
    key: String,
}

impl<S: KeyValueStore> CartStore<S> {
    /// Create a store that keeps the cart under [`DEFAULT_CART_KEY`].
    pub fn new(catalog: Arc<Catalog>, store: S) -> Self {
        Self::with_key(catalog, store, DEFAULT_CART_KEY)
    }

    /// Create a store that keeps the cart under `key`.
    pub fn with_key(catalog: Arc<Catalog>, store: S, key: impl Into<String>) -> Self {
        Self {
            catalog,
            cache: JsonCache::new(store),
            key: key.into(),
        }
    }

    /// The catalog lines are resolved against.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The storage key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The underlying store.
    pub fn store(&self) -> &S {
        self.cache.store()
    }

    /// Read the persisted cart.
    ///
    /// Never fails: a missing record is an empty cart, and so is a record
    /// that cannot be read or does not decode as a list of valid lines.
    pub fn load(&self) -> Cart {
        match self.cache.get::<Cart>(&self.key) {
            Ok(Some(cart)) => cart,
            Ok(None) => Cart::new(),
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "unreadable cart state, starting empty");
                Cart::new()
            }
        }
    }

    fn save(&self, cart: &Cart) -> Result<(), CommerceError> {
        self.cache.set(&self.key, cart)?;
        Ok(())
    }

    /// Add `quantity` of a product.
    ///
    /// An existing line grows by `quantity`; otherwise a line is appended.
    pub fn add(&self, product_id: ProductId, quantity: i64) -> Result<CartOutcome, CommerceError> {
        let quantity = positive_quantity(quantity).inspect_err(|e| {
            tracing::debug!(%product_id, error = %e, "add rejected");
        })?;
        let product = self.catalog.get(product_id).ok_or_else(|| {
            tracing::debug!(%product_id, "add rejected: unknown product");
            CommerceError::ProductNotFound(product_id)
        })?;

        let mut cart = self.load();
        let line_quantity = cart.add(product_id, quantity)?;
        self.save(&cart)?;

        tracing::debug!(%product_id, added = quantity.get(), line_quantity = line_quantity.get(), "added to cart");
        Ok(CartOutcome {
            product_id,
            quantity: Some(line_quantity),
            message: format!("{} added to cart.", product.name),
        })
    }

    /// Set an existing line's quantity.
    ///
    /// Zero is rejected rather than treated as removal; use [`Self::remove`].
    pub fn update_quantity(
        &self,
        product_id: ProductId,
        quantity: i64,
    ) -> Result<CartOutcome, CommerceError> {
        let quantity = positive_quantity(quantity).inspect_err(|e| {
            tracing::debug!(%product_id, error = %e, "update rejected");
        })?;

        let mut cart = self.load();
        cart.set_quantity(product_id, quantity)?;
        self.save(&cart)?;

        tracing::debug!(%product_id, quantity = quantity.get(), "updated cart line");
        Ok(CartOutcome {
            product_id,
            quantity: Some(quantity),
            message: "Quantity updated.".to_string(),
        })
    }

    /// Delete a product's line.
    pub fn remove(&self, product_id: ProductId) -> Result<CartOutcome, CommerceError> {
        let mut cart = self.load();
        cart.remove(product_id)?;
        self.save(&cart)?;

        tracing::debug!(%product_id, "removed cart line");
        Ok(CartOutcome {
            product_id,
            quantity: None,
            message: "Item removed from cart.".to_string(),
        })
    }

    /// Persist an empty cart, whatever was there before.
    pub fn clear(&self) -> Result<(), CommerceError> {
        self.save(&Cart::new())?;
        tracing::debug!(key = %self.key, "cleared cart");
        Ok(())
    }

    /// Sum of all stored quantities.
    ///
    /// Counts raw lines, including lines whose product has left the catalog.
    pub fn count(&self) -> u64 {
        self.load().item_count()
    }

    /// Check if the stored cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.load().is_empty()
    }

    /// Stored lines joined with the catalog, in cart order.
    ///
    /// Lines whose product no longer resolves are left out.
    pub fn with_details(&self) -> Result<Vec<EnrichedCartItem>, CommerceError> {
        self.details_of(&self.load())
    }

    /// Join an already loaded cart with the catalog.
    ///
    /// Lets callers that also need the raw lines price them from the same
    /// read.
    pub fn details_of(&self, cart: &Cart) -> Result<Vec<EnrichedCartItem>, CommerceError> {
        let mut items = Vec::with_capacity(cart.len());
        for line in cart.iter() {
            let Some(product) = self.catalog.get(line.product_id) else {
                tracing::debug!(product_id = %line.product_id, "skipping cart line for unknown product");
                continue;
            };
            let line_total = product
                .price
                .try_multiply(i64::from(line.quantity.get()))
                .ok_or(CommerceError::Overflow)?;
            items.push(EnrichedCartItem {
                product: product.clone(),
                quantity: line.quantity,
                line_total,
            });
        }
        Ok(items)
    }
}
