//! Catalog, persisted cart and pricing for the shpcart storefront.
//!
//! - **Catalog**: the read-only product list, with category and text queries
//! - **Cart**: a [`CartStore`] that validates every change and persists the
//!   whole cart through an injected [`KeyValueStore`]
//! - **Pricing**: subtotal, shipping and grand total derived from the cart
//! - **Checkout**: order summary and confirmation
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use shpcart_commerce::prelude::*;
//! use shpcart_cache::MemoryStore;
//!
//! let store = CartStore::new(Arc::new(Catalog::demo()), MemoryStore::new());
//! store.add(ProductId::new(1), 2).unwrap();
//!
//! let pricing = Pricing::default();
//! let subtotal = pricing.subtotal(&store).unwrap();
//! let shipping = pricing.shipping_cost(subtotal);
//! assert_eq!(subtotal.display(), "$179.98");
//! assert!(shipping.is_zero());
//! ```
//!
//! [`KeyValueStore`]: shpcart_cache::KeyValueStore

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod search;

pub use cart::{CartStore, Pricing};
pub use catalog::Catalog;
pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{Catalog, CategoryFilter, Product, ProductSpec, ALL_CATEGORIES};

    // Cart
    pub use crate::cart::{
        Cart, CartLine, CartOutcome, CartPricing, CartStore, EnrichedCartItem, LineItemPricing,
        Pricing, DEFAULT_CART_KEY,
    };

    // Checkout
    pub use crate::checkout::{confirm_order, OrderConfirmation, OrderSummary, ShippingPolicy};

    // Search
    pub use crate::search::SearchQuery;
}
