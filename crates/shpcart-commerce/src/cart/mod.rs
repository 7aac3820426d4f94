//! Shopping cart module.
//!
//! Contains the cart lines, the persisted cart store, and pricing.

mod cart;
mod pricing;
mod store;

pub use cart::{positive_quantity, Cart, CartLine};
pub use pricing::{CartPricing, LineItemPricing, Pricing};
pub use store::{CartOutcome, CartStore, EnrichedCartItem, DEFAULT_CART_KEY};
