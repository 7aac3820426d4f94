//! Checkout module.
//!
//! Contains the shipping rules and order confirmation. No payment is taken:
//! confirming an order snapshots the cart and then empties it.

mod order;
mod shipping;

pub use order::{confirm_order, OrderConfirmation, OrderSummary, ORDER_PLACED_MESSAGE};
pub use shipping::{ShippingPolicy, FLAT_SHIPPING_FEE_CENTS, FREE_SHIPPING_THRESHOLD_CENTS};
