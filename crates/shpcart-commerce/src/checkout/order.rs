//! Order summary and confirmation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shpcart_cache::KeyValueStore;

use crate::cart::{CartStore, EnrichedCartItem, Pricing};
use crate::error::CommerceError;
use crate::ids::OrderNumber;
use crate::money::Money;

/// Message shown once an order has been placed.
pub const ORDER_PLACED_MESSAGE: &str = "Order placed! Thank you for shopping with us.";

/// What the shopper is about to order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderSummary {
    /// Resolvable cart lines, in cart order.
    pub items: Vec<EnrichedCartItem>,
    /// Sum of raw line quantities.
    pub item_count: u64,
    /// Sum of line totals.
    pub subtotal: Money,
    /// Shipping cost.
    pub shipping_total: Money,
    /// `subtotal + shipping_total`.
    pub grand_total: Money,
}

impl OrderSummary {
    /// Snapshot the cart for review from a single read of the store.
    ///
    /// Fails with [`CommerceError::EmptyCart`] when no lines are stored.
    pub fn build<S: KeyValueStore>(
        store: &CartStore<S>,
        pricing: &Pricing,
    ) -> Result<Self, CommerceError> {
        let cart = store.load();
        if cart.is_empty() {
            return Err(CommerceError::EmptyCart);
        }

        let items = store.details_of(&cart)?;
        let subtotal = pricing.subtotal_of(&items)?;
        let shipping_total = pricing.shipping_cost(subtotal);
        let grand_total = pricing.total(subtotal, shipping_total)?;

        Ok(Self {
            items,
            item_count: cart.item_count(),
            subtotal,
            shipping_total,
            grand_total,
        })
    }

    /// Check if shipping was waived.
    pub fn is_free_shipping(&self) -> bool {
        self.shipping_total.is_zero()
    }
}

/// A placed order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderConfirmation {
    /// Reference number for the shopper.
    pub order_number: OrderNumber,
    /// When the order was confirmed.
    pub placed_at: DateTime<Utc>,
    /// The cart as it was ordered.
    pub summary: OrderSummary,
}

/// Place the order: snapshot the cart, then clear it.
///
/// Nothing is charged or sent anywhere. On an empty cart this fails with
/// [`CommerceError::EmptyCart`] and changes nothing.
pub fn confirm_order<S: KeyValueStore>(
    store: &CartStore<S>,
    pricing: &Pricing,
) -> Result<OrderConfirmation, CommerceError> {
    let summary = OrderSummary::build(store, pricing)?;
    store.clear()?;

    let confirmation = OrderConfirmation {
        order_number: OrderNumber::generate(),
        placed_at: Utc::now(),
        summary,
    };
    tracing::info!(
        order_number = %confirmation.order_number,
        items = confirmation.summary.item_count,
        total = %confirmation.summary.grand_total,
        "order placed"
    );
    Ok(confirmation)
}
