//! Shipping rules.

use crate::error::CommerceError;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Subtotal, in cents, at or above which shipping is free.
pub const FREE_SHIPPING_THRESHOLD_CENTS: i64 = 10_000;

/// Shipping fee, in cents, below the threshold.
pub const FLAT_SHIPPING_FEE_CENTS: i64 = 999;

/// Flat-rate shipping with a free-shipping threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingPolicy {
    /// Currency both amounts are in.
    pub currency: Currency,
    /// Subtotal at or above which shipping costs nothing.
    pub free_shipping_threshold: Money,
    /// Fee charged below the threshold.
    pub flat_shipping_fee: Money,
}

impl ShippingPolicy {
    /// Build a policy from cent amounts.
    pub fn new(currency: Currency, free_shipping_threshold_cents: i64, flat_shipping_fee_cents: i64) -> Self {
        Self {
            currency,
            free_shipping_threshold: Money::new(free_shipping_threshold_cents, currency),
            flat_shipping_fee: Money::new(flat_shipping_fee_cents, currency),
        }
    }

    /// Check that both amounts are non-negative and in the policy currency.
    pub fn validate(&self) -> Result<(), CommerceError> {
        for amount in [self.free_shipping_threshold, self.flat_shipping_fee] {
            if amount.currency != self.currency {
                return Err(CommerceError::CurrencyMismatch {
                    expected: self.currency,
                    got: amount.currency,
                });
            }
            if amount.is_negative() {
                return Err(CommerceError::InvalidMoney(amount.display_amount()));
            }
        }
        Ok(())
    }
}

impl Default for ShippingPolicy {
    fn default() -> Self {
        Self::new(Currency::USD, FREE_SHIPPING_THRESHOLD_CENTS, FLAT_SHIPPING_FEE_CENTS)
    }
}
