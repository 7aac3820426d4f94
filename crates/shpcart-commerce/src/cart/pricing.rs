//! Cart pricing calculations.

use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};
use shpcart_cache::KeyValueStore;

use crate::cart::{CartStore, EnrichedCartItem};
use crate::checkout::ShippingPolicy;
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::Money;

/// Derives totals from a cart store. Holds no cart state of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Pricing {
    policy: ShippingPolicy,
}

impl Pricing {
    pub fn new(policy: ShippingPolicy) -> Self {
        Self { policy }
    }

    /// The shipping rules in use.
    pub fn policy(&self) -> &ShippingPolicy {
        &self.policy
    }

    /// Sum of `price * quantity` over the resolvable cart lines.
    pub fn subtotal<S: KeyValueStore>(&self, store: &CartStore<S>) -> Result<Money, CommerceError> {
        self.subtotal_of(&store.with_details()?)
    }

    /// Sum of line totals. An empty list is zero in the policy currency.
    pub fn subtotal_of(&self, items: &[EnrichedCartItem]) -> Result<Money, CommerceError> {
        items
            .iter()
            .try_fold(Money::zero(self.policy.currency), |acc, item| {
                acc.checked_add(&item.line_total)
            })
    }

    /// Shipping for a given subtotal: free at or above the threshold,
    /// otherwise the flat fee.
    pub fn shipping_cost(&self, subtotal: Money) -> Money {
        if subtotal.amount_cents >= self.policy.free_shipping_threshold.amount_cents {
            Money::zero(self.policy.currency)
        } else {
            self.policy.flat_shipping_fee
        }
    }

    /// `subtotal + shipping`.
    pub fn total(&self, subtotal: Money, shipping: Money) -> Result<Money, CommerceError> {
        subtotal.checked_add(&shipping)
    }

    /// Price the whole cart in one read of the store.
    pub fn summarize<S: KeyValueStore>(
        &self,
        store: &CartStore<S>,
    ) -> Result<CartPricing, CommerceError> {
        let cart = store.load();
        let items = store.details_of(&cart)?;
        let subtotal = self.subtotal_of(&items)?;
        let shipping_total = self.shipping_cost(subtotal);
        let grand_total = self.total(subtotal, shipping_total)?;

        Ok(CartPricing {
            item_count: cart.item_count(),
            unresolved_lines: cart.len() - items.len(),
            line_items: items.iter().map(LineItemPricing::from).collect(),
            subtotal,
            shipping_total,
            grand_total,
        })
    }
}

/// Complete pricing breakdown for a cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartPricing {
    /// Sum of raw line quantities.
    pub item_count: u64,
    /// Stored lines whose product has left the catalog.
    pub unresolved_lines: usize,
    /// Per-line breakdown, in cart order.
    pub line_items: Vec<LineItemPricing>,
    /// Sum of line totals.
    pub subtotal: Money,
    /// Shipping cost.
    pub shipping_total: Money,
    /// `subtotal + shipping_total`.
    pub grand_total: Money,
}

impl CartPricing {
    /// Check if shipping was waived.
    pub fn is_free_shipping(&self) -> bool {
        self.shipping_total.is_zero()
    }
}

/// Pricing breakdown for a single line.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItemPricing {
    /// Product on this line.
    pub product_id: ProductId,
    /// Product name (denormalized for display).
    pub product_name: String,
    /// Unit price.
    pub unit_price: Money,
    /// Quantity.
    pub quantity: NonZeroU32,
    /// `unit_price * quantity`.
    pub total: Money,
}

impl From<&EnrichedCartItem> for LineItemPricing {
    fn from(item: &EnrichedCartItem) -> Self {
        Self {
            product_id: item.product.id,
            product_name: item.product.name.clone(),
            unit_price: item.product.price,
            quantity: item.quantity,
            total: item.line_total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, Product, MAX_UNIT_PRICE_CENTS};
    use crate::money::Currency;
    use shpcart_cache::{MemoryStore, StoreError};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    /// Memory store that counts reads.
    #[derive(Default)]
    struct CountingStore {
        inner: MemoryStore,
        reads: AtomicUsize,
    }

    impl KeyValueStore for CountingStore {
        fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
            self.reads.fetch_add(1, Ordering::SeqCst);
            self.inner.get(key)
        }

        fn set(&self, key: &str, value: &[u8]) -> Result<(), StoreError> {
            self.inner.set(key, value)
        }

        fn delete(&self, key: &str) -> Result<(), StoreError> {
            self.inner.delete(key)
        }
    }

    fn usd(cents: i64) -> Money {
        Money::new(cents, Currency::USD)
    }

    fn store() -> CartStore<MemoryStore> {
        let catalog = Catalog::new(vec![
            Product::new(ProductId::new(1), "Speaker", "Loud", usd(5000), "Audio"),
            Product::new(ProductId::new(2), "Cable", "Long", usd(999), "Accessories"),
        ])
        .unwrap();
        CartStore::new(Arc::new(catalog), MemoryStore::new())
    }

    #[test]
    fn test_empty_subtotal_is_zero() {
        let pricing = Pricing::default();
        assert_eq!(pricing.subtotal(&store()).unwrap(), usd(0));
    }

    #[test]
    fn test_shipping_threshold() {
        let pricing = Pricing::default();
        assert_eq!(pricing.shipping_cost(usd(10000)), usd(0));
        assert_eq!(pricing.shipping_cost(usd(25000)), usd(0));
        assert_eq!(pricing.shipping_cost(usd(9999)), usd(999));
        assert_eq!(pricing.shipping_cost(usd(0)), usd(999));
    }

    #[test]
    fn test_total_is_exact() {
        let pricing = Pricing::default();
        assert_eq!(pricing.total(usd(9999), usd(999)).unwrap(), usd(10998));
    }

    #[test]
    fn test_summarize() {
        let store = store();
        store.add(ProductId::new(1), 1).unwrap();
        store.add(ProductId::new(2), 2).unwrap();

        let summary = Pricing::default().summarize(&store).unwrap();
        assert_eq!(summary.item_count, 3);
        assert_eq!(summary.subtotal, usd(6998));
        assert_eq!(summary.shipping_total, usd(999));
        assert_eq!(summary.grand_total, usd(7997));
        assert!(!summary.is_free_shipping());
        assert_eq!(summary.line_items[1].product_name, "Cable");
        assert_eq!(summary.line_items[1].total, usd(1998));
    }

    #[test]
    fn test_custom_policy() {
        let policy = ShippingPolicy {
            free_shipping_threshold: usd(5000),
            flat_shipping_fee: usd(500),
            ..ShippingPolicy::default()
        };
        let pricing = Pricing::new(policy);
        assert_eq!(pricing.shipping_cost(usd(5000)), usd(0));
        assert_eq!(pricing.shipping_cost(usd(4999)), usd(500));
    }

    #[test]
    fn test_summarize_reads_store_once() {
        let catalog = Catalog::new(vec![Product::new(
            ProductId::new(1),
            "Speaker",
            "Loud",
            usd(5000),
            "Audio",
        )])
        .unwrap();
        let memory = MemoryStore::new();
        memory
            .set(
                crate::cart::DEFAULT_CART_KEY,
                br#"[{"productId":1,"quantity":2},{"productId":9,"quantity":1}]"#,
            )
            .unwrap();
        let store = CartStore::new(
            Arc::new(catalog),
            CountingStore {
                inner: memory,
                ..CountingStore::default()
            },
        );

        let summary = Pricing::default().summarize(&store).unwrap();
        assert_eq!(store.store().reads.load(Ordering::SeqCst), 1);
        assert_eq!(summary.item_count, 3);
        assert_eq!(summary.unresolved_lines, 1);
        assert_eq!(summary.line_items.len(), 1);
        assert_eq!(summary.subtotal, usd(10000));
    }

    #[test]
    fn test_subtotal_overflow_is_reported() {
        let catalog = Catalog::new(vec![
            Product::new(ProductId::new(1), "Vault", "Big", usd(MAX_UNIT_PRICE_CENTS), "Safes"),
            Product::new(ProductId::new(2), "Bunker", "Bigger", usd(MAX_UNIT_PRICE_CENTS), "Safes"),
        ])
        .unwrap();
        let store = CartStore::new(Arc::new(catalog), MemoryStore::new());
        store.add(ProductId::new(1), i64::from(u32::MAX)).unwrap();
        store.add(ProductId::new(2), 3).unwrap();

        let pricing = Pricing::default();
        assert!(matches!(pricing.subtotal(&store), Err(CommerceError::Overflow)));
        assert!(matches!(pricing.summarize(&store), Err(CommerceError::Overflow)));
    }
}
