//! End-to-end cart behaviour against real stores.

use std::io;
use std::sync::Arc;

use shpcart_cache::{FileStore, KeyValueStore, MemoryStore, StoreError};
use shpcart_commerce::prelude::*;
use tempfile::tempdir;

fn usd(cents: i64) -> Money {
    Money::new(cents, Currency::USD)
}

fn catalog_with(products: &[(u32, &str, i64)]) -> Arc<Catalog> {
    let products = products
        .iter()
        .map(|&(id, name, cents)| {
            Product::new(ProductId::new(id), name, format!("{name} for testing"), usd(cents), "Test")
        })
        .collect();
    Arc::new(Catalog::new(products).unwrap())
}

fn fifty_dollar_catalog() -> Arc<Catalog> {
    catalog_with(&[(1, "Widget", 5000), (2, "Gadget", 2500), (3, "Gizmo", 999)])
}

/// Reads always fail; writes land in memory.
#[derive(Default)]
struct BrokenReads {
    inner: MemoryStore,
}

impl KeyValueStore for BrokenReads {
    fn get(&self, _key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        Err(StoreError::Io(io::Error::new(io::ErrorKind::PermissionDenied, "denied")))
    }

    fn set(&self, key: &str, value: &[u8]) -> Result<(), StoreError> {
        self.inner.set(key, value)
    }

    fn delete(&self, key: &str) -> Result<(), StoreError> {
        self.inner.delete(key)
    }
}

/// Reads succeed; writes always fail.
struct ReadOnly;

impl KeyValueStore for ReadOnly {
    fn get(&self, _key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(None)
    }

    fn set(&self, _key: &str, _value: &[u8]) -> Result<(), StoreError> {
        Err(StoreError::Io(io::Error::new(io::ErrorKind::Other, "read-only")))
    }

    fn delete(&self, _key: &str) -> Result<(), StoreError> {
        Ok(())
    }
}

#[test]
fn test_repeated_adds_sum_into_one_line() {
    let store = CartStore::new(fifty_dollar_catalog(), MemoryStore::new());
    for (id, qty) in [(1, 1), (2, 4), (1, 2), (3, 1), (2, 1)] {
        store.add(ProductId::new(id), qty).unwrap();
    }

    let quantities: Vec<(u32, u32)> = store
        .with_details()
        .unwrap()
        .iter()
        .map(|item| (item.product.id.get(), item.quantity.get()))
        .collect();
    assert_eq!(quantities, vec![(1, 3), (2, 5), (3, 1)]);
    assert_eq!(store.count(), 9);
}

#[test]
fn test_rejections_leave_cart_unchanged() {
    let memory = MemoryStore::new();
    let store = CartStore::new(fifty_dollar_catalog(), memory.clone());
    store.add(ProductId::new(1), 2).unwrap();
    let before = memory.get(DEFAULT_CART_KEY).unwrap();

    let rejected = [
        store.add(ProductId::new(1), 0).unwrap_err(),
        store.add(ProductId::new(99), 1).unwrap_err(),
        store.update_quantity(ProductId::new(1), 0).unwrap_err(),
        store.update_quantity(ProductId::new(99), 5).unwrap_err(),
        store.remove(ProductId::new(2)).unwrap_err(),
    ];

    assert!(matches!(rejected[0], CommerceError::InvalidQuantity(0)));
    assert!(matches!(rejected[1], CommerceError::ProductNotFound(_)));
    assert!(matches!(rejected[2], CommerceError::InvalidQuantity(0)));
    assert!(matches!(rejected[3], CommerceError::LineNotFound(_)));
    assert!(matches!(rejected[4], CommerceError::LineNotFound(_)));
    assert!(rejected.iter().all(CommerceError::is_rejection));
    assert_eq!(memory.get(DEFAULT_CART_KEY).unwrap(), before);
}

#[test]
fn test_clear_from_any_state() {
    let store = CartStore::new(fifty_dollar_catalog(), MemoryStore::new());
    store.clear().unwrap();
    assert_eq!(store.count(), 0);

    store.add(ProductId::new(1), 3).unwrap();
    store.add(ProductId::new(3), 1).unwrap();
    store.clear().unwrap();
    assert_eq!(store.count(), 0);
    assert!(store.with_details().unwrap().is_empty());

    store.clear().unwrap();
    assert_eq!(store.count(), 0);
}

#[test]
fn test_state_survives_restart_in_memory() {
    let memory = MemoryStore::new();
    let catalog = fifty_dollar_catalog();
    {
        let store = CartStore::new(catalog.clone(), memory.clone());
        store.add(ProductId::new(2), 1).unwrap();
        store.add(ProductId::new(1), 2).unwrap();
    }

    let reopened = CartStore::new(catalog, memory);
    let lines: Vec<(u32, u32)> = reopened
        .load()
        .iter()
        .map(|l| (l.product_id.get(), l.quantity.get()))
        .collect();
    assert_eq!(lines, vec![(2, 1), (1, 2)]);
}

#[test]
fn test_state_survives_restart_on_disk() {
    let dir = tempdir().unwrap();
    let catalog = fifty_dollar_catalog();

    let store = CartStore::new(catalog.clone(), FileStore::new(dir.path()));
    store.add(ProductId::new(3), 4).unwrap();
    store.update_quantity(ProductId::new(3), 2).unwrap();
    drop(store);

    let on_disk = std::fs::read_to_string(dir.path().join("shpcart_cart.json")).unwrap();
    assert_eq!(on_disk, r#"[{"productId":3,"quantity":2}]"#);

    let reopened = CartStore::new(catalog, FileStore::new(dir.path()));
    assert_eq!(reopened.count(), 2);
}

#[test]
fn test_pricing_properties() {
    let pricing = Pricing::default();
    let store = CartStore::new(fifty_dollar_catalog(), MemoryStore::new());

    assert_eq!(pricing.subtotal(&store).unwrap(), usd(0));
    assert_eq!(pricing.shipping_cost(usd(10000)), usd(0));
    assert_eq!(pricing.shipping_cost(usd(9999)), usd(999));

    let subtotal = usd(4321);
    let shipping = pricing.shipping_cost(subtotal);
    assert_eq!(
        pricing.total(subtotal, shipping).unwrap().amount_cents,
        subtotal.amount_cents + shipping.amount_cents
    );
}

#[test]
fn test_free_shipping_scenario() {
    let pricing = Pricing::default();
    let store = CartStore::new(fifty_dollar_catalog(), MemoryStore::new());
    store.add(ProductId::new(1), 2).unwrap();

    let subtotal = pricing.subtotal(&store).unwrap();
    assert_eq!(subtotal, usd(10000));
    let shipping = pricing.shipping_cost(subtotal);
    assert_eq!(shipping, usd(0));
    assert_eq!(pricing.total(subtotal, shipping).unwrap(), usd(10000));
}

#[test]
fn test_dangling_line_is_counted_but_not_detailed() {
    let memory = MemoryStore::new();
    let before = CartStore::new(fifty_dollar_catalog(), memory.clone());
    before.add(ProductId::new(1), 1).unwrap();
    before.add(ProductId::new(2), 3).unwrap();

    // Product 2 has since been dropped from the catalog.
    let after = CartStore::new(catalog_with(&[(1, "Widget", 5000)]), memory);
    let items = after.with_details().unwrap();

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].product.id, ProductId::new(1));
    assert_eq!(after.count(), 4);
    assert_eq!(Pricing::default().subtotal(&after).unwrap(), usd(5000));
    assert_eq!(Pricing::default().summarize(&after).unwrap().unresolved_lines, 1);
}

#[test]
fn test_corrupt_state_reads_as_empty() {
    let cases: [&[u8]; 5] = [
        b"{broken",
        br#"{"productId":1,"quantity":1}"#,
        br#"[{"productId":1,"quantity":0}]"#,
        br#"[{"productId":1,"quantity":1},{"productId":1,"quantity":1}]"#,
        br#"[{"id":1,"qty":1}]"#,
    ];
    for raw in cases {
        let memory = MemoryStore::new();
        memory.set(DEFAULT_CART_KEY, raw).unwrap();
        let store = CartStore::new(fifty_dollar_catalog(), memory.clone());

        assert_eq!(store.count(), 0);
        assert!(store.with_details().unwrap().is_empty());

        store.add(ProductId::new(2), 1).unwrap();
        assert_eq!(
            memory.get(DEFAULT_CART_KEY).unwrap().unwrap(),
            br#"[{"productId":2,"quantity":1}]"#
        );
    }
}

#[test]
fn test_unreadable_store_reads_as_empty() {
    let store = CartStore::new(fifty_dollar_catalog(), BrokenReads::default());
    assert_eq!(store.count(), 0);
    assert!(store.with_details().unwrap().is_empty());
    assert!(store.add(ProductId::new(1), 1).is_ok());
}

#[test]
fn test_write_failure_is_reported() {
    let store = CartStore::new(fifty_dollar_catalog(), ReadOnly);
    let err = store.add(ProductId::new(1), 1).unwrap_err();
    assert!(matches!(err, CommerceError::Storage(_)));
    assert!(!err.is_rejection());
    assert!(matches!(store.clear(), Err(CommerceError::Storage(_))));
}

#[test]
fn test_overpriced_catalog_is_refused() {
    let products = vec![Product::new(
        ProductId::new(1),
        "Island",
        "Private",
        usd(i64::MAX / 2),
        "Property",
    )];
    assert!(matches!(Catalog::new(products), Err(CommerceError::InvalidCatalog(_))));
}

#[test]
fn test_checkout_flow() {
    let store = CartStore::new(Arc::new(Catalog::demo()), MemoryStore::new());
    let pricing = Pricing::default();

    store.add(ProductId::new(6), 1).unwrap();
    store.add(ProductId::new(7), 1).unwrap();
    let summary = OrderSummary::build(&store, &pricing).unwrap();
    assert_eq!(summary.subtotal.display(), "$89.98");
    assert_eq!(summary.shipping_total.display(), "$9.99");
    assert_eq!(summary.grand_total.display(), "$99.97");

    let confirmation = confirm_order(&store, &pricing).unwrap();
    assert_eq!(confirmation.summary, summary);
    assert_eq!(store.count(), 0);
    assert!(matches!(
        confirm_order(&store, &pricing),
        Err(CommerceError::EmptyCart)
    ));
}
