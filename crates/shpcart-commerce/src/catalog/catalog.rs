//! The immutable product list.

use std::collections::HashSet;

use crate::catalog::{demo, CategoryFilter, Product, ALL_CATEGORIES, MAX_RATING};
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use crate::search::SearchQuery;

/// How many related products a product page shows by default.
pub const DEFAULT_RELATED_COUNT: usize = 4;

/// Highest accepted price, in minor units.
///
/// Any price up to this times the largest line quantity fits in `i64`.
pub const MAX_UNIT_PRICE_CENTS: i64 = i64::MAX / u32::MAX as i64;

/// A read-only, ordered product list.
///
/// Construction validates the data once; every query afterwards is a plain
/// scan in catalog order.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
    currency: Currency,
}

impl Catalog {
    /// Build a catalog, checking that:
    /// - every id is at least 1 and unique
    /// - no price is negative or above [`MAX_UNIT_PRICE_CENTS`]
    /// - ratings, when present, lie within `0..=MAX_RATING`
    /// - all prices share one currency
    pub fn new(products: Vec<Product>) -> Result<Self, CommerceError> {
        let currency = products
            .first()
            .map(|p| p.price.currency)
            .unwrap_or_default();

        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            if !product.id.is_valid() {
                return Err(CommerceError::InvalidCatalog(format!(
                    "product {:?} has id 0",
                    product.name
                )));
            }
            if !seen.insert(product.id) {
                return Err(CommerceError::InvalidCatalog(format!(
                    "duplicate product id {}",
                    product.id
                )));
            }
            if product.price.is_negative() {
                return Err(CommerceError::InvalidCatalog(format!(
                    "product {} has negative price {}",
                    product.id, product.price
                )));
            }
            if product.price.amount_cents > MAX_UNIT_PRICE_CENTS {
                return Err(CommerceError::InvalidCatalog(format!(
                    "product {} has price {} above the {} limit",
                    product.id,
                    product.price,
                    Money::new(MAX_UNIT_PRICE_CENTS, product.price.currency)
                )));
            }
            if product
                .rating
                .is_some_and(|rating| !(0.0..=MAX_RATING).contains(&rating))
            {
                return Err(CommerceError::InvalidCatalog(format!(
                    "product {} has rating outside 0 to {MAX_RATING}",
                    product.id
                )));
            }
            if product.price.currency != currency {
                return Err(CommerceError::CurrencyMismatch {
                    expected: currency,
                    got: product.price.currency,
                });
            }
        }

        Ok(Self { products, currency })
    }

    /// The built-in storefront dataset.
    pub fn demo() -> Self {
        Self {
            products: demo::products(),
            currency: Currency::USD,
        }
    }

    /// Parse a JSON array of products and validate it.
    pub fn from_json(json: &str) -> Result<Self, CommerceError> {
        let products: Vec<Product> = serde_json::from_str(json)?;
        Self::new(products)
    }

    /// Currency shared by every price in the catalog.
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if the catalog has no products.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Every product, in catalog order.
    pub fn all(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by id.
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Products in a category. `"All"` returns the whole catalog.
    pub fn by_category(&self, category: &str) -> Vec<&Product> {
        let filter = CategoryFilter::parse(category);
        self.products.iter().filter(|p| filter.matches(p)).collect()
    }

    /// Distinct categories in first-seen order, led by `"All"`.
    pub fn categories(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut categories = vec![ALL_CATEGORIES.to_string()];
        for product in &self.products {
            if seen.insert(product.category.as_str()) {
                categories.push(product.category.clone());
            }
        }
        categories
    }

    /// Products to suggest next to `id`.
    ///
    /// Same-category products come first, then everything else, both in
    /// catalog order and never including `id` itself. Unknown ids yield
    /// nothing.
    pub fn related(&self, id: ProductId, count: usize) -> Vec<&Product> {
        let Some(product) = self.get(id) else {
            return Vec::new();
        };

        let others = self.products.iter().filter(|p| p.id != id);
        let (same, rest): (Vec<&Product>, Vec<&Product>) =
            others.partition(|p| p.category == product.category);

        same.into_iter().chain(rest).take(count).collect()
    }

    /// Products matching a search query, in catalog order.
    pub fn search(&self, query: &SearchQuery) -> Vec<&Product> {
        self.products.iter().filter(|p| query.matches(p)).collect()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::demo()
    }
}
