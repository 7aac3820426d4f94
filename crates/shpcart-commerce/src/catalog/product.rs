//! Product types.

use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A product in the catalog.
///
/// Products are loaded once and never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Short description for listings.
    pub description: String,
    /// Full description for the product page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub long_description: Option<String>,
    /// Unit price.
    pub price: Money,
    /// Category name, matched exactly when filtering.
    pub category: String,
    /// Merchandising label (e.g., "Best Seller").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
    /// Technical specifications.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub specs: Vec<ProductSpec>,
    /// Average shopper rating out of [`MAX_RATING`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f32>,
    /// Number of reviews behind the rating.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviews: Option<u32>,
}

/// Top of the rating scale.
pub const MAX_RATING: f32 = 5.0;

impl Product {
    /// Create a product with no optional fields set.
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        description: impl Into<String>,
        price: Money,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
            long_description: None,
            price,
            category: category.into(),
            badge: None,
            specs: Vec::new(),
            rating: None,
            reviews: None,
        }
    }

    /// Case-insensitive substring match on name or description.
    ///
    /// `needle` must already be lowercased.
    pub fn matches_text(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
    }
}

/// A labelled specification row (e.g., Battery Life: 30 hrs).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct ProductSpec {
    /// Row label.
    pub label: String,
    /// Row value.
    pub value: String,
}

impl ProductSpec {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    fn keyboard() -> Product {
        Product::new(
            ProductId::new(3),
            "RGB Mechanical Keyboard",
            "Compact TKL keyboard with tactile switches.",
            Money::new(12999, Currency::USD),
            "Peripherals",
        )
    }

    #[test]
    fn test_matches_text() {
        let product = keyboard();
        assert!(product.matches_text("keyboard"));
        assert!(product.matches_text("tactile"));
        assert!(!product.matches_text("mouse"));
    }

    #[test]
    fn test_optional_fields_default_when_missing() {
        let json = r#"{
            "id": 3,
            "name": "Keyboard",
            "description": "Keys",
            "price": {"amount_cents": 12999, "currency": "USD"},
            "category": "Peripherals"
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, ProductId::new(3));
        assert!(product.badge.is_none());
        assert!(product.specs.is_empty());
        assert!(product.rating.is_none());
        assert!(product.reviews.is_none());
    }

    #[test]
    fn test_rating_serialization() {
        let mut product = keyboard();
        product.rating = Some(4.7);
        product.reviews = Some(2150);

        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["reviews"], 2150);
        assert!(json.get("long_description").is_none());

        let back: Product = serde_json::from_value(json).unwrap();
        assert_eq!(back.rating, Some(4.7));
    }
}
