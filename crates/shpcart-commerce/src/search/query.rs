//! Search query builder.

use crate::catalog::{CategoryFilter, Product};
use serde::{Deserialize, Serialize};

/// A search query over the catalog.
///
/// The category narrows the pool first; the text then keeps products whose
/// name or description contains it, ignoring case.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct SearchQuery {
    /// Category pool to search in.
    pub category: CategoryFilter,
    /// Text query. Blank means no text filter.
    pub text: Option<String>,
}

impl SearchQuery {
    /// Create a query that matches the whole catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the category pool.
    pub fn with_category(mut self, category: impl Into<CategoryFilter>) -> Self {
        self.category = category.into();
        self
    }

    /// Set the text query.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Trimmed, lowercased text, or `None` if there is nothing to match.
    pub fn needle(&self) -> Option<String> {
        self.text
            .as_deref()
            .map(|t| t.trim().to_lowercase())
            .filter(|t| !t.is_empty())
    }

    /// Check whether a product matches the query.
    pub fn matches(&self, product: &Product) -> bool {
        self.category.matches(product)
            && self
                .needle()
                .map_or(true, |needle| product.matches_text(&needle))
    }
}
