//! Category filtering.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::catalog::Product;

/// Sentinel category that selects the whole catalog.
pub const ALL_CATEGORIES: &str = "All";

/// Which products a listing should show.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CategoryFilter {
    /// Every product.
    #[default]
    All,
    /// Products whose category equals this name exactly.
    Named(String),
}

impl CategoryFilter {
    /// Interpret a category name, treating `"All"` as the sentinel.
    pub fn parse(name: &str) -> Self {
        if name == ALL_CATEGORIES {
            CategoryFilter::All
        } else {
            CategoryFilter::Named(name.to_string())
        }
    }

    /// Check whether a product passes this filter.
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Named(name) => product.category == *name,
        }
    }

    /// The category name, with `"All"` for the sentinel.
    pub fn as_str(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_CATEGORIES,
            CategoryFilter::Named(name) => name,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for CategoryFilter {
    fn from(name: &str) -> Self {
        Self::parse(name)
    }
}
