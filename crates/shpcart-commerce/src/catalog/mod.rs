//! Product catalog module.
//!
//! Contains the read-only product list and the queries the shop runs on it.

mod catalog;
mod category;
mod demo;
mod product;

pub use catalog::{Catalog, DEFAULT_RELATED_COUNT, MAX_UNIT_PRICE_CENTS};
pub use category::{CategoryFilter, ALL_CATEGORIES};
pub use product::{Product, ProductSpec, MAX_RATING};
