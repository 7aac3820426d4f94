//! Search module.
//!
//! Free-text search within a category, as used by the shop listing.

mod query;

pub use query::SearchQuery;
