//! Item catalog: the in-memory store and the query evaluator over it.
//!
//! The catalog is loaded once and never mutated; every query is a pure read,
//! so a single `Catalog` can be shared by reference across all requests.

pub mod item;
pub mod query;
pub mod store;

pub use item::{AmountField, Item};
pub use query::{Criteria, FilterResult, filter, find_exact};
pub use store::{Catalog, CatalogError};
