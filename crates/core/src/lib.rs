//! `itemdex-core` — shared primitives for the item catalog.
//!
//! This crate contains **pure** building blocks (no IO, no HTTP).

pub mod error;
pub mod numeric;

pub use error::{DomainError, DomainResult};
pub use numeric::normalize_amount;
