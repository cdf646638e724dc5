//! `dealcart-catalog` — the product catalog and filter engine.
//!
//! This crate contains the storefront's deterministic domain logic: the
//! product schema, the immutable load-once repository, and the pure function
//! that turns (catalog, filter state) into the exact visible result set.
//! No IO beyond parsing a JSON string handed in by the loader.

pub mod filter;
pub mod product;
pub mod repository;

pub use filter::{CategoryFilter, EmptyReason, FilterState, ResultSummary, visible_products};
pub use product::Product;
pub use repository::{CatalogError, ProductRepository};
