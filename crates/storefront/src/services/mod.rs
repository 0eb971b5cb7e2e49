//! Business logic services for the storefront.
//!
//! # Services
//!
//! - `catalog` - Fail-soft catalog reads and writes used by the views

pub mod catalog;

pub use catalog::CatalogService;
