//! Herrería Core - Shared catalog types.
//!
//! This crate provides the domain types used across all Herrería components:
//! - `storefront` - Public catalog site with inline editing
//! - `cli` - Command-line tools for catalog management and seeding
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no document
//! store access, no HTTP clients. This keeps it lightweight and allows it to be
//! used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Typed ids, the category enumeration, ratings, field updates
//! - [`models`] - Catalog entities (products, best sellers, featured offer)
//! - [`forms`] - Editor forms and their client-side validation
//! - [`catalog`] - Ordering and subcategory grouping of fetched products
//! - [`contact`] - Shop location and outbound inquiry links

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod contact;
pub mod forms;
pub mod models;
pub mod types;

pub use models::*;
pub use types::*;
