//! Core types for the Herrería catalog.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod category;
pub mod field;
pub mod id;
pub mod rating;

pub use category::{Category, CategoryInfo, ParseCategoryError};
pub use field::FieldUpdate;
pub use id::*;
pub use rating::{Rating, RatingError};
