//! Ordering and grouping of fetched catalog entries.
//!
//! The store is only asked for an equality filter on the category; ordering by
//! creation time happens here. Subcategory sections are derived from the order
//! products arrive in, so the section order shown on a category page depends
//! on [`sort_newest_first`] running first and on it being a stable sort.

use std::collections::HashSet;

use serde::Serialize;

use crate::models::{BestSeller, Product};

/// Sort products by creation timestamp, most recent first.
///
/// Stable: products with equal timestamps keep the order the store returned.
pub fn sort_newest_first(products: &mut [Product]) {
    products.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}

/// Sort best-seller entries by rank, lowest first.
///
/// Stable: equal ranks keep the order the store returned.
pub fn sort_by_rank(entries: &mut [BestSeller]) {
    entries.sort_by_key(|entry| entry.order);
}

/// Distinct subcategory labels in order of first appearance.
#[must_use]
pub fn subcategories(products: &[Product]) -> Vec<String> {
    let mut seen = HashSet::new();
    products
        .iter()
        .filter(|product| seen.insert(product.subcategory.as_str()))
        .map(|product| product.subcategory.clone())
        .collect()
}

/// Products of one subcategory, as rendered on a category page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubcategorySection {
    pub label: String,
    pub products: Vec<Product>,
}

/// Group products into one section per subcategory.
///
/// Sections follow [`subcategories`] order; within a section products keep
/// their relative order from the input.
#[must_use]
pub fn group_by_subcategory(products: &[Product]) -> Vec<SubcategorySection> {
    subcategories(products)
        .into_iter()
        .map(|label| {
            let members = products
                .iter()
                .filter(|product| product.subcategory == label)
                .cloned()
                .collect();
            SubcategorySection {
                label,
                products: members,
            }
        })
        .collect()
}
