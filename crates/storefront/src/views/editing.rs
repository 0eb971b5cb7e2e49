//! Long-lived views that serve editor mutations over HTTP.
//!
//! Reads mount a fresh view per request. Mutations go through the single
//! view of their page held here, so two writes to the same page share one
//! saving flag: the second is refused as [`EditOutcome::Busy`] while the
//! first is in flight.
//!
//! [`EditOutcome::Busy`]: super::EditOutcome::Busy

use std::collections::HashMap;

use herreria_core::Category;

use super::{BestSellersView, CategoryView, EditorContext, OfferView};
use crate::services::CatalogService;

/// One editing view per page of the site.
pub struct EditingViews {
    categories: HashMap<Category, CategoryView>,
    best_sellers: BestSellersView,
    offer: OfferView,
}

impl EditingViews {
    /// Create the views without fetching; each refetches after its first
    /// successful mutation.
    #[must_use]
    pub fn new(catalog: &CatalogService) -> Self {
        let editor = EditorContext::editor();
        let categories = Category::ALL
            .into_iter()
            .map(|category| {
                let view = CategoryView::new(catalog.clone(), editor, category.slug());
                (category, view)
            })
            .collect();

        Self {
            categories,
            best_sellers: BestSellersView::new(catalog.clone(), editor),
            offer: OfferView::new(catalog.clone(), editor),
        }
    }

    /// The editing view of a category page.
    #[must_use]
    pub fn category(&self, category: Category) -> Option<&CategoryView> {
        self.categories.get(&category)
    }

    #[must_use]
    pub const fn best_sellers(&self) -> &BestSellersView {
        &self.best_sellers
    }

    #[must_use]
    pub const fn offer(&self) -> &OfferView {
        &self.offer
    }
}
