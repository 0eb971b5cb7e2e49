//! Home page: the featured offer above the best-seller grid.

use herreria_core::{BestSeller, Category, CategoryInfo, FeaturedOffer};
use serde::Serialize;

use super::{BestSellersView, EditorContext, LoadState, OfferView};
use crate::services::CatalogService;

/// Snapshot of the home page for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HomePage {
    /// The offer as stored. Editors see inactive offers so they can
    /// re-enable them.
    pub offer: LoadState<Option<FeaturedOffer>>,
    pub best_sellers: LoadState<Vec<BestSeller>>,
    pub categories: Vec<CategoryInfo>,
    pub editor: EditorContext,
}

impl HomePage {
    /// Mount both sections concurrently and take a snapshot.
    pub async fn load(catalog: &CatalogService, editor: EditorContext) -> Self {
        let (offer, best_sellers) = tokio::join!(
            OfferView::mount(catalog.clone(), editor),
            BestSellersView::mount(catalog.clone(), editor),
        );

        Self {
            offer: offer.state().await,
            best_sellers: best_sellers.state().await,
            categories: Category::ALL.into_iter().map(CategoryInfo::from).collect(),
            editor,
        }
    }

    /// The offer to display: any stored offer for editors, active ones only
    /// for visitors.
    #[must_use]
    pub fn displayed_offer(&self) -> Option<&FeaturedOffer> {
        let offer = self.offer.ready()?.as_ref()?;
        (self.editor.is_authenticated || offer.is_visible()).then_some(offer)
    }

    /// Best sellers to render; empty while loading.
    #[must_use]
    pub fn best_sellers(&self) -> &[BestSeller] {
        self.best_sellers
            .ready()
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use herreria_core::{NewBestSeller, NewFeaturedOffer, Rating};

    use super::*;
    use crate::store::MemoryStore;

    fn paused_offer() -> NewFeaturedOffer {
        NewFeaturedOffer {
            title: "Portones en cuotas".to_string(),
            description: "Hasta 6 cuotas sin interés".to_string(),
            image: "https://img/porton.jpg".to_string(),
            original_price: None,
            discounted_price: "$1500".to_string(),
            discount: None,
            valid_until: None,
            is_active: false,
        }
    }

    #[tokio::test]
    async fn test_empty_store_renders_empty_sections() {
        let catalog = CatalogService::new(Arc::new(MemoryStore::new()));
        let page = HomePage::load(&catalog, EditorContext::visitor()).await;

        assert_eq!(page.offer, LoadState::Ready(None));
        assert!(page.displayed_offer().is_none());
        assert!(page.best_sellers().is_empty());
        assert_eq!(page.categories.len(), Category::ALL.len());
    }

    #[tokio::test]
    async fn test_inactive_offer_is_shown_to_editors_only() {
        let catalog = CatalogService::new(Arc::new(MemoryStore::new()));
        assert!(catalog.set_featured_offer(paused_offer()).await);

        let visitor = HomePage::load(&catalog, EditorContext::visitor()).await;
        assert!(visitor.displayed_offer().is_none());

        let editor = HomePage::load(&catalog, EditorContext::editor()).await;
        assert_eq!(
            editor.displayed_offer().map(|o| o.title.as_str()),
            Some("Portones en cuotas")
        );
    }

    #[tokio::test]
    async fn test_best_sellers_are_included() {
        let catalog = CatalogService::new(Arc::new(MemoryStore::new()));
        catalog
            .add_best_seller(NewBestSeller {
                name: "Escalera caracol".to_string(),
                image: "https://img/escalera.jpg".to_string(),
                price: "$3000".to_string(),
                rating: Rating::new(4).unwrap(),
                category: "Escaleras".to_string(),
                is_active: true,
                order: 1,
            })
            .await
            .unwrap();

        let page = HomePage::load(&catalog, EditorContext::visitor()).await;
        assert_eq!(page.best_sellers().len(), 1);
        assert_eq!(page.best_sellers()[0].rating.get(), 4);
    }
}
