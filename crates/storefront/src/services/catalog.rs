//! Fail-soft catalog operations.
//!
//! Every operation here succeeds from the caller's point of view: backend
//! failures are logged and turned into an empty list, `None` or `false`.
//! Callers that need the reason use the repositories in [`crate::db`].

use std::sync::Arc;

use herreria_core::catalog::subcategories;
use herreria_core::{
    BestSeller, BestSellerId, BestSellerUpdate, Category, FeaturedOffer, NewBestSeller,
    NewFeaturedOffer, NewProduct, Product, ProductId, ProductUpdate,
};
use tracing::{error, info, instrument};

use crate::db::{BestSellerRepository, FeaturedOfferRepository, ProductRepository};
use crate::store::DocumentStore;

/// Catalog data access with the failure policy of the public pages.
///
/// Cheaply cloneable; clones share the same store.
#[derive(Clone)]
pub struct CatalogService {
    store: Arc<dyn DocumentStore>,
}

impl CatalogService {
    /// Create a catalog service over a document store.
    #[must_use]
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    fn products(&self) -> ProductRepository<'_> {
        ProductRepository::new(self.store.as_ref())
    }

    fn best_sellers(&self) -> BestSellerRepository<'_> {
        BestSellerRepository::new(self.store.as_ref())
    }

    fn featured_offer(&self) -> FeaturedOfferRepository<'_> {
        FeaturedOfferRepository::new(self.store.as_ref())
    }

    // =========================================================================
    // Products
    // =========================================================================

    /// Products of a category, newest first. Empty on failure.
    #[instrument(skip(self))]
    pub async fn list_by_category(&self, category: Category) -> Vec<Product> {
        self.products()
            .list_by_category(category)
            .await
            .unwrap_or_else(|e| {
                error!(error = %e, %category, "Failed to list products");
                Vec::new()
            })
    }

    /// Distinct subcategories of a category in first-appearance order of
    /// [`Self::list_by_category`]. Empty on failure.
    #[instrument(skip(self))]
    pub async fn list_subcategories(&self, category: Category) -> Vec<String> {
        subcategories(&self.list_by_category(category).await)
    }

    /// Add a product and return its new id. `None` on failure.
    #[instrument(skip(self, product), fields(name = %product.name))]
    pub async fn add_product(&self, product: NewProduct) -> Option<ProductId> {
        match self.products().create(product).await {
            Ok(created) => {
                info!(id = %created.id, "Product added");
                Some(created.id)
            }
            Err(e) => {
                error!(error = %e, "Failed to add product");
                None
            }
        }
    }

    /// Apply a partial update. `false` on failure, including a missing id.
    #[instrument(skip(self, update))]
    pub async fn update_product(&self, id: &ProductId, update: ProductUpdate) -> bool {
        match self.products().update(id, update).await {
            Ok(()) => {
                info!(%id, "Product updated");
                true
            }
            Err(e) => {
                error!(error = %e, %id, "Failed to update product");
                false
            }
        }
    }

    /// Delete a product. Deleting a missing id succeeds.
    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: &ProductId) -> bool {
        match self.products().delete(id).await {
            Ok(()) => {
                info!(%id, "Product deleted");
                true
            }
            Err(e) => {
                error!(error = %e, %id, "Failed to delete product");
                false
            }
        }
    }

    // =========================================================================
    // Best Sellers
    // =========================================================================

    /// Active best sellers by ascending rank. Empty on failure.
    #[instrument(skip(self))]
    pub async fn list_best_sellers(&self) -> Vec<BestSeller> {
        self.best_sellers().list_active().await.unwrap_or_else(|e| {
            error!(error = %e, "Failed to list best sellers");
            Vec::new()
        })
    }

    /// Every best seller, including inactive ones, by ascending rank.
    #[instrument(skip(self))]
    pub async fn list_all_best_sellers(&self) -> Vec<BestSeller> {
        self.best_sellers().list_all().await.unwrap_or_else(|e| {
            error!(error = %e, "Failed to list all best sellers");
            Vec::new()
        })
    }

    /// Add a best seller and return its new id. `None` on failure.
    #[instrument(skip(self, entry), fields(name = %entry.name))]
    pub async fn add_best_seller(&self, entry: NewBestSeller) -> Option<BestSellerId> {
        match self.best_sellers().create(entry).await {
            Ok(created) => {
                info!(id = %created.id, "Best seller added");
                Some(created.id)
            }
            Err(e) => {
                error!(error = %e, "Failed to add best seller");
                None
            }
        }
    }

    /// Apply a partial update. `false` on failure, including a missing id.
    #[instrument(skip(self, update))]
    pub async fn update_best_seller(&self, id: &BestSellerId, update: BestSellerUpdate) -> bool {
        match self.best_sellers().update(id, update).await {
            Ok(()) => {
                info!(%id, "Best seller updated");
                true
            }
            Err(e) => {
                error!(error = %e, %id, "Failed to update best seller");
                false
            }
        }
    }

    /// Delete a best seller. Deleting a missing id succeeds.
    #[instrument(skip(self))]
    pub async fn delete_best_seller(&self, id: &BestSellerId) -> bool {
        match self.best_sellers().delete(id).await {
            Ok(()) => {
                info!(%id, "Best seller deleted");
                true
            }
            Err(e) => {
                error!(error = %e, %id, "Failed to delete best seller");
                false
            }
        }
    }

    // =========================================================================
    // Featured Offer
    // =========================================================================

    /// The featured offer, or `None` if absent or unreadable.
    #[instrument(skip(self))]
    pub async fn get_featured_offer(&self) -> Option<FeaturedOffer> {
        self.featured_offer().get().await.unwrap_or_else(|e| {
            error!(error = %e, "Failed to get featured offer");
            None
        })
    }

    /// Replace the featured offer. `false` on failure.
    #[instrument(skip(self, offer), fields(title = %offer.title))]
    pub async fn set_featured_offer(&self, offer: NewFeaturedOffer) -> bool {
        match self.featured_offer().set(offer).await {
            Ok(_) => {
                info!("Featured offer saved");
                true
            }
            Err(e) => {
                error!(error = %e, "Failed to save featured offer");
                false
            }
        }
    }

    /// Remove the featured offer. `false` on failure.
    #[instrument(skip(self))]
    pub async fn remove_featured_offer(&self) -> bool {
        match self.featured_offer().remove().await {
            Ok(()) => {
                info!("Featured offer removed");
                true
            }
            Err(e) => {
                error!(error = %e, "Failed to remove featured offer");
                false
            }
        }
    }
}
