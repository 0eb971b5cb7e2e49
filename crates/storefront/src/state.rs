//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::{StoreConfig, StorefrontConfig};
use crate::services::CatalogService;
use crate::store::{DocumentStore, FirestoreStore, MemoryStore};
use crate::views::EditingViews;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to
/// the catalog, the editing views and configuration.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    catalog: CatalogService,
    editing: EditingViews,
}

impl AppState {
    /// Create the application state, connecting to the configured store.
    #[must_use]
    pub fn new(config: StorefrontConfig) -> Self {
        let store = build_store(&config.store);
        Self::with_store(config, store)
    }

    /// Create the application state over an existing store.
    #[must_use]
    pub fn with_store(config: StorefrontConfig, store: Arc<dyn DocumentStore>) -> Self {
        let catalog = CatalogService::new(store);
        Self {
            inner: Arc::new(AppStateInner {
                config,
                editing: EditingViews::new(&catalog),
                catalog,
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the catalog service.
    #[must_use]
    pub fn catalog(&self) -> &CatalogService {
        &self.inner.catalog
    }

    /// Get the views that serve editor mutations.
    #[must_use]
    pub fn editing(&self) -> &EditingViews {
        &self.inner.editing
    }
}

/// Build the document store selected by configuration.
#[must_use]
pub fn build_store(config: &StoreConfig) -> Arc<dyn DocumentStore> {
    match config {
        StoreConfig::Firestore(firestore) => {
            tracing::info!(project = %firestore.project_id, "Using Firestore document store");
            Arc::new(FirestoreStore::new(firestore))
        }
        StoreConfig::Memory => {
            tracing::warn!("Using in-memory document store; data is lost on restart");
            Arc::new(MemoryStore::new())
        }
    }
}
