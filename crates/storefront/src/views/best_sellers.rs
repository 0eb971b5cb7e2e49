//! Best-seller grid shown on the home page.

use herreria_core::forms::BestSellerForm;
use herreria_core::{BestSeller, BestSellerId};
use tokio::sync::RwLock;
use tracing::debug;

use super::{EditOutcome, EditorContext, LoadState, LoadTracker, SavingFlag, admit};
use crate::services::CatalogService;

pub const ADD_DONE: &str = "Producto más vendido agregado exitosamente";
pub const ADD_FAILED: &str = "Error al agregar el producto";
pub const EDIT_DONE: &str = "Producto actualizado exitosamente";
pub const EDIT_FAILED: &str = "Error al actualizar el producto";
pub const DELETE_DONE: &str = "Producto eliminado exitosamente";
pub const DELETE_FAILED: &str = "Error al eliminar el producto";

/// One instance of the best-seller grid.
///
/// Shows active entries in rank order, as the store returns them.
pub struct BestSellersView {
    catalog: CatalogService,
    editor: EditorContext,
    state: RwLock<LoadState<Vec<BestSeller>>>,
    loads: LoadTracker,
    saving: SavingFlag,
}

impl BestSellersView {
    /// Create a view in the `Loading` state without fetching.
    #[must_use]
    pub fn new(catalog: CatalogService, editor: EditorContext) -> Self {
        Self {
            catalog,
            editor,
            state: RwLock::new(LoadState::Loading),
            loads: LoadTracker::default(),
            saving: SavingFlag::default(),
        }
    }

    /// Create a view and run its first load.
    pub async fn mount(catalog: CatalogService, editor: EditorContext) -> Self {
        let view = Self::new(catalog, editor);
        view.load().await;
        view
    }

    /// Enter `Loading` and fetch.
    pub async fn load(&self) {
        *self.state.write().await = LoadState::Loading;
        self.fetch().await;
    }

    /// Stop applying fetch results.
    pub fn unmount(&self) {
        self.loads.unmount();
    }

    async fn fetch(&self) {
        let generation = self.loads.begin();
        let entries = self.catalog.list_best_sellers().await;

        if !self.loads.is_current(generation) {
            debug!(generation, "Dropping stale best sellers load");
            return;
        }
        *self.state.write().await = LoadState::Ready(entries);
    }

    /// Current state.
    pub async fn state(&self) -> LoadState<Vec<BestSeller>> {
        self.state.read().await.clone()
    }

    #[must_use]
    pub const fn editor(&self) -> EditorContext {
        self.editor
    }

    pub async fn add(&self, form: &BestSellerForm) -> EditOutcome {
        let _saving = match admit(self.editor, &self.saving) {
            Ok(guard) => guard,
            Err(outcome) => return outcome,
        };
        let entry = match form.to_new_best_seller() {
            Ok(entry) => entry,
            Err(e) => return EditOutcome::Invalid(e),
        };

        if self.catalog.add_best_seller(entry).await.is_none() {
            return EditOutcome::Failed(ADD_FAILED);
        }
        self.fetch().await;
        EditOutcome::Done(ADD_DONE)
    }

    pub async fn edit(&self, id: &BestSellerId, form: &BestSellerForm) -> EditOutcome {
        let _saving = match admit(self.editor, &self.saving) {
            Ok(guard) => guard,
            Err(outcome) => return outcome,
        };
        let update = match form.to_update() {
            Ok(update) => update,
            Err(e) => return EditOutcome::Invalid(e),
        };

        if !self.catalog.update_best_seller(id, update).await {
            return EditOutcome::Failed(EDIT_FAILED);
        }
        self.fetch().await;
        EditOutcome::Done(EDIT_DONE)
    }

    pub async fn delete(&self, id: &BestSellerId) -> EditOutcome {
        let _saving = match admit(self.editor, &self.saving) {
            Ok(guard) => guard,
            Err(outcome) => return outcome,
        };

        if !self.catalog.delete_best_seller(id).await {
            return EditOutcome::Failed(DELETE_FAILED);
        }
        self.fetch().await;
        EditOutcome::Done(DELETE_DONE)
    }
}
