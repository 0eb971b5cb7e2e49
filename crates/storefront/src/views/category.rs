//! Category page: products of one category grouped by subcategory.

use herreria_core::catalog::{SubcategorySection, group_by_subcategory};
use herreria_core::forms::ProductForm;
use herreria_core::{CategoryInfo, ProductId};
use serde::Serialize;
use tokio::sync::RwLock;
use tracing::debug;

use super::{EditOutcome, EditorContext, LoadState, LoadTracker, SavingFlag, admit};
use crate::services::CatalogService;

pub const ADD_DONE: &str = "Producto agregado exitosamente";
pub const ADD_FAILED: &str = "Error al agregar el producto";
pub const EDIT_DONE: &str = "Producto actualizado exitosamente";
pub const EDIT_FAILED: &str = "Error al actualizar el producto";
pub const DELETE_DONE: &str = "Producto eliminado exitosamente";
pub const DELETE_FAILED: &str = "Error al eliminar el producto";

/// Snapshot of a category page for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryPage {
    pub info: CategoryInfo,
    pub state: LoadState<Vec<SubcategorySection>>,
    pub editor: EditorContext,
}

impl CategoryPage {
    /// Sections to render; empty while loading.
    #[must_use]
    pub fn sections(&self) -> &[SubcategorySection] {
        self.state.ready().map(Vec::as_slice).unwrap_or_default()
    }
}

/// One instance of a category page.
///
/// Unknown category slugs show fallback text and never query the store.
pub struct CategoryView {
    catalog: CatalogService,
    editor: EditorContext,
    info: RwLock<CategoryInfo>,
    state: RwLock<LoadState<Vec<SubcategorySection>>>,
    loads: LoadTracker,
    saving: SavingFlag,
}

impl CategoryView {
    /// Create a view in the `Loading` state without fetching.
    #[must_use]
    pub fn new(catalog: CatalogService, editor: EditorContext, slug: &str) -> Self {
        Self {
            catalog,
            editor,
            info: RwLock::new(CategoryInfo::resolve(slug)),
            state: RwLock::new(LoadState::Loading),
            loads: LoadTracker::default(),
            saving: SavingFlag::default(),
        }
    }

    /// Create a view and run its first load.
    pub async fn mount(catalog: CatalogService, editor: EditorContext, slug: &str) -> Self {
        let view = Self::new(catalog, editor, slug);
        view.load().await;
        view
    }

    /// Switch to another category and load it.
    pub async fn set_category(&self, slug: &str) {
        *self.info.write().await = CategoryInfo::resolve(slug);
        self.load().await;
    }

    /// Enter `Loading` and fetch the current category.
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
        let category = self.info.read().await.category;

        let sections = match category {
            Some(category) => group_by_subcategory(&self.catalog.list_by_category(category).await),
            None => Vec::new(),
        };

        if !self.loads.is_current(generation) {
            debug!(generation, ?category, "Dropping stale category load");
            return;
        }
        *self.state.write().await = LoadState::Ready(sections);
    }

    /// Current snapshot.
    pub async fn page(&self) -> CategoryPage {
        CategoryPage {
            info: self.info.read().await.clone(),
            state: self.state.read().await.clone(),
            editor: self.editor,
        }
    }

    /// Add a product to the current category.
    ///
    /// The product's category is always the page's category.
    pub async fn add(&self, form: &ProductForm) -> EditOutcome {
        let _saving = match admit(self.editor, &self.saving) {
            Ok(guard) => guard,
            Err(outcome) => return outcome,
        };
        let Some(category) = self.info.read().await.category else {
            return EditOutcome::Failed(ADD_FAILED);
        };
        let product = match form.to_new_product(category) {
            Ok(product) => product,
            Err(e) => return EditOutcome::Invalid(e),
        };

        if self.catalog.add_product(product).await.is_none() {
            return EditOutcome::Failed(ADD_FAILED);
        }
        self.fetch().await;
        EditOutcome::Done(ADD_DONE)
    }

    /// Overwrite a product's editable fields from the form.
    pub async fn edit(&self, id: &ProductId, form: &ProductForm) -> EditOutcome {
        let _saving = match admit(self.editor, &self.saving) {
            Ok(guard) => guard,
            Err(outcome) => return outcome,
        };
        let update = match form.to_update() {
            Ok(update) => update,
            Err(e) => return EditOutcome::Invalid(e),
        };

        if !self.catalog.update_product(id, update).await {
            return EditOutcome::Failed(EDIT_FAILED);
        }
        self.fetch().await;
        EditOutcome::Done(EDIT_DONE)
    }

    /// Delete a product. Confirmation happens before this is called.
    pub async fn delete(&self, id: &ProductId) -> EditOutcome {
        let _saving = match admit(self.editor, &self.saving) {
            Ok(guard) => guard,
            Err(outcome) => return outcome,
        };

        if !self.catalog.delete_product(id).await {
            return EditOutcome::Failed(DELETE_FAILED);
        }
        self.fetch().await;
        EditOutcome::Done(DELETE_DONE)
    }
}
