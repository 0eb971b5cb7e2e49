//! Featured offer banner.

use herreria_core::FeaturedOffer;
use herreria_core::forms::OfferForm;
use tokio::sync::RwLock;
use tracing::debug;

use super::{EditOutcome, EditorContext, LoadState, LoadTracker, SavingFlag, admit};
use crate::services::CatalogService;

pub const SAVE_DONE: &str = "Oferta guardada exitosamente";
pub const SAVE_FAILED: &str = "Error al guardar la oferta";
pub const REMOVE_DONE: &str = "Oferta eliminada exitosamente";
pub const REMOVE_FAILED: &str = "Error al eliminar la oferta";

/// One instance of the featured offer banner.
pub struct OfferView {
    catalog: CatalogService,
    editor: EditorContext,
    state: RwLock<LoadState<Option<FeaturedOffer>>>,
    loads: LoadTracker,
    saving: SavingFlag,
}

impl OfferView {
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

    pub async fn mount(catalog: CatalogService, editor: EditorContext) -> Self {
        let view = Self::new(catalog, editor);
        view.load().await;
        view
    }

    pub async fn load(&self) {
        *self.state.write().await = LoadState::Loading;
        self.fetch().await;
    }

    pub fn unmount(&self) {
        self.loads.unmount();
    }

    async fn fetch(&self) {
        let generation = self.loads.begin();
        let offer = self.catalog.get_featured_offer().await;

        if !self.loads.is_current(generation) {
            debug!(generation, "Dropping stale featured offer load");
            return;
        }
        *self.state.write().await = LoadState::Ready(offer);
    }

    /// Current state. `Ready(None)` means there is no offer at all.
    pub async fn state(&self) -> LoadState<Option<FeaturedOffer>> {
        self.state.read().await.clone()
    }

    /// The offer a visitor sees: present and active.
    pub async fn visible(&self) -> Option<FeaturedOffer> {
        self.state
            .read()
            .await
            .ready()
            .and_then(Option::as_ref)
            .filter(|offer| offer.is_visible())
            .cloned()
    }

    /// Replace the offer with the form's contents.
    pub async fn save(&self, form: &OfferForm) -> EditOutcome {
        let _saving = match admit(self.editor, &self.saving) {
            Ok(guard) => guard,
            Err(outcome) => return outcome,
        };
        let offer = match form.to_new_offer() {
            Ok(offer) => offer,
            Err(e) => return EditOutcome::Invalid(e),
        };

        if !self.catalog.set_featured_offer(offer).await {
            return EditOutcome::Failed(SAVE_FAILED);
        }
        self.fetch().await;
        EditOutcome::Done(SAVE_DONE)
    }

    /// Delete the offer.
    pub async fn remove(&self) -> EditOutcome {
        let _saving = match admit(self.editor, &self.saving) {
            Ok(guard) => guard,
            Err(outcome) => return outcome,
        };

        if !self.catalog.remove_featured_offer().await {
            return EditOutcome::Failed(REMOVE_FAILED);
        }
        self.fetch().await;
        EditOutcome::Done(REMOVE_DONE)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use herreria_core::forms::ValidationError;

    use super::*;
    use crate::views::testing::CountingStore;

    fn liquidacion() -> OfferForm {
        OfferForm {
            title: "Liquidación de rejas".to_string(),
            description: "Rejas de seguridad a medida".to_string(),
            image: "https://img/rejas.jpg".to_string(),
            original_price: "$700".to_string(),
            discounted_price: "$490".to_string(),
            discount: "30% OFF".to_string(),
            valid_until: String::new(),
            is_active: true,
        }
    }

    fn catalog(store: &CountingStore) -> CatalogService {
        CatalogService::new(Arc::new(store.clone()))
    }

    #[tokio::test]
    async fn test_save_then_remove_leaves_no_offer() {
        let store = CountingStore::default();
        let view = OfferView::mount(catalog(&store), EditorContext::editor()).await;
        assert_eq!(view.state().await, LoadState::Ready(None));

        assert_eq!(view.save(&liquidacion()).await, EditOutcome::Done(SAVE_DONE));
        let saved = view.visible().await;
        assert_eq!(saved.as_ref().map(|o| o.title.as_str()), Some("Liquidación de rejas"));
        assert_eq!(saved.and_then(|o| o.valid_until), None);

        assert_eq!(view.remove().await, EditOutcome::Done(REMOVE_DONE));
        assert_eq!(view.state().await, LoadState::Ready(None));
    }

    #[tokio::test]
    async fn test_inactive_offer_is_loaded_but_not_visible() {
        let store = CountingStore::default();
        let view = OfferView::mount(catalog(&store), EditorContext::editor()).await;

        let paused = OfferForm {
            is_active: false,
            ..liquidacion()
        };
        assert!(view.save(&paused).await.is_done());

        assert!(matches!(view.state().await, LoadState::Ready(Some(_))));
        assert!(view.visible().await.is_none());
    }

    #[tokio::test]
    async fn test_save_overwrites_every_field() {
        let store = CountingStore::default();
        let view = OfferView::mount(catalog(&store), EditorContext::editor()).await;
        view.save(&liquidacion()).await;

        let plain = OfferForm {
            original_price: String::new(),
            discount: String::new(),
            ..liquidacion()
        };
        view.save(&plain).await;

        let offer = view.visible().await;
        assert_eq!(offer.as_ref().and_then(|o| o.discount.clone()), None);
        assert_eq!(offer.and_then(|o| o.original_price), None);
    }

    #[tokio::test]
    async fn test_missing_discounted_price_is_rejected() {
        let store = CountingStore::default();
        let view = OfferView::mount(catalog(&store), EditorContext::editor()).await;

        let outcome = view
            .save(&OfferForm {
                discounted_price: " ".to_string(),
                ..liquidacion()
            })
            .await;
        assert_eq!(
            outcome,
            EditOutcome::Invalid(ValidationError::MissingFields(vec!["discountedPrice"]))
        );
        assert_eq!(store.mutation_count(), 0);
    }

    #[tokio::test]
    async fn test_visitor_cannot_remove() {
        let store = CountingStore::default();
        let view = OfferView::mount(catalog(&store), EditorContext::visitor()).await;

        assert_eq!(view.remove().await, EditOutcome::Unauthorized);
        assert_eq!(store.mutation_count(), 0);
    }
}
