//! Featured offer endpoints.

use axum::{Json, extract::State};
use herreria_core::FeaturedOffer;
use herreria_core::forms::OfferForm;
use tracing::instrument;

use super::{MutationResponse, require_editor, respond};
use crate::error::Result;
use crate::middleware::Editor;
use crate::state::AppState;
use crate::views::OfferView;

/// The offer as the viewer sees it: `null` when absent, and for visitors
/// also when inactive.
///
/// GET /api/featured-offer
#[instrument(skip(state, editor))]
pub async fn show(State(state): State<AppState>, editor: Editor) -> Json<Option<FeaturedOffer>> {
    let view = OfferView::mount(state.catalog().clone(), editor.0).await;
    if editor.0.is_authenticated {
        Json(view.state().await.ready().cloned().flatten())
    } else {
        Json(view.visible().await)
    }
}

/// Replace the offer.
///
/// PUT /api/featured-offer
///
/// # Errors
///
/// Returns 401 for visitors, otherwise the edit outcome's error.
#[instrument(skip(state, editor, form), fields(title = %form.title))]
pub async fn save(
    State(state): State<AppState>,
    editor: Editor,
    Json(form): Json<OfferForm>,
) -> Result<Json<MutationResponse<Option<FeaturedOffer>>>> {
    require_editor(editor)?;
    let view = state.editing().offer();
    let outcome = view.save(&form).await;
    respond(&outcome, view.state().await.ready().cloned().flatten())
}

/// Remove the offer.
///
/// DELETE /api/featured-offer
///
/// # Errors
///
/// Returns 401 for visitors, otherwise the edit outcome's error.
#[instrument(skip(state, editor))]
pub async fn remove(
    State(state): State<AppState>,
    editor: Editor,
) -> Result<Json<MutationResponse<Option<FeaturedOffer>>>> {
    require_editor(editor)?;
    let view = state.editing().offer();
    let outcome = view.remove().await;
    respond(&outcome, view.state().await.ready().cloned().flatten())
}
