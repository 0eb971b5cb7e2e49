//! Best-seller endpoints.

use axum::{
    Json,
    extract::{Path, State},
};
use herreria_core::forms::BestSellerForm;
use herreria_core::{BestSeller, BestSellerId};
use tracing::instrument;

use super::{MutationResponse, require_editor, respond};
use crate::error::Result;
use crate::middleware::Editor;
use crate::state::AppState;
use crate::views::{BestSellersView, LoadState};

/// Active best sellers by ascending rank.
///
/// GET /api/best-sellers
#[instrument(skip(state, editor))]
pub async fn index(
    State(state): State<AppState>,
    editor: Editor,
) -> Json<LoadState<Vec<BestSeller>>> {
    let view = BestSellersView::mount(state.catalog().clone(), editor.0).await;
    Json(view.state().await)
}

/// Every best seller, including inactive ones. Editors only.
///
/// GET /api/best-sellers/all
///
/// # Errors
///
/// Returns 401 for visitors.
#[instrument(skip(state, editor))]
pub async fn all(State(state): State<AppState>, editor: Editor) -> Result<Json<Vec<BestSeller>>> {
    require_editor(editor)?;
    Ok(Json(state.catalog().list_all_best_sellers().await))
}

/// Add a best seller.
///
/// POST /api/best-sellers
///
/// # Errors
///
/// Returns 401 for visitors, otherwise the edit outcome's error.
#[instrument(skip(state, editor, form), fields(name = %form.name))]
pub async fn create(
    State(state): State<AppState>,
    editor: Editor,
    Json(form): Json<BestSellerForm>,
) -> Result<Json<MutationResponse<LoadState<Vec<BestSeller>>>>> {
    require_editor(editor)?;
    let view = state.editing().best_sellers();
    let outcome = view.add(&form).await;
    respond(&outcome, view.state().await)
}

/// Overwrite a best seller's editable fields.
///
/// PUT /api/best-sellers/{id}
///
/// # Errors
///
/// Returns 401 for visitors, otherwise the edit outcome's error.
#[instrument(skip(state, editor, form))]
pub async fn update(
    State(state): State<AppState>,
    editor: Editor,
    Path(id): Path<String>,
    Json(form): Json<BestSellerForm>,
) -> Result<Json<MutationResponse<LoadState<Vec<BestSeller>>>>> {
    require_editor(editor)?;
    let view = state.editing().best_sellers();
    let outcome = view.edit(&BestSellerId::new(id), &form).await;
    respond(&outcome, view.state().await)
}

/// Delete a best seller.
///
/// DELETE /api/best-sellers/{id}
///
/// # Errors
///
/// Returns 401 for visitors, otherwise the edit outcome's error.
#[instrument(skip(state, editor))]
pub async fn destroy(
    State(state): State<AppState>,
    editor: Editor,
    Path(id): Path<String>,
) -> Result<Json<MutationResponse<LoadState<Vec<BestSeller>>>>> {
    require_editor(editor)?;
    let view = state.editing().best_sellers();
    let outcome = view.delete(&BestSellerId::new(id)).await;
    respond(&outcome, view.state().await)
}
