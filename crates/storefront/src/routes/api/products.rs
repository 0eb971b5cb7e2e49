//! Product endpoints of a category page.

use axum::{
    Json,
    extract::{Path, State},
};
use herreria_core::forms::ProductForm;
use herreria_core::{Category, ProductId};
use tracing::instrument;

use super::{MutationResponse, require_editor, respond};
use crate::error::{AppError, Result};
use crate::middleware::Editor;
use crate::state::AppState;
use crate::views::{CategoryPage, CategoryView};

/// The editing view of a known category: 404 for unknown slugs, 401 for
/// visitors.
fn editing_view<'a>(
    state: &'a AppState,
    editor: Editor,
    slug: &str,
) -> Result<&'a CategoryView> {
    let category = slug
        .parse::<Category>()
        .map_err(|_| AppError::NotFound(format!("category {slug}")))?;
    require_editor(editor)?;
    state
        .editing()
        .category(category)
        .ok_or_else(|| AppError::NotFound(format!("category {slug}")))
}

/// Products of a category grouped by subcategory.
///
/// GET /api/categories/{category}/products
///
/// Unknown categories answer with the fallback heading and no sections.
#[instrument(skip(state, editor))]
pub async fn index(
    State(state): State<AppState>,
    editor: Editor,
    Path(category): Path<String>,
) -> Json<CategoryPage> {
    let view = CategoryView::mount(state.catalog().clone(), editor.0, &category).await;
    Json(view.page().await)
}

/// Add a product to the category.
///
/// POST /api/categories/{category}/products
///
/// # Errors
///
/// Returns 404 for an unknown category, 401 for visitors, otherwise the edit
/// outcome's error.
#[instrument(skip(state, editor, form), fields(name = %form.name))]
pub async fn create(
    State(state): State<AppState>,
    editor: Editor,
    Path(category): Path<String>,
    Json(form): Json<ProductForm>,
) -> Result<Json<MutationResponse<CategoryPage>>> {
    let view = editing_view(&state, editor, &category)?;
    let outcome = view.add(&form).await;
    respond(&outcome, view.page().await)
}

/// Overwrite a product's editable fields.
///
/// PUT /api/categories/{category}/products/{id}
///
/// # Errors
///
/// Returns 404 for an unknown category, 401 for visitors, otherwise the edit
/// outcome's error.
#[instrument(skip(state, editor, form))]
pub async fn update(
    State(state): State<AppState>,
    editor: Editor,
    Path((category, id)): Path<(String, String)>,
    Json(form): Json<ProductForm>,
) -> Result<Json<MutationResponse<CategoryPage>>> {
    let view = editing_view(&state, editor, &category)?;
    let outcome = view.edit(&ProductId::new(id), &form).await;
    respond(&outcome, view.page().await)
}

/// Delete a product.
///
/// DELETE /api/categories/{category}/products/{id}
///
/// # Errors
///
/// Returns 404 for an unknown category, 401 for visitors, otherwise the edit
/// outcome's error.
#[instrument(skip(state, editor))]
pub async fn destroy(
    State(state): State<AppState>,
    editor: Editor,
    Path((category, id)): Path<(String, String)>,
) -> Result<Json<MutationResponse<CategoryPage>>> {
    let view = editing_view(&state, editor, &category)?;
    let outcome = view.delete(&ProductId::new(id)).await;
    respond(&outcome, view.page().await)
}
