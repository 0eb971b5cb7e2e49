//! JSON API for the catalog.
//!
//! Reads are public and mount a fresh view per request. Mutations need the
//! editor token and run through the page's shared editing view, which
//! validates the form, performs the write and refetches; a second mutation of
//! the same page while one is in flight answers 409. The response carries the
//! view's refetched state.

pub mod best_sellers;
pub mod offer;
pub mod products;

use axum::{
    Json, Router,
    routing::{get, put},
};
use serde::Serialize;

use crate::error::{AppError, Result};
use crate::middleware::Editor;
use crate::state::AppState;
use crate::views::EditOutcome;

/// Body of a successful mutation.
#[derive(Debug, Serialize)]
pub struct MutationResponse<T> {
    /// User-facing confirmation, e.g. "Producto agregado exitosamente".
    pub message: &'static str,
    /// The view's state after the refetch.
    pub data: T,
}

/// Turn an edit outcome and the refetched state into a response.
fn respond<T>(outcome: &EditOutcome, data: T) -> Result<Json<MutationResponse<T>>> {
    if let Some(err) = AppError::from_outcome(outcome) {
        return Err(err);
    }
    Ok(Json(MutationResponse {
        message: outcome.message(),
        data,
    }))
}

/// Refuse visitors before they reach a shared editing view.
fn require_editor(editor: Editor) -> Result<()> {
    if editor.0.is_authenticated {
        Ok(())
    } else {
        Err(AppError::Unauthorized(EditOutcome::Unauthorized.message().to_string()))
    }
}

/// Create the API router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/categories/{category}/products",
            get(products::index).post(products::create),
        )
        .route(
            "/categories/{category}/products/{id}",
            put(products::update).delete(products::destroy),
        )
        .route(
            "/best-sellers",
            get(best_sellers::index).post(best_sellers::create),
        )
        .route("/best-sellers/all", get(best_sellers::all))
        .route(
            "/best-sellers/{id}",
            put(best_sellers::update).delete(best_sellers::destroy),
        )
        .route(
            "/featured-offer",
            get(offer::show).put(offer::save).delete(offer::remove),
        )
}
