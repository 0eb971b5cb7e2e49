//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Home page (featured offer + best sellers)
//! GET  /health                 - Health check
//! GET  /ubicacion              - Location page
//! GET  /{category}             - Category page
//!
//! # API (JSON, mutations need the editor token)
//! GET    /api/categories/{category}/products
//! POST   /api/categories/{category}/products
//! PUT    /api/categories/{category}/products/{id}
//! DELETE /api/categories/{category}/products/{id}
//! GET    /api/best-sellers
//! GET    /api/best-sellers/all
//! POST   /api/best-sellers
//! PUT    /api/best-sellers/{id}
//! DELETE /api/best-sellers/{id}
//! GET    /api/featured-offer
//! PUT    /api/featured-offer
//! DELETE /api/featured-offer
//! ```

pub mod api;
pub mod pages;

use axum::{Router, routing::get};

use crate::state::AppState;

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/", get(pages::home))
        .route("/ubicacion", get(pages::location))
        .nest("/api", api::routes())
        // Category pages catch every other single segment
        .route("/{category}", get(pages::category))
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check the store.
async fn health() -> &'static str {
    "ok"
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use super::*;

    #[tokio::test]
    async fn test_health_is_ok() {
        let app: Router = Router::new().route("/health", get(health));
        let response = app
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
