//! Integration tests for Herrería.
//!
//! The storefront router is driven in-process with `tower::ServiceExt::oneshot`
//! against an in-memory document store, so no server or Firestore project is
//! needed.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p herreria-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `catalog_api` - Category product endpoints
//! - `best_sellers_api` - Best-seller endpoints
//! - `featured_offer_api` - Featured offer endpoints
//! - `pages` - Server-rendered pages

use std::net::{IpAddr, Ipv4Addr};
use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Method, Request, StatusCode, header};
use herreria_storefront::config::{StoreConfig, StorefrontConfig};
use herreria_storefront::state::AppState;
use herreria_storefront::store::{
    Document, DocumentStore, Fields, MemoryStore, Patch, Query, StoreError,
};
use secrecy::SecretString;
use serde_json::Value;
use tokio::sync::Semaphore;
use tower::ServiceExt;

/// Editor token configured for every test app.
pub const EDITOR_TOKEN: &str = "k3Qz8vR1pX7mW2nB5tY9cL4hJ6fD0sGa";

/// Largest response body the helpers read.
const BODY_LIMIT: usize = 1024 * 1024;

/// A storefront app over a fresh in-memory store.
pub struct TestContext {
    pub store: MemoryStore,
    pub app: Router,
}

/// A decoded response.
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub body: String,
}

impl TestResponse {
    /// Parse the body as JSON; `Value::Null` if it is not JSON.
    #[must_use]
    pub fn json(&self) -> Value {
        serde_json::from_str(&self.body).unwrap_or(Value::Null)
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl TestContext {
    /// Build the app with the memory store and the test editor token.
    #[must_use]
    pub fn new() -> Self {
        let store = MemoryStore::new();
        Self::over(store.clone(), Arc::new(store))
    }

    /// Build the app over a store whose writes wait for permits on the
    /// returned semaphore, so a test can hold a mutation in flight.
    #[must_use]
    pub fn gated() -> (Self, Arc<Semaphore>) {
        let store = MemoryStore::new();
        let gate = Arc::new(Semaphore::new(0));
        let backend = GatedStore {
            inner: store.clone(),
            gate: Arc::clone(&gate),
        };
        (Self::over(store, Arc::new(backend)), gate)
    }

    fn over(store: MemoryStore, backend: Arc<dyn DocumentStore>) -> Self {
        let config = StorefrontConfig {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 0,
            store: StoreConfig::Memory,
            editor_token: SecretString::from(EDITOR_TOKEN),
            sentry_dsn: None,
            sentry_environment: None,
        };
        let app = herreria_storefront::app(AppState::with_store(config, backend));
        Self { store, app }
    }

    /// Send a request, as the editor when `editor` is set.
    ///
    /// # Panics
    ///
    /// Panics if the request cannot be built or the body cannot be read.
    pub async fn send(
        &self,
        method: Method,
        uri: &str,
        body: Option<&Value>,
        editor: bool,
    ) -> TestResponse {
        let mut request = Request::builder().method(method).uri(uri);
        if editor {
            request = request.header(header::AUTHORIZATION, format!("Bearer {EDITOR_TOKEN}"));
        }
        let request = match body {
            Some(json) => request
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string())),
            None => request.body(Body::empty()),
        }
        .expect("request should build");

        let response = self
            .app
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible");
        let status = response.status();
        let bytes = to_bytes(response.into_body(), BODY_LIMIT)
            .await
            .expect("body should be readable");

        TestResponse {
            status,
            body: String::from_utf8_lossy(&bytes).into_owned(),
        }
    }

    /// GET as a visitor.
    pub async fn get(&self, uri: &str) -> TestResponse {
        self.send(Method::GET, uri, None, false).await
    }

    /// GET as the editor.
    pub async fn get_as_editor(&self, uri: &str) -> TestResponse {
        self.send(Method::GET, uri, None, true).await
    }
}

/// A [`MemoryStore`] whose writes each wait for one permit from `gate`.
struct GatedStore {
    inner: MemoryStore,
    gate: Arc<Semaphore>,
}

impl GatedStore {
    async fn pass_gate(&self) {
        if let Ok(permit) = self.gate.acquire().await {
            permit.forget();
        }
    }
}

#[async_trait]
impl DocumentStore for GatedStore {
    async fn query(&self, query: &Query) -> Result<Vec<Document>, StoreError> {
        self.inner.query(query).await
    }

    async fn get(&self, collection: &str, id: &str) -> Result<Option<Document>, StoreError> {
        self.inner.get(collection, id).await
    }

    async fn create(&self, collection: &str, fields: Fields) -> Result<String, StoreError> {
        self.pass_gate().await;
        self.inner.create(collection, fields).await
    }

    async fn update(&self, collection: &str, id: &str, patch: Patch) -> Result<(), StoreError> {
        self.pass_gate().await;
        self.inner.update(collection, id, patch).await
    }

    async fn set(&self, collection: &str, id: &str, fields: Fields) -> Result<(), StoreError> {
        self.pass_gate().await;
        self.inner.set(collection, id, fields).await
    }

    async fn delete(&self, collection: &str, id: &str) -> Result<(), StoreError> {
        self.pass_gate().await;
        self.inner.delete(collection, id).await
    }
}
