//! Hosted document store access.
//!
//! # Architecture
//!
//! - [`DocumentStore`] is the only seam between the catalog and persistence
//! - [`FirestoreStore`] talks to the hosted store over its REST API
//! - [`MemoryStore`] keeps documents in process (tests, local development)
//!
//! The store knows nothing about products or offers: it deals in collections
//! of schemaless [`Document`]s. Record mapping lives in [`crate::db`].
//!
//! # Example
//!
//! ```rust,ignore
//! let store: Arc<dyn DocumentStore> = Arc::new(MemoryStore::new());
//!
//! let id = store.create("products", fields).await?;
//! let docs = store
//!     .query(&Query::collection("products").filter_eq("category", "puertas"))
//!     .await?;
//! ```

mod document;
mod firestore;
mod memory;

pub use document::{Document, FieldError, Fields, Value};
pub use firestore::FirestoreStore;
pub use memory::MemoryStore;

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur when talking to the document store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The store answered with a non-success status.
    #[error("store returned {status}: {message}")]
    Status { status: u16, message: String },

    /// The document to update does not exist.
    #[error("document not found: {collection}/{id}")]
    NotFound { collection: String, id: String },

    /// The store's response could not be understood.
    #[error("unexpected response: {0}")]
    Decode(String),
}

/// Sort direction of a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ascending,
    Descending,
}

/// Equality filter on a single field.
#[derive(Debug, Clone, PartialEq)]
pub struct Filter {
    pub field: String,
    pub value: Value,
}

/// Single-field ordering of a query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderBy {
    pub field: String,
    pub direction: Direction,
}

/// A collection query: equality filters combined with AND, optional ordering.
///
/// Documents lacking the ordering field are not returned, matching the
/// hosted store.
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    pub collection: String,
    pub filters: Vec<Filter>,
    pub order_by: Option<OrderBy>,
}

impl Query {
    /// Every document of a collection, in store order.
    #[must_use]
    pub fn collection(name: &str) -> Self {
        Self {
            collection: name.to_string(),
            filters: Vec::new(),
            order_by: None,
        }
    }

    /// Add an equality filter.
    #[must_use]
    pub fn filter_eq(mut self, field: &str, value: impl Into<Value>) -> Self {
        self.filters.push(Filter {
            field: field.to_string(),
            value: value.into(),
        });
        self
    }

    /// Order the results by a field.
    #[must_use]
    pub fn order_by(mut self, field: &str, direction: Direction) -> Self {
        self.order_by = Some(OrderBy {
            field: field.to_string(),
            direction,
        });
        self
    }
}

/// Partial change of an existing document.
///
/// Fields in `set` are written, fields in `remove` are deleted, everything
/// else is left untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Patch {
    pub set: Fields,
    pub remove: Vec<String>,
}

impl Patch {
    /// Returns `true` if the patch changes nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.set.is_empty() && self.remove.is_empty()
    }

    /// Every field path the patch touches.
    #[must_use]
    pub fn field_paths(&self) -> Vec<&str> {
        self.set
            .keys()
            .map(String::as_str)
            .chain(self.remove.iter().map(String::as_str))
            .collect()
    }
}

/// Collection-oriented access to a document store.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Run a query and return the matching documents.
    async fn query(&self, query: &Query) -> Result<Vec<Document>, StoreError>;

    /// Read a single document. Absent documents are `Ok(None)`.
    async fn get(&self, collection: &str, id: &str) -> Result<Option<Document>, StoreError>;

    /// Insert a document under a store-generated key and return the key.
    async fn create(&self, collection: &str, fields: Fields) -> Result<String, StoreError>;

    /// Apply a partial change to an existing document.
    ///
    /// Fails with [`StoreError::NotFound`] if the document does not exist.
    async fn update(&self, collection: &str, id: &str, patch: Patch) -> Result<(), StoreError>;

    /// Write a document under a fixed key, replacing it entirely if present.
    async fn set(&self, collection: &str, id: &str, fields: Fields) -> Result<(), StoreError>;

    /// Delete a document. Deleting an absent document succeeds.
    async fn delete(&self, collection: &str, id: &str) -> Result<(), StoreError>;
}
