//! Record-shaped access to the catalog collections.
//!
//! # Collections
//!
//! - `products` - Category page products
//! - `best-sellers` - Home page best-seller grid
//! - `settings/featured-offer` - Singleton promotional offer
//!
//! Repositories map between [`Document`]s and the entities of
//! `herreria_core`, and report every failure as a [`RepositoryError`]. Turning
//! failures into empty results is the job of [`crate::services::CatalogService`].

pub mod best_sellers;
pub mod featured_offer;
pub mod products;

pub use best_sellers::BestSellerRepository;
pub use featured_offer::FeaturedOfferRepository;
pub use products::ProductRepository;

use herreria_core::FieldUpdate;
use thiserror::Error;

use crate::store::{Document, FieldError, Patch, StoreError, Value};

/// Errors that can occur in repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The document store failed.
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// A stored document does not have the expected shape.
    #[error("data corruption: {0}")]
    DataCorruption(String),
}

impl From<FieldError> for RepositoryError {
    fn from(err: FieldError) -> Self {
        Self::DataCorruption(err.to_string())
    }
}

/// Decode every document, skipping the ones that do not decode.
fn decode_all<T>(
    collection: &str,
    documents: &[Document],
    decode: impl Fn(&Document) -> Result<T, RepositoryError>,
) -> Vec<T> {
    documents
        .iter()
        .filter_map(|doc| match decode(doc) {
            Ok(record) => Some(record),
            Err(e) => {
                tracing::warn!(
                    collection,
                    id = %doc.id,
                    error = %e,
                    "Skipping malformed document"
                );
                None
            }
        })
        .collect()
}

/// Add a required field change to a patch.
fn patch_required<T: Into<Value>>(patch: &mut Patch, field: &str, update: FieldUpdate<T>) {
    if let FieldUpdate::SetTo(value) = update {
        patch.set.insert(field.to_string(), value.into());
    }
}

/// Add an optional field change to a patch; `SetTo(None)` removes the field.
fn patch_optional<T: Into<Value>>(patch: &mut Patch, field: &str, update: FieldUpdate<Option<T>>) {
    match update {
        FieldUpdate::Unchanged => {}
        FieldUpdate::SetTo(Some(value)) => {
            patch.set.insert(field.to_string(), value.into());
        }
        FieldUpdate::SetTo(None) => patch.remove.push(field.to_string()),
    }
}
