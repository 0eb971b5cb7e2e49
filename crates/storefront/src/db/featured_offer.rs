//! Featured offer repository (singleton document).

use chrono::{DateTime, Utc};
use herreria_core::{FeaturedOffer, NewFeaturedOffer};

use super::RepositoryError;
use crate::store::{Document, DocumentStore, Fields, Value};

/// Collection holding site settings.
pub const COLLECTION: &str = "settings";

/// Fixed key of the offer document.
pub const DOCUMENT_ID: &str = "featured-offer";

/// Repository for the `settings/featured-offer` document.
pub struct FeaturedOfferRepository<'a> {
    store: &'a dyn DocumentStore,
}

impl<'a> FeaturedOfferRepository<'a> {
    /// Create a new featured offer repository.
    #[must_use]
    pub const fn new(store: &'a dyn DocumentStore) -> Self {
        Self { store }
    }

    /// Read the offer, if one exists.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Store` if the read fails.
    /// Returns `RepositoryError::DataCorruption` if the document is malformed.
    pub async fn get(&self) -> Result<Option<FeaturedOffer>, RepositoryError> {
        let Some(doc) = self.store.get(COLLECTION, DOCUMENT_ID).await? else {
            return Ok(None);
        };
        offer_from_document(&doc, Utc::now()).map(Some)
    }

    /// Replace the offer entirely. Last write wins.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Store` if the write fails.
    pub async fn set(&self, offer: NewFeaturedOffer) -> Result<FeaturedOffer, RepositoryError> {
        let created_at = Utc::now();
        self.store
            .set(COLLECTION, DOCUMENT_ID, offer_fields(&offer, created_at))
            .await?;
        Ok(offer.into_offer(created_at))
    }

    /// Delete the offer document.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Store` if the delete fails.
    pub async fn remove(&self) -> Result<(), RepositoryError> {
        self.store.delete(COLLECTION, DOCUMENT_ID).await?;
        Ok(())
    }
}

fn offer_from_document(
    doc: &Document,
    read_time: DateTime<Utc>,
) -> Result<FeaturedOffer, RepositoryError> {
    Ok(FeaturedOffer {
        title: doc.string("title")?,
        description: doc.string("description")?,
        image: doc.string("image")?,
        original_price: doc.opt_string("originalPrice")?,
        discounted_price: doc.string("discountedPrice")?,
        discount: doc.opt_string("discount")?,
        valid_until: doc.opt_string("validUntil")?,
        is_active: doc.bool("isActive")?,
        created_at: doc.opt_timestamp("createdAt")?.unwrap_or(read_time),
    })
}

fn offer_fields(offer: &NewFeaturedOffer, created_at: DateTime<Utc>) -> Fields {
    let mut fields = Fields::new();
    fields.insert("title".to_string(), Value::from(offer.title.as_str()));
    fields.insert(
        "description".to_string(),
        Value::from(offer.description.as_str()),
    );
    fields.insert("image".to_string(), Value::from(offer.image.as_str()));
    if let Some(price) = &offer.original_price {
        fields.insert("originalPrice".to_string(), Value::from(price.as_str()));
    }
    fields.insert(
        "discountedPrice".to_string(),
        Value::from(offer.discounted_price.as_str()),
    );
    if let Some(discount) = &offer.discount {
        fields.insert("discount".to_string(), Value::from(discount.as_str()));
    }
    if let Some(valid_until) = &offer.valid_until {
        fields.insert("validUntil".to_string(), Value::from(valid_until.as_str()));
    }
    fields.insert("isActive".to_string(), Value::from(offer.is_active));
    fields.insert("createdAt".to_string(), Value::from(created_at));
    fields
}
