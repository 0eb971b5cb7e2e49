//! Best-seller repository.

use chrono::{DateTime, Utc};
use herreria_core::catalog::sort_by_rank;
use herreria_core::{BestSeller, BestSellerId, BestSellerUpdate, NewBestSeller, Rating};

use super::{RepositoryError, decode_all, patch_required};
use crate::store::{Direction, Document, DocumentStore, Fields, Patch, Query, Value};

/// Collection holding best-seller entries.
pub const COLLECTION: &str = "best-sellers";

/// Repository for the `best-sellers` collection.
pub struct BestSellerRepository<'a> {
    store: &'a dyn DocumentStore,
}

impl<'a> BestSellerRepository<'a> {
    /// Create a new best-seller repository.
    #[must_use]
    pub const fn new(store: &'a dyn DocumentStore) -> Self {
        Self { store }
    }

    /// Active entries ordered by rank.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Store` if the query fails.
    pub async fn list_active(&self) -> Result<Vec<BestSeller>, RepositoryError> {
        self.list(
            Query::collection(COLLECTION)
                .filter_eq("isActive", true)
                .order_by("order", Direction::Ascending),
        )
        .await
    }

    /// Every entry, active or not, ordered by rank.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Store` if the query fails.
    pub async fn list_all(&self) -> Result<Vec<BestSeller>, RepositoryError> {
        self.list(Query::collection(COLLECTION).order_by("order", Direction::Ascending))
            .await
    }

    async fn list(&self, query: Query) -> Result<Vec<BestSeller>, RepositoryError> {
        let documents = self.store.query(&query).await?;
        let read_time = Utc::now();
        let mut entries = decode_all(COLLECTION, &documents, |doc| {
            best_seller_from_document(doc, read_time)
        });
        // Ties keep store order
        sort_by_rank(&mut entries);
        Ok(entries)
    }

    /// Insert an entry, stamping its creation time.
    ///
    /// Rank and rating are stored as given.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Store` if the write fails.
    pub async fn create(&self, entry: NewBestSeller) -> Result<BestSeller, RepositoryError> {
        let created_at = Utc::now();
        let fields = best_seller_fields(&entry, created_at);
        let id = self.store.create(COLLECTION, fields).await?;
        Ok(entry.into_best_seller(BestSellerId::new(id), created_at))
    }

    /// Apply a partial update.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Store` if the write fails, including when
    /// the entry does not exist.
    pub async fn update(
        &self,
        id: &BestSellerId,
        update: BestSellerUpdate,
    ) -> Result<(), RepositoryError> {
        let patch = best_seller_patch(update);
        if patch.is_empty() {
            return Ok(());
        }
        self.store.update(COLLECTION, id.as_str(), patch).await?;
        Ok(())
    }

    /// Delete an entry. Deleting a missing entry succeeds.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Store` if the delete fails.
    pub async fn delete(&self, id: &BestSellerId) -> Result<(), RepositoryError> {
        self.store.delete(COLLECTION, id.as_str()).await?;
        Ok(())
    }
}

fn best_seller_from_document(
    doc: &Document,
    read_time: DateTime<Utc>,
) -> Result<BestSeller, RepositoryError> {
    let stored_rating = doc.integer("rating")?;
    let rating = Rating::new(stored_rating).unwrap_or_else(|e| {
        tracing::warn!(id = %doc.id, error = %e, "Clamping stored rating");
        Rating::clamped(stored_rating)
    });

    Ok(BestSeller {
        id: BestSellerId::new(doc.id.clone()),
        name: doc.string("name")?,
        image: doc.string("image")?,
        price: doc.string("price")?,
        rating,
        category: doc.string("category")?,
        is_active: doc.bool("isActive")?,
        order: doc.integer("order")?,
        created_at: doc.opt_timestamp("createdAt")?.unwrap_or(read_time),
    })
}

fn best_seller_fields(entry: &NewBestSeller, created_at: DateTime<Utc>) -> Fields {
    let mut fields = Fields::new();
    fields.insert("name".to_string(), Value::from(entry.name.as_str()));
    fields.insert("image".to_string(), Value::from(entry.image.as_str()));
    fields.insert("price".to_string(), Value::from(entry.price.as_str()));
    fields.insert("rating".to_string(), Value::from(i64::from(entry.rating)));
    fields.insert("category".to_string(), Value::from(entry.category.as_str()));
    fields.insert("isActive".to_string(), Value::from(entry.is_active));
    fields.insert("order".to_string(), Value::from(entry.order));
    fields.insert("createdAt".to_string(), Value::from(created_at));
    fields
}

fn best_seller_patch(update: BestSellerUpdate) -> Patch {
    let mut patch = Patch::default();
    patch_required(&mut patch, "name", update.name);
    patch_required(&mut patch, "image", update.image);
    patch_required(&mut patch, "price", update.price);
    patch_required(&mut patch, "rating", update.rating.map(i64::from));
    patch_required(&mut patch, "category", update.category);
    patch_required(&mut patch, "isActive", update.is_active);
    patch_required(&mut patch, "order", update.order);
    patch
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use herreria_core::FieldUpdate;

    use super::*;
    use crate::store::MemoryStore;

    fn entry(name: &str, order: i64, is_active: bool) -> NewBestSeller {
        NewBestSeller {
            name: name.to_string(),
            image: format!("https://img/{name}.jpg"),
            price: "$1200".to_string(),
            rating: Rating::default(),
            category: "Portones".to_string(),
            is_active,
            order,
        }
    }

    fn names(entries: &[BestSeller]) -> Vec<&str> {
        entries.iter().map(|e| e.name.as_str()).collect()
    }

    #[tokio::test]
    async fn test_list_active_filters_and_orders() {
        let store = MemoryStore::new();
        let repo = BestSellerRepository::new(&store);
        repo.create(entry("tercero", 3, true)).await.unwrap();
        repo.create(entry("oculto", 1, false)).await.unwrap();
        repo.create(entry("primero", 1, true)).await.unwrap();
        repo.create(entry("segundo", 2, true)).await.unwrap();

        let active = repo.list_active().await.unwrap();
        assert_eq!(names(&active), ["primero", "segundo", "tercero"]);

        let all = repo.list_all().await.unwrap();
        assert_eq!(all.len(), 4);
    }

    #[tokio::test]
    async fn test_duplicate_ranks_are_all_returned() {
        let store = MemoryStore::new();
        let repo = BestSellerRepository::new(&store);
        repo.create(entry("a", 1, true)).await.unwrap();
        repo.create(entry("b", 1, true)).await.unwrap();

        let active = repo.list_active().await.unwrap();
        assert_eq!(active.len(), 2);
    }

    #[tokio::test]
    async fn test_out_of_range_rating_is_clamped() {
        let store = MemoryStore::new();
        let mut fields = best_seller_fields(&entry("raro", 1, true), Utc::now());
        fields.insert("rating".to_string(), Value::Integer(9));
        store.insert_raw(COLLECTION, "raro", fields).await;

        let active = BestSellerRepository::new(&store).list_active().await.unwrap();
        assert_eq!(active[0].rating.get(), 5);
    }

    #[tokio::test]
    async fn test_update_deactivates_entry() {
        let store = MemoryStore::new();
        let repo = BestSellerRepository::new(&store);
        let created = repo.create(entry("portón", 1, true)).await.unwrap();

        repo.update(
            &created.id,
            BestSellerUpdate {
                is_active: FieldUpdate::SetTo(false),
                ..BestSellerUpdate::default()
            },
        )
        .await
        .unwrap();

        assert!(repo.list_active().await.unwrap().is_empty());
        let all = repo.list_all().await.unwrap();
        assert!(!all[0].is_active);
        assert_eq!(all[0].name, "portón");
    }

    #[tokio::test]
    async fn test_non_positive_rank_is_stored_as_given() {
        let store = MemoryStore::new();
        let repo = BestSellerRepository::new(&store);
        repo.create(entry("cero", 0, true)).await.unwrap();
        assert_eq!(repo.list_active().await.unwrap()[0].order, 0);
    }
}
