//! Product repository.

use chrono::{DateTime, Utc};
use herreria_core::catalog::sort_newest_first;
use herreria_core::{Category, NewProduct, Product, ProductId, ProductUpdate};

use super::{RepositoryError, decode_all, patch_optional, patch_required};
use crate::store::{Document, DocumentStore, Fields, Patch, Query, Value};

/// Collection holding category products.
pub const COLLECTION: &str = "products";

/// Repository for the `products` collection.
pub struct ProductRepository<'a> {
    store: &'a dyn DocumentStore,
}

impl<'a> ProductRepository<'a> {
    /// Create a new product repository.
    #[must_use]
    pub const fn new(store: &'a dyn DocumentStore) -> Self {
        Self { store }
    }

    /// Every product of a category, newest first.
    ///
    /// Only the equality filter runs in the store; sorting happens here.
    /// Malformed documents are skipped.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Store` if the query fails.
    pub async fn list_by_category(
        &self,
        category: Category,
    ) -> Result<Vec<Product>, RepositoryError> {
        let query = Query::collection(COLLECTION).filter_eq("category", category.slug());
        let documents = self.store.query(&query).await?;

        let read_time = Utc::now();
        let mut products = decode_all(COLLECTION, &documents, |doc| {
            product_from_document(doc, read_time)
        });
        sort_newest_first(&mut products);
        Ok(products)
    }

    /// Insert a product, stamping its creation time.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Store` if the write fails.
    pub async fn create(&self, product: NewProduct) -> Result<Product, RepositoryError> {
        let created_at = Utc::now();
        let fields = product_fields(&product, created_at);
        let id = self.store.create(COLLECTION, fields).await?;
        Ok(product.into_product(ProductId::new(id), created_at))
    }

    /// Apply a partial update. The creation time is never touched.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Store` if the write fails, including when
    /// the product does not exist.
    pub async fn update(
        &self,
        id: &ProductId,
        update: ProductUpdate,
    ) -> Result<(), RepositoryError> {
        let patch = product_patch(update);
        if patch.is_empty() {
            return Ok(());
        }
        self.store.update(COLLECTION, id.as_str(), patch).await?;
        Ok(())
    }

    /// Delete a product. Deleting a missing product succeeds.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Store` if the delete fails.
    pub async fn delete(&self, id: &ProductId) -> Result<(), RepositoryError> {
        self.store.delete(COLLECTION, id.as_str()).await?;
        Ok(())
    }
}

/// Decode a product document. A missing `createdAt` reads as `read_time`.
fn product_from_document(
    doc: &Document,
    read_time: DateTime<Utc>,
) -> Result<Product, RepositoryError> {
    let category_slug = doc.string("category")?;
    let category = category_slug
        .parse::<Category>()
        .map_err(|e| RepositoryError::DataCorruption(e.to_string()))?;

    Ok(Product {
        id: ProductId::new(doc.id.clone()),
        name: doc.string("name")?,
        image: doc.string("image")?,
        category,
        subcategory: doc.string("subcategory")?,
        price: doc.opt_string("price")?,
        description: doc.opt_string("description")?,
        created_at: doc.opt_timestamp("createdAt")?.unwrap_or(read_time),
    })
}

fn product_fields(product: &NewProduct, created_at: DateTime<Utc>) -> Fields {
    let mut fields = Fields::new();
    fields.insert("name".to_string(), Value::from(product.name.as_str()));
    fields.insert("image".to_string(), Value::from(product.image.as_str()));
    fields.insert("category".to_string(), Value::from(product.category.slug()));
    fields.insert(
        "subcategory".to_string(),
        Value::from(product.subcategory.as_str()),
    );
    if let Some(price) = &product.price {
        fields.insert("price".to_string(), Value::from(price.as_str()));
    }
    if let Some(description) = &product.description {
        fields.insert("description".to_string(), Value::from(description.as_str()));
    }
    fields.insert("createdAt".to_string(), Value::from(created_at));
    fields
}

fn product_patch(update: ProductUpdate) -> Patch {
    let mut patch = Patch::default();
    patch_required(&mut patch, "name", update.name);
    patch_required(&mut patch, "image", update.image);
    patch_required(&mut patch, "category", update.category.map(Category::slug));
    patch_required(&mut patch, "subcategory", update.subcategory);
    patch_optional(&mut patch, "price", update.price);
    patch_optional(&mut patch, "description", update.description);
    patch
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::Duration;
    use herreria_core::FieldUpdate;

    use super::*;
    use crate::store::{MemoryStore, MockDocumentStore, StoreError};

    fn colonial() -> NewProduct {
        NewProduct {
            name: "Puerta Colonial".to_string(),
            image: "https://x/y.jpg".to_string(),
            category: Category::Puertas,
            subcategory: "Puertas Clásicas".to_string(),
            price: Some("$850".to_string()),
            description: None,
        }
    }

    fn raw(name: &str, category: &str, created_at: Option<DateTime<Utc>>) -> Fields {
        let mut fields = Fields::new();
        fields.insert("name".to_string(), Value::from(name));
        fields.insert("image".to_string(), Value::from("https://x/img.jpg"));
        fields.insert("category".to_string(), Value::from(category));
        fields.insert("subcategory".to_string(), Value::from("General"));
        if let Some(t) = created_at {
            fields.insert("createdAt".to_string(), Value::from(t));
        }
        fields
    }

    #[tokio::test]
    async fn test_create_then_list_round_trip() {
        let store = MemoryStore::new();
        let repo = ProductRepository::new(&store);

        let created = repo.create(colonial()).await.unwrap();
        let listed = repo.list_by_category(Category::Puertas).await.unwrap();

        assert_eq!(listed, vec![created.clone()]);
        assert_eq!(listed[0].price.as_deref(), Some("$850"));
        assert!(!created.id.as_str().is_empty());
    }

    #[tokio::test]
    async fn test_list_filters_by_category_and_sorts_newest_first() {
        let store = MemoryStore::new();
        let base = Utc::now() - Duration::hours(1);
        store.insert_raw(COLLECTION, "old", raw("Vieja", "puertas", Some(base))).await;
        store
            .insert_raw(
                COLLECTION,
                "gate",
                raw("Portón", "portones", Some(base + Duration::minutes(5))),
            )
            .await;
        store
            .insert_raw(
                COLLECTION,
                "new",
                raw("Nueva", "puertas", Some(base + Duration::minutes(10))),
            )
            .await;

        let repo = ProductRepository::new(&store);
        let listed = repo.list_by_category(Category::Puertas).await.unwrap();
        let ids: Vec<&str> = listed.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["new", "old"]);
    }

    #[tokio::test]
    async fn test_missing_created_at_reads_as_now() {
        let store = MemoryStore::new();
        store.insert_raw(COLLECTION, "legacy", raw("Sin fecha", "rejas", None)).await;

        let before = Utc::now();
        let listed = ProductRepository::new(&store)
            .list_by_category(Category::Rejas)
            .await
            .unwrap();
        assert_eq!(listed.len(), 1);
        assert!(listed[0].created_at >= before);
    }

    #[tokio::test]
    async fn test_malformed_documents_are_skipped() {
        let store = MemoryStore::new();
        let mut broken = raw("Rota", "rejas", None);
        broken.remove("image");
        store.insert_raw(COLLECTION, "broken", broken).await;
        store.insert_raw(COLLECTION, "ok", raw("Sana", "rejas", None)).await;

        let listed = ProductRepository::new(&store)
            .list_by_category(Category::Rejas)
            .await
            .unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id.as_str(), "ok");
    }

    #[tokio::test]
    async fn test_update_clears_optional_and_keeps_created_at() {
        let store = MemoryStore::new();
        let repo = ProductRepository::new(&store);
        let created = repo.create(colonial()).await.unwrap();

        repo.update(
            &created.id,
            ProductUpdate {
                name: FieldUpdate::SetTo("Puerta Colonial Doble".to_string()),
                price: FieldUpdate::SetTo(None),
                ..ProductUpdate::default()
            },
        )
        .await
        .unwrap();

        let listed = repo.list_by_category(Category::Puertas).await.unwrap();
        assert_eq!(listed[0].name, "Puerta Colonial Doble");
        assert_eq!(listed[0].price, None);
        assert_eq!(listed[0].created_at, created.created_at);
    }

    #[tokio::test]
    async fn test_update_missing_product_fails() {
        let store = MemoryStore::new();
        let result = ProductRepository::new(&store)
            .update(
                &ProductId::new("missing"),
                ProductUpdate {
                    name: FieldUpdate::SetTo("X".to_string()),
                    ..ProductUpdate::default()
                },
            )
            .await;
        assert!(matches!(
            result,
            Err(RepositoryError::Store(StoreError::NotFound { .. }))
        ));
    }

    #[tokio::test]
    async fn test_empty_update_makes_no_call() {
        let mut store = MockDocumentStore::new();
        store.expect_update().never();

        let result = ProductRepository::new(&store)
            .update(&ProductId::new("p1"), ProductUpdate::default())
            .await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_delete_twice_succeeds() {
        let store = MemoryStore::new();
        let repo = ProductRepository::new(&store);
        let created = repo.create(colonial()).await.unwrap();

        repo.delete(&created.id).await.unwrap();
        repo.delete(&created.id).await.unwrap();
        assert!(repo.list_by_category(Category::Puertas).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_query_failure_is_reported() {
        let mut store = MockDocumentStore::new();
        store.expect_query().times(1).returning(|_| {
            Err(StoreError::Status {
                status: 503,
                message: "unavailable".to_string(),
            })
        });

        let result = ProductRepository::new(&store)
            .list_by_category(Category::Puertas)
            .await;
        assert!(matches!(result, Err(RepositoryError::Store(_))));
    }
}
