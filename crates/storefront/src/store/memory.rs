//! In-process document store.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{Direction, Document, DocumentStore, Fields, Patch, Query, StoreError};

type Collection = Vec<(String, Fields)>;

/// Document store held in memory.
///
/// Collections keep insertion order, which is the "store order" results come
/// back in when a query has no ordering or when ordered values tie. Cloning
/// shares the same data.
#[derive(Clone, Default)]
pub struct MemoryStore {
    collections: Arc<RwLock<HashMap<String, Collection>>>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of documents in a collection.
    pub async fn count(&self, collection: &str) -> usize {
        self.collections
            .read()
            .await
            .get(collection)
            .map_or(0, Vec::len)
    }

    /// Insert a document under a chosen key, bypassing key generation.
    ///
    /// Useful to load fixtures with exact field contents.
    pub async fn insert_raw(&self, collection: &str, id: &str, fields: Fields) {
        let mut collections = self.collections.write().await;
        let docs = collections.entry(collection.to_string()).or_default();
        match docs.iter_mut().find(|(key, _)| key == id) {
            Some((_, existing)) => *existing = fields,
            None => docs.push((id.to_string(), fields)),
        }
    }
}

fn generate_id() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}

fn matches(fields: &Fields, query: &Query) -> bool {
    query
        .filters
        .iter()
        .all(|filter| fields.get(&filter.field) == Some(&filter.value))
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn query(&self, query: &Query) -> Result<Vec<Document>, StoreError> {
        let collections = self.collections.read().await;
        let Some(docs) = collections.get(&query.collection) else {
            return Ok(Vec::new());
        };

        let mut results: Vec<Document> = docs
            .iter()
            .filter(|(_, fields)| matches(fields, query))
            .filter(|(_, fields)| {
                query
                    .order_by
                    .as_ref()
                    .is_none_or(|order| fields.contains_key(&order.field))
            })
            .map(|(id, fields)| Document::new(id.clone(), fields.clone()))
            .collect();

        if let Some(order) = &query.order_by {
            results.sort_by(|a, b| {
                let (Some(a), Some(b)) = (a.fields.get(&order.field), b.fields.get(&order.field))
                else {
                    return std::cmp::Ordering::Equal;
                };
                match order.direction {
                    Direction::Ascending => a.total_cmp(b),
                    Direction::Descending => b.total_cmp(a),
                }
            });
        }

        Ok(results)
    }

    async fn get(&self, collection: &str, id: &str) -> Result<Option<Document>, StoreError> {
        let collections = self.collections.read().await;
        Ok(collections.get(collection).and_then(|docs| {
            docs.iter()
                .find(|(key, _)| key == id)
                .map(|(key, fields)| Document::new(key.clone(), fields.clone()))
        }))
    }

    async fn create(&self, collection: &str, fields: Fields) -> Result<String, StoreError> {
        let id = generate_id();
        self.collections
            .write()
            .await
            .entry(collection.to_string())
            .or_default()
            .push((id.clone(), fields));
        Ok(id)
    }

    async fn update(&self, collection: &str, id: &str, patch: Patch) -> Result<(), StoreError> {
        let mut collections = self.collections.write().await;
        let fields = collections
            .get_mut(collection)
            .and_then(|docs| docs.iter_mut().find(|(key, _)| key == id))
            .map(|(_, fields)| fields)
            .ok_or_else(|| StoreError::NotFound {
                collection: collection.to_string(),
                id: id.to_string(),
            })?;

        for field in &patch.remove {
            fields.remove(field);
        }
        fields.extend(patch.set);
        Ok(())
    }

    async fn set(&self, collection: &str, id: &str, fields: Fields) -> Result<(), StoreError> {
        self.insert_raw(collection, id, fields).await;
        Ok(())
    }

    async fn delete(&self, collection: &str, id: &str) -> Result<(), StoreError> {
        if let Some(docs) = self.collections.write().await.get_mut(collection) {
            docs.retain(|(key, _)| key != id);
        }
        Ok(())
    }
}
