//! Firestore REST API client.
//!
//! Uses `reqwest` 0.13 against the v1 REST surface:
//!
//! ```text
//! POST   {documents}:runQuery                 structured query
//! GET    {documents}/{collection}/{id}        read (404 = absent)
//! POST   {documents}/{collection}             create with generated id
//! PATCH  {documents}/{collection}/{id}?updateMask.fieldPaths=..&currentDocument.exists=true
//! PATCH  {documents}/{collection}/{id}        overwrite
//! DELETE {documents}/{collection}/{id}
//! ```
//!
//! Field values travel in Firestore's typed JSON encoding
//! (`{"stringValue": "..."}`, `{"integerValue": "42"}`, ...).

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use reqwest::{Method, RequestBuilder, StatusCode};
use secrecy::ExposeSecret;
use serde::Deserialize;
use serde_json::{Map, Value as Json, json};
use tracing::{debug, instrument};

use super::{Direction, Document, DocumentStore, Fields, Patch, Query, StoreError, Value};
use crate::config::FirestoreConfig;

const DEFAULT_BASE_URL: &str = "https://firestore.googleapis.com/v1";

/// Client for a Firestore database.
#[derive(Clone)]
pub struct FirestoreStore {
    inner: Arc<FirestoreStoreInner>,
}

struct FirestoreStoreInner {
    client: reqwest::Client,
    documents_url: String,
    api_key: Option<String>,
    access_token: Option<String>,
}

impl FirestoreStore {
    /// Create a new client for the configured project and database.
    #[must_use]
    pub fn new(config: &FirestoreConfig) -> Self {
        let base = config
            .base_url
            .as_deref()
            .unwrap_or(DEFAULT_BASE_URL)
            .trim_end_matches('/');
        let documents_url = format!(
            "{base}/projects/{}/databases/{}/documents",
            config.project_id, config.database
        );

        Self {
            inner: Arc::new(FirestoreStoreInner {
                client: reqwest::Client::new(),
                documents_url,
                api_key: config
                    .api_key
                    .as_ref()
                    .map(|key| key.expose_secret().to_string()),
                access_token: config
                    .access_token
                    .as_ref()
                    .map(|token| token.expose_secret().to_string()),
            }),
        }
    }

    /// URL of one document. Both segments are percent-encoded so an id can
    /// never address another path.
    fn document_url(&self, collection: &str, id: &str) -> String {
        format!(
            "{}/{}/{}",
            self.inner.documents_url,
            urlencoding::encode(collection),
            urlencoding::encode(id)
        )
    }

    fn request(&self, method: Method, url: &str) -> RequestBuilder {
        let mut request = self.inner.client.request(method, url);
        if let Some(key) = &self.inner.api_key {
            request = request.query(&[("key", key)]);
        }
        if let Some(token) = &self.inner.access_token {
            request = request.bearer_auth(token);
        }
        request
    }

    /// Send a request and return the response body for success statuses.
    ///
    /// `Ok(None)` means the store answered 404.
    async fn send(&self, request: RequestBuilder) -> Result<Option<String>, StoreError> {
        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        if !status.is_success() {
            tracing::error!(
                status = %status,
                body = %body.chars().take(500).collect::<String>(),
                "Firestore returned non-success status"
            );
            return Err(StoreError::Status {
                status: status.as_u16(),
                message: body.chars().take(200).collect(),
            });
        }

        Ok(Some(body))
    }
}

#[async_trait]
impl DocumentStore for FirestoreStore {
    #[instrument(skip(self), fields(collection = %query.collection))]
    async fn query(&self, query: &Query) -> Result<Vec<Document>, StoreError> {
        let url = format!("{}:runQuery", self.inner.documents_url);
        let body = json!({ "structuredQuery": structured_query(query) });

        let text = self
            .send(self.request(Method::POST, &url).json(&body))
            .await?
            .ok_or_else(|| StoreError::Decode("runQuery answered 404".to_string()))?;

        let items: Vec<RunQueryItem> =
            serde_json::from_str(&text).map_err(|e| StoreError::Decode(e.to_string()))?;

        let documents: Vec<Document> = items
            .into_iter()
            .filter_map(|item| item.document)
            .map(WireDocument::into_document)
            .collect();
        debug!(count = documents.len(), "query returned documents");
        Ok(documents)
    }

    #[instrument(skip(self))]
    async fn get(&self, collection: &str, id: &str) -> Result<Option<Document>, StoreError> {
        let url = self.document_url(collection, id);
        let Some(text) = self.send(self.request(Method::GET, &url)).await? else {
            return Ok(None);
        };
        let wire: WireDocument =
            serde_json::from_str(&text).map_err(|e| StoreError::Decode(e.to_string()))?;
        Ok(Some(wire.into_document()))
    }

    #[instrument(skip(self, fields))]
    async fn create(&self, collection: &str, fields: Fields) -> Result<String, StoreError> {
        let url = format!("{}/{collection}", self.inner.documents_url);
        let body = json!({ "fields": encode_fields(&fields) });

        let text = self
            .send(self.request(Method::POST, &url).json(&body))
            .await?
            .ok_or_else(|| StoreError::Decode(format!("create in {collection} answered 404")))?;
        let wire: WireDocument =
            serde_json::from_str(&text).map_err(|e| StoreError::Decode(e.to_string()))?;
        Ok(wire.into_document().id)
    }

    #[instrument(skip(self, patch))]
    async fn update(&self, collection: &str, id: &str, patch: Patch) -> Result<(), StoreError> {
        let url = self.document_url(collection, id);
        let mut params: Vec<(&str, &str)> = patch
            .field_paths()
            .into_iter()
            .map(|path| ("updateMask.fieldPaths", path))
            .collect();
        params.push(("currentDocument.exists", "true"));

        // Masked fields absent from the body are deleted
        let body = json!({ "fields": encode_fields(&patch.set) });
        let request = self.request(Method::PATCH, &url).query(&params).json(&body);

        match self.send(request).await? {
            Some(_) => Ok(()),
            None => Err(StoreError::NotFound {
                collection: collection.to_string(),
                id: id.to_string(),
            }),
        }
    }

    #[instrument(skip(self, fields))]
    async fn set(&self, collection: &str, id: &str, fields: Fields) -> Result<(), StoreError> {
        let url = self.document_url(collection, id);
        let body = json!({ "fields": encode_fields(&fields) });
        self.send(self.request(Method::PATCH, &url).json(&body))
            .await?
            .ok_or_else(|| StoreError::Decode(format!("set {collection}/{id} answered 404")))?;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, collection: &str, id: &str) -> Result<(), StoreError> {
        let url = self.document_url(collection, id);
        // Deleting a missing document is not an error
        self.send(self.request(Method::DELETE, &url)).await?;
        Ok(())
    }
}

// =============================================================================
// Wire Types
// =============================================================================

#[derive(Deserialize)]
struct RunQueryItem {
    document: Option<WireDocument>,
}

#[derive(Deserialize)]
struct WireDocument {
    /// Full resource name, ending in `/{collection}/{id}`.
    name: String,
    #[serde(default)]
    fields: Map<String, Json>,
}

impl WireDocument {
    fn into_document(self) -> Document {
        let id = self
            .name
            .rsplit('/')
            .next()
            .unwrap_or_default()
            .to_string();
        Document::new(id, decode_fields(&self.fields))
    }
}

// =============================================================================
// Query and Value Encoding
// =============================================================================

fn structured_query(query: &Query) -> Json {
    let mut structured = Map::new();
    structured.insert(
        "from".to_string(),
        json!([{ "collectionId": query.collection }]),
    );

    let mut filters: Vec<Json> = query
        .filters
        .iter()
        .map(|filter| {
            json!({
                "fieldFilter": {
                    "field": { "fieldPath": filter.field },
                    "op": "EQUAL",
                    "value": encode_value(&filter.value),
                }
            })
        })
        .collect();

    if filters.len() == 1 {
        structured.insert("where".to_string(), filters.remove(0));
    } else if !filters.is_empty() {
        structured.insert(
            "where".to_string(),
            json!({ "compositeFilter": { "op": "AND", "filters": filters } }),
        );
    }

    if let Some(order) = &query.order_by {
        let direction = match order.direction {
            Direction::Ascending => "ASCENDING",
            Direction::Descending => "DESCENDING",
        };
        structured.insert(
            "orderBy".to_string(),
            json!([{ "field": { "fieldPath": order.field }, "direction": direction }]),
        );
    }

    Json::Object(structured)
}

fn encode_fields(fields: &Fields) -> Json {
    Json::Object(
        fields
            .iter()
            .map(|(name, value)| (name.clone(), encode_value(value)))
            .collect(),
    )
}

fn encode_value(value: &Value) -> Json {
    match value {
        Value::Null => json!({ "nullValue": null }),
        Value::Bool(b) => json!({ "booleanValue": b }),
        Value::Integer(n) => json!({ "integerValue": n.to_string() }),
        Value::Double(d) => json!({ "doubleValue": d }),
        Value::String(s) => json!({ "stringValue": s }),
        Value::Timestamp(t) => {
            json!({ "timestampValue": t.to_rfc3339_opts(SecondsFormat::Micros, true) })
        }
    }
}

fn decode_fields(fields: &Map<String, Json>) -> Fields {
    fields
        .iter()
        .filter_map(|(name, raw)| {
            let value = decode_value(raw);
            if value.is_none() {
                debug!(field = %name, "ignoring field of unsupported type");
            }
            value.map(|v| (name.clone(), v))
        })
        .collect()
}

fn decode_value(raw: &Json) -> Option<Value> {
    let object = raw.as_object()?;
    let (kind, inner) = object.iter().next()?;
    match kind.as_str() {
        "nullValue" => Some(Value::Null),
        "booleanValue" => inner.as_bool().map(Value::Bool),
        "integerValue" => match inner {
            Json::String(s) => s.parse().ok().map(Value::Integer),
            other => other.as_i64().map(Value::Integer),
        },
        "doubleValue" => inner.as_f64().map(Value::Double),
        "stringValue" => inner.as_str().map(|s| Value::String(s.to_string())),
        "timestampValue" => inner
            .as_str()
            .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
            .map(|t| Value::Timestamp(t.with_timezone(&Utc))),
        _ => None,
    }
}
