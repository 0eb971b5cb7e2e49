//! Catalog products.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{Category, FieldUpdate, ProductId};

/// A product listed on a category page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// Image URL.
    pub image: String,
    pub category: Category,
    /// Free-text label used to group products within a category page.
    pub subcategory: String,
    /// Display price, free text (e.g. "$850", "Consultar").
    pub price: Option<String>,
    pub description: Option<String>,
    /// Set once at insert time.
    pub created_at: DateTime<Utc>,
}

/// Payload for creating a product.
///
/// Identity and creation timestamp are assigned by the data access layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub name: String,
    pub image: String,
    pub category: Category,
    pub subcategory: String,
    #[serde(default)]
    pub price: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Partial update of a product.
///
/// The creation timestamp is not part of the update and can never change.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductUpdate {
    #[serde(default, skip_serializing_if = "FieldUpdate::is_unchanged")]
    pub name: FieldUpdate<String>,
    #[serde(default, skip_serializing_if = "FieldUpdate::is_unchanged")]
    pub image: FieldUpdate<String>,
    #[serde(default, skip_serializing_if = "FieldUpdate::is_unchanged")]
    pub category: FieldUpdate<Category>,
    #[serde(default, skip_serializing_if = "FieldUpdate::is_unchanged")]
    pub subcategory: FieldUpdate<String>,
    #[serde(default, skip_serializing_if = "FieldUpdate::is_unchanged")]
    pub price: FieldUpdate<Option<String>>,
    #[serde(default, skip_serializing_if = "FieldUpdate::is_unchanged")]
    pub description: FieldUpdate<Option<String>>,
}

impl ProductUpdate {
    /// Returns `true` if no field would change.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_unchanged()
            && self.image.is_unchanged()
            && self.category.is_unchanged()
            && self.subcategory.is_unchanged()
            && self.price.is_unchanged()
            && self.description.is_unchanged()
    }
}

impl Product {
    /// Messaging link that opens an inquiry about this product.
    #[must_use]
    pub fn inquiry_url(&self) -> String {
        crate::contact::inquiry_url(&self.name)
    }
}

impl NewProduct {
    /// Attach identity and timestamp to produce the stored record.
    #[must_use]
    pub fn into_product(self, id: ProductId, created_at: DateTime<Utc>) -> Product {
        Product {
            id,
            name: self.name,
            image: self.image,
            category: self.category,
            subcategory: self.subcategory,
            price: self.price,
            description: self.description,
            created_at,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn product() -> Product {
        NewProduct {
            name: "Puerta Colonial".to_string(),
            image: "https://x/y.jpg".to_string(),
            category: Category::Puertas,
            subcategory: "Puertas Clásicas".to_string(),
            price: Some("$850".to_string()),
            description: None,
        }
        .into_product(ProductId::new("p1"), DateTime::<Utc>::UNIX_EPOCH)
    }

    #[test]
    fn test_default_update_is_empty() {
        assert!(ProductUpdate::default().is_empty());
    }

    #[test]
    fn test_product_json_is_camel_case() {
        let json = serde_json::to_value(product()).unwrap();
        assert!(json.get("createdAt").is_some());
        assert_eq!(json["category"], "puertas");
    }
}
