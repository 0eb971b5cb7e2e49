//! Best-seller showcase entries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{BestSellerId, FieldUpdate, Rating};

/// An entry of the home page best-seller grid.
///
/// Independent from [`crate::Product`]: the category here is a free-text
/// label and the entry is curated by hand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BestSeller {
    pub id: BestSellerId,
    pub name: String,
    pub image: String,
    pub price: String,
    pub rating: Rating,
    pub category: String,
    /// Only active entries are shown publicly.
    pub is_active: bool,
    /// Rank in the grid, ascending. Not unique.
    pub order: i64,
    pub created_at: DateTime<Utc>,
}

/// Payload for creating a best-seller entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBestSeller {
    pub name: String,
    pub image: String,
    pub price: String,
    #[serde(default)]
    pub rating: Rating,
    pub category: String,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default = "default_order")]
    pub order: i64,
}

const fn default_active() -> bool {
    true
}

const fn default_order() -> i64 {
    1
}

/// Partial update of a best-seller entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BestSellerUpdate {
    #[serde(default, skip_serializing_if = "FieldUpdate::is_unchanged")]
    pub name: FieldUpdate<String>,
    #[serde(default, skip_serializing_if = "FieldUpdate::is_unchanged")]
    pub image: FieldUpdate<String>,
    #[serde(default, skip_serializing_if = "FieldUpdate::is_unchanged")]
    pub price: FieldUpdate<String>,
    #[serde(default, skip_serializing_if = "FieldUpdate::is_unchanged")]
    pub rating: FieldUpdate<Rating>,
    #[serde(default, skip_serializing_if = "FieldUpdate::is_unchanged")]
    pub category: FieldUpdate<String>,
    #[serde(default, skip_serializing_if = "FieldUpdate::is_unchanged")]
    pub is_active: FieldUpdate<bool>,
    #[serde(default, skip_serializing_if = "FieldUpdate::is_unchanged")]
    pub order: FieldUpdate<i64>,
}

impl BestSellerUpdate {
    /// Returns `true` if no field would change.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_unchanged()
            && self.image.is_unchanged()
            && self.price.is_unchanged()
            && self.rating.is_unchanged()
            && self.category.is_unchanged()
            && self.is_active.is_unchanged()
            && self.order.is_unchanged()
    }
}

impl NewBestSeller {
    /// Attach identity and timestamp to produce the stored record.
    #[must_use]
    pub fn into_best_seller(self, id: BestSellerId, created_at: DateTime<Utc>) -> BestSeller {
        BestSeller {
            id,
            name: self.name,
            image: self.image,
            price: self.price,
            rating: self.rating,
            category: self.category,
            is_active: self.is_active,
            order: self.order,
            created_at,
        }
    }
}
