//! The featured promotional offer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The single promotional offer shown on the home page.
///
/// There is at most one offer. Replacing it overwrites every field; removing
/// it leaves no offer at all, which is different from an inactive offer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeaturedOffer {
    pub title: String,
    pub description: String,
    pub image: String,
    pub original_price: Option<String>,
    pub discounted_price: String,
    /// Badge text, e.g. "30% OFF".
    pub discount: Option<String>,
    /// Free-text validity, e.g. "Hasta el 31 de marzo".
    pub valid_until: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// Payload for replacing the featured offer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewFeaturedOffer {
    pub title: String,
    pub description: String,
    pub image: String,
    #[serde(default)]
    pub original_price: Option<String>,
    pub discounted_price: String,
    #[serde(default)]
    pub discount: Option<String>,
    #[serde(default)]
    pub valid_until: Option<String>,
    #[serde(default)]
    pub is_active: bool,
}

impl NewFeaturedOffer {
    /// Attach the timestamp to produce the stored record.
    #[must_use]
    pub fn into_offer(self, created_at: DateTime<Utc>) -> FeaturedOffer {
        FeaturedOffer {
            title: self.title,
            description: self.description,
            image: self.image,
            original_price: self.original_price,
            discounted_price: self.discounted_price,
            discount: self.discount,
            valid_until: self.valid_until,
            is_active: self.is_active,
            created_at,
        }
    }
}

impl FeaturedOffer {
    /// Whether the offer should appear on the public home page.
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.is_active
    }
}
