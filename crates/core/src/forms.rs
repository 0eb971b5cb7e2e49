//! Editor forms and their client-side validation.
//!
//! Forms hold raw editor input. Validation runs before any network call: a
//! form that fails validation never reaches the data access layer. Valid
//! forms convert into the creation payloads or tagged updates of [`crate::models`].
//!
//! Text inputs are stored trimmed. Blank optional inputs become `None`, and on
//! edit they become `SetTo(None)` so clearing a field removes it.

use serde::{Deserialize, Serialize};

use crate::models::{
    BestSeller, BestSellerUpdate, FeaturedOffer, NewBestSeller, NewFeaturedOffer, NewProduct,
    Product, ProductUpdate,
};
use crate::types::{Category, FieldUpdate, Rating};

/// Message shown when required inputs are blank.
pub const MISSING_FIELDS_MESSAGE: &str = "Por favor completa todos los campos obligatorios";

/// Message shown when the rank is not a positive integer.
pub const INVALID_ORDER_MESSAGE: &str = "El orden debe ser un número positivo";

/// Reasons a form cannot be submitted.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// One or more required inputs are blank after trimming.
    #[error("missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),
    /// The best-seller rank is below 1.
    #[error("order must be a positive integer (got {0})")]
    InvalidOrder(i64),
}

impl ValidationError {
    /// User-facing message for the editor.
    #[must_use]
    pub const fn user_message(&self) -> &'static str {
        match self {
            Self::MissingFields(_) => MISSING_FIELDS_MESSAGE,
            Self::InvalidOrder(_) => INVALID_ORDER_MESSAGE,
        }
    }
}

fn require(fields: &[(&'static str, &str)]) -> Result<(), ValidationError> {
    let missing: Vec<&'static str> = fields
        .iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| *name)
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::MissingFields(missing))
    }
}

fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn trimmed(value: &str) -> String {
    value.trim().to_string()
}

// =============================================================================
// Product
// =============================================================================

/// Add/edit form of a category page.
///
/// The category is not an input: it is taken from the page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductForm {
    pub name: String,
    pub image: String,
    pub subcategory: String,
    pub price: String,
    pub description: String,
}

impl ProductForm {
    /// Check the required inputs (name, image, subcategory).
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingFields`] listing the blank inputs.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require(&[
            ("name", self.name.as_str()),
            ("image", self.image.as_str()),
            ("subcategory", self.subcategory.as_str()),
        ])
    }

    /// Build the creation payload for a product of `category`.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if the form is incomplete.
    pub fn to_new_product(&self, category: Category) -> Result<NewProduct, ValidationError> {
        self.validate()?;
        Ok(NewProduct {
            name: trimmed(&self.name),
            image: trimmed(&self.image),
            category,
            subcategory: trimmed(&self.subcategory),
            price: optional(&self.price),
            description: optional(&self.description),
        })
    }

    /// Build an update that sets every form field.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if the form is incomplete.
    pub fn to_update(&self) -> Result<ProductUpdate, ValidationError> {
        self.validate()?;
        Ok(ProductUpdate {
            name: FieldUpdate::SetTo(trimmed(&self.name)),
            image: FieldUpdate::SetTo(trimmed(&self.image)),
            category: FieldUpdate::Unchanged,
            subcategory: FieldUpdate::SetTo(trimmed(&self.subcategory)),
            price: FieldUpdate::SetTo(optional(&self.price)),
            description: FieldUpdate::SetTo(optional(&self.description)),
        })
    }
}

impl From<&Product> for ProductForm {
    fn from(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            image: product.image.clone(),
            subcategory: product.subcategory.clone(),
            price: product.price.clone().unwrap_or_default(),
            description: product.description.clone().unwrap_or_default(),
        }
    }
}

// =============================================================================
// Best seller
// =============================================================================

/// Add/edit form of the best-seller grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BestSellerForm {
    pub name: String,
    pub image: String,
    pub price: String,
    pub rating: Rating,
    pub category: String,
    pub is_active: bool,
    pub order: i64,
}

impl Default for BestSellerForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            image: String::new(),
            price: String::new(),
            rating: Rating::default(),
            category: String::new(),
            is_active: true,
            order: 1,
        }
    }
}

impl BestSellerForm {
    /// Check the required inputs (name, image, category, price) and the rank.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingFields`] listing the blank inputs, or
    /// [`ValidationError::InvalidOrder`] if the rank is below 1.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require(&[
            ("name", self.name.as_str()),
            ("image", self.image.as_str()),
            ("category", self.category.as_str()),
            ("price", self.price.as_str()),
        ])?;
        if self.order < 1 {
            return Err(ValidationError::InvalidOrder(self.order));
        }
        Ok(())
    }

    /// Build the creation payload.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if the form is invalid.
    pub fn to_new_best_seller(&self) -> Result<NewBestSeller, ValidationError> {
        self.validate()?;
        Ok(NewBestSeller {
            name: trimmed(&self.name),
            image: trimmed(&self.image),
            price: trimmed(&self.price),
            rating: self.rating,
            category: trimmed(&self.category),
            is_active: self.is_active,
            order: self.order,
        })
    }

    /// Build an update that sets every form field.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if the form is invalid.
    pub fn to_update(&self) -> Result<BestSellerUpdate, ValidationError> {
        self.validate()?;
        Ok(BestSellerUpdate {
            name: FieldUpdate::SetTo(trimmed(&self.name)),
            image: FieldUpdate::SetTo(trimmed(&self.image)),
            price: FieldUpdate::SetTo(trimmed(&self.price)),
            rating: FieldUpdate::SetTo(self.rating),
            category: FieldUpdate::SetTo(trimmed(&self.category)),
            is_active: FieldUpdate::SetTo(self.is_active),
            order: FieldUpdate::SetTo(self.order),
        })
    }
}

impl From<&BestSeller> for BestSellerForm {
    fn from(entry: &BestSeller) -> Self {
        Self {
            name: entry.name.clone(),
            image: entry.image.clone(),
            price: entry.price.clone(),
            rating: entry.rating,
            category: entry.category.clone(),
            is_active: entry.is_active,
            order: entry.order,
        }
    }
}

// =============================================================================
// Featured offer
// =============================================================================

/// Edit form of the featured offer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OfferForm {
    pub title: String,
    pub description: String,
    pub image: String,
    pub original_price: String,
    pub discounted_price: String,
    pub discount: String,
    pub valid_until: String,
    pub is_active: bool,
}

impl Default for OfferForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            image: String::new(),
            original_price: String::new(),
            discounted_price: String::new(),
            discount: String::new(),
            valid_until: String::new(),
            is_active: true,
        }
    }
}

impl OfferForm {
    /// Check the required inputs (title, description, image, discounted price).
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingFields`] listing the blank inputs.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require(&[
            ("title", self.title.as_str()),
            ("description", self.description.as_str()),
            ("image", self.image.as_str()),
            ("discountedPrice", self.discounted_price.as_str()),
        ])
    }

    /// Build the replacement payload.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if the form is incomplete.
    pub fn to_new_offer(&self) -> Result<NewFeaturedOffer, ValidationError> {
        self.validate()?;
        Ok(NewFeaturedOffer {
            title: trimmed(&self.title),
            description: trimmed(&self.description),
            image: trimmed(&self.image),
            original_price: optional(&self.original_price),
            discounted_price: trimmed(&self.discounted_price),
            discount: optional(&self.discount),
            valid_until: optional(&self.valid_until),
            is_active: self.is_active,
        })
    }
}

impl From<&FeaturedOffer> for OfferForm {
    fn from(offer: &FeaturedOffer) -> Self {
        Self {
            title: offer.title.clone(),
            description: offer.description.clone(),
            image: offer.image.clone(),
            original_price: offer.original_price.clone().unwrap_or_default(),
            discounted_price: offer.discounted_price.clone(),
            discount: offer.discount.clone().unwrap_or_default(),
            valid_until: offer.valid_until.clone().unwrap_or_default(),
            is_active: offer.is_active,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn product_form() -> ProductForm {
        ProductForm {
            name: "Puerta Colonial".to_string(),
            image: "https://x/y.jpg".to_string(),
            subcategory: "Puertas Clásicas".to_string(),
            price: "$850".to_string(),
            description: String::new(),
        }
    }

    #[test]
    fn test_product_form_requires_trimmed_fields() {
        let form = ProductForm {
            name: "   ".to_string(),
            subcategory: String::new(),
            ..product_form()
        };
        assert_eq!(
            form.validate(),
            Err(ValidationError::MissingFields(vec!["name", "subcategory"]))
        );
    }

    #[test]
    fn test_product_form_price_and_description_are_optional() {
        let form = ProductForm {
            price: String::new(),
            ..product_form()
        };
        let new = form.to_new_product(Category::Puertas).unwrap();
        assert_eq!(new.price, None);
        assert_eq!(new.description, None);
        assert_eq!(new.category, Category::Puertas);
    }

    #[test]
    fn test_product_form_update_clears_blank_optionals() {
        let update = ProductForm {
            price: "  ".to_string(),
            ..product_form()
        }
        .to_update()
        .unwrap();
        assert_eq!(update.price, FieldUpdate::SetTo(None));
        assert!(update.category.is_unchanged());
        assert_eq!(update.name, FieldUpdate::SetTo("Puerta Colonial".to_string()));
    }

    #[test]
    fn test_product_form_trims_values() {
        let new = ProductForm {
            name: "  Reja Simple ".to_string(),
            ..product_form()
        }
        .to_new_product(Category::Rejas)
        .unwrap();
        assert_eq!(new.name, "Reja Simple");
    }

    #[test]
    fn test_best_seller_form_requires_price() {
        let form = BestSellerForm {
            name: "Portón".to_string(),
            image: "https://x/p.jpg".to_string(),
            category: "Portones".to_string(),
            ..BestSellerForm::default()
        };
        assert_eq!(
            form.validate(),
            Err(ValidationError::MissingFields(vec!["price"]))
        );
    }

    #[test]
    fn test_best_seller_form_rejects_non_positive_order() {
        let form = BestSellerForm {
            name: "Portón".to_string(),
            image: "https://x/p.jpg".to_string(),
            category: "Portones".to_string(),
            price: "$1200".to_string(),
            order: 0,
            ..BestSellerForm::default()
        };
        assert_eq!(form.validate(), Err(ValidationError::InvalidOrder(0)));
        assert_eq!(
            form.validate().unwrap_err().user_message(),
            INVALID_ORDER_MESSAGE
        );
    }

    #[test]
    fn test_best_seller_form_rejects_out_of_range_rating_json() {
        let result = serde_json::from_str::<BestSellerForm>(r#"{"rating": 6}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_offer_form_to_new_offer() {
        let offer = OfferForm {
            title: "Oferta de otoño".to_string(),
            description: "Portones con descuento".to_string(),
            image: "https://x/o.jpg".to_string(),
            discounted_price: "$900".to_string(),
            discount: "25% OFF".to_string(),
            ..OfferForm::default()
        }
        .to_new_offer()
        .unwrap();
        assert_eq!(offer.discount.as_deref(), Some("25% OFF"));
        assert_eq!(offer.original_price, None);
        assert!(offer.is_active);
    }

    #[test]
    fn test_validation_message() {
        let err = ValidationError::MissingFields(vec!["name"]);
        assert_eq!(err.user_message(), MISSING_FIELDS_MESSAGE);
        assert_eq!(err.to_string(), "missing required fields: name");
    }
}
