//! Seed the catalog from a YAML file.
//!
//! Every entry is validated with the editor form rules before anything is
//! written. A file with any invalid entry is rejected as a whole, listing
//! every problem.
//!
//! # File Format
//!
//! ```yaml
//! products:
//!   - category: puertas
//!     name: Puerta Colonial
//!     image: https://x/y.jpg
//!     subcategory: Puertas Clásicas
//!     price: "$850"
//! best_sellers:
//!   - name: Portón corredizo
//!     image: https://x/porton.jpg
//!     price: "$1200"
//!     rating: 5
//!     category: Portones
//!     order: 1
//! featured_offer:
//!   title: Liquidación de rejas
//!   description: Rejas de seguridad a medida
//!   image: https://x/rejas.jpg
//!   discountedPrice: "$490"
//! ```

use std::path::Path;

use herreria_core::forms::{BestSellerForm, OfferForm, ProductForm};
use herreria_core::{Category, NewBestSeller, NewFeaturedOffer, NewProduct};
use herreria_storefront::db::{BestSellerRepository, FeaturedOfferRepository, ProductRepository};
use herreria_storefront::store::DocumentStore;
use serde::Deserialize;
use tracing::{error, info};

use super::CliError;

/// A product entry: the form plus its category slug.
#[derive(Debug, Deserialize)]
pub struct SeedProduct {
    pub category: String,
    #[serde(flatten)]
    pub form: ProductForm,
}

/// Contents of a seed file.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SeedFile {
    pub products: Vec<SeedProduct>,
    pub best_sellers: Vec<BestSellerForm>,
    pub featured_offer: Option<OfferForm>,
}

/// A seed file that passed validation, ready to write.
#[derive(Debug, Default)]
pub struct ValidatedSeed {
    pub products: Vec<NewProduct>,
    pub best_sellers: Vec<NewBestSeller>,
    pub featured_offer: Option<NewFeaturedOffer>,
}

/// Counts of what a seed run wrote.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct SeedResult {
    pub products: usize,
    pub best_sellers: usize,
    pub featured_offer: bool,
}

impl SeedFile {
    /// Validate every entry.
    ///
    /// # Errors
    ///
    /// Returns one message per invalid entry.
    pub fn validate(&self) -> Result<ValidatedSeed, Vec<String>> {
        let mut seed = ValidatedSeed::default();
        let mut errors = Vec::new();

        for (i, entry) in self.products.iter().enumerate() {
            let label = format!("products[{i}] ({})", entry.form.name);
            match entry.category.parse::<Category>() {
                Ok(category) => match entry.form.to_new_product(category) {
                    Ok(product) => seed.products.push(product),
                    Err(e) => errors.push(format!("{label}: {e}")),
                },
                Err(e) => errors.push(format!("{label}: {e}")),
            }
        }

        for (i, form) in self.best_sellers.iter().enumerate() {
            match form.to_new_best_seller() {
                Ok(entry) => seed.best_sellers.push(entry),
                Err(e) => errors.push(format!("best_sellers[{i}] ({}): {e}", form.name)),
            }
        }

        if let Some(form) = &self.featured_offer {
            match form.to_new_offer() {
                Ok(offer) => seed.featured_offer = Some(offer),
                Err(e) => errors.push(format!("featured_offer: {e}")),
            }
        }

        if errors.is_empty() {
            Ok(seed)
        } else {
            Err(errors)
        }
    }
}

/// Validate a parsed seed file and write it.
///
/// # Errors
///
/// Returns `CliError::InvalidSeed` before any write if an entry is invalid,
/// or the first failed write.
pub async fn apply(store: &dyn DocumentStore, file: &SeedFile) -> Result<SeedResult, CliError> {
    let seed = file.validate().map_err(CliError::InvalidSeed)?;
    let mut result = SeedResult::default();

    let products = ProductRepository::new(store);
    for product in seed.products {
        products.create(product).await?;
        result.products += 1;
    }

    let best_sellers = BestSellerRepository::new(store);
    for entry in seed.best_sellers {
        best_sellers.create(entry).await?;
        result.best_sellers += 1;
    }

    if let Some(offer) = seed.featured_offer {
        FeaturedOfferRepository::new(store).set(offer).await?;
        result.featured_offer = true;
    }

    Ok(result)
}

/// Seed the catalog from a YAML file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, any entry is
/// invalid, or a write fails.
pub async fn from_file(store: &dyn DocumentStore, file_path: &str) -> Result<(), CliError> {
    let path = Path::new(file_path);
    info!(path = %file_path, "Loading catalog from file");

    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| CliError::Io {
            path: file_path.to_string(),
            source,
        })?;
    let file: SeedFile = serde_yaml::from_str(&content)?;

    info!(
        products = file.products.len(),
        best_sellers = file.best_sellers.len(),
        featured_offer = file.featured_offer.is_some(),
        "Parsed seed file"
    );

    let result = match apply(store, &file).await {
        Ok(result) => result,
        Err(CliError::InvalidSeed(errors)) => {
            error!("Seed file validation failed:");
            for err in &errors {
                error!("  - {err}");
            }
            return Err(CliError::InvalidSeed(errors));
        }
        Err(e) => return Err(e),
    };

    info!("Seeding complete!");
    info!("  Products inserted: {}", result.products);
    info!("  Best sellers inserted: {}", result.best_sellers);
    info!("  Featured offer replaced: {}", result.featured_offer);
    Ok(())
}
