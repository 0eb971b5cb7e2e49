//! Featured offer commands.

use herreria_storefront::db::FeaturedOfferRepository;
use herreria_storefront::store::DocumentStore;
use tracing::info;

use super::CliError;

/// Log the featured offer, if any.
///
/// # Errors
///
/// Returns an error if the read fails or the stored offer is malformed.
pub async fn show(store: &dyn DocumentStore) -> Result<(), CliError> {
    match FeaturedOfferRepository::new(store).get().await? {
        Some(offer) => {
            info!("{} ({})", offer.title, if offer.is_active { "activa" } else { "inactiva" });
            info!("  {}", offer.description);
            info!(
                "  {} -> {}",
                offer.original_price.as_deref().unwrap_or("-"),
                offer.discounted_price
            );
            if let Some(valid_until) = &offer.valid_until {
                info!("  {valid_until}");
            }
        }
        None => info!("No featured offer"),
    }
    Ok(())
}

/// Remove the featured offer.
///
/// # Errors
///
/// Returns an error if the delete fails.
pub async fn clear(store: &dyn DocumentStore) -> Result<(), CliError> {
    FeaturedOfferRepository::new(store).remove().await?;
    info!("Featured offer removed");
    Ok(())
}
