//! Best-seller commands.

use herreria_storefront::db::BestSellerRepository;
use herreria_storefront::store::DocumentStore;
use tracing::info;

use super::CliError;

/// Log best sellers by rank; inactive ones only with `all`.
///
/// # Errors
///
/// Returns an error if the query fails.
pub async fn list(store: &dyn DocumentStore, all: bool) -> Result<(), CliError> {
    let repo = BestSellerRepository::new(store);
    let entries = if all {
        repo.list_all().await?
    } else {
        repo.list_active().await?
    };

    info!("{} best sellers", entries.len());
    for entry in &entries {
        info!(
            "  #{} {} | {} | {} | {}{}",
            entry.order,
            entry.id,
            entry.name,
            entry.price,
            entry.rating.label(),
            if entry.is_active { "" } else { " (inactivo)" }
        );
    }
    Ok(())
}
