//! Product commands.
//!
//! # Usage
//!
//! ```bash
//! herreria-cli products list puertas
//! herreria-cli products add -c puertas -n "Puerta Colonial" -i https://x/y.jpg -s "Puertas Clásicas" -p '$850'
//! herreria-cli products delete 8f14e45fceea167a5a36dedd4bea2543
//! ```

use herreria_core::forms::ProductForm;
use herreria_core::{Category, ProductId};
use herreria_storefront::db::ProductRepository;
use herreria_storefront::store::DocumentStore;
use tracing::info;

use super::CliError;

/// Log every product of a category, newest first.
///
/// # Errors
///
/// Returns an error for an unknown category or a failed query.
pub async fn list(store: &dyn DocumentStore, category: &str) -> Result<(), CliError> {
    let category: Category = category.parse()?;
    let products = ProductRepository::new(store).list_by_category(category).await?;

    info!("{} ({} products)", category.title(), products.len());
    for product in &products {
        info!(
            "  {} | {} | {} | {}",
            product.id,
            product.subcategory,
            product.name,
            product.price.as_deref().unwrap_or("-")
        );
    }
    Ok(())
}

/// Validate the form and add the product.
///
/// # Errors
///
/// Returns an error for an unknown category, an invalid form or a failed write.
pub async fn add(
    store: &dyn DocumentStore,
    category: &str,
    form: &ProductForm,
) -> Result<(), CliError> {
    let category: Category = category.parse()?;
    let product = form.to_new_product(category)?;
    let created = ProductRepository::new(store).create(product).await?;

    info!(id = %created.id, "Added {} to {}", created.name, category.title());
    Ok(())
}

/// Delete a product by id. Deleting a missing id succeeds.
///
/// # Errors
///
/// Returns an error if the delete fails.
pub async fn delete(store: &dyn DocumentStore, id: &str) -> Result<(), CliError> {
    ProductRepository::new(store)
        .delete(&ProductId::new(id))
        .await?;
    info!(%id, "Product deleted");
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use herreria_storefront::store::MemoryStore;

    use super::*;

    fn gondola() -> ProductForm {
        ProductForm {
            name: "Góndola doble faz".to_string(),
            image: "https://img/gondola.jpg".to_string(),
            subcategory: "Góndolas Centrales".to_string(),
            price: String::new(),
            description: String::new(),
        }
    }

    #[tokio::test]
    async fn test_add_then_list() {
        let store = MemoryStore::new();
        add(&store, "gondolas", &gondola()).await.unwrap();

        let products = ProductRepository::new(&store)
            .list_by_category(Category::Gondolas)
            .await
            .unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].price, None);
        assert!(list(&store, "gondolas").await.is_ok());
    }

    #[tokio::test]
    async fn test_unknown_category_is_rejected() {
        let store = MemoryStore::new();
        let err = add(&store, "ventanas", &gondola()).await.unwrap_err();
        assert!(matches!(err, CliError::Category(_)));
        assert_eq!(store.count("products").await, 0);
    }

    #[tokio::test]
    async fn test_invalid_form_is_rejected() {
        let store = MemoryStore::new();
        let form = ProductForm {
            image: String::new(),
            ..gondola()
        };
        let err = add(&store, "gondolas", &form).await.unwrap_err();
        assert!(matches!(err, CliError::Validation(_)));
    }
}
