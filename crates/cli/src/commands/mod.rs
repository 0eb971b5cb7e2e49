//! Command implementations.

pub mod best_sellers;
pub mod offer;
pub mod products;
pub mod seed;

use std::sync::Arc;

use herreria_core::ParseCategoryError;
use herreria_core::forms::ValidationError;
use herreria_storefront::config::{ConfigError, StoreConfig};
use herreria_storefront::db::RepositoryError;
use herreria_storefront::state::build_store;
use herreria_storefront::store::DocumentStore;
use thiserror::Error;

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CliError {
    /// Store configuration is missing or invalid.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Store operation failed.
    #[error("Store error: {0}")]
    Repository(#[from] RepositoryError),

    /// Unknown category slug.
    #[error("{0}")]
    Category(#[from] ParseCategoryError),

    /// Input did not pass form validation.
    #[error("Invalid input: {0}")]
    Validation(#[from] ValidationError),

    /// Seed file could not be read.
    #[error("Cannot read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    /// Seed file is not valid YAML for the expected shape.
    #[error("Invalid seed file: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Seed file has entries that fail validation.
    #[error("{} invalid seed entries", .0.len())]
    InvalidSeed(Vec<String>),
}

/// Connect to the store selected by `STORE_BACKEND`.
///
/// # Errors
///
/// Returns `CliError::Config` if the store configuration is incomplete.
pub fn connect() -> Result<Arc<dyn DocumentStore>, CliError> {
    dotenvy::dotenv().ok();
    let config = StoreConfig::from_env()?;
    Ok(build_store(&config))
}
