//! Herrería CLI - Catalog management and seeding tools.
//!
//! # Usage
//!
//! ```bash
//! # List the products of a category
//! herreria-cli products list puertas
//!
//! # Add a product
//! herreria-cli products add --category rejas --name "Reja colonial" \
//!     --image https://img/reja.jpg --subcategory "Rejas Clásicas" --price '$900'
//!
//! # Show every best seller, including inactive ones
//! herreria-cli best-sellers list --all
//!
//! # Load a catalog from YAML
//! herreria-cli seed catalog.yaml
//! ```
//!
//! # Commands
//!
//! - `products` - List, add and delete products
//! - `best-sellers` - List best sellers
//! - `offer` - Show or clear the featured offer
//! - `seed` - Validate and load a YAML catalog

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "herreria-cli")]
#[command(author, version, about = "Herrería catalog tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage products
    Products {
        #[command(subcommand)]
        action: ProductAction,
    },
    /// Inspect best sellers
    BestSellers {
        #[command(subcommand)]
        action: BestSellerAction,
    },
    /// Manage the featured offer
    Offer {
        #[command(subcommand)]
        action: OfferAction,
    },
    /// Seed the catalog from a YAML file
    Seed {
        /// Path to the YAML file
        file: String,
    },
}

#[derive(Subcommand)]
enum ProductAction {
    /// List the products of a category, newest first
    List {
        /// Category slug (puertas, portones, gondolas, ...)
        category: String,
    },
    /// Add a product
    Add {
        /// Category slug
        #[arg(short, long)]
        category: String,

        /// Product name
        #[arg(short, long)]
        name: String,

        /// Image URL
        #[arg(short, long)]
        image: String,

        /// Subcategory label
        #[arg(short, long)]
        subcategory: String,

        /// Display price, e.g. "$850"
        #[arg(short, long)]
        price: Option<String>,

        /// Description
        #[arg(short, long)]
        description: Option<String>,
    },
    /// Delete a product by id
    Delete {
        /// Product id
        id: String,
    },
}

#[derive(Subcommand)]
enum BestSellerAction {
    /// List best sellers by rank
    List {
        /// Include inactive entries
        #[arg(long)]
        all: bool,
    },
}

#[derive(Subcommand)]
enum OfferAction {
    /// Show the featured offer
    Show,
    /// Remove the featured offer
    Clear,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), commands::CliError> {
    let store = commands::connect()?;
    let store = store.as_ref();

    match cli.command {
        Commands::Products { action } => match action {
            ProductAction::List { category } => commands::products::list(store, &category).await?,
            ProductAction::Add {
                category,
                name,
                image,
                subcategory,
                price,
                description,
            } => {
                let form = herreria_core::forms::ProductForm {
                    name,
                    image,
                    subcategory,
                    price: price.unwrap_or_default(),
                    description: description.unwrap_or_default(),
                };
                commands::products::add(store, &category, &form).await?;
            }
            ProductAction::Delete { id } => commands::products::delete(store, &id).await?,
        },
        Commands::BestSellers { action } => match action {
            BestSellerAction::List { all } => commands::best_sellers::list(store, all).await?,
        },
        Commands::Offer { action } => match action {
            OfferAction::Show => commands::offer::show(store).await?,
            OfferAction::Clear => commands::offer::clear(store).await?,
        },
        Commands::Seed { file } => commands::seed::from_file(store, &file).await?,
    }
    Ok(())
}
