//! Catalog entities.
//!
//! Each entity comes in three shapes: the stored record (with identity and
//! creation timestamp), the `New*` payload accepted on creation, and, for
//! collection entities, an `*Update` of tagged per-field changes.

pub mod best_seller;
pub mod offer;
pub mod product;

pub use best_seller::{BestSeller, BestSellerUpdate, NewBestSeller};
pub use offer::{FeaturedOffer, NewFeaturedOffer};
pub use product::{NewProduct, Product, ProductUpdate};
