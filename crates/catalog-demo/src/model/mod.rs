//! # Catalog Models
//!
//! Pure data structures for the two mirrored collections. Each implements
//! [`CollectionEntity`](collection_store::CollectionEntity) so the generic
//! store machinery applies to both without duplication.

pub mod product;
pub mod review;

pub use product::{Discount, Product};
pub use review::Review;
