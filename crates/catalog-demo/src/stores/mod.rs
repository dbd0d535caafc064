//! # Catalog Stores
//!
//! Per-entity wrappers over the generic
//! [`CollectionStore`](collection_store::CollectionStore). The wrappers add
//! nothing to the reconciliation logic; they pin the entity type, give the
//! operations domain names, and trace each call.

pub mod product_store;
pub mod review_store;

pub use product_store::ProductStore;
pub use review_store::ReviewStore;
