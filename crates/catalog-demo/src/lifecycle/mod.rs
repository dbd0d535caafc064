//! # Catalog Lifecycle
//!
//! Wiring layer: builds both mirrored stores from one [`Config`] and hands
//! them out as a single owned [`Catalog`] value.
//!
//! ## The Ownership Pattern
//!
//! The original design this replaces kept each store in a global singleton
//! written from many call sites. Here the `Catalog` is an explicit value:
//! whoever owns it drives both stores through their methods, consumers
//! receive read-only slices, and nothing outside the stores can touch the
//! backing sequences. Constructor injection replaces ambient globals.
//!
//! The two stores are deliberately independent - separate endpoints,
//! separate local sequences, no cross-store transactions. A review's
//! `product_id` is a plain value, not a foreign key either store enforces.

use crate::config::Config;
use crate::stores::{ProductStore, ReviewStore};
use collection_store::TransportError;

/// Both catalog stores, HTTP-backed, built from one configuration.
pub struct Catalog {
    pub products: ProductStore,
    pub reviews: ReviewStore,
}

impl Catalog {
    /// Builds the catalog against the configured base URLs. The stores
    /// start empty; nothing is fetched until the caller asks.
    pub fn new(config: &Config) -> Result<Self, TransportError> {
        Ok(Self {
            products: ProductStore::from_config(config)?,
            reviews: ReviewStore::from_config(config)?,
        })
    }
}
