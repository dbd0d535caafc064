//! # Product Store
//!
//! Mirrors the remote `/products` collection. Wraps the generic
//! `CollectionStore` with product-named operations; errors propagate as
//! [`TransportError`] unmodified.

use crate::config::Config;
use crate::model::Product;
use collection_store::{CollectionStore, HttpCollection, RemoteCollection, TransportError};
use tracing::{debug, instrument};

/// Client-side mirror of the remote product collection.
pub struct ProductStore<C = HttpCollection<Product>> {
    inner: CollectionStore<Product, C>,
}

impl ProductStore {
    /// Builds the HTTP-backed store from the loaded configuration.
    pub fn from_config(config: &Config) -> Result<Self, TransportError> {
        let remote = HttpCollection::new(config.products_url.clone(), config.request_timeout)?;
        Ok(Self::new(remote))
    }
}

impl<C: RemoteCollection<Product>> ProductStore<C> {
    pub fn new(remote: C) -> Self {
        Self {
            inner: CollectionStore::new(remote),
        }
    }

    /// The last-synchronized product list, in remote order.
    pub fn products(&self) -> &[Product] {
        self.inner.items()
    }

    #[instrument(skip(self))]
    pub async fn fetch_products(&mut self) -> Result<(), TransportError> {
        debug!("Sending request");
        self.inner.fetch_all().await
    }

    /// Creates the product remotely and mirrors it locally; returns the
    /// server-assigned id.
    #[instrument(skip(self, product))]
    pub async fn add_product(&mut self, product: Product) -> Result<u64, TransportError> {
        debug!(?product, "Sending request");
        self.inner.add(product).await
    }

    #[instrument(skip(self, product))]
    pub async fn update_product(
        &mut self,
        id: u64,
        product: Product,
    ) -> Result<Product, TransportError> {
        debug!(?product, "Sending request");
        self.inner.update(id, product).await
    }

    #[instrument(skip(self))]
    pub async fn remove_product(&mut self, id: u64) -> Result<(), TransportError> {
        debug!("Sending request");
        self.inner.remove(id).await
    }
}
