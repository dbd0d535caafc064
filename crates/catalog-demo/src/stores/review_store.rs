//! # Review Store
//!
//! Mirrors the remote `/reviews` collection. Same shape as the product
//! store; the two lists are fully independent and only connected by the
//! `product_id` value carried inside each review.

use crate::config::Config;
use crate::model::Review;
use collection_store::{CollectionStore, HttpCollection, RemoteCollection, TransportError};
use tracing::{debug, instrument};

/// Client-side mirror of the remote review collection.
pub struct ReviewStore<C = HttpCollection<Review>> {
    inner: CollectionStore<Review, C>,
}

impl ReviewStore {
    /// Builds the HTTP-backed store from the loaded configuration.
    pub fn from_config(config: &Config) -> Result<Self, TransportError> {
        let remote = HttpCollection::new(config.reviews_url.clone(), config.request_timeout)?;
        Ok(Self::new(remote))
    }
}

impl<C: RemoteCollection<Review>> ReviewStore<C> {
    pub fn new(remote: C) -> Self {
        Self {
            inner: CollectionStore::new(remote),
        }
    }

    /// The last-synchronized review list, in remote order.
    pub fn reviews(&self) -> &[Review] {
        self.inner.items()
    }

    #[instrument(skip(self))]
    pub async fn fetch_reviews(&mut self) -> Result<(), TransportError> {
        debug!("Sending request");
        self.inner.fetch_all().await
    }

    /// Creates the review remotely and mirrors it locally; returns the
    /// server-assigned id.
    #[instrument(skip(self, review))]
    pub async fn add_review(&mut self, review: Review) -> Result<u64, TransportError> {
        debug!(?review, "Sending request");
        self.inner.add(review).await
    }

    #[instrument(skip(self, review))]
    pub async fn update_review(&mut self, id: u64, review: Review) -> Result<Review, TransportError> {
        debug!(?review, "Sending request");
        self.inner.update(id, review).await
    }

    #[instrument(skip(self))]
    pub async fn remove_review(&mut self, id: u64) -> Result<(), TransportError> {
        debug!("Sending request");
        self.inner.remove(id).await
    }
}
