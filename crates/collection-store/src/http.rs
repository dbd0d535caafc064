//! # HTTP Remote Collection
//!
//! Production implementation of [`RemoteCollection`] over a single REST-style
//! base URL:
//!
//! - `GET <base>` → JSON array of entities
//! - `POST <base>` (entity without id) → JSON entity with assigned id
//! - `PUT <base>/{id}` (entity) → JSON entity
//! - `DELETE <base>/{id}` → success status, body ignored
//!
//! Any non-2xx status is a uniform [`TransportError`]; there is no
//! per-status-code branching and no retry at this layer. Timeouts are
//! enforced by the underlying `reqwest` client.

use crate::client::RemoteCollection;
use crate::entity::CollectionEntity;
use crate::error::TransportError;
use async_trait::async_trait;
use reqwest::Response;
use std::marker::PhantomData;
use std::time::Duration;
use tracing::debug;

/// One remote entity collection behind one base URL.
///
/// The type parameter pins the entity type, so a `HttpCollection<Product>`
/// cannot be handed to a review store by accident. Cheap to clone; the
/// inner `reqwest::Client` is an `Arc` internally.
#[derive(Clone)]
pub struct HttpCollection<T> {
    http: reqwest::Client,
    base: String,
    _entity: PhantomData<fn() -> T>,
}

impl<T: CollectionEntity> HttpCollection<T> {
    /// Build a collection client for `base` (e.g. `http://host/products`)
    /// with the given request timeout.
    pub fn new(base: impl Into<String>, timeout: Duration) -> Result<Self, TransportError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base: base.into(),
            _entity: PhantomData,
        })
    }

    fn item_url(&self, id: u64) -> String {
        format!("{}/{id}", self.base)
    }
}

/// Map a non-2xx response to `TransportError`, passing 2xx through.
fn ensure_success(response: Response) -> Result<Response, TransportError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(TransportError::Status {
            status,
            url: response.url().to_string(),
        })
    }
}

#[async_trait]
impl<T: CollectionEntity> RemoteCollection<T> for HttpCollection<T> {
    async fn list(&self) -> Result<Vec<T>, TransportError> {
        debug!(url = %self.base, "GET collection");
        let response = self.http.get(&self.base).send().await?;
        let items = ensure_success(response)?.json::<Vec<T>>().await?;
        Ok(items)
    }

    async fn create(&self, entity: &T) -> Result<T, TransportError> {
        debug!(url = %self.base, "POST entity");
        let response = self.http.post(&self.base).json(entity).send().await?;
        let created = ensure_success(response)?.json::<T>().await?;
        if created.id().is_none() {
            // The mirror must never invent an id, so an id-less create
            // response cannot be applied locally.
            return Err(TransportError::MissingId(self.base.clone()));
        }
        Ok(created)
    }

    async fn update_by_id(&self, id: u64, entity: &T) -> Result<T, TransportError> {
        let url = self.item_url(id);
        debug!(%url, "PUT entity");
        let response = self.http.put(&url).json(entity).send().await?;
        let updated = ensure_success(response)?.json::<T>().await?;
        Ok(updated)
    }

    async fn delete_by_id(&self, id: u64) -> Result<(), TransportError> {
        let url = self.item_url(id);
        debug!(%url, "DELETE entity");
        let response = self.http.delete(&url).send().await?;
        ensure_success(response)?;
        Ok(())
    }
}
