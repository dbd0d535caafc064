//! # RemoteCollection Trait
//!
//! The four-operation contract a [`CollectionStore`](crate::store::CollectionStore)
//! needs from its remote side: list, create, update-by-id, delete-by-id
//! against one collection endpoint.
//!
//! # Architecture Note
//! The store owns no transport logic. It only orchestrates "call the remote,
//! then reconcile local state on success". Keeping the transport behind this
//! trait means the same store logic runs against the production HTTP remote
//! ([`HttpCollection`](crate::http::HttpCollection)) and against the
//! in-memory test double ([`MockCollection`](crate::mock::MockCollection)).

use crate::entity::CollectionEntity;
use crate::error::TransportError;
use async_trait::async_trait;

/// Request/response contract against one remote entity collection.
///
/// Every method performs network I/O (or simulates it); nothing is cached at
/// this layer. All failure modes surface as [`TransportError`], with no
/// distinction between "not found", "server error", and "network down".
#[async_trait]
pub trait RemoteCollection<T: CollectionEntity>: Send + Sync {
    /// Fetch the full current remote collection. No pagination, no filtering.
    async fn list(&self) -> Result<Vec<T>, TransportError>;

    /// Create a new record. The entity is sent without an id; the returned
    /// entity carries the authoritative, remote-assigned id.
    async fn create(&self, entity: &T) -> Result<T, TransportError>;

    /// Fully replace the remote record addressed by `id`.
    ///
    /// A missing remote record surfaces as a plain non-2xx
    /// [`TransportError`], not a distinguished case.
    async fn update_by_id(&self, id: u64, entity: &T) -> Result<T, TransportError>;

    /// Delete the remote record addressed by `id`.
    ///
    /// Succeeds whenever the remote reports success; prior existence of the
    /// record is not verified here.
    async fn delete_by_id(&self, id: u64) -> Result<(), TransportError>;
}
