//! # CollectionEntity Trait
//!
//! The `CollectionEntity` trait defines the contract that every record type
//! (Product, Review, …) must satisfy to be mirrored by a
//! [`CollectionStore`](crate::store::CollectionStore). It is deliberately
//! small: serde round-tripping for the wire, plus access to the optional
//! server-assigned id.
//!
//! # Architecture Note
//! Why a trait? By defining one contract that all mirrored record types must
//! satisfy, the store and reconciliation logic are written *once* and reused
//! for every entity type. The domain fields stay opaque to the store; only
//! the id participates in reconciliation.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::Debug;

/// Contract for a record that can live in a mirrored remote collection.
///
/// # Id semantics
/// The id is `None` before the remote store has assigned one and `Some`
/// afterward. Uniqueness of ids within a collection is enforced by the
/// remote side; the store only relies on it for in-place replacement and
/// removal.
pub trait CollectionEntity:
    Clone + Debug + Send + Sync + Serialize + DeserializeOwned + 'static
{
    /// The server-assigned identifier, if any.
    fn id(&self) -> Option<u64>;

    /// Returns this entity with the given id set.
    ///
    /// Only a remote implementation that assigns ids itself (such as the
    /// in-memory [`MockCollection`](crate::mock::MockCollection)) calls
    /// this; the HTTP remote receives the id inside the response body.
    fn with_id(self, id: u64) -> Self;
}
