//! # Collection Store
//!
//! This crate provides the building blocks for mirroring a remote entity
//! collection on the client side: a local in-memory sequence that stays
//! synchronized with one remote HTTP endpoint through plain request/response
//! round-trips.
//!
//! ## Why a mirrored collection?
//!
//! A lot of client code follows the same shape: fetch a list from a REST
//! endpoint, render it, and keep the local copy in step as records are
//! created, updated, and deleted. Writing that reconciliation by hand for
//! every entity type duplicates the same dozen lines per type and invites
//! subtle divergence (one list appends optimistically, another re-fetches,
//! a third forgets to remove on delete).
//!
//! This crate writes the reconciliation **once**, generically:
//!
//! 1. **Entity Layer** ([`CollectionEntity`]) - your data model, any serde
//!    record with an optional server-assigned id.
//! 2. **Transport Layer** ([`RemoteCollection`]) - the four-operation
//!    contract (list, create, update, delete) against one endpoint, with
//!    [`HttpCollection`] as the production implementation.
//! 3. **State Layer** ([`CollectionStore`]) - the owned local sequence and
//!    the rules that keep it a faithful reflection of remote state.
//!
//! ## Core guarantees
//!
//! - The local sequence is only ever a reflection of the last known remote
//!   state. Ids always come from the remote response; the store never
//!   fabricates one.
//! - No optimistic updates: local state changes only after the remote call
//!   has succeeded. A failed call leaves the sequence untouched and the
//!   [`TransportError`] propagates to the caller unmodified.
//! - At most one entity per id at every observation point.
//!
//! ## Quick start
//!
//! ```no_run
//! use collection_store::{CollectionEntity, CollectionStore, HttpCollection};
//! use serde::{Deserialize, Serialize};
//! use std::time::Duration;
//!
//! #[derive(Clone, Debug, Serialize, Deserialize)]
//! struct Task {
//!     #[serde(skip_serializing_if = "Option::is_none")]
//!     id: Option<u64>,
//!     label: String,
//! }
//!
//! impl CollectionEntity for Task {
//!     fn id(&self) -> Option<u64> {
//!         self.id
//!     }
//!     fn with_id(mut self, id: u64) -> Self {
//!         self.id = Some(id);
//!         self
//!     }
//! }
//!
//! # async fn run() -> Result<(), collection_store::TransportError> {
//! let remote = HttpCollection::<Task>::new("http://localhost:5575/tasks", Duration::from_secs(10))?;
//! let mut store = CollectionStore::new(remote);
//!
//! store.fetch_all().await?;
//! let id = store.add(Task { id: None, label: "write docs".into() }).await?;
//! store.remove(id).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Concurrency model
//!
//! Store operations take `&mut self`. Within one store instance the borrow
//! checker rules out interleaved mutations entirely; there is no queueing,
//! no deduplication, and no locking because none is needed. Two *separate*
//! stores mirroring the same remote can still race each other at the remote
//! (last write wins there), which is outside this crate's contract.
//!
//! ## Testing
//!
//! The [`mock`] module provides [`MockCollection`](mock::MockCollection), an
//! in-memory fake remote with failure injection, so store-driving code can
//! be tested without any network or server.

pub mod client;
pub mod entity;
pub mod error;
pub mod http;
pub mod mock;
pub mod store;
pub mod tracing;

// Re-export core types for convenience
pub use client::RemoteCollection;
pub use entity::CollectionEntity;
pub use error::TransportError;
pub use http::HttpCollection;
pub use store::CollectionStore;
