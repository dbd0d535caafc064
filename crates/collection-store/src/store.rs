//! # Generic Collection Store
//!
//! This module defines [`CollectionStore`], the client-side mirror of one
//! remote entity collection. It owns the local sequence and the rules that
//! keep it a faithful reflection of remote state.
//!
//! # Architecture Note
//! The store is the "state" half of the pattern; all transport lives behind
//! the [`RemoteCollection`] trait. Every operation follows the same shape:
//! call the remote, and only on success apply exactly one local change
//! (overwrite, append, in-place replace, or filter). A failed call changes
//! nothing locally and the error propagates to the caller unmodified.
//!
//! **Concurrency model**: operations take `&mut self`, so within one store
//! instance the synchronous reconciliation step can never interleave with
//! another mutation - the borrow checker enforces what a cooperative
//! single-threaded runtime would otherwise only promise. There is no
//! queueing and no request sequencing across store instances.

use crate::client::RemoteCollection;
use crate::entity::CollectionEntity;
use crate::error::TransportError;
use tracing::{debug, info, warn};

/// Short entity name for log fields (e.g. "Product" instead of
/// "catalog_demo::model::product::Product").
fn entity_type<T>() -> &'static str {
    std::any::type_name::<T>()
        .rsplit("::")
        .next()
        .unwrap_or("Unknown")
}

/// Client-side in-memory mirror of one remote entity collection.
///
/// The local sequence preserves the order returned by the last full fetch;
/// created entities are appended, updated entities are replaced in place,
/// and deleted entities are filtered out with the remainder's order
/// preserved. The sequence holds at most one entity per id and is never
/// mutated ahead of remote confirmation.
///
/// The store is created empty and populated by the first
/// [`fetch_all`](CollectionStore::fetch_all); the remote side stays the
/// system of record throughout.
pub struct CollectionStore<T, C> {
    remote: C,
    items: Vec<T>,
}

impl<T, C> CollectionStore<T, C>
where
    T: CollectionEntity,
    C: RemoteCollection<T>,
{
    /// Creates an empty store around the given remote.
    pub fn new(remote: C) -> Self {
        Self {
            remote,
            items: Vec::new(),
        }
    }

    /// Read-only snapshot of the last-synchronized sequence.
    ///
    /// Consumers render from this slice; all mutation goes through the
    /// store's own methods.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Number of entities in the mirrored sequence.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True until a fetch or create first populates the mirror.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Fetches the full remote collection and replaces the local sequence
    /// with it wholesale. No merge with prior local state.
    pub async fn fetch_all(&mut self) -> Result<(), TransportError> {
        let entity_type = entity_type::<T>();
        debug!(entity_type, "Fetch all");
        match self.remote.list().await {
            Ok(items) => {
                self.items = items;
                info!(entity_type, size = self.items.len(), "Fetched");
                Ok(())
            }
            Err(e) => {
                warn!(entity_type, error = %e, "Fetch failed");
                Err(e)
            }
        }
    }

    /// Creates the entity remotely and appends the returned entity (with
    /// its server-assigned id) to the end of the local sequence. Returns
    /// the assigned id.
    pub async fn add(&mut self, entity: T) -> Result<u64, TransportError> {
        let entity_type = entity_type::<T>();
        debug!(entity_type, ?entity, "Create");
        match self.remote.create(&entity).await {
            Ok(created) => {
                let Some(id) = created.id() else {
                    // Remote contract violation; nothing is applied locally.
                    warn!(entity_type, "Create response carried no id");
                    return Err(TransportError::MissingId(entity_type.to_string()));
                };
                self.items.push(created);
                info!(entity_type, id, size = self.items.len(), "Created");
                Ok(id)
            }
            Err(e) => {
                warn!(entity_type, error = %e, "Create failed");
                Err(e)
            }
        }
    }

    /// Replaces the remote record addressed by `id`, then replaces the
    /// matching local entity in place (position preserved) with the entity
    /// the remote returned.
    ///
    /// If no local entity carries `id` - local state gone stale between
    /// fetches - the remote mutation still happened but the local sequence
    /// is deliberately left unchanged. That staleness window is part of the
    /// contract, not an error.
    pub async fn update(&mut self, id: u64, entity: T) -> Result<T, TransportError> {
        let entity_type = entity_type::<T>();
        debug!(entity_type, id, ?entity, "Update");
        match self.remote.update_by_id(id, &entity).await {
            Ok(updated) => {
                match self.items.iter().position(|item| item.id() == Some(id)) {
                    Some(position) => {
                        self.items[position] = updated.clone();
                        info!(entity_type, id, "Updated");
                    }
                    None => {
                        debug!(entity_type, id, "Updated remotely; id not mirrored locally");
                    }
                }
                Ok(updated)
            }
            Err(e) => {
                warn!(entity_type, id, error = %e, "Update failed");
                Err(e)
            }
        }
    }

    /// Deletes the remote record addressed by `id`, then filters any local
    /// entity with that id out of the sequence (remainder order preserved).
    pub async fn remove(&mut self, id: u64) -> Result<(), TransportError> {
        let entity_type = entity_type::<T>();
        debug!(entity_type, id, "Delete");
        match self.remote.delete_by_id(id).await {
            Ok(()) => {
                self.items.retain(|item| item.id() != Some(id));
                info!(entity_type, id, size = self.items.len(), "Deleted");
                Ok(())
            }
            Err(e) => {
                warn!(entity_type, id, error = %e, "Delete failed");
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{MockCall, MockCollection};
    use serde::{Deserialize, Serialize};
    use std::collections::HashSet;

    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    struct Note {
        id: Option<u64>,
        body: String,
    }

    impl CollectionEntity for Note {
        fn id(&self) -> Option<u64> {
            self.id
        }
        fn with_id(mut self, id: u64) -> Self {
            self.id = Some(id);
            self
        }
    }

    fn note(id: u64, body: &str) -> Note {
        Note {
            id: Some(id),
            body: body.to_string(),
        }
    }

    fn draft(body: &str) -> Note {
        Note {
            id: None,
            body: body.to_string(),
        }
    }

    fn store_with(seed: Vec<Note>) -> (CollectionStore<Note, MockCollection<Note>>, MockCollection<Note>) {
        let remote = MockCollection::new();
        remote.seed(seed);
        (CollectionStore::new(remote.clone()), remote)
    }

    fn assert_unique_ids(items: &[Note]) {
        let mut seen = HashSet::new();
        for item in items {
            let id = item.id.expect("mirrored entity without id");
            assert!(seen.insert(id), "duplicate id {id} in local sequence");
        }
    }

    #[tokio::test]
    async fn fetch_replaces_local_sequence_wholesale() {
        let (mut store, remote) = store_with(vec![note(1, "a"), note(2, "b")]);

        store.fetch_all().await.unwrap();
        assert_eq!(store.items(), &[note(1, "a"), note(2, "b")]);

        // Remote moves on; the next fetch discards local state entirely.
        remote.seed(vec![note(7, "x")]);
        store.fetch_all().await.unwrap();
        assert_eq!(store.items(), &[note(7, "x")]);
    }

    #[tokio::test]
    async fn add_appends_entity_with_server_assigned_id() {
        let (mut store, _remote) = store_with(vec![note(1, "a"), note(2, "b")]);
        store.fetch_all().await.unwrap();

        let id = store.add(draft("c")).await.unwrap();

        assert_eq!(id, 3, "mock assigns max + 1");
        assert_eq!(store.len(), 3);
        assert_eq!(store.items(), &[note(1, "a"), note(2, "b"), note(3, "c")]);
    }

    #[tokio::test]
    async fn add_into_empty_store_works_without_prior_fetch() {
        let (mut store, remote) = store_with(vec![]);

        let id = store.add(draft("first")).await.unwrap();

        assert_eq!(id, 1);
        assert_eq!(store.items(), &[note(1, "first")]);
        assert_eq!(remote.items(), vec![note(1, "first")]);
    }

    #[tokio::test]
    async fn update_replaces_in_place_and_preserves_position() {
        let (mut store, _remote) = store_with(vec![note(1, "a"), note(2, "b"), note(3, "c")]);
        store.fetch_all().await.unwrap();

        let updated = store.update(2, draft("b-prime")).await.unwrap();

        assert_eq!(updated, note(2, "b-prime"));
        assert_eq!(
            store.items(),
            &[note(1, "a"), note(2, "b-prime"), note(3, "c")]
        );
    }

    #[tokio::test]
    async fn update_of_unmirrored_id_is_local_no_op() {
        // id 99 exists remotely but was never fetched into this store.
        let (mut store, remote) = store_with(vec![note(99, "elsewhere")]);

        let updated = store.update(99, draft("rewritten")).await.unwrap();

        assert_eq!(updated, note(99, "rewritten"));
        assert!(store.items().is_empty(), "local sequence stays untouched");
        assert_eq!(
            remote.items(),
            vec![note(99, "rewritten")],
            "remote mutation still applied"
        );
    }

    #[tokio::test]
    async fn remove_filters_entity_and_preserves_remainder_order() {
        let (mut store, _remote) = store_with(vec![note(1, "a"), note(2, "b")]);
        store.fetch_all().await.unwrap();

        store.remove(1).await.unwrap();

        assert_eq!(store.items(), &[note(2, "b")]);
    }

    #[tokio::test]
    async fn failed_fetch_leaves_sequence_and_surfaces_error() {
        let (mut store, remote) = store_with(vec![note(1, "a")]);
        store.fetch_all().await.unwrap();

        remote.seed(vec![note(9, "z")]);
        remote.fail_next();
        let err = store.fetch_all().await.unwrap_err();

        assert!(matches!(err, TransportError::Status { .. }));
        assert_eq!(store.items(), &[note(1, "a")]);
    }

    #[tokio::test]
    async fn failed_create_leaves_sequence_and_surfaces_error() {
        let (mut store, remote) = store_with(vec![note(1, "a")]);
        store.fetch_all().await.unwrap();

        remote.fail_next();
        let err = store.add(draft("b")).await.unwrap_err();

        assert!(matches!(err, TransportError::Status { .. }));
        assert_eq!(store.items(), &[note(1, "a")]);
        assert_eq!(remote.items(), vec![note(1, "a")], "nothing created remotely");
    }

    #[tokio::test]
    async fn failed_update_leaves_sequence_and_surfaces_error() {
        let (mut store, remote) = store_with(vec![note(1, "a")]);
        store.fetch_all().await.unwrap();

        remote.fail_next();
        let err = store.update(1, draft("a-prime")).await.unwrap_err();

        assert!(matches!(err, TransportError::Status { .. }));
        assert_eq!(store.items(), &[note(1, "a")]);
    }

    #[tokio::test]
    async fn failed_delete_leaves_sequence_and_surfaces_error() {
        let (mut store, remote) = store_with(vec![note(1, "a")]);
        store.fetch_all().await.unwrap();

        remote.fail_next();
        let err = store.remove(1).await.unwrap_err();

        assert!(matches!(err, TransportError::Status { .. }));
        assert_eq!(store.items(), &[note(1, "a")]);
    }

    #[tokio::test]
    async fn delete_of_unknown_remote_id_fails_without_local_change() {
        let (mut store, _remote) = store_with(vec![note(1, "a")]);
        store.fetch_all().await.unwrap();

        let err = store.remove(42).await.unwrap_err();

        assert!(matches!(err, TransportError::Status { .. }));
        assert_eq!(store.items(), &[note(1, "a")]);
    }

    #[tokio::test]
    async fn mixed_operation_sequence_never_duplicates_ids() {
        let (mut store, _remote) = store_with(vec![note(1, "a"), note(2, "b")]);

        store.fetch_all().await.unwrap();
        assert_unique_ids(store.items());

        store.add(draft("c")).await.unwrap();
        assert_unique_ids(store.items());

        store.add(draft("d")).await.unwrap();
        assert_unique_ids(store.items());

        store.update(2, draft("b-prime")).await.unwrap();
        assert_unique_ids(store.items());

        store.remove(1).await.unwrap();
        assert_unique_ids(store.items());

        store.fetch_all().await.unwrap();
        assert_unique_ids(store.items());
        assert_eq!(
            store.items(),
            &[note(2, "b-prime"), note(3, "c"), note(4, "d")]
        );
    }

    #[tokio::test]
    async fn store_issues_exactly_the_requested_calls() {
        let (mut store, remote) = store_with(vec![note(1, "a")]);

        store.fetch_all().await.unwrap();
        store.add(draft("b")).await.unwrap();
        store.update(1, draft("a-prime")).await.unwrap();
        store.remove(2).await.unwrap();

        assert_eq!(
            remote.calls(),
            vec![
                MockCall::List,
                MockCall::Create,
                MockCall::Update(1),
                MockCall::Delete(2),
            ]
        );
    }
}
