//! # Mock Remote & Testing Guide
//!
//! [`MockCollection<T>`] implements the same [`RemoteCollection`] contract
//! as the production HTTP client but operates entirely in-memory. It behaves
//! like a tiny json-server: records live in a shared list, ids are assigned
//! `max + 1` style on create, and updates/deletes of unknown ids answer with
//! a non-2xx style [`TransportError`].
//!
//! ## When to use the mock vs a real server
//!
//! | Feature | MockCollection | In-process axum server |
//! |---------|----------------|------------------------|
//! | **Speed** | Instant (in-memory) | Fast (real sockets) |
//! | **Determinism** | 100% deterministic | Subject to the network stack |
//! | **Error injection** | Easy (`fail_next`) | Requires dedicated routes |
//! | **Covers** | Store reconciliation logic | The HTTP client itself |
//!
//! Use the mock to test code *around* the store; use a real in-process
//! server (see the crate's integration tests) to test `HttpCollection`.
//!
//! ## Failure injection
//!
//! `fail_next()` arms a one-shot failure: the next remote call, whatever it
//! is, fails with a `TransportError` and leaves the mock's records
//! untouched. This is how "failure leaves local state untouched" is
//! verified for every store operation.
//!
//! ## Call log
//!
//! Every call is recorded as a [`MockCall`], so tests can assert that the
//! store issued exactly the calls it was asked to issue - no retries, no
//! deduplication, no hidden re-fetches.
//!
//! ```ignore
//! let remote = MockCollection::new();
//! remote.seed(vec![note(1, "a")]);
//! let mut store = CollectionStore::new(remote.clone());
//!
//! store.fetch_all().await.unwrap();
//! store.remove(1).await.unwrap();
//!
//! assert_eq!(remote.calls(), vec![MockCall::List, MockCall::Delete(1)]);
//! assert!(remote.items().is_empty());
//! ```

use crate::client::RemoteCollection;
use crate::entity::CollectionEntity;
use crate::error::TransportError;
use async_trait::async_trait;
use reqwest::StatusCode;
use std::sync::{Arc, Mutex};

/// One recorded remote call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockCall {
    List,
    Create,
    Update(u64),
    Delete(u64),
}

struct MockState<T> {
    items: Vec<T>,
    next_id: u64,
    fail_next: bool,
    calls: Vec<MockCall>,
}

/// In-memory fake remote collection.
///
/// Cloning yields another handle to the same shared state, so a test can
/// keep one handle for assertions while the store owns the other.
pub struct MockCollection<T> {
    state: Arc<Mutex<MockState<T>>>,
}

impl<T> Clone for MockCollection<T> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
        }
    }
}

impl<T: CollectionEntity> Default for MockCollection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: CollectionEntity> MockCollection<T> {
    /// Creates an empty mock remote; the first created record gets id 1.
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(MockState {
                items: Vec::new(),
                next_id: 1,
                fail_next: false,
                calls: Vec::new(),
            })),
        }
    }

    /// Replaces the remote records wholesale and advances the id counter
    /// past the largest seeded id.
    pub fn seed(&self, items: Vec<T>) {
        let mut state = self.lock();
        state.next_id = items
            .iter()
            .filter_map(CollectionEntity::id)
            .max()
            .map_or(1, |max| max + 1);
        state.items = items;
    }

    /// Arms a one-shot failure: the next call fails and is not applied.
    pub fn fail_next(&self) {
        self.lock().fail_next = true;
    }

    /// Snapshot of the remote records.
    pub fn items(&self) -> Vec<T> {
        self.lock().items.clone()
    }

    /// Every call received so far, in order.
    pub fn calls(&self) -> Vec<MockCall> {
        self.lock().calls.clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MockState<T>> {
        self.state.lock().expect("mock state poisoned")
    }

    /// Records the call, then consumes an armed failure if present.
    fn admit(&self, call: MockCall) -> Result<std::sync::MutexGuard<'_, MockState<T>>, TransportError> {
        let mut state = self.lock();
        state.calls.push(call);
        if state.fail_next {
            state.fail_next = false;
            return Err(TransportError::Status {
                status: StatusCode::SERVICE_UNAVAILABLE,
                url: "mock://collection".to_string(),
            });
        }
        Ok(state)
    }
}

fn not_found(id: u64) -> TransportError {
    TransportError::Status {
        status: StatusCode::NOT_FOUND,
        url: format!("mock://collection/{id}"),
    }
}

#[async_trait]
impl<T: CollectionEntity> RemoteCollection<T> for MockCollection<T> {
    async fn list(&self) -> Result<Vec<T>, TransportError> {
        let state = self.admit(MockCall::List)?;
        Ok(state.items.clone())
    }

    async fn create(&self, entity: &T) -> Result<T, TransportError> {
        let mut state = self.admit(MockCall::Create)?;
        let id = state.next_id;
        state.next_id += 1;
        let created = entity.clone().with_id(id);
        state.items.push(created.clone());
        Ok(created)
    }

    async fn update_by_id(&self, id: u64, entity: &T) -> Result<T, TransportError> {
        let mut state = self.admit(MockCall::Update(id))?;
        let position = state
            .items
            .iter()
            .position(|item| item.id() == Some(id))
            .ok_or_else(|| not_found(id))?;
        let updated = entity.clone().with_id(id);
        state.items[position] = updated.clone();
        Ok(updated)
    }

    async fn delete_by_id(&self, id: u64) -> Result<(), TransportError> {
        let mut state = self.admit(MockCall::Delete(id))?;
        let position = state
            .items
            .iter()
            .position(|item| item.id() == Some(id))
            .ok_or_else(|| not_found(id))?;
        state.items.remove(position);
        Ok(())
    }
}
