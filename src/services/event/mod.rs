//! Calendar event store entry point.
//! Owns the in-memory event collection and mirrors it to a durable store,
//! with the operations organized across focused submodules.

use thiserror::Error;

use crate::models::event::{Event, InvalidEvent};
use crate::services::storage::DurableStore;

pub mod crud;
mod id;
mod persistence;
pub mod queries;

pub use id::generate_event_id;
pub use persistence::{SnapshotError, EVENTS_STORAGE_KEY};

/// Whether mutations still reach the durable store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersistenceStatus {
    Durable,
    /// A read or write failed; changes live in memory for this session
    Degraded,
}

/// Failure inside a store operation, shown to the user as a generic message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EventStoreError {
    #[error("Failed to create event. Please try again.")]
    Create(#[source] InvalidEvent),
    #[error("Failed to update event. Please try again.")]
    Update(#[source] InvalidEvent),
}

/// The single authoritative event collection.
pub struct EventStore<S: DurableStore> {
    pub(crate) storage: S,
    pub(crate) events: Vec<Event>,
    pub(crate) persistence: PersistenceStatus,
}

impl<S: DurableStore> EventStore<S> {
    /// Empty store that writes to `storage` without reading it first.
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            events: Vec::new(),
            persistence: PersistenceStatus::Durable,
        }
    }

    /// Store initialized from the snapshot in `storage`, if one exists.
    pub fn open(storage: S) -> Self {
        let mut store = Self::new(storage);
        store.restore();
        store
    }

    pub fn persistence(&self) -> PersistenceStatus {
        self.persistence
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}
