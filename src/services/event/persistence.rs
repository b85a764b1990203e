use thiserror::Error;

use super::{EventStore, PersistenceStatus};
use crate::models::event::Event;
use crate::services::storage::{DurableStore, StorageError};

/// Storage key the event snapshot lives under.
pub const EVENTS_STORAGE_KEY: &str = "calendar-events";

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("failed to (de)serialize event snapshot: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn read_snapshot<S: DurableStore>(storage: &S) -> Result<Option<Vec<Event>>, SnapshotError> {
    let Some(data) = storage.read(EVENTS_STORAGE_KEY)? else {
        return Ok(None);
    };
    let events = serde_json::from_str(&data)?;
    Ok(Some(events))
}

pub fn write_snapshot<S: DurableStore>(storage: &S, events: &[Event]) -> Result<(), SnapshotError> {
    let data = serde_json::to_string(events)?;
    storage.write(EVENTS_STORAGE_KEY, &data)?;
    Ok(())
}

impl<S: DurableStore> EventStore<S> {
    pub(super) fn restore(&mut self) {
        match read_snapshot(&self.storage) {
            Ok(Some(events)) => self.load(events),
            Ok(None) => log::info!("No event snapshot found; starting empty"),
            Err(err) => {
                log::error!("Failed to load events from storage: {err}");
                self.degrade();
            }
        }
    }

    /// Write the full collection, overwriting the previous snapshot.
    pub(super) fn persist(&mut self) {
        if self.persistence == PersistenceStatus::Degraded {
            log::debug!("Skipping snapshot write; persistence is degraded");
            return;
        }

        if let Err(err) = write_snapshot(&self.storage, &self.events) {
            log::error!("Failed to save events to storage: {err}");
            if let SnapshotError::Storage(StorageError::QuotaExceeded { .. }) = err {
                log::warn!("Storage quota exceeded. Consider clearing old data.");
            }
            self.degrade();
        }
    }

    fn degrade(&mut self) {
        log::warn!("Events are kept in memory but will not be persisted this session");
        self.persistence = PersistenceStatus::Degraded;
    }
}
