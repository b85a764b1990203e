use std::collections::HashSet;

use super::id::generate_event_id;
use super::{EventStore, EventStoreError};
use crate::models::event::{Event, EventDraft, EventId, EventPatch};
use crate::services::storage::DurableStore;

impl<S: DurableStore> EventStore<S> {
    /// Add a new event with a freshly generated id.
    pub fn create(&mut self, draft: EventDraft) -> Result<Event, EventStoreError> {
        draft.validate().map_err(|e| {
            log::error!("Failed to create event: {e}");
            EventStoreError::Create(e)
        })?;

        let event = draft.into_event(self.fresh_id());
        self.events.push(event.clone());
        log::debug!("Created event {} on {}", event.id, event.date_key());

        self.persist();
        Ok(event)
    }

    /// Merge `patch` into the event with `id`.
    ///
    /// Returns `Ok(None)` without touching anything when no such event exists.
    pub fn update(
        &mut self,
        id: &EventId,
        patch: EventPatch,
    ) -> Result<Option<Event>, EventStoreError> {
        let Some(index) = self.position(id) else {
            log::debug!("Update ignored: no event with id {id}");
            return Ok(None);
        };

        let mut updated = self.events[index].clone();
        updated.apply(patch);
        updated.validate().map_err(|e| {
            log::error!("Failed to update event {id}: {e}");
            EventStoreError::Update(e)
        })?;

        self.events[index] = updated.clone();
        log::debug!("Updated event {id}");

        self.persist();
        Ok(Some(updated))
    }

    /// Remove the event with `id`, returning it if it existed.
    pub fn delete(&mut self, id: &EventId) -> Option<Event> {
        let Some(index) = self.position(id) else {
            log::debug!("Delete ignored: no event with id {id}");
            return None;
        };

        let removed = self.events.remove(index);
        log::debug!("Deleted event {id}");

        self.persist();
        Some(removed)
    }

    /// Replace the whole collection. Does not write to storage.
    pub fn load(&mut self, events: Vec<Event>) {
        let mut seen = HashSet::new();
        let total = events.len();
        self.events = events
            .into_iter()
            .filter(|event| seen.insert(event.id.clone()))
            .collect();

        if self.events.len() != total {
            log::warn!(
                "Dropped {} events with duplicate ids while loading",
                total - self.events.len()
            );
        }
        log::info!("Loaded {} events", self.events.len());
    }

    fn position(&self, id: &EventId) -> Option<usize> {
        self.events.iter().position(|event| &event.id == id)
    }

    fn fresh_id(&self) -> EventId {
        loop {
            let id = generate_event_id();
            if self.position(&id).is_none() {
                return id;
            }
        }
    }
}
