use chrono::NaiveDate;

use super::EventStore;
use crate::models::event::{Event, EventId};
use crate::services::storage::DurableStore;
use crate::utils::date::parse_date_key;

impl<S: DurableStore> EventStore<S> {
    /// Every event, in insertion order.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn get(&self, id: &EventId) -> Option<&Event> {
        self.events.iter().find(|event| &event.id == id)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Events filed under `date`, in insertion order.
    pub fn events_by_date(&self, date: NaiveDate) -> Vec<&Event> {
        self.events.iter().filter(|event| event.date == date).collect()
    }

    /// Events whose date key equals `key`; empty for keys that are not
    /// canonical `YYYY-MM-DD` dates.
    pub fn events_by_key(&self, key: &str) -> Vec<&Event> {
        match parse_date_key(key) {
            Some(date) => self.events_by_date(date),
            None => Vec::new(),
        }
    }

    /// Events dated within `start..=end`, in insertion order.
    pub fn find_by_date_range(&self, start: NaiveDate, end: NaiveDate) -> Vec<&Event> {
        self.events
            .iter()
            .filter(|event| event.date >= start && event.date <= end)
            .collect()
    }
}
