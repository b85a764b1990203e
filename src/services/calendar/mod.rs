//! Calendar context.
//!
//! Bundles the navigation/modal state with the event store so views receive a
//! single value through their constructor instead of reaching for globals.

use chrono::NaiveDate;
use thiserror::Error;

use crate::models::calendar_state::{CalendarState, EventModal};
use crate::models::event::form::{FormDefaults, ValidationErrors};
use crate::models::event::{Event, EventDraft, EventId, EventPatch};
use crate::services::event::{EventStore, EventStoreError, PersistenceStatus};
use crate::services::storage::DurableStore;
use crate::utils::date::{calendar_grid, date_key, is_same_day, is_same_month};

/// One square of the month grid with the events filed under it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayCell {
    pub date: NaiveDate,
    pub key: String,
    pub events: Vec<Event>,
    pub is_current_month: bool,
    pub is_today: bool,
    pub is_selected: bool,
}

impl DayCell {
    pub fn has_events(&self) -> bool {
        !self.events.is_empty()
    }

    /// Events to draw plus how many were left out.
    pub fn visible_events(&self, limit: usize) -> (&[Event], usize) {
        let shown = self.events.len().min(limit);
        (&self.events[..shown], self.events.len() - shown)
    }
}

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("{0}")]
    Validation(ValidationErrors),
    #[error(transparent)]
    Store(#[from] EventStoreError),
    #[error("The event modal is not open")]
    ModalClosed,
}

pub struct CalendarContext<S: DurableStore> {
    state: CalendarState,
    store: EventStore<S>,
    defaults: FormDefaults,
}

impl<S: DurableStore> CalendarContext<S> {
    pub fn new(store: EventStore<S>, current_date: NaiveDate, defaults: FormDefaults) -> Self {
        Self {
            state: CalendarState::new(current_date),
            store,
            defaults,
        }
    }

    pub fn state(&self) -> &CalendarState {
        &self.state
    }

    pub fn store(&self) -> &EventStore<S> {
        &self.store
    }

    pub fn defaults(&self) -> &FormDefaults {
        &self.defaults
    }

    pub fn persistence(&self) -> PersistenceStatus {
        self.store.persistence()
    }

    pub fn current_date(&self) -> NaiveDate {
        self.state.current_date
    }

    /// The 42 cells for the month on display.
    pub fn month_grid(&self, today: NaiveDate) -> Vec<DayCell> {
        let current = self.state.current_date;
        let selected = self.state.selected_date;

        calendar_grid(current)
            .into_iter()
            .map(|date| DayCell {
                date,
                key: date_key(date),
                events: self.store.events_by_date(date).into_iter().cloned().collect(),
                is_current_month: is_same_month(date, current),
                is_today: is_same_day(date, today),
                is_selected: selected.is_some_and(|s| is_same_day(date, s)),
            })
            .collect()
    }

    pub fn events_by_date(&self, date: NaiveDate) -> Vec<&Event> {
        self.store.events_by_date(date)
    }

    pub fn next_month(&mut self) {
        self.state.next_month();
    }

    pub fn previous_month(&mut self) {
        self.state.previous_month();
    }

    pub fn go_to_today(&mut self, today: NaiveDate) {
        self.state.go_to_today(today);
    }

    pub fn set_current_date(&mut self, date: NaiveDate) {
        self.state.set_current_date(date);
    }

    pub fn set_selected_date(&mut self, date: Option<NaiveDate>) {
        self.state.set_selected_date(date);
    }

    pub fn click_day(&mut self, date: NaiveDate, today: NaiveDate) {
        self.state.click_day(date, today, &self.defaults);
    }

    /// Open the modal for a new event, or for editing the event with `id`.
    ///
    /// An unknown id falls back to create-mode.
    pub fn open_modal(&mut self, id: Option<&EventId>, today: NaiveDate) {
        let event = id.and_then(|id| self.store.get(id)).cloned();
        if id.is_some() && event.is_none() {
            log::warn!("Cannot edit missing event; opening a blank form");
        }
        self.state.open_modal(event.as_ref(), today, &self.defaults);
    }

    pub fn close_modal(&mut self) {
        self.state.close_modal();
    }

    pub fn modal(&self) -> Option<&EventModal> {
        self.state.modal.as_ref()
    }

    pub fn modal_mut(&mut self) -> Option<&mut EventModal> {
        self.state.modal.as_mut()
    }

    /// Validate the form and create or update accordingly.
    ///
    /// Closes the modal on success. On failure the modal stays open with the
    /// field errors or the store message filled in.
    pub fn submit_modal(&mut self) -> Result<Event, SubmitError> {
        let modal = self.state.modal.as_mut().ok_or(SubmitError::ModalClosed)?;

        let draft = match modal.form.validate() {
            Ok(draft) => draft,
            Err(errors) => {
                modal.errors = errors.clone();
                modal.error_message = None;
                return Err(SubmitError::Validation(errors));
            }
        };
        modal.errors = ValidationErrors::new();

        let result = match modal.editing.as_ref() {
            Some(existing) => {
                let id = existing.id.clone();
                match self.store.update(&id, EventPatch::replace_with(draft.clone())) {
                    Ok(Some(event)) => Ok(event),
                    // Deleted underneath the modal; recreate rather than lose the input.
                    Ok(None) => self.store.create(draft).map_err(SubmitError::from),
                    Err(err) => Err(err.into()),
                }
            }
            None => self.store.create(draft).map_err(SubmitError::from),
        };

        match result {
            Ok(event) => {
                self.state.close_modal();
                Ok(event)
            }
            Err(err) => {
                if let Some(modal) = self.state.modal.as_mut() {
                    modal.error_message = Some(err.to_string());
                }
                Err(err)
            }
        }
    }

    /// Delete the event being edited and close the modal.
    pub fn delete_editing(&mut self) -> Option<Event> {
        let id = self.state.editing_event()?.id.clone();
        let removed = self.store.delete(&id);
        self.state.close_modal();
        removed
    }

    pub fn create_event(&mut self, draft: EventDraft) -> Result<Event, EventStoreError> {
        self.store.create(draft)
    }

    pub fn update_event(
        &mut self,
        id: &EventId,
        patch: EventPatch,
    ) -> Result<Option<Event>, EventStoreError> {
        self.store.update(id, patch)
    }

    pub fn delete_event(&mut self, id: &EventId) -> Option<Event> {
        self.store.delete(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::event::form::{FormField, TIME_ORDER, TITLE_REQUIRED};
    use crate::models::event::ClockTime;
    use crate::services::storage::MemoryStore;
    use pretty_assertions::assert_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn time(h: u32, m: u32) -> ClockTime {
        ClockTime::new(h, m).unwrap()
    }

    fn context() -> CalendarContext<MemoryStore> {
        CalendarContext::new(
            EventStore::new(MemoryStore::new()),
            date(2024, 3, 15),
            FormDefaults::default(),
        )
    }

    fn standup() -> EventDraft {
        EventDraft::new("Standup", date(2024, 3, 4), time(9, 0), time(9, 15))
    }

    #[test]
    fn test_month_grid_marks_cells() {
        let mut ctx = context();
        ctx.create_event(standup()).unwrap();
        ctx.set_selected_date(Some(date(2024, 3, 4)));

        let cells = ctx.month_grid(date(2024, 3, 15));
        assert_eq!(cells.len(), 42);
        assert_eq!(cells[0].key, "2024-02-26");
        assert!(!cells[0].is_current_month);

        let monday = cells.iter().find(|c| c.key == "2024-03-04").unwrap();
        assert!(monday.is_selected);
        assert!(monday.has_events());
        assert_eq!(monday.events[0].title, "Standup");

        let today: Vec<_> = cells.iter().filter(|c| c.is_today).collect();
        assert_eq!(today.len(), 1);
        assert_eq!(today[0].key, "2024-03-15");
    }

    #[test]
    fn test_visible_events_reports_overflow() {
        let mut ctx = context();
        for _ in 0..5 {
            ctx.create_event(standup()).unwrap();
        }
        let cells = ctx.month_grid(date(2024, 3, 15));
        let cell = cells.iter().find(|c| c.key == "2024-03-04").unwrap();

        let (shown, hidden) = cell.visible_events(3);
        assert_eq!(shown.len(), 3);
        assert_eq!(hidden, 2);
    }

    #[test]
    fn test_click_day_then_submit_creates() {
        let mut ctx = context();
        ctx.click_day(date(2024, 3, 4), date(2024, 3, 15));

        let modal = ctx.modal_mut().unwrap();
        assert_eq!(modal.form.date, "2024-03-04");
        modal.form.title = "Standup".to_string();

        let event = ctx.submit_modal().unwrap();
        assert_eq!(event.start_time, time(9, 0));
        assert!(ctx.modal().is_none());
        assert_eq!(ctx.events_by_date(date(2024, 3, 4)).len(), 1);
    }

    #[test]
    fn test_invalid_submit_keeps_modal_open() {
        let mut ctx = context();
        ctx.open_modal(None, date(2024, 3, 15));
        {
            let modal = ctx.modal_mut().unwrap();
            modal.form.start_time = "10:00".to_string();
            modal.form.end_time = "09:00".to_string();
        }

        let err = ctx.submit_modal().unwrap_err();
        assert!(matches!(err, SubmitError::Validation(_)));

        let modal = ctx.modal().unwrap();
        assert_eq!(modal.errors.get(FormField::Title), Some(TITLE_REQUIRED));
        assert_eq!(modal.errors.get(FormField::EndTime), Some(TIME_ORDER));
        assert!(ctx.store().is_empty());
    }

    #[test]
    fn test_edit_submit_updates_in_place() {
        let mut ctx = context();
        let created = ctx.create_event(standup()).unwrap();

        ctx.open_modal(Some(&created.id), date(2024, 3, 15));
        assert_eq!(ctx.modal().unwrap().heading(), "Edit Event");
        ctx.modal_mut().unwrap().form.title = "Daily standup".to_string();

        let updated = ctx.submit_modal().unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.title, "Daily standup");
        assert_eq!(ctx.store().len(), 1);
    }

    #[test]
    fn test_submit_without_modal() {
        let mut ctx = context();
        assert!(matches!(ctx.submit_modal(), Err(SubmitError::ModalClosed)));
    }

    #[test]
    fn test_open_modal_with_unknown_id_is_create_mode() {
        let mut ctx = context();
        ctx.open_modal(Some(&EventId::from("missing")), date(2024, 3, 15));
        assert!(!ctx.modal().unwrap().is_editing());
    }

    #[test]
    fn test_delete_editing_closes_modal() {
        let mut ctx = context();
        let created = ctx.create_event(standup()).unwrap();
        ctx.open_modal(Some(&created.id), date(2024, 3, 15));

        let removed = ctx.delete_editing().unwrap();
        assert_eq!(removed.id, created.id);
        assert!(ctx.modal().is_none());
        assert!(ctx.store().is_empty());
    }

    #[test]
    fn test_delete_editing_in_create_mode_is_noop() {
        let mut ctx = context();
        ctx.create_event(standup()).unwrap();
        ctx.open_modal(None, date(2024, 3, 15));

        assert!(ctx.delete_editing().is_none());
        assert!(ctx.modal().is_some());
        assert_eq!(ctx.store().len(), 1);
    }

    #[test]
    fn test_navigation_pass_through() {
        let mut ctx = context();
        ctx.next_month();
        assert_eq!(ctx.current_date(), date(2024, 4, 15));
        ctx.previous_month();
        ctx.previous_month();
        assert_eq!(ctx.current_date(), date(2024, 2, 15));
        ctx.go_to_today(date(2024, 3, 20));
        assert_eq!(ctx.state().selected_date, Some(date(2024, 3, 20)));
    }
}
