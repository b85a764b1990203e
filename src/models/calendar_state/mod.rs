// Calendar state module
// Transient navigation and modal state; never persisted

use chrono::NaiveDate;

use crate::models::event::form::{EventForm, FormDefaults, ValidationErrors};
use crate::models::event::Event;
use crate::utils::date::{next_month, previous_month};

/// The create/edit modal while it is open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventModal {
    /// Event being edited; `None` means create-mode
    pub editing: Option<Event>,
    pub form: EventForm,
    pub errors: ValidationErrors,
    /// Store failure shown above the buttons
    pub error_message: Option<String>,
}

impl EventModal {
    fn create(date: NaiveDate, defaults: &FormDefaults) -> Self {
        Self {
            editing: None,
            form: EventForm::for_date(date, defaults),
            errors: ValidationErrors::new(),
            error_message: None,
        }
    }

    fn edit(event: &Event) -> Self {
        Self {
            editing: Some(event.clone()),
            form: EventForm::from_event(event),
            errors: ValidationErrors::new(),
            error_message: None,
        }
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    pub fn heading(&self) -> &'static str {
        if self.is_editing() {
            "Edit Event"
        } else {
            "Create New Event"
        }
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_editing() {
            "Update Event"
        } else {
            "Create Event"
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarState {
    /// Month on display; only year and month matter for the grid
    pub current_date: NaiveDate,
    pub selected_date: Option<NaiveDate>,
    pub modal: Option<EventModal>,
}

impl CalendarState {
    pub fn new(current_date: NaiveDate) -> Self {
        Self {
            current_date,
            selected_date: None,
            modal: None,
        }
    }

    pub fn set_current_date(&mut self, date: NaiveDate) {
        self.current_date = date;
    }

    pub fn next_month(&mut self) {
        self.current_date = next_month(self.current_date);
    }

    pub fn previous_month(&mut self) {
        self.current_date = previous_month(self.current_date);
    }

    /// Jump back to today's month and focus today.
    pub fn go_to_today(&mut self, today: NaiveDate) {
        self.current_date = today;
        self.selected_date = Some(today);
    }

    pub fn set_selected_date(&mut self, date: Option<NaiveDate>) {
        self.selected_date = date;
    }

    /// Open the modal: create-mode for `None`, edit-mode for an event.
    pub fn open_modal(&mut self, event: Option<&Event>, today: NaiveDate, defaults: &FormDefaults) {
        let modal = match event {
            Some(event) => EventModal::edit(event),
            None => EventModal::create(self.selected_date.unwrap_or(today), defaults),
        };
        self.modal = Some(modal);
    }

    /// Close the modal, always leaving edit-mode.
    pub fn close_modal(&mut self) {
        self.modal = None;
    }

    /// Select a day and start creating an event on it.
    pub fn click_day(&mut self, date: NaiveDate, today: NaiveDate, defaults: &FormDefaults) {
        self.selected_date = Some(date);
        self.open_modal(None, today, defaults);
    }

    pub fn is_modal_open(&self) -> bool {
        self.modal.is_some()
    }

    pub fn editing_event(&self) -> Option<&Event> {
        self.modal.as_ref().and_then(|modal| modal.editing.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::event::{EventDraft, EventId};

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn sample_event() -> Event {
        EventDraft::new(
            "Standup",
            ymd(2024, 3, 4),
            "09:00".parse().unwrap(),
            "09:15".parse().unwrap(),
        )
        .into_event(EventId::from("event_1"))
    }

    #[test]
    fn test_month_navigation() {
        let mut state = CalendarState::new(ymd(2024, 1, 31));
        state.next_month();
        assert_eq!(state.current_date, ymd(2024, 2, 29));
        state.previous_month();
        assert_eq!(state.current_date, ymd(2024, 1, 29));
    }

    #[test]
    fn test_go_to_today_selects_today() {
        let mut state = CalendarState::new(ymd(2020, 6, 1));
        state.go_to_today(ymd(2024, 3, 4));
        assert_eq!(state.current_date, ymd(2024, 3, 4));
        assert_eq!(state.selected_date, Some(ymd(2024, 3, 4)));
    }

    #[test]
    fn test_open_without_event_is_create_mode() {
        let mut state = CalendarState::new(ymd(2024, 3, 1));
        state.open_modal(None, ymd(2024, 3, 10), &FormDefaults::default());

        assert!(state.is_modal_open());
        assert!(state.editing_event().is_none());
        let modal = state.modal.as_ref().unwrap();
        assert_eq!(modal.heading(), "Create New Event");
        assert_eq!(modal.form.date, "2024-03-10");
    }

    #[test]
    fn test_create_mode_prefers_selected_date() {
        let mut state = CalendarState::new(ymd(2024, 3, 1));
        state.set_selected_date(Some(ymd(2024, 3, 20)));
        state.open_modal(None, ymd(2024, 3, 10), &FormDefaults::default());
        assert_eq!(state.modal.unwrap().form.date, "2024-03-20");
    }

    #[test]
    fn test_open_with_event_is_edit_mode() {
        let event = sample_event();
        let mut state = CalendarState::new(ymd(2024, 3, 1));
        state.open_modal(Some(&event), ymd(2024, 3, 10), &FormDefaults::default());

        assert_eq!(state.editing_event(), Some(&event));
        let modal = state.modal.as_ref().unwrap();
        assert_eq!(modal.submit_label(), "Update Event");
        assert_eq!(modal.form.title, "Standup");
        assert_eq!(modal.form.end_time, "09:15");
    }

    #[test]
    fn test_close_clears_edit_mode() {
        let event = sample_event();
        let mut state = CalendarState::new(ymd(2024, 3, 1));
        state.open_modal(Some(&event), ymd(2024, 3, 10), &FormDefaults::default());
        state.close_modal();

        assert!(!state.is_modal_open());
        assert!(state.editing_event().is_none());
    }

    #[test]
    fn test_click_day_selects_and_opens_create() {
        let mut state = CalendarState::new(ymd(2024, 3, 1));
        state.click_day(ymd(2024, 3, 12), ymd(2024, 3, 10), &FormDefaults::default());
        assert_eq!(state.selected_date, Some(ymd(2024, 3, 12)));
        assert_eq!(state.modal.unwrap().form.date, "2024-03-12");
    }
}
