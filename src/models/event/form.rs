//! Event form state and its validator.
//!
//! The form keeps the raw text of each input so the user can type freely;
//! `validate` turns it into an [`EventDraft`] or a set of field-scoped
//! messages. Validation is pure and runs before anything reaches the store.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use thiserror::Error;

use super::{ClockTime, Event, EventDraft, ParseClockTimeError, DEFAULT_EVENT_COLOR};
use crate::utils::date::{date_key, parse_date_key};

pub const TITLE_REQUIRED: &str = "Event title is required";
pub const DATE_REQUIRED: &str = "Date is required";
pub const DATE_FORMAT: &str = "Date must be in YYYY-MM-DD format";
pub const START_TIME_REQUIRED: &str = "Start time is required";
pub const END_TIME_REQUIRED: &str = "End time is required";
pub const TIME_FORMAT: &str = "Time must be in HH:MM format";
pub const TIME_ORDER: &str = "Start time must be before end time";

/// Input fields of the event form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FormField {
    Title,
    Description,
    Date,
    StartTime,
    EndTime,
    Color,
}

impl FormField {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Title => "Event Title",
            Self::Description => "Description",
            Self::Date => "Date",
            Self::StartTime => "Start Time",
            Self::EndTime => "End Time",
            Self::Color => "Event Color",
        }
    }
}

/// Field-scoped validation messages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("{}", join_messages(.errors))]
pub struct ValidationErrors {
    errors: BTreeMap<FormField, String>,
}

fn join_messages(errors: &BTreeMap<FormField, String>) -> String {
    errors
        .values()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join("; ")
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message; the first message for a field wins.
    pub fn add(&mut self, field: FormField, message: impl Into<String>) {
        self.errors.entry(field).or_insert_with(|| message.into());
    }

    pub fn get(&self, field: FormField) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FormField, &str)> {
        self.errors.iter().map(|(field, msg)| (*field, msg.as_str()))
    }
}

/// Values a fresh create-mode form starts with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormDefaults {
    pub start_time: ClockTime,
    pub end_time: ClockTime,
    pub color: String,
}

impl Default for FormDefaults {
    fn default() -> Self {
        Self {
            start_time: ClockTime::new(9, 0).unwrap_or(ClockTime::MIDNIGHT),
            end_time: ClockTime::new(10, 0).unwrap_or(ClockTime::MIDNIGHT),
            color: DEFAULT_EVENT_COLOR.to_string(),
        }
    }
}

/// Raw text of every form input.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EventForm {
    pub title: String,
    pub description: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub color: String,
}

impl EventForm {
    /// Blank create-mode form for `date`.
    pub fn for_date(date: NaiveDate, defaults: &FormDefaults) -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            date: date_key(date),
            start_time: defaults.start_time.to_string(),
            end_time: defaults.end_time.to_string(),
            color: defaults.color.clone(),
        }
    }

    /// Edit-mode form pre-populated from the event's current values.
    pub fn from_event(event: &Event) -> Self {
        Self {
            title: event.title.clone(),
            description: event.description.clone().unwrap_or_default(),
            date: event.date_key(),
            start_time: event.start_time.to_string(),
            end_time: event.end_time.to_string(),
            color: event.display_color().to_string(),
        }
    }

    /// Validate every field, collecting all messages.
    pub fn validate(&self) -> Result<EventDraft, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let title = self.title.trim();
        if title.is_empty() {
            errors.add(FormField::Title, TITLE_REQUIRED);
        }

        let date = if self.date.trim().is_empty() {
            errors.add(FormField::Date, DATE_REQUIRED);
            None
        } else {
            let parsed = parse_date_key(self.date.trim());
            if parsed.is_none() {
                errors.add(FormField::Date, DATE_FORMAT);
            }
            parsed
        };

        let start_time = parse_time_field(
            &self.start_time,
            FormField::StartTime,
            START_TIME_REQUIRED,
            &mut errors,
        );
        let end_time = parse_time_field(
            &self.end_time,
            FormField::EndTime,
            END_TIME_REQUIRED,
            &mut errors,
        );

        if let (Some(start), Some(end)) = (start_time, end_time) {
            if start.minutes_since_midnight() >= end.minutes_since_midnight() {
                errors.add(FormField::EndTime, TIME_ORDER);
            }
        }

        match (date, start_time, end_time) {
            (Some(date), Some(start_time), Some(end_time)) if errors.is_empty() => Ok(EventDraft {
                title: title.to_string(),
                description: non_blank(&self.description),
                date,
                start_time,
                end_time,
                color: non_blank(&self.color).map(|c| c.trim().to_string()),
            }),
            _ => Err(errors),
        }
    }
}

fn parse_time_field(
    raw: &str,
    field: FormField,
    required_message: &str,
    errors: &mut ValidationErrors,
) -> Option<ClockTime> {
    match raw.parse::<ClockTime>() {
        Ok(time) => Some(time),
        Err(ParseClockTimeError::Empty) => {
            errors.add(field, required_message);
            None
        }
        Err(ParseClockTimeError::Format(_)) => {
            errors.add(field, TIME_FORMAT);
            None
        }
    }
}

fn non_blank(value: &str) -> Option<String> {
    (!value.trim().is_empty()).then(|| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::event::EventId;
    use pretty_assertions::assert_eq;

    fn filled_form() -> EventForm {
        EventForm {
            title: "Standup".to_string(),
            description: String::new(),
            date: "2024-03-04".to_string(),
            start_time: "09:00".to_string(),
            end_time: "10:00".to_string(),
            color: "#3b82f6".to_string(),
        }
    }

    #[test]
    fn test_accepts_ordered_times() {
        let draft = filled_form().validate().unwrap();
        assert_eq!(draft.title, "Standup");
        assert_eq!(draft.date, NaiveDate::from_ymd_opt(2024, 3, 4).unwrap());
        assert_eq!(draft.description, None);
        assert_eq!(draft.color.as_deref(), Some("#3b82f6"));
    }

    #[test]
    fn test_rejects_reversed_times_on_end_time() {
        let mut form = filled_form();
        form.start_time = "10:00".to_string();
        form.end_time = "09:00".to_string();

        let errors = form.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(FormField::EndTime), Some(TIME_ORDER));
        assert_eq!(errors.get(FormField::StartTime), None);
    }

    #[test]
    fn test_rejects_equal_times() {
        let mut form = filled_form();
        form.end_time = "09:00".to_string();
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.get(FormField::EndTime), Some(TIME_ORDER));
    }

    #[test]
    fn test_title_is_trimmed_and_required() {
        let mut form = filled_form();
        form.title = "   ".to_string();
        assert_eq!(
            form.validate().unwrap_err().get(FormField::Title),
            Some(TITLE_REQUIRED)
        );

        form.title = "  Review  ".to_string();
        assert_eq!(form.validate().unwrap().title, "Review");
    }

    #[test]
    fn test_missing_fields_collect_all_messages() {
        let form = EventForm::default();
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.get(FormField::Title), Some(TITLE_REQUIRED));
        assert_eq!(errors.get(FormField::Date), Some(DATE_REQUIRED));
        assert_eq!(errors.get(FormField::StartTime), Some(START_TIME_REQUIRED));
        assert_eq!(errors.get(FormField::EndTime), Some(END_TIME_REQUIRED));
        assert_eq!(errors.get(FormField::Description), None);
        assert_eq!(errors.get(FormField::Color), None);
    }

    #[test]
    fn test_malformed_values() {
        let mut form = filled_form();
        form.date = "04/03/2024".to_string();
        form.start_time = "9am".to_string();
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.get(FormField::Date), Some(DATE_FORMAT));
        assert_eq!(errors.get(FormField::StartTime), Some(TIME_FORMAT));
        // No ordering message when one side is unparsable
        assert_eq!(errors.get(FormField::EndTime), None);
    }

    #[test]
    fn test_error_display_joins_messages() {
        let mut form = filled_form();
        form.title.clear();
        form.end_time = "08:00".to_string();
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.to_string(), format!("{TITLE_REQUIRED}; {TIME_ORDER}"));
    }

    #[test]
    fn test_for_date_uses_defaults() {
        let date = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
        let form = EventForm::for_date(date, &FormDefaults::default());
        assert_eq!(form.date, "2024-12-31");
        assert_eq!(form.start_time, "09:00");
        assert_eq!(form.end_time, "10:00");
        assert_eq!(form.color, DEFAULT_EVENT_COLOR);
        assert!(form.title.is_empty());
    }

    #[test]
    fn test_from_event_prepopulates() {
        let event = EventDraft::new(
            "Dentist",
            NaiveDate::from_ymd_opt(2024, 5, 2).unwrap(),
            "14:30".parse().unwrap(),
            "15:00".parse().unwrap(),
        )
        .with_description("Bring card")
        .into_event(EventId::from("event_2"));

        let form = EventForm::from_event(&event);
        assert_eq!(form.title, "Dentist");
        assert_eq!(form.description, "Bring card");
        assert_eq!(form.date, "2024-05-02");
        assert_eq!(form.start_time, "14:30");
        assert_eq!(form.end_time, "15:00");
        assert_eq!(form.color, DEFAULT_EVENT_COLOR);

        let draft = form.validate().unwrap();
        assert_eq!(draft.description.as_deref(), Some("Bring card"));
    }
}
