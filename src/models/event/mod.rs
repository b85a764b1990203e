// Event module
// Calendar event record persisted in the local snapshot

mod clock_time;
pub mod form;

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::utils::date::date_key;

pub use clock_time::{ClockTime, ParseClockTimeError};

/// Accent color used when an event has no color of its own.
pub const DEFAULT_EVENT_COLOR: &str = "#3b82f6";

/// Opaque event identifier, assigned once at creation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(String);

impl EventId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for EventId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for EventId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Record-level invariant violations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidEvent {
    #[error("Event title cannot be empty")]
    EmptyTitle,
    #[error("Event end time ({end}) must be after start time ({start})")]
    TimeOrder { start: ClockTime, end: ClockTime },
}

fn check_invariants(title: &str, start: ClockTime, end: ClockTime) -> Result<(), InvalidEvent> {
    if title.trim().is_empty() {
        return Err(InvalidEvent::EmptyTitle);
    }
    if start >= end {
        return Err(InvalidEvent::TimeOrder { start, end });
    }
    Ok(())
}

/// Calendar event as stored in the snapshot.
///
/// Field names on the wire are `id`, `title`, `description`, `date`,
/// `startTime`, `endTime` and `color`; absent optionals are omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: EventId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub date: NaiveDate,
    pub start_time: ClockTime,
    pub end_time: ClockTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl Event {
    /// Validate the record invariants (non-empty title, start before end).
    pub fn validate(&self) -> Result<(), InvalidEvent> {
        check_invariants(&self.title, self.start_time, self.end_time)
    }

    /// Canonical `YYYY-MM-DD` key this event is filed under.
    pub fn date_key(&self) -> String {
        date_key(self.date)
    }

    /// Color to render with, falling back to the accent color.
    pub fn display_color(&self) -> &str {
        self.color.as_deref().unwrap_or(DEFAULT_EVENT_COLOR)
    }

    pub fn duration_minutes(&self) -> u16 {
        self.end_time
            .minutes_since_midnight()
            .saturating_sub(self.start_time.minutes_since_midnight())
    }

    /// Merge the fields present in `patch`. The id never changes.
    pub fn apply(&mut self, patch: EventPatch) {
        let EventPatch {
            title,
            description,
            date,
            start_time,
            end_time,
            color,
        } = patch;

        if let Some(title) = title {
            self.title = title;
        }
        if let Some(description) = description {
            self.description = description;
        }
        if let Some(date) = date {
            self.date = date;
        }
        if let Some(start_time) = start_time {
            self.start_time = start_time;
        }
        if let Some(end_time) = end_time {
            self.end_time = end_time;
        }
        if let Some(color) = color {
            self.color = color;
        }
    }
}

/// Event fields minus the id; input to create.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventDraft {
    pub title: String,
    pub description: Option<String>,
    pub date: NaiveDate,
    pub start_time: ClockTime,
    pub end_time: ClockTime,
    pub color: Option<String>,
}

impl EventDraft {
    /// Create a draft with the required fields
    ///
    /// # Examples
    /// ```
    /// use month_calendar::models::event::{ClockTime, EventDraft};
    /// use chrono::NaiveDate;
    ///
    /// let draft = EventDraft::new(
    ///     "Standup",
    ///     NaiveDate::from_ymd_opt(2024, 3, 4).unwrap(),
    ///     "09:00".parse::<ClockTime>().unwrap(),
    ///     "09:15".parse::<ClockTime>().unwrap(),
    /// )
    /// .with_color("#10b981");
    /// assert!(draft.validate().is_ok());
    /// ```
    pub fn new(
        title: impl Into<String>,
        date: NaiveDate,
        start_time: ClockTime,
        end_time: ClockTime,
    ) -> Self {
        Self {
            title: title.into(),
            description: None,
            date,
            start_time,
            end_time,
            color: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn validate(&self) -> Result<(), InvalidEvent> {
        check_invariants(&self.title, self.start_time, self.end_time)
    }

    pub fn into_event(self, id: EventId) -> Event {
        Event {
            id,
            title: self.title,
            description: self.description,
            date: self.date,
            start_time: self.start_time,
            end_time: self.end_time,
            color: self.color,
        }
    }
}

/// Fields to change on an existing event.
///
/// `None` leaves a field untouched. Optional event fields take
/// `Some(None)` to clear them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventPatch {
    pub title: Option<String>,
    pub description: Option<Option<String>>,
    pub date: Option<NaiveDate>,
    pub start_time: Option<ClockTime>,
    pub end_time: Option<ClockTime>,
    pub color: Option<Option<String>>,
}

impl EventPatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Patch that overwrites every field with the draft's values.
    pub fn replace_with(draft: EventDraft) -> Self {
        Self {
            title: Some(draft.title),
            description: Some(draft.description),
            date: Some(draft.date),
            start_time: Some(draft.start_time),
            end_time: Some(draft.end_time),
            color: Some(draft.color),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: Option<String>) -> Self {
        self.description = Some(description);
        self
    }

    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn start_time(mut self, start_time: ClockTime) -> Self {
        self.start_time = Some(start_time);
        self
    }

    pub fn end_time(mut self, end_time: ClockTime) -> Self {
        self.end_time = Some(end_time);
        self
    }

    pub fn color(mut self, color: Option<String>) -> Self {
        self.color = Some(color);
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
