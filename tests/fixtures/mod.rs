// Test fixtures - reusable test data
// Provides consistent dates, drafts and stored snapshots across test files

#![allow(dead_code)]

use chrono::NaiveDate;
use month_calendar::models::event::{ClockTime, EventDraft};

/// Sample dates for testing
pub mod dates {
    use super::*;

    /// Monday, March 4, 2024
    pub fn standup_day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 4).unwrap()
    }

    /// Feb 29, 2024 (leap year)
    pub fn leap_day_2024() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
    }

    /// Sunday, Sep 1, 2024; the grid starts in August
    pub fn sunday_first() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 9, 1).unwrap()
    }
}

pub fn time(value: &str) -> ClockTime {
    value.parse().unwrap()
}

/// Sample drafts for testing
pub mod drafts {
    use super::*;

    pub fn standup() -> EventDraft {
        EventDraft::new("Standup", dates::standup_day(), time("09:00"), time("09:15"))
    }

    pub fn lunch() -> EventDraft {
        EventDraft::new("Lunch", dates::standup_day(), time("12:00"), time("13:00"))
            .with_description("Team lunch")
            .with_color("#10b981")
    }
}

/// Snapshot as a previous session would have written it
pub mod snapshots {
    pub const THREE_EVENTS: &str = r##"[
        {"id":"event_1709510400000_abc123def","title":"Standup","date":"2024-03-04","startTime":"09:00","endTime":"09:15"},
        {"id":"event_1709510400001_ghi456jkl","title":"Review","description":"Sprint review","date":"2024-03-04","startTime":"15:00","endTime":"16:00","color":"#ef4444"},
        {"id":"event_1709510400002_mno789pqr","title":"Dentist","date":"2024-03-12","startTime":"10:30","endTime":"11:00"}
    ]"##;
}
