// Date utility functions
// Month grid generation and the pure helpers the month view relies on

use chrono::{Datelike, Local, Months, NaiveDate, Weekday};

/// Number of cells in the month grid (six rows of seven days).
pub const GRID_CELLS: usize = 42;
pub const DAYS_PER_WEEK: usize = 7;

const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

/// Monday on or before `date`.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date.week(Weekday::Mon).first_day()
}

/// Sunday on or after `date`.
pub fn week_end(date: NaiveDate) -> NaiveDate {
    date.week(Weekday::Mon).last_day()
}

pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

pub fn last_of_month(date: NaiveDate) -> NaiveDate {
    next_month(first_of_month(date))
        .pred_opt()
        .unwrap_or(date)
}

/// 42 consecutive days covering the month that contains `reference`.
///
/// The first day is the Monday on or before the 1st, the last is a Sunday.
/// Months whose week-aligned span is shorter than six weeks are extended
/// forward with consecutive days so the grid always has six rows.
pub fn calendar_grid(reference: NaiveDate) -> Vec<NaiveDate> {
    let month_start = first_of_month(reference);
    let span_end = week_end(last_of_month(reference));

    let mut days: Vec<NaiveDate> = week_start(month_start)
        .iter_days()
        .take_while(|day| *day <= span_end)
        .collect();

    if let Some(&last) = days.last() {
        let missing = GRID_CELLS.saturating_sub(days.len());
        days.extend(last.iter_days().skip(1).take(missing));
    }

    days.truncate(GRID_CELLS);
    days
}

/// The month grid split into its six week rows.
pub fn calendar_weeks(reference: NaiveDate) -> Vec<[NaiveDate; DAYS_PER_WEEK]> {
    calendar_grid(reference)
        .chunks_exact(DAYS_PER_WEEK)
        .filter_map(|week| <[NaiveDate; DAYS_PER_WEEK]>::try_from(week).ok())
        .collect()
}

/// Header label, e.g. "March 2024".
pub fn format_month_year(date: NaiveDate) -> String {
    date.format("%B %Y").to_string()
}

/// Day-of-month label without padding, e.g. "4".
pub fn format_day_number(date: NaiveDate) -> String {
    date.day().to_string()
}

/// Canonical `YYYY-MM-DD` key used to join events to days.
pub fn date_key(date: NaiveDate) -> String {
    date.format(DATE_KEY_FORMAT).to_string()
}

/// Parse a canonical date key; `None` for anything else.
pub fn parse_date_key(key: &str) -> Option<NaiveDate> {
    // Reject unpadded forms like 2024-3-4 so keys stay canonical
    if key.len() != 10 {
        return None;
    }
    NaiveDate::parse_from_str(key, DATE_KEY_FORMAT).ok()
}

pub fn is_same_month(date: NaiveDate, reference: NaiveDate) -> bool {
    date.year() == reference.year() && date.month() == reference.month()
}

pub fn is_today(date: NaiveDate, today: NaiveDate) -> bool {
    date == today
}

pub fn is_same_day(a: NaiveDate, b: NaiveDate) -> bool {
    a == b
}

/// Same day one month later, clamped to the end of the target month.
pub fn next_month(date: NaiveDate) -> NaiveDate {
    date.checked_add_months(Months::new(1)).unwrap_or(date)
}

/// Same day one month earlier, clamped to the end of the target month.
pub fn previous_month(date: NaiveDate) -> NaiveDate {
    date.checked_sub_months(Months::new(1)).unwrap_or(date)
}

/// Short weekday names, Monday first.
pub fn weekday_labels() -> [String; DAYS_PER_WEEK] {
    // 2024-01-01 was a Monday
    let monday = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default();
    let mut labels: [String; DAYS_PER_WEEK] = Default::default();
    for (label, day) in labels.iter_mut().zip(monday.iter_days()) {
        *label = day.format("%a").to_string();
    }
    labels
}

/// Current local date.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}
