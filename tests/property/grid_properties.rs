// Property-based tests for month grid generation
// Checks the grid shape for random reference dates

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use month_calendar::utils::date::{
    calendar_grid, calendar_weeks, date_key, first_of_month, last_of_month, parse_date_key,
    GRID_CELLS,
};
use proptest::prelude::*;

fn any_date() -> impl Strategy<Value = NaiveDate> {
    // 1900-01-01 ..= 2199-12-31
    (0i64..109_572).prop_map(|offset| {
        NaiveDate::from_ymd_opt(1900, 1, 1).unwrap() + Duration::days(offset)
    })
}

proptest! {
    /// Property: every grid has exactly 42 cells
    #[test]
    fn prop_grid_has_42_cells(date in any_date()) {
        prop_assert_eq!(calendar_grid(date).len(), GRID_CELLS);
    }

    /// Property: cells are consecutive days from a Monday to a Sunday
    #[test]
    fn prop_grid_is_consecutive_monday_to_sunday(date in any_date()) {
        let grid = calendar_grid(date);
        prop_assert_eq!(grid[0].weekday(), Weekday::Mon);
        prop_assert_eq!(grid[GRID_CELLS - 1].weekday(), Weekday::Sun);
        for pair in grid.windows(2) {
            prop_assert_eq!(pair[1] - pair[0], Duration::days(1));
        }
    }

    /// Property: every day of the reference month appears exactly once
    #[test]
    fn prop_grid_covers_whole_month(date in any_date()) {
        let grid = calendar_grid(date);
        let first = first_of_month(date);
        let last = last_of_month(date);

        for day in first.iter_days().take_while(|d| *d <= last) {
            prop_assert_eq!(grid.iter().filter(|d| **d == day).count(), 1);
        }
        prop_assert!(grid[0] <= first);
        prop_assert!(first - grid[0] < Duration::days(7));
    }

    /// Property: grid only depends on the month, not the day
    #[test]
    fn prop_grid_ignores_day_of_month(date in any_date()) {
        prop_assert_eq!(calendar_grid(date), calendar_grid(first_of_month(date)));
    }

    /// Property: weeks are the grid split into rows of seven
    #[test]
    fn prop_weeks_match_grid(date in any_date()) {
        let flattened: Vec<NaiveDate> = calendar_weeks(date).into_iter().flatten().collect();
        prop_assert_eq!(flattened, calendar_grid(date));
    }

    /// Property: date keys round-trip through parsing
    #[test]
    fn prop_date_key_round_trip(date in any_date()) {
        let key = date_key(date);
        prop_assert_eq!(key.len(), 10);
        let parsed = parse_date_key(&key);
        prop_assert_eq!(parsed, Some(date));
        prop_assert_eq!(date_key(parsed.unwrap()), key);
    }
}
