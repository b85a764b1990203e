// Unit tests for ClockTime parsing and ordering
// Covers the inputs the event form accepts and rejects

use month_calendar::models::event::{ClockTime, ParseClockTimeError};
use test_case::test_case;

#[test_case("09:00", 9, 0 ; "zero padded")]
#[test_case("9:05", 9, 5 ; "single digit hour")]
#[test_case("00:00", 0, 0 ; "midnight")]
#[test_case("23:59", 23, 59 ; "last minute")]
#[test_case(" 14:30 ", 14, 30 ; "surrounding whitespace")]
fn test_parses_valid_times(input: &str, hour: u32, minute: u32) {
    let time: ClockTime = input.parse().unwrap();
    assert_eq!((time.hour(), time.minute()), (hour, minute));
}

#[test_case("24:00" ; "hour out of range")]
#[test_case("12:60" ; "minute out of range")]
#[test_case("12:5" ; "single digit minute")]
#[test_case("123:00" ; "three digit hour")]
#[test_case("12-30" ; "wrong separator")]
#[test_case("noon" ; "words")]
#[test_case("+1:30" ; "signed hour")]
fn test_rejects_malformed_times(input: &str) {
    assert!(matches!(
        input.parse::<ClockTime>(),
        Err(ParseClockTimeError::Format(_))
    ));
}

#[test]
fn test_empty_is_its_own_error() {
    assert_eq!("".parse::<ClockTime>(), Err(ParseClockTimeError::Empty));
    assert_eq!("   ".parse::<ClockTime>(), Err(ParseClockTimeError::Empty));
}

#[test]
fn test_display_is_zero_padded() {
    assert_eq!(ClockTime::new(7, 5).unwrap().to_string(), "07:05");
}

#[test]
fn test_ordering_follows_minutes_since_midnight() {
    let nine: ClockTime = "9:00".parse().unwrap();
    let ten: ClockTime = "10:00".parse().unwrap();
    assert!(nine < ten);
    assert_eq!(ten.minutes_since_midnight() - nine.minutes_since_midnight(), 60);
}

#[test]
fn test_serde_uses_hh_mm_strings() {
    let time = ClockTime::new(9, 30).unwrap();
    assert_eq!(serde_json::to_string(&time).unwrap(), "\"09:30\"");
    assert_eq!(serde_json::from_str::<ClockTime>("\"09:30\"").unwrap(), time);
    assert!(serde_json::from_str::<ClockTime>("\"9.30\"").is_err());
}
