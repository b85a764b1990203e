use std::fmt;
use std::str::FromStr;

use chrono::NaiveTime;
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};
use thiserror::Error;

const MINUTES_PER_DAY: u16 = 24 * 60;

/// Wall-clock time of day with minute precision.
///
/// Stored as minutes since midnight so ordering is plain integer ordering.
/// Serialized as zero-padded `HH:MM` (24-hour).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime {
    minutes: u16,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseClockTimeError {
    #[error("time is empty")]
    Empty,
    #[error("'{0}' is not a valid HH:MM time")]
    Format(String),
}

impl ClockTime {
    pub const MIDNIGHT: ClockTime = ClockTime { minutes: 0 };

    /// Build a time from hour (0-23) and minute (0-59).
    pub fn new(hour: u32, minute: u32) -> Option<Self> {
        if hour > 23 || minute > 59 {
            return None;
        }
        Some(Self {
            minutes: (hour * 60 + minute) as u16,
        })
    }

    pub fn from_minutes(minutes: u16) -> Option<Self> {
        (minutes < MINUTES_PER_DAY).then_some(Self { minutes })
    }

    pub fn hour(&self) -> u32 {
        u32::from(self.minutes / 60)
    }

    pub fn minute(&self) -> u32 {
        u32::from(self.minutes % 60)
    }

    /// `hour * 60 + minute`, the value used for range ordering.
    pub fn minutes_since_midnight(&self) -> u16 {
        self.minutes
    }

    pub fn to_naive_time(&self) -> NaiveTime {
        NaiveTime::from_hms_opt(self.hour(), self.minute(), 0).unwrap_or(NaiveTime::MIN)
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for ClockTime {
    type Err = ParseClockTimeError;

    /// Accepts `H:MM` and `HH:MM` with hour 0-23 and a two-digit minute 00-59.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseClockTimeError::Empty);
        }

        let invalid = || ParseClockTimeError::Format(s.to_string());
        let (hour, minute) = s.split_once(':').ok_or_else(invalid)?;

        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if hour.is_empty() || hour.len() > 2 || !all_digits(hour) {
            return Err(invalid());
        }
        if minute.len() != 2 || !all_digits(minute) {
            return Err(invalid());
        }

        let hour: u32 = hour.parse().map_err(|_| invalid())?;
        let minute: u32 = minute.parse().map_err(|_| invalid())?;
        ClockTime::new(hour, minute).ok_or_else(invalid)
    }
}

impl From<NaiveTime> for ClockTime {
    fn from(time: NaiveTime) -> Self {
        use chrono::Timelike;
        Self {
            minutes: (time.hour() * 60 + time.minute()) as u16,
        }
    }
}

impl Serialize for ClockTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ClockTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_padded_and_unpadded_hours() {
        assert_eq!("09:05".parse::<ClockTime>().unwrap(), ClockTime::new(9, 5).unwrap());
        assert_eq!("9:05".parse::<ClockTime>().unwrap(), ClockTime::new(9, 5).unwrap());
        assert_eq!("23:59".parse::<ClockTime>().unwrap().minutes_since_midnight(), 1439);
    }

    #[test]
    fn test_parse_rejects_out_of_range() {
        assert!("24:00".parse::<ClockTime>().is_err());
        assert!("12:60".parse::<ClockTime>().is_err());
        assert!("12:5".parse::<ClockTime>().is_err());
        assert!("noon".parse::<ClockTime>().is_err());
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!("  ".parse::<ClockTime>(), Err(ParseClockTimeError::Empty));
    }

    #[test]
    fn test_display_is_zero_padded() {
        assert_eq!(ClockTime::new(7, 3).unwrap().to_string(), "07:03");
        assert_eq!(ClockTime::MIDNIGHT.to_string(), "00:00");
    }

    #[test]
    fn test_serde_uses_hhmm_string() {
        let time = ClockTime::new(14, 30).unwrap();
        let json = serde_json::to_string(&time).unwrap();
        assert_eq!(json, "\"14:30\"");
        let back: ClockTime = serde_json::from_str(&json).unwrap();
        assert_eq!(back, time);
        assert!(serde_json::from_str::<ClockTime>("\"25:00\"").is_err());
    }

    #[test]
    fn test_naive_time_conversion() {
        let naive = NaiveTime::from_hms_opt(18, 45, 12).unwrap();
        let time = ClockTime::from(naive);
        assert_eq!(time.to_string(), "18:45");
        assert_eq!(time.to_naive_time(), NaiveTime::from_hms_opt(18, 45, 0).unwrap());
    }
}
