// Settings module
// Application configuration read from config.toml

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::models::event::form::FormDefaults;
use crate::models::event::{ClockTime, DEFAULT_EVENT_COLOR};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Overrides the platform data directory location of the database
    pub database_path: Option<PathBuf>,
    pub default_start_time: ClockTime,
    pub default_end_time: ClockTime,
    pub default_color: String,
    /// env_logger filter used when RUST_LOG is unset
    pub log_level: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        let defaults = FormDefaults::default();
        Self {
            database_path: None,
            default_start_time: defaults.start_time,
            default_end_time: defaults.end_time,
            default_color: DEFAULT_EVENT_COLOR.to_string(),
            log_level: None,
        }
    }
}

impl Settings {
    pub fn validate(&self) -> Result<(), String> {
        if self.default_start_time >= self.default_end_time {
            return Err("default_start_time must be before default_end_time".to_string());
        }

        let color = &self.default_color;
        let is_hex = color.starts_with('#')
            && (color.len() == 7 || color.len() == 4)
            && color[1..].chars().all(|c| c.is_ascii_hexdigit());
        if !is_hex {
            return Err("default_color must be in hex format (#RRGGBB or #RGB)".to_string());
        }

        Ok(())
    }

    pub fn form_defaults(&self) -> FormDefaults {
        FormDefaults {
            start_time: self.default_start_time,
            end_time: self.default_end_time,
            color: self.default_color.clone(),
        }
    }

    pub fn log_filter(&self) -> &str {
        self.log_level.as_deref().unwrap_or("info")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.default_start_time.to_string(), "09:00");
        assert_eq!(settings.log_filter(), "info");
    }

    #[test]
    fn test_validate_time_order() {
        let settings = Settings {
            default_end_time: "08:00".parse().unwrap(),
            ..Settings::default()
        };
        assert!(settings.validate().unwrap_err().contains("default_start_time"));
    }

    #[test]
    fn test_validate_color() {
        let mut settings = Settings::default();
        settings.default_color = "blue".to_string();
        assert!(settings.validate().is_err());
        settings.default_color = "#FA0".to_string();
        assert!(settings.validate().is_ok());
        settings.default_color = "#GG0000".to_string();
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let settings: Settings = toml::from_str("default_color = \"#ef4444\"").unwrap();
        assert_eq!(settings.default_color, "#ef4444");
        assert_eq!(settings.default_end_time.to_string(), "10:00");
        assert!(settings.database_path.is_none());
    }

    #[test]
    fn test_form_defaults_follow_settings() {
        let settings = Settings {
            default_start_time: "08:30".parse().unwrap(),
            ..Settings::default()
        };
        let defaults = settings.form_defaults();
        assert_eq!(defaults.start_time.to_string(), "08:30");
        assert_eq!(defaults.color, DEFAULT_EVENT_COLOR);
    }
}
