use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::services::storage::{DurableStore, StorageError};

/// Storage key of the theme preference; independent of the event snapshot.
pub const THEME_STORAGE_KEY: &str = "calendar-theme";

/// Theme the user asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ThemePreference {
    Light,
    Dark,
    #[default]
    System,
}

/// Concrete appearance after following the system setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResolvedTheme {
    Light,
    Dark,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown theme preference '{0}' (expected light, dark or system)")]
pub struct ParseThemeError(String);

impl ThemePreference {
    pub const ALL: [ThemePreference; 3] = [Self::Light, Self::Dark, Self::System];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::System => "system",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Dark => "Dark",
            Self::System => "System",
        }
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemePreference {
    type Err = ParseThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            "system" => Ok(Self::System),
            other => Err(ParseThemeError(other.to_string())),
        }
    }
}

impl ResolvedTheme {
    pub fn is_dark(&self) -> bool {
        matches!(self, Self::Dark)
    }
}

/// Loads and saves the theme preference through a durable store.
pub struct ThemeService<S: DurableStore> {
    storage: S,
}

impl<S: DurableStore> ThemeService<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Stored preference; `System` when missing, unrecognised or unreadable.
    pub fn load(&self) -> ThemePreference {
        match self.storage.read(THEME_STORAGE_KEY) {
            Ok(Some(stored)) => stored.parse().unwrap_or_else(|err| {
                log::warn!("Ignoring stored theme: {err}");
                ThemePreference::System
            }),
            Ok(None) => ThemePreference::System,
            Err(err) => {
                log::error!("Failed to load theme from storage: {err}");
                ThemePreference::System
            }
        }
    }

    pub fn save(&self, preference: ThemePreference) -> Result<(), StorageError> {
        self.storage
            .write(THEME_STORAGE_KEY, preference.as_str())
            .inspect_err(|err| log::error!("Failed to save theme to storage: {err}"))
    }
}

/// Resolve against the operating system appearance.
pub fn resolve(preference: ThemePreference) -> ResolvedTheme {
    resolve_with(preference, system_theme())
}

pub fn resolve_with(preference: ThemePreference, system: ResolvedTheme) -> ResolvedTheme {
    match preference {
        ThemePreference::Light => ResolvedTheme::Light,
        ThemePreference::Dark => ResolvedTheme::Dark,
        ThemePreference::System => system,
    }
}

pub fn system_theme() -> ResolvedTheme {
    match dark_light::detect() {
        dark_light::Mode::Dark => ResolvedTheme::Dark,
        dark_light::Mode::Light | dark_light::Mode::Default => ResolvedTheme::Light,
    }
}
