// Theme preference: persisted choice plus resolution against the OS appearance.
mod service;

pub use service::{
    resolve, resolve_with, system_theme, ParseThemeError, ResolvedTheme, ThemePreference,
    ThemeService, THEME_STORAGE_KEY,
};
