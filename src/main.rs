// Month Calendar Application
// Main entry point

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use anyhow::{anyhow, Context, Result};

use month_calendar::services::database::Database;
use month_calendar::services::settings::{resolve_database_path, SettingsService};
use month_calendar::ui_egui::CalendarApp;

fn main() -> Result<()> {
    let settings_service = SettingsService::new(SettingsService::default_path());
    let loaded = settings_service.load();
    let settings = loaded.as_ref().cloned().unwrap_or_default();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(settings.log_filter()))
        .init();

    log::info!("Starting Month Calendar");
    if let Err(e) = loaded {
        log::warn!("Failed to load settings: {:#}, using defaults", e);
    }

    let database = open_database(&settings)?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Calendar")
            .with_inner_size([1100.0, 780.0])
            .with_min_inner_size(CalendarApp::min_window_size()),
        ..Default::default()
    };

    eframe::run_native(
        "Calendar",
        options,
        Box::new(move |cc| Ok(Box::new(CalendarApp::new(cc, database, &settings)))),
    )
    .map_err(|e| anyhow!("Failed to run calendar window: {}", e))
}

/// Open the database and leak it for the 'static lifetime eframe needs.
fn open_database(settings: &month_calendar::models::settings::Settings) -> Result<&'static Database> {
    let db_path = resolve_database_path(settings);
    if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create data directory {}", parent.display()))?;
    }

    let db = Database::new(&db_path.to_string_lossy())?;
    db.initialize_schema()
        .context("Failed to initialize database schema")?;
    log::info!("Using database at {}", db_path.display());

    Ok(Box::leak(Box::new(db)))
}
