mod service;

pub use service::{default_data_dir, resolve_database_path, SettingsService, DATABASE_FILE_NAME};
