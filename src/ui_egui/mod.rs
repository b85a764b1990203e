mod app;
mod event_dialog;
pub mod theme;
mod views;

pub use app::CalendarApp;
