// Module exports for models

pub mod calendar_state;
pub mod event;
pub mod settings;
