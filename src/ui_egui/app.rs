mod lifecycle;
mod session;
mod shortcuts;
mod status_bar;

use crate::services::auth::SessionState;
use crate::services::calendar::CalendarContext;
use crate::services::database::Database;
use crate::services::theme::{ThemePreference, ThemeService};
use crate::ui_egui::event_dialog::EventDialogUi;
use crate::ui_egui::theme::CalendarTheme;

const MIN_ROOT_WIDTH: f32 = 640.0;
const MIN_ROOT_HEIGHT: f32 = 480.0;

pub struct CalendarApp {
    /// Calendar state and event store, backed by the leaked database
    calendar: CalendarContext<&'static Database>,
    theme_service: ThemeService<&'static Database>,
    theme_preference: ThemePreference,
    /// Currently applied theme colors
    active_theme: CalendarTheme,
    /// Set when the preference changed and visuals need reapplying
    pending_theme_apply: bool,
    session: SessionState,
    dialog_ui: EventDialogUi,
}

impl eframe::App for CalendarApp {
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        self.handle_update(ctx, frame);
    }
}

impl CalendarApp {
    pub fn min_window_size() -> [f32; 2] {
        [MIN_ROOT_WIDTH, MIN_ROOT_HEIGHT]
    }
}
