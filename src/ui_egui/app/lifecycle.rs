use super::CalendarApp;
use crate::models::settings::Settings;
use crate::services::auth::{Session, SessionState};
use crate::services::calendar::{CalendarContext, SubmitError};
use crate::services::database::Database;
use crate::services::event::EventStore;
use crate::services::theme::{resolve, ThemePreference, ThemeService};
use crate::ui_egui::event_dialog::{render_event_dialog, EventDialogAction, EventDialogUi};
use crate::ui_egui::theme::CalendarTheme;
use crate::ui_egui::views::{MonthView, MonthViewAction};
use crate::utils::date::today;

impl CalendarApp {
    pub fn new(cc: &eframe::CreationContext<'_>, database: &'static Database, settings: &Settings) -> Self {
        let store = EventStore::open(database);
        log::info!("Event store opened with {} events", store.len());

        let calendar = CalendarContext::new(store, today(), settings.form_defaults());

        let theme_service = ThemeService::new(database);
        let theme_preference = theme_service.load();

        let mut session = SessionState::default();
        session.sign_in(Session::from_os_user());

        let mut app = Self {
            calendar,
            theme_service,
            theme_preference,
            active_theme: CalendarTheme::light(),
            pending_theme_apply: false,
            session,
            dialog_ui: EventDialogUi::default(),
        };

        app.apply_theme(&cc.egui_ctx);
        app
    }

    pub(super) fn apply_theme(&mut self, ctx: &egui::Context) {
        let theme = CalendarTheme::for_resolved(resolve(self.theme_preference));
        theme.apply_to_context(ctx);
        self.active_theme = theme;
    }

    pub(super) fn set_theme_preference(&mut self, preference: ThemePreference) {
        if preference == self.theme_preference {
            return;
        }
        self.theme_preference = preference;
        self.pending_theme_apply = true;
        // Failure is already logged; the choice still applies for this session
        let _ = self.theme_service.save(preference);
    }

    pub(super) fn handle_update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_keyboard_shortcuts(ctx);

        if self.pending_theme_apply {
            self.apply_theme(ctx);
            self.pending_theme_apply = false;
        }

        if !self.session.is_signed_in() {
            self.render_signed_out(ctx);
            return;
        }

        self.render_top_bar(ctx);
        self.render_status_bar(ctx);
        self.render_main_panel(ctx);
        self.render_dialog(ctx);
    }

    fn render_main_panel(&mut self, ctx: &egui::Context) {
        let today = today();
        let cells = self.calendar.month_grid(today);

        let mut action = MonthViewAction::None;
        egui::CentralPanel::default().show(ctx, |ui| {
            action = MonthView::show_header(ui, self.calendar.current_date());
            ui.add_space(6.0);

            let grid_action = MonthView::show(ui, &cells, &self.active_theme);
            if grid_action != MonthViewAction::None {
                action = grid_action;
            }
        });

        self.handle_month_action(action, today);
    }

    fn handle_month_action(&mut self, action: MonthViewAction, today: chrono::NaiveDate) {
        // Grid clicks are ignored while the modal is up
        if self.calendar.modal().is_some()
            && matches!(action, MonthViewAction::ClickDay(_) | MonthViewAction::EditEvent(_))
        {
            return;
        }

        match action {
            MonthViewAction::None => {}
            MonthViewAction::PreviousMonth => self.calendar.previous_month(),
            MonthViewAction::NextMonth => self.calendar.next_month(),
            MonthViewAction::Today => self.calendar.go_to_today(today),
            MonthViewAction::ClickDay(date) => {
                self.dialog_ui = EventDialogUi::default();
                self.calendar.click_day(date, today);
            }
            MonthViewAction::EditEvent(id) => {
                self.dialog_ui = EventDialogUi::default();
                self.calendar.open_modal(Some(&id), today);
            }
        }
    }

    fn render_dialog(&mut self, ctx: &egui::Context) {
        let theme = &self.active_theme;
        let Some(modal) = self.calendar.modal_mut() else {
            return;
        };

        match render_event_dialog(ctx, modal, &mut self.dialog_ui, theme) {
            EventDialogAction::None => {}
            EventDialogAction::Cancel => self.close_dialog(),
            EventDialogAction::Submit => match self.calendar.submit_modal() {
                Ok(event) => {
                    log::info!("Saved event '{}' on {}", event.title, event.date_key());
                    self.dialog_ui = EventDialogUi::default();
                }
                Err(SubmitError::Validation(errors)) => {
                    log::debug!("Event form rejected: {}", errors);
                }
                Err(err) => log::error!("Failed to save event: {}", err),
            },
            EventDialogAction::Delete => {
                if let Some(removed) = self.calendar.delete_editing() {
                    log::info!("Deleted event '{}'", removed.title);
                }
                self.dialog_ui = EventDialogUi::default();
            }
        }
    }

    pub(super) fn close_dialog(&mut self) {
        self.calendar.close_modal();
        self.dialog_ui = EventDialogUi::default();
    }

    pub(super) fn sign_in_local(&mut self) {
        self.session = SessionState::Loading;
        self.session.sign_in(Session::from_os_user());
    }
}
