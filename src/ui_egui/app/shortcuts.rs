use super::CalendarApp;
use crate::utils::date::today;

impl CalendarApp {
    pub(super) fn handle_keyboard_shortcuts(&mut self, ctx: &egui::Context) {
        if !self.session.is_signed_in() {
            return;
        }

        let (escape, new_event, jump_today, previous, next) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::Escape),
                i.modifiers.command && i.key_pressed(egui::Key::N),
                i.modifiers.command && i.key_pressed(egui::Key::T),
                i.key_pressed(egui::Key::PageUp),
                i.key_pressed(egui::Key::PageDown),
            )
        });

        if self.calendar.modal().is_some() {
            if escape {
                self.close_dialog();
            }
            return;
        }

        let today = today();
        if new_event {
            self.calendar.open_modal(None, today);
        }
        if jump_today {
            self.calendar.go_to_today(today);
        }
        if previous {
            self.calendar.previous_month();
        }
        if next {
            self.calendar.next_month();
        }
    }
}
