//! Status bar showing the event count and whether changes reach disk.

use super::CalendarApp;
use crate::services::event::PersistenceStatus;
use crate::utils::date::{first_of_month, last_of_month};
use egui::{Color32, RichText};

/// Get theme-aware secondary text color
fn secondary_text_color(is_dark: bool) -> Color32 {
    if is_dark {
        Color32::from_gray(160)
    } else {
        Color32::from_gray(100)
    }
}

impl CalendarApp {
    pub(super) fn render_status_bar(&mut self, ctx: &egui::Context) {
        let is_dark = self.active_theme.is_dark;
        let secondary = secondary_text_color(is_dark);
        let warning = self.active_theme.error_text;

        let total = self.calendar.store().len();
        let current = self.calendar.current_date();
        let this_month = self
            .calendar
            .store()
            .find_by_date_range(first_of_month(current), last_of_month(current))
            .len();

        egui::TopBottomPanel::bottom("status_bar")
            .exact_height(24.0)
            .show(ctx, |ui| {
                ui.horizontal_centered(|ui| {
                    ui.label(
                        RichText::new(format!(
                            "{} event{} this month, {} total",
                            this_month,
                            if this_month == 1 { "" } else { "s" },
                            total
                        ))
                        .small()
                        .color(secondary),
                    );

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        match self.calendar.persistence() {
                            PersistenceStatus::Durable => {
                                ui.label(RichText::new("Saved").small().color(secondary));
                            }
                            PersistenceStatus::Degraded => {
                                ui.label(
                                    RichText::new("Storage unavailable: changes are kept in memory only")
                                        .small()
                                        .color(warning),
                                );
                            }
                        }
                        ui.label(
                            RichText::new("Ctrl+N new event · Ctrl+T today · PgUp/PgDn month")
                                .small()
                                .color(secondary),
                        );
                    });
                });
            });
    }
}
