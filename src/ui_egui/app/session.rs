use egui::RichText;

use super::CalendarApp;
use crate::services::auth::SessionState;
use crate::services::theme::ThemePreference;

impl CalendarApp {
    /// Title, theme selector and the signed-in user.
    pub(super) fn render_top_bar(&mut self, ctx: &egui::Context) {
        let mut chosen = self.theme_preference;
        let mut sign_out = false;

        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new("Calendar").strong().size(16.0));

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Sign Out").clicked() {
                        sign_out = true;
                    }
                    if let Some(session) = self.session.session() {
                        let who = session.email.as_deref().unwrap_or(&session.display_name);
                        ui.label(RichText::new(format!("Signed in as {}", who)).small());
                    }

                    ui.separator();

                    egui::ComboBox::from_id_source("theme_preference")
                        .selected_text(chosen.label())
                        .show_ui(ui, |ui| {
                            for preference in ThemePreference::ALL {
                                ui.selectable_value(&mut chosen, preference, preference.label());
                            }
                        });
                    ui.label("Theme:");
                });
            });
        });

        self.set_theme_preference(chosen);

        if sign_out {
            self.close_dialog();
            self.session.sign_out();
        }
    }

    /// The calendar is only shown to a signed-in session.
    pub(super) fn render_signed_out(&mut self, ctx: &egui::Context) {
        let mut sign_in = false;

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(ui.available_height() / 3.0);
                match self.session {
                    SessionState::Loading => {
                        ui.spinner();
                    }
                    _ => {
                        ui.heading("Calendar");
                        ui.label("Sign in to view and manage your events.");
                        ui.add_space(8.0);
                        if ui.button("Sign in as local user").clicked() {
                            sign_in = true;
                        }
                    }
                }
            });
        });

        if sign_in {
            self.sign_in_local();
        }
    }
}
