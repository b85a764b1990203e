use egui::{Color32, RichText};
use egui_extras::DatePickerButton;

use crate::models::calendar_state::EventModal;
use crate::models::event::form::FormField;
use crate::ui_egui::theme::CalendarTheme;
use crate::utils::date::{date_key, parse_date_key};

const LABEL_WIDTH: f32 = 90.0;

const COLOR_PRESETS: [(&str, &str); 6] = [
    ("Blue", "#3b82f6"),
    ("Green", "#10b981"),
    ("Red", "#ef4444"),
    ("Yellow", "#f59e0b"),
    ("Purple", "#8b5cf6"),
    ("Pink", "#ec4899"),
];

/// What the user asked the dialog to do this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EventDialogAction {
    #[default]
    None,
    Submit,
    Cancel,
    /// Delete was confirmed
    Delete,
}

/// Per-dialog UI state that is not part of the form
#[derive(Debug, Default)]
pub struct EventDialogUi {
    pub confirm_delete: bool,
}

pub fn render_event_dialog(
    ctx: &egui::Context,
    modal: &mut EventModal,
    dialog_ui: &mut EventDialogUi,
    theme: &CalendarTheme,
) -> EventDialogAction {
    let mut action = EventDialogAction::None;
    let error_color = theme.error_text;

    egui::Window::new(modal.heading())
        .id(egui::Id::new("event_dialog"))
        .collapsible(false)
        .resizable(false)
        .default_width(420.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            if let Some(ref error) = modal.error_message {
                ui.colored_label(error_color, RichText::new(error).strong());
                ui.add_space(8.0);
            }

            field_row(ui, "Title *", |ui| {
                ui.add(
                    egui::TextEdit::singleline(&mut modal.form.title)
                        .hint_text("Enter event title")
                        .desired_width(f32::INFINITY),
                );
            });
            field_error(ui, modal, FormField::Title, error_color);

            field_row(ui, "Description", |ui| {
                ui.add(
                    egui::TextEdit::multiline(&mut modal.form.description)
                        .hint_text("Enter event description (optional)")
                        .desired_rows(3)
                        .desired_width(f32::INFINITY),
                );
            });

            field_row(ui, "Date *", |ui| {
                ui.add(egui::TextEdit::singleline(&mut modal.form.date).desired_width(100.0));
                if let Some(mut picked) = parse_date_key(&modal.form.date) {
                    let before = picked;
                    ui.add(DatePickerButton::new(&mut picked).id_source("event_dialog_date"));
                    if picked != before {
                        modal.form.date = date_key(picked);
                    }
                }
            });
            field_error(ui, modal, FormField::Date, error_color);

            field_row(ui, "Start time *", |ui| {
                ui.add(
                    egui::TextEdit::singleline(&mut modal.form.start_time)
                        .hint_text("HH:MM")
                        .desired_width(60.0),
                );
            });
            field_error(ui, modal, FormField::StartTime, error_color);

            field_row(ui, "End time *", |ui| {
                ui.add(
                    egui::TextEdit::singleline(&mut modal.form.end_time)
                        .hint_text("HH:MM")
                        .desired_width(60.0),
                );
            });
            field_error(ui, modal, FormField::EndTime, error_color);

            field_row(ui, "Color", |ui| {
                ui.add(egui::TextEdit::singleline(&mut modal.form.color).desired_width(80.0));
                if let Some(mut color) = CalendarTheme::hex_to_color(&modal.form.color) {
                    let before = color;
                    ui.color_edit_button_srgba(&mut color);
                    if color != before {
                        modal.form.color = CalendarTheme::color_to_hex(color);
                    }
                }
            });
            ui.horizontal_wrapped(|ui| {
                ui.add_space(LABEL_WIDTH);
                for (name, hex) in COLOR_PRESETS {
                    let swatch = CalendarTheme::hex_to_color(hex).unwrap_or(Color32::GRAY);
                    let button = egui::Button::new(RichText::new(name).small().color(Color32::WHITE))
                        .fill(swatch);
                    if ui.add(button).clicked() {
                        modal.form.color = hex.to_string();
                    }
                }
            });

            ui.add_space(8.0);
            ui.separator();

            if dialog_ui.confirm_delete {
                let title = modal
                    .editing
                    .as_ref()
                    .map(|event| event.title.as_str())
                    .unwrap_or_default();
                ui.label(format!(
                    "Are you sure you want to delete \"{}\"? This action cannot be undone.",
                    title
                ));
                ui.horizontal(|ui| {
                    if ui.button(RichText::new("Delete").color(error_color)).clicked() {
                        action = EventDialogAction::Delete;
                    }
                    if ui.button("Keep").clicked() {
                        dialog_ui.confirm_delete = false;
                    }
                });
                return;
            }

            ui.horizontal(|ui| {
                if modal.is_editing()
                    && ui.button(RichText::new("Delete").color(error_color)).clicked()
                {
                    dialog_ui.confirm_delete = true;
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button(RichText::new(modal.submit_label()).strong()).clicked() {
                        action = EventDialogAction::Submit;
                    }
                    if ui.button("Cancel").clicked() {
                        action = EventDialogAction::Cancel;
                    }
                });
            });
        });

    action
}

fn field_row(ui: &mut egui::Ui, label: &str, add_contents: impl FnOnce(&mut egui::Ui)) {
    ui.horizontal(|ui| {
        ui.add_sized([LABEL_WIDTH, 18.0], egui::Label::new(label));
        add_contents(ui);
    });
}

fn field_error(ui: &mut egui::Ui, modal: &EventModal, field: FormField, color: Color32) {
    if let Some(message) = modal.errors.get(field) {
        ui.horizontal(|ui| {
            ui.add_space(LABEL_WIDTH);
            ui.label(RichText::new(message).small().color(color));
        });
    }
}
