use chrono::NaiveDate;
use egui::{Margin, RichText, Stroke, Vec2};

use super::palette::{CalendarCellPalette, HeaderPalette};
use crate::models::event::EventId;
use crate::services::calendar::DayCell;
use crate::ui_egui::theme::CalendarTheme;
use crate::utils::date::{format_month_year, weekday_labels, DAYS_PER_WEEK};

const CELL_SPACING: f32 = 2.0;
const HEADER_HEIGHT: f32 = 30.0;
const MIN_CELL_HEIGHT: f32 = 72.0;

/// Action returned from the month view
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum MonthViewAction {
    #[default]
    None,
    PreviousMonth,
    NextMonth,
    Today,
    /// Day cell clicked: select it and start a new event
    ClickDay(NaiveDate),
    /// Event chip or overflow badge clicked
    EditEvent(EventId),
}

impl MonthViewAction {
    fn merge(&mut self, other: MonthViewAction) {
        if !matches!(other, MonthViewAction::None) {
            *self = other;
        }
    }
}

pub struct MonthView;

impl MonthView {
    /// Month title with Today and previous/next navigation.
    pub fn show_header(ui: &mut egui::Ui, current_date: NaiveDate) -> MonthViewAction {
        let mut action = MonthViewAction::None;

        ui.horizontal(|ui| {
            ui.heading(RichText::new(format_month_year(current_date)).strong());

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui
                    .button("▶")
                    .on_hover_text("Next month")
                    .clicked()
                {
                    action = MonthViewAction::NextMonth;
                }
                if ui
                    .button("◀")
                    .on_hover_text("Previous month")
                    .clicked()
                {
                    action = MonthViewAction::PreviousMonth;
                }
                if ui.button("Today").clicked() {
                    action = MonthViewAction::Today;
                }
            });
        });

        action
    }

    /// Weekday strip followed by the six-week grid.
    pub fn show(ui: &mut egui::Ui, cells: &[DayCell], theme: &CalendarTheme) -> MonthViewAction {
        let mut action = MonthViewAction::None;

        let total_spacing = CELL_SPACING * (DAYS_PER_WEEK as f32 - 1.0);
        let col_width = ((ui.available_width() - total_spacing) / DAYS_PER_WEEK as f32).max(40.0);

        let header_palette = HeaderPalette::from_theme(theme);
        egui::Grid::new("month_header_grid")
            .spacing([CELL_SPACING, CELL_SPACING])
            .show(ui, |ui| {
                for label in weekday_labels() {
                    ui.allocate_ui_with_layout(
                        Vec2::new(col_width, HEADER_HEIGHT),
                        egui::Layout::centered_and_justified(egui::Direction::TopDown),
                        |ui| {
                            egui::Frame::none()
                                .fill(header_palette.header_bg)
                                .rounding(egui::Rounding::same(6.0))
                                .stroke(Stroke::new(1.0, header_palette.border))
                                .inner_margin(Margin::symmetric(8.0, 6.0))
                                .show(ui, |ui| {
                                    ui.centered_and_justified(|ui| {
                                        ui.label(
                                            RichText::new(label)
                                                .size(14.0)
                                                .color(header_palette.header_text)
                                                .strong(),
                                        );
                                    });
                                });
                        },
                    );
                }
            });

        ui.add_space(4.0);

        let rows = cells.len().div_ceil(DAYS_PER_WEEK).max(1);
        let row_height = ((ui.available_height() - CELL_SPACING * rows as f32) / rows as f32)
            .max(MIN_CELL_HEIGHT);
        let palette = CalendarCellPalette::from_theme(theme);

        egui::Grid::new("month_grid")
            .spacing([CELL_SPACING, CELL_SPACING])
            .show(ui, |ui| {
                for week in cells.chunks(DAYS_PER_WEEK) {
                    for cell in week {
                        let cell_action = Self::render_day_cell(
                            ui,
                            cell,
                            palette,
                            Vec2::new(col_width, row_height),
                        );
                        action.merge(cell_action);
                    }
                    ui.end_row();
                }
            });

        action
    }
}
