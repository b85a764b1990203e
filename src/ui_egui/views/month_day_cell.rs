//! Day cell rendering for the month view.
//!
//! Paints the day number, up to three event chips and a "+N more" badge, and
//! turns pointer clicks into a [`MonthViewAction`].

use egui::{Color32, Pos2, Rect, Sense, Stroke, Vec2};

use super::month_view::{MonthView, MonthViewAction};
use super::palette::CalendarCellPalette;
use super::utils::{contrast_text, event_color, format_event_tooltip};
use crate::models::event::Event;
use crate::services::calendar::DayCell;
use crate::utils::date::format_day_number;

/// Chips drawn before the overflow badge takes over
pub const VISIBLE_EVENTS: usize = 3;

const CHIP_HEIGHT: f32 = 16.0;
const CHIP_GAP: f32 = 2.0;
const DAY_NUMBER_HEIGHT: f32 = 24.0;

impl MonthView {
    /// Truncate text to fit within a given pixel width, appending "…".
    fn truncate_single_line_to_width(
        ui: &egui::Ui,
        text: &str,
        font_id: &egui::FontId,
        max_width: f32,
    ) -> String {
        if max_width <= 0.0 {
            return String::new();
        }

        let measure_width = |candidate: &str| {
            let layout_job = egui::text::LayoutJob::simple(
                candidate.to_string(),
                font_id.clone(),
                Color32::WHITE,
                f32::INFINITY,
            );
            ui.fonts(|f| f.layout_job(layout_job).size().x)
        };

        if measure_width(text) <= max_width {
            return text.to_string();
        }

        let ellipsis = "…";
        if measure_width(ellipsis) > max_width {
            return String::new();
        }

        let mut char_boundaries: Vec<usize> = text.char_indices().map(|(idx, _)| idx).collect();
        char_boundaries.push(text.len());

        let mut low = 0usize;
        let mut high = char_boundaries.len().saturating_sub(1);

        while low < high {
            let mid = (low + high).div_ceil(2);
            let candidate = format!("{}{}", &text[..char_boundaries[mid]], ellipsis);

            if measure_width(&candidate) <= max_width {
                low = mid;
            } else {
                high = mid.saturating_sub(1);
            }
        }

        format!("{}{}", &text[..char_boundaries[low]], ellipsis)
    }

    pub(super) fn render_day_cell(
        ui: &mut egui::Ui,
        cell: &DayCell,
        palette: CalendarCellPalette,
        size: Vec2,
    ) -> MonthViewAction {
        let (rect, response) = ui.allocate_exact_size(size, Sense::click());
        let painter = ui.painter();

        let bg_color = if cell.is_today {
            palette.today_bg
        } else if cell.is_current_month {
            palette.regular_bg
        } else {
            palette.outside_bg
        };
        painter.rect_filled(rect, 2.0, bg_color);
        painter.rect_stroke(rect, 2.0, Stroke::new(1.0, palette.border));

        if cell.has_events() {
            let marker = Rect::from_min_size(rect.min, Vec2::new(2.0, rect.height()));
            painter.rect_filled(marker, 0.0, palette.accent.gamma_multiply(0.7));
        }

        if cell.is_selected {
            painter.rect_stroke(rect.shrink(1.0), 2.0, Stroke::new(2.0, palette.accent));
        }

        if response.hovered() {
            painter.rect_filled(rect, 2.0, palette.hover_overlay);
            ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
        }

        // Day number, in a filled circle for today
        let number_center = Pos2::new(rect.left() + 16.0, rect.top() + 14.0);
        let number_color = if cell.is_today {
            painter.circle_filled(number_center, 11.0, palette.accent);
            Color32::WHITE
        } else if cell.is_current_month {
            palette.text
        } else {
            palette.outside_text
        };
        painter.text(
            number_center,
            egui::Align2::CENTER_CENTER,
            format_day_number(cell.date),
            egui::FontId::proportional(13.0),
            number_color,
        );

        let (shown, hidden) = cell.visible_events(VISIBLE_EVENTS);
        let mut hitboxes: Vec<(Rect, &Event)> = Vec::with_capacity(shown.len() + 1);
        let mut y = rect.top() + DAY_NUMBER_HEIGHT + 2.0;
        let font_id = egui::FontId::proportional(11.0);

        for event in shown {
            if y + CHIP_HEIGHT > rect.bottom() {
                break;
            }
            let chip = Rect::from_min_size(
                Pos2::new(rect.left() + 3.0, y),
                Vec2::new(rect.width() - 6.0, CHIP_HEIGHT),
            );
            let fill = event_color(event);
            painter.rect_filled(chip, 2.0, fill);

            let title =
                Self::truncate_single_line_to_width(ui, &event.title, &font_id, chip.width() - 6.0);
            painter.text(
                Pos2::new(chip.left() + 3.0, chip.center().y),
                egui::Align2::LEFT_CENTER,
                title,
                font_id.clone(),
                contrast_text(fill),
            );

            hitboxes.push((chip, event));
            y += CHIP_HEIGHT + CHIP_GAP;
        }

        let mut more_rect = None;
        if hidden > 0 && y + 14.0 <= rect.bottom() {
            let badge = Rect::from_min_size(Pos2::new(rect.right() - 52.0, y), Vec2::new(48.0, 14.0));
            painter.rect_filled(badge, 7.0, palette.badge_bg);
            painter.text(
                badge.center(),
                egui::Align2::CENTER_CENTER,
                format!("+{} more", hidden),
                egui::FontId::proportional(10.0),
                palette.badge_text,
            );
            more_rect = Some(badge);
        }

        let pointer = response
            .interact_pointer_pos()
            .or_else(|| ui.input(|i| i.pointer.hover_pos()));
        let hovered_event = pointer.and_then(|pos| {
            hitboxes
                .iter()
                .find(|(hit, _)| hit.contains(pos))
                .map(|(hit, event)| (*hit, *event))
        });
        let over_more = matches!((pointer, more_rect), (Some(pos), Some(more)) if more.contains(pos));

        if response.hovered() {
            if let Some((hit, event)) = hovered_event {
                ui.painter().rect_stroke(
                    hit.expand(1.0),
                    3.0,
                    Stroke::new(1.5, Color32::from_rgba_unmultiplied(255, 255, 255, 180)),
                );
                response.clone().on_hover_text_at_pointer(format_event_tooltip(event));
            } else if over_more {
                let titles: Vec<String> = cell.events[VISIBLE_EVENTS..]
                    .iter()
                    .map(|event| format!("• {} {}", event.start_time, event.title))
                    .collect();
                response.clone().on_hover_text_at_pointer(titles.join("\n"));
            }
        }

        if !response.clicked() {
            return MonthViewAction::None;
        }

        // Chips and the badge take priority over the cell itself
        if let Some((_, event)) = hovered_event {
            MonthViewAction::EditEvent(event.id.clone())
        } else if over_more {
            // Overflow badge edits the first event of the day
            match cell.events.first() {
                Some(first) => MonthViewAction::EditEvent(first.id.clone()),
                None => MonthViewAction::ClickDay(cell.date),
            }
        } else {
            MonthViewAction::ClickDay(cell.date)
        }
    }
}
