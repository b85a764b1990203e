//! Common utility functions for calendar views.

use egui::Color32;

use crate::models::event::Event;
use crate::ui_egui::theme::CalendarTheme;

/// Fallback when an event carries a color egui cannot parse.
pub const FALLBACK_EVENT_COLOR: Color32 = Color32::from_rgb(59, 130, 246);

/// Color an event is drawn with.
pub fn event_color(event: &Event) -> Color32 {
    CalendarTheme::hex_to_color(event.display_color()).unwrap_or(FALLBACK_EVENT_COLOR)
}

/// Black or white, whichever reads better on `background`.
pub fn contrast_text(background: Color32) -> Color32 {
    let luma = 0.299 * background.r() as f32
        + 0.587 * background.g() as f32
        + 0.114 * background.b() as f32;
    if luma > 170.0 {
        Color32::from_rgb(17, 24, 39)
    } else {
        Color32::WHITE
    }
}

/// Hover text for an event chip.
pub fn format_event_tooltip(event: &Event) -> String {
    let mut lines = vec![
        event.title.clone(),
        format!(
            "{} - {} ({})",
            event.start_time,
            event.end_time,
            event.date.format("%A, %B %-d")
        ),
    ];

    if let Some(description) = event.description.as_deref().filter(|d| !d.is_empty()) {
        let preview: String = description.chars().take(100).collect();
        if preview.len() < description.len() {
            lines.push(format!("\n{}...", preview));
        } else {
            lines.push(format!("\n{}", preview));
        }
    }

    lines.push("\nClick to edit".to_string());
    lines.join("\n")
}
