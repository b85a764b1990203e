//! Theme module for the egui calendar application
//!
//! Defines the CalendarTheme colors for the two resolved appearances and
//! applies them to the egui context.

use egui::Color32;

use crate::services::theme::ResolvedTheme;

/// Colors used across the calendar window
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarTheme {
    /// Whether this is a dark theme (affects base egui::Visuals)
    pub is_dark: bool,

    /// Application background color
    pub app_background: Color32,

    /// Background of cells outside the displayed month
    pub outside_month_background: Color32,

    /// Today's date background color
    pub today_background: Color32,

    /// Today's date and selection accent
    pub today_border: Color32,

    /// Regular day background color
    pub day_background: Color32,

    /// Day cell border color
    pub day_border: Color32,

    /// Weekday header strip
    pub header_background: Color32,
    pub header_text: Color32,

    /// Primary text color (headings, dates)
    pub text_primary: Color32,

    /// Secondary text color (days outside the month, hints)
    pub text_secondary: Color32,

    /// Field error and warning text
    pub error_text: Color32,
}

impl CalendarTheme {
    pub fn light() -> Self {
        Self {
            is_dark: false,
            app_background: Color32::from_rgb(245, 245, 245),
            outside_month_background: Color32::from_rgb(249, 250, 251),
            today_background: Color32::from_rgb(239, 246, 255),
            today_border: Color32::from_rgb(37, 99, 235),
            day_background: Color32::from_rgb(255, 255, 255),
            day_border: Color32::from_rgb(229, 231, 235),
            header_background: Color32::from_rgb(243, 244, 246),
            header_text: Color32::from_rgb(75, 85, 99),
            text_primary: Color32::from_rgb(17, 24, 39),
            text_secondary: Color32::from_rgb(156, 163, 175),
            error_text: Color32::from_rgb(220, 38, 38),
        }
    }

    pub fn dark() -> Self {
        Self {
            is_dark: true,
            app_background: Color32::from_rgb(30, 30, 30),
            outside_month_background: Color32::from_rgb(34, 34, 36),
            today_background: Color32::from_rgb(50, 60, 80),
            today_border: Color32::from_rgb(100, 150, 255),
            day_background: Color32::from_rgb(40, 40, 40),
            day_border: Color32::from_rgb(60, 60, 60),
            header_background: Color32::from_rgb(48, 48, 52),
            header_text: Color32::from_rgb(200, 200, 205),
            text_primary: Color32::from_rgb(240, 240, 240),
            text_secondary: Color32::from_rgb(120, 120, 125),
            error_text: Color32::from_rgb(248, 113, 113),
        }
    }

    pub fn for_resolved(theme: ResolvedTheme) -> Self {
        match theme {
            ResolvedTheme::Light => Self::light(),
            ResolvedTheme::Dark => Self::dark(),
        }
    }

    /// Apply this theme to an egui context
    pub fn apply_to_context(&self, ctx: &egui::Context) {
        let mut visuals = if self.is_dark {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };

        visuals.window_fill = self.day_background;
        visuals.panel_fill = self.app_background;
        visuals.selection.stroke.color = self.today_border;
        visuals.override_text_color = Some(self.text_primary);

        ctx.set_visuals(visuals);
    }

    /// Parse `#RRGGBB` or `#RGB` into a color
    pub fn hex_to_color(hex: &str) -> Option<Color32> {
        let hex = hex.trim().trim_start_matches('#');
        if !hex.is_ascii() {
            return None;
        }

        match hex.len() {
            6 => {
                let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
                let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
                let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
                Some(Color32::from_rgb(r, g, b))
            }
            3 => {
                let r = u8::from_str_radix(&hex[0..1], 16).ok()? * 17;
                let g = u8::from_str_radix(&hex[1..2], 16).ok()? * 17;
                let b = u8::from_str_radix(&hex[2..3], 16).ok()? * 17;
                Some(Color32::from_rgb(r, g, b))
            }
            _ => None,
        }
    }

    /// Convert Color32 to the lowercase hex form events are stored with
    pub fn color_to_hex(color: Color32) -> String {
        format!("#{:02x}{:02x}{:02x}", color.r(), color.g(), color.b())
    }
}
