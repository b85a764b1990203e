use crate::ui_egui::theme::CalendarTheme;
use egui::Color32;

fn with_alpha(color: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
}

#[derive(Clone, Copy)]
pub(crate) struct CalendarCellPalette {
    pub regular_bg: Color32,
    pub outside_bg: Color32,
    pub today_bg: Color32,
    pub border: Color32,
    pub accent: Color32,
    pub text: Color32,
    pub outside_text: Color32,
    pub hover_overlay: Color32,
    pub badge_bg: Color32,
    pub badge_text: Color32,
}

impl CalendarCellPalette {
    pub fn from_theme(theme: &CalendarTheme) -> Self {
        Self {
            regular_bg: theme.day_background,
            outside_bg: theme.outside_month_background,
            today_bg: theme.today_background,
            border: theme.day_border,
            accent: theme.today_border,
            text: theme.text_primary,
            outside_text: theme.text_secondary,
            hover_overlay: with_alpha(theme.today_border, if theme.is_dark { 40 } else { 24 }),
            badge_bg: if theme.is_dark {
                Color32::from_gray(90)
            } else {
                Color32::from_rgb(75, 85, 99)
            },
            badge_text: Color32::WHITE,
        }
    }
}

#[derive(Clone, Copy)]
pub(crate) struct HeaderPalette {
    pub header_bg: Color32,
    pub header_text: Color32,
    pub border: Color32,
}

impl HeaderPalette {
    pub fn from_theme(theme: &CalendarTheme) -> Self {
        Self {
            header_bg: theme.header_background,
            header_text: theme.header_text,
            border: theme.day_border,
        }
    }
}
