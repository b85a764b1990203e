mod month_day_cell;
pub mod month_view;
mod palette;
pub mod utils;

pub use month_view::{MonthView, MonthViewAction};
