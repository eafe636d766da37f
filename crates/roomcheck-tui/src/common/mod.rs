// Reusable widgets shared across the UI modules
pub mod calendar;

pub use calendar::{CalendarWidget, centered_rect, render_calendar_below};
