use ratatui::style::{Color, Modifier, Style};

mod calendar;
mod help;

pub use calendar::{draw_calendar_view, draw_side_panel};
pub use help::draw_help_overlay;

/// Style for the weekday gutter.
pub(crate) fn label_style() -> Style {
    Style::default().fg(Color::Gray).add_modifier(Modifier::DIM)
}
