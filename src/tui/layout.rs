use ratatui::layout::{Constraint, Direction, Layout, Rect};
use std::ops::Range;

pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Window of week columns that fits in `capacity` columns while keeping
/// `selected` visible, centred when possible.
pub fn visible_weeks(num_weeks: usize, selected: usize, capacity: usize) -> Range<usize> {
    if capacity == 0 || num_weeks == 0 {
        return 0..0;
    }
    if num_weeks <= capacity {
        return 0..num_weeks;
    }
    let start = selected
        .saturating_sub(capacity / 2)
        .min(num_weeks - capacity);
    start..start + capacity
}
