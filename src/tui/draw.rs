use ratatui::style::{Color, Modifier, Style};

use crate::calendar::Cell;
use crate::output::LEVEL_COLORS;
use crate::util::level_for;

pub const SQUARE: &str = "■ ";
pub const EMPTY: &str = "  ";

/// Style of one calendar square; the cursor is drawn reversed.
pub fn cell_style(cell: &Cell, max: u32, selected: bool) -> Style {
    let base = match cell {
        Cell::Present(record) => {
            let level = level_for(record, max) as usize;
            Style::default().fg(Color::Indexed(LEVEL_COLORS[level.min(LEVEL_COLORS.len() - 1)]))
        }
        Cell::Absent => Style::default().fg(Color::DarkGray),
    };
    if selected {
        base.bg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        base
    }
}

pub fn cell_symbol(cell: &Cell, selected: bool) -> &'static str {
    match cell {
        Cell::Present(_) => SQUARE,
        Cell::Absent if selected => "· ",
        Cell::Absent => EMPTY,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ContributionRecord;
    use chrono::NaiveDate;

    #[test]
    fn present_cells_use_level_palette() {
        let record = ContributionRecord::new(NaiveDate::from_ymd_opt(2021, 1, 1).unwrap(), 10);
        let style = cell_style(&Cell::Present(record), 10, false);
        assert_eq!(style.fg, Some(Color::Indexed(LEVEL_COLORS[4])));
        assert_eq!(style.bg, None);
    }

    #[test]
    fn selection_highlights_absent_cells() {
        let style = cell_style(&Cell::Absent, 10, true);
        assert_eq!(style.bg, Some(Color::Yellow));
        assert_eq!(cell_symbol(&Cell::Absent, true), "· ");
        assert_eq!(cell_symbol(&Cell::Absent, false), EMPTY);
    }
}
