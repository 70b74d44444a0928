use chrono::NaiveDate;

use crate::calendar::{Calendar, Cell, Grid};

/// Cursor and overlay state of the browser.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TuiState {
    pub tab_index: usize,
    pub week: usize,
    pub row: usize,
    pub show_help: bool,
}

impl TuiState {
    /// Start on the first calendar with the cursor on its last day.
    pub fn new(calendars: &[Calendar]) -> Self {
        let mut state = Self::default();
        if let Some(calendar) = calendars.first() {
            state.jump_end(&calendar.weeks);
        }
        state
    }

    pub fn selected<'a>(&self, calendars: &'a [Calendar]) -> Option<&'a Calendar> {
        calendars.get(self.tab_index)
    }

    pub fn selected_day<'a>(&self, grid: &'a Grid) -> Option<(NaiveDate, &'a Cell)> {
        let week = grid.weeks.get(self.week)?;
        week.cells.get(self.row).map(|cell| (week.date_of(self.row), cell))
    }

    pub fn move_left(&mut self, grid: &Grid) {
        self.week = self.week.saturating_sub(1);
        self.clamp(grid);
    }

    pub fn move_right(&mut self, grid: &Grid) {
        if self.week + 1 < grid.num_weeks() {
            self.week += 1;
        }
        self.clamp(grid);
    }

    pub fn move_up(&mut self, grid: &Grid) {
        self.row = self.row.saturating_sub(1);
        self.clamp(grid);
    }

    pub fn move_down(&mut self, grid: &Grid) {
        if self.row < 6 {
            self.row += 1;
        }
        self.clamp(grid);
    }

    pub fn jump_home(&mut self, grid: &Grid) {
        self.week = 0;
        self.row = grid
            .weeks
            .first()
            .and_then(|w| w.cells.iter().position(Cell::is_present))
            .unwrap_or(0);
        self.clamp(grid);
    }

    pub fn jump_end(&mut self, grid: &Grid) {
        self.week = grid.num_weeks().saturating_sub(1);
        self.row = grid.weeks.last().map(|w| w.len().saturating_sub(1)).unwrap_or(0);
    }

    pub fn next_tab(&mut self, calendars: &[Calendar]) {
        if calendars.is_empty() {
            return;
        }
        self.tab_index = (self.tab_index + 1) % calendars.len();
        self.clamp(&calendars[self.tab_index].weeks);
    }

    pub fn previous_tab(&mut self, calendars: &[Calendar]) {
        if calendars.is_empty() {
            return;
        }
        self.tab_index = if self.tab_index == 0 {
            calendars.len() - 1
        } else {
            self.tab_index - 1
        };
        self.clamp(&calendars[self.tab_index].weeks);
    }

    /// Keep the cursor on an existing cell; the last column may be short.
    fn clamp(&mut self, grid: &Grid) {
        if grid.is_empty() {
            self.week = 0;
            self.row = 0;
            return;
        }
        self.week = self.week.min(grid.num_weeks() - 1);
        let len = grid.weeks[self.week].len();
        self.row = self.row.min(len.saturating_sub(1));
    }
}
