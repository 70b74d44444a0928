use chrono::{Days, NaiveDate};
use serde::Serialize;

use crate::error::Result;
use crate::model::{ContributionRecord, DateRange, YearSelection};
use crate::util::WeekStart;

/// One day slot. Serialises as the record, or `null` when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Cell {
    Present(ContributionRecord),
    Absent,
}

impl Cell {
    pub fn record(&self) -> Option<&ContributionRecord> {
        match self {
            Cell::Present(record) => Some(record),
            Cell::Absent => None,
        }
    }

    pub fn count(&self) -> Option<u32> {
        self.record().map(|r| r.count)
    }

    pub fn is_present(&self) -> bool {
        matches!(self, Cell::Present(_))
    }
}

/// A grid column. `start` is the date of the first cell, even when that cell is absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Week {
    pub start: NaiveDate,
    pub cells: Vec<Cell>,
}

impl Week {
    pub fn date_of(&self, row: usize) -> NaiveDate {
        self.start + Days::new(row as u64)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn last_date(&self) -> Option<NaiveDate> {
        self.cells.len().checked_sub(1).map(|row| self.date_of(row))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct Grid {
    pub weeks: Vec<Week>,
}

impl Grid {
    pub fn is_empty(&self) -> bool {
        self.weeks.is_empty()
    }

    pub fn num_weeks(&self) -> usize {
        self.weeks.len()
    }

    pub fn get(&self, week: usize, row: usize) -> Option<&Cell> {
        self.weeks.get(week).and_then(|w| w.cells.get(row))
    }

    /// Every cell with its date, in chronological order.
    pub fn days(&self) -> impl Iterator<Item = (NaiveDate, &Cell)> + '_ {
        self.weeks.iter().flat_map(|week| {
            week.cells
                .iter()
                .enumerate()
                .map(move |(row, cell)| (week.date_of(row), cell))
        })
    }

    pub fn records(&self) -> impl Iterator<Item = &ContributionRecord> + '_ {
        self.weeks
            .iter()
            .flat_map(|week| week.cells.iter().filter_map(Cell::record))
    }

    pub fn max_count(&self) -> u32 {
        self.records().map(|r| r.count).max().unwrap_or(0)
    }
}

/// Arrange `records` into week columns covering the selected year.
///
/// `records` must be sorted ascending by date with at most one entry per day.
/// Days without a record are [`Cell::Absent`]; an empty input yields an empty grid.
/// `today` is only consulted for [`YearSelection::Rolling`].
pub fn build_year_grid(
    selection: YearSelection,
    records: &[ContributionRecord],
    week_start: WeekStart,
    today: NaiveDate,
) -> Result<Grid> {
    if records.is_empty() {
        return Ok(Grid::default());
    }
    let range = DateRange::for_selection(selection, today)?;
    build_grid(&range, records, week_start)
}

/// Fails only when the aligned first week would start before the earliest representable date.
pub fn build_grid(
    range: &DateRange,
    records: &[ContributionRecord],
    week_start: WeekStart,
) -> Result<Grid> {
    debug_assert!(
        records.windows(2).all(|pair| pair[0].date < pair[1].date),
        "contribution records must be sorted and unique per date"
    );

    if records.is_empty() {
        return Ok(Grid::default());
    }

    let mut weeks = Vec::new();
    let mut start = week_start.align(range.first)?;

    while start <= range.last {
        let cells = (0..7)
            .map_while(|offset| start.checked_add_days(Days::new(offset)))
            .take_while(|date| *date <= range.last)
            .map(|date| {
                if date < range.first {
                    Cell::Absent
                } else {
                    lookup(records, date)
                }
            })
            .collect();
        weeks.push(Week { start, cells });

        match start.checked_add_days(Days::new(7)) {
            Some(next) => start = next,
            None => break,
        }
    }

    log::debug!(
        "built grid for {}..{}: {} weeks from {} records",
        range.first,
        range.last,
        weeks.len(),
        records.len()
    );

    Ok(Grid { weeks })
}

fn lookup(records: &[ContributionRecord], date: NaiveDate) -> Cell {
    records
        .binary_search_by_key(&date, |r| r.date)
        .map(|idx| Cell::Present(records[idx].clone()))
        .unwrap_or(Cell::Absent)
}
