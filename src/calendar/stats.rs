use serde::Serialize;

use super::grid::{Cell, Grid};
use crate::model::ContributionRecord;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct YearStats {
    /// Sum of the counts shown in the grid.
    pub shown_total: u64,
    pub active_days: usize,
    pub busiest_day: Option<ContributionRecord>,
    pub longest_streak: usize,
    /// Streak of active days ending on the last day of the grid.
    pub current_streak: usize,
}

impl YearStats {
    pub fn from_grid(grid: &Grid) -> Self {
        let mut stats = Self::default();
        let mut streak = 0;

        for (_, cell) in grid.days() {
            match cell {
                Cell::Present(record) if record.count > 0 => {
                    stats.shown_total += record.count as u64;
                    stats.active_days += 1;
                    streak += 1;
                    stats.longest_streak = stats.longest_streak.max(streak);

                    let busier = stats
                        .busiest_day
                        .as_ref()
                        .map_or(true, |best| record.count > best.count);
                    if busier {
                        stats.busiest_day = Some(record.clone());
                    }
                }
                _ => streak = 0,
            }
        }

        stats.current_streak = streak;
        stats
    }
}
