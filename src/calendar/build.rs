use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use std::collections::BTreeSet;

use super::grid::{build_grid, Grid};
use super::labels::{derive_month_labels, MonthLabel};
use super::stats::YearStats;
use crate::error::Result;
use crate::model::{ContributionsResponse, DateRange, YearSelection};
use crate::util::WeekStart;

#[derive(Debug, Clone, Serialize)]
pub struct Calendar {
    pub year: i32,
    pub rolling: bool,
    pub total: u64,
    pub week_start: WeekStart,
    pub range: DateRange,
    pub month_labels: Vec<MonthLabel>,
    pub stats: YearStats,
    pub weeks: Grid,
}

impl Calendar {
    pub fn build(
        selection: YearSelection,
        response: &ContributionsResponse,
        week_start: WeekStart,
        today: NaiveDate,
    ) -> Result<Self> {
        let range = DateRange::for_selection(selection, today)?;
        let weeks = build_grid(&range, &response.contributions, week_start)?;
        let month_labels = derive_month_labels(&weeks);
        let stats = YearStats::from_grid(&weeks);

        let (year, rolling, total) = match selection {
            YearSelection::Year(year) => (year, false, response.total_for_year(year)),
            YearSelection::Rolling => (today.year(), true, response.rolling_total()),
        };

        Ok(Self {
            year,
            rolling,
            total,
            week_start,
            range,
            month_labels,
            stats,
            weeks,
        })
    }

    pub fn title(&self) -> String {
        if self.rolling {
            "last year".to_string()
        } else {
            self.year.to_string()
        }
    }
}

/// What to build from a response: the rolling window, specific years, or
/// every year the response reports (`years` empty).
#[derive(Debug, Clone)]
pub struct BuildOptions {
    pub rolling: bool,
    pub years: Vec<i32>,
    pub week_start: WeekStart,
    pub today: NaiveDate,
}

pub fn calendars_from_response(
    response: &ContributionsResponse,
    options: &BuildOptions,
) -> Result<Vec<Calendar>> {
    if response.contributions.is_empty() {
        log::info!("response contains no contributions");
        return Ok(Vec::new());
    }

    if options.rolling {
        let calendar = Calendar::build(
            YearSelection::Rolling,
            response,
            options.week_start,
            options.today,
        )?;
        return Ok(vec![calendar]);
    }

    let years: BTreeSet<i32> = if !options.years.is_empty() {
        options.years.iter().copied().collect()
    } else {
        let reported: BTreeSet<i32> = response.year_summaries().iter().map(|s| s.year).collect();
        if reported.is_empty() {
            response.contributions.iter().map(|r| r.date.year()).collect()
        } else {
            reported
        }
    };

    years
        .into_iter()
        .map(|year| {
            Calendar::build(
                YearSelection::Year(year),
                response,
                options.week_start,
                options.today,
            )
        })
        .collect()
}
