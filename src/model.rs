use chrono::{DateTime, Days, Months, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

use crate::error::{CalendarError, Result};
use crate::util::{parse_date, WeekStart};

pub const SCHEMA_VERSION: u32 = 1;

/// Key under which the API reports the rolling twelve-month summary.
pub const ROLLING_SUMMARY_KEY: &str = "lastYear";

/// Contributions on a single day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributionRecord {
    #[serde(deserialize_with = "deserialize_date")]
    pub date: NaiveDate,
    pub count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<u8>,
}

impl ContributionRecord {
    pub fn new(date: NaiveDate, count: u32) -> Self {
        Self { date, count, level: None }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearSummary {
    pub year: i32,
    #[serde(rename = "total")]
    pub total_contributions: u64,
}

/// Response envelope of the contributions API.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContributionsResponse {
    #[serde(default)]
    pub years: BTreeMap<String, YearSummary>,
    #[serde(default)]
    pub contributions: Vec<ContributionRecord>,
}

impl ContributionsResponse {
    /// Summaries keyed by a numeric year, ascending. The rolling entry is skipped.
    pub fn year_summaries(&self) -> Vec<&YearSummary> {
        let mut summaries: Vec<_> = self
            .years
            .iter()
            .filter(|(key, _)| key.parse::<i32>().is_ok())
            .map(|(_, summary)| summary)
            .collect();
        summaries.sort_by_key(|s| s.year);
        summaries
    }

    pub fn total_for_year(&self, year: i32) -> u64 {
        self.years
            .get(&year.to_string())
            .or_else(|| self.years.values().find(|s| s.year == year))
            .map(|s| s.total_contributions)
            .unwrap_or(0)
    }

    /// Sort records by date and keep the first record seen for each day.
    pub fn normalize(&mut self) {
        self.contributions.sort_by_key(|r| r.date);
        self.contributions.dedup_by_key(|r| r.date);
    }

    pub fn rolling_total(&self) -> u64 {
        self.years
            .get(ROLLING_SUMMARY_KEY)
            .map(|s| s.total_contributions)
            .unwrap_or(0)
    }
}

/// Error body returned by the API on non-2xx responses.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    pub error: String,
}

fn deserialize_date<'de, D>(deserializer: D) -> std::result::Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_date(&raw).map_err(serde::de::Error::custom)
}

/// Which days a calendar covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YearSelection {
    Year(i32),
    /// The twelve months ending on (and including) today.
    Rolling,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateRange {
    pub first: NaiveDate,
    pub last: NaiveDate,
}

impl DateRange {
    pub fn for_selection(selection: YearSelection, today: NaiveDate) -> Result<Self> {
        match selection {
            YearSelection::Year(year) => {
                let first = NaiveDate::from_ymd_opt(year, 1, 1);
                let last = NaiveDate::from_ymd_opt(year, 12, 31);
                match (first, last) {
                    (Some(first), Some(last)) => Ok(Self { first, last }),
                    _ => Err(CalendarError::InvalidDate(format!("year {year} is out of range"))),
                }
            }
            YearSelection::Rolling => {
                let first = today
                    .checked_sub_months(Months::new(12))
                    .and_then(|d| d.checked_add_days(Days::new(1)))
                    .ok_or_else(|| {
                        CalendarError::InvalidDate(format!("cannot go back a year from {today}"))
                    })?;
                Ok(Self { first, last: today })
            }
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.first && date <= self.last
    }

    pub fn num_days(&self) -> i64 {
        (self.last - self.first).num_days() + 1
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CalendarOutput {
    pub version: u32,
    pub generated_at: DateTime<Utc>,
    pub username: String,
    pub week_start: WeekStart,
    pub calendars: Vec<crate::calendar::Calendar>,
}
