use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde::{Serialize, Serializer};

use crate::error::{CalendarError, Result};
use crate::model::ContributionRecord;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn parse_date(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT)
        .map_err(|_| CalendarError::InvalidDate(format!("'{raw}' (expected YYYY-MM-DD)")))
}

/// First day of a calendar week, 0 = Sunday through 6 = Saturday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct WeekStart(u8);

impl WeekStart {
    pub const SUNDAY: Self = Self(0);
    pub const MONDAY: Self = Self(1);

    pub fn new(day: u8) -> Result<Self> {
        if day > 6 {
            return Err(CalendarError::InvalidWeekStart(day));
        }
        Ok(Self(day))
    }

    pub fn index(self) -> u8 {
        self.0
    }

    pub fn weekday(self) -> Weekday {
        self.weekday_at(0)
    }

    /// Weekday shown in grid row `row`.
    pub fn weekday_at(self, row: usize) -> Weekday {
        match (self.0 as usize + row) % 7 {
            0 => Weekday::Sun,
            1 => Weekday::Mon,
            2 => Weekday::Tue,
            3 => Weekday::Wed,
            4 => Weekday::Thu,
            5 => Weekday::Fri,
            _ => Weekday::Sat,
        }
    }

    /// Days between the start of the week containing `date` and `date`.
    pub fn offset_of(self, date: NaiveDate) -> u32 {
        (date.weekday().num_days_from_sunday() + 7 - self.0 as u32) % 7
    }

    /// The week-start weekday on or before `date`.
    ///
    /// Fails when that day lies before the first representable date.
    pub fn align(self, date: NaiveDate) -> Result<NaiveDate> {
        date.checked_sub_days(Days::new(self.offset_of(date) as u64))
            .ok_or_else(|| {
                CalendarError::InvalidDate(format!(
                    "week containing {} starts before the earliest supported date",
                    date.format(DATE_FORMAT)
                ))
            })
    }
}

impl Serialize for WeekStart {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.0)
    }
}

/// Intensity bucket 0..=4 for a day. API-supplied levels win.
pub fn level_for(record: &ContributionRecord, max: u32) -> u8 {
    if let Some(level) = record.level {
        return level.min(4);
    }
    if record.count == 0 || max == 0 {
        return 0;
    }
    let scaled = (record.count as u64 * 4).div_ceil(max as u64);
    scaled.clamp(1, 4) as u8
}
