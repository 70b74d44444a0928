use chrono::Datelike;
use serde::Serialize;

use super::grid::Grid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthLabel {
    pub week_index: usize,
    pub text: String,
}

/// Label each column whose first day starts a new month.
///
/// A December anchor on the very first column is skipped so a January-first
/// year does not open with a label for the previous year.
pub fn derive_month_labels(grid: &Grid) -> Vec<MonthLabel> {
    let mut labels = Vec::new();
    let mut previous_month = None;

    for (week_index, week) in grid.weeks.iter().enumerate() {
        let month = week.start.month();
        if week_index == 0 && month == 12 {
            continue;
        }
        if previous_month != Some(month) {
            labels.push(MonthLabel {
                week_index,
                text: week.start.format("%b").to_string(),
            });
            previous_month = Some(month);
        }
    }

    labels
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::grid::build_year_grid;
    use crate::model::{ContributionRecord, YearSelection};
    use crate::util::WeekStart;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn daily(first: NaiveDate, last: NaiveDate) -> Vec<ContributionRecord> {
        first
            .iter_days()
            .take_while(|d| *d <= last)
            .map(|d| ContributionRecord::new(d, 1))
            .collect()
    }

    #[test]
    fn december_anchor_on_first_column_is_suppressed() {
        let records = daily(date(2021, 1, 1), date(2021, 12, 31));
        let grid =
            build_year_grid(YearSelection::Year(2021), &records, WeekStart::SUNDAY, date(2030, 1, 1))
                .unwrap();
        let labels = derive_month_labels(&grid);

        let texts: Vec<_> = labels.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(
            texts,
            vec!["Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec"]
        );
        // 2021-01-03 is the first Sunday of the year
        assert_eq!(labels[0].week_index, 1);
        assert!(labels.windows(2).all(|p| p[0].week_index < p[1].week_index));
    }

    #[test]
    fn first_column_label_when_not_december() {
        // 2023-01-01 is a Sunday, so the first column is anchored in January
        let records = daily(date(2023, 1, 1), date(2023, 12, 31));
        let grid =
            build_year_grid(YearSelection::Year(2023), &records, WeekStart::SUNDAY, date(2030, 1, 1))
                .unwrap();
        let labels = derive_month_labels(&grid);
        assert_eq!(labels.len(), 12);
        assert_eq!(labels[0], MonthLabel { week_index: 0, text: "Jan".to_string() });
    }

    #[test]
    fn rolling_window_labels_every_touched_month() {
        let today = date(2023, 6, 15);
        let records = daily(date(2022, 6, 16), today);
        let grid = build_year_grid(YearSelection::Rolling, &records, WeekStart::SUNDAY, today)
            .unwrap();
        let labels = derive_month_labels(&grid);

        // June 2022 through June 2023
        assert_eq!(labels.len(), 13);
        assert_eq!(labels.first().unwrap().text, "Jun");
        assert_eq!(labels.first().unwrap().week_index, 0);
        assert_eq!(labels.last().unwrap().text, "Jun");
    }

    #[test]
    fn rolling_window_starting_in_december() {
        // starts Saturday 2022-12-31, first column anchored on 2022-12-25
        let today = date(2023, 12, 30);
        let records = daily(date(2022, 12, 31), today);
        let grid = build_year_grid(YearSelection::Rolling, &records, WeekStart::SUNDAY, today)
            .unwrap();
        let labels = derive_month_labels(&grid);

        assert_eq!(grid.weeks[0].start, date(2022, 12, 25));
        assert_eq!(labels.len(), 12);
        assert_eq!(labels[0], MonthLabel { week_index: 1, text: "Jan".to_string() });
        assert_eq!(labels.last().unwrap().text, "Dec");
    }

    #[test]
    fn suppression_only_applies_to_first_column() {
        // first column anchored 2022-12-04; the following Sundays are still December
        let today = date(2023, 12, 9);
        let records = daily(date(2022, 12, 10), today);
        let grid = build_year_grid(YearSelection::Rolling, &records, WeekStart::SUNDAY, today)
            .unwrap();
        let labels = derive_month_labels(&grid);

        assert_eq!(labels[0], MonthLabel { week_index: 1, text: "Dec".to_string() });
        assert_eq!(labels[1].text, "Jan");
        assert_eq!(labels.len(), 13);
    }

    #[test]
    fn label_count_matches_months_touched() {
        use chrono::Datelike;
        use std::collections::BTreeSet;

        for year in 2015..=2030 {
            for day in 0..7 {
                let ws = WeekStart::new(day).unwrap();
                let records = daily(date(year, 1, 1), date(year, 12, 31));
                let grid =
                    build_year_grid(YearSelection::Year(year), &records, ws, date(2040, 1, 1))
                        .unwrap();

                let anchor = grid.weeks[0].start;
                let months: BTreeSet<_> = anchor
                    .iter_days()
                    .take_while(|d| *d <= date(year, 12, 31))
                    .map(|d| (d.year(), d.month()))
                    .collect();
                let expected = months.len() - usize::from(anchor.month() == 12);

                assert_eq!(derive_month_labels(&grid).len(), expected, "{year} start {day}");
            }
        }
    }

    #[test]
    fn empty_grid_has_no_labels() {
        assert!(derive_month_labels(&Grid::default()).is_empty());
    }
}
