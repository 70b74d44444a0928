use crate::calendar::{Calendar, Cell};
use crate::model::{CalendarOutput, SCHEMA_VERSION};
use crate::util::{level_for, WeekStart};
use anyhow::Result;
use chrono::{Utc, Weekday};
use console::{style, Style};

/// 256-colour approximations of GitHub's green scale, level 0..=4.
pub(crate) const LEVEL_COLORS: [u8; 5] = [237, 22, 28, 34, 40];
const SQUARE: &str = "■";
const CELL_WIDTH: usize = 2;
const WEEKDAY_GUTTER: usize = 4;

pub fn output_json(calendars: &[Calendar], username: &str, week_start: WeekStart) -> Result<()> {
    let output = CalendarOutput {
        version: SCHEMA_VERSION,
        generated_at: Utc::now(),
        username: username.to_string(),
        week_start,
        calendars: calendars.to_vec(),
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

pub fn output_ndjson(calendars: &[Calendar]) -> Result<()> {
    for calendar in calendars {
        println!("{}", serde_json::to_string(calendar)?);
    }
    Ok(())
}

pub fn output_calendars(calendars: &[Calendar], username: &str, weekday_labels: bool) -> Result<()> {
    if calendars.is_empty() {
        println!("No contributions found for {username}");
        return Ok(());
    }

    for (i, calendar) in calendars.iter().enumerate() {
        if i > 0 {
            println!();
        }
        for line in render_calendar(calendar, username, weekday_labels) {
            println!("{line}");
        }
    }

    Ok(())
}

pub fn level_style(level: u8) -> Style {
    let idx = (level as usize).min(LEVEL_COLORS.len() - 1);
    Style::new().color256(LEVEL_COLORS[idx])
}

fn show_weekday(day: Weekday) -> bool {
    matches!(day, Weekday::Mon | Weekday::Wed | Weekday::Fri)
}

/// Lay out one calendar as terminal lines: header, month row, 7 day rows, footer.
pub fn render_calendar(calendar: &Calendar, username: &str, weekday_labels: bool) -> Vec<String> {
    let mut lines = Vec::with_capacity(12);
    let gutter = if weekday_labels { WEEKDAY_GUTTER } else { 0 };

    lines.push(format!(
        "{} {} {}",
        style(username).bold(),
        style("·").dim(),
        style(calendar.title()).cyan()
    ));
    lines.push("─".repeat(gutter + calendar.weeks.num_weeks() * CELL_WIDTH));

    let mut month_row = " ".repeat(gutter);
    for label in &calendar.month_labels {
        let column = gutter + label.week_index * CELL_WIDTH;
        if month_row.chars().count() > column {
            continue;
        }
        let pad = column - month_row.chars().count();
        month_row.push_str(&" ".repeat(pad));
        month_row.push_str(&label.text);
    }
    lines.push(month_row.trim_end().to_string());

    let max = calendar.weeks.max_count();
    for row in 0..7 {
        let mut line = String::new();
        if weekday_labels {
            let day = calendar.week_start.weekday_at(row);
            let text = if show_weekday(day) { day.to_string() } else { String::new() };
            line.push_str(&format!("{text:<width$}", width = WEEKDAY_GUTTER));
        }
        for week in &calendar.weeks.weeks {
            match week.cells.get(row) {
                Some(Cell::Present(record)) => {
                    let styled = level_style(level_for(record, max)).apply_to(SQUARE);
                    line.push_str(&format!("{styled} "));
                }
                _ => line.push_str(&" ".repeat(CELL_WIDTH)),
            }
        }
        lines.push(line.trim_end().to_string());
    }

    let period = if calendar.rolling {
        "in the last year".to_string()
    } else {
        format!("in {}", calendar.year)
    };
    let legend: String = (0..=4)
        .map(|level| level_style(level).apply_to(SQUARE).to_string())
        .collect::<Vec<_>>()
        .join(" ");
    lines.push(format!(
        "{} contributions {}    Less {} More",
        style(calendar.total).green().bold(),
        period,
        legend
    ));

    let stats = &calendar.stats;
    let mut summary = format!(
        "Active days: {}  Longest streak: {}  Current streak: {}",
        style(stats.active_days).cyan(),
        style(stats.longest_streak).yellow(),
        style(stats.current_streak).yellow()
    );
    if let Some(best) = &stats.busiest_day {
        summary.push_str(&format!(
            "  Busiest day: {} ({})",
            style(best.date.format("%Y-%m-%d")).dim(),
            style(best.count).green()
        ));
    }
    lines.push(summary);

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ContributionRecord, ContributionsResponse, YearSelection, YearSummary};
    use chrono::NaiveDate;
    use console::strip_ansi_codes;
    use pretty_assertions::assert_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn calendar_2021(week_start: WeekStart) -> Calendar {
        let mut resp = ContributionsResponse::default();
        resp.years.insert(
            "2021".to_string(),
            YearSummary { year: 2021, total_contributions: 365 },
        );
        resp.contributions = date(2021, 1, 1)
            .iter_days()
            .take_while(|d| *d <= date(2021, 12, 31))
            .map(|d| ContributionRecord::new(d, 1))
            .collect();
        Calendar::build(YearSelection::Year(2021), &resp, week_start, date(2030, 1, 1)).unwrap()
    }

    fn plain(lines: &[String]) -> Vec<String> {
        lines.iter().map(|l| strip_ansi_codes(l).to_string()).collect()
    }

    #[test]
    fn renders_header_rows_and_footer() {
        let lines = plain(&render_calendar(&calendar_2021(WeekStart::SUNDAY), "octocat", false));
        assert_eq!(lines.len(), 12);
        assert_eq!(lines[0], "octocat · 2021");
        assert!(lines[2].starts_with("  Jan"));
        // Sunday row: 2020-12-27 is absent, then 52 Sundays of 2021
        assert_eq!(lines[3].matches(SQUARE).count(), 52);
        // Saturday row starts with 2021-01-02
        assert!(lines[9].starts_with(SQUARE));
        assert!(lines[10].starts_with("365 contributions in 2021"));
        assert!(lines[11].contains("Longest streak: 365"));
    }

    #[test]
    fn weekday_gutter_follows_week_start() {
        let lines = plain(&render_calendar(&calendar_2021(WeekStart::MONDAY), "octocat", true));
        assert!(lines[3].starts_with("Mon "));
        assert!(lines[5].starts_with("Wed "));
        assert!(lines[7].starts_with("Fri "));
        assert!(!lines[4].starts_with("Tue"));
    }
}
