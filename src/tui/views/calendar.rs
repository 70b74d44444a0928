use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::calendar::{Calendar, Cell};

use super::super::{
    draw::{cell_style, cell_symbol},
    layout::visible_weeks,
    state::TuiState,
};
use super::label_style;

const CELL_WIDTH: usize = 2;
const GUTTER: usize = 4;

/// Render the calendar grid for the selected year and a side panel of details.
pub fn draw_calendar_view(f: &mut Frame, area: Rect, calendar: &Calendar, state: &TuiState) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(72), Constraint::Percentage(28)])
        .split(area);

    let inner_width = chunks[0].width.saturating_sub(2) as usize;
    let capacity = inner_width.saturating_sub(GUTTER) / CELL_WIDTH;
    let grid = &calendar.weeks;
    let window = visible_weeks(grid.num_weeks(), state.week, capacity);
    let max = grid.max_count();

    let mut month_row = " ".repeat(GUTTER);
    for label in &calendar.month_labels {
        if !window.contains(&label.week_index) {
            continue;
        }
        let column = GUTTER + (label.week_index - window.start) * CELL_WIDTH;
        let used = month_row.chars().count();
        if used > column {
            continue;
        }
        month_row.push_str(&" ".repeat(column - used));
        month_row.push_str(&label.text);
    }

    let mut lines = vec![
        Line::from(Span::styled(month_row, Style::default().fg(Color::Cyan))),
    ];
    for row in 0..7 {
        let weekday = calendar.week_start.weekday_at(row).to_string();
        let mut spans = vec![Span::styled(format!("{weekday:<width$}", width = GUTTER), label_style())];
        for week_index in window.clone() {
            let week = &grid.weeks[week_index];
            let Some(cell) = week.cells.get(row) else {
                break;
            };
            let selected = week_index == state.week && row == state.row;
            spans.push(Span::styled(cell_symbol(cell, selected), cell_style(cell, max, selected)));
        }
        lines.push(Line::from(spans));
    }

    lines.push(Line::from(""));
    let period = if calendar.rolling {
        "in the last year".to_string()
    } else {
        format!("in {}", calendar.year)
    };
    lines.push(Line::from(vec![
        Span::styled(
            calendar.total.to_string(),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!(" contributions {period}")),
    ]));

    let title = format!(
        "Contributions {} | {}..{} | Press 'h' for help",
        calendar.title(),
        calendar.range.first,
        calendar.range.last
    );
    let grid_panel = Paragraph::new(lines).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Blue)),
    );
    f.render_widget(grid_panel, chunks[0]);

    draw_side_panel(f, chunks[1], calendar, state);
}

/// Details of the day under the cursor plus statistics for the whole calendar.
pub fn draw_side_panel(f: &mut Frame, area: Rect, calendar: &Calendar, state: &TuiState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(6), Constraint::Min(0)])
        .split(area);

    let heading = |text: &str| {
        Line::from(Span::styled(
            text.to_string(),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ))
    };
    let field = |name: &str, value: String, color: Color| {
        Line::from(vec![
            Span::styled(format!("{name}: "), Style::default().fg(Color::White)),
            Span::styled(value, Style::default().fg(color)),
        ])
    };

    let mut day_lines = vec![heading("Selected Day")];
    match state.selected_day(&calendar.weeks) {
        Some((date, cell)) => {
            day_lines.push(field("Date", date.format("%a %Y-%m-%d").to_string(), Color::Cyan));
            match cell {
                Cell::Present(record) => {
                    day_lines.push(field("Contributions", record.count.to_string(), Color::Green));
                }
                Cell::Absent => {
                    day_lines.push(field("Contributions", "no data".to_string(), Color::Gray));
                }
            }
        }
        None => day_lines.push(Line::from("No day selected")),
    }

    let day_panel = Paragraph::new(day_lines).block(
        Block::default()
            .title("Day")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Blue)),
    );
    f.render_widget(day_panel, chunks[0]);

    let stats = &calendar.stats;
    let mut stat_lines = vec![
        heading("Year Stats"),
        field("Total", calendar.total.to_string(), Color::Green),
        field("Active days", stats.active_days.to_string(), Color::Cyan),
        field("Longest streak", stats.longest_streak.to_string(), Color::Magenta),
        field("Current streak", stats.current_streak.to_string(), Color::Magenta),
    ];
    if let Some(best) = &stats.busiest_day {
        stat_lines.push(field(
            "Busiest day",
            format!("{} ({})", best.date.format("%Y-%m-%d"), best.count),
            Color::Yellow,
        ));
    }

    let stats_panel = Paragraph::new(stat_lines).block(
        Block::default()
            .title("Stats")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Blue)),
    );
    f.render_widget(stats_panel, chunks[1]);
}
