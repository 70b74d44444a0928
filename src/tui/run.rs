use std::io;
use std::time::Duration;

use crossterm::event::{poll, read, Event};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Tabs};
use ratatui::Terminal;

use crate::calendar::Calendar;

use super::events::handle_key_event;
use super::state::TuiState;
use super::views::{draw_calendar_view, draw_help_overlay};

pub fn run(calendars: Vec<Calendar>, username: &str) -> io::Result<()> {
    enable_raw_mode()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    let mut state = TuiState::new(&calendars);
    let titles: Vec<String> = calendars.iter().map(Calendar::title).collect();

    terminal.clear()?;

    loop {
        let draw_result = terminal.draw(|f| {
            let size = f.size();

            if state.show_help {
                draw_help_overlay(f, size);
                return;
            }

            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(3), Constraint::Min(0)])
                .split(size);

            let tabs = Tabs::new(titles.clone())
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .title(format!("@{username}")),
                )
                .highlight_style(
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                )
                .select(state.tab_index);
            f.render_widget(tabs, chunks[0]);

            if let Some(calendar) = state.selected(&calendars) {
                draw_calendar_view(f, chunks[1], calendar, &state);
            }
        });

        if let Err(e) = draw_result {
            log::error!("TUI draw error: {e}");
        }

        if poll(Duration::from_millis(200))? {
            if let Event::Key(key_event) = read()? {
                if handle_key_event(key_event, &mut state, &calendars) {
                    break;
                }
            }
        }
    }

    terminal.clear()?;
    disable_raw_mode()?;
    Ok(())
}
