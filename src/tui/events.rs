use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use crate::calendar::Calendar;

use super::state::TuiState;

/// Apply a key press to the browser state. Returns `true` when the loop should exit.
pub fn handle_key_event(key_event: KeyEvent, state: &mut TuiState, calendars: &[Calendar]) -> bool {
    if key_event.kind != KeyEventKind::Press {
        return false;
    }

    if state.show_help {
        if matches!(key_event.code, KeyCode::Esc | KeyCode::Char('h') | KeyCode::F(1)) {
            state.show_help = false;
        }
        return matches!(key_event.code, KeyCode::Char('q'));
    }

    let Some(grid) = state.selected(calendars).map(|c| &c.weeks) else {
        return matches!(key_event.code, KeyCode::Char('q') | KeyCode::Esc);
    };

    match key_event.code {
        KeyCode::Char('q') | KeyCode::Esc => return true,
        KeyCode::Char('h') | KeyCode::F(1) => state.show_help = true,
        KeyCode::Tab | KeyCode::Char(']') => state.next_tab(calendars),
        KeyCode::BackTab | KeyCode::Char('[') => state.previous_tab(calendars),
        KeyCode::Left | KeyCode::Char('a') => state.move_left(grid),
        KeyCode::Right | KeyCode::Char('d') => state.move_right(grid),
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('w') => state.move_up(grid),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('s') => state.move_down(grid),
        KeyCode::Home | KeyCode::Char('g') => state.jump_home(grid),
        KeyCode::End | KeyCode::Char('G') => state.jump_end(grid),
        _ => {}
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::{calendars_from_response, BuildOptions};
    use crate::model::{ContributionRecord, ContributionsResponse};
    use crate::util::WeekStart;
    use chrono::NaiveDate;
    use crossterm::event::KeyModifiers;
    use pretty_assertions::assert_eq;

    fn calendars() -> Vec<Calendar> {
        let first = NaiveDate::from_ymd_opt(2021, 1, 1).unwrap();
        let mut resp = ContributionsResponse::default();
        resp.contributions = first
            .iter_days()
            .take(365)
            .map(|d| ContributionRecord::new(d, 2))
            .collect();
        let options = BuildOptions {
            rolling: false,
            years: vec![2021],
            week_start: WeekStart::SUNDAY,
            today: first,
        };
        calendars_from_response(&resp, &options).unwrap()
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn quit_keys() {
        let cals = calendars();
        let mut state = TuiState::new(&cals);
        assert!(handle_key_event(press(KeyCode::Char('q')), &mut state, &cals));
        assert!(handle_key_event(press(KeyCode::Esc), &mut state, &cals));
        assert!(!handle_key_event(press(KeyCode::Left), &mut state, &cals));
    }

    #[test]
    fn help_overlay_swallows_navigation() {
        let cals = calendars();
        let mut state = TuiState::new(&cals);
        let before = state.week;
        handle_key_event(press(KeyCode::Char('h')), &mut state, &cals);
        assert!(state.show_help);
        handle_key_event(press(KeyCode::Left), &mut state, &cals);
        assert_eq!(state.week, before);
        assert!(!handle_key_event(press(KeyCode::Esc), &mut state, &cals));
        assert!(!state.show_help);
    }

    #[test]
    fn arrows_move_the_cursor() {
        let cals = calendars();
        let mut state = TuiState::new(&cals);
        handle_key_event(press(KeyCode::Home), &mut state, &cals);
        assert_eq!((state.week, state.row), (0, 5));
        handle_key_event(press(KeyCode::Right), &mut state, &cals);
        handle_key_event(press(KeyCode::Up), &mut state, &cals);
        assert_eq!((state.week, state.row), (1, 4));
        handle_key_event(press(KeyCode::End), &mut state, &cals);
        assert_eq!(state.week, cals[0].weeks.num_weeks() - 1);
    }
}
