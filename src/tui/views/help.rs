use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::tui::centered_rect;

/// Draw the modal help overlay describing navigation and shortcuts.
pub fn draw_help_overlay(f: &mut Frame, area: Rect) {
    let block = Block::default().title("Help").borders(Borders::ALL);
    let help_area = centered_rect(60, 60, area);

    f.render_widget(Clear, help_area);

    let section = |text: &str| {
        Line::from(vec![Span::styled(
            text.to_string(),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )])
    };

    let help_text = vec![
        Line::from(vec![Span::styled(
            "ghcal - Help",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )]),
        Line::from(""),
        section("Navigation:"),
        Line::from("  ←/→ or a/d     Previous / next week"),
        Line::from("  ↑/↓ or k/j     Previous / next day"),
        Line::from("  g/G, Home/End  Jump to first / last day"),
        Line::from(""),
        section("Years:"),
        Line::from("  Tab or ]       Next calendar"),
        Line::from("  Shift+Tab or [ Previous calendar"),
        Line::from(""),
        section("General:"),
        Line::from("  h, F1          Toggle this help"),
        Line::from("  q, Esc         Quit"),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Press 'h' or 'Esc' to close this help",
            Style::default().fg(Color::Gray),
        )]),
    ];

    let help_paragraph = Paragraph::new(help_text)
        .block(block)
        .wrap(ratatui::widgets::Wrap { trim: true });
    f.render_widget(help_paragraph, help_area);
}
