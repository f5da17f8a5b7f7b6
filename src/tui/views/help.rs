use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::tui::centered_rect;

/// Draw the modal help overlay describing navigation, editing, and export.
pub fn draw_help_overlay(f: &mut Frame, area: Rect) {
    let block = Block::default().title("Help").borders(Borders::ALL);
    let help_area = centered_rect(70, 80, area);

    f.render_widget(Clear, help_area);

    let help_text = vec![
        Line::from(vec![Span::styled(
            "gpaint - Help",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )]),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Navigation:",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )]),
        Line::from("  ↑/↓ or k/j   Previous/next day"),
        Line::from("  ←/→          One week back/forward (stops at the year edge)"),
        Line::from("  g/G          Jump to January 1 / December 31"),
        Line::from("  Home/End     Same as g/G"),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Editing:",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )]),
        Line::from("  Space        Toggle the selected day"),
        Line::from("  Enter        Edit the commit message (active days only)"),
        Line::from("  Esc          Cancel the message editor"),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Mouse:",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )]),
        Line::from("  Click        Select and toggle a day"),
        Line::from("  Double-click Edit an active day's message"),
        Line::from("  Hold 500ms   Toggle without releasing"),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Pattern:",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )]),
        Line::from("  s            Save the pattern to the store"),
        Line::from("  r            Reload the stored pattern"),
        Line::from("  c            Copy the selected day's git command"),
        Line::from("  C            Copy every git command"),
        Line::from(""),
        Line::from(vec![Span::styled(
            "General:",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )]),
        Line::from("  h, F1        Toggle this help"),
        Line::from("  q            Quit"),
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
