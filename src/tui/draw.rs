use ratatui::style::{Color, Modifier, Style};

use crate::model::ContributionDay;

pub const ACTIVE_CELL: &str = "■ ";
pub const INACTIVE_CELL: &str = "· ";
pub const BLANK_CELL: &str = "  ";

/// Glyph for one grid cell.
pub fn day_symbol(day: &ContributionDay) -> &'static str {
    if day.has_contribution {
        ACTIVE_CELL
    } else {
        INACTIVE_CELL
    }
}

/// Style for one grid cell. The selection outranks everything; days with an
/// edited message get their own tint so they stand out from default ones.
pub fn day_style(day: &ContributionDay, selected: bool) -> Style {
    if selected {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD | Modifier::REVERSED)
    } else if day.has_custom_message() {
        Style::default().fg(Color::Magenta)
    } else if day.has_contribution {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}
