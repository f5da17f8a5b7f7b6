use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::calendar;

/// Screen width of one week column, glyph plus gap.
pub const CELL_WIDTH: u16 = 2;

pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Where the grid cells landed on screen in the last draw, plus which week
/// column is leftmost. Mouse events resolve through this.
#[derive(Debug, Clone, Copy)]
pub struct GridGeometry {
    pub origin_x: u16,
    pub origin_y: u16,
    pub first_week: usize,
    pub weeks_visible: usize,
}

impl GridGeometry {
    /// Map a screen position to a day index, `None` outside the grid or on
    /// a leading/trailing placeholder cell.
    pub fn day_at(&self, year: i32, column: u16, row: u16) -> Option<usize> {
        if column < self.origin_x || row < self.origin_y {
            return None;
        }
        let week = ((column - self.origin_x) / CELL_WIDTH) as usize;
        let day_of_week = (row - self.origin_y) as usize;
        if day_of_week >= 7 || week >= self.weeks_visible {
            return None;
        }
        let slot = (self.first_week + week) * 7 + day_of_week;
        let day = slot.checked_sub(calendar::first_weekday(year) as usize)?;
        if day < calendar::total_days(year) {
            Some(day)
        } else {
            None
        }
    }
}

/// Window of week columns that fits `width`, kept centered on the current
/// selection the same way the list views keep their selected row in view.
pub fn visible_weeks(year: i32, current_day: usize, width: u16) -> (usize, usize) {
    let total_weeks = calendar::weeks_needed(year);
    let fit = (width / CELL_WIDTH) as usize;
    if fit == 0 {
        return (0, 0);
    }
    if total_weeks <= fit {
        return (0, total_weeks);
    }
    let first = calendar::first_weekday(year) as usize;
    let current_week = (current_day + first) / 7;
    let start = current_week
        .saturating_sub(fit / 2)
        .min(total_weeks - fit);
    (start, fit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wide_terminals_show_every_week() {
        assert_eq!(visible_weeks(2024, 0, 120), (0, 53));
        assert_eq!(visible_weeks(2024, 365, 120), (0, 53));
    }

    #[test]
    fn narrow_terminals_center_the_selection() {
        // 40 columns fit 20 weeks; day 182 of 2024 sits in week 26
        let (start, count) = visible_weeks(2024, 182, 40);
        assert_eq!(count, 20);
        assert_eq!(start, 16);
    }

    #[test]
    fn the_window_clamps_at_both_ends() {
        let (start, _) = visible_weeks(2024, 0, 40);
        assert_eq!(start, 0);
        let (start, count) = visible_weeks(2024, 365, 40);
        assert_eq!(start + count, 53);
    }

    #[test]
    fn mouse_positions_resolve_through_the_weekday_offset() {
        // 2024 starts on a Monday, so week 0 row 0 is a placeholder
        let geometry = GridGeometry {
            origin_x: 10,
            origin_y: 5,
            first_week: 0,
            weeks_visible: 53,
        };
        assert_eq!(geometry.day_at(2024, 10, 5), None);
        assert_eq!(geometry.day_at(2024, 10, 6), Some(0));
        assert_eq!(geometry.day_at(2024, 12, 5), Some(6));
        assert_eq!(geometry.day_at(2024, 9, 6), None);
        assert_eq!(geometry.day_at(2024, 10, 11), Some(5));
        assert_eq!(geometry.day_at(2024, 10, 12), None);
    }

    #[test]
    fn trailing_placeholders_do_not_resolve() {
        let geometry = GridGeometry {
            origin_x: 0,
            origin_y: 0,
            first_week: 0,
            weeks_visible: 53,
        };
        // 2024: week 52 row 2 is December 31, row 3 is past the year
        assert_eq!(geometry.day_at(2024, 104, 2), Some(365));
        assert_eq!(geometry.day_at(2024, 104, 3), None);
    }
}
