use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::calendar::{self, DAYS_OF_WEEK, MONTHS};
use crate::commands::command_for;
use crate::store::Contributions;

use super::super::draw::{day_style, day_symbol, BLANK_CELL};
use super::super::layout::{visible_weeks, GridGeometry, CELL_WIDTH};
use super::super::state::{Mode, TuiState};
use super::truncate;

const LABEL_WIDTH: u16 = 4;

/// Render the year grid, the side panel, and the status/editor bar.
pub fn draw_grid_view(
    f: &mut Frame,
    area: Rect,
    contributions: &Contributions,
    state: &mut TuiState,
) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(area);
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(72), Constraint::Percentage(28)])
        .split(rows[0]);

    draw_grid(f, columns[0], contributions, state);
    draw_side_panel(f, columns[1], contributions, state);
    draw_bottom_bar(f, rows[1], state);
}

fn draw_grid(f: &mut Frame, area: Rect, contributions: &Contributions, state: &mut TuiState) {
    let year = contributions.year();
    let title = match state.mode {
        Mode::EditingCommit => format!("{year} | editing commit message"),
        Mode::Browsing if state.dirty => format!("{year} | unsaved changes"),
        Mode::Browsing => format!("{year} | Space toggles, Enter edits, h for help"),
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Blue));
    let inner = block.inner(area);
    f.render_widget(block, area);

    if inner.width <= LABEL_WIDTH || inner.height < 8 {
        state.geometry = None;
        return;
    }

    let (first_week, weeks_visible) =
        visible_weeks(year, state.current_day, inner.width - LABEL_WIDTH);
    state.geometry = Some(GridGeometry {
        origin_x: inner.x + LABEL_WIDTH,
        origin_y: inner.y + 1,
        first_week,
        weeks_visible,
    });

    let first = calendar::first_weekday(year) as usize;
    let total = calendar::total_days(year);

    let mut lines = vec![month_header(year, first_week, weeks_visible)];
    for day_of_week in 0..7 {
        let mut spans = vec![Span::styled(
            format!("{:<4}", DAYS_OF_WEEK[day_of_week]),
            Style::default().fg(Color::Gray),
        )];
        for week in first_week..first_week + weeks_visible {
            let slot = week * 7 + day_of_week;
            let span = match slot.checked_sub(first) {
                Some(day) if day < total => match contributions.day(day) {
                    Ok(record) => Span::styled(
                        day_symbol(record),
                        day_style(record, day == state.current_day),
                    ),
                    Err(_) => Span::raw(BLANK_CELL),
                },
                _ => Span::raw(BLANK_CELL),
            };
            spans.push(span);
        }
        lines.push(Line::from(spans));
    }

    f.render_widget(Paragraph::new(lines), inner);
}

/// Sparse month labels above the week columns, written where a month's
/// first day lands and only while there is room.
fn month_header(year: i32, first_week: usize, weeks_visible: usize) -> Line<'static> {
    let width = weeks_visible * CELL_WIDTH as usize;
    let mut buf = vec![b' '; width];
    let first = calendar::first_weekday(year) as usize;
    let total = calendar::total_days(year);
    let mut last_end = 0usize;
    for week in first_week..first_week + weeks_visible {
        for day_of_week in 0..7 {
            let Some(day) = (week * 7 + day_of_week).checked_sub(first) else {
                continue;
            };
            if day >= total {
                continue;
            }
            let Ok((month, day_of_month)) = calendar::day_of_year_to_date(year, day) else {
                continue;
            };
            if day_of_month != 1 {
                continue;
            }
            let col = (week - first_week) * CELL_WIDTH as usize;
            let label = MONTHS[month as usize];
            if col >= last_end && col + label.len() <= width {
                buf[col..col + label.len()].copy_from_slice(label.as_bytes());
                last_end = col + label.len() + 1;
            }
        }
    }
    Line::from(Span::styled(
        format!("    {}", String::from_utf8_lossy(&buf)),
        Style::default().fg(Color::Gray),
    ))
}

fn draw_side_panel(f: &mut Frame, area: Rect, contributions: &Contributions, state: &TuiState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(8),
            Constraint::Length(7),
            Constraint::Min(0),
        ])
        .split(area);

    let year = contributions.year();
    let mut day_lines = vec![Line::from(Span::styled(
        "Selected Day",
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    ))];
    if let (Ok(record), Ok((month, day_of_month))) = (
        contributions.day(state.current_day),
        calendar::day_of_year_to_date(year, state.current_day),
    ) {
        day_lines.push(Line::from(vec![
            Span::styled("Date: ", Style::default().fg(Color::White)),
            Span::styled(
                format!("{} {}, {year}", MONTHS[month as usize], day_of_month),
                Style::default().fg(Color::Cyan),
            ),
        ]));
        day_lines.push(Line::from(vec![
            Span::styled("Day index: ", Style::default().fg(Color::White)),
            Span::styled(
                format!("{}", state.current_day),
                Style::default().fg(Color::Cyan),
            ),
        ]));
        day_lines.push(Line::from(vec![
            Span::styled("Active: ", Style::default().fg(Color::White)),
            if record.has_contribution {
                Span::styled("yes", Style::default().fg(Color::Green))
            } else {
                Span::styled("no", Style::default().fg(Color::DarkGray))
            },
        ]));
        if let Some(commit) = &record.commit {
            day_lines.push(Line::from(vec![
                Span::styled("Message: ", Style::default().fg(Color::White)),
                Span::styled(
                    truncate(&commit.message, 24),
                    Style::default().fg(Color::Magenta),
                ),
            ]));
            day_lines.push(Line::from(vec![
                Span::styled("Stamp: ", Style::default().fg(Color::White)),
                Span::styled(commit.date.clone(), Style::default().fg(Color::Gray)),
            ]));
        }
    }
    let day_panel = Paragraph::new(day_lines).block(
        Block::default()
            .title("Day")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Blue)),
    );
    f.render_widget(day_panel, chunks[0]);

    let custom = contributions
        .days()
        .iter()
        .filter(|d| d.has_custom_message())
        .count();
    let totals = vec![
        Line::from(Span::styled(
            "Pattern",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled("Active days: ", Style::default().fg(Color::White)),
            Span::styled(
                format!("{}", contributions.active_count()),
                Style::default().fg(Color::Green),
            ),
        ]),
        Line::from(vec![
            Span::styled("Custom messages: ", Style::default().fg(Color::White)),
            Span::styled(format!("{custom}"), Style::default().fg(Color::Magenta)),
        ]),
        Line::from(vec![
            Span::styled("Total days: ", Style::default().fg(Color::White)),
            Span::styled(
                format!("{}", contributions.len()),
                Style::default().fg(Color::Cyan),
            ),
        ]),
        Line::from(vec![
            Span::styled("Grid weeks: ", Style::default().fg(Color::White)),
            Span::styled(
                format!("{}", calendar::weeks_needed(year)),
                Style::default().fg(Color::Cyan),
            ),
        ]),
    ];
    let totals_panel = Paragraph::new(totals).block(
        Block::default()
            .title("Totals")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Blue)),
    );
    f.render_widget(totals_panel, chunks[1]);

    let preview = contributions
        .day(state.current_day)
        .ok()
        .and_then(|d| d.commit.as_ref())
        .map(command_for);
    let preview_lines = match preview {
        Some(command) => vec![Line::from(Span::styled(
            command,
            Style::default().fg(Color::Green),
        ))],
        None => vec![Line::from(Span::styled(
            "No commit on this day.",
            Style::default().fg(Color::DarkGray),
        ))],
    };
    let preview_panel = Paragraph::new(preview_lines)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title("Command")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Blue)),
        );
    f.render_widget(preview_panel, chunks[2]);
}

fn draw_bottom_bar(f: &mut Frame, area: Rect, state: &TuiState) {
    let (text, style) = if state.mode == Mode::EditingCommit {
        (
            format!("Message: {}█", state.editor_input),
            Style::default().fg(Color::Yellow),
        )
    } else if let Some((message, _)) = &state.status_message {
        (message.clone(), Style::default().fg(Color::Cyan))
    } else if state.hint_visible() {
        (
            "Click a day to toggle it, double-click an active day to edit its message.".to_string(),
            Style::default().fg(Color::Gray),
        )
    } else {
        (
            "Arrows move, Space toggles, Enter edits, s saves, c/C copies, q quits".to_string(),
            Style::default().fg(Color::Gray),
        )
    };
    let bar = Paragraph::new(Line::from(Span::styled(text, style))).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Blue)),
    );
    f.render_widget(bar, area);
}
