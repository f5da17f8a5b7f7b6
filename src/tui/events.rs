use std::io;
use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};

use crate::db::PatternDb;
use crate::store::Contributions;

use super::gestures::{GestureTracker, Tap};
use super::state::{Mode, TuiState};

mod actions;
mod editor;

use actions::*;
use editor::*;

/// Handle a keyboard event, mutating state and returning `true` when the
/// loop should exit. Input is gated front to back: the help overlay and the
/// commit editor each consume everything before browsing keys are matched.
pub fn handle_key_events(
    key_event: KeyEvent,
    state: &mut TuiState,
    contributions: &mut Contributions,
    db: &mut PatternDb,
) -> io::Result<bool> {
    if key_event.kind != KeyEventKind::Press {
        return Ok(false);
    }
    state.dismiss_hint();

    if state.show_help {
        if matches!(
            key_event.code,
            KeyCode::Esc | KeyCode::Char('h') | KeyCode::F(1) | KeyCode::Char('q')
        ) {
            state.show_help = false;
        }
        return Ok(false);
    }

    if state.mode == Mode::EditingCommit {
        handle_editor_input(key_event.code, state, contributions);
        return Ok(false);
    }

    match key_event.code {
        KeyCode::Char('q') => return Ok(true),
        KeyCode::Char('h') | KeyCode::F(1) => state.show_help = true,
        KeyCode::Up | KeyCode::Char('k') => move_up(state),
        KeyCode::Down | KeyCode::Char('j') => move_down(state, contributions.len()),
        KeyCode::Left => move_left(state),
        KeyCode::Right => move_right(state, contributions.len()),
        KeyCode::Char(' ') => activate(state, contributions),
        KeyCode::Enter => edit_intent(state, contributions),
        KeyCode::Char('g') | KeyCode::Home => jump_first(state),
        KeyCode::Char('G') | KeyCode::End => jump_last(state, contributions.len()),
        KeyCode::Char('s') => save_pattern(state, contributions, db),
        KeyCode::Char('r') => reload_pattern(state, contributions, db),
        KeyCode::Char('c') => copy_day_command(state, contributions),
        KeyCode::Char('C') => copy_all_commands(state, contributions),
        _ => {}
    }

    Ok(false)
}

/// Resolve mouse events through the last drawn grid geometry. Press arms
/// the long-press timer, drag cancels it, release classifies the tap.
pub fn handle_mouse_event(
    mouse_event: MouseEvent,
    state: &mut TuiState,
    contributions: &mut Contributions,
    tracker: &mut GestureTracker,
) {
    let now = Instant::now();
    match mouse_event.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            let day = state.geometry.as_ref().and_then(|g| {
                g.day_at(contributions.year(), mouse_event.column, mouse_event.row)
            });
            match day {
                Some(day) => {
                    state.dismiss_hint();
                    tracker.press(day, now);
                }
                None => tracker.cancel(),
            }
        }
        MouseEventKind::Drag(MouseButton::Left) => tracker.cancel(),
        MouseEventKind::Up(MouseButton::Left) => match tracker.release(now) {
            Some(Tap::Single(day)) => {
                state.current_day = day;
                activate(state, contributions);
            }
            Some(Tap::Double(day)) => {
                state.current_day = day;
                let is_active = contributions
                    .day(day)
                    .map(|d| d.has_contribution)
                    .unwrap_or(false);
                if is_active {
                    edit_intent(state, contributions);
                } else {
                    activate(state, contributions);
                }
            }
            None => {}
        },
        _ => {}
    }
}

/// Long-press path from the run loop: the same activate the key and tap
/// surfaces use.
pub fn activate_day(state: &mut TuiState, contributions: &mut Contributions) {
    activate(state, contributions);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use tempfile::tempdir;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    #[test]
    fn editing_mode_consumes_movement_and_activate_keys() {
        let dir = tempdir().unwrap();
        let mut db = PatternDb::new(Some(dir.path())).unwrap();
        let mut contributions = Contributions::new(2024);
        let mut state = TuiState::new();
        state.current_day = 10;
        contributions.toggle(10).unwrap();
        state.mode = Mode::EditingCommit;

        for code in [KeyCode::Up, KeyCode::Down, KeyCode::Left, KeyCode::Right] {
            handle_key_events(key(code), &mut state, &mut contributions, &mut db).unwrap();
        }
        assert_eq!(state.current_day, 10);
        assert_eq!(state.mode, Mode::EditingCommit);
        // the space went into the buffer, not through activate
        handle_key_events(key(KeyCode::Char(' ')), &mut state, &mut contributions, &mut db)
            .unwrap();
        assert!(contributions.day(10).unwrap().has_contribution);
        assert!(state.editor_input.ends_with(' '));
    }

    #[test]
    fn browsing_keys_move_and_toggle() {
        let dir = tempdir().unwrap();
        let mut db = PatternDb::new(Some(dir.path())).unwrap();
        let mut contributions = Contributions::new(2024);
        let mut state = TuiState::new();

        handle_key_events(key(KeyCode::Down), &mut state, &mut contributions, &mut db).unwrap();
        handle_key_events(key(KeyCode::Right), &mut state, &mut contributions, &mut db).unwrap();
        assert_eq!(state.current_day, 8);
        handle_key_events(key(KeyCode::Char(' ')), &mut state, &mut contributions, &mut db)
            .unwrap();
        assert!(contributions.day(8).unwrap().has_contribution);

        let quit =
            handle_key_events(key(KeyCode::Char('q')), &mut state, &mut contributions, &mut db)
                .unwrap();
        assert!(quit);
    }
}
