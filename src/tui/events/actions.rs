use crate::commands::{command_for, commands_for_all};
use crate::db::PatternDb;
use crate::export::copy_to_clipboard;
use crate::model::DEFAULT_COMMIT_MESSAGE;
use crate::store::Contributions;

use super::super::state::{Mode, TuiState};

/// Move one day back, clamped at the start of the year.
pub(super) fn move_up(state: &mut TuiState) {
    state.current_day = state.current_day.saturating_sub(1);
}

/// Move one day forward, clamped at the end of the year.
pub(super) fn move_down(state: &mut TuiState, total_days: usize) {
    if state.current_day + 1 < total_days {
        state.current_day += 1;
    }
}

/// Move one week back; refused outright when it would leave the year.
pub(super) fn move_left(state: &mut TuiState) {
    if state.current_day >= 7 {
        state.current_day -= 7;
    }
}

/// Move one week forward; refused outright when it would leave the year.
pub(super) fn move_right(state: &mut TuiState, total_days: usize) {
    if state.current_day + 7 < total_days {
        state.current_day += 7;
    }
}

pub(super) fn jump_first(state: &mut TuiState) {
    state.current_day = 0;
}

pub(super) fn jump_last(state: &mut TuiState, total_days: usize) {
    state.current_day = total_days.saturating_sub(1);
}

/// Toggle the highlighted day through the store.
pub(super) fn activate(state: &mut TuiState, contributions: &mut Contributions) {
    match contributions.toggle(state.current_day) {
        Ok(_) => state.dirty = true,
        Err(e) => state.set_status(format!("Toggle error: {e}")),
    }
}

/// Enter the editor when the highlighted day is active; no-op otherwise.
pub(super) fn edit_intent(state: &mut TuiState, contributions: &Contributions) {
    let Ok(day) = contributions.day(state.current_day) else {
        return;
    };
    if !day.has_contribution {
        return;
    }
    state.editor_input = day
        .commit
        .as_ref()
        .map(|c| c.message.clone())
        .unwrap_or_else(|| DEFAULT_COMMIT_MESSAGE.to_string());
    state.mode = Mode::EditingCommit;
}

pub(super) fn save_pattern(
    state: &mut TuiState,
    contributions: &Contributions,
    db: &mut PatternDb,
) {
    match db.save(contributions) {
        Ok(()) => {
            state.dirty = false;
            state.set_status(format!("Saved pattern for {}", contributions.year()));
        }
        Err(e) => state.set_status(format!("Save error: {e}")),
    }
}

/// Replace the working pattern with the stored one, if any.
pub(super) fn reload_pattern(
    state: &mut TuiState,
    contributions: &mut Contributions,
    db: &PatternDb,
) {
    match db.load(contributions.year()) {
        Ok(Some(stored)) => {
            *contributions = stored;
            state.dirty = false;
            if state.current_day >= contributions.len() {
                state.current_day = contributions.len().saturating_sub(1);
            }
            state.set_status(format!("Loaded pattern for {}", contributions.year()));
        }
        Ok(None) => state.set_status(format!("No saved pattern for {}", contributions.year())),
        Err(e) => state.set_status(format!("Load error: {e}")),
    }
}

/// Copy the highlighted day's command, surfacing clipboard errors in status.
pub(super) fn copy_day_command(state: &mut TuiState, contributions: &Contributions) {
    let Ok(day) = contributions.day(state.current_day) else {
        return;
    };
    let Some(commit) = day.commit.as_ref() else {
        state.set_status("No commit on this day");
        return;
    };
    match copy_to_clipboard(&command_for(commit)) {
        Ok(()) => state.set_status(format!("Copied command for {}", commit.date)),
        Err(e) => state.set_status(format!("Clipboard error: {e}")),
    }
}

/// Copy every command in calendar order; empty patterns copy nothing.
pub(super) fn copy_all_commands(state: &mut TuiState, contributions: &Contributions) {
    let text = commands_for_all(contributions);
    if text.is_empty() {
        state.set_status("No commit commands to copy");
        return;
    }
    match copy_to_clipboard(&text) {
        Ok(()) => state.set_status(format!("Copied {} commands", contributions.active_count())),
        Err(e) => state.set_status(format!("Clipboard error: {e}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertical_movement_clamps_at_both_ends() {
        let mut state = TuiState::new();
        move_up(&mut state);
        assert_eq!(state.current_day, 0);

        state.current_day = 364;
        move_down(&mut state, 365);
        assert_eq!(state.current_day, 364);

        state.current_day = 100;
        move_up(&mut state);
        assert_eq!(state.current_day, 99);
        move_down(&mut state, 365);
        assert_eq!(state.current_day, 100);
    }

    #[test]
    fn horizontal_movement_is_refused_at_the_bounds() {
        let mut state = TuiState::new();
        state.current_day = 3;
        move_left(&mut state);
        assert_eq!(state.current_day, 3);

        state.current_day = 362;
        move_right(&mut state, 365);
        assert_eq!(state.current_day, 362);

        state.current_day = 10;
        move_left(&mut state);
        assert_eq!(state.current_day, 3);
        move_right(&mut state, 365);
        assert_eq!(state.current_day, 10);
    }

    #[test]
    fn activate_toggles_the_store_and_marks_dirty() {
        let mut state = TuiState::new();
        let mut contributions = Contributions::new(2024);
        state.current_day = 5;
        activate(&mut state, &mut contributions);
        assert!(contributions.day(5).unwrap().has_contribution);
        assert!(state.dirty);
        activate(&mut state, &mut contributions);
        assert!(!contributions.day(5).unwrap().has_contribution);
    }

    #[test]
    fn edit_intent_requires_an_active_day() {
        let mut state = TuiState::new();
        let mut contributions = Contributions::new(2024);
        state.current_day = 8;

        edit_intent(&mut state, &contributions);
        assert_eq!(state.mode, Mode::Browsing);

        contributions.toggle(8).unwrap();
        edit_intent(&mut state, &contributions);
        assert_eq!(state.mode, Mode::EditingCommit);
        assert_eq!(state.editor_input, DEFAULT_COMMIT_MESSAGE);
    }
}
