use crossterm::event::KeyCode;

use crate::store::Contributions;

use super::super::state::{Mode, TuiState};

/// Every key in `EditingCommit` lands here; movement and activation stay
/// unreachable until the editor saves or cancels back to browsing.
pub(super) fn handle_editor_input(
    code: KeyCode,
    state: &mut TuiState,
    contributions: &mut Contributions,
) {
    match code {
        KeyCode::Esc => {
            state.mode = Mode::Browsing;
            state.editor_input.clear();
        }
        KeyCode::Enter => match contributions.set_message(state.current_day, &state.editor_input) {
            Ok(()) => {
                state.mode = Mode::Browsing;
                state.editor_input.clear();
                state.dirty = true;
                state.set_status("Commit message saved");
            }
            // an empty message keeps the editor open with the reason shown
            Err(e) => state.set_status(format!("{e}")),
        },
        KeyCode::Backspace => {
            state.editor_input.pop();
        }
        KeyCode::Char(c) => {
            state.editor_input.push(c);
        }
        _ => {}
    }
}
