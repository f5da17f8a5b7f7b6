use std::time::{Duration, Instant};

use crate::tui::layout::GridGeometry;

/// How long a transient status line stays on screen.
pub const STATUS_DURATION: Duration = Duration::from_secs(3);
/// One-shot startup hint; dismissed early by the first key press.
pub const HINT_DURATION: Duration = Duration::from_secs(10);

/// Interaction mode. Input is gated on this: while a commit message is
/// being edited every key event is consumed by the editor.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Mode {
    Browsing,
    EditingCommit,
}

pub struct TuiState {
    pub current_day: usize,
    pub mode: Mode,
    pub editor_input: String,
    pub show_help: bool,
    pub dirty: bool,
    pub status_message: Option<(String, Instant)>,
    pub hint_deadline: Option<Instant>,
    pub geometry: Option<GridGeometry>,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            current_day: 0,
            mode: Mode::Browsing,
            editor_input: String::new(),
            show_help: false,
            dirty: false,
            status_message: None,
            hint_deadline: Some(Instant::now() + HINT_DURATION),
            geometry: None,
        }
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some((message.into(), Instant::now()));
    }

    /// Expire the status line and the startup hint on loop ticks.
    pub fn tick(&mut self, now: Instant) {
        let expired = self
            .status_message
            .as_ref()
            .is_some_and(|(_, shown_at)| now.duration_since(*shown_at) > STATUS_DURATION);
        if expired {
            self.status_message = None;
        }
        if self.hint_deadline.is_some_and(|deadline| now >= deadline) {
            self.hint_deadline = None;
        }
    }

    pub fn dismiss_hint(&mut self) {
        self.hint_deadline = None;
    }

    pub fn hint_visible(&self) -> bool {
        self.hint_deadline.is_some()
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}
