use std::time::{Duration, Instant};

/// Sustained-press window before a press becomes an activate on its own.
pub const LONG_PRESS: Duration = Duration::from_millis(500);
/// Two taps on the same cell within this window classify as a double tap.
pub const DOUBLE_TAP_WINDOW: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tap {
    Single(usize),
    Double(usize),
}

struct Press {
    day: usize,
    started: Instant,
    fired: bool,
}

/// Tracks the pointer gesture timers: one cancellable long-press deadline
/// and the double-tap window. Cancellation happens on drag, release, or a
/// press outside the grid; a cancelled deadline never fires late.
#[derive(Default)]
pub struct GestureTracker {
    press: Option<Press>,
    last_tap: Option<(usize, Instant)>,
}

impl GestureTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pointer down on a grid cell; arms the long-press deadline.
    pub fn press(&mut self, day: usize, now: Instant) {
        self.press = Some(Press {
            day,
            started: now,
            fired: false,
        });
    }

    /// Competing event: drop the pending press and any tap history.
    pub fn cancel(&mut self) {
        self.press = None;
        self.last_tap = None;
    }

    /// Deadline check on each loop tick. Fires the long-press activate at
    /// most once per press, only while the press is still held.
    pub fn poll(&mut self, now: Instant) -> Option<usize> {
        let press = self.press.as_mut()?;
        if !press.fired && now.duration_since(press.started) >= LONG_PRESS {
            press.fired = true;
            // a fired press is no longer a candidate tap
            self.last_tap = None;
            return Some(press.day);
        }
        None
    }

    /// Pointer up. The release of a fired long-press is consumed; otherwise
    /// the tap classifies as double when it lands on the same cell within
    /// the window, single when it does not.
    pub fn release(&mut self, now: Instant) -> Option<Tap> {
        let press = self.press.take()?;
        if press.fired {
            return None;
        }
        let tap = match self.last_tap {
            Some((day, at))
                if day == press.day && now.duration_since(at) <= DOUBLE_TAP_WINDOW =>
            {
                self.last_tap = None;
                Tap::Double(day)
            }
            _ => {
                self.last_tap = Some((press.day, now));
                Tap::Single(press.day)
            }
        };
        Some(tap)
    }
}
