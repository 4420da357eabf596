//! Per-prompt deadlines
//!
//! State machines arm and cancel named timers; the render loop races the
//! earliest one against the next key. Dropping the set cancels everything,
//! so no timer outlives the prompt that armed it.

use std::time::Duration;
use tokio::time::Instant;

/// Type-ahead buffer idle timeout
pub const SEARCH_RESET: Duration = Duration::from_millis(700);

/// Named timers a prompt can arm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Timer {
    /// Clears the type-ahead search buffer
    SearchReset,
    /// Lifts the input lock of a delay-gated prompt
    Unlock,
}

#[derive(Debug, Default)]
pub struct Timers {
    deadlines: Vec<(Timer, Instant)>,
}

impl Timers {
    /// Arm `timer` to fire `after` from now, replacing any earlier arming
    pub fn schedule(&mut self, timer: Timer, after: Duration) {
        self.cancel(timer);
        self.deadlines.push((timer, Instant::now() + after));
    }

    pub fn cancel(&mut self, timer: Timer) {
        self.deadlines.retain(|(armed, _)| *armed != timer);
    }

    pub fn is_armed(&self, timer: Timer) -> bool {
        self.deadlines.iter().any(|(armed, _)| *armed == timer)
    }

    /// The timer that fires first
    pub fn next_due(&self) -> Option<(Timer, Instant)> {
        self.deadlines
            .iter()
            .min_by_key(|(_, deadline)| *deadline)
            .copied()
    }

    pub fn clear(&mut self) {
        self.deadlines.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.deadlines.is_empty()
    }
}
