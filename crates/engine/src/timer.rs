//! Gravity timer - a scheduled tick the host advances explicitly.
//!
//! The timer owns no clock and runs no callbacks. The host reports elapsed time and
//! receives the number of ticks that came due; a cancelled timer never fires.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GravityTimer {
    interval_ms: u32,
    elapsed_ms: u32,
    armed: bool,
}

impl GravityTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// (Re)start with a new period. Accumulated time is discarded.
    pub fn arm(&mut self, interval_ms: u32) {
        self.interval_ms = interval_ms.max(1);
        self.elapsed_ms = 0;
        self.armed = true;
    }

    pub fn cancel(&mut self) {
        self.armed = false;
        self.elapsed_ms = 0;
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    /// Time until the next tick, or `None` when disarmed.
    pub fn remaining_ms(&self) -> Option<u32> {
        self.armed
            .then(|| self.interval_ms.saturating_sub(self.elapsed_ms))
    }

    /// Account for `elapsed_ms` and return how many ticks came due.
    pub fn advance(&mut self, elapsed_ms: u32) -> u32 {
        if !self.armed {
            return 0;
        }
        self.elapsed_ms = self.elapsed_ms.saturating_add(elapsed_ms);
        let due = self.elapsed_ms / self.interval_ms;
        self.elapsed_ms %= self.interval_ms;
        due
    }
}
