//! Character-by-character reveal of the summary text.

use crate::timer::Ticker;
use std::time::{Duration, Instant};

pub const DEFAULT_CADENCE: Duration = Duration::from_millis(28);

/// Reveal state machine: idle until a target is set, then one character
/// per tick until complete. Replacing the target cancels the previous
/// reveal and restarts from zero.
pub struct Typewriter {
    target: String,
    /// Characters revealed so far, not bytes.
    revealed: usize,
    len: usize,
    ticker: Ticker,
}

impl Typewriter {
    pub fn new(cadence: Duration) -> Self {
        let mut ticker = Ticker::new(cadence);
        ticker.cancel();
        Self {
            target: String::new(),
            revealed: 0,
            len: 0,
            ticker,
        }
    }

    /// Replace the reveal target. A different string discards prior
    /// progress; the identical string is left running.
    pub fn set_target(&mut self, target: &str, now: Instant) {
        if self.target == target {
            return;
        }
        self.target = target.to_string();
        self.len = self.target.chars().count();
        self.revealed = 0;
        if self.len == 0 {
            self.ticker.cancel();
        } else {
            self.ticker.restart(now);
        }
    }

    /// Advance at most one character when the cadence has elapsed.
    pub fn poll(&mut self, now: Instant) {
        if self.ticker.due(now) {
            self.tick();
        }
    }

    /// One reveal step. Idempotent once complete.
    pub fn tick(&mut self) {
        if self.revealed < self.len {
            self.revealed += 1;
            if self.revealed == self.len {
                self.ticker.cancel();
            }
        }
    }

    /// The revealed prefix, cut on a char boundary.
    pub fn visible(&self) -> &str {
        match self.target.char_indices().nth(self.revealed) {
            Some((byte, _)) => &self.target[..byte],
            None => &self.target,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.revealed == self.len
    }

    /// Teardown: stop the timer so nothing advances after disposal.
    pub fn cancel(&mut self) {
        self.ticker.cancel();
    }
}
