//! Cancellable repeating timers for the timed state machines.
//!
//! Every animated piece of the dashboard (loading steps, typewriter,
//! caret blink, notice expiry) owns one of these and polls it with an
//! explicit `now`, so the state machines stay deterministic under test.

use std::time::{Duration, Instant};

/// Repeating interval timer with explicit cancellation.
pub struct Ticker {
    interval: Duration,
    next: Instant,
    active: bool,
}

impl Ticker {
    pub fn new(interval: Duration) -> Self {
        Self::starting_at(interval, Instant::now())
    }

    /// Count the first interval from `now` instead of creation time.
    pub fn starting_at(interval: Duration, now: Instant) -> Self {
        Self {
            interval,
            next: now + interval,
            active: true,
        }
    }

    /// True at most once per elapsed interval. Resyncs to `now` on fire;
    /// missed intervals are not replayed.
    pub fn due(&mut self, now: Instant) -> bool {
        if !self.active || now < self.next {
            return false;
        }
        self.next = now + self.interval;
        true
    }

    /// A cancelled ticker never fires until `restart`.
    pub fn cancel(&mut self) {
        self.active = false;
    }

    pub fn restart(&mut self, now: Instant) {
        self.next = now + self.interval;
        self.active = true;
    }
}

#[cfg(test)]
mod tests {
    use super::Ticker;
    use std::time::{Duration, Instant};

    const STEP: Duration = Duration::from_millis(100);

    #[test]
    fn fires_once_per_interval() {
        let t0 = Instant::now();
        let mut ticker = Ticker::starting_at(STEP, t0);

        assert!(!ticker.due(t0));
        assert!(!ticker.due(t0 + STEP / 2));
        assert!(ticker.due(t0 + STEP));
        // same instant again: already resynced
        assert!(!ticker.due(t0 + STEP));
        assert!(ticker.due(t0 + STEP * 2));
    }

    #[test]
    fn late_poll_fires_once() {
        let t0 = Instant::now();
        let mut ticker = Ticker::starting_at(STEP, t0);

        assert!(ticker.due(t0 + STEP * 10));
        assert!(!ticker.due(t0 + STEP * 10));
    }

    #[test]
    fn cancelled_never_fires() {
        let t0 = Instant::now();
        let mut ticker = Ticker::starting_at(STEP, t0);
        ticker.cancel();

        assert!(!ticker.due(t0 + STEP));
        assert!(!ticker.due(t0 + STEP * 100));
    }

    #[test]
    fn restart_counts_from_new_now() {
        let t0 = Instant::now();
        let mut ticker = Ticker::starting_at(STEP, t0);
        ticker.cancel();

        let t1 = t0 + STEP * 5;
        ticker.restart(t1);
        assert!(!ticker.due(t1));
        assert!(!ticker.due(t1 + STEP / 2));
        assert!(ticker.due(t1 + STEP));
    }
}
