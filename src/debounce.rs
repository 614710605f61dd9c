//! Cancellable scheduled task with fire-at-most-once semantics
//!
//! Each `schedule` pushes the deadline out to `now + delay`, replacing any
//! pending one, so a burst of requests collapses into a single firing after
//! the input goes quiet. The caller polls with `fire_if_due` from its tick.

use std::time::{Duration, Instant};

/// Default quiet period before a re-render
pub const RENDER_DEBOUNCE_MS: u64 = 500;

#[derive(Debug, Clone)]
pub struct Debouncer {
    delay: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Schedule (or reschedule) the task to fire `delay` after `now`
    pub fn schedule(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    /// Drop the pending task, if any. Returns true if one was pending.
    pub fn cancel(&mut self) -> bool {
        self.deadline.take().is_some()
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Returns true exactly once per schedule, the first time `now` reaches the deadline
    pub fn fire_if_due(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(Duration::from_millis(RENDER_DEBOUNCE_MS))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn fires_once_after_quiet_period() {
        let t0 = Instant::now();
        let mut d = Debouncer::new(ms(100));
        d.schedule(t0);

        assert!(!d.fire_if_due(t0 + ms(99)));
        assert!(d.fire_if_due(t0 + ms(100)));
        assert!(!d.fire_if_due(t0 + ms(500)));
        assert!(!d.is_pending());
    }

    #[test]
    fn reschedule_restarts_the_timer() {
        let t0 = Instant::now();
        let mut d = Debouncer::new(ms(100));
        d.schedule(t0);
        d.schedule(t0 + ms(80));

        assert!(!d.fire_if_due(t0 + ms(120)));
        assert!(d.fire_if_due(t0 + ms(180)));
    }

    #[test]
    fn cancel_drops_pending_task() {
        let t0 = Instant::now();
        let mut d = Debouncer::new(ms(10));
        assert!(!d.cancel());
        d.schedule(t0);
        assert!(d.cancel());
        assert!(!d.fire_if_due(t0 + ms(50)));
    }
}
