//! Fixed-period tick scheduling.

use std::time::{Duration, Instant};

/// Tells the game loop when the next tick is due.
///
/// The caller owns the clock; every method takes `now` so the schedule can be
/// driven without sleeping.
#[derive(Debug, Clone)]
pub struct Ticker {
    period: Duration,
    next: Instant,
}

impl Ticker {
    /// First tick is due one `period` after `now`.
    pub fn new(period: Duration, now: Instant) -> Self {
        Ticker { period, next: now + period }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Returns true when a tick is due and arms the following deadline. A
    /// deadline missed by more than a whole period is not caught up on.
    pub fn is_due(&mut self, now: Instant) -> bool {
        if now < self.next {
            return false;
        }
        self.next += self.period;
        if self.next <= now {
            self.next = now + self.period;
        }
        true
    }

    /// How long to wait for input before the next tick.
    pub fn time_until(&self, now: Instant) -> Duration {
        self.next.saturating_duration_since(now)
    }

    /// Pushes the next deadline a full period past `now`, e.g. after a pause.
    pub fn restart(&mut self, now: Instant) {
        self.next = now + self.period;
    }
}
