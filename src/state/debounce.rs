//! Single-slot debounce timer.
//!
//! The timer is a deadline, not a task: the event loop asks [`Debouncer::poll`]
//! whether the quiet period has elapsed and uses [`Debouncer::time_until_due`]
//! to size its input poll timeout. Rescheduling replaces both the deadline and
//! the payload, so only the latest value ever fires.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<(Instant, T)>,
}

impl<T> Debouncer<T> {
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Replace any pending value and restart the quiet period at `now`.
    pub fn schedule(&mut self, value: T, now: Instant) {
        self.pending = Some((now + self.delay, value));
    }

    /// Drop the pending value, returning it if there was one.
    pub fn cancel(&mut self) -> Option<T> {
        self.pending.take().map(|(_, value)| value)
    }

    #[cfg(test)]
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Take the pending value once its deadline has passed.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        let due = matches!(&self.pending, Some((deadline, _)) if *deadline <= now);
        if due {
            self.cancel()
        } else {
            None
        }
    }

    /// Time left before the pending value fires; `None` when idle.
    #[must_use]
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.pending
            .as_ref()
            .map(|(deadline, _)| deadline.saturating_duration_since(now))
    }
}
