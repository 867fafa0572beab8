use std::time::{Duration, Instant};

/// Repeating fixed-period timer driven by an injected clock.
///
/// The event loop asks [`TickTimer::time_until_next`] how long it may block
/// on input, then calls [`TickTimer::poll`] to learn whether a tick is due.
#[derive(Debug, Clone, Copy)]
pub struct TickTimer {
    interval: Duration,
    next_deadline: Option<Instant>,
}

impl TickTimer {
    /// Creates a stopped timer.
    #[must_use]
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            next_deadline: None,
        }
    }

    /// (Re)starts the timer; the first tick fires one interval after `now`.
    pub fn start(&mut self, now: Instant) {
        self.next_deadline = Some(now + self.interval);
    }

    pub fn stop(&mut self) {
        self.next_deadline = None;
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.next_deadline.is_some()
    }

    /// Returns true when a tick is due, re-arming from the missed deadline.
    ///
    /// Fires at most once per call. If the loop fell more than one interval
    /// behind, the schedule restarts from `now` instead of bursting.
    pub fn poll(&mut self, now: Instant) -> bool {
        let Some(deadline) = self.next_deadline else {
            return false;
        };

        if now < deadline {
            return false;
        }

        let next = deadline + self.interval;
        self.next_deadline = Some(if next <= now { now + self.interval } else { next });
        true
    }

    /// Time left until the next tick; `None` while stopped.
    #[must_use]
    pub fn time_until_next(&self, now: Instant) -> Option<Duration> {
        self.next_deadline
            .map(|deadline| deadline.saturating_duration_since(now))
    }
}
