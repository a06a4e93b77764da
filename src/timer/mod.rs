//! Countdown timer: a recurring one-interval tick source.
//!
//! Pure scheduling, no game policy - the timer never decides what
//! "time up" means, it only reports when an interval has elapsed. The
//! controller arms and disarms it; the host drives it by polling with
//! the current instant.
//!
//! ## Behavior
//!
//! - `start(now)`: first fire is one full interval after `now`, never
//!   immediately.
//! - `stop()`: disarms; idempotent.
//! - `restart(now)`: `stop` then `start`; used whenever the round
//!   advances to a new clue so the countdown begins fresh.
//! - `fire_due(now)`: consumes at most one elapsed interval per call
//!   and advances the deadline by exactly one interval (fixed rate), so
//!   a late poll delivers each missed tick discretely instead of
//!   collapsing them.

use std::time::{Duration, Instant};

/// A repeating tick source with start/stop/restart semantics.
///
/// ## Example
///
/// ```
/// use std::time::{Duration, Instant};
/// use rust_trivia::timer::CountdownTimer;
///
/// let interval = Duration::from_secs(1);
/// let mut timer = CountdownTimer::new(interval);
/// let t0 = Instant::now();
///
/// timer.start(t0);
/// assert!(!timer.fire_due(t0)); // never fires immediately
/// assert!(timer.fire_due(t0 + interval));
/// ```
#[derive(Clone, Debug)]
pub struct CountdownTimer {
    /// Length of one tick.
    interval: Duration,

    /// Next fire time. `None` while stopped.
    deadline: Option<Instant>,
}

impl CountdownTimer {
    /// Create a stopped timer with the given interval.
    #[must_use]
    pub fn new(interval: Duration) -> Self {
        assert!(!interval.is_zero(), "Tick interval must be non-zero");
        Self {
            interval,
            deadline: None,
        }
    }

    /// The tick interval.
    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Check if the timer is armed.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.deadline.is_some()
    }

    /// The next fire time, while armed.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Arm the timer. The first fire is one full interval after `now`.
    pub fn start(&mut self, now: Instant) {
        self.deadline = Some(now + self.interval);
    }

    /// Disarm the timer, cancelling all pending ticks. Idempotent.
    pub fn stop(&mut self) {
        self.deadline = None;
    }

    /// Disarm and re-arm from `now`.
    pub fn restart(&mut self, now: Instant) {
        self.stop();
        self.start(now);
    }

    /// Consume one elapsed interval, if any.
    ///
    /// Returns true and advances the deadline by one interval when the
    /// timer is armed and `now` has reached the deadline. Call in a
    /// loop to drain every interval a late poll has accumulated.
    pub fn fire_due(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = Some(deadline + self.interval);
                true
            }
            _ => false,
        }
    }
}
