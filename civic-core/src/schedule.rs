//! Deferred reset: a cancellable one-shot deadline driven by an injectable clock.
//!
//! Nothing here spawns threads or sleeps. The host event loop polls the
//! deadline with the current time; tests substitute [`ManualClock`] and
//! fast-forward it.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Source of monotonic time.
pub trait Clock: Send + Sync {
    fn now(&self) -> Instant;
}

/// Wall clock backed by `Instant::now()`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Test clock that only moves when told to. Clones share the same time.
#[derive(Debug, Clone)]
pub struct ManualClock {
    origin: Instant,
    elapsed_nanos: Arc<AtomicU64>,
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
            elapsed_nanos: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn advance(&self, by: Duration) {
        let nanos = u64::try_from(by.as_nanos()).unwrap_or(u64::MAX);
        self.elapsed_nanos.fetch_add(nanos, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.origin + Duration::from_nanos(self.elapsed_nanos.load(Ordering::SeqCst))
    }
}

/// A single pending deadline. Fires at most once per `schedule`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeferredReset {
    deadline: Option<Instant>,
}

impl DeferredReset {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm the deadline at `now + delay`, replacing any earlier one.
    ///
    /// Returns false and leaves nothing pending when the deadline is not
    /// representable as an `Instant`.
    pub fn schedule(&mut self, now: Instant, delay: Duration) -> bool {
        self.deadline = now.checked_add(delay);
        self.deadline.is_some()
    }

    /// Disarm. Returns whether something was pending.
    pub fn cancel(&mut self) -> bool {
        self.deadline.take().is_some()
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Time left before firing; zero once overdue.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.deadline.map(|d| d.saturating_duration_since(now))
    }

    /// Returns true exactly once, on the first poll at or after the deadline.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(d) if now >= d => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_after_deadline() {
        let clock = ManualClock::new();
        let mut reset = DeferredReset::new();
        reset.schedule(clock.now(), Duration::from_secs(5));

        clock.advance(Duration::from_millis(4_999));
        assert!(!reset.poll(clock.now()));
        assert!(reset.is_pending());

        clock.advance(Duration::from_millis(1));
        assert!(reset.poll(clock.now()));
        assert!(!reset.is_pending());
        assert!(!reset.poll(clock.now()));
    }

    #[test]
    fn cancel_prevents_firing() {
        let clock = ManualClock::new();
        let mut reset = DeferredReset::new();
        reset.schedule(clock.now(), Duration::from_secs(5));
        assert!(reset.cancel());
        assert!(!reset.cancel());

        clock.advance(Duration::from_secs(60));
        assert!(!reset.poll(clock.now()));
    }

    #[test]
    fn remaining_saturates_at_zero() {
        let clock = ManualClock::new();
        let mut reset = DeferredReset::new();
        assert_eq!(reset.remaining(clock.now()), None);

        reset.schedule(clock.now(), Duration::from_secs(5));
        clock.advance(Duration::from_secs(2));
        assert_eq!(reset.remaining(clock.now()), Some(Duration::from_secs(3)));
        clock.advance(Duration::from_secs(10));
        assert_eq!(reset.remaining(clock.now()), Some(Duration::ZERO));
    }

    #[test]
    fn manual_clock_clones_share_time() {
        let a = ManualClock::new();
        let b = a.clone();
        let before = b.now();
        a.advance(Duration::from_secs(1));
        assert_eq!(b.now() - before, Duration::from_secs(1));
    }

    #[test]
    fn unrepresentable_deadline_is_not_armed() {
        let clock = ManualClock::new();
        let mut reset = DeferredReset::new();
        assert!(!reset.schedule(clock.now(), Duration::MAX));
        assert!(!reset.is_pending());
        assert!(!reset.poll(clock.now()));
    }
}
