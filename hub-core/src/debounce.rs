//! Cancelable trailing-edge debounce.
//!
//! At most one call is pending. Scheduling again replaces the pending
//! value and pushes the deadline out by the full delay; the value only
//! fires once the caller polls after a quiet window.
//!
//! Time is passed in rather than read from a clock, so the host decides
//! when to poll (the TUI polls on every tick) and tests can step time
//! deterministically.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
struct Pending<T> {
    value: T,
    deadline: Instant,
}

#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<Pending<T>>,
}

impl<T> Debouncer<T> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Schedule `value`, cancelling any pending call.
    ///
    /// Returns `true` when a pending call was replaced.
    pub fn schedule(&mut self, value: T, now: Instant) -> bool {
        let replaced = self.pending.is_some();
        self.pending = Some(Pending {
            value,
            deadline: now + self.delay,
        });
        replaced
    }

    /// Drop the pending call, returning its value.
    pub fn cancel(&mut self) -> Option<T> {
        self.pending.take().map(|p| p.value)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|p| p.deadline)
    }

    /// Take the pending value if its quiet window has elapsed at `now`.
    pub fn fire_due(&mut self, now: Instant) -> Option<T> {
        match &self.pending {
            Some(pending) if now >= pending.deadline => self.cancel(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(300);

    #[test]
    fn test_nothing_fires_before_quiet_window() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(DELAY);
        debouncer.schedule("a", start);
        assert_eq!(debouncer.fire_due(start + Duration::from_millis(299)), None);
        assert!(debouncer.is_pending());
    }

    #[test]
    fn test_fires_once_after_quiet_window() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(DELAY);
        debouncer.schedule("a", start);
        assert_eq!(debouncer.fire_due(start + DELAY), Some("a"));
        assert_eq!(debouncer.fire_due(start + DELAY * 2), None);
        assert!(!debouncer.is_pending());
    }

    #[test]
    fn test_rapid_triggers_collapse_to_trailing_value() {
        let start = Instant::now();
        let step = Duration::from_millis(100);
        let mut debouncer = Debouncer::new(DELAY);

        assert!(!debouncer.schedule("I", start));
        assert!(debouncer.schedule("It", start + step));
        assert_eq!(debouncer.fire_due(start + step * 3), None);
        assert!(debouncer.schedule("Ite", start + step * 3));

        // 300ms after the first keystroke, but the window restarted.
        assert_eq!(debouncer.fire_due(start + step * 5), None);
        assert_eq!(debouncer.fire_due(start + step * 6), Some("Ite"));
    }

    #[test]
    fn test_cancel_drops_pending() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(DELAY);
        debouncer.schedule(7, start);
        assert_eq!(debouncer.cancel(), Some(7));
        assert_eq!(debouncer.fire_due(start + DELAY), None);
        assert_eq!(debouncer.deadline(), None);
    }
}
