//! Clock abstraction for testable time

use std::sync::Arc;
use std::time::{Duration, Instant};

use parking_lot::Mutex;

/// Time source abstraction
///
/// Implementations:
/// - `SystemClock`: reads the monotonic system clock
/// - `ManualClock`: advances only when told to, for deterministic tests
pub trait Clock: Send + Sync {
    /// Current instant on this clock
    fn now(&self) -> Instant;
}

/// Type alias for an Arc-wrapped clock
pub type SharedClock = Arc<dyn Clock>;

/// Monotonic system clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl SystemClock {
    /// Create a new system clock
    pub fn new() -> Self {
        Self
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Manually advanced clock
///
/// Fixed at a base instant until `advance` moves it forward. Clones made
/// via `Arc` share the same offset, so a test can hand one handle to a
/// timer and keep another for advancing.
#[derive(Debug)]
pub struct ManualClock {
    base: Instant,
    offset: Mutex<Duration>,
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl ManualClock {
    /// Create a clock frozen at the current instant
    pub fn new() -> Self {
        Self {
            base: Instant::now(),
            offset: Mutex::new(Duration::ZERO),
        }
    }

    /// Move the clock forward by `by`
    pub fn advance(&self, by: Duration) {
        *self.offset.lock() += by;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.base + *self.offset.lock()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_clock_is_monotonic() {
        let clock = SystemClock::new();
        let first = clock.now();
        let second = clock.now();
        assert!(second >= first);
    }

    #[test]
    fn test_manual_clock_holds_still() {
        let clock = ManualClock::new();
        assert_eq!(clock.now(), clock.now());
    }

    #[test]
    fn test_manual_clock_advances() {
        let clock = ManualClock::new();
        let before = clock.now();

        clock.advance(Duration::from_millis(250));

        assert_eq!(clock.now() - before, Duration::from_millis(250));
    }

    #[test]
    fn test_shared_handles_advance_together() {
        let clock = Arc::new(ManualClock::new());
        let handle = Arc::clone(&clock);
        let before = clock.now();

        handle.advance(Duration::from_secs(1));

        assert_eq!(clock.now() - before, Duration::from_secs(1));
    }
}
