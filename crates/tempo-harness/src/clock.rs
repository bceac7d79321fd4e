#![forbid(unsafe_code)]

//! Hand-advanced clock.

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use tempo_core::Clock;

/// A [`Clock`] that only moves when the test says so.
///
/// Clones share the same time; hand one clone to the widget and keep one to
/// advance. Monotonic by construction (`advance` only adds).
#[derive(Debug, Clone)]
pub struct ManualClock {
    base: Instant,
    offset: Rc<Cell<Duration>>,
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl ManualClock {
    /// A clock frozen at its creation instant.
    #[must_use]
    pub fn new() -> Self {
        Self {
            base: Instant::now(),
            offset: Rc::new(Cell::new(Duration::ZERO)),
        }
    }

    /// Move time forward by `delta`.
    pub fn advance(&self, delta: Duration) {
        self.offset.set(self.offset.get() + delta);
    }

    /// Total time advanced since creation.
    #[must_use]
    pub fn offset(&self) -> Duration {
        self.offset.get()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.base + self.offset.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frozen_until_advanced() {
        let clock = ManualClock::new();
        assert_eq!(clock.now(), clock.now());
    }

    #[test]
    fn advance_moves_all_clones() {
        let clock = ManualClock::new();
        let shared = clock.clone();
        let before = shared.now();
        clock.advance(Duration::from_millis(250));
        assert_eq!(shared.now() - before, Duration::from_millis(250));
        assert_eq!(shared.offset(), Duration::from_millis(250));
    }
}
