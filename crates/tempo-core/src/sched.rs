#![forbid(unsafe_code)]

//! Scheduling contract: periodic and one-shot wakeups with explicit
//! cancellation tokens.
//!
//! The widget never owns a timer thread. It asks its [`Scheduler`] for a
//! wakeup and receives an opaque [`TimerToken`]; when the timer fires, the
//! host delivers `Event::Timer(token)` back through the normal event path.
//! Cancellation is a first-class value operation so tests can assert that a
//! pending timer really was cancelled, not merely ignored.

use std::time::Duration;

/// Identifies one scheduled wakeup.
///
/// Tokens are minted by the scheduler, unique for its lifetime, and cheap to
/// copy. A token outlives its timer: cancelling or receiving a token that is
/// no longer armed is harmless.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerToken(pub u64);

impl TimerToken {
    /// Create a token from its raw id.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }
}

/// Arms periodic and one-shot wakeups.
///
/// Fired timers reach the widget as `Event::Timer(token)`; the scheduler
/// itself never calls into the widget, which keeps all state mutation on the
/// owning thread.
pub trait Scheduler {
    /// Arm a periodic wakeup that fires every `interval` until cancelled.
    fn every(&mut self, interval: Duration) -> TimerToken;

    /// Arm a one-shot wakeup that fires once after `delay`.
    ///
    /// The token stays valid after firing; cancelling it then is a no-op.
    fn after(&mut self, delay: Duration) -> TimerToken;

    /// Cancel a pending wakeup.
    ///
    /// Cancelling an unknown or already-fired token is a no-op. A fire that
    /// was already in flight when `cancel` ran may still be delivered; the
    /// widget drops timer events whose token it no longer tracks.
    fn cancel(&mut self, token: TimerToken);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_compare_by_id() {
        assert_eq!(TimerToken::new(7), TimerToken(7));
        assert_ne!(TimerToken::new(7), TimerToken::new(8));
    }

    #[test]
    fn tokens_are_hashable() {
        let mut set = std::collections::HashSet::new();
        set.insert(TimerToken::new(1));
        set.insert(TimerToken::new(1));
        set.insert(TimerToken::new(2));
        assert_eq!(set.len(), 2);
    }
}
