#![forbid(unsafe_code)]

//! Recording scheduler.
//!
//! Never runs a timer. Every `every`/`after` call is appended to a ledger
//! and every `cancel` marks its entry; the test delivers `Event::Timer`
//! itself when it wants a timer to "fire". This makes cancellation an
//! assertable fact rather than an absence of side effects.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use tempo_core::{Scheduler, TimerToken};

/// What kind of wakeup an entry was armed as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerKind {
    /// Periodic, with its interval.
    Every(Duration),
    /// One-shot, with its delay.
    After(Duration),
}

#[derive(Debug, Clone)]
struct Entry {
    token: TimerToken,
    kind: TimerKind,
    cancelled: bool,
}

#[derive(Debug, Default)]
struct Inner {
    next_id: u64,
    entries: Vec<Entry>,
}

/// A [`Scheduler`] that records instead of scheduling.
///
/// Clones share the ledger; hand one clone to the widget and keep one to
/// inspect. An entry stays "active" until cancelled — the ledger does not
/// model one-shot expiry, since firing is the test's decision anyway.
#[derive(Debug, Clone, Default)]
pub struct ManualScheduler {
    inner: Rc<RefCell<Inner>>,
}

impl ManualScheduler {
    /// An empty scheduler.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Tokens and kinds of all entries not yet cancelled, in arming order.
    #[must_use]
    pub fn active(&self) -> Vec<(TimerToken, TimerKind)> {
        self.inner
            .borrow()
            .entries
            .iter()
            .filter(|entry| !entry.cancelled)
            .map(|entry| (entry.token, entry.kind))
            .collect()
    }

    /// Whether a token was armed and not cancelled.
    #[must_use]
    pub fn is_active(&self, token: TimerToken) -> bool {
        self.inner
            .borrow()
            .entries
            .iter()
            .any(|entry| entry.token == token && !entry.cancelled)
    }

    /// Whether a token was cancelled.
    #[must_use]
    pub fn was_cancelled(&self, token: TimerToken) -> bool {
        self.inner
            .borrow()
            .entries
            .iter()
            .any(|entry| entry.token == token && entry.cancelled)
    }

    /// The kind a token was armed as.
    #[must_use]
    pub fn kind_of(&self, token: TimerToken) -> Option<TimerKind> {
        self.inner
            .borrow()
            .entries
            .iter()
            .find(|entry| entry.token == token)
            .map(|entry| entry.kind)
    }

    /// The most recently armed token.
    #[must_use]
    pub fn last_token(&self) -> Option<TimerToken> {
        self.inner.borrow().entries.last().map(|entry| entry.token)
    }

    /// Total number of entries ever armed.
    #[must_use]
    pub fn armed_count(&self) -> usize {
        self.inner.borrow().entries.len()
    }

    /// Number of cancelled entries.
    #[must_use]
    pub fn cancelled_count(&self) -> usize {
        self.inner
            .borrow()
            .entries
            .iter()
            .filter(|entry| entry.cancelled)
            .count()
    }

    fn arm(&self, kind: TimerKind) -> TimerToken {
        let mut inner = self.inner.borrow_mut();
        inner.next_id += 1;
        let token = TimerToken::new(inner.next_id);
        inner.entries.push(Entry {
            token,
            kind,
            cancelled: false,
        });
        token
    }
}

impl Scheduler for ManualScheduler {
    fn every(&mut self, interval: Duration) -> TimerToken {
        self.arm(TimerKind::Every(interval))
    }

    fn after(&mut self, delay: Duration) -> TimerToken {
        self.arm(TimerKind::After(delay))
    }

    fn cancel(&mut self, token: TimerToken) {
        let mut inner = self.inner.borrow_mut();
        if let Some(entry) = inner
            .entries
            .iter_mut()
            .find(|entry| entry.token == token)
        {
            entry.cancelled = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arming_mints_unique_tokens() {
        let mut sched = ManualScheduler::new();
        let a = sched.every(Duration::from_millis(100));
        let b = sched.after(Duration::from_millis(200));
        assert_ne!(a, b);
        assert_eq!(sched.armed_count(), 2);
        assert_eq!(sched.kind_of(a), Some(TimerKind::Every(Duration::from_millis(100))));
        assert_eq!(sched.kind_of(b), Some(TimerKind::After(Duration::from_millis(200))));
    }

    #[test]
    fn cancel_marks_the_entry() {
        let mut sched = ManualScheduler::new();
        let token = sched.after(Duration::from_millis(50));
        assert!(sched.is_active(token));
        sched.cancel(token);
        assert!(!sched.is_active(token));
        assert!(sched.was_cancelled(token));
        assert_eq!(sched.cancelled_count(), 1);
    }

    #[test]
    fn cancel_unknown_token_is_noop() {
        let mut sched = ManualScheduler::new();
        sched.cancel(TimerToken::new(42));
        assert_eq!(sched.cancelled_count(), 0);
    }

    #[test]
    fn clones_share_the_ledger() {
        let mut sched = ManualScheduler::new();
        let probe = sched.clone();
        let token = sched.every(Duration::from_millis(10));
        assert!(probe.is_active(token));
        assert_eq!(probe.last_token(), Some(token));
    }
}
