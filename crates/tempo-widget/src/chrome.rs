#![forbid(unsafe_code)]

//! Transient chrome controller.
//!
//! While expanded, the back affordance, mode controls, and reset notice are
//! shown on pointer movement and auto-hidden after an idle period, unless
//! the pointer is over one of the hover-sensitive regions. This is a pure
//! presentation timer, independent of the elapsed-time refresh.

use std::time::Duration;

use tempo_core::{Region, Scheduler, TimerToken};

/// Show-on-move / hide-on-idle state for the expanded mode's chrome.
#[derive(Debug)]
pub struct ChromeController {
    idle: Duration,
    shown: bool,
    hide_token: Option<TimerToken>,
    hover_back: bool,
    hover_controls: bool,
}

impl ChromeController {
    /// A controller that hides chrome after `idle` without pointer movement.
    #[must_use]
    pub fn new(idle: Duration) -> Self {
        Self {
            idle,
            shown: false,
            hide_token: None,
            hover_back: false,
            hover_controls: false,
        }
    }

    /// Whether the chrome is currently shown.
    #[must_use]
    pub fn shown(&self) -> bool {
        self.shown
    }

    /// The pending auto-hide token, if armed.
    #[must_use]
    pub fn hide_token(&self) -> Option<TimerToken> {
        self.hide_token
    }

    /// Show the chrome and (re-)arm the auto-hide timer.
    ///
    /// Called on pointer movement and on entry into expanded mode; a pending
    /// hide timer is cancelled first so the idle window restarts.
    pub fn reveal<S: Scheduler>(&mut self, sched: &mut S) {
        self.shown = true;
        if let Some(token) = self.hide_token.take() {
            sched.cancel(token);
        }
        self.hide_token = Some(sched.after(self.idle));
    }

    /// Hide immediately and cancel any pending auto-hide.
    ///
    /// Called when leaving expanded mode (and on the exit transition), so a
    /// stale hide timer can never fire into a later session.
    pub fn suppress<S: Scheduler>(&mut self, sched: &mut S) {
        self.shown = false;
        self.hover_back = false;
        self.hover_controls = false;
        if let Some(token) = self.hide_token.take() {
            sched.cancel(token);
        }
    }

    /// Track the pointer entering a region.
    pub fn pointer_entered(&mut self, region: Region) {
        match region {
            Region::BackHeader => self.hover_back = true,
            Region::ModeControls => self.hover_controls = true,
            _ => {}
        }
    }

    /// Track the pointer leaving a region.
    pub fn pointer_exited(&mut self, region: Region) {
        match region {
            Region::BackHeader => self.hover_back = false,
            Region::ModeControls => self.hover_controls = false,
            _ => {}
        }
    }

    /// Whether hover currently blocks the auto-hide.
    #[must_use]
    pub fn hover_blocks_hide(&self) -> bool {
        self.hover_back || self.hover_controls
    }

    /// Handle a fired timer. Returns `true` if the token was this
    /// controller's pending auto-hide.
    ///
    /// A blocked hide (pointer over chrome) consumes the token but leaves
    /// the chrome shown; the next pointer movement re-arms it.
    pub fn on_timer(&mut self, token: TimerToken) -> bool {
        if self.hide_token != Some(token) {
            return false;
        }
        self.hide_token = None;
        if !self.hover_blocks_hide() {
            self.shown = false;
            tracing::trace!("chrome auto-hidden");
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Minimal recording scheduler for controller tests.
    struct TestSched {
        next: u64,
        cancelled: Vec<TimerToken>,
    }

    impl TestSched {
        fn new() -> Self {
            Self {
                next: 0,
                cancelled: Vec::new(),
            }
        }
    }

    impl Scheduler for TestSched {
        fn every(&mut self, _interval: Duration) -> TimerToken {
            self.next += 1;
            TimerToken::new(self.next)
        }

        fn after(&mut self, _delay: Duration) -> TimerToken {
            self.next += 1;
            TimerToken::new(self.next)
        }

        fn cancel(&mut self, token: TimerToken) {
            self.cancelled.push(token);
        }
    }

    const IDLE: Duration = Duration::from_millis(1000);

    #[test]
    fn starts_hidden_and_unarmed() {
        let chrome = ChromeController::new(IDLE);
        assert!(!chrome.shown());
        assert!(chrome.hide_token().is_none());
    }

    #[test]
    fn reveal_shows_and_arms() {
        let mut sched = TestSched::new();
        let mut chrome = ChromeController::new(IDLE);
        chrome.reveal(&mut sched);
        assert!(chrome.shown());
        assert!(chrome.hide_token().is_some());
    }

    #[test]
    fn reveal_again_rearms_and_cancels_old_token() {
        let mut sched = TestSched::new();
        let mut chrome = ChromeController::new(IDLE);
        chrome.reveal(&mut sched);
        let first = chrome.hide_token().unwrap();
        chrome.reveal(&mut sched);
        let second = chrome.hide_token().unwrap();
        assert_ne!(first, second);
        assert_eq!(sched.cancelled, vec![first]);
    }

    #[test]
    fn timer_hides_when_not_hovered() {
        let mut sched = TestSched::new();
        let mut chrome = ChromeController::new(IDLE);
        chrome.reveal(&mut sched);
        let token = chrome.hide_token().unwrap();
        assert!(chrome.on_timer(token));
        assert!(!chrome.shown());
        assert!(chrome.hide_token().is_none());
    }

    #[test]
    fn hover_blocks_hide_but_consumes_token() {
        let mut sched = TestSched::new();
        let mut chrome = ChromeController::new(IDLE);
        chrome.reveal(&mut sched);
        chrome.pointer_entered(Region::ModeControls);
        let token = chrome.hide_token().unwrap();
        assert!(chrome.on_timer(token));
        assert!(chrome.shown());
        // After the pointer leaves, nothing is armed until the next move.
        chrome.pointer_exited(Region::ModeControls);
        assert!(chrome.shown());
        assert!(chrome.hide_token().is_none());
    }

    #[test]
    fn hover_on_non_chrome_region_does_not_block() {
        let mut sched = TestSched::new();
        let mut chrome = ChromeController::new(IDLE);
        chrome.reveal(&mut sched);
        chrome.pointer_entered(Region::Display);
        let token = chrome.hide_token().unwrap();
        chrome.on_timer(token);
        assert!(!chrome.shown());
    }

    #[test]
    fn stale_token_is_rejected() {
        let mut sched = TestSched::new();
        let mut chrome = ChromeController::new(IDLE);
        chrome.reveal(&mut sched);
        assert!(!chrome.on_timer(TimerToken::new(999)));
        assert!(chrome.shown());
    }

    #[test]
    fn suppress_hides_cancels_and_clears_hover() {
        let mut sched = TestSched::new();
        let mut chrome = ChromeController::new(IDLE);
        chrome.reveal(&mut sched);
        chrome.pointer_entered(Region::BackHeader);
        let token = chrome.hide_token().unwrap();
        chrome.suppress(&mut sched);
        assert!(!chrome.shown());
        assert!(chrome.hide_token().is_none());
        assert!(!chrome.hover_blocks_hide());
        assert!(sched.cancelled.contains(&token));
        // The cancelled token no longer routes here.
        assert!(!chrome.on_timer(token));
    }
}
