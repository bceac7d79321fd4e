#![forbid(unsafe_code)]

//! Thread-backed scheduler.
//!
//! Each armed timer runs on its own background thread, blocked on a condvar
//! so cancellation wakes it immediately instead of waiting out the interval.
//! Threads never call into the widget: they push `Event::Timer(token)` into
//! the channel and the host's event pump delivers it on the owning thread.

use std::collections::HashMap;
use std::sync::mpsc;
use std::sync::{Arc, Condvar, Mutex};
use std::thread;
use std::time::{Duration, Instant};

use tempo_core::{Event, Scheduler, TimerToken};

/// Signal a timer thread polls while waiting.
#[derive(Clone)]
pub struct StopSignal {
    inner: Arc<(Mutex<bool>, Condvar)>,
}

impl StopSignal {
    /// Create a signal/trigger pair.
    #[must_use]
    pub fn new() -> (Self, StopTrigger) {
        let inner = Arc::new((Mutex::new(false), Condvar::new()));
        let signal = Self {
            inner: inner.clone(),
        };
        (signal, StopTrigger { inner })
    }

    /// Whether the trigger has fired.
    #[must_use]
    pub fn is_stopped(&self) -> bool {
        let (lock, _) = &*self.inner;
        lock.lock().map(|stopped| *stopped).unwrap_or(true)
    }

    /// Block for up to `duration` or until stopped, whichever comes first.
    ///
    /// Returns `true` if stopped, `false` on timeout. Spurious condvar
    /// wakeups are absorbed by re-checking against a deadline.
    #[must_use]
    pub fn wait_timeout(&self, duration: Duration) -> bool {
        let deadline = Instant::now() + duration;
        let (lock, cvar) = &*self.inner;
        let Ok(mut stopped) = lock.lock() else {
            return true;
        };
        loop {
            if *stopped {
                return true;
            }
            let now = Instant::now();
            let Some(remaining) = deadline.checked_duration_since(now).filter(|d| !d.is_zero())
            else {
                return false;
            };
            match cvar.wait_timeout(stopped, remaining) {
                Ok((guard, _)) => stopped = guard,
                Err(_) => return true,
            }
        }
    }
}

/// The stopping half of a [`StopSignal`] pair.
pub struct StopTrigger {
    inner: Arc<(Mutex<bool>, Condvar)>,
}

impl StopTrigger {
    /// Wake and stop the waiting timer thread.
    pub fn stop(&self) {
        let (lock, cvar) = &*self.inner;
        if let Ok(mut stopped) = lock.lock() {
            *stopped = true;
        }
        cvar.notify_all();
    }
}

struct ArmedTimer {
    trigger: StopTrigger,
    thread: Option<thread::JoinHandle<()>>,
}

/// A [`Scheduler`] that delivers timer events over an mpsc channel.
pub struct TickScheduler {
    sender: mpsc::Sender<Event>,
    next_id: u64,
    timers: HashMap<TimerToken, ArmedTimer>,
}

impl TickScheduler {
    /// A scheduler delivering into an existing channel.
    #[must_use]
    pub fn new(sender: mpsc::Sender<Event>) -> Self {
        Self {
            sender,
            next_id: 0,
            timers: HashMap::new(),
        }
    }

    /// A scheduler plus the receiving end of its delivery channel.
    #[must_use]
    pub fn channel() -> (Self, mpsc::Receiver<Event>) {
        let (sender, receiver) = mpsc::channel();
        (Self::new(sender), receiver)
    }

    /// Number of armed timers whose threads are still live.
    ///
    /// One-shot timers count until they fire or are cancelled.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.timers
            .values()
            .filter(|timer| {
                timer
                    .thread
                    .as_ref()
                    .is_some_and(|handle| !handle.is_finished())
            })
            .count()
    }

    fn mint(&mut self) -> TimerToken {
        self.next_id += 1;
        TimerToken::new(self.next_id)
    }
}

impl Scheduler for TickScheduler {
    fn every(&mut self, interval: Duration) -> TimerToken {
        let token = self.mint();
        let (signal, trigger) = StopSignal::new();
        let sender = self.sender.clone();
        tracing::debug!(?token, ?interval, "periodic timer armed");
        let thread = thread::spawn(move || {
            loop {
                if signal.wait_timeout(interval) {
                    break;
                }
                if sender.send(Event::Timer(token)).is_err() {
                    break;
                }
            }
        });
        self.timers.insert(
            token,
            ArmedTimer {
                trigger,
                thread: Some(thread),
            },
        );
        token
    }

    fn after(&mut self, delay: Duration) -> TimerToken {
        let token = self.mint();
        let (signal, trigger) = StopSignal::new();
        let sender = self.sender.clone();
        tracing::debug!(?token, ?delay, "one-shot timer armed");
        let thread = thread::spawn(move || {
            if !signal.wait_timeout(delay) {
                let _ = sender.send(Event::Timer(token));
            }
        });
        self.timers.insert(
            token,
            ArmedTimer {
                trigger,
                thread: Some(thread),
            },
        );
        token
    }

    fn cancel(&mut self, token: TimerToken) {
        let Some(mut timer) = self.timers.remove(&token) else {
            return;
        };
        tracing::debug!(?token, "timer cancelled");
        timer.trigger.stop();
        if let Some(handle) = timer.thread.take() {
            // The thread wakes immediately off the condvar; join is cheap.
            let _ = handle.join();
        }
    }
}

impl Drop for TickScheduler {
    fn drop(&mut self) {
        // Stop without joining: drop must not block the owning thread.
        for timer in self.timers.values() {
            timer.trigger.stop();
        }
    }
}
