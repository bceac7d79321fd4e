#![forbid(unsafe_code)]

//! Single-threaded event pump.
//!
//! Bridges the scheduler's delivery channel (and anything else the host
//! feeds into it — adapted input events, fullscreen notifications) onto the
//! widget's owning thread. The pump never dispatches concurrently: events
//! are handled one at a time, in arrival order, which is what gives the
//! widget its cooperative single-writer model.

use std::sync::mpsc;
use std::time::Duration;

use tempo_core::Event;

/// Drains a channel of [`Event`]s into a handler on the calling thread.
pub struct EventPump {
    receiver: mpsc::Receiver<Event>,
}

impl EventPump {
    /// A pump over the receiving end of the host's event channel.
    #[must_use]
    pub fn new(receiver: mpsc::Receiver<Event>) -> Self {
        Self { receiver }
    }

    /// Dispatch every event currently queued, without blocking.
    ///
    /// Returns the number of events handled.
    pub fn drain(&self, mut handle: impl FnMut(Event)) -> usize {
        let mut count = 0;
        while let Ok(event) = self.receiver.try_recv() {
            handle(event);
            count += 1;
        }
        count
    }

    /// Block up to `timeout` for one event and dispatch it.
    ///
    /// Returns `false` if the timeout elapsed (or the channel closed) with
    /// nothing to dispatch.
    pub fn pump_one(&self, timeout: Duration, handle: impl FnOnce(Event)) -> bool {
        match self.receiver.recv_timeout(timeout) {
            Ok(event) => {
                handle(event);
                true
            }
            Err(_) => false,
        }
    }
}
