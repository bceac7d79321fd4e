#![forbid(unsafe_code)]

//! Production host plumbing for the tempo stopwatch widget.
//!
//! [`TickScheduler`] implements the `tempo-core` [`Scheduler`] contract with
//! one background thread per armed timer; fired timers are delivered as
//! `Event::Timer` over an mpsc channel. [`EventPump`] drains that channel on
//! the owning thread, preserving the widget's single-threaded cooperative
//! model: background threads only ever produce events, never touch state.
//!
//! [`Scheduler`]: tempo_core::Scheduler

pub mod pump;
pub mod sched;

pub use pump::EventPump;
pub use sched::{StopSignal, StopTrigger, TickScheduler};
