#![forbid(unsafe_code)]

//! Host contracts for the tempo stopwatch widget.
//!
//! The widget core is host-agnostic: everything it needs from its embedding
//! environment is expressed here as small traits and plain data types.
//!
//! - [`Clock`] — a monotonic time source.
//! - [`Scheduler`] — periodic and one-shot wakeups with explicit
//!   [`TimerToken`] cancellation values.
//! - [`Event`] — the complete input vocabulary: control clicks, pointer
//!   motion, key presses, timer firings, and host fullscreen notifications.
//!
//! Production implementations live in `tempo-runtime`; deterministic test
//! doubles live in `tempo-harness`.

pub mod clock;
pub mod event;
pub mod sched;

pub use clock::{Clock, SystemClock};
pub use event::{
    ControlId, Event, EventOutcome, KeyCode, KeyEvent, Modifiers, PointerEvent, Region,
};
pub use sched::{Scheduler, TimerToken};
