#![forbid(unsafe_code)]

//! Deterministic test host for the tempo stopwatch widget.
//!
//! Everything timing-related in the widget is injected, so tests drive it
//! entirely by hand:
//!
//! - [`ManualClock`] — an instant source advanced explicitly.
//! - [`ManualScheduler`] — records every schedule and cancel instead of
//!   running timers; tests deliver `Event::Timer` themselves and can assert
//!   that a pending timer really was cancelled.
//! - [`RecordingSurface`] — captures every applied [`View`] snapshot and
//!   every fullscreen request.
//! - [`WidgetHarness`] — bundles the three doubles around an attached
//!   widget with probe handles kept on the test side.
//!
//! [`View`]: tempo_widget::View

pub mod clock;
pub mod harness;
pub mod sched;
pub mod surface;

pub use clock::ManualClock;
pub use harness::WidgetHarness;
pub use sched::{ManualScheduler, TimerKind};
pub use surface::{FullscreenRequest, RecordingSurface};
