#![forbid(unsafe_code)]

//! Embeddable stopwatch widget with minimized/expanded presentation modes
//! and light/dark theming.
//!
//! The widget is headless: it owns its state machine and derives a pure
//! [`View`] snapshot, while the host supplies a clock, a scheduler, and a
//! presentation [`Surface`] (see `tempo-core` for the contracts and
//! `tempo-runtime`/`tempo-harness` for implementations).
//!
//! # Example
//!
//! ```rust
//! use std::time::Duration;
//! use tempo_core::{ControlId, Event, Scheduler, SystemClock, TimerToken};
//! use tempo_widget::{StopwatchWidget, Surface, View};
//!
//! struct NoopSurface;
//!
//! impl Surface for NoopSurface {
//!     fn apply(&mut self, _view: &View) {}
//!     fn request_fullscreen(&mut self) {}
//!     fn exit_fullscreen(&mut self) {}
//! }
//!
//! struct NoopSched(u64);
//!
//! impl Scheduler for NoopSched {
//!     fn every(&mut self, _interval: Duration) -> TimerToken {
//!         self.0 += 1;
//!         TimerToken::new(self.0)
//!     }
//!     fn after(&mut self, _delay: Duration) -> TimerToken {
//!         self.0 += 1;
//!         TimerToken::new(self.0)
//!     }
//!     fn cancel(&mut self, _token: TimerToken) {}
//! }
//!
//! let mut widget =
//!     StopwatchWidget::attach(Some(NoopSurface), SystemClock, NoopSched(0)).expect("container");
//! widget.toggle_expanded_mode();
//! let _ = widget.handle_event(Event::Click(ControlId::StartPause));
//! assert!(widget.view().reset_visible);
//! ```

pub mod chrome;
pub mod error;
pub mod state;
pub mod stopwatch;
pub mod surface;
pub mod view;
pub mod widget;

pub use chrome::ChromeController;
pub use error::AttachError;
pub use state::{PresentationMode, WidgetState};
pub use stopwatch::{RunMode, StopwatchState, TimeBreakdown, UnitVisibility};
pub use surface::Surface;
pub use view::{
    ClassFlags, DigitPair, FullscreenIcon, RESET_NOTICE_TEXT, RegionSet, StartPauseLabel,
    TimeDigits, View,
};
pub use widget::{StopwatchConfig, StopwatchWidget};
