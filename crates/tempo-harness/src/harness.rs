#![forbid(unsafe_code)]

//! The assembled test host: widget plus probe handles.

use std::time::Duration;

use tempo_core::{ControlId, Event, EventOutcome, KeyCode, KeyEvent, PointerEvent, TimerToken};
use tempo_style::Theme;
use tempo_widget::{StopwatchConfig, StopwatchWidget, View};

use crate::clock::ManualClock;
use crate::sched::{ManualScheduler, TimerKind};
use crate::surface::RecordingSurface;

/// A widget attached to manual doubles, with the probe halves kept here.
///
/// The widget owns clones of the clock, scheduler, and surface; the fields
/// on this struct share state with them, so a test can advance time, fire
/// timers, and inspect applied views from outside.
pub struct WidgetHarness {
    /// Probe for the widget's clock.
    pub clock: ManualClock,
    /// Probe for the widget's scheduler ledger.
    pub sched: ManualScheduler,
    /// Probe for the widget's surface recording.
    pub surface: RecordingSurface,
    /// The widget under test.
    pub widget: StopwatchWidget<ManualClock, ManualScheduler, RecordingSurface>,
}

impl WidgetHarness {
    /// Attach a widget with the stock configuration.
    #[must_use]
    pub fn attach() -> Self {
        Self::attach_with(StopwatchConfig::default())
    }

    /// Attach a widget with an explicit configuration.
    #[must_use]
    pub fn attach_with(config: StopwatchConfig) -> Self {
        let clock = ManualClock::new();
        let sched = ManualScheduler::new();
        let surface = RecordingSurface::new();
        let widget = StopwatchWidget::attach_with(
            Some(surface.clone()),
            clock.clone(),
            sched.clone(),
            config,
            Theme::default(),
        )
        .expect("attach cannot fail with a present container");
        Self {
            clock,
            sched,
            surface,
            widget,
        }
    }

    /// Toggle the widget into (or out of) expanded mode.
    pub fn expand(&mut self) {
        self.widget.toggle_expanded_mode();
    }

    /// Click a control.
    pub fn click(&mut self, control: ControlId) -> EventOutcome {
        self.widget.handle_event(Event::Click(control))
    }

    /// Press the space key.
    pub fn press_space(&mut self) -> EventOutcome {
        self.widget
            .handle_event(Event::Key(KeyEvent::new(KeyCode::Char(' '))))
    }

    /// Move the pointer over the widget.
    pub fn pointer_move(&mut self) -> EventOutcome {
        self.widget.handle_event(Event::Pointer(PointerEvent::Moved))
    }

    /// Advance the clock.
    pub fn advance(&self, delta: Duration) {
        self.clock.advance(delta);
    }

    /// Deliver a timer firing.
    pub fn fire(&mut self, token: TimerToken) -> EventOutcome {
        self.widget.handle_event(Event::Timer(token))
    }

    /// The active periodic refresh token, if the display refresh is armed.
    #[must_use]
    pub fn refresh_token(&self) -> Option<TimerToken> {
        self.sched
            .active()
            .into_iter()
            .find_map(|(token, kind)| match kind {
                TimerKind::Every(_) => Some(token),
                TimerKind::After(_) => None,
            })
    }

    /// The most recently armed, still-active one-shot with the given delay.
    ///
    /// With the stock configuration this distinguishes the chrome auto-hide
    /// (1000 ms) from the exit transition (200 ms).
    #[must_use]
    pub fn one_shot(&self, delay: Duration) -> Option<TimerToken> {
        self.sched
            .active()
            .into_iter()
            .rev()
            .find_map(|(token, kind)| match kind {
                TimerKind::After(d) if d == delay => Some(token),
                _ => None,
            })
    }

    /// Advance the clock and deliver one refresh tick.
    pub fn tick(&mut self, delta: Duration) {
        self.advance(delta);
        if let Some(token) = self.refresh_token() {
            let _ = self.fire(token);
        }
    }

    /// The most recently applied view.
    ///
    /// # Panics
    ///
    /// Panics if no view was applied yet (attach always applies one).
    #[must_use]
    pub fn last_view(&self) -> View {
        self.surface
            .last_view()
            .expect("attach applies an initial view")
    }
}
