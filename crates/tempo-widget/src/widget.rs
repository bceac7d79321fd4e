#![forbid(unsafe_code)]

//! The stopwatch widget controller.
//!
//! [`StopwatchWidget`] owns one [`WidgetState`] and wires the elapsed-time
//! engine, the presentation-mode state machine, and the transient-chrome
//! controller to the host's clock, scheduler, and surface. All mutation
//! happens inside [`handle_event`](StopwatchWidget::handle_event) and the
//! public API methods, on the owning thread; after every change the derived
//! [`View`] is pushed to the surface.

use std::time::Duration;

use tempo_core::{Clock, ControlId, Event, EventOutcome, PointerEvent, Scheduler, TimerToken};
use tempo_style::Theme;

use crate::chrome::ChromeController;
use crate::error::AttachError;
use crate::state::{PresentationMode, WidgetState};
use crate::stopwatch::{RunMode, TimeBreakdown, UnitVisibility};
use crate::surface::Surface;
use crate::view::View;

/// Timing configuration.
///
/// The defaults are the widget's stock behavior; tests shorten them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StopwatchConfig {
    /// Period of the elapsed-time display refresh while running.
    pub refresh_interval: Duration,
    /// Duration of the expanded→minimized exit transition.
    pub exit_transition: Duration,
    /// Pointer-idle period after which the transient chrome hides.
    pub chrome_idle: Duration,
}

impl Default for StopwatchConfig {
    fn default() -> Self {
        Self {
            refresh_interval: Duration::from_millis(100),
            exit_transition: Duration::from_millis(200),
            chrome_idle: Duration::from_millis(1000),
        }
    }
}

impl StopwatchConfig {
    /// Sets the display refresh period.
    #[must_use]
    pub fn refresh_interval(mut self, interval: Duration) -> Self {
        self.refresh_interval = interval;
        self
    }

    /// Sets the exit transition duration.
    #[must_use]
    pub fn exit_transition(mut self, duration: Duration) -> Self {
        self.exit_transition = duration;
        self
    }

    /// Sets the chrome auto-hide idle period.
    #[must_use]
    pub fn chrome_idle(mut self, idle: Duration) -> Self {
        self.chrome_idle = idle;
        self
    }
}

/// An embeddable stopwatch widget.
///
/// Generic over its host collaborators: a [`Clock`], a [`Scheduler`], and a
/// presentation [`Surface`]. One instance owns one state record; multiple
/// widgets on a page share nothing.
#[derive(Debug)]
pub struct StopwatchWidget<C: Clock, S: Scheduler, P: Surface> {
    clock: C,
    sched: S,
    surface: P,
    theme: Theme,
    config: StopwatchConfig,
    state: WidgetState,
    chrome: ChromeController,
    refresh_token: Option<TimerToken>,
    exit_token: Option<TimerToken>,
}

impl<C: Clock, S: Scheduler, P: Surface> StopwatchWidget<C, S, P> {
    /// Attach a widget with default configuration and theme.
    ///
    /// `surface` is the host's container lookup result; `None` means the
    /// container does not exist, which fails fast without constructing a
    /// widget.
    pub fn attach(surface: Option<P>, clock: C, sched: S) -> Result<Self, AttachError> {
        Self::attach_with(surface, clock, sched, StopwatchConfig::default(), Theme::default())
    }

    /// Attach with explicit configuration and theme.
    pub fn attach_with(
        surface: Option<P>,
        clock: C,
        sched: S,
        config: StopwatchConfig,
        theme: Theme,
    ) -> Result<Self, AttachError> {
        let Some(surface) = surface else {
            return Err(AttachError::MissingContainer);
        };
        let mut widget = Self {
            clock,
            sched,
            surface,
            theme,
            chrome: ChromeController::new(config.chrome_idle),
            config,
            state: WidgetState::new(),
            refresh_token: None,
            exit_token: None,
        };
        widget.sync();
        tracing::debug!("stopwatch widget attached");
        Ok(widget)
    }

    // --- state accessors ---

    /// The widget's state record.
    #[must_use]
    pub fn state(&self) -> &WidgetState {
        &self.state
    }

    /// Current run mode.
    #[must_use]
    pub fn run_mode(&self) -> RunMode {
        self.state.watch.run_mode()
    }

    /// Most recently sampled elapsed time.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.state.watch.elapsed()
    }

    /// Current presentation mode.
    #[must_use]
    pub fn presentation(&self) -> PresentationMode {
        self.state.presentation
    }

    /// Revealed time units.
    #[must_use]
    pub fn units(&self) -> UnitVisibility {
        self.state.watch.units()
    }

    /// Whether the exit transition is pending.
    #[must_use]
    pub fn is_exit_pending(&self) -> bool {
        self.exit_token.is_some()
    }

    /// Whether the transient chrome is currently shown.
    #[must_use]
    pub fn chrome_shown(&self) -> bool {
        self.chrome.shown()
    }

    /// The current presentation snapshot.
    #[must_use]
    pub fn view(&self) -> View {
        View::of(&self.state, self.chrome.shown(), &self.theme)
    }

    // --- event handling ---

    /// Dispatch one input or notification.
    ///
    /// Events that do not apply in the current state (clicking a hidden
    /// control, space while minimized, a stale timer token) are ignored, not
    /// errors: they are reachable through ordinary UI races and must never
    /// disturb the widget.
    pub fn handle_event(&mut self, event: Event) -> EventOutcome {
        match event {
            Event::Click(control) => self.on_click(control),
            Event::Key(key) => {
                if self.state.is_expanded() && !self.state.exiting && key.is_char(' ') {
                    self.toggle_run();
                    self.sync();
                    EventOutcome::Consumed
                } else {
                    EventOutcome::Ignored
                }
            }
            Event::Pointer(pointer) => self.on_pointer(pointer),
            Event::Timer(token) => self.on_timer(token),
            Event::FullscreenChanged(active) => {
                self.state.host_fullscreen = active;
                tracing::debug!(active, "host fullscreen changed");
                self.sync();
                EventOutcome::Consumed
            }
            Event::FullscreenDenied { reason } => {
                tracing::warn!(%reason, "host fullscreen request rejected");
                EventOutcome::Consumed
            }
        }
    }

    fn on_click(&mut self, control: ControlId) -> EventOutcome {
        if !self.state.is_expanded() {
            return EventOutcome::Ignored;
        }
        match control {
            ControlId::StartPause => {
                self.toggle_run();
            }
            ControlId::Reset => {
                if !self.state.watch.started() {
                    return EventOutcome::Ignored;
                }
                self.reset_session();
            }
            ControlId::Back => {
                // Leave host fullscreen first, then leave expanded mode.
                if self.state.host_fullscreen {
                    self.surface.exit_fullscreen();
                }
                self.toggle_expanded_mode();
                return EventOutcome::Consumed;
            }
            ControlId::ThemeToggle => {
                self.toggle_theme();
                return EventOutcome::Consumed;
            }
            ControlId::FullscreenToggle => {
                if self.state.host_fullscreen {
                    self.surface.exit_fullscreen();
                } else {
                    self.surface.request_fullscreen();
                }
                return EventOutcome::Consumed;
            }
        }
        self.sync();
        EventOutcome::Consumed
    }

    fn on_pointer(&mut self, pointer: PointerEvent) -> EventOutcome {
        match pointer {
            PointerEvent::Moved => {
                if self.state.is_expanded() && !self.state.exiting {
                    self.chrome.reveal(&mut self.sched);
                    self.sync();
                    EventOutcome::Consumed
                } else {
                    EventOutcome::Ignored
                }
            }
            PointerEvent::Entered(region) => {
                if region.blocks_chrome_hide() {
                    self.chrome.pointer_entered(region);
                    EventOutcome::Consumed
                } else {
                    EventOutcome::Ignored
                }
            }
            PointerEvent::Exited(region) => {
                if region.blocks_chrome_hide() {
                    self.chrome.pointer_exited(region);
                    EventOutcome::Consumed
                } else {
                    EventOutcome::Ignored
                }
            }
        }
    }

    fn on_timer(&mut self, token: TimerToken) -> EventOutcome {
        if self.exit_token == Some(token) {
            self.exit_token = None;
            self.finish_exit();
            self.sync();
            EventOutcome::Consumed
        } else if self.refresh_token == Some(token) {
            let now = self.clock.now();
            self.state.display = self.state.watch.sample(now);
            self.sync();
            EventOutcome::Consumed
        } else if self.chrome.on_timer(token) {
            self.sync();
            EventOutcome::Consumed
        } else {
            // A cancelled timer's fire was already in flight; drop it.
            EventOutcome::Ignored
        }
    }

    // --- public API ---

    /// Toggle between minimized and expanded presentation.
    ///
    /// Entering expanded mode preserves the running/paused timer and shows
    /// the chrome briefly. Leaving starts the timed exit transition; when it
    /// completes the timer is reset — the intentional resets-on-exit
    /// contract the notice surfaces. Toggling again while the exit is
    /// pending cancels it and stays expanded with elapsed time intact.
    pub fn toggle_expanded_mode(&mut self) {
        if self.state.exiting {
            if let Some(token) = self.exit_token.take() {
                self.sched.cancel(token);
            }
            self.state.exiting = false;
            self.chrome.reveal(&mut self.sched);
            tracing::debug!("exit transition cancelled, staying expanded");
            self.sync();
            return;
        }
        match self.state.presentation {
            PresentationMode::Minimized => {
                self.state.presentation = PresentationMode::Expanded;
                self.chrome.reveal(&mut self.sched);
                tracing::debug!("expanded mode entered");
            }
            PresentationMode::Expanded => {
                self.state.exiting = true;
                self.chrome.suppress(&mut self.sched);
                self.exit_token = Some(self.sched.after(self.config.exit_transition));
                tracing::debug!("exit transition started");
            }
        }
        self.sync();
    }

    /// Flip between light and dark theme. No other state is affected.
    pub fn toggle_theme(&mut self) {
        self.state.theme_mode = self.state.theme_mode.toggled();
        tracing::debug!(dark = self.state.theme_mode.is_dark(), "theme toggled");
        self.sync();
    }

    /// Force the hours digits shown or hidden, bypassing the elapsed
    /// threshold.
    pub fn set_show_hours(&mut self, show: bool) {
        self.state.watch.set_show_hours(show);
        self.sync();
    }

    /// Force the days digits shown or hidden, bypassing the elapsed
    /// threshold. Showing days also shows hours.
    pub fn set_show_days(&mut self, show: bool) {
        self.state.watch.set_show_days(show);
        self.sync();
    }

    // --- internals ---

    /// Start when idle/paused, pause when running; arms and cancels the
    /// display refresh with the run state.
    fn toggle_run(&mut self) {
        let now = self.clock.now();
        match self.state.watch.run_mode() {
            RunMode::Running => {
                self.state.watch.pause(now);
                if let Some(token) = self.refresh_token.take() {
                    self.sched.cancel(token);
                }
            }
            RunMode::Idle | RunMode::Paused => {
                self.state.watch.start(now);
                if self.refresh_token.is_none() {
                    self.refresh_token = Some(self.sched.every(self.config.refresh_interval));
                }
            }
        }
        self.state.display = self.state.watch.sample(now);
    }

    /// Reset the session and cancel the display refresh.
    fn reset_session(&mut self) {
        if let Some(token) = self.refresh_token.take() {
            self.sched.cancel(token);
        }
        self.state.watch.reset();
        self.state.display = TimeBreakdown::ZERO;
    }

    /// Complete the exit transition: hide everything and reset the timer.
    fn finish_exit(&mut self) {
        self.state.exiting = false;
        self.state.presentation = PresentationMode::Minimized;
        self.chrome.suppress(&mut self.sched);
        self.reset_session();
        tracing::debug!("expanded mode exited, timer reset");
    }

    /// Push the derived view to the surface.
    fn sync(&mut self) {
        let view = View::of(&self.state, self.chrome.shown(), &self.theme);
        self.surface.apply(&view);
    }
}
