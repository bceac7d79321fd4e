#![forbid(unsafe_code)]

//! The widget's single mutable state record.

use tempo_style::ThemeMode;

use crate::stopwatch::{StopwatchState, TimeBreakdown};

/// The widget's presentation size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PresentationMode {
    /// Collapsed affordance only; no digits or controls.
    #[default]
    Minimized,
    /// Full digit display and controls.
    Expanded,
}

/// Everything one widget instance knows.
///
/// One record per widget, owned exclusively by its [`StopwatchWidget`];
/// never serialized, never shared between instances. The host's OS-level
/// fullscreen state is observed here (`host_fullscreen`), not owned — it is
/// deliberately decoupled from [`PresentationMode`].
///
/// [`StopwatchWidget`]: crate::StopwatchWidget
#[derive(Debug, Clone)]
pub struct WidgetState {
    /// The elapsed-time engine.
    pub watch: StopwatchState,
    /// The last sampled display breakdown.
    pub display: TimeBreakdown,
    /// Minimized or expanded.
    pub presentation: PresentationMode,
    /// Set while the expanded→minimized exit transition is pending; the
    /// widget is still logically expanded during this window.
    pub exiting: bool,
    /// Observed host OS-level fullscreen state.
    pub host_fullscreen: bool,
    /// Light or dark.
    pub theme_mode: ThemeMode,
}

impl Default for WidgetState {
    fn default() -> Self {
        Self::new()
    }
}

impl WidgetState {
    /// A fresh minimized, idle, light-mode state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            watch: StopwatchState::new(),
            display: TimeBreakdown::ZERO,
            presentation: PresentationMode::Minimized,
            exiting: false,
            host_fullscreen: false,
            theme_mode: ThemeMode::Light,
        }
    }

    /// Whether the widget is logically expanded (including the exit window).
    #[must_use]
    pub fn is_expanded(&self) -> bool {
        self.presentation == PresentationMode::Expanded
    }
}
