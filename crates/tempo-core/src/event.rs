#![forbid(unsafe_code)]

//! Input events and presentation identifiers.
//!
//! Everything the widget can react to arrives as an [`Event`]: a click on
//! one of its controls, pointer motion, a key press, a timer firing, or a
//! host fullscreen notification. The host adapts its native input layer to
//! this vocabulary and feeds events to `StopwatchWidget::handle_event`.

use crate::sched::TimerToken;
use bitflags::bitflags;

/// The widget's clickable controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlId {
    /// The combined start/pause/resume control.
    StartPause,
    /// The reset control (visible only once a session has started).
    Reset,
    /// The back affordance that leaves expanded mode.
    Back,
    /// The light/dark theme toggle.
    ThemeToggle,
    /// The host (OS-level) fullscreen toggle.
    FullscreenToggle,
}

/// Presentation regions the widget shows and hides as a unit.
///
/// Regions are identifiers shared between input (pointer enter/exit) and
/// presentation (the view's visibility set); the host surface decides what
/// they map to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    /// The back affordance header.
    BackHeader,
    /// The digit display.
    Display,
    /// The start/pause and reset controls.
    Controls,
    /// The theme and fullscreen toggles.
    ModeControls,
    /// The persistent "resets on exit" notice.
    ResetNotice,
}

impl Region {
    /// Whether hovering this region keeps the transient chrome visible.
    ///
    /// Matches the original behavior: only the back affordance and the mode
    /// controls suppress the auto-hide, not the notice text.
    #[must_use]
    pub const fn blocks_chrome_hide(self) -> bool {
        matches!(self, Self::BackHeader | Self::ModeControls)
    }
}

/// A keyboard event scoped to the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    /// The key that was pressed.
    pub code: KeyCode,
    /// Modifier keys held during the event.
    pub modifiers: Modifiers,
}

impl KeyEvent {
    /// Create a key event with no modifiers.
    #[must_use]
    pub const fn new(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: Modifiers::NONE,
        }
    }

    /// Attach modifiers to the event.
    #[must_use]
    pub const fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Check if this is a specific character key.
    #[must_use]
    pub fn is_char(&self, c: char) -> bool {
        matches!(self.code, KeyCode::Char(ch) if ch == c)
    }
}

/// Key codes the widget can receive.
///
/// Deliberately small: the widget only acts on the space character, and
/// leaves everything else (including Escape) to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// A regular character key.
    Char(char),
    /// Enter/Return key.
    Enter,
    /// Escape key.
    Escape,
}

bitflags! {
    /// Modifier keys that can be held during a key event.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// No modifiers.
        const NONE  = 0b0000;
        /// Shift key.
        const SHIFT = 0b0001;
        /// Alt/Option key.
        const ALT   = 0b0010;
        /// Control key.
        const CTRL  = 0b0100;
        /// Super/Meta/Cmd key.
        const SUPER = 0b1000;
    }
}

impl Default for Modifiers {
    fn default() -> Self {
        Self::NONE
    }
}

/// Pointer activity over the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    /// The pointer moved anywhere over the widget.
    Moved,
    /// The pointer entered a region.
    Entered(Region),
    /// The pointer left a region.
    Exited(Region),
}

/// An input or notification delivered to the widget.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// A click on one of the widget's controls.
    Click(ControlId),
    /// A key press scoped to the widget or its document.
    Key(KeyEvent),
    /// Pointer motion or region enter/exit.
    Pointer(PointerEvent),
    /// A scheduled timer fired. The token identifies which one; tokens for
    /// timers that were already cancelled are ignored by the widget.
    Timer(TimerToken),
    /// The host's OS-level fullscreen state changed.
    FullscreenChanged(bool),
    /// A host fullscreen request or exit was rejected (permission or
    /// user-gesture requirement not met). Non-fatal.
    FullscreenDenied {
        /// Host-provided description of the rejection.
        reason: String,
    },
}

/// Whether the widget acted on an event.
///
/// Hosts use this to decide whether to suppress an input's default effect
/// (the widget consumes the space key while expanded, for example).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum EventOutcome {
    /// The widget handled the event; the host should suppress defaults.
    Consumed,
    /// The event did not apply; the host may process it normally.
    Ignored,
}

impl EventOutcome {
    /// Returns `true` if the event was consumed.
    #[must_use]
    pub const fn is_consumed(self) -> bool {
        matches!(self, Self::Consumed)
    }
}
