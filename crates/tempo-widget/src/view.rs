#![forbid(unsafe_code)]

//! The derived view: a pure mapping from widget state to presentation.
//!
//! [`View::of`] is a total function; it allocates nothing, touches no host
//! resources, and can be exercised without a live presentation surface. Host
//! surfaces receive whole [`View`] snapshots and reconcile them against
//! their retained node tree however they like.

use bitflags::bitflags;
use tempo_core::Region;
use tempo_style::{Palette, Theme};

use crate::state::WidgetState;
use crate::stopwatch::{RunMode, TimeBreakdown};

/// Text of the persistent reset-on-exit notice shown while expanded.
pub const RESET_NOTICE_TEXT: &str = "Timer resets on exit.";

bitflags! {
    /// Structural style classes the surface applies to the widget container.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ClassFlags: u8 {
        /// Expanded (fullscreen-sized) presentation.
        const EXPANDED   = 0b0000_0001;
        /// The timed exit transition is in progress.
        const EXITING    = 0b0000_0010;
        /// Hours digits revealed.
        const SHOW_HOURS = 0b0000_0100;
        /// Days digits revealed.
        const SHOW_DAYS  = 0b0000_1000;
        /// Dark theme active.
        const DARK       = 0b0001_0000;
    }
}

bitflags! {
    /// Which presentation regions are mounted and shown.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct RegionSet: u8 {
        /// The back affordance header.
        const BACK_HEADER   = 0b0000_0001;
        /// The digit display.
        const DISPLAY       = 0b0000_0010;
        /// The start/pause and reset controls.
        const CONTROLS      = 0b0000_0100;
        /// The theme and fullscreen toggles.
        const MODE_CONTROLS = 0b0000_1000;
        /// The reset-on-exit notice.
        const RESET_NOTICE  = 0b0001_0000;
    }
}

impl RegionSet {
    /// The flag for a single region.
    #[must_use]
    pub const fn from_region(region: Region) -> Self {
        match region {
            Region::BackHeader => Self::BACK_HEADER,
            Region::Display => Self::DISPLAY,
            Region::Controls => Self::CONTROLS,
            Region::ModeControls => Self::MODE_CONTROLS,
            Region::ResetNotice => Self::RESET_NOTICE,
        }
    }

    /// Whether a region is in the set.
    #[must_use]
    pub const fn contains_region(self, region: Region) -> bool {
        self.contains(Self::from_region(region))
    }
}

/// Two zero-padded display digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigitPair(pub char, pub char);

impl DigitPair {
    /// The pair for a unit value, zero-padded to two digits.
    ///
    /// Values wider than two digits keep their leading digits, matching the
    /// fixed two-slot display.
    #[must_use]
    pub fn of(value: u64) -> Self {
        let text = format!("{value:02}");
        let mut chars = text.chars();
        Self(
            chars.next().unwrap_or('0'),
            chars.next().unwrap_or('0'),
        )
    }
}

impl std::fmt::Display for DigitPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.0, self.1)
    }
}

/// The four digit pairs of the display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeDigits {
    /// Days digits.
    pub days: DigitPair,
    /// Hours digits.
    pub hours: DigitPair,
    /// Minutes digits.
    pub minutes: DigitPair,
    /// Seconds digits.
    pub seconds: DigitPair,
}

impl TimeDigits {
    /// Digit pairs for a breakdown.
    #[must_use]
    pub fn of(breakdown: TimeBreakdown) -> Self {
        Self {
            days: DigitPair::of(breakdown.days),
            hours: DigitPair::of(breakdown.hours as u64),
            minutes: DigitPair::of(breakdown.minutes as u64),
            seconds: DigitPair::of(breakdown.seconds as u64),
        }
    }
}

/// Label on the combined start/pause control, reflecting the next action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartPauseLabel {
    /// Session is idle; pressing starts it.
    Start,
    /// Session is running; pressing pauses it.
    Pause,
    /// Session is paused; pressing resumes it (same action as start).
    Resume,
}

impl StartPauseLabel {
    /// The label for a run mode.
    #[must_use]
    pub const fn for_mode(mode: RunMode) -> Self {
        match mode {
            RunMode::Idle => Self::Start,
            RunMode::Running => Self::Pause,
            RunMode::Paused => Self::Resume,
        }
    }

    /// Display text.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Start => "Start",
            Self::Pause => "Pause",
            Self::Resume => "Resume",
        }
    }
}

/// Icon shown on the host fullscreen toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FullscreenIcon {
    /// Host fullscreen inactive; pressing requests it.
    Expand,
    /// Host fullscreen active; pressing exits it.
    Contract,
}

/// One complete presentation snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct View {
    /// Structural classes on the container.
    pub classes: ClassFlags,
    /// Mounted regions.
    pub visible: RegionSet,
    /// Whether the transient chrome (back header, mode controls, notice) is
    /// currently shown within the mounted regions.
    pub chrome_shown: bool,
    /// Whether the pointer cursor is hidden (expanded, chrome idle).
    pub cursor_hidden: bool,
    /// The digit display.
    pub digits: TimeDigits,
    /// Start/pause control label.
    pub start_pause: StartPauseLabel,
    /// Whether the start control renders as the primary filled affordance
    /// (true until the session first starts).
    pub start_pause_primary: bool,
    /// Whether the reset control is shown (only once the session started).
    pub reset_visible: bool,
    /// Host fullscreen toggle icon.
    pub fullscreen_icon: FullscreenIcon,
    /// Notice text rendered in the [`Region::ResetNotice`] region.
    pub notice: &'static str,
    /// Resolved theme colors.
    pub palette: Palette,
}

impl View {
    /// Derive the presentation for a state snapshot.
    ///
    /// `chrome_shown` comes from the transient-visibility controller; it is
    /// forced off while minimized or during the exit transition.
    #[must_use]
    pub fn of(state: &WidgetState, chrome_shown: bool, theme: &Theme) -> Self {
        let expanded = state.is_expanded();
        let units = state.watch.units();

        let mut classes = ClassFlags::empty();
        classes.set(ClassFlags::EXPANDED, expanded);
        classes.set(ClassFlags::EXITING, state.exiting);
        classes.set(ClassFlags::SHOW_HOURS, units.shows_hours());
        classes.set(ClassFlags::SHOW_DAYS, units.shows_days());
        classes.set(ClassFlags::DARK, state.theme_mode.is_dark());

        let visible = if expanded {
            RegionSet::all()
        } else {
            RegionSet::empty()
        };

        let chrome_shown = chrome_shown && expanded && !state.exiting;
        let run_mode = state.watch.run_mode();

        Self {
            classes,
            visible,
            chrome_shown,
            cursor_hidden: expanded && !state.exiting && !chrome_shown,
            digits: TimeDigits::of(state.display),
            start_pause: StartPauseLabel::for_mode(run_mode),
            start_pause_primary: run_mode == RunMode::Idle,
            reset_visible: expanded && run_mode != RunMode::Idle,
            fullscreen_icon: if state.host_fullscreen {
                FullscreenIcon::Contract
            } else {
                FullscreenIcon::Expand
            },
            notice: RESET_NOTICE_TEXT,
            palette: theme.resolve(state.theme_mode),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::PresentationMode;
    use std::time::{Duration, Instant};
    use tempo_style::ThemeMode;

    fn expanded_state() -> WidgetState {
        let mut state = WidgetState::new();
        state.presentation = PresentationMode::Expanded;
        state
    }

    // --- digits ---

    #[test]
    fn digit_pair_pads_to_two() {
        assert_eq!(DigitPair::of(0).to_string(), "00");
        assert_eq!(DigitPair::of(7).to_string(), "07");
        assert_eq!(DigitPair::of(42).to_string(), "42");
    }

    #[test]
    fn digit_pair_keeps_leading_digits_when_wide() {
        assert_eq!(DigitPair::of(100).to_string(), "10");
    }

    #[test]
    fn time_digits_of_breakdown() {
        let digits = TimeDigits::of(TimeBreakdown {
            days: 2,
            hours: 3,
            minutes: 45,
            seconds: 6,
        });
        assert_eq!(digits.days.to_string(), "02");
        assert_eq!(digits.hours.to_string(), "03");
        assert_eq!(digits.minutes.to_string(), "45");
        assert_eq!(digits.seconds.to_string(), "06");
    }

    // --- labels ---

    #[test]
    fn label_reflects_next_action() {
        assert_eq!(StartPauseLabel::for_mode(RunMode::Idle).as_str(), "Start");
        assert_eq!(StartPauseLabel::for_mode(RunMode::Running).as_str(), "Pause");
        assert_eq!(StartPauseLabel::for_mode(RunMode::Paused).as_str(), "Resume");
    }

    // --- visibility rules ---

    #[test]
    fn minimized_mounts_nothing() {
        let view = View::of(&WidgetState::new(), true, &Theme::default());
        assert_eq!(view.visible, RegionSet::empty());
        assert!(!view.chrome_shown);
        assert!(!view.cursor_hidden);
        assert!(!view.classes.contains(ClassFlags::EXPANDED));
    }

    #[test]
    fn expanded_mounts_all_regions() {
        let view = View::of(&expanded_state(), true, &Theme::default());
        assert!(view.visible.contains_region(Region::Display));
        assert!(view.visible.contains_region(Region::Controls));
        assert!(view.visible.contains_region(Region::BackHeader));
        assert!(view.visible.contains_region(Region::ModeControls));
        assert!(view.visible.contains_region(Region::ResetNotice));
        assert!(view.classes.contains(ClassFlags::EXPANDED));
        assert_eq!(view.notice, RESET_NOTICE_TEXT);
    }

    #[test]
    fn reset_hidden_until_session_starts() {
        let mut state = expanded_state();
        let view = View::of(&state, true, &Theme::default());
        assert!(!view.reset_visible);
        assert!(view.start_pause_primary);

        state.watch.start(Instant::now());
        let view = View::of(&state, true, &Theme::default());
        assert!(view.reset_visible);
        assert!(!view.start_pause_primary);
    }

    #[test]
    fn paused_keeps_reset_visible_and_non_primary() {
        let mut state = expanded_state();
        let base = Instant::now();
        state.watch.start(base);
        state.watch.pause(base + Duration::from_secs(1));
        let view = View::of(&state, true, &Theme::default());
        assert!(view.reset_visible);
        assert!(!view.start_pause_primary);
        assert_eq!(view.start_pause, StartPauseLabel::Resume);
    }

    #[test]
    fn chrome_hidden_hides_cursor() {
        let view = View::of(&expanded_state(), false, &Theme::default());
        assert!(!view.chrome_shown);
        assert!(view.cursor_hidden);
    }

    #[test]
    fn exit_transition_forces_chrome_off_and_cursor_back() {
        let mut state = expanded_state();
        state.exiting = true;
        let view = View::of(&state, true, &Theme::default());
        assert!(view.classes.contains(ClassFlags::EXPANDED));
        assert!(view.classes.contains(ClassFlags::EXITING));
        assert!(!view.chrome_shown);
        assert!(!view.cursor_hidden);
    }

    #[test]
    fn unit_classes_follow_visibility() {
        let mut state = expanded_state();
        state.watch.set_show_days(true);
        let view = View::of(&state, true, &Theme::default());
        assert!(view.classes.contains(ClassFlags::SHOW_DAYS));
        assert!(view.classes.contains(ClassFlags::SHOW_HOURS));
    }

    // --- theme and fullscreen ---

    #[test]
    fn dark_mode_sets_class_and_palette() {
        let mut state = expanded_state();
        state.theme_mode = ThemeMode::Dark;
        let view = View::of(&state, true, &Theme::default());
        assert!(view.classes.contains(ClassFlags::DARK));
        assert!(view.palette.background.is_dark());
    }

    #[test]
    fn fullscreen_icon_tracks_host_state() {
        let mut state = expanded_state();
        let view = View::of(&state, true, &Theme::default());
        assert_eq!(view.fullscreen_icon, FullscreenIcon::Expand);
        state.host_fullscreen = true;
        let view = View::of(&state, true, &Theme::default());
        assert_eq!(view.fullscreen_icon, FullscreenIcon::Contract);
    }

    #[test]
    fn host_fullscreen_does_not_expand_presentation() {
        let mut state = WidgetState::new();
        state.host_fullscreen = true;
        let view = View::of(&state, true, &Theme::default());
        assert_eq!(view.visible, RegionSet::empty());
        assert!(!view.classes.contains(ClassFlags::EXPANDED));
    }
}
