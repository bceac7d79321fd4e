#![forbid(unsafe_code)]

//! Elapsed-time engine.
//!
//! [`StopwatchState`] tracks elapsed time with start/pause/reset semantics
//! against a caller-supplied monotonic instant, and owns the session's
//! one-way unit-visibility promotion (hours and days appear once elapsed
//! time crosses their threshold and stay visible until the next reset).
//!
//! # Example
//!
//! ```rust
//! use std::time::{Duration, Instant};
//! use tempo_widget::stopwatch::{RunMode, StopwatchState};
//!
//! let mut state = StopwatchState::new();
//! let t0 = Instant::now();
//! assert_eq!(state.run_mode(), RunMode::Idle);
//!
//! state.start(t0);
//! let breakdown = state.sample(t0 + Duration::from_millis(1500));
//! assert_eq!(breakdown.seconds, 1);
//! ```

use std::time::{Duration, Instant};

use bitflags::bitflags;

/// Whether the session is accumulating elapsed time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RunMode {
    /// Never started or just reset.
    #[default]
    Idle,
    /// Actively accumulating elapsed time.
    Running,
    /// Accumulation frozen, resumable.
    Paused,
}

bitflags! {
    /// The set of time units the display reveals.
    ///
    /// Promotion is one-directional within a session: once `HOURS` or `DAYS`
    /// is set by an elapsed-time threshold it stays set until reset collapses
    /// the set back to [`UnitVisibility::MINIMAL`].
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct UnitVisibility: u8 {
        /// Seconds digits (always shown).
        const SECONDS = 0b0001;
        /// Minutes digits (always shown).
        const MINUTES = 0b0010;
        /// Hours digits.
        const HOURS   = 0b0100;
        /// Days digits.
        const DAYS    = 0b1000;
        /// The minimal set a fresh session shows.
        const MINIMAL = Self::SECONDS.bits() | Self::MINUTES.bits();
    }
}

impl Default for UnitVisibility {
    fn default() -> Self {
        Self::MINIMAL
    }
}

impl UnitVisibility {
    /// Whether the hours digits are revealed.
    #[must_use]
    pub const fn shows_hours(self) -> bool {
        self.contains(Self::HOURS)
    }

    /// Whether the days digits are revealed.
    #[must_use]
    pub const fn shows_days(self) -> bool {
        self.contains(Self::DAYS)
    }
}

/// An elapsed duration broken into display units.
///
/// `total_seconds = floor(elapsed_ms / 1000)`; days/hours/minutes/seconds
/// are the usual euclidean split of that total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TimeBreakdown {
    /// Whole days.
    pub days: u64,
    /// Hours within the day (0–23).
    pub hours: u8,
    /// Minutes within the hour (0–59).
    pub minutes: u8,
    /// Seconds within the minute (0–59).
    pub seconds: u8,
}

impl TimeBreakdown {
    /// The zero breakdown.
    pub const ZERO: Self = Self {
        days: 0,
        hours: 0,
        minutes: 0,
        seconds: 0,
    };

    /// Split an elapsed duration into display units.
    #[must_use]
    pub const fn from_duration(elapsed: Duration) -> Self {
        let total = elapsed.as_secs();
        Self {
            days: total / 86_400,
            hours: ((total % 86_400) / 3_600) as u8,
            minutes: ((total % 3_600) / 60) as u8,
            seconds: (total % 60) as u8,
        }
    }
}

/// Elapsed-time state with start/pause/reset semantics.
///
/// All transitions take the current instant from the caller; the engine
/// never reads a clock itself. Invalid transitions (pausing while idle,
/// starting while running) are no-ops, reachable through ordinary UI races.
#[derive(Debug, Clone)]
pub struct StopwatchState {
    run_mode: RunMode,
    elapsed: Duration,
    /// Instant of the most recent transition into `Running`.
    anchor: Option<Instant>,
    /// Elapsed time at that transition; live elapsed is `base + (now - anchor)`.
    base: Duration,
    units: UnitVisibility,
}

impl Default for StopwatchState {
    fn default() -> Self {
        Self::new()
    }
}

impl StopwatchState {
    /// Creates a new idle stopwatch at zero elapsed time.
    #[must_use]
    pub fn new() -> Self {
        Self {
            run_mode: RunMode::Idle,
            elapsed: Duration::ZERO,
            anchor: None,
            base: Duration::ZERO,
            units: UnitVisibility::MINIMAL,
        }
    }

    /// Returns the current run mode.
    #[must_use]
    pub fn run_mode(&self) -> RunMode {
        self.run_mode
    }

    /// Returns the most recently sampled (or frozen) elapsed time.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Returns the revealed unit set.
    #[must_use]
    pub fn units(&self) -> UnitVisibility {
        self.units
    }

    /// Whether the session has left `Idle` since the last reset.
    #[must_use]
    pub fn started(&self) -> bool {
        self.run_mode != RunMode::Idle
    }

    /// Start or resume accumulating at `now`.
    ///
    /// Resuming preserves prior elapsed time. Returns `false` (and changes
    /// nothing) if already running.
    pub fn start(&mut self, now: Instant) -> bool {
        if self.run_mode == RunMode::Running {
            return false;
        }
        self.base = self.elapsed;
        self.anchor = Some(now);
        self.run_mode = RunMode::Running;
        tracing::debug!("timer started");
        true
    }

    /// Freeze elapsed time at `now`.
    ///
    /// Returns `false` (and changes nothing) if not running.
    pub fn pause(&mut self, now: Instant) -> bool {
        let Some(anchor) = self.anchor else {
            return false;
        };
        if self.run_mode != RunMode::Running {
            return false;
        }
        self.elapsed = self.base + now.saturating_duration_since(anchor);
        self.anchor = None;
        self.run_mode = RunMode::Paused;
        tracing::debug!("timer paused");
        true
    }

    /// Return to `Idle` with zero elapsed time and the minimal unit set.
    ///
    /// Valid from any state.
    pub fn reset(&mut self) {
        self.run_mode = RunMode::Idle;
        self.elapsed = Duration::ZERO;
        self.anchor = None;
        self.base = Duration::ZERO;
        self.units = UnitVisibility::MINIMAL;
        tracing::debug!("timer reset");
    }

    /// Elapsed time at `now` without mutating state.
    #[must_use]
    pub fn elapsed_at(&self, now: Instant) -> Duration {
        match (self.run_mode, self.anchor) {
            (RunMode::Running, Some(anchor)) => {
                self.base + now.saturating_duration_since(anchor)
            }
            _ => self.elapsed,
        }
    }

    /// Recompute elapsed time, run unit promotion, and return the display
    /// breakdown — in one step, so a displayed snapshot is never torn.
    pub fn sample(&mut self, now: Instant) -> TimeBreakdown {
        self.elapsed = self.elapsed_at(now);
        let breakdown = TimeBreakdown::from_duration(self.elapsed);
        self.promote(breakdown);
        breakdown
    }

    /// Force the hours digits shown or hidden, bypassing the elapsed
    /// threshold.
    pub fn set_show_hours(&mut self, show: bool) {
        self.units.set(UnitVisibility::HOURS, show);
    }

    /// Force the days digits shown or hidden, bypassing the elapsed
    /// threshold. Showing days also shows hours.
    pub fn set_show_days(&mut self, show: bool) {
        self.units.set(UnitVisibility::DAYS, show);
        if show {
            self.units.insert(UnitVisibility::HOURS);
        }
    }

    /// One-directional promotion: crossing an hour reveals hours, crossing a
    /// day reveals days (and hours). Nothing is ever demoted here.
    fn promote(&mut self, breakdown: TimeBreakdown) {
        if breakdown.days > 0 && !self.units.shows_days() {
            self.units
                .insert(UnitVisibility::DAYS | UnitVisibility::HOURS);
            tracing::debug!("days display enabled");
        } else if breakdown.hours > 0 && !self.units.shows_hours() {
            self.units.insert(UnitVisibility::HOURS);
            tracing::debug!("hours display enabled");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t0() -> Instant {
        Instant::now()
    }

    const MS: Duration = Duration::from_millis(1);

    // --- run mode transitions ---

    #[test]
    fn new_is_idle_and_zero() {
        let state = StopwatchState::new();
        assert_eq!(state.run_mode(), RunMode::Idle);
        assert_eq!(state.elapsed(), Duration::ZERO);
        assert_eq!(state.units(), UnitVisibility::MINIMAL);
        assert!(!state.started());
    }

    #[test]
    fn start_anchors_and_runs() {
        let mut state = StopwatchState::new();
        assert!(state.start(t0()));
        assert_eq!(state.run_mode(), RunMode::Running);
        assert!(state.started());
    }

    #[test]
    fn start_while_running_is_noop() {
        let mut state = StopwatchState::new();
        let base = t0();
        state.start(base);
        state.sample(base + Duration::from_secs(5));
        assert!(!state.start(base + Duration::from_secs(6)));
        // Elapsed keeps counting from the original anchor.
        assert_eq!(
            state.elapsed_at(base + Duration::from_secs(7)),
            Duration::from_secs(7)
        );
    }

    #[test]
    fn pause_freezes_elapsed() {
        let mut state = StopwatchState::new();
        let base = t0();
        state.start(base);
        assert!(state.pause(base + Duration::from_millis(1500)));
        assert_eq!(state.run_mode(), RunMode::Paused);
        assert_eq!(state.elapsed(), Duration::from_millis(1500));
        // Frozen: a later sample does not advance it.
        let breakdown = state.sample(base + Duration::from_secs(60));
        assert_eq!(breakdown.seconds, 1);
        assert_eq!(state.elapsed(), Duration::from_millis(1500));
    }

    #[test]
    fn pause_while_idle_is_noop() {
        let mut state = StopwatchState::new();
        assert!(!state.pause(t0()));
        assert_eq!(state.run_mode(), RunMode::Idle);
        assert_eq!(state.elapsed(), Duration::ZERO);
    }

    #[test]
    fn resume_preserves_prior_elapsed() {
        let mut state = StopwatchState::new();
        let base = t0();
        state.start(base);
        state.pause(base + Duration::from_secs(2));
        // Sit paused for a minute, then resume.
        state.start(base + Duration::from_secs(62));
        let elapsed = state.elapsed_at(base + Duration::from_secs(63));
        assert_eq!(elapsed, Duration::from_secs(3));
    }

    #[test]
    fn reset_from_any_state() {
        let base = t0();
        let setups: [fn(&mut StopwatchState, Instant); 3] = [
            |_, _| {},
            |s, t| {
                s.start(t);
            },
            |s, t| {
                s.start(t);
                s.pause(t + Duration::from_secs(1));
            },
        ];
        for setup in setups {
            let mut state = StopwatchState::new();
            setup(&mut state, base);
            state.reset();
            assert_eq!(state.run_mode(), RunMode::Idle);
            assert_eq!(state.elapsed(), Duration::ZERO);
            assert_eq!(state.units(), UnitVisibility::MINIMAL);
        }
    }

    // --- elapsed accounting ---

    #[test]
    fn elapsed_is_non_decreasing_while_running() {
        let mut state = StopwatchState::new();
        let base = t0();
        state.start(base);
        let mut prev = Duration::ZERO;
        for i in 1..50u32 {
            let elapsed = state.elapsed_at(base + MS * (i * 37));
            assert!(elapsed >= prev);
            prev = elapsed;
        }
    }

    #[test]
    fn sample_one_and_a_half_seconds_reads_as_one() {
        let mut state = StopwatchState::new();
        let base = t0();
        state.start(base);
        let breakdown = state.sample(base + Duration::from_millis(1500));
        assert_eq!(breakdown.seconds, 1);
        assert_eq!(breakdown.minutes, 0);
    }

    // --- breakdown ---

    #[test]
    fn breakdown_zero() {
        assert_eq!(TimeBreakdown::from_duration(Duration::ZERO), TimeBreakdown::ZERO);
    }

    #[test]
    fn breakdown_splits_units() {
        let b = TimeBreakdown::from_duration(Duration::from_secs(90_061));
        assert_eq!(b.days, 1);
        assert_eq!(b.hours, 1);
        assert_eq!(b.minutes, 1);
        assert_eq!(b.seconds, 1);
    }

    #[test]
    fn breakdown_floors_subseconds() {
        let b = TimeBreakdown::from_duration(Duration::from_millis(59_999));
        assert_eq!(b.seconds, 59);
        assert_eq!(b.minutes, 0);
    }

    // --- unit promotion ---

    #[test]
    fn crossing_an_hour_promotes_hours() {
        let mut state = StopwatchState::new();
        let base = t0();
        state.start(base);
        state.sample(base + Duration::from_secs(3599));
        assert!(!state.units().shows_hours());
        state.sample(base + Duration::from_secs(3600));
        assert!(state.units().shows_hours());
        assert!(!state.units().shows_days());
    }

    #[test]
    fn crossing_a_day_promotes_days_and_hours() {
        let mut state = StopwatchState::new();
        let base = t0();
        state.start(base);
        state.sample(base + Duration::from_secs(86_400));
        assert!(state.units().shows_days());
        assert!(state.units().shows_hours());
    }

    #[test]
    fn promotion_survives_pause() {
        let mut state = StopwatchState::new();
        let base = t0();
        state.start(base);
        state.sample(base + Duration::from_secs(3600));
        state.pause(base + Duration::from_secs(3601));
        assert!(state.units().shows_hours());
    }

    #[test]
    fn promotion_is_cleared_only_by_reset() {
        let mut state = StopwatchState::new();
        let base = t0();
        state.start(base);
        state.sample(base + Duration::from_secs(3600));
        state.pause(base + Duration::from_secs(3601));
        state.start(base + Duration::from_secs(3700));
        assert!(state.units().shows_hours());
        state.reset();
        assert_eq!(state.units(), UnitVisibility::MINIMAL);
    }

    // --- forced visibility ---

    #[test]
    fn set_show_hours_toggles() {
        let mut state = StopwatchState::new();
        state.set_show_hours(true);
        assert!(state.units().shows_hours());
        state.set_show_hours(false);
        assert!(!state.units().shows_hours());
    }

    #[test]
    fn set_show_days_implies_hours() {
        let mut state = StopwatchState::new();
        state.set_show_days(true);
        assert!(state.units().shows_days());
        assert!(state.units().shows_hours());
    }
}
