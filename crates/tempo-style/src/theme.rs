#![forbid(unsafe_code)]

//! Theme system with adaptive light/dark color slots.
//!
//! A [`Theme`] holds semantic color slots; each slot is an [`AdaptiveColor`]
//! that resolves to a concrete [`Rgb`] for the active [`ThemeMode`]. The
//! default theme carries the widget's stock palette.
//!
//! # Example
//! ```
//! use tempo_style::{Theme, ThemeMode};
//!
//! let theme = Theme::default();
//! let light = theme.resolve(ThemeMode::Light);
//! let dark = theme.resolve(ThemeMode::Dark);
//! assert_ne!(light.background, dark.background);
//! ```

use crate::color::Rgb;

/// Light or dark presentation mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ThemeMode {
    /// Light mode (the widget's default).
    #[default]
    Light,
    /// Dark mode.
    Dark,
}

impl ThemeMode {
    /// Returns `true` in dark mode.
    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// The opposite mode.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// A color that can change based on light/dark mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdaptiveColor {
    /// A fixed color that doesn't change with mode.
    Fixed(Rgb),
    /// A color that adapts to light/dark mode.
    Adaptive {
        /// Color to use in light mode.
        light: Rgb,
        /// Color to use in dark mode.
        dark: Rgb,
    },
}

impl AdaptiveColor {
    /// Create a fixed color.
    #[must_use]
    pub const fn fixed(color: Rgb) -> Self {
        Self::Fixed(color)
    }

    /// Create an adaptive color with light/dark variants.
    #[must_use]
    pub const fn adaptive(light: Rgb, dark: Rgb) -> Self {
        Self::Adaptive { light, dark }
    }

    /// Resolve the color for the given mode.
    #[must_use]
    pub const fn resolve(&self, mode: ThemeMode) -> Rgb {
        match self {
            Self::Fixed(c) => *c,
            Self::Adaptive { light, dark } => {
                if mode.is_dark() {
                    *dark
                } else {
                    *light
                }
            }
        }
    }

    /// Check if this color adapts to mode.
    #[must_use]
    pub const fn is_adaptive(&self) -> bool {
        matches!(self, Self::Adaptive { .. })
    }
}

/// Semantic color slots for the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Widget background.
    pub background: AdaptiveColor,
    /// Digit and label text.
    pub text: AdaptiveColor,
    /// The primary (not-yet-started) start control fill.
    pub accent: AdaptiveColor,
    /// Text on the accent fill.
    pub accent_text: AdaptiveColor,
    /// The persistent reset-on-exit notice.
    pub notice: AdaptiveColor,
    /// The back affordance.
    pub link: AdaptiveColor,
}

impl Default for Theme {
    /// The widget's stock palette.
    fn default() -> Self {
        Self {
            background: AdaptiveColor::adaptive(Rgb::new(249, 249, 249), Rgb::new(0, 0, 0)),
            text: AdaptiveColor::adaptive(Rgb::new(0, 0, 0), Rgb::new(255, 255, 255)),
            accent: AdaptiveColor::fixed(Rgb::new(157, 210, 239)),
            accent_text: AdaptiveColor::fixed(Rgb::new(0, 0, 0)),
            notice: AdaptiveColor::fixed(Rgb::gray(130)),
            link: AdaptiveColor::fixed(Rgb::new(0, 123, 255)),
        }
    }
}

impl Theme {
    /// Start building a custom theme from the default palette.
    #[must_use]
    pub fn builder() -> ThemeBuilder {
        ThemeBuilder {
            theme: Self::default(),
        }
    }

    /// Resolve every slot for the given mode.
    #[must_use]
    pub const fn resolve(&self, mode: ThemeMode) -> Palette {
        Palette {
            background: self.background.resolve(mode),
            text: self.text.resolve(mode),
            accent: self.accent.resolve(mode),
            accent_text: self.accent_text.resolve(mode),
            notice: self.notice.resolve(mode),
            link: self.link.resolve(mode),
        }
    }
}

/// Builder for custom themes.
#[derive(Debug, Clone)]
pub struct ThemeBuilder {
    theme: Theme,
}

impl ThemeBuilder {
    /// Set the background slot.
    #[must_use]
    pub fn background(mut self, color: AdaptiveColor) -> Self {
        self.theme.background = color;
        self
    }

    /// Set the text slot.
    #[must_use]
    pub fn text(mut self, color: AdaptiveColor) -> Self {
        self.theme.text = color;
        self
    }

    /// Set the accent slot.
    #[must_use]
    pub fn accent(mut self, color: AdaptiveColor) -> Self {
        self.theme.accent = color;
        self
    }

    /// Set the accent text slot.
    #[must_use]
    pub fn accent_text(mut self, color: AdaptiveColor) -> Self {
        self.theme.accent_text = color;
        self
    }

    /// Set the notice slot.
    #[must_use]
    pub fn notice(mut self, color: AdaptiveColor) -> Self {
        self.theme.notice = color;
        self
    }

    /// Set the back-affordance slot.
    #[must_use]
    pub fn link(mut self, color: AdaptiveColor) -> Self {
        self.theme.link = color;
        self
    }

    /// Finish building.
    #[must_use]
    pub fn build(self) -> Theme {
        self.theme
    }
}

/// A theme resolved for one mode: flat, concrete colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Widget background.
    pub background: Rgb,
    /// Digit and label text.
    pub text: Rgb,
    /// Primary start control fill.
    pub accent: Rgb,
    /// Text on the accent fill.
    pub accent_text: Rgb,
    /// Notice text.
    pub notice: Rgb,
    /// Back affordance.
    pub link: Rgb,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_default_is_light() {
        assert_eq!(ThemeMode::default(), ThemeMode::Light);
        assert!(!ThemeMode::default().is_dark());
    }

    #[test]
    fn mode_toggle_is_idempotent_over_two_calls() {
        let mode = ThemeMode::Light;
        assert_eq!(mode.toggled().toggled(), mode);
        assert_eq!(mode.toggled(), ThemeMode::Dark);
    }

    #[test]
    fn fixed_color_ignores_mode() {
        let c = AdaptiveColor::fixed(Rgb::new(1, 2, 3));
        assert_eq!(c.resolve(ThemeMode::Light), c.resolve(ThemeMode::Dark));
        assert!(!c.is_adaptive());
    }

    #[test]
    fn adaptive_color_resolves_by_mode() {
        let c = AdaptiveColor::adaptive(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0));
        assert_eq!(c.resolve(ThemeMode::Light), Rgb::new(255, 255, 255));
        assert_eq!(c.resolve(ThemeMode::Dark), Rgb::new(0, 0, 0));
        assert!(c.is_adaptive());
    }

    #[test]
    fn default_theme_background_flips_with_mode() {
        let theme = Theme::default();
        let light = theme.resolve(ThemeMode::Light);
        let dark = theme.resolve(ThemeMode::Dark);
        assert!(!light.background.is_dark());
        assert!(dark.background.is_dark());
        // Text contrasts with background in both modes.
        assert!(light.text.is_dark());
        assert!(!dark.text.is_dark());
    }

    #[test]
    fn default_theme_accent_is_fixed() {
        let theme = Theme::default();
        assert_eq!(
            theme.resolve(ThemeMode::Light).accent,
            theme.resolve(ThemeMode::Dark).accent
        );
    }

    #[test]
    fn builder_overrides_single_slot() {
        let theme = Theme::builder()
            .accent(AdaptiveColor::fixed(Rgb::new(10, 20, 30)))
            .build();
        assert_eq!(theme.resolve(ThemeMode::Light).accent, Rgb::new(10, 20, 30));
        // Untouched slots keep the stock palette.
        assert_eq!(
            theme.resolve(ThemeMode::Light).notice,
            Theme::default().resolve(ThemeMode::Light).notice
        );
    }
}
