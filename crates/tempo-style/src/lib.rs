#![forbid(unsafe_code)]

//! Color and theme system for the tempo stopwatch widget.
//!
//! Provides [`Rgb`] colors, [`AdaptiveColor`] slots that resolve differently
//! in light and dark mode, and the widget's default [`Theme`]. The widget's
//! pure view resolves a theme into a flat [`Palette`] so host surfaces never
//! need to know about modes.

pub mod color;
pub mod theme;

pub use color::Rgb;
pub use theme::{AdaptiveColor, Palette, Theme, ThemeBuilder, ThemeMode};
