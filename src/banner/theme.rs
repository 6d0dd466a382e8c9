// SPDX-License-Identifier: MPL-2.0
//! Banner themes.
//!
//! A [`Theme`] is built once and shared behind an `Arc` by every banner that
//! uses it. Customizing consumes the theme and hands back a new one, so a
//! banner already on screen keeps the look it was created with.

use super::Severity;
use crate::ui::design_tokens::palette;
use iced::font::Weight;
use iced::{Color, Font};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Font family, size and weight for one text role.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontSpec {
    pub family: &'static str,
    pub size: f32,
    pub bold: bool,
}

impl FontSpec {
    #[must_use]
    pub const fn new(family: &'static str, size: f32) -> Self {
        Self {
            family,
            size,
            bold: false,
        }
    }

    #[must_use]
    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Returns the matching `iced` font.
    #[must_use]
    pub fn to_font(&self) -> Font {
        let weight = if self.bold {
            Weight::Bold
        } else {
            Weight::Normal
        };
        Font {
            weight,
            ..Font::with_name(self.family)
        }
    }
}

/// Colors and glyph for one severity.
#[derive(Debug, Clone, PartialEq)]
pub struct SeverityStyle {
    pub background: Color,
    pub text: Color,
    pub icon: String,
}

impl SeverityStyle {
    pub fn new(background: Color, text: Color, icon: impl Into<String>) -> Self {
        Self {
            background,
            text,
            icon: icon.into(),
        }
    }
}

/// Visual parameters shared by every banner created with this theme.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub message_font: FontSpec,
    pub icon_font: FontSpec,
    pub banner_height: i32,
    pub top_margin: i32,
    pub corner_radius: f32,
    pub icon_size: i32,
    pub show_close_button: bool,
    pub enable_shadow: bool,
    error: SeverityStyle,
    warning: SeverityStyle,
    success: SeverityStyle,
    info: SeverityStyle,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            message_font: FontSpec::new("Segoe UI", 10.0),
            icon_font: FontSpec::new("Segoe UI Symbol", 16.0).bold(),
            banner_height: 60,
            top_margin: 20,
            corner_radius: 8.0,
            icon_size: 20,
            show_close_button: true,
            enable_shadow: false,
            error: SeverityStyle::new(palette::ERROR_500, palette::WHITE, "✖"),
            warning: SeverityStyle::new(palette::WARNING_500, palette::BLACK, "⚠"),
            success: SeverityStyle::new(palette::SUCCESS_500, palette::WHITE, "✓"),
            info: SeverityStyle::new(palette::INFO_500, palette::WHITE, "ℹ"),
        }
    }
}

impl Theme {
    /// Slimmer banner with a drop shadow and no close glyph.
    #[must_use]
    pub fn dark() -> Self {
        Self {
            banner_height: 55,
            corner_radius: 6.0,
            show_close_button: false,
            enable_shadow: true,
            ..Self::default()
        }
    }

    /// Compact banner without decorations.
    #[must_use]
    pub fn minimal() -> Self {
        Self {
            message_font: FontSpec::new("Segoe UI", 9.0),
            banner_height: 40,
            corner_radius: 4.0,
            show_close_button: false,
            enable_shadow: false,
            ..Self::default()
        }
    }

    /// Returns this theme with the style of `severity` replaced.
    #[must_use]
    pub fn with_style(
        mut self,
        severity: Severity,
        background: Color,
        text: Color,
        icon: impl Into<String>,
    ) -> Self {
        *self.style_mut(severity) = SeverityStyle::new(background, text, icon);
        self
    }

    #[must_use]
    pub fn style_for(&self, severity: Severity) -> &SeverityStyle {
        match severity {
            Severity::Error => &self.error,
            Severity::Warning => &self.warning,
            Severity::Success => &self.success,
            Severity::Info => &self.info,
        }
    }

    fn style_mut(&mut self, severity: Severity) -> &mut SeverityStyle {
        match severity {
            Severity::Error => &mut self.error,
            Severity::Warning => &mut self.warning,
            Severity::Success => &mut self.success,
            Severity::Info => &mut self.info,
        }
    }
}

/// Named theme selectable from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreset {
    #[default]
    #[serde(rename = "default")]
    Standard,
    Dark,
    Minimal,
    /// Follows the desktop: `Dark` on dark desktops, `Standard` otherwise.
    System,
}

impl ThemePreset {
    #[must_use]
    pub fn build(self) -> Theme {
        match self {
            ThemePreset::Standard => Theme::default(),
            ThemePreset::Dark => Theme::dark(),
            ThemePreset::Minimal => Theme::minimal(),
            ThemePreset::System => {
                if desktop_prefers_dark() {
                    Theme::dark()
                } else {
                    Theme::default()
                }
            }
        }
    }
}

/// Whether the desktop asks for dark styling. Only an explicit light mode
/// counts as light.
#[must_use]
pub fn desktop_prefers_dark() -> bool {
    prefers_dark(dark_light::detect())
}

fn prefers_dark<E>(detected: Result<dark_light::Mode, E>) -> bool {
    !matches!(detected, Ok(dark_light::Mode::Light))
}

impl FromStr for ThemePreset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "default" | "standard" => Ok(ThemePreset::Standard),
            "dark" => Ok(ThemePreset::Dark),
            "minimal" => Ok(ThemePreset::Minimal),
            "system" => Ok(ThemePreset::System),
            other => Err(format!("unknown theme preset: {other}")),
        }
    }
}
