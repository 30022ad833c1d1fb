//! Color tables for button styles.
//!
//! A [`ButtonPalette`] holds, for every named visual style, the resting and
//! hovering foreground/background pair, plus the muted pair used for
//! disabled or busy buttons. Palettes come from a built-in preset or from a
//! TOML table that overrides parts of a preset:
//!
//! ```toml
//! base = "dark"
//! shadow = "#00000066"
//!
//! [primary]
//! background = "#5E5CE6"
//! background_hover = "#7D7AFF"
//! foreground = "#FFFFFF"
//! foreground_hover = "#FFFFFF"
//! ```

use std::path::Path;

use magic_button_core::logging::targets;
use serde::Deserialize;

use crate::color::Color;
use crate::error::{Error, Result};

/// Build an opaque color from a `0xRRGGBB` literal.
fn rgb(value: u32) -> Color {
    Color::from_rgb8((value >> 16) as u8, (value >> 8) as u8, value as u8)
}

/// Resting and hovering colors of one visual style.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ToneColors {
    pub background: Color,
    pub background_hover: Color,
    pub foreground: Color,
    pub foreground_hover: Color,
}

impl ToneColors {
    /// A tone whose hover state lightens the background.
    pub fn filled(background: Color, foreground: Color) -> Self {
        Self {
            background,
            background_hover: background.lighten(0.12),
            foreground,
            foreground_hover: foreground,
        }
    }

    /// Background for the given hover state.
    pub fn background(&self, hovering: bool) -> Color {
        if hovering {
            self.background_hover
        } else {
            self.background
        }
    }

    /// Foreground for the given hover state.
    pub fn foreground(&self, hovering: bool) -> Color {
        if hovering {
            self.foreground_hover
        } else {
            self.foreground
        }
    }
}

/// The color table consumed by the style resolver.
#[derive(Debug, Clone, PartialEq)]
pub struct ButtonPalette {
    pub primary: ToneColors,
    pub secondary: ToneColors,
    pub success: ToneColors,
    pub warning: ToneColors,
    pub danger: ToneColors,
    pub info: ToneColors,
    pub neutral: ToneColors,
    /// Foreground of disabled or busy buttons.
    pub muted_foreground: Color,
    /// Background of disabled or busy buttons.
    pub muted_background: Color,
    /// Foreground reported for buttons drawing a custom background view.
    pub custom_view_foreground: Color,
    /// Color of the hover shadow.
    pub shadow: Color,
}

impl ButtonPalette {
    /// Create a light palette.
    pub fn light() -> Self {
        Self {
            primary: ToneColors::filled(rgb(0x007AFF), Color::WHITE),
            secondary: ToneColors::filled(rgb(0x6C757D), Color::WHITE),
            success: ToneColors::filled(rgb(0x28A745), Color::WHITE),
            warning: ToneColors::filled(rgb(0xFFC107), rgb(0x212529)),
            danger: ToneColors::filled(rgb(0xDC3545), Color::WHITE),
            info: ToneColors::filled(rgb(0x17A2B8), Color::WHITE),
            neutral: ToneColors {
                background: rgb(0xF1F3F5),
                background_hover: rgb(0xE2E6EA),
                foreground: rgb(0x212529),
                foreground_hover: rgb(0x000000),
            },
            muted_foreground: rgb(0xADB5BD),
            muted_background: rgb(0xE9ECEF),
            custom_view_foreground: rgb(0x212529),
            shadow: Color::BLACK.with_alpha(0.25),
        }
    }

    /// Create a dark palette.
    pub fn dark() -> Self {
        Self {
            primary: ToneColors::filled(rgb(0x0A84FF), Color::WHITE),
            secondary: ToneColors::filled(rgb(0x8E8E93), Color::WHITE),
            success: ToneColors::filled(rgb(0x32D74B), rgb(0x1C1C1E)),
            warning: ToneColors::filled(rgb(0xFFD60A), rgb(0x1C1C1E)),
            danger: ToneColors::filled(rgb(0xFF453A), Color::WHITE),
            info: ToneColors::filled(rgb(0x64D2FF), rgb(0x1C1C1E)),
            neutral: ToneColors {
                background: rgb(0x2C2C2E),
                background_hover: rgb(0x3A3A3C),
                foreground: rgb(0xFFFFFF),
                foreground_hover: rgb(0xFFFFFF),
            },
            muted_foreground: rgb(0x636366),
            muted_background: rgb(0x3A3A3C),
            custom_view_foreground: rgb(0xFFFFFF),
            shadow: Color::BLACK.with_alpha(0.5),
        }
    }

    /// Create a high-contrast palette.
    pub fn high_contrast() -> Self {
        Self {
            primary: ToneColors::filled(rgb(0x0000FF), Color::WHITE),
            secondary: ToneColors::filled(rgb(0x000000), Color::WHITE),
            success: ToneColors::filled(rgb(0x006600), Color::WHITE),
            warning: ToneColors::filled(rgb(0xCC6600), Color::WHITE),
            danger: ToneColors::filled(rgb(0xCC0000), Color::WHITE),
            info: ToneColors::filled(rgb(0x000099), Color::WHITE),
            neutral: ToneColors {
                background: Color::WHITE,
                background_hover: rgb(0xF0F0F0),
                foreground: Color::BLACK,
                foreground_hover: Color::BLACK,
            },
            muted_foreground: rgb(0x666666),
            muted_background: rgb(0xCCCCCC),
            custom_view_foreground: Color::BLACK,
            shadow: Color::BLACK,
        }
    }

    /// Create a palette from a built-in preset.
    pub fn preset(preset: PalettePreset) -> Self {
        match preset {
            PalettePreset::Light => Self::light(),
            PalettePreset::Dark => Self::dark(),
            PalettePreset::HighContrast => Self::high_contrast(),
        }
    }

    /// Parse a palette from a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let table: PaletteTable = toml::from_str(source)?;
        Ok(table.resolve())
    }

    /// Load a palette from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let palette = Self::from_toml_str(&source)?;
        tracing::debug!(target: targets::PALETTE, path = %path.display(), "loaded palette");
        Ok(palette)
    }
}

impl Default for ButtonPalette {
    fn default() -> Self {
        Self::light()
    }
}

/// Built-in palettes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PalettePreset {
    #[default]
    Light,
    Dark,
    HighContrast,
}

/// A palette description as written in a theme file: a preset plus
/// optional overrides.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PaletteTable {
    pub base: PalettePreset,
    pub primary: Option<ToneColors>,
    pub secondary: Option<ToneColors>,
    pub success: Option<ToneColors>,
    pub warning: Option<ToneColors>,
    pub danger: Option<ToneColors>,
    pub info: Option<ToneColors>,
    pub neutral: Option<ToneColors>,
    pub muted_foreground: Option<Color>,
    pub muted_background: Option<Color>,
    pub custom_view_foreground: Option<Color>,
    pub shadow: Option<Color>,
}

impl PaletteTable {
    /// Apply the overrides on top of the base preset.
    pub fn resolve(&self) -> ButtonPalette {
        let base = ButtonPalette::preset(self.base);
        ButtonPalette {
            primary: self.primary.unwrap_or(base.primary),
            secondary: self.secondary.unwrap_or(base.secondary),
            success: self.success.unwrap_or(base.success),
            warning: self.warning.unwrap_or(base.warning),
            danger: self.danger.unwrap_or(base.danger),
            info: self.info.unwrap_or(base.info),
            neutral: self.neutral.unwrap_or(base.neutral),
            muted_foreground: self.muted_foreground.unwrap_or(base.muted_foreground),
            muted_background: self.muted_background.unwrap_or(base.muted_background),
            custom_view_foreground: self
                .custom_view_foreground
                .unwrap_or(base.custom_view_foreground),
            shadow: self.shadow.unwrap_or(base.shadow),
        }
    }
}
