//! RGBA colors.
//!
//! Colors use straight (non-premultiplied) alpha in the 0.0-1.0 range. In
//! theme files they are written as `#RRGGBB` or `#RRGGBBAA` strings.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// An RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    /// Create a new color from RGBA components.
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color from RGB components.
    #[inline]
    pub const fn from_rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Create a color from 8-bit RGBA components.
    #[inline]
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::new(
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a as f32 / 255.0,
        )
    }

    /// Create an opaque color from 8-bit RGB components.
    #[inline]
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgba8(r, g, b, 255)
    }

    /// Create a color from a hex string (e.g., "#FF0000" or "#FF0000FF").
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.trim_start_matches('#');
        let len = digits.len();

        if (len != 6 && len != 8) || !digits.is_ascii() {
            return None;
        }

        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
        let a = if len == 8 { channel(6)? } else { 255 };

        Some(Self::from_rgba8(channel(0)?, channel(2)?, channel(4)?, a))
    }

    /// Format as `#RRGGBB`, or `#RRGGBBAA` when not fully opaque.
    pub fn to_hex(self) -> String {
        let [r, g, b, a] = self.to_rgba8();
        if a == 255 {
            format!("#{r:02X}{g:02X}{b:02X}")
        } else {
            format!("#{r:02X}{g:02X}{b:02X}{a:02X}")
        }
    }

    /// Convert to 8-bit RGBA components.
    pub fn to_rgba8(self) -> [u8; 4] {
        let q = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b), q(self.a)]
    }

    /// Return a new color with modified alpha.
    #[inline]
    pub fn with_alpha(self, alpha: f32) -> Self {
        Self { a: alpha, ..self }
    }

    /// Linear interpolation between two colors.
    #[inline]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        Self {
            r: self.r + (other.r - self.r) * t,
            g: self.g + (other.g - self.g) * t,
            b: self.b + (other.b - self.b) * t,
            a: self.a + (other.a - self.a) * t,
        }
    }

    /// Darken by a factor (0.0 = no change, 1.0 = black).
    pub fn darken(self, factor: f32) -> Self {
        let factor = 1.0 - factor.clamp(0.0, 1.0);
        Self::new(self.r * factor, self.g * factor, self.b * factor, self.a)
    }

    /// Lighten by a factor (0.0 = no change, 1.0 = white).
    pub fn lighten(self, factor: f32) -> Self {
        let factor = factor.clamp(0.0, 1.0);
        Self::new(
            self.r + (1.0 - self.r) * factor,
            self.g + (1.0 - self.g) * factor,
            self.b + (1.0 - self.b) * factor,
            self.a,
        )
    }

    /// Relative luminance (Rec. 709 weights, no gamma correction).
    pub fn luminance(self) -> f32 {
        0.2126 * self.r + 0.7152 * self.g + 0.0722 * self.b
    }

    /// Black or white, whichever reads better on top of this color.
    pub fn contrasting(self) -> Self {
        if self.luminance() > 0.6 {
            Self::BLACK
        } else {
            Self::WHITE
        }
    }

    /// Whether the color is fully transparent.
    pub fn is_transparent(self) -> bool {
        self.a == 0.0
    }

    pub const TRANSPARENT: Self = Self::new(0.0, 0.0, 0.0, 0.0);
    pub const BLACK: Self = Self::from_rgb(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::from_rgb(1.0, 1.0, 1.0);
    pub const GRAY: Self = Self::from_rgb(0.5, 0.5, 0.5);
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s.trim()).ok_or_else(|| Error::InvalidColor {
            value: s.to_string(),
        })
    }
}

impl TryFrom<String> for Color {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_from_hex() {
        let c = Color::from_hex("#FF0000").unwrap();
        assert_eq!(c, Color::from_rgb(1.0, 0.0, 0.0));

        let c2 = Color::from_hex("00FF0080").unwrap();
        assert_eq!(c2.g, 1.0);
        assert!((c2.a - 0.5).abs() < 0.01);

        assert!(Color::from_hex("#FFF").is_none());
        assert!(Color::from_hex("#GG0000").is_none());
    }

    #[test]
    fn test_parse_reports_value() {
        let err = "blue".parse::<Color>().unwrap_err();
        assert!(err.to_string().contains("blue"));
    }

    #[test]
    fn test_hex_formatting() {
        assert_eq!(Color::from_rgb8(0, 122, 255).to_hex(), "#007AFF");
        assert_eq!(Color::from_rgba8(0, 0, 0, 128).to_hex(), "#00000080");
        assert_eq!(Color::WHITE.to_string(), "#FFFFFF");
    }

    #[test]
    fn test_darken_lighten() {
        let gray = Color::GRAY;
        assert_eq!(gray.darken(1.0), Color::BLACK);
        assert_eq!(gray.lighten(1.0), Color::WHITE);
        assert_eq!(gray.darken(0.0), gray);
        assert!(gray.lighten(0.1).r > gray.r);
    }

    #[test]
    fn test_color_lerp() {
        let mid = Color::BLACK.lerp(Color::WHITE, 0.5);
        assert!((mid.r - 0.5).abs() < 0.001);
    }

    #[test]
    fn test_contrasting() {
        assert_eq!(Color::WHITE.contrasting(), Color::BLACK);
        assert_eq!(Color::BLACK.contrasting(), Color::WHITE);
    }
}
