//! Size tokens and the metrics derived from them.
//!
//! Every fixed token maps to a square edge length, a font token and padding.
//! [`ButtonSize::Auto`] has no fixed edge: it is derived from the width the
//! host measured for the button's container, clamped between the
//! [`ButtonSize::Small`] and [`ButtonSize::Huge`] edges.

use serde::Deserialize;

use crate::error::{Error, Result};

/// Icon size of a custom-sized button, relative to its edge.
pub const CUSTOM_ICON_RATIO: f32 = 0.4;
/// Icon size of fixed and auto-sized buttons, relative to their edge.
const ICON_RATIO: f32 = 0.5;

/// Named font sizes, smallest to largest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FontToken {
    Caption2,
    Caption,
    Footnote,
    Body,
    Headline,
    Title3,
    Title2,
    Title,
}

impl FontToken {
    /// Point size of the token.
    pub fn point_size(self) -> f32 {
        match self {
            Self::Caption2 => 11.0,
            Self::Caption => 12.0,
            Self::Footnote => 13.0,
            Self::Body => 14.0,
            Self::Headline => 15.0,
            Self::Title3 => 18.0,
            Self::Title2 => 22.0,
            Self::Title => 28.0,
        }
    }

    /// The token that suits a button with the given edge length.
    fn for_edge(edge: f32) -> Self {
        match edge {
            e if e < 24.0 => Self::Caption2,
            e if e < 32.0 => Self::Caption,
            e if e < 40.0 => Self::Body,
            e if e < 52.0 => Self::Headline,
            e if e < 64.0 => Self::Title3,
            _ => Self::Title2,
        }
    }
}

/// Size token of a button.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ButtonSize {
    Mini,
    /// Derived from the measured container width.
    Auto,
    Small,
    #[default]
    Regular,
    Large,
    ExtraLarge,
    Huge,
    /// An explicit edge length.
    Custom(f32),
}

impl ButtonSize {
    /// Build a [`ButtonSize::Custom`], rejecting non-finite or non-positive edges.
    pub fn try_custom(edge: f32) -> Result<Self> {
        if edge.is_finite() && edge > 0.0 {
            Ok(Self::Custom(edge))
        } else {
            Err(Error::invalid_value(
                "size",
                format!("custom edge must be finite and positive, got {edge}"),
            ))
        }
    }

    /// Resolve the metrics for this token.
    pub fn metrics(self) -> SizeMetrics {
        let (edge_length, font, horizontal_padding, vertical_padding) = match self {
            Self::Mini => (Some(20.0), FontToken::Caption2, 4.0, 2.0),
            Self::Small => (Some(28.0), FontToken::Caption, 8.0, 4.0),
            Self::Regular => (Some(36.0), FontToken::Body, 12.0, 6.0),
            Self::Large => (Some(44.0), FontToken::Headline, 16.0, 8.0),
            Self::ExtraLarge => (Some(56.0), FontToken::Title3, 20.0, 10.0),
            Self::Huge => (Some(72.0), FontToken::Title2, 24.0, 12.0),
            Self::Auto => (None, FontToken::Body, 16.0, 8.0),
            Self::Custom(n) => (Some(n), FontToken::for_edge(n), n * 0.2, n * 0.1),
        };

        SizeMetrics {
            size: self,
            edge_length,
            font,
            horizontal_padding,
            vertical_padding,
        }
    }

    /// The edge length actually used for layout.
    ///
    /// Fixed tokens ignore `measured_container_size`.
    pub fn effective_edge_length(self, measured_container_size: f32) -> f32 {
        self.metrics().effective_edge_length(measured_container_size)
    }
}

/// Metrics derived from a [`ButtonSize`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeMetrics {
    /// The token these metrics were derived from.
    pub size: ButtonSize,
    /// Fixed edge length, `None` for [`ButtonSize::Auto`].
    pub edge_length: Option<f32>,
    /// Label font.
    pub font: FontToken,
    /// Padding on the leading and trailing sides.
    pub horizontal_padding: f32,
    /// Padding above and below the content.
    pub vertical_padding: f32,
}

impl SizeMetrics {
    /// Icon size for a container with the given edge length.
    pub fn icon_pixel_size(&self, container_edge: f32) -> f32 {
        match self.size {
            ButtonSize::Custom(n) => CUSTOM_ICON_RATIO * n,
            ButtonSize::Auto => ICON_RATIO * container_edge,
            _ => ICON_RATIO * self.edge_length.unwrap_or(container_edge),
        }
    }

    /// Edge length of an auto-sized button inside a measured container.
    ///
    /// `clamp(measured - 2 * horizontal_padding, small.edge, huge.edge)`.
    pub fn auto_edge_length(&self, measured_container_size: f32) -> f32 {
        let floor = ButtonSize::Small.metrics().edge_length.unwrap_or(28.0);
        let ceiling = ButtonSize::Huge.metrics().edge_length.unwrap_or(72.0);
        let available = measured_container_size - 2.0 * self.horizontal_padding;
        if available.is_nan() {
            return floor;
        }
        available.clamp(floor, ceiling)
    }

    /// Fixed edge length, or the auto edge derived from the measured size.
    pub fn effective_edge_length(&self, measured_container_size: f32) -> f32 {
        self.edge_length
            .unwrap_or_else(|| self.auto_edge_length(measured_container_size))
    }
}
