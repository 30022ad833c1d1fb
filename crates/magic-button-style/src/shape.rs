//! Button container shapes.
//!
//! [`ButtonShape`] describes the container outline; a [`ShapeRenderer`]
//! turns a shape plus resolved bounds into an outline [`Path`]. The default
//! [`OutlineRenderer`] expresses every shape as a rounded rectangle.

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::geometry::{CornerRadii, Rect, Size};
use crate::path::Path;

/// Corner radius of [`ButtonShape::RoundedRectangle`], relative to the short side.
const ROUNDED_RECTANGLE_RATIO: f32 = 0.2;
/// Corner radius of [`ButtonShape::RoundedSquare`], relative to the edge.
const ROUNDED_SQUARE_RATIO: f32 = 0.22;

/// The container shape of a button.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ButtonShape {
    Circle,
    Capsule,
    Rectangle,
    #[default]
    RoundedRectangle,
    RoundedSquare,
    /// Explicit per-corner radii.
    CustomRoundedRectangle {
        top_left: f32,
        top_right: f32,
        bottom_right: f32,
        bottom_left: f32,
    },
    /// A capsule whose leading and trailing ends have their own radius.
    CustomCapsule { leading: f32, trailing: f32 },
}

impl ButtonShape {
    /// Build a [`ButtonShape::CustomRoundedRectangle`], rejecting negative or
    /// non-finite radii.
    pub fn try_custom_rounded_rectangle(
        top_left: f32,
        top_right: f32,
        bottom_right: f32,
        bottom_left: f32,
    ) -> Result<Self> {
        for (name, radius) in [
            ("top_left", top_left),
            ("top_right", top_right),
            ("bottom_right", bottom_right),
            ("bottom_left", bottom_left),
        ] {
            validate_radius(name, radius)?;
        }
        Ok(Self::CustomRoundedRectangle {
            top_left,
            top_right,
            bottom_right,
            bottom_left,
        })
    }

    /// Build a [`ButtonShape::CustomCapsule`], rejecting negative or
    /// non-finite radii.
    pub fn try_custom_capsule(leading: f32, trailing: f32) -> Result<Self> {
        validate_radius("leading", leading)?;
        validate_radius("trailing", trailing)?;
        Ok(Self::CustomCapsule { leading, trailing })
    }

    /// Whether the shape forces equal width and height.
    pub fn is_square(&self) -> bool {
        matches!(self, Self::Circle | Self::RoundedSquare)
    }

    /// Corner radii for this shape inside bounds of the given size.
    ///
    /// Radii never exceed half of the short side.
    pub fn corner_radii(&self, size: Size) -> CornerRadii {
        let half = size.min_side() / 2.0;
        let radii = match *self {
            Self::Circle | Self::Capsule => CornerRadii::uniform(half),
            Self::Rectangle => CornerRadii::ZERO,
            Self::RoundedRectangle => {
                CornerRadii::uniform(size.min_side() * ROUNDED_RECTANGLE_RATIO)
            }
            Self::RoundedSquare => CornerRadii::uniform(size.min_side() * ROUNDED_SQUARE_RATIO),
            Self::CustomRoundedRectangle {
                top_left,
                top_right,
                bottom_right,
                bottom_left,
            } => CornerRadii {
                top_left,
                top_right,
                bottom_right,
                bottom_left,
            },
            Self::CustomCapsule { leading, trailing } => CornerRadii {
                top_left: leading,
                bottom_left: leading,
                top_right: trailing,
                bottom_right: trailing,
            },
        };
        radii.clamped(half)
    }
}

fn validate_radius(name: &str, radius: f32) -> Result<()> {
    if radius.is_finite() && radius >= 0.0 {
        Ok(())
    } else {
        Err(Error::invalid_value(
            name,
            format!("corner radius must be finite and non-negative, got {radius}"),
        ))
    }
}

/// When the container shape is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ShapeVisibility {
    /// Draw the container unconditionally.
    #[default]
    Always,
    /// Draw the container only while the pointer hovers the button.
    OnHover,
}

impl ShapeVisibility {
    /// Whether the container is drawn for the given hover state.
    pub fn is_visible(self, hovering: bool) -> bool {
        match self {
            Self::Always => true,
            Self::OnHover => hovering,
        }
    }
}

/// Turns a shape and its resolved bounds into an outline.
pub trait ShapeRenderer: Send + Sync {
    /// Produce the outline of `shape` filling `bounds`.
    fn outline(&self, shape: &ButtonShape, bounds: Rect) -> Path;
}

/// Default renderer expressing every shape as a rounded rectangle.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutlineRenderer;

impl ShapeRenderer for OutlineRenderer {
    fn outline(&self, shape: &ButtonShape, bounds: Rect) -> Path {
        Path::rounded_rect(bounds, shape.corner_radii(bounds.size))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circle_radii_are_half_edge() {
        let radii = ButtonShape::Circle.corner_radii(Size::square(36.0));
        assert_eq!(radii, CornerRadii::uniform(18.0));
    }

    #[test]
    fn test_capsule_uses_short_side() {
        let radii = ButtonShape::Capsule.corner_radii(Size::new(120.0, 30.0));
        assert_eq!(radii, CornerRadii::uniform(15.0));
    }

    #[test]
    fn test_rectangle_is_sharp() {
        assert!(ButtonShape::Rectangle
            .corner_radii(Size::square(40.0))
            .is_zero());
    }

    #[test]
    fn test_custom_radii_are_clamped() {
        let shape = ButtonShape::try_custom_rounded_rectangle(50.0, 0.0, 4.0, 4.0).unwrap();
        let radii = shape.corner_radii(Size::square(20.0));
        assert_eq!(radii.top_left, 10.0);
        assert_eq!(radii.top_right, 0.0);
    }

    #[test]
    fn test_custom_capsule_sides() {
        let shape = ButtonShape::try_custom_capsule(12.0, 2.0).unwrap();
        let radii = shape.corner_radii(Size::new(80.0, 30.0));
        assert_eq!(radii.top_left, 12.0);
        assert_eq!(radii.bottom_left, 12.0);
        assert_eq!(radii.top_right, 2.0);
    }

    #[test]
    fn test_invalid_radius_rejected() {
        assert!(ButtonShape::try_custom_capsule(-1.0, 2.0).is_err());
        assert!(ButtonShape::try_custom_rounded_rectangle(f32::NAN, 0.0, 0.0, 0.0).is_err());
    }

    #[test]
    fn test_shape_visibility() {
        assert!(ShapeVisibility::Always.is_visible(false));
        assert!(!ShapeVisibility::OnHover.is_visible(false));
        assert!(ShapeVisibility::OnHover.is_visible(true));
    }

    #[test]
    fn test_outline_renderer() {
        let path = OutlineRenderer.outline(&ButtonShape::Circle, Rect::from_size(Size::square(20.0)));
        assert_eq!(path.curve_count(), 4);

        let sharp =
            OutlineRenderer.outline(&ButtonShape::Rectangle, Rect::from_size(Size::square(20.0)));
        assert_eq!(sharp.curve_count(), 0);
    }
}
