//! Mapping from visual style and interaction state to colors.

use serde::Deserialize;

use crate::color::Color;
use crate::palette::{ButtonPalette, ToneColors};
use crate::view::ViewRef;

/// Lightening applied to a custom color while hovering.
const CUSTOM_HOVER_LIGHTEN: f32 = 0.1;
/// Blur radius of the hover shadow.
const SHADOW_RADIUS: f32 = 6.0;
/// Vertical offset of the hover shadow.
const SHADOW_OFFSET_Y: f32 = 2.0;

/// The visual style of a button.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VisualStyle {
    #[default]
    Primary,
    Secondary,
    Success,
    Warning,
    Danger,
    Info,
    Neutral,
    /// A single color used in place of a palette tone.
    CustomColor(Color),
    /// A host view drawn as the background.
    #[serde(skip)]
    CustomView(ViewRef),
}

impl VisualStyle {
    /// The host view drawn behind the button, if any.
    pub fn custom_view(&self) -> Option<&ViewRef> {
        match self {
            Self::CustomView(view) => Some(view),
            _ => None,
        }
    }
}

/// A drop shadow.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shadow {
    pub color: Color,
    pub radius: f32,
    pub offset_y: f32,
}

/// The resolved color triple of a button.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StyleColors {
    pub foreground: Color,
    pub background: Color,
    /// `None` when no shadow is drawn.
    pub shadow: Option<Shadow>,
}

/// Resolves [`StyleColors`] from a [`ButtonPalette`].
///
/// Resolution is a pure function of the palette and its inputs.
#[derive(Debug, Clone, Default)]
pub struct StyleResolver {
    palette: ButtonPalette,
}

impl StyleResolver {
    /// Create a resolver over a palette.
    pub fn new(palette: ButtonPalette) -> Self {
        Self { palette }
    }

    /// The palette colors are resolved from.
    pub fn palette(&self) -> &ButtonPalette {
        &self.palette
    }

    /// Resolve colors for a style.
    ///
    /// `muted` is set for disabled buttons and for buttons held by the
    /// debounce guard; it wins over the style and over hovering.
    pub fn resolve(&self, style: &VisualStyle, hovering: bool, muted: bool) -> StyleColors {
        let palette = &self.palette;
        if muted {
            return StyleColors {
                foreground: palette.muted_foreground,
                background: palette.muted_background,
                shadow: None,
            };
        }

        let shadow = hovering.then(|| Shadow {
            color: palette.shadow,
            radius: SHADOW_RADIUS,
            offset_y: SHADOW_OFFSET_Y,
        });

        let (foreground, background) = match style {
            VisualStyle::Primary => tone_pair(&palette.primary, hovering),
            VisualStyle::Secondary => tone_pair(&palette.secondary, hovering),
            VisualStyle::Success => tone_pair(&palette.success, hovering),
            VisualStyle::Warning => tone_pair(&palette.warning, hovering),
            VisualStyle::Danger => tone_pair(&palette.danger, hovering),
            VisualStyle::Info => tone_pair(&palette.info, hovering),
            VisualStyle::Neutral => tone_pair(&palette.neutral, hovering),
            VisualStyle::CustomColor(color) => {
                let background = if hovering {
                    color.lighten(CUSTOM_HOVER_LIGHTEN)
                } else {
                    *color
                };
                (background.contrasting(), background)
            }
            VisualStyle::CustomView(_) => (palette.custom_view_foreground, Color::TRANSPARENT),
        };

        StyleColors {
            foreground,
            background,
            shadow,
        }
    }
}

fn tone_pair(tone: &ToneColors, hovering: bool) -> (Color, Color) {
    (tone.foreground(hovering), tone.background(hovering))
}
