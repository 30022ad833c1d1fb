//! Theme files.
//!
//! A theme pairs a [`ButtonPalette`] with the [`ButtonDefaults`] new
//! configurations start from. Both tables are optional:
//!
//! ```toml
//! [palette]
//! base = "dark"
//! muted_background = "#2C2C2E"
//!
//! [defaults]
//! style = "neutral"
//! size = "large"
//! shape = "capsule"
//! shape_visibility = "on-hover"
//! debounce_guard = true
//! loading_indicator = "dots"
//! ```

use std::path::Path;

use magic_button_core::logging::targets;
use magic_button_style::{
    ButtonPalette, ButtonShape, ButtonSize, LoadingIndicatorStyle, PaletteTable, ShapeVisibility,
    StyleResolver, VisualStyle,
};
use serde::Deserialize;

use crate::error::{Error, Result};

/// Values a new [`ButtonConfiguration`](crate::ButtonConfiguration) starts from.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ButtonDefaults {
    pub style: VisualStyle,
    pub size: ButtonSize,
    pub shape: ButtonShape,
    pub shape_visibility: ShapeVisibility,
    pub debounce_guard: bool,
    pub loading_indicator: LoadingIndicatorStyle,
}

impl Default for ButtonDefaults {
    fn default() -> Self {
        Self {
            style: VisualStyle::default(),
            size: ButtonSize::default(),
            shape: ButtonShape::default(),
            shape_visibility: ShapeVisibility::default(),
            debounce_guard: true,
            loading_indicator: LoadingIndicatorStyle::default(),
        }
    }
}

impl ButtonDefaults {
    /// Reject custom sizes and radii that the typed constructors would refuse.
    pub fn validate(&self) -> Result<()> {
        if let ButtonSize::Custom(edge) = self.size {
            ButtonSize::try_custom(edge)?;
        }
        match self.shape {
            ButtonShape::CustomRoundedRectangle {
                top_left,
                top_right,
                bottom_right,
                bottom_left,
            } => {
                ButtonShape::try_custom_rounded_rectangle(
                    top_left,
                    top_right,
                    bottom_right,
                    bottom_left,
                )?;
            }
            ButtonShape::CustomCapsule { leading, trailing } => {
                ButtonShape::try_custom_capsule(leading, trailing)?;
            }
            _ => {}
        }
        Ok(())
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ThemeFile {
    palette: PaletteTable,
    defaults: ButtonDefaults,
}

/// A palette plus configuration defaults.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Theme {
    pub palette: ButtonPalette,
    pub defaults: ButtonDefaults,
}

impl Theme {
    /// The light palette with built-in defaults.
    pub fn light() -> Self {
        Self::default()
    }

    /// The dark palette with built-in defaults.
    pub fn dark() -> Self {
        Self {
            palette: ButtonPalette::dark(),
            defaults: ButtonDefaults::default(),
        }
    }

    /// Parse a theme from a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let file: ThemeFile = toml::from_str(source)?;
        file.defaults.validate()?;
        Ok(Self {
            palette: file.palette.resolve(),
            defaults: file.defaults,
        })
    }

    /// Load a theme from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let theme = Self::from_toml_str(&source)?;
        tracing::debug!(target: targets::PALETTE, path = %path.display(), "loaded theme");
        Ok(theme)
    }

    /// A style resolver over this theme's palette.
    pub fn resolver(&self) -> StyleResolver {
        StyleResolver::new(self.palette.clone())
    }
}
