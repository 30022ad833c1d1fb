//! Styling for magic-button.
//!
//! This crate holds the pure functions the interactive button is drawn from:
//!
//! - **Colors and palettes**: [`Color`], [`ButtonPalette`] presets and TOML overrides
//! - **Style resolution**: [`StyleResolver`] maps a [`VisualStyle`] and interaction
//!   state to foreground, background and shadow
//! - **Size metrics**: [`ButtonSize`] tokens and the [`SizeMetrics`] derived from them
//! - **Shapes**: [`ButtonShape`] descriptors and the [`ShapeRenderer`] that outlines them
//!
//! # Example
//!
//! ```
//! use magic_button_style::prelude::*;
//!
//! let resolver = StyleResolver::new(ButtonPalette::dark());
//! let colors = resolver.resolve(&VisualStyle::Danger, true, false);
//! assert!(colors.shadow.is_some());
//!
//! let edge = ButtonSize::Auto.effective_edge_length(20.0);
//! assert_eq!(edge, 28.0);
//! ```

pub mod color;
pub mod geometry;
pub mod indicator;
pub mod metrics;
pub mod palette;
pub mod path;
pub mod resolver;
pub mod shape;
pub mod view;

mod error;

pub use color::Color;
pub use error::{Error, Result};
pub use geometry::{CornerRadii, Point, Rect, Size};
pub use indicator::LoadingIndicatorStyle;
pub use metrics::{ButtonSize, FontToken, SizeMetrics};
pub use palette::{ButtonPalette, PalettePreset, PaletteTable, ToneColors};
pub use path::{Path, PathCommand};
pub use resolver::{Shadow, StyleColors, StyleResolver, VisualStyle};
pub use shape::{ButtonShape, OutlineRenderer, ShapeRenderer, ShapeVisibility};
pub use view::ViewRef;

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::color::Color;
    pub use crate::geometry::{CornerRadii, Rect, Size};
    pub use crate::indicator::LoadingIndicatorStyle;
    pub use crate::metrics::{ButtonSize, SizeMetrics};
    pub use crate::palette::ButtonPalette;
    pub use crate::resolver::{StyleColors, StyleResolver, VisualStyle};
    pub use crate::shape::{ButtonShape, OutlineRenderer, ShapeRenderer, ShapeVisibility};
    pub use crate::view::ViewRef;
}
