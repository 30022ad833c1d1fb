//! An interactive "magic" button.
//!
//! The button reconciles hover state, an asynchronous tap-triggered action
//! with a caller-controlled completion handle, a debounce guard that keeps a
//! second tap from re-entering the action, and identity-keyed runtime state.
//! Its visual state (colors, shape, size) is derived from that runtime state
//! on every render pass.
//!
//! # Example
//!
//! ```
//! use magic_button::prelude::*;
//!
//! let config = ButtonConfiguration::builder()
//!     .id("upload")
//!     .icon("arrow.up")
//!     .label("Upload")
//!     .action(ButtonAction::new(|done| {
//!         std::thread::spawn(move || {
//!             // ... upload ...
//!             done.complete();
//!         });
//!     }))
//!     .build();
//!
//! let mut button = MagicButton::new(config);
//! button.set_measured_container_size(120.0);
//! button.handle_tap();
//!
//! let render = button.render();
//! assert_eq!(render.key.to_string(), "upload");
//! assert_eq!(render.title.as_deref(), Some("Upload"));
//! ```

pub mod composition;
pub mod config;
pub mod identity;
pub mod machine;
pub mod state;
pub mod theme;

mod error;

pub use composition::{ButtonRender, MagicButton, TITLE_MIN_WIDTH};
pub use config::{ButtonAction, ButtonConfiguration, ButtonConfigurationBuilder, IconRef, Identity};
pub use error::{Error, Result};
pub use identity::{IdentityReconciler, Reconciliation};
pub use machine::{InteractionStateMachine, TapOutcome};
pub use state::{ResolvedIdentity, RuntimeState};
pub use theme::{ButtonDefaults, Theme};

pub use magic_button_core::{Binding, Completion, Property, Signal};

/// Styling types, re-exported.
pub mod style {
    pub use magic_button_style::*;
}

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::composition::{ButtonRender, MagicButton};
    pub use crate::config::{ButtonAction, ButtonConfiguration, IconRef, Identity};
    pub use crate::machine::TapOutcome;
    pub use crate::theme::{ButtonDefaults, Theme};

    pub use magic_button_core::{Binding, Completion};
    pub use magic_button_style::{
        ButtonShape, ButtonSize, Color, LoadingIndicatorStyle, ShapeVisibility, ViewRef,
        VisualStyle,
    };
}
