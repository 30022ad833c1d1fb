//! Button configuration.
//!
//! A [`ButtonConfiguration`] is an immutable description of one button. It is
//! assembled with a by-value builder; deriving a variant of an existing
//! configuration goes through [`ButtonConfiguration::to_builder`], which
//! copies every field the caller does not touch.
//!
//! ```
//! use magic_button::prelude::*;
//!
//! let save = ButtonConfiguration::builder()
//!     .id("save")
//!     .icon("square.and.arrow.down")
//!     .label("Save")
//!     .style(VisualStyle::Success)
//!     .action(ButtonAction::simple(|| println!("saved")))
//!     .build();
//!
//! let busy = save.to_builder().disabled("Saving is paused").build();
//! assert!(!save.is_disabled());
//! assert!(busy.is_disabled());
//! ```

use std::fmt;
use std::sync::Arc;

use magic_button_core::{Binding, Completion};
use magic_button_style::{
    ButtonShape, ButtonSize, Color, LoadingIndicatorStyle, ShapeVisibility, ViewRef, VisualStyle,
};

use crate::theme::ButtonDefaults;

/// A symbolic icon name resolved by the host.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IconRef {
    name: String,
}

impl IconRef {
    /// Icon substituted when a button has neither icon nor label.
    pub const FALLBACK_NAME: &'static str = "sparkles";

    /// Reference an icon by name.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// The substitute icon.
    pub fn fallback() -> Self {
        Self::new(Self::FALLBACK_NAME)
    }

    /// The icon name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for IconRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl From<&str> for IconRef {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for IconRef {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

type ActionFn = dyn Fn(Completion) + Send + Sync;

/// The callback invoked when a button activates.
///
/// The callback receives a [`Completion`]. While the debounce guard is on,
/// the button stays in its loading state until `complete()` is called on
/// that handle, from any thread. Never calling it keeps the button loading.
#[derive(Clone)]
pub struct ButtonAction {
    callback: Arc<ActionFn>,
}

impl ButtonAction {
    /// Wrap a callback that finishes by calling [`Completion::complete`].
    pub fn new<F>(callback: F) -> Self
    where
        F: Fn(Completion) + Send + Sync + 'static,
    {
        Self {
            callback: Arc::new(callback),
        }
    }

    /// Wrap a synchronous callback. Completion fires as soon as it returns.
    pub fn simple<F>(callback: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        Self::new(move |done| {
            callback();
            done.complete();
        })
    }

    /// Run the callback with the given completion handle.
    pub fn invoke(&self, done: Completion) {
        (self.callback)(done)
    }
}

impl fmt::Debug for ButtonAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ButtonAction").finish_non_exhaustive()
    }
}

/// Where the identity of a button comes from.
#[derive(Debug, Clone, Default)]
pub enum Identity {
    /// Generated when runtime state is created.
    #[default]
    Auto,
    /// A fixed string.
    Fixed(String),
    /// A string owned by the caller and re-read on every render.
    Bound(Binding<String>),
}

impl Identity {
    /// The caller-provided identity, if any, read now.
    pub fn explicit(&self) -> Option<String> {
        match self {
            Self::Auto => None,
            Self::Fixed(id) => Some(id.clone()),
            Self::Bound(binding) => Some(binding.get()),
        }
    }
}

/// Immutable description of one button.
#[derive(Debug, Clone)]
pub struct ButtonConfiguration {
    fixed_id: Option<String>,
    id_binding: Option<Binding<String>>,
    icon: Option<IconRef>,
    label: Option<String>,
    style: VisualStyle,
    size: ButtonSize,
    shape: ButtonShape,
    shape_visibility: ShapeVisibility,
    disabled_reason: Option<String>,
    popover_content: Option<ViewRef>,
    debounce_guard: bool,
    loading_indicator: LoadingIndicatorStyle,
    action: Option<ButtonAction>,
    custom_background: Option<Color>,
    help: Option<String>,
}

impl ButtonConfiguration {
    /// Start a configuration with built-in defaults.
    pub fn builder() -> ButtonConfigurationBuilder {
        Self::builder_with(&ButtonDefaults::default())
    }

    /// Start a configuration seeded from theme defaults.
    pub fn builder_with(defaults: &ButtonDefaults) -> ButtonConfigurationBuilder {
        ButtonConfigurationBuilder {
            config: Self {
                fixed_id: None,
                id_binding: None,
                icon: None,
                label: None,
                style: defaults.style.clone(),
                size: defaults.size,
                shape: defaults.shape,
                shape_visibility: defaults.shape_visibility,
                disabled_reason: None,
                popover_content: None,
                debounce_guard: defaults.debounce_guard,
                loading_indicator: defaults.loading_indicator,
                action: None,
                custom_background: None,
                help: None,
            },
        }
    }

    /// A builder holding a copy of this configuration.
    pub fn to_builder(&self) -> ButtonConfigurationBuilder {
        ButtonConfigurationBuilder {
            config: self.clone(),
        }
    }

    /// The identity source. A binding wins over a fixed id.
    pub fn identity(&self) -> Identity {
        match (&self.id_binding, &self.fixed_id) {
            (Some(binding), _) => Identity::Bound(binding.clone()),
            (None, Some(id)) => Identity::Fixed(id.clone()),
            (None, None) => Identity::Auto,
        }
    }

    /// The icon as configured.
    pub fn icon(&self) -> Option<&IconRef> {
        self.icon.as_ref()
    }

    /// The icon to draw: the configured one, or the fallback when the
    /// button has neither icon nor label.
    pub fn effective_icon(&self) -> Option<IconRef> {
        match (&self.icon, &self.label) {
            (Some(icon), _) => Some(icon.clone()),
            (None, Some(_)) => None,
            (None, None) => Some(IconRef::fallback()),
        }
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn style(&self) -> &VisualStyle {
        &self.style
    }

    pub fn size(&self) -> ButtonSize {
        self.size
    }

    pub fn shape(&self) -> ButtonShape {
        self.shape
    }

    pub fn shape_visibility(&self) -> ShapeVisibility {
        self.shape_visibility
    }

    /// Why the button is disabled. `Some` means disabled.
    pub fn disabled_reason(&self) -> Option<&str> {
        self.disabled_reason.as_deref()
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled_reason.is_some()
    }

    pub fn popover_content(&self) -> Option<&ViewRef> {
        self.popover_content.as_ref()
    }

    /// Whether taps are swallowed while the action is loading.
    pub fn debounce_guard(&self) -> bool {
        self.debounce_guard
    }

    pub fn loading_indicator(&self) -> LoadingIndicatorStyle {
        self.loading_indicator
    }

    pub fn action(&self) -> Option<&ButtonAction> {
        self.action.as_ref()
    }

    /// Background replacing the resolved one outside muted states.
    pub fn custom_background(&self) -> Option<Color> {
        self.custom_background
    }

    /// Explicit tooltip text.
    pub fn help(&self) -> Option<&str> {
        self.help.as_deref()
    }
}

impl Default for ButtonConfiguration {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// By-value builder for [`ButtonConfiguration`].
#[derive(Debug, Clone)]
pub struct ButtonConfigurationBuilder {
    config: ButtonConfiguration,
}

impl ButtonConfigurationBuilder {
    /// Sets a fixed identity. Ignored while an identity binding is set.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.config.fixed_id = Some(id.into());
        self
    }

    /// Sets a caller-owned identity binding.
    pub fn id_binding(mut self, binding: Binding<String>) -> Self {
        self.config.id_binding = Some(binding);
        self
    }

    pub fn icon(mut self, icon: impl Into<IconRef>) -> Self {
        self.config.icon = Some(icon.into());
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.config.label = Some(label.into());
        self
    }

    pub fn style(mut self, style: VisualStyle) -> Self {
        self.config.style = style;
        self
    }

    pub fn size(mut self, size: ButtonSize) -> Self {
        self.config.size = size;
        self
    }

    pub fn shape(mut self, shape: ButtonShape) -> Self {
        self.config.shape = shape;
        self
    }

    pub fn shape_visibility(mut self, visibility: ShapeVisibility) -> Self {
        self.config.shape_visibility = visibility;
        self
    }

    /// Disables the button; `reason` is shown when it is tapped.
    pub fn disabled(mut self, reason: impl Into<String>) -> Self {
        self.config.disabled_reason = Some(reason.into());
        self
    }

    /// Re-enables a button copied from a disabled configuration.
    pub fn enabled(mut self) -> Self {
        self.config.disabled_reason = None;
        self
    }

    /// Content toggled by each activating tap.
    pub fn popover(mut self, content: ViewRef) -> Self {
        self.config.popover_content = Some(content);
        self
    }

    pub fn debounce_guard(mut self, guard: bool) -> Self {
        self.config.debounce_guard = guard;
        self
    }

    pub fn loading_indicator(mut self, style: LoadingIndicatorStyle) -> Self {
        self.config.loading_indicator = style;
        self
    }

    pub fn action(mut self, action: ButtonAction) -> Self {
        self.config.action = Some(action);
        self
    }

    pub fn custom_background(mut self, color: Color) -> Self {
        self.config.custom_background = Some(color);
        self
    }

    pub fn help(mut self, text: impl Into<String>) -> Self {
        self.config.help = Some(text.into());
        self
    }

    pub fn build(self) -> ButtonConfiguration {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_defaults() {
        let config = ButtonConfiguration::default();
        assert!(config.debounce_guard());
        assert!(!config.is_disabled());
        assert_eq!(config.style(), &VisualStyle::Primary);
        assert_eq!(config.size(), ButtonSize::Regular);
        assert_eq!(config.loading_indicator(), LoadingIndicatorStyle::Spinner);
        assert!(matches!(config.identity(), Identity::Auto));
    }

    #[test]
    fn test_fallback_icon() {
        let config = ButtonConfiguration::default();
        assert!(config.icon().is_none());
        assert_eq!(config.effective_icon(), Some(IconRef::fallback()));

        let labelled = config.to_builder().label("Go").build();
        assert_eq!(labelled.effective_icon(), None);

        let iconic = config.to_builder().icon("star").build();
        assert_eq!(iconic.effective_icon().unwrap().name(), "star");
    }

    #[test]
    fn test_binding_supersedes_fixed_id() {
        let binding = Binding::new("bound".to_string());

        let before = ButtonConfiguration::builder()
            .id("fixed")
            .id_binding(binding.clone())
            .build();
        let after = ButtonConfiguration::builder()
            .id_binding(binding.clone())
            .id("fixed")
            .build();

        assert_eq!(before.identity().explicit().as_deref(), Some("bound"));
        assert_eq!(after.identity().explicit().as_deref(), Some("bound"));

        binding.set("rebound".to_string());
        assert_eq!(after.identity().explicit().as_deref(), Some("rebound"));
    }

    #[test]
    fn test_to_builder_copies_unspecified_fields() {
        let original = ButtonConfiguration::builder()
            .id("a")
            .label("Label")
            .style(VisualStyle::Warning)
            .debounce_guard(false)
            .build();
        let derived = original.to_builder().size(ButtonSize::Huge).build();

        assert_eq!(original.size(), ButtonSize::Regular);
        assert_eq!(derived.size(), ButtonSize::Huge);
        assert_eq!(derived.label(), Some("Label"));
        assert_eq!(derived.style(), &VisualStyle::Warning);
        assert!(!derived.debounce_guard());
        assert_eq!(derived.identity().explicit().as_deref(), Some("a"));
    }

    #[test]
    fn test_enabled_clears_reason() {
        let disabled = ButtonConfiguration::builder().disabled("No network").build();
        assert_eq!(disabled.disabled_reason(), Some("No network"));
        assert!(!disabled.to_builder().enabled().build().is_disabled());
    }

    #[test]
    fn test_simple_action_completes() {
        let calls = Arc::new(AtomicUsize::new(0));
        let calls_clone = calls.clone();
        let action = ButtonAction::simple(move || {
            calls_clone.fetch_add(1, Ordering::SeqCst);
        });

        let done = Completion::noop();
        action.invoke(done.clone());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(done.is_completed());
    }

    #[test]
    fn test_builder_with_defaults() {
        let defaults = ButtonDefaults {
            style: VisualStyle::Neutral,
            size: ButtonSize::Small,
            debounce_guard: false,
            ..ButtonDefaults::default()
        };
        let config = ButtonConfiguration::builder_with(&defaults).build();
        assert_eq!(config.style(), &VisualStyle::Neutral);
        assert_eq!(config.size(), ButtonSize::Small);
        assert!(!config.debounce_guard());
    }
}
