//! The composition root.
//!
//! [`MagicButton`] ties a [`ButtonConfiguration`] to the runtime state kept by
//! an [`IdentityReconciler`], and turns both into a [`ButtonRender`] using the
//! pure style, metrics and shape functions. Layout and measurement stay with
//! the host: it reports the measured container width and draws what the
//! render describes.

use std::sync::Arc;

use magic_button_core::logging::{span_names, targets};
use magic_button_core::PerfSpan;
use magic_button_style::{
    ButtonShape, LoadingIndicatorStyle, OutlineRenderer, Path, Rect, ShapeRenderer, Size,
    SizeMetrics, StyleColors, StyleResolver, ViewRef,
};

use crate::config::{ButtonConfiguration, IconRef};
use crate::identity::{IdentityReconciler, Reconciliation};
use crate::machine::{InteractionStateMachine, TapOutcome};
use crate::state::{ResolvedIdentity, RuntimeState};
use crate::theme::Theme;

/// Measured width above which the label is drawn next to an icon.
pub const TITLE_MIN_WIDTH: f32 = 80.0;

/// Everything the host needs to draw one button.
#[derive(Debug, Clone)]
pub struct ButtonRender {
    /// Reconciliation key.
    pub key: ResolvedIdentity,
    pub reconciliation: Reconciliation,
    pub colors: StyleColors,
    /// Whether the muted colors are in use.
    pub muted: bool,
    pub metrics: SizeMetrics,
    /// Edge length after resolving `auto` sizing.
    pub edge_length: f32,
    pub icon: Option<IconRef>,
    pub icon_pixel_size: f32,
    /// Label drawn in the button.
    pub title: Option<String>,
    /// Text shown on hover.
    pub tooltip: Option<String>,
    pub shape: ButtonShape,
    /// Container outline, `None` while the shape is hidden.
    pub outline: Option<Path>,
    /// Host view drawn behind the content.
    pub background_view: Option<ViewRef>,
    pub loading_indicator: Option<LoadingIndicatorStyle>,
    pub popover: Option<ViewRef>,
    pub disabled_explanation: Option<String>,
}

/// One mounted interactive button.
pub struct MagicButton {
    config: ButtonConfiguration,
    resolver: StyleResolver,
    renderer: Arc<dyn ShapeRenderer>,
    reconciler: IdentityReconciler,
    /// Outcome of a reconciliation run outside `render()`, not yet reported.
    pending: Option<Reconciliation>,
}

impl MagicButton {
    /// Mount a button with the light palette and the default outline renderer.
    pub fn new(config: ButtonConfiguration) -> Self {
        Self {
            config,
            resolver: StyleResolver::default(),
            renderer: Arc::new(OutlineRenderer),
            reconciler: IdentityReconciler::new(),
            pending: None,
        }
    }

    /// Resolve colors from a theme's palette.
    pub fn with_theme(mut self, theme: &Theme) -> Self {
        self.resolver = theme.resolver();
        self
    }

    pub fn with_resolver(mut self, resolver: StyleResolver) -> Self {
        self.resolver = resolver;
        self
    }

    pub fn with_shape_renderer(mut self, renderer: impl ShapeRenderer + 'static) -> Self {
        self.renderer = Arc::new(renderer);
        self
    }

    pub fn config(&self) -> &ButtonConfiguration {
        &self.config
    }

    /// Replace the configuration. State is reconciled on the next access.
    pub fn update(&mut self, config: ButtonConfiguration) {
        self.config = config;
    }

    /// The runtime state, if it has been attached.
    pub fn state(&self) -> Option<&Arc<RuntimeState>> {
        self.reconciler.state()
    }

    /// Attach state for the current identity and return its state machine.
    ///
    /// A reset caused here is reported by the next [`render`](Self::render).
    pub fn machine(&mut self) -> InteractionStateMachine {
        let (state, outcome) = self.reconciler.reconcile(&self.config.identity());
        if outcome != Reconciliation::Reused {
            self.pending = Some(outcome);
        }
        InteractionStateMachine::new(state)
    }

    pub fn set_hover(&mut self, hovering: bool) {
        self.machine().set_hover(hovering);
    }

    pub fn set_measured_container_size(&mut self, size: f32) {
        self.machine().set_measured_container_size(size);
    }

    pub fn handle_tap(&mut self) -> TapOutcome {
        let machine = self.machine();
        machine.handle_tap(&self.config)
    }

    pub fn dismiss_popover(&mut self) {
        self.machine().dismiss_popover();
    }

    pub fn dismiss_disabled_explanation(&mut self) {
        self.machine().dismiss_disabled_explanation();
    }

    /// Discard the runtime state.
    pub fn unmount(&mut self) {
        self.pending = None;
        self.reconciler.unmount();
    }

    /// Run one render pass.
    pub fn render(&mut self) -> ButtonRender {
        let (state, outcome) = self.reconciler.reconcile(&self.config.identity());
        let pending = self.pending.take();
        let reconciliation = match outcome {
            Reconciliation::Reused => pending.unwrap_or(Reconciliation::Reused),
            outcome => outcome,
        };
        let key = state.identity().clone();
        let _span = PerfSpan::for_key(span_names::RENDER, &key.to_string());

        let config = &self.config;
        let machine = InteractionStateMachine::new(Arc::clone(&state));
        let hovering = state.is_hovering();
        let loading = state.is_loading();
        let measured = state.measured_container_size();

        let muted = machine.is_muted(config);
        let mut colors = self.resolver.resolve(config.style(), hovering, muted);
        if let (false, Some(background)) = (muted, config.custom_background()) {
            colors.background = background;
        }

        let metrics = config.size().metrics();
        let edge_length = metrics.effective_edge_length(measured);
        let icon = config.effective_icon();
        let icon_pixel_size = metrics.icon_pixel_size(edge_length);

        let label = config.label().map(str::to_owned);
        let show_title = measured > TITLE_MIN_WIDTH || icon.is_none();
        let (title, hidden_label) = if show_title {
            (label, None)
        } else {
            (None, label)
        };
        let tooltip = config.help().map(str::to_owned).or(hidden_label);

        let shape = config.shape();
        let outline = config.shape_visibility().is_visible(hovering).then(|| {
            let bounds = container_bounds(shape, edge_length, measured, title.is_some());
            self.renderer.outline(&shape, bounds)
        });

        let loading_indicator = (loading
            && config.debounce_guard()
            && config.loading_indicator().is_visible())
            .then(|| config.loading_indicator());
        let popover = state
            .is_showing_popover()
            .then(|| config.popover_content().cloned())
            .flatten();
        let disabled_explanation = state
            .is_showing_disabled_explanation()
            .then(|| config.disabled_reason().map(str::to_owned))
            .flatten();

        tracing::trace!(
            target: targets::RENDER,
            key = %key,
            ?reconciliation,
            hovering,
            loading,
            muted,
            edge_length,
            "render pass"
        );

        ButtonRender {
            key,
            reconciliation,
            colors,
            muted,
            metrics,
            edge_length,
            icon,
            icon_pixel_size,
            title,
            tooltip,
            shape,
            outline,
            background_view: config.style().custom_view().cloned(),
            loading_indicator,
            popover,
            disabled_explanation,
        }
    }
}

impl std::fmt::Debug for MagicButton {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MagicButton")
            .field("config", &self.config)
            .field("state", &self.reconciler.state())
            .finish_non_exhaustive()
    }
}

/// Bounds of the container: square unless a title widens it.
fn container_bounds(shape: ButtonShape, edge: f32, measured: f32, has_title: bool) -> Rect {
    let width = if has_title && !shape.is_square() {
        measured.max(edge)
    } else {
        edge
    };
    Rect::from_size(Size::new(width, edge))
}
