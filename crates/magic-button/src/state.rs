//! Per-identity runtime state.
//!
//! [`RuntimeState`] holds the transient flags of one mounted button. Every
//! flag is a [`Property`] with a matching [`Signal`] that fires only when the
//! value actually changes, so a host can schedule a re-render when loading
//! ends on another thread.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use magic_button_core::logging::targets;
use magic_button_core::{Property, Signal};

static NEXT_EPHEMERAL_ID: AtomicU64 = AtomicU64::new(1);

/// The identity keying a [`RuntimeState`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ResolvedIdentity {
    /// Provided by the caller, fixed or through a binding.
    Explicit(String),
    /// Generated for a button without an identity. Never reused.
    Ephemeral(u64),
}

impl ResolvedIdentity {
    /// Allocate a fresh ephemeral identity.
    pub fn ephemeral() -> Self {
        Self::Ephemeral(NEXT_EPHEMERAL_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn is_ephemeral(&self) -> bool {
        matches!(self, Self::Ephemeral(_))
    }
}

impl fmt::Display for ResolvedIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Explicit(id) => f.write_str(id),
            Self::Ephemeral(n) => write!(f, "auto-{n}"),
        }
    }
}

/// Transient interaction state of one button identity.
pub struct RuntimeState {
    identity: ResolvedIdentity,
    hovering: Property<bool>,
    loading: Property<bool>,
    showing_popover: Property<bool>,
    showing_disabled_explanation: Property<bool>,
    measured_container_size: Property<f32>,
    hover_changed: Signal<bool>,
    loading_changed: Signal<bool>,
    popover_changed: Signal<bool>,
    disabled_explanation_changed: Signal<bool>,
    measured_size_changed: Signal<f32>,
}

impl RuntimeState {
    /// Create a zero-valued state for `identity`.
    pub fn new(identity: ResolvedIdentity) -> Self {
        Self {
            identity,
            hovering: Property::new(false),
            loading: Property::new(false),
            showing_popover: Property::new(false),
            showing_disabled_explanation: Property::new(false),
            measured_container_size: Property::new(0.0),
            hover_changed: Signal::new(),
            loading_changed: Signal::new(),
            popover_changed: Signal::new(),
            disabled_explanation_changed: Signal::new(),
            measured_size_changed: Signal::new(),
        }
    }

    pub fn identity(&self) -> &ResolvedIdentity {
        &self.identity
    }

    pub fn is_hovering(&self) -> bool {
        self.hovering.get()
    }

    pub fn is_loading(&self) -> bool {
        self.loading.get()
    }

    pub fn is_showing_popover(&self) -> bool {
        self.showing_popover.get()
    }

    pub fn is_showing_disabled_explanation(&self) -> bool {
        self.showing_disabled_explanation.get()
    }

    /// Container width last reported by the host.
    pub fn measured_container_size(&self) -> f32 {
        self.measured_container_size.get()
    }

    // Signals
    //
    // Subscriptions belong to this state instance. When the identity changes
    // or the button unmounts, the reconciler disconnects them and the next
    // state starts with no slots; reconnect to the state returned after a
    // render reporting `Created` or `Replaced`.

    /// Emitted with the new value when hover starts or ends.
    ///
    /// Slots are dropped when this state is discarded and are not moved to
    /// the state that replaces it.
    pub fn hover_changed(&self) -> &Signal<bool> {
        &self.hover_changed
    }

    /// Emitted with the new value when loading starts or ends.
    ///
    /// Slots are dropped when this state is discarded, so a late completion
    /// of an abandoned action notifies nobody.
    pub fn loading_changed(&self) -> &Signal<bool> {
        &self.loading_changed
    }

    pub fn popover_changed(&self) -> &Signal<bool> {
        &self.popover_changed
    }

    pub fn disabled_explanation_changed(&self) -> &Signal<bool> {
        &self.disabled_explanation_changed
    }

    pub fn measured_size_changed(&self) -> &Signal<f32> {
        &self.measured_size_changed
    }

    /// Disconnect every slot of every change signal.
    pub(crate) fn disconnect_all(&self) {
        self.hover_changed.disconnect_all();
        self.loading_changed.disconnect_all();
        self.popover_changed.disconnect_all();
        self.disabled_explanation_changed.disconnect_all();
        self.measured_size_changed.disconnect_all();
    }

    // Transitions, driven by the interaction state machine.

    pub(crate) fn set_hovering(&self, value: bool) -> bool {
        self.update(&self.hovering, &self.hover_changed, "hovering", value)
    }

    pub(crate) fn set_loading(&self, value: bool) -> bool {
        self.update(&self.loading, &self.loading_changed, "loading", value)
    }

    pub(crate) fn set_showing_popover(&self, value: bool) -> bool {
        self.update(&self.showing_popover, &self.popover_changed, "popover", value)
    }

    pub(crate) fn set_showing_disabled_explanation(&self, value: bool) -> bool {
        self.update(
            &self.showing_disabled_explanation,
            &self.disabled_explanation_changed,
            "disabled_explanation",
            value,
        )
    }

    pub(crate) fn set_measured_container_size(&self, value: f32) -> bool {
        self.update(
            &self.measured_container_size,
            &self.measured_size_changed,
            "measured_container_size",
            value,
        )
    }

    fn update<T>(&self, property: &Property<T>, signal: &Signal<T>, name: &str, value: T) -> bool
    where
        T: Clone + PartialEq + fmt::Debug + Send + 'static,
    {
        if !property.set(value.clone()) {
            return false;
        }
        tracing::trace!(
            target: targets::MACHINE,
            key = %self.identity,
            flag = name,
            value = ?value,
            "state changed"
        );
        signal.emit(value);
        true
    }
}

impl fmt::Debug for RuntimeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuntimeState")
            .field("identity", &self.identity)
            .field("hovering", &self.is_hovering())
            .field("loading", &self.is_loading())
            .field("showing_popover", &self.is_showing_popover())
            .field(
                "showing_disabled_explanation",
                &self.is_showing_disabled_explanation(),
            )
            .field("measured_container_size", &self.measured_container_size())
            .finish()
    }
}

static_assertions::assert_impl_all!(RuntimeState: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;
    use std::sync::Arc;

    #[test]
    fn test_fresh_state_is_zero_valued() {
        let state = RuntimeState::new(ResolvedIdentity::Explicit("x".into()));
        assert!(!state.is_hovering());
        assert!(!state.is_loading());
        assert!(!state.is_showing_popover());
        assert!(!state.is_showing_disabled_explanation());
        assert_eq!(state.measured_container_size(), 0.0);
    }

    #[test]
    fn test_ephemeral_ids_are_unique() {
        let a = ResolvedIdentity::ephemeral();
        let b = ResolvedIdentity::ephemeral();
        assert_ne!(a, b);
        assert!(a.is_ephemeral());
        assert!(a.to_string().starts_with("auto-"));
        assert_eq!(ResolvedIdentity::Explicit("save".into()).to_string(), "save");
    }

    #[test]
    fn test_signal_fires_only_on_change() {
        let state = RuntimeState::new(ResolvedIdentity::ephemeral());
        let count = Arc::new(AtomicUsize::new(0));
        let count_clone = count.clone();
        state.loading_changed().connect(move |_| {
            count_clone.fetch_add(1, Ordering::SeqCst);
        });

        assert!(state.set_loading(true));
        assert!(!state.set_loading(true));
        assert!(state.set_loading(false));
        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_measured_size_signal_carries_value() {
        let state = RuntimeState::new(ResolvedIdentity::ephemeral());
        let seen = Arc::new(parking_lot::Mutex::new(Vec::new()));
        let seen_clone = seen.clone();
        state.measured_size_changed().connect(move |size| {
            seen_clone.lock().push(*size);
        });

        state.set_measured_container_size(120.0);
        state.set_measured_container_size(120.0);
        assert_eq!(*seen.lock(), vec![120.0]);
    }
}
