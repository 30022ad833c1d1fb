//! The interaction state machine.
//!
//! The machine applies hover, tap and measurement events to one
//! [`RuntimeState`], reading policy (disabled reason, debounce guard, popover,
//! action) from the current [`ButtonConfiguration`]. Tap handling never
//! blocks: the action runs synchronously on the caller's thread and receives
//! a [`Completion`] that may be fired later from anywhere.

use std::sync::{Arc, Weak};

use magic_button_core::logging::{span_names, targets};
use magic_button_core::{Completion, PerfSpan};

use crate::config::ButtonConfiguration;
use crate::state::RuntimeState;

/// What a tap did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TapOutcome {
    /// The button is disabled; its explanation is now showing.
    DisabledExplanationShown,
    /// The debounce guard held the tap while the action is loading.
    Swallowed,
    /// The tap activated the button.
    Activated {
        /// Whether the popover is showing after the tap.
        popover_shown: bool,
        /// Whether an action was invoked.
        action_invoked: bool,
        /// Whether the button is loading after the action returned.
        loading: bool,
    },
}

/// Drives a [`RuntimeState`] from input events.
#[derive(Debug, Clone)]
pub struct InteractionStateMachine {
    state: Arc<RuntimeState>,
}

impl InteractionStateMachine {
    pub fn new(state: Arc<RuntimeState>) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &Arc<RuntimeState> {
        &self.state
    }

    /// Whether a tap would activate the button.
    pub fn is_activation_eligible(&self, config: &ButtonConfiguration) -> bool {
        !config.is_disabled() && !(config.debounce_guard() && self.state.is_loading())
    }

    /// Whether the button is drawn with the muted colors.
    pub fn is_muted(&self, config: &ButtonConfiguration) -> bool {
        !self.is_activation_eligible(config)
    }

    /// Record pointer hover. Always allowed.
    pub fn set_hover(&self, hovering: bool) {
        self.state.set_hovering(hovering);
    }

    /// Record the container width measured by the host.
    pub fn set_measured_container_size(&self, size: f32) {
        self.state.set_measured_container_size(size);
    }

    /// Close the popover.
    pub fn dismiss_popover(&self) {
        self.state.set_showing_popover(false);
    }

    /// Close the disabled explanation.
    pub fn dismiss_disabled_explanation(&self) {
        self.state.set_showing_disabled_explanation(false);
    }

    /// Handle a tap.
    pub fn handle_tap(&self, config: &ButtonConfiguration) -> TapOutcome {
        if let Some(reason) = config.disabled_reason() {
            self.state.set_showing_disabled_explanation(true);
            tracing::debug!(
                target: targets::MACHINE,
                key = %self.state.identity(),
                reason,
                "tap on disabled button"
            );
            return TapOutcome::DisabledExplanationShown;
        }

        if config.debounce_guard() && self.state.is_loading() {
            return TapOutcome::Swallowed;
        }

        let key = self.state.identity().to_string();
        let _span = PerfSpan::for_key(span_names::TAP, &key);

        let popover_shown = if config.popover_content().is_some() {
            let show = !self.state.is_showing_popover();
            self.state.set_showing_popover(show);
            show
        } else {
            self.state.is_showing_popover()
        };

        let action_invoked = match config.action() {
            Some(action) if config.debounce_guard() => {
                self.state.set_loading(true);
                action.invoke(self.completion());
                true
            }
            Some(action) => {
                action.invoke(Completion::noop());
                true
            }
            None => false,
        };

        let loading = self.state.is_loading();
        tracing::debug!(
            target: targets::MACHINE,
            key = %key,
            popover_shown,
            action_invoked,
            loading,
            "button activated"
        );

        TapOutcome::Activated {
            popover_shown,
            action_invoked,
            loading,
        }
    }

    /// A completion that ends loading on this exact state instance.
    fn completion(&self) -> Completion {
        let state: Weak<RuntimeState> = Arc::downgrade(&self.state);
        Completion::new(move || {
            if let Some(state) = state.upgrade() {
                state.set_loading(false);
            } else {
                tracing::trace!(target: targets::MACHINE, "completion for discarded state");
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ButtonAction;
    use crate::state::ResolvedIdentity;
    use magic_button_style::ViewRef;
    use parking_lot::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn setup() -> InteractionStateMachine {
        InteractionStateMachine::new(Arc::new(RuntimeState::new(ResolvedIdentity::Explicit(
            "test".into(),
        ))))
    }

    /// An action that stores its completion handle and counts invocations.
    fn deferred_action() -> (ButtonAction, Arc<AtomicUsize>, Arc<Mutex<Vec<Completion>>>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let pending = Arc::new(Mutex::new(Vec::new()));
        let (calls_clone, pending_clone) = (calls.clone(), pending.clone());
        let action = ButtonAction::new(move |done| {
            calls_clone.fetch_add(1, Ordering::SeqCst);
            pending_clone.lock().push(done);
        });
        (action, calls, pending)
    }

    #[test]
    fn test_guarded_tap_sets_loading_until_complete() {
        let machine = setup();
        let (action, calls, pending) = deferred_action();
        let config = ButtonConfiguration::builder().action(action).build();

        let outcome = machine.handle_tap(&config);
        assert_eq!(
            outcome,
            TapOutcome::Activated {
                popover_shown: false,
                action_invoked: true,
                loading: true
            }
        );
        assert!(machine.state().is_loading());
        assert!(machine.is_muted(&config));

        assert_eq!(machine.handle_tap(&config), TapOutcome::Swallowed);
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        pending.lock()[0].complete();
        assert!(!machine.state().is_loading());
        assert!(machine.is_activation_eligible(&config));
    }

    #[test]
    fn test_unguarded_tap_never_loads() {
        let machine = setup();
        let (action, calls, _pending) = deferred_action();
        let config = ButtonConfiguration::builder()
            .action(action)
            .debounce_guard(false)
            .build();

        for _ in 0..3 {
            machine.handle_tap(&config);
            assert!(!machine.state().is_loading());
        }
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_disabled_tap_shows_explanation() {
        let machine = setup();
        let (action, calls, _pending) = deferred_action();
        let config = ButtonConfiguration::builder()
            .action(action)
            .disabled("Sign in first")
            .build();

        assert_eq!(
            machine.handle_tap(&config),
            TapOutcome::DisabledExplanationShown
        );
        assert!(machine.state().is_showing_disabled_explanation());
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        machine.dismiss_disabled_explanation();
        assert!(!machine.state().is_showing_disabled_explanation());
    }

    #[test]
    fn test_popover_toggles() {
        let machine = setup();
        let config = ButtonConfiguration::builder()
            .popover(ViewRef::new("menu"))
            .build();

        assert!(matches!(
            machine.handle_tap(&config),
            TapOutcome::Activated {
                popover_shown: true,
                action_invoked: false,
                ..
            }
        ));
        assert!(machine.state().is_showing_popover());

        machine.handle_tap(&config);
        assert!(!machine.state().is_showing_popover());

        machine.handle_tap(&config);
        machine.dismiss_popover();
        assert!(!machine.state().is_showing_popover());
    }

    #[test]
    fn test_simple_action_ends_loading_immediately() {
        let machine = setup();
        let config = ButtonConfiguration::builder()
            .action(ButtonAction::simple(|| {}))
            .build();

        assert!(matches!(
            machine.handle_tap(&config),
            TapOutcome::Activated { loading: false, .. }
        ));
    }

    #[test]
    fn test_completion_after_state_dropped() {
        let machine = setup();
        let (action, _calls, pending) = deferred_action();
        let config = ButtonConfiguration::builder().action(action).build();
        machine.handle_tap(&config);
        drop(machine);

        assert!(pending.lock()[0].complete());
    }

    #[test]
    fn test_hover_and_measurement() {
        let machine = setup();
        machine.set_hover(true);
        machine.set_measured_container_size(64.0);
        assert!(machine.state().is_hovering());
        assert_eq!(machine.state().measured_container_size(), 64.0);
    }
}
