//! Identity-driven runtime state retention.
//!
//! On every render the reconciler resolves the configuration's identity
//! (`binding value ?? fixed id ?? generated id`) and compares it with the
//! identity of the state it holds. Equal identities keep the state; any
//! other identity discards it and starts from a fresh zero-valued state.
//!
//! A configuration without an identity keeps the generated identity of the
//! state it finds, so an auto-identified button keeps its state across
//! re-renders until it is unmounted or given an explicit identity.

use std::sync::Arc;

use magic_button_core::logging::targets;

use crate::config::Identity;
use crate::state::{ResolvedIdentity, RuntimeState};

/// The result of one reconciliation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reconciliation {
    /// No state existed; a fresh one was created.
    Created,
    /// The existing state was kept.
    Reused,
    /// The identity changed; the old state was discarded.
    Replaced { previous: ResolvedIdentity },
}

/// Owns the runtime state of one mounted button.
#[derive(Debug, Default)]
pub struct IdentityReconciler {
    state: Option<Arc<RuntimeState>>,
}

impl IdentityReconciler {
    pub fn new() -> Self {
        Self::default()
    }

    /// The current state, if mounted.
    pub fn state(&self) -> Option<&Arc<RuntimeState>> {
        self.state.as_ref()
    }

    /// Reuse or replace the state for `identity`.
    pub fn reconcile(&mut self, identity: &Identity) -> (Arc<RuntimeState>, Reconciliation) {
        let explicit = identity.explicit();

        let Some(current) = self.state.as_ref() else {
            let resolved = explicit.map_or_else(ResolvedIdentity::ephemeral, ResolvedIdentity::Explicit);
            tracing::debug!(target: targets::RECONCILE, key = %resolved, "runtime state created");
            return (self.install(resolved), Reconciliation::Created);
        };

        let keeps = match (&explicit, current.identity()) {
            (Some(wanted), ResolvedIdentity::Explicit(held)) => wanted == held,
            (None, held) => held.is_ephemeral(),
            (Some(_), ResolvedIdentity::Ephemeral(_)) => false,
        };
        if keeps {
            return (Arc::clone(current), Reconciliation::Reused);
        }

        let previous = current.identity().clone();
        let resolved = explicit.map_or_else(ResolvedIdentity::ephemeral, ResolvedIdentity::Explicit);
        tracing::debug!(
            target: targets::RECONCILE,
            previous = %previous,
            key = %resolved,
            was_loading = current.is_loading(),
            "identity changed, runtime state reset"
        );
        current.disconnect_all();
        (self.install(resolved), Reconciliation::Replaced { previous })
    }

    /// Discard the state. Returns it if one was mounted.
    pub fn unmount(&mut self) -> Option<Arc<RuntimeState>> {
        let state = self.state.take();
        if let Some(state) = &state {
            tracing::debug!(target: targets::RECONCILE, key = %state.identity(), "runtime state unmounted");
            state.disconnect_all();
        }
        state
    }

    fn install(&mut self, identity: ResolvedIdentity) -> Arc<RuntimeState> {
        let state = Arc::new(RuntimeState::new(identity));
        self.state = Some(Arc::clone(&state));
        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use magic_button_core::Binding;

    fn fixed(id: &str) -> Identity {
        Identity::Fixed(id.to_string())
    }

    #[test]
    fn test_first_reconcile_creates() {
        let mut reconciler = IdentityReconciler::new();
        let (state, outcome) = reconciler.reconcile(&fixed("x"));
        assert_eq!(outcome, Reconciliation::Created);
        assert_eq!(state.identity(), &ResolvedIdentity::Explicit("x".into()));
    }

    #[test]
    fn test_same_identity_reuses() {
        let mut reconciler = IdentityReconciler::new();
        let (first, _) = reconciler.reconcile(&fixed("x"));
        let (second, outcome) = reconciler.reconcile(&fixed("x"));
        assert_eq!(outcome, Reconciliation::Reused);
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_changed_identity_replaces() {
        let mut reconciler = IdentityReconciler::new();
        reconciler.reconcile(&fixed("x"));
        let (state, outcome) = reconciler.reconcile(&fixed("y"));
        assert_eq!(
            outcome,
            Reconciliation::Replaced {
                previous: ResolvedIdentity::Explicit("x".into())
            }
        );
        assert_eq!(state.identity().to_string(), "y");
    }

    #[test]
    fn test_auto_identity_is_kept_while_mounted() {
        let mut reconciler = IdentityReconciler::new();
        let (first, _) = reconciler.reconcile(&Identity::Auto);
        let (second, outcome) = reconciler.reconcile(&Identity::Auto);
        assert_eq!(outcome, Reconciliation::Reused);
        assert_eq!(first.identity(), second.identity());
    }

    #[test]
    fn test_switching_between_auto_and_explicit_resets() {
        let mut reconciler = IdentityReconciler::new();
        reconciler.reconcile(&Identity::Auto);
        let (_, outcome) = reconciler.reconcile(&fixed("x"));
        assert!(matches!(outcome, Reconciliation::Replaced { .. }));

        let (state, outcome) = reconciler.reconcile(&Identity::Auto);
        assert!(matches!(outcome, Reconciliation::Replaced { .. }));
        assert!(state.identity().is_ephemeral());
    }

    #[test]
    fn test_binding_is_reread() {
        let binding = Binding::new("a".to_string());
        let identity = Identity::Bound(binding.clone());
        let mut reconciler = IdentityReconciler::new();

        reconciler.reconcile(&identity);
        assert_eq!(reconciler.reconcile(&identity).1, Reconciliation::Reused);

        binding.set("b".to_string());
        let (state, outcome) = reconciler.reconcile(&identity);
        assert!(matches!(outcome, Reconciliation::Replaced { .. }));
        assert_eq!(state.identity().to_string(), "b");
    }

    #[test]
    fn test_discarded_state_is_disconnected() {
        let mut reconciler = IdentityReconciler::new();
        let (first, _) = reconciler.reconcile(&fixed("x"));
        first.hover_changed().connect(|_| {});
        reconciler.reconcile(&fixed("y"));
        assert_eq!(first.hover_changed().connection_count(), 0);

        let (second, _) = reconciler.reconcile(&fixed("y"));
        second.loading_changed().connect(|_| {});
        reconciler.unmount();
        assert_eq!(second.loading_changed().connection_count(), 0);
    }

    #[test]
    fn test_unmount_then_remount_creates() {
        let mut reconciler = IdentityReconciler::new();
        reconciler.reconcile(&fixed("x"));
        assert!(reconciler.unmount().is_some());
        assert!(reconciler.state().is_none());
        assert!(reconciler.unmount().is_none());
        assert_eq!(reconciler.reconcile(&fixed("x")).1, Reconciliation::Created);
    }
}
