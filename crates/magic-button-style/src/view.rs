//! Opaque references to host-provided views.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// A reference to a view supplied by the host framework.
///
/// The button never inspects the view; it only hands it back to the host
/// (as a custom background or as popover content). Clones compare equal.
#[derive(Clone)]
pub struct ViewRef {
    view: Arc<dyn Any + Send + Sync>,
}

impl ViewRef {
    /// Wrap a host view.
    pub fn new<V: Any + Send + Sync>(view: V) -> Self {
        Self {
            view: Arc::new(view),
        }
    }

    /// Borrow the wrapped view as its concrete type.
    pub fn downcast_ref<V: Any>(&self) -> Option<&V> {
        self.view.downcast_ref::<V>()
    }
}

impl PartialEq for ViewRef {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.view, &other.view)
    }
}

impl fmt::Debug for ViewRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewRef").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_downcast() {
        let view = ViewRef::new("gradient".to_string());
        assert_eq!(view.downcast_ref::<String>().unwrap(), "gradient");
        assert!(view.downcast_ref::<u32>().is_none());
    }

    #[test]
    fn test_identity_equality() {
        let a = ViewRef::new(1u8);
        let b = ViewRef::new(1u8);
        assert_eq!(a, a.clone());
        assert_ne!(a, b);
    }
}
