//! Reactive properties and caller-owned bindings.
//!
//! - [`Property<T>`] wraps a value owned by one component and reports whether
//!   a write actually changed it, so the owner can emit a change signal.
//! - [`Binding<T>`] is a shared read/write cell owned by the *caller*. Cloning
//!   a binding shares the underlying value; writes through any clone are seen
//!   by every other clone.
//!
//! # Example
//!
//! ```
//! use magic_button_core::{Property, Signal};
//!
//! struct Counter {
//!     value: Property<i32>,
//!     value_changed: Signal<i32>,
//! }
//!
//! impl Counter {
//!     fn set_value(&self, new_value: i32) {
//!         if self.value.set(new_value) {
//!             self.value_changed.emit(new_value);
//!         }
//!     }
//! }
//!
//! let counter = Counter { value: Property::new(0), value_changed: Signal::new() };
//! counter.set_value(3);
//! assert_eq!(counter.value.get(), 3);
//! ```

use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;

/// A reactive property that tracks changes.
///
/// `Property<T>` uses interior mutability with `RwLock` and is `Send + Sync`
/// whenever `T` is.
pub struct Property<T> {
    value: RwLock<T>,
}

impl<T: Clone> Property<T> {
    /// Create a new property with an initial value.
    pub fn new(value: T) -> Self {
        Self {
            value: RwLock::new(value),
        }
    }

    /// Get the current value.
    pub fn get(&self) -> T {
        self.value.read().clone()
    }
}

impl<T: Clone + PartialEq> Property<T> {
    /// Set the value, returning `true` if the value changed.
    ///
    /// The caller should emit the associated notification signal when this
    /// returns `true`.
    pub fn set(&self, value: T) -> bool {
        let mut current = self.value.write();
        if *current != value {
            *current = value;
            true
        } else {
            false
        }
    }
}

impl<T: Clone + Default> Default for Property<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: Clone + fmt::Debug> fmt::Debug for Property<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Property")
            .field("value", &self.get())
            .finish()
    }
}

/// A read/write reference to a value owned by the caller.
///
/// Components that accept a `Binding` never own the value: they re-read it
/// every time they need it, so a caller writing a new value is observed on
/// the next read.
///
/// ```
/// use magic_button_core::Binding;
///
/// let id = Binding::new("save".to_string());
/// let seen_by_component = id.clone();
///
/// id.set("save-as".to_string());
/// assert_eq!(seen_by_component.get(), "save-as");
/// ```
pub struct Binding<T> {
    value: Arc<RwLock<T>>,
}

impl<T: Clone> Binding<T> {
    /// Create a binding holding an initial value.
    pub fn new(value: T) -> Self {
        Self {
            value: Arc::new(RwLock::new(value)),
        }
    }

    /// Read the current value.
    pub fn get(&self) -> T {
        self.value.read().clone()
    }

    /// Write a new value, visible through every clone of this binding.
    pub fn set(&self, value: T) {
        *self.value.write() = value;
    }

    /// Whether two bindings refer to the same underlying value.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.value, &other.value)
    }
}

impl<T> Clone for Binding<T> {
    fn clone(&self) -> Self {
        Self {
            value: Arc::clone(&self.value),
        }
    }
}

impl<T: Clone + fmt::Debug> fmt::Debug for Binding<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Binding").field(&self.get()).finish()
    }
}

static_assertions::assert_impl_all!(Property<bool>: Send, Sync);
static_assertions::assert_impl_all!(Binding<String>: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_property_basic() {
        let prop = Property::new(42);
        assert_eq!(prop.get(), 42);
    }

    #[test]
    fn test_property_set_detects_change() {
        let prop = Property::new(false);

        assert!(!prop.set(false));
        assert!(prop.set(true));
        assert!(prop.get());
    }

    #[test]
    fn test_property_default() {
        let prop: Property<bool> = Property::default();
        assert!(!prop.get());
    }

    #[test]
    fn test_binding_shares_value() {
        let binding = Binding::new("a".to_string());
        let other = binding.clone();

        other.set("b".to_string());
        assert_eq!(binding.get(), "b");
        assert!(binding.ptr_eq(&other));
    }

    #[test]
    fn test_independent_bindings_are_distinct() {
        let a = Binding::new(1);
        let b = Binding::new(1);
        assert!(!a.ptr_eq(&b));
    }

    #[test]
    fn test_binding_across_threads() {
        let binding = Binding::new(0u32);
        let writer = binding.clone();

        std::thread::spawn(move || writer.set(7)).join().unwrap();
        assert_eq!(binding.get(), 7);
    }
}
