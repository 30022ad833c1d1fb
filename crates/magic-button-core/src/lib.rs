//! Core systems for magic-button.
//!
//! This crate provides the building blocks the interactive button is made of:
//!
//! - **Signal/Slot System**: change notification from runtime state to the host
//! - **Property System**: change-detecting state cells and caller-owned bindings
//! - **Completion Handles**: single-shot callbacks for asynchronous actions
//! - **Logging**: `tracing` targets and performance spans
//!
//! # Example
//!
//! ```
//! use magic_button_core::{Completion, Property, Signal};
//! use std::sync::Arc;
//!
//! let loading = Arc::new(Property::new(true));
//! let loading_changed = Arc::new(Signal::<bool>::new());
//!
//! let (state, signal) = (loading.clone(), loading_changed.clone());
//! let done = Completion::new(move || {
//!     if state.set(false) {
//!         signal.emit(false);
//!     }
//! });
//!
//! done.complete();
//! assert!(!loading.get());
//! ```

pub mod completion;
mod error;
pub mod logging;
pub mod property;
pub mod signal;

pub use completion::Completion;
pub use error::SignalError;
pub use logging::PerfSpan;
pub use property::{Binding, Property};
pub use signal::{ConnectionGuard, ConnectionId, Signal};
