//! Single-shot completion handles.
//!
//! A [`Completion`] is handed to an asynchronous action. The action calls
//! [`Completion::complete`] when it is done; the first call runs the
//! completion callback, every later call is a no-op. Handles are `Clone`,
//! and all clones share the same "already fired" flag, so the callback runs
//! at most once no matter which clone fires first or from which thread.
//!
//! Never calling `complete` is allowed: the callback simply never runs.
//!
//! ```
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use std::sync::Arc;
//! use magic_button_core::Completion;
//!
//! let runs = Arc::new(AtomicUsize::new(0));
//! let runs_clone = runs.clone();
//! let done = Completion::new(move || {
//!     runs_clone.fetch_add(1, Ordering::SeqCst);
//! });
//!
//! assert!(done.complete());
//! assert!(!done.complete());
//! assert_eq!(runs.load(Ordering::SeqCst), 1);
//! ```

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;

type Callback = Box<dyn FnOnce() + Send>;

struct CompletionState {
    fired: AtomicBool,
    callback: Mutex<Option<Callback>>,
}

/// A single-shot, thread-safe completion callback.
#[derive(Clone)]
pub struct Completion {
    inner: Arc<CompletionState>,
}

impl Completion {
    /// Create a completion that runs `callback` on the first `complete()`.
    pub fn new<F>(callback: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        Self {
            inner: Arc::new(CompletionState {
                fired: AtomicBool::new(false),
                callback: Mutex::new(Some(Box::new(callback))),
            }),
        }
    }

    /// A completion with no observable effect.
    pub fn noop() -> Self {
        Self {
            inner: Arc::new(CompletionState {
                fired: AtomicBool::new(false),
                callback: Mutex::new(None),
            }),
        }
    }

    /// Fire the completion.
    ///
    /// Returns `true` if this call was the one that fired it.
    pub fn complete(&self) -> bool {
        if self.inner.fired.swap(true, Ordering::AcqRel) {
            return false;
        }
        let callback = self.inner.callback.lock().take();
        if let Some(callback) = callback {
            callback();
        }
        true
    }

    /// Whether `complete()` has been called on any clone.
    pub fn is_completed(&self) -> bool {
        self.inner.fired.load(Ordering::Acquire)
    }
}

impl fmt::Debug for Completion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Completion")
            .field("completed", &self.is_completed())
            .finish()
    }
}

static_assertions::assert_impl_all!(Completion: Send, Sync);
