//! Logging facilities for magic-button.
//!
//! magic-button uses the `tracing` crate for instrumentation. To see logs,
//! install a subscriber in your application:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("magic_button=debug")
//!     .init();
//! ```
//!
//! All crates in the workspace log under the targets in [`targets`], so a
//! single directive can enable or silence one subsystem.

/// Span names used throughout magic-button.
pub mod span_names {
    /// One composition/render pass of a button.
    pub const RENDER: &str = "magic_button::render";
    /// Tap handling.
    pub const TAP: &str = "magic_button::tap";
}

/// Target names for log filtering.
pub mod targets {
    /// Signal/slot system target.
    pub const SIGNAL: &str = "magic_button_core::signal";
    /// Interaction state machine target.
    pub const MACHINE: &str = "magic_button::machine";
    /// Identity reconciliation target.
    pub const RECONCILE: &str = "magic_button::reconcile";
    /// Composition/render pass target.
    pub const RENDER: &str = "magic_button::render";
    /// Theme and palette loading target.
    pub const PALETTE: &str = "magic_button_style::palette";
    /// Performance spans.
    pub const PERF: &str = "magic_button::perf";
}

/// A guard that keeps a tracing span entered until dropped.
///
/// Used to measure the duration of one operation.
#[derive(Debug)]
pub struct PerfSpan {
    #[allow(dead_code)]
    span: tracing::span::EnteredSpan,
}

impl PerfSpan {
    /// Create and enter a span tagged with the button key being processed.
    pub fn for_key(name: &'static str, key: &str) -> Self {
        let span = tracing::info_span!(target: targets::PERF, "perf", operation = name, key = key);
        Self {
            span: span.entered(),
        }
    }
}
