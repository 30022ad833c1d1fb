//! Loading indicator styles.

use serde::Deserialize;

/// How a button shows that its action is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LoadingIndicatorStyle {
    #[default]
    Spinner,
    Dots,
    Pulse,
    /// Loading is tracked but not drawn.
    None,
}

impl LoadingIndicatorStyle {
    /// Whether anything is drawn for this style.
    pub fn is_visible(self) -> bool {
        !matches!(self, Self::None)
    }
}
