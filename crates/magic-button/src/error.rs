//! Error types for magic-button.

use std::path::PathBuf;

/// Result type alias for magic-button operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading themes or building configurations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An invalid color, size or shape value.
    #[error(transparent)]
    Style(#[from] magic_button_style::Error),

    /// Theme file parse error.
    #[error("Theme parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// File I/O error.
    #[error("Failed to read theme '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Create an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
