//! Error types for the styling crate.

use std::path::PathBuf;

/// Result type alias for style operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in the styling crate.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A color string that is not `#RRGGBB` or `#RRGGBBAA`.
    #[error("Invalid color '{value}': expected #RRGGBB or #RRGGBBAA")]
    InvalidColor { value: String },

    /// Invalid property value.
    #[error("Invalid value for property '{property}': {message}")]
    InvalidValue { property: String, message: String },

    /// TOML parsing error.
    #[error("Palette parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// File I/O error.
    #[error("Failed to read palette '{path}': {source}")]
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

    /// Create a value error.
    pub fn invalid_value(property: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            property: property.into(),
            message: message.into(),
        }
    }
}
