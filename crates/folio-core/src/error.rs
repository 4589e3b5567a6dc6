//! Error types for the Folio core library.

use thiserror::Error;

/// Result type alias using `CoreError`.
pub type Result<T> = std::result::Result<T, CoreError>;

/// Core error types for Folio.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration value rejected during validation.
    #[error("Configuration error: {field}: {message}")]
    Config { field: &'static str, message: String },

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl CoreError {
    /// Create a new configuration error for `field`.
    pub fn config(field: &'static str, message: impl Into<String>) -> Self {
        Self::Config {
            field,
            message: message.into(),
        }
    }
}
