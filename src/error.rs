// src/error.rs
//
// Error types for country name resolution

use thiserror::Error;

/// Result type alias for resolver operations
pub type Result<T> = std::result::Result<T, ResolveError>;

/// Errors raised while loading reference data or configuring the resolver.
///
/// Failing to identify a guess is never an error: that outcome is reported
/// through [`crate::resolver::Resolution`].
#[derive(Error, Debug)]
pub enum ResolveError {
    /// The active locale has no name field mapping at all.
    #[error("No localized name field is defined for locale '{0}'")]
    UnknownLocale(String),

    #[error("Country #{index} in the reference dataset has an empty {field} field")]
    InvalidCountry { index: usize, field: &'static str },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse settings: {0}")]
    TomlDe(#[from] toml::de::Error),

    #[error("Failed to serialize settings: {0}")]
    TomlSer(#[from] toml::ser::Error),
}
