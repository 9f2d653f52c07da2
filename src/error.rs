//! Error types for the caffeine_screen library.

use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for caffeine_screen operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// A required form field was left empty
    #[error("Missing required field: {0}")]
    MissingField(String),

    /// Profile field outside its declared domain
    #[error("Invalid profile: {0}")]
    InvalidProfile(String),

    /// Report document could not be rendered
    #[error("Report error: {0}")]
    Report(String),
}
