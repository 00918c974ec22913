//! Error types for Emopick
//!
//! Provides standardized error handling across the application.

use thiserror::Error;

/// Errors that can occur in Emopick
#[derive(Debug, Error)]
pub enum EmopickError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Clipboard operation errors
    #[error("Clipboard error: {0}")]
    Clipboard(String),

    /// Copy binding misuse (unbound handle, out-of-range activation)
    #[error("Copy binding error: {0}")]
    Binding(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing errors
    #[error("Config parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Result type alias for Emopick operations
pub type EmopickResult<T> = Result<T, EmopickError>;
