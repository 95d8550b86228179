//! Error types for chunkwise.
//!
//! A single enum covers the one domain failure of the splitter (an
//! unsupported language tag), pattern compilation failures for custom
//! separators, and the ambient configuration and I/O errors of the CLI.

use thiserror::Error;

/// Unified error type for chunkwise.
///
/// Splitting itself never fails; every variant here is raised while building
/// a configuration or while the CLI reads input.
#[derive(Error, Debug)]
pub enum AppError {
    /// A language tag outside the supported set was requested
    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),

    /// A regular-expression separator failed to compile
    #[error("Invalid separator pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O and filesystem errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Serialization(err.to_string())
    }
}

impl From<serde_yaml::Error> for AppError {
    fn from(err: serde_yaml::Error) -> Self {
        AppError::Serialization(err.to_string())
    }
}

/// Convenience type alias for Results with AppError.
pub type AppResult<T> = Result<T, AppError>;
