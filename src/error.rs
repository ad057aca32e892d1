//! Error types for founderx.
//!
//! All errors are strongly typed using thiserror. Missing input documents
//! are never errors: loaders substitute fallback records instead. What does
//! surface here is malformed input, bad configuration and I/O failures on
//! the artifacts we write.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while extracting numeric fields from report documents.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Field '{field}' on line {line} is not a number: {text:?}")]
    InvalidNumber {
        field: String,
        line: usize,
        text: String,
    },
}

/// Errors raised while loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid TOML in {path}: {message}")]
    Parse {
        path: String,
        message: String,
    },

    #[error("Invalid configuration for '{field}': {reason}")]
    Invalid {
        field: String,
        reason: String,
    },
}

/// Top-level error type for founderx.
#[derive(Debug, Error)]
pub enum FounderError {
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {message}")]
    Serialization {
        message: String,
    },

    #[error("Validation error: {reason}")]
    Validation {
        reason: String,
    },
}

impl FounderError {
    /// Creates an I/O error bound to the path being accessed.
    #[must_use]
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Creates a validation error.
    #[must_use]
    pub fn validation(reason: impl Into<String>) -> Self {
        Self::Validation {
            reason: reason.into(),
        }
    }

    /// Returns true if this is a parse error.
    #[must_use]
    pub const fn is_parse(&self) -> bool {
        matches!(self, Self::Parse(_))
    }

    /// Returns true if this is a configuration error.
    #[must_use]
    pub const fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }

    /// Returns true if this is an I/O error.
    #[must_use]
    pub const fn is_io(&self) -> bool {
        matches!(self, Self::Io { .. })
    }

    /// Returns true if this is a validation error.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }
}

impl From<serde_json::Error> for FounderError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            message: err.to_string(),
        }
    }
}

/// Result type alias for founderx operations.
pub type FounderResult<T> = Result<T, FounderError>;
