//! Shared error types for keywordmap

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for keywordmap operations
#[derive(Debug, Error)]
pub enum Error {
    /// A constructor or operation was handed an argument it cannot accept
    #[error("Invalid argument `{argument}`: {message}")]
    InvalidArgument { argument: String, message: String },

    /// A declared type name could not be parsed
    #[error("Invalid type name `{name}`: {message}")]
    InvalidTypeName { name: String, message: String },

    /// A requested type is not described by the manifest
    #[error("Unknown type: {0}")]
    UnknownType(String),

    /// A base-type chain that loops back on itself
    #[error("Inheritance cycle through {0}")]
    InheritanceCycle(String),

    /// Manifest file with an extension we cannot read
    #[error("Unsupported manifest format: {}", .0.display())]
    UnsupportedFormat(PathBuf),

    /// Manifest parsing errors
    #[error("Manifest error in {}: {message}", path.display())]
    Manifest { path: PathBuf, message: String },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create an invalid-argument error naming the offending argument
    pub fn invalid_argument(argument: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            argument: argument.into(),
            message: message.into(),
        }
    }

    /// Create an invalid type name error
    pub fn invalid_type_name(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidTypeName {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Create a manifest error with path context
    pub fn manifest(path: impl Into<PathBuf>, message: impl ToString) -> Self {
        Self::Manifest {
            path: path.into(),
            message: message.to_string(),
        }
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;
