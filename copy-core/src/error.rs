//! Error types for copy generation.

use thiserror::Error;

/// Result type alias for copy operations.
pub type Result<T> = std::result::Result<T, CopyError>;

/// Validation error with context and suggestions.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// The field that failed validation
    pub field: String,
    /// Description of the error
    pub message: String,
    /// Suggested fix or valid values
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)?;
        if let Some(ref suggestion) = self.suggestion {
            write!(f, ". {}", suggestion)?;
        }
        Ok(())
    }
}

impl ValidationError {
    /// Create a new validation error.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            suggestion: None,
        }
    }

    /// Add a suggestion to the error.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

impl std::error::Error for ValidationError {}

/// Errors that can occur while generating, scoring or exporting copy.
#[derive(Debug, Error)]
pub enum CopyError {
    /// Constraints, guidelines or requests that are internally inconsistent
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Configuration could not be loaded
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Export or file I/O failure
    #[error("IO error ({path}): {message}")]
    Io { path: String, message: String },

    /// Text generation provider failure
    #[error("Provider error ({provider}): {message}")]
    Provider {
        provider: String,
        message: String,
    },

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl CopyError {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        CopyError::Configuration(msg.into())
    }

    /// Create an I/O error bound to a path.
    pub fn io(path: impl Into<String>, msg: impl Into<String>) -> Self {
        CopyError::Io {
            path: path.into(),
            message: msg.into(),
        }
    }

    /// Create a provider error.
    pub fn provider(provider: impl Into<String>, msg: impl Into<String>) -> Self {
        CopyError::Provider {
            provider: provider.into(),
            message: msg.into(),
        }
    }
}

impl From<serde_json::Error> for CopyError {
    fn from(err: serde_json::Error) -> Self {
        CopyError::Serialization(err.to_string())
    }
}
