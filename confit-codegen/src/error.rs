//! Error types for code generation.

use thiserror::Error;

/// Error type for code generation operations.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// Schema parsing, naming or resolution error.
    #[error("schema error: {0}")]
    Schema(#[from] confit_schema::SchemaError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Code generation error.
    #[error("generation error: {message}")]
    Generation {
        /// Error message.
        message: String,
    },
}

impl CodegenError {
    /// Creates a generation error with the given message.
    pub fn generation(message: impl Into<String>) -> Self {
        Self::Generation {
            message: message.into(),
        }
    }

    /// Returns the schema error, if this is one.
    #[must_use]
    pub fn as_schema_error(&self) -> Option<&confit_schema::SchemaError> {
        match self {
            Self::Schema(err) => Some(err),
            _ => None,
        }
    }
}
