//! Error types for code generation.

use thiserror::Error;

/// Error type for code generation operations.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// Schema parsing error.
    #[error("schema parse error: {0}")]
    Parse(#[from] tfbridge_schema::ParseError),

    /// Schema validation error.
    #[error("schema error: {0}")]
    Schema(#[from] tfbridge_schema::SchemaError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Emitted source is not valid Rust.
    #[error("render error: {message}")]
    Render {
        /// Error message.
        message: String,
    },

    /// Required environment variable is not set.
    #[error("environment variable '{name}' is not set")]
    MissingEnv {
        /// Variable name.
        name: String,
    },
}

impl CodegenError {
    /// Creates a render error with the given message.
    pub fn render(message: impl Into<String>) -> Self {
        Self::Render {
            message: message.into(),
        }
    }
}
