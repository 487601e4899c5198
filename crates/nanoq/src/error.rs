//! Error types for nanoq

use thiserror::Error;

/// Result type alias for nanoq operations
pub type QueryResult<T> = Result<T, QueryError>;

/// Errors raised while building queries.
///
/// Compilation itself never fails: every error surfaces at the operation
/// that received the bad input.
#[derive(Debug, Error)]
pub enum QueryError {
    /// A dynamic value that cannot be bound as a scalar parameter
    #[error("Unsupported value: {0}")]
    UnsupportedValue(String),

    /// SQL identifier failed validation
    #[error("Invalid identifier: {0}")]
    InvalidIdent(String),

    /// Template chunks and arguments do not interleave
    #[error("Template expects {expected} argument(s) for {chunks} chunk(s), got {args}", expected = .chunks.saturating_sub(1))]
    TemplateArity { chunks: usize, args: usize },

    /// Compiler configuration could not be loaded
    #[error("Config error: {0}")]
    Config(String),
}

impl QueryError {
    /// Create an unsupported value error
    pub fn unsupported(message: impl Into<String>) -> Self {
        Self::UnsupportedValue(message.into())
    }

    /// Create an invalid identifier error
    pub fn invalid_ident(message: impl Into<String>) -> Self {
        Self::InvalidIdent(message.into())
    }

    /// Check if this is an invalid identifier error
    pub fn is_invalid_ident(&self) -> bool {
        matches!(self, Self::InvalidIdent(_))
    }

    /// Check if this is an unsupported value error
    pub fn is_unsupported_value(&self) -> bool {
        matches!(self, Self::UnsupportedValue(_))
    }
}

impl From<toml::de::Error> for QueryError {
    fn from(err: toml::de::Error) -> Self {
        Self::Config(err.to_string())
    }
}
