//! Error types for litegen

use thiserror::Error;

/// Result type alias for litegen operations
pub type GenResult<T> = Result<T, GenError>;

/// Error types for statement generation
#[derive(Debug, Error)]
pub enum GenError {
    /// Builder state validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// A conditional was handed a token list it cannot render
    #[error("Conditional error: {0}")]
    Conditional(String),

    /// Named conditional not present in the registry
    #[error("Unknown conditional: {0}")]
    UnknownConditional(String),
}

impl GenError {
    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a conditional error
    pub fn conditional(message: impl Into<String>) -> Self {
        Self::Conditional(message.into())
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}
