//! Unified error types for the domain layer
//!
//! Every validation or parsing failure in the player model surfaces as a
//! [`DomainError`]; the engine maps these onto its `InvalidInput` outcome.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Validation failed (e.g., invalid field values)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Invalid ID format or value
    #[error("Invalid ID: {0}")]
    InvalidId(String),

    /// Parse error (for enumerations and value objects)
    #[error("Parse error: {0}")]
    Parse(String),
}

impl DomainError {
    /// Creates a validation error for business rule violations.
    ///
    /// Use this when a required field is missing or a supplied value is
    /// outside its allowed range.
    ///
    /// # Example
    /// ```ignore
    /// if name.is_empty() {
    ///     return Err(DomainError::validation("Player name cannot be empty"));
    /// }
    /// ```
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create an invalid ID error
    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    /// Creates a parse error for string-to-type conversion failures.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }
}
