//! Error types for distribution validation.

use thiserror::Error;

/// Error returned when a distribution, sample count, or query is malformed.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Parameters violate distribution or request constraints.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, ValidationError>;
