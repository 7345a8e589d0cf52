//! Boundary validation errors.
//!
//! The scoring pipeline itself is total; these errors only surface when a
//! caller hands over a payload that violates its preconditions.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("malformed contribution payload: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("contribution payload has an empty login")]
    EmptyLogin,

    #[error("invalid contribution day date '{date}' (expected YYYY-MM-DD)")]
    InvalidDate {
        date: String,
        #[source]
        source: chrono::ParseError,
    },
}
