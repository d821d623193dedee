//! Error types for the paycomp-core library.

use thiserror::Error;

/// Main error type for the paycomp library.
#[derive(Error, Debug)]
pub enum CompensationError {
    /// Input is neither a string nor an object with a string `text` field.
    #[error("input is not text but {kind}")]
    InvalidInputKind {
        /// JSON kind of the rejected input (`number`, `array`, ...).
        kind: String,
    },

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// JSON (de)serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Reasons an amount could not be turned into a value.
///
/// These never escape the public parse operations: both are recovered
/// into a zero value, which is how "not found" is represented in output.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExtractionError {
    /// No numeric literal was found in the amount text.
    #[error("no amount found")]
    NoMatch,

    /// The numeric literal is not a finite positive number.
    #[error("failed to parse amount: {value}")]
    UnparsableNumber { value: String },
}

/// Result type for the paycomp library.
pub type Result<T> = std::result::Result<T, CompensationError>;
