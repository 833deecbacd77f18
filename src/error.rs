//! Error types shared by the field, codec and framing layers

use thiserror::Error;

/// Errors that can occur while encoding or decoding EZCOD and RSKEY strings
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// Input that cannot be interpreted at all: bad glyphs, out-of-range
    /// coordinates, duplicate separators, impossible codeword shapes
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    /// Damage exceeds the parity capacity of the code
    #[error("Uncorrectable: {0}")]
    Uncorrectable(String),

    /// Payload or key length disagrees with the configured size
    #[error("Length mismatch: expected {expected} {unit}, found {found}")]
    LengthMismatch {
        expected: usize,
        found: usize,
        unit: &'static str,
    },

    /// Division by the zero element of a Galois field
    #[error("Division by zero in Galois field")]
    DivisionByZero,

    /// Parity, precision or size outside what the code supports
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}

impl CodecError {
    pub(crate) fn malformed(msg: impl Into<String>) -> Self {
        CodecError::MalformedInput(msg.into())
    }

    pub(crate) fn uncorrectable(msg: impl Into<String>) -> Self {
        CodecError::Uncorrectable(msg.into())
    }

    pub(crate) fn config(msg: impl Into<String>) -> Self {
        CodecError::InvalidConfiguration(msg.into())
    }
}

/// Result type for codec operations
pub type Result<T> = std::result::Result<T, CodecError>;
