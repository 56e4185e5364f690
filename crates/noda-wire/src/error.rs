//! Wire decode error types.

use thiserror::Error;

/// Result type for wire decode operations.
pub type DecodeResult<T> = Result<T, DecodeError>;

/// Errors that can occur while decoding wire-format records.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The input does not match the expected shape for the record.
    #[error("malformed wire record: {0}")]
    Structural(#[from] serde_json::Error),
}
