//! Error types for the climate-signals library.

use thiserror::Error;

/// Result type alias for signal operations.
pub type Result<T> = std::result::Result<T, SignalError>;

/// Errors that can occur while deriving climate signals.
///
/// Undefined output cells are not errors: they are represented as NaN in the
/// returned series (e.g. insufficient smoothing history) and propagate
/// through arithmetic like any other IEEE-754 value.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SignalError {
    /// Precondition on an input violated.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Input series or bundle members have incompatible dimensions.
    #[error("shape mismatch: expected {expected}, got {got}")]
    ShapeMismatch { expected: usize, got: usize },

    /// Time-step axis error.
    #[error("timestamp error: {0}")]
    TimestampError(String),

    /// Cell or step index out of bounds.
    #[error("index out of bounds: {index} (size: {size})")]
    IndexOutOfBounds { index: usize, size: usize },
}
