// ============================================================================
// Temporal Errors
// ============================================================================

use thiserror::Error;

/// Errors that can occur during instant arithmetic.
#[derive(Error, Debug, Clone, PartialEq, Eq, Hash)]
pub enum TemporalError {
    /// String operand is not a recognised ISO-8601 instant
    #[error("invalid instant {input:?}: {reason}")]
    InvalidInstant {
        /// The rejected input, as the caller supplied it
        input: String,
        /// The engine's parse failure message
        reason: String,
    },

    /// Instant falls outside 0000-01-01T00:00:00.000Z ..= 9999-12-31T23:59:59.999Z
    #[error("instant out of range: supported years are 0000 through 9999")]
    OutOfRange,
}

impl TemporalError {
    pub(crate) fn invalid_instant(input: impl Into<String>, reason: impl ToString) -> Self {
        TemporalError::InvalidInstant {
            input: input.into(),
            reason: reason.to_string(),
        }
    }
}

/// Result type alias for temporal operations
pub type TemporalResult<T> = Result<T, TemporalError>;
