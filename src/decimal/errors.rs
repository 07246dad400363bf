// ============================================================================
// Decimal Errors
// Error types for exact decimal arithmetic operations
// ============================================================================

use thiserror::Error;

/// Errors that can occur during decimal arithmetic operations.
#[derive(Error, Debug, Clone, PartialEq, Eq, Hash)]
pub enum DecimalError {
    /// Operand could not be parsed as a decimal literal or finite number
    #[error("invalid operand {input:?}: {reason}")]
    InvalidOperand {
        /// The rejected input, as the caller supplied it
        input: String,
        /// The engine's parse failure message
        reason: String,
    },

    /// Divisor compared decimally equal to zero
    #[error("division by zero")]
    DivisionByZero,

    /// Result magnitude exceeded the engine's representable range
    #[error("arithmetic overflow: result exceeded representable range")]
    Overflow,
}

impl DecimalError {
    pub(crate) fn invalid_operand(input: impl Into<String>, reason: impl ToString) -> Self {
        DecimalError::InvalidOperand {
            input: input.into(),
            reason: reason.to_string(),
        }
    }
}

/// Result type alias for decimal operations
pub type DecimalResult<T> = Result<T, DecimalError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(DecimalError::DivisionByZero.to_string(), "division by zero");
        assert_eq!(
            DecimalError::Overflow.to_string(),
            "arithmetic overflow: result exceeded representable range"
        );

        let err = DecimalError::invalid_operand("abc", "Invalid decimal: unknown character");
        assert_eq!(
            err.to_string(),
            "invalid operand \"abc\": Invalid decimal: unknown character"
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(DecimalError::DivisionByZero, DecimalError::DivisionByZero);
        assert_ne!(DecimalError::DivisionByZero, DecimalError::Overflow);
    }
}
