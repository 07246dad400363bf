// ============================================================================
// Decimal Arithmetic
// Exact decimal facade over the rust_decimal engine
// ============================================================================

use super::errors::{DecimalError, DecimalResult};
use super::operand::DecimalOperand;
use crate::config::{ConfigError, DecimalConfig};
use rust_decimal::Decimal;
use std::cmp::Ordering;

/// Stateless facade for exact decimal arithmetic.
///
/// Every operation parses both operands from scratch, delegates to the
/// engine, and returns a fresh [`Decimal`]. Nothing is cached between calls,
/// so a single instance can be shared freely across threads.
///
/// Arithmetic results are rounded to [`DecimalConfig::precision`]
/// significant digits and normalized (no trailing fractional zeros).
///
/// # Example
/// ```
/// use exact_arith::decimal::DecimalArithmetic;
///
/// let math = DecimalArithmetic::default();
///
/// let sum = math.add(0.1, 0.2).unwrap();
/// assert_eq!(sum.to_string(), "0.3");
///
/// // Results thread into the next call without re-parsing
/// let scaled = math.multiply(sum, 10).unwrap();
/// assert!(math.equals(scaled, "3.000").unwrap());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecimalArithmetic {
    config: DecimalConfig,
}

impl DecimalArithmetic {
    /// Create a facade with explicit engine configuration.
    ///
    /// # Errors
    /// Returns the validation error if `config` is out of range.
    pub fn new(config: DecimalConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The configuration this facade was built with
    #[inline]
    pub fn config(&self) -> &DecimalConfig {
        &self.config
    }

    /// Normalize a single operand into a decimal value.
    ///
    /// Useful for validating caller input up front; every other operation
    /// goes through the same path.
    pub fn parse<'a>(&self, value: impl Into<DecimalOperand<'a>>) -> DecimalResult<Decimal> {
        let operand = value.into();
        operand.to_decimal().inspect_err(|err| {
            tracing::trace!(operand = %operand, error = %err, "rejected decimal operand");
        })
    }

    // ========================================================================
    // Arithmetic Operations
    // ========================================================================

    /// Exact sum `a + b`.
    pub fn add<'a, 'b>(
        &self,
        a: impl Into<DecimalOperand<'a>>,
        b: impl Into<DecimalOperand<'b>>,
    ) -> DecimalResult<Decimal> {
        let (a, b) = self.parse_pair(a, b)?;
        self.finish(a.checked_add(b))
    }

    /// Exact difference `a - b`.
    pub fn subtract<'a, 'b>(
        &self,
        a: impl Into<DecimalOperand<'a>>,
        b: impl Into<DecimalOperand<'b>>,
    ) -> DecimalResult<Decimal> {
        let (a, b) = self.parse_pair(a, b)?;
        self.finish(a.checked_sub(b))
    }

    /// Exact product `a * b`.
    pub fn multiply<'a, 'b>(
        &self,
        a: impl Into<DecimalOperand<'a>>,
        b: impl Into<DecimalOperand<'b>>,
    ) -> DecimalResult<Decimal> {
        let (a, b) = self.parse_pair(a, b)?;
        self.finish(a.checked_mul(b))
    }

    /// Quotient `a / b`, rounded to the configured precision.
    ///
    /// # Errors
    /// Returns `DivisionByZero` when `b` is decimally equal to zero in any
    /// representation (`0`, `"0.0"`, `"-0.00"`). The check runs before the
    /// engine is consulted.
    pub fn divide<'a, 'b>(
        &self,
        a: impl Into<DecimalOperand<'a>>,
        b: impl Into<DecimalOperand<'b>>,
    ) -> DecimalResult<Decimal> {
        let (a, b) = self.parse_pair(a, b)?;
        if b.is_zero() {
            tracing::trace!(dividend = %a, divisor = %b, "rejected division by zero");
            return Err(DecimalError::DivisionByZero);
        }
        self.finish(a.checked_div(b))
    }

    // ========================================================================
    // Comparison
    // ========================================================================

    /// Exact three-way comparison of `a` and `b`.
    ///
    /// `Ordering as i8` yields `-1`, `0` or `1`.
    pub fn compare<'a, 'b>(
        &self,
        a: impl Into<DecimalOperand<'a>>,
        b: impl Into<DecimalOperand<'b>>,
    ) -> DecimalResult<Ordering> {
        let (a, b) = self.parse_pair(a, b)?;
        Ok(a.cmp(&b))
    }

    /// True iff `a` and `b` denote the same decimal value, whatever their
    /// source representation or trailing zeros.
    pub fn equals<'a, 'b>(
        &self,
        a: impl Into<DecimalOperand<'a>>,
        b: impl Into<DecimalOperand<'b>>,
    ) -> DecimalResult<bool> {
        let (a, b) = self.parse_pair(a, b)?;
        Ok(a == b)
    }

    // ========================================================================
    // Internals
    // ========================================================================

    #[inline]
    fn parse_pair<'a, 'b>(
        &self,
        a: impl Into<DecimalOperand<'a>>,
        b: impl Into<DecimalOperand<'b>>,
    ) -> DecimalResult<(Decimal, Decimal)> {
        Ok((self.parse(a)?, self.parse(b)?))
    }

    /// Round an engine result to the configured significant digits.
    fn finish(&self, result: Option<Decimal>) -> DecimalResult<Decimal> {
        let value = result.ok_or(DecimalError::Overflow)?;
        if value.is_zero() {
            return Ok(Decimal::ZERO);
        }
        value
            .round_sf_with_strategy(self.config.precision, self.config.rounding.into())
            .map(|rounded| rounded.normalize())
            .ok_or(DecimalError::Overflow)
    }
}
