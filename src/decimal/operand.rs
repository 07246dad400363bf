// ============================================================================
// Decimal Operand
// Tagged union of everything the decimal facade accepts as input
// ============================================================================

use super::errors::{DecimalError, DecimalResult};
use rust_decimal::Decimal;
use std::fmt;

/// An operand of the decimal facade.
///
/// Every operation of [`DecimalArithmetic`](super::DecimalArithmetic)
/// accepts `impl Into<DecimalOperand>`, so callers pass native numbers,
/// string literals or previously returned values interchangeably:
///
/// ```
/// use exact_arith::decimal::DecimalOperand;
/// use rust_decimal::Decimal;
///
/// let a: DecimalOperand = 0.1.into();
/// let b: DecimalOperand = "0.2".into();
/// let c: DecimalOperand = Decimal::new(3, 1).into();
/// let d: DecimalOperand = 42i64.into();
/// assert!(matches!(a, DecimalOperand::Number(_)));
/// assert!(matches!(b, DecimalOperand::Text(_)));
/// assert!(matches!(c, DecimalOperand::Value(_)));
/// assert!(matches!(d, DecimalOperand::Value(_)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DecimalOperand<'a> {
    /// Native binary floating-point number, read through its shortest
    /// round-trip decimal text
    Number(f64),
    /// Decimal literal (`"12.50"`, `"-3"`, `".5"`, `"1.5e3"`)
    Text(&'a str),
    /// Already-parsed decimal value (including every integer type)
    Value(Decimal),
}

impl DecimalOperand<'_> {
    /// Normalize the operand into the engine's canonical representation.
    ///
    /// This is the only place the facade turns caller input into a
    /// [`Decimal`]. The source is parsed exactly once and never passes
    /// through a binary floating-point intermediate.
    ///
    /// # Errors
    /// Returns `InvalidOperand` for non-finite numbers and malformed
    /// literals, `Overflow` for magnitudes the engine cannot hold.
    pub fn to_decimal(self) -> DecimalResult<Decimal> {
        match self {
            DecimalOperand::Value(value) => Ok(value),
            DecimalOperand::Number(number) => {
                if !number.is_finite() {
                    return Err(DecimalError::invalid_operand(
                        number.to_string(),
                        "number is not finite",
                    ));
                }
                // f64's Display is the shortest text that round-trips, never exponential
                let text = number.to_string();
                parse_literal(&text)
            },
            DecimalOperand::Text(text) => parse_literal(text),
        }
    }
}

impl fmt::Display for DecimalOperand<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecimalOperand::Number(number) => write!(f, "{}", number),
            DecimalOperand::Text(text) => write!(f, "{}", text),
            DecimalOperand::Value(value) => write!(f, "{}", value),
        }
    }
}

// ============================================================================
// Literal Parsing
// ============================================================================

/// Largest scale the engine stores.
const MAX_SCALE: i64 = 28;

/// Most digits a 96-bit engine mantissa can carry.
const MAX_DIGITS: i64 = 29;

/// Largest engine mantissa, `2^96 - 1`.
const MAX_MANTISSA: u128 = (1 << 96) - 1;

/// Parse a decimal literal of any length.
///
/// Accepts an optional sign, digits with at most one decimal point (either
/// side may be empty, not both) and an optional `e`/`E` exponent. Digits
/// beyond the engine's 28 fractional places are rounded half away from
/// zero; magnitudes of `10^29` and above fail with `Overflow`.
fn parse_literal(raw: &str) -> DecimalResult<Decimal> {
    let s = raw.trim();
    if s.is_empty() {
        return Err(DecimalError::invalid_operand(raw, "empty literal"));
    }

    // Split off exponent
    let (mantissa, exponent) = match s.find(['e', 'E']) {
        Some(pos) => {
            let exp: i64 = s[pos + 1..]
                .parse()
                .map_err(|_| DecimalError::invalid_operand(raw, "invalid exponent"))?;
            (&s[..pos], exp)
        },
        None => (s, 0),
    };

    let (negative, body) = match mantissa.as_bytes().first() {
        Some(b'-') => (true, &mantissa[1..]),
        Some(b'+') => (false, &mantissa[1..]),
        _ => (false, mantissa),
    };

    let (integer, fraction) = body.split_once('.').unwrap_or((body, ""));
    if integer.is_empty() && fraction.is_empty() {
        return Err(DecimalError::invalid_operand(raw, "no digits"));
    }
    if !integer.bytes().chain(fraction.bytes()).all(|b| b.is_ascii_digit()) {
        return Err(DecimalError::invalid_operand(raw, "invalid digit"));
    }

    let digits: Vec<u8> = integer.bytes().chain(fraction.bytes()).map(|b| b - b'0').collect();
    let exp10 = exponent.saturating_sub(fraction.len() as i64);

    from_digits(negative, &digits, exp10).inspect_err(|_| {
        tracing::trace!(literal = raw, "decimal literal exceeds engine magnitude");
    })
}

/// Build `±digits × 10^exp10`, rounding to the engine's capacity.
fn from_digits(negative: bool, digits: &[u8], exp10: i64) -> DecimalResult<Decimal> {
    let start = digits.iter().position(|&d| d != 0).unwrap_or(digits.len());
    let end = digits.iter().rposition(|&d| d != 0).map_or(start, |pos| pos + 1);
    let trailing_zeros = (digits.len() - end) as i64;
    let digits = &digits[start..end];
    if digits.is_empty() {
        return Ok(Decimal::ZERO);
    }

    let len = digits.len() as i64;
    let exp10 = exp10.saturating_add(trailing_zeros);
    // Power of ten of the leading digit
    let adjusted = exp10.saturating_add(len - 1);
    if adjusted > MAX_SCALE {
        return Err(DecimalError::Overflow);
    }
    if adjusted < -(MAX_SCALE + 1) {
        return Ok(Decimal::ZERO);
    }

    // Digits kept: no more than the engine's scale allows, nor its mantissa width
    let scale_excess = (-exp10 - MAX_SCALE).max(0);
    let mut keep = (len - scale_excess).min(MAX_DIGITS);

    loop {
        let (mantissa, exp) = round_digits(digits, keep.max(0) as usize, exp10);
        if mantissa == 0 {
            return Ok(Decimal::ZERO);
        }

        let (mantissa, scale) = if exp >= 0 {
            let factor = 10u128.checked_pow(exp as u32).ok_or(DecimalError::Overflow)?;
            (mantissa.checked_mul(factor).ok_or(DecimalError::Overflow)?, 0)
        } else {
            (mantissa, exp.unsigned_abs() as u32)
        };

        if mantissa > MAX_MANTISSA {
            if scale == 0 {
                return Err(DecimalError::Overflow);
            }
            keep -= 1;
            continue;
        }

        let signed = if negative { -(mantissa as i128) } else { mantissa as i128 };
        return Decimal::try_from_i128_with_scale(signed, scale).map_err(|_| DecimalError::Overflow);
    }
}

/// Keep the leading `keep` digits, rounding half away from zero on the
/// first dropped digit. Returns the mantissa and its power of ten.
fn round_digits(digits: &[u8], keep: usize, exp10: i64) -> (u128, i64) {
    let keep = keep.min(digits.len());
    let mut mantissa = digits[..keep]
        .iter()
        .fold(0u128, |acc, &d| acc * 10 + u128::from(d));
    if digits.get(keep).is_some_and(|&d| d >= 5) {
        mantissa += 1;
    }
    (mantissa, exp10 + (digits.len() - keep) as i64)
}

// ============================================================================
// Conversions
// ============================================================================

impl From<f64> for DecimalOperand<'_> {
    #[inline]
    fn from(value: f64) -> Self {
        DecimalOperand::Number(value)
    }
}

impl<'a> From<&'a str> for DecimalOperand<'a> {
    #[inline]
    fn from(value: &'a str) -> Self {
        DecimalOperand::Text(value)
    }
}

impl<'a> From<&'a String> for DecimalOperand<'a> {
    #[inline]
    fn from(value: &'a String) -> Self {
        DecimalOperand::Text(value.as_str())
    }
}

impl From<Decimal> for DecimalOperand<'_> {
    #[inline]
    fn from(value: Decimal) -> Self {
        DecimalOperand::Value(value)
    }
}

impl From<&Decimal> for DecimalOperand<'_> {
    #[inline]
    fn from(value: &Decimal) -> Self {
        DecimalOperand::Value(*value)
    }
}

macro_rules! impl_from_integer {
    ($($t:ty),*) => {
        $(
            impl From<$t> for DecimalOperand<'_> {
                #[inline]
                fn from(value: $t) -> Self {
                    DecimalOperand::Value(Decimal::from(value))
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
