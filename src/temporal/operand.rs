// ============================================================================
// Instant Operand
// Tagged union of everything the temporal facade accepts as input
// ============================================================================

use super::errors::TemporalResult;
use super::instant::Instant;
use super::parse::parse_instant;
use chrono::{DateTime, FixedOffset, TimeZone, Utc};
use std::fmt;

/// An operand of the temporal facade.
///
/// Every operand position of [`TemporalArithmetic`](super::TemporalArithmetic)
/// accepts `impl Into<InstantOperand>`, so instants, chrono date-times, epoch
/// milliseconds and ISO strings mix freely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstantOperand<'a> {
    /// Already-normalized instant
    Instant(Instant),
    /// chrono date-time (any source offset, converted to UTC on entry)
    DateTime(DateTime<Utc>),
    /// Milliseconds since the Unix epoch
    EpochMillis(i64),
    /// ISO-8601 string, parsed on use
    Text(&'a str),
}

impl InstantOperand<'_> {
    /// Normalize the operand into an [`Instant`].
    ///
    /// Offset-less strings are read at `default_offset`.
    pub fn to_instant(self, default_offset: FixedOffset) -> TemporalResult<Instant> {
        match self {
            InstantOperand::Instant(instant) => Ok(instant),
            InstantOperand::DateTime(datetime) => Instant::from_datetime(&datetime),
            InstantOperand::EpochMillis(millis) => Instant::from_timestamp_millis(millis),
            InstantOperand::Text(text) => parse_instant(text, default_offset),
        }
    }
}

impl fmt::Display for InstantOperand<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InstantOperand::Instant(instant) => write!(f, "{}", instant),
            InstantOperand::DateTime(datetime) => write!(f, "{}", datetime.to_rfc3339()),
            InstantOperand::EpochMillis(millis) => write!(f, "{}ms", millis),
            InstantOperand::Text(text) => write!(f, "{}", text),
        }
    }
}

impl From<Instant> for InstantOperand<'_> {
    #[inline]
    fn from(value: Instant) -> Self {
        InstantOperand::Instant(value)
    }
}

impl From<&Instant> for InstantOperand<'_> {
    #[inline]
    fn from(value: &Instant) -> Self {
        InstantOperand::Instant(*value)
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for InstantOperand<'_> {
    #[inline]
    fn from(value: DateTime<Tz>) -> Self {
        InstantOperand::DateTime(value.with_timezone(&Utc))
    }
}

impl From<i64> for InstantOperand<'_> {
    #[inline]
    fn from(value: i64) -> Self {
        InstantOperand::EpochMillis(value)
    }
}

impl<'a> From<&'a str> for InstantOperand<'a> {
    #[inline]
    fn from(value: &'a str) -> Self {
        InstantOperand::Text(value)
    }
}

impl<'a> From<&'a String> for InstantOperand<'a> {
    #[inline]
    fn from(value: &'a String) -> Self {
        InstantOperand::Text(value.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::temporal::TemporalError;
    use chrono::Offset;

    #[test]
    fn test_every_variant_normalizes_to_same_instant() {
        let utc = Utc.fix();
        let expected: Instant = "2024-01-01T00:00:00.000Z".parse().unwrap();

        let operands: [InstantOperand; 5] = [
            expected.into(),
            (&expected).into(),
            expected.as_datetime().into(),
            1_704_067_200_000i64.into(),
            "2024-01-01T00:00:00.000Z".into(),
        ];

        for operand in operands {
            assert_eq!(operand.to_instant(utc).unwrap(), expected, "{}", operand);
        }
    }

    #[test]
    fn test_offset_datetime_converted_on_entry() {
        let tokyo = FixedOffset::east_opt(9 * 3600).unwrap();
        let dt = tokyo.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap();
        let operand = InstantOperand::from(dt);
        assert!(matches!(operand, InstantOperand::DateTime(_)));
        assert_eq!(
            operand.to_instant(Utc.fix()).unwrap().to_iso_string(),
            "2024-01-01T00:00:00.000Z"
        );
    }

    #[test]
    fn test_epoch_millis_out_of_range() {
        let operand = InstantOperand::from(i64::MAX);
        assert_eq!(operand.to_instant(Utc.fix()), Err(TemporalError::OutOfRange));
    }

    #[test]
    fn test_display() {
        assert_eq!(InstantOperand::from(42i64).to_string(), "42ms");
        assert_eq!(InstantOperand::from("2024-01-01").to_string(), "2024-01-01");
    }
}
