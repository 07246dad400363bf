// ============================================================================
// Instant
// Millisecond-resolution point in time, always serialized in UTC
// ============================================================================

use super::errors::{TemporalError, TemporalResult};
use super::parse::parse_instant;
use chrono::{DateTime, FixedOffset, Offset, SubsecRound, TimeDelta, TimeZone, Utc};
use std::fmt;
use std::str::FromStr;

/// `0000-01-01T00:00:00.000Z` in milliseconds since the Unix epoch.
pub const MIN_TIMESTAMP_MILLIS: i64 = -62_167_219_200_000;

/// `9999-12-31T23:59:59.999Z` in milliseconds since the Unix epoch.
pub const MAX_TIMESTAMP_MILLIS: i64 = 253_402_300_799_999;

/// Serialization format: `YYYY-MM-DDTHH:mm:ss.sssZ`.
const ISO_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

/// An immutable point in time with millisecond resolution.
///
/// Internally a `DateTime<Utc>` with sub-millisecond digits cleared, limited
/// to the years 0000 through 9999 so the ISO form always has exactly four
/// year digits. Arithmetic returns new instants; nothing mutates in place.
///
/// # Example
/// ```
/// use exact_arith::temporal::Instant;
///
/// let t: Instant = "2024-01-01T02:30:00.000+02:00".parse().unwrap();
/// assert_eq!(t.to_iso_string(), "2024-01-01T00:30:00.000Z");
/// assert_eq!(t.timestamp_millis(), 1_704_069_000_000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Instant(DateTime<Utc>);

impl Instant {
    /// The current wall-clock time, truncated to the millisecond.
    pub fn now() -> Self {
        Self(Utc::now().trunc_subsecs(3))
    }

    /// Create from milliseconds since the Unix epoch.
    ///
    /// # Errors
    /// Returns `OutOfRange` outside years 0000..=9999.
    pub fn from_timestamp_millis(millis: i64) -> TemporalResult<Self> {
        if !(MIN_TIMESTAMP_MILLIS..=MAX_TIMESTAMP_MILLIS).contains(&millis) {
            tracing::trace!(millis, "rejected out-of-range instant");
            return Err(TemporalError::OutOfRange);
        }
        DateTime::from_timestamp_millis(millis)
            .map(Self)
            .ok_or(TemporalError::OutOfRange)
    }

    /// Create from a date-time in any timezone.
    ///
    /// Sub-millisecond digits are truncated toward the past.
    pub fn from_datetime<Tz: TimeZone>(datetime: &DateTime<Tz>) -> TemporalResult<Self> {
        Self::from_timestamp_millis(datetime.timestamp_millis())
    }

    /// Parse an ISO-8601 string, reading offset-less forms at `default_offset`.
    pub fn parse_with_offset(text: &str, default_offset: FixedOffset) -> TemporalResult<Self> {
        parse_instant(text, default_offset)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Milliseconds since the Unix epoch.
    #[inline]
    pub fn timestamp_millis(&self) -> i64 {
        self.0.timestamp_millis()
    }

    /// The underlying UTC date-time.
    #[inline]
    pub fn as_datetime(&self) -> DateTime<Utc> {
        self.0
    }

    /// `YYYY-MM-DDTHH:mm:ss.sssZ`, always in UTC.
    pub fn to_iso_string(&self) -> String {
        self.0.format(ISO_FORMAT).to_string()
    }

    // ========================================================================
    // Arithmetic
    // ========================================================================

    /// Shift by `seconds` (negative moves into the past).
    ///
    /// # Errors
    /// Returns `OutOfRange` if the result leaves the supported range.
    pub fn checked_add_seconds(self, seconds: i64) -> TemporalResult<Self> {
        let shifted = TimeDelta::try_seconds(seconds)
            .and_then(|delta| self.0.checked_add_signed(delta))
            .ok_or(TemporalError::OutOfRange)?;
        Self::from_datetime(&shifted)
    }

    /// Whole seconds from `other` to `self`, truncated toward zero.
    pub fn seconds_since(&self, other: &Instant) -> i64 {
        // Both operands are range-limited, so the millisecond delta cannot overflow
        (self.timestamp_millis() - other.timestamp_millis()) / 1000
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl fmt::Display for Instant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(ISO_FORMAT))
    }
}

impl FromStr for Instant {
    type Err = TemporalError;

    /// Parse with offset-less forms read as UTC.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_instant(s, Utc.fix())
    }
}

impl<Tz: TimeZone> TryFrom<DateTime<Tz>> for Instant {
    type Error = TemporalError;

    fn try_from(datetime: DateTime<Tz>) -> Result<Self, Self::Error> {
        Self::from_datetime(&datetime)
    }
}

impl From<Instant> for DateTime<Utc> {
    fn from(instant: Instant) -> Self {
        instant.0
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Instant {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Instant {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = <std::borrow::Cow<'de, str>>::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}
