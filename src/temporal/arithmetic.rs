// ============================================================================
// Temporal Arithmetic
// UTC-normalized instant facade over the chrono engine
// ============================================================================

use super::errors::{TemporalError, TemporalResult};
use super::instant::Instant;
use super::operand::InstantOperand;
use crate::config::{ConfigError, TemporalConfig};
use chrono::{FixedOffset, Offset, Utc};

/// Stateless facade for instant arithmetic.
///
/// Operands may be [`Instant`]s, chrono date-times, epoch milliseconds or
/// ISO-8601 strings at every position. Strings without an explicit offset are
/// read at the configured default offset, never the host's local timezone.
///
/// # Example
/// ```
/// use exact_arith::temporal::TemporalArithmetic;
///
/// let time = TemporalArithmetic::default();
///
/// let later = time.add_seconds("2024-01-01T00:00:00.000Z", 3600).unwrap();
/// assert_eq!(later.to_iso_string(), "2024-01-01T01:00:00.000Z");
///
/// let diff = time
///     .difference_in_seconds(later, "2024-01-01T00:00:00.000Z")
///     .unwrap();
/// assert_eq!(diff, 3600);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemporalArithmetic {
    config: TemporalConfig,
    default_offset: FixedOffset,
}

impl TemporalArithmetic {
    /// Create a facade with explicit engine configuration.
    ///
    /// # Errors
    /// Returns the validation error if the default offset is out of range.
    pub fn new(config: TemporalConfig) -> Result<Self, ConfigError> {
        let default_offset = config.default_offset()?;
        Ok(Self {
            config,
            default_offset,
        })
    }

    /// The configuration this facade was built with
    #[inline]
    pub fn config(&self) -> &TemporalConfig {
        &self.config
    }

    /// Normalize a single operand into an [`Instant`].
    pub fn parse<'a>(&self, value: impl Into<InstantOperand<'a>>) -> TemporalResult<Instant> {
        value.into().to_instant(self.default_offset)
    }

    // ========================================================================
    // Operations
    // ========================================================================

    /// The moment of the call, from the wall clock.
    ///
    /// Not deterministic: callers needing a fixed time pass it to the other
    /// operations instead.
    pub fn get_current_time(&self) -> Instant {
        Instant::now()
    }

    /// `instant` shifted forward by `seconds`; negative values move backward.
    pub fn add_seconds<'a>(
        &self,
        instant: impl Into<InstantOperand<'a>>,
        seconds: i64,
    ) -> TemporalResult<Instant> {
        let instant = self.parse(instant)?;
        instant.checked_add_seconds(seconds).inspect_err(|_| {
            tracing::trace!(%instant, seconds, "instant arithmetic left supported range");
        })
    }

    /// `instant` shifted backward by `seconds`; negative values move forward.
    pub fn minus_seconds<'a>(
        &self,
        instant: impl Into<InstantOperand<'a>>,
        seconds: i64,
    ) -> TemporalResult<Instant> {
        let negated = seconds.checked_neg().ok_or(TemporalError::OutOfRange)?;
        self.add_seconds(instant, negated)
    }

    /// `YYYY-MM-DDTHH:mm:ss.sssZ`, normalized to UTC.
    pub fn get_as_iso_string<'a>(
        &self,
        instant: impl Into<InstantOperand<'a>>,
    ) -> TemporalResult<String> {
        Ok(self.parse(instant)?.to_iso_string())
    }

    /// `a - b` in whole seconds, truncated toward zero.
    ///
    /// Positive when `a` is later than `b`.
    pub fn difference_in_seconds<'a, 'b>(
        &self,
        a: impl Into<InstantOperand<'a>>,
        b: impl Into<InstantOperand<'b>>,
    ) -> TemporalResult<i64> {
        let a = self.parse(a)?;
        let b = self.parse(b)?;
        Ok(a.seconds_since(&b))
    }
}

impl Default for TemporalArithmetic {
    fn default() -> Self {
        Self {
            config: TemporalConfig::utc(),
            default_offset: Utc.fix(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone};

    fn time() -> TemporalArithmetic {
        TemporalArithmetic::default()
    }

    fn instant(s: &str) -> Instant {
        s.parse().unwrap()
    }

    fn is_iso_millis_utc(s: &str) -> bool {
        let bytes = s.as_bytes();
        bytes.len() == 24
            && bytes.iter().enumerate().all(|(i, &b)| match i {
                4 | 7 => b == b'-',
                10 => b == b'T',
                13 | 16 => b == b':',
                19 => b == b'.',
                23 => b == b'Z',
                _ => b.is_ascii_digit(),
            })
    }

    #[test]
    fn test_new_validates_config() {
        assert_eq!(
            TemporalArithmetic::new(TemporalConfig::with_fixed_offset(100_000)),
            Err(ConfigError::InvalidOffset(100_000))
        );
        let time = TemporalArithmetic::new(TemporalConfig::with_fixed_offset(3600)).unwrap();
        assert_eq!(time.config().default_offset_seconds, 3600);
    }

    #[test]
    fn test_get_current_time() {
        let before = Instant::now();
        let result = time().get_current_time();
        let after = Instant::now();

        assert!(before <= result);
        assert!(result <= after);
    }

    #[test]
    fn test_add_seconds() {
        let base = instant("2024-01-01T00:00:00.000Z");
        assert_eq!(
            time().add_seconds(base, 30).unwrap().to_iso_string(),
            "2024-01-01T00:00:30.000Z"
        );
        assert_eq!(time().add_seconds(base, 0).unwrap(), base);
        assert_eq!(
            time().add_seconds(base, 3600).unwrap().to_iso_string(),
            "2024-01-01T01:00:00.000Z"
        );
        assert_eq!(
            time()
                .add_seconds("2024-01-01T00:01:00.000Z", -30)
                .unwrap()
                .to_iso_string(),
            "2024-01-01T00:00:30.000Z"
        );
        assert_eq!(
            time()
                .add_seconds("2024-01-01T00:00:00.000Z", 30)
                .unwrap()
                .to_iso_string(),
            "2024-01-01T00:00:30.000Z"
        );
    }

    #[test]
    fn test_minus_seconds() {
        let base = instant("2024-01-01T00:01:00.000Z");
        assert_eq!(
            time().minus_seconds(base, 30).unwrap().to_iso_string(),
            "2024-01-01T00:00:30.000Z"
        );
        assert_eq!(time().minus_seconds(base, 0).unwrap(), base);
        assert_eq!(
            time()
                .minus_seconds("2024-01-01T00:00:00.000Z", -30)
                .unwrap()
                .to_iso_string(),
            "2024-01-01T00:00:30.000Z"
        );
        assert_eq!(
            time()
                .minus_seconds("2024-01-01T01:00:00.000Z", 3600)
                .unwrap()
                .to_iso_string(),
            "2024-01-01T00:00:00.000Z"
        );
        assert_eq!(
            time().minus_seconds(base, i64::MIN),
            Err(TemporalError::OutOfRange)
        );
    }

    #[test]
    fn test_operands_not_mutated() {
        let base = instant("2024-01-01T00:00:00.000Z");
        let _ = time().add_seconds(base, 50).unwrap();
        assert_eq!(base.to_iso_string(), "2024-01-01T00:00:00.000Z");
    }

    #[test]
    fn test_get_as_iso_string() {
        assert_eq!(
            time()
                .get_as_iso_string(instant("2024-01-01T12:30:45.000Z"))
                .unwrap(),
            "2024-01-01T12:30:45.000Z"
        );
        assert_eq!(
            time().get_as_iso_string("2024-01-01T12:30:45.000Z").unwrap(),
            "2024-01-01T12:30:45.000Z"
        );

        let date_only = time().get_as_iso_string("2024-01-01").unwrap();
        assert!(is_iso_millis_utc(&date_only));
        assert!(time().parse(date_only.as_str()).is_ok());

        let now = time().get_as_iso_string(time().get_current_time()).unwrap();
        assert!(is_iso_millis_utc(&now));
    }

    #[test]
    fn test_iso_string_ignores_source_offset() {
        let offsets = [-12 * 3600, -5 * 3600 - 1800, 0, 5 * 3600 + 2700, 14 * 3600];
        for seconds in offsets {
            let offset = FixedOffset::east_opt(seconds).unwrap();
            let dt = offset.with_ymd_and_hms(2024, 7, 4, 12, 0, 0).unwrap();
            let iso = time().get_as_iso_string(dt).unwrap();
            assert!(is_iso_millis_utc(&iso), "{}", iso);
            assert_eq!(
                iso,
                dt.with_timezone(&Utc).format("%Y-%m-%dT%H:%M:%S.000Z").to_string()
            );
        }
    }

    #[test]
    fn test_configured_default_offset() {
        let berlin_winter =
            TemporalArithmetic::new(TemporalConfig::with_fixed_offset(3600)).unwrap();
        assert_eq!(
            berlin_winter.get_as_iso_string("2024-01-01").unwrap(),
            "2023-12-31T23:00:00.000Z"
        );
        // Explicit offsets still win
        assert_eq!(
            berlin_winter
                .get_as_iso_string("2024-01-01T00:00:00Z")
                .unwrap(),
            "2024-01-01T00:00:00.000Z"
        );
    }

    #[test]
    fn test_difference_in_seconds() {
        let t1 = instant("2024-01-01T00:01:00.000Z");
        let t2 = instant("2024-01-01T00:00:00.000Z");
        assert_eq!(time().difference_in_seconds(t1, t2).unwrap(), 60);
        assert_eq!(time().difference_in_seconds(t2, t1).unwrap(), -60);
        assert_eq!(time().difference_in_seconds(t2, t2).unwrap(), 0);
        assert_eq!(
            time()
                .difference_in_seconds("2024-01-02T00:00:00.000Z", "2024-01-01T00:00:00.000Z")
                .unwrap(),
            86400
        );
        assert_eq!(
            time()
                .difference_in_seconds("2024-01-01T00:01:00.000Z", "2024-01-01T00:00:00.000Z")
                .unwrap(),
            60
        );
        assert_eq!(
            time()
                .difference_in_seconds(t1, "2024-01-01T00:00:00.000Z")
                .unwrap(),
            60
        );
    }

    #[test]
    fn test_difference_truncates() {
        assert_eq!(
            time()
                .difference_in_seconds("2024-01-01T00:00:01.999Z", "2024-01-01T00:00:00.000Z")
                .unwrap(),
            1
        );
        assert_eq!(
            time()
                .difference_in_seconds("2024-01-01T00:00:00.000Z", "2024-01-01T00:00:01.999Z")
                .unwrap(),
            -1
        );
    }

    #[test]
    fn test_mixed_operand_types() {
        let epoch_millis = 1_704_067_200_000i64; // 2024-01-01T00:00:00Z
        let dt: DateTime<Utc> = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 30).unwrap();
        assert_eq!(time().difference_in_seconds(dt, epoch_millis).unwrap(), 30);
    }

    #[test]
    fn test_invalid_instant_propagates() {
        match time().add_seconds("not-a-date", 1) {
            Err(TemporalError::InvalidInstant { input, .. }) => assert_eq!(input, "not-a-date"),
            other => panic!("unexpected {:?}", other),
        }
        assert!(time().difference_in_seconds("2024-01-01", "garbage").is_err());
        assert!(time().get_as_iso_string("").is_err());
    }

    #[test]
    fn test_workflows() {
        let current = time().get_current_time();
        let future = time().add_seconds(current, 100).unwrap();
        assert_eq!(time().difference_in_seconds(future, current).unwrap(), 100);

        let past = time().minus_seconds(current, 100).unwrap();
        assert_eq!(time().difference_in_seconds(current, past).unwrap(), 100);

        let base = instant("2024-01-01T00:00:00.000Z");
        let added = time().add_seconds(base, 50).unwrap();
        let subtracted = time().minus_seconds(added, 50).unwrap();
        assert_eq!(subtracted.to_iso_string(), base.to_iso_string());

        let modified = time().add_seconds(current, 30).unwrap();
        let iso = time().get_as_iso_string(modified).unwrap();
        assert!(is_iso_millis_utc(&iso));
        assert_eq!(time().difference_in_seconds(modified, current).unwrap(), 30);
    }
}
