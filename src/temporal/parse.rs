// ============================================================================
// Instant Parsing
// ISO-8601 string forms accepted by the temporal facade
// ============================================================================

use super::errors::{TemporalError, TemporalResult};
use super::instant::Instant;
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime};

/// Date-times carrying a numeric offset without the RFC 3339 colon (`+0200`).
const OFFSET_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f%z", "%Y-%m-%d %H:%M:%S%.f%z"];

/// Date-times without any offset. `%.f` also matches an absent fraction.
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse an ISO-8601 instant.
///
/// Forms with an explicit offset (`Z`, `+02:00`, `+0200`) use it; date-times
/// and bare dates without one are read at `default_offset`.
///
/// # Errors
/// Returns `InvalidInstant` (with the RFC 3339 parser's message) if no form
/// matches, or `OutOfRange` if the instant lies outside years 0000..=9999.
pub(crate) fn parse_instant(raw: &str, default_offset: FixedOffset) -> TemporalResult<Instant> {
    let s = raw.trim();
    if s.is_empty() {
        return Err(TemporalError::invalid_instant(raw, "empty string"));
    }

    let rfc3339_error = match DateTime::parse_from_rfc3339(s) {
        Ok(datetime) => return Instant::from_datetime(&datetime),
        Err(err) => err,
    };

    if let Some(datetime) = OFFSET_FORMATS
        .iter()
        .find_map(|fmt| DateTime::parse_from_str(s, fmt).ok())
    {
        return Instant::from_datetime(&datetime);
    }

    let naive = NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(s, DATE_FORMAT)
                .ok()
                .map(|date| date.and_time(NaiveTime::MIN))
        });

    match naive {
        Some(naive) => {
            let datetime = naive
                .and_local_timezone(default_offset)
                .single()
                .ok_or(TemporalError::OutOfRange)?;
            Instant::from_datetime(&datetime)
        },
        None => {
            tracing::trace!(input = raw, error = %rfc3339_error, "rejected instant string");
            Err(TemporalError::invalid_instant(raw, rfc3339_error))
        },
    }
}
